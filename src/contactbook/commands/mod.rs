use crate::book::SearchHit;
use crate::config::BookConfig;
use crate::error::{ContactError, Result};
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod phone;
pub mod remove;
pub mod search;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Position of a listed page within the whole book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: usize,
    pub count: usize,
    pub size: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub hits: Vec<SearchHit>,
    pub page: Option<PageInfo>,
    pub days_to_birthday: Option<i64>,
    pub config: Option<BookConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when the command changed the book and it needs saving.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// A request built from already-split words, e.g. `["add", "mike", "12345"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    Phone {
        name: String,
    },
    Show {
        page_size: Option<usize>,
        page: usize,
    },
    Search {
        term: String,
    },
    Birthday {
        name: String,
    },
}

impl Request {
    /// Builds a request from its words. The verb is case-insensitive.
    ///
    /// | verb       | arguments                    |
    /// |------------|------------------------------|
    /// | `add`      | NAME PHONE \[BIRTHDAY\]      |
    /// | `change`   | NAME OLD_PHONE NEW_PHONE     |
    /// | `phone`    | NAME                         |
    /// | `show`     | \[all\] \[PAGE_SIZE\] \[PAGE\] |
    /// | `search`   | TERM                         |
    /// | `birthday` | NAME                         |
    pub fn parse<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        let (verb, args) = match words.split_first() {
            Some((verb, args)) => (verb.to_lowercase(), args),
            None => {
                return Err(ContactError::InsufficientInput(
                    "no command given".to_string(),
                ))
            }
        };

        match verb.as_str() {
            "add" => {
                arity(&verb, args, 2, 3)?;
                Ok(Request::Add {
                    name: args[0].to_string(),
                    phone: args[1].to_string(),
                    birthday: args.get(2).map(|b| b.to_string()),
                })
            }
            "change" => {
                arity(&verb, args, 3, 3)?;
                Ok(Request::Change {
                    name: args[0].to_string(),
                    old: args[1].to_string(),
                    new: args[2].to_string(),
                })
            }
            "phone" => {
                arity(&verb, args, 1, 1)?;
                Ok(Request::Phone {
                    name: args[0].to_string(),
                })
            }
            "show" | "all" => {
                let args = match args.first() {
                    Some(first) if first.eq_ignore_ascii_case("all") => &args[1..],
                    _ => args,
                };
                arity(&verb, args, 0, 2)?;
                let page_size = args.first().map(|s| parse_number(s)).transpose()?;
                let page = args.get(1).map(|s| parse_number(s)).transpose()?;
                Ok(Request::Show {
                    page_size,
                    page: page.unwrap_or(1),
                })
            }
            "search" => {
                arity(&verb, args, 1, 1)?;
                Ok(Request::Search {
                    term: args[0].to_string(),
                })
            }
            "birthday" => {
                arity(&verb, args, 1, 1)?;
                Ok(Request::Birthday {
                    name: args[0].to_string(),
                })
            }
            _ => Err(ContactError::UnknownCommand(verb.to_string())),
        }
    }
}

fn arity(verb: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min {
        return Err(ContactError::InsufficientInput(format!(
            "'{}' needs at least {} argument(s), got {}",
            verb,
            min,
            args.len()
        )));
    }
    if args.len() > max {
        return Err(ContactError::InvalidFormat(format!(
            "'{}' takes at most {} argument(s), got {}",
            verb,
            max,
            args.len()
        )));
    }
    Ok(())
}

fn parse_number(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| ContactError::InvalidFormat(format!("'{}' is not a number", s)))
}
