//! # API Facade
//!
//! [`ContactApi`] is the single entry point a client (the CLI, or anything
//! else) uses to work with a contact book. It owns one session's state:
//!
//! - the [`BookStore`] the book came from and goes back to
//! - the in-memory [`AddressBook`]
//! - the directory holding `config.json`
//!
//! A session is `open` (load), any number of operations, then `save`.
//! Operations dispatch to `commands/*.rs` and return `Result<CmdResult>`; the
//! facade records whether the book changed so `save_if_modified` can skip
//! a write for read-only sessions.
//!
//! ## Generic Over BookStore
//!
//! - Production: `ContactApi<FileStore>`
//! - Testing: `ContactApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdResult, Request};
use crate::config::BookConfig;
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub use crate::book::{Pages, SearchHit};
pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, PageInfo};

pub struct ContactApi<S: BookStore> {
    store: S,
    book: AddressBook,
    config: BookConfig,
    config_dir: PathBuf,
    modified: bool,
}

impl<S: BookStore> ContactApi<S> {
    /// Starts a session: loads the book from `store`.
    pub fn open(store: S, config: BookConfig, config_dir: impl Into<PathBuf>) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            config,
            config_dir: config_dir.into(),
            modified: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone, birthday)?;
        Ok(self.track(result))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::add::phone(&mut self.book, name, phone)?;
        Ok(self.track(result))
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, name, old, new)?;
        Ok(self.track(result))
    }

    pub fn phone(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    /// One page of the book; `page_size` falls back to the configured size.
    pub fn show(&self, page_size: Option<usize>, page: usize) -> Result<CmdResult> {
        let page_size = page_size.unwrap_or(self.config.page_size);
        commands::show::run(&self.book, page_size, page)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, term)
    }

    pub fn birthday(&self, name: &str) -> Result<CmdResult> {
        self.birthday_on(name, Local::now().date_naive())
    }

    pub fn birthday_on(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::run(&self.book, name, today)
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        let result = commands::birthday::set(&mut self.book, name, birthday)?;
        Ok(self.track(result))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::remove::phone(&mut self.book, name, phone)?;
        Ok(self.track(result))
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::remove::contact(&mut self.book, name)?;
        Ok(self.track(result))
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Runs a request built by [`Request::parse`].
    pub fn execute(&mut self, request: Request) -> Result<CmdResult> {
        match request {
            Request::Add {
                name,
                phone,
                birthday,
            } => self.add(&name, &phone, birthday.as_deref()),
            Request::Change { name, old, new } => self.change_phone(&name, &old, &new),
            Request::Phone { name } => self.phone(&name),
            Request::Show { page_size, page } => self.show(page_size, page),
            Request::Search { term } => self.search(&term),
            Request::Birthday { name } => self.birthday(&name),
        }
    }

    /// Discards in-memory changes and reloads the book from the store.
    pub fn load(&mut self) -> Result<()> {
        self.book = self.store.load()?;
        self.modified = false;
        Ok(())
    }

    /// Writes the whole book to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)?;
        self.modified = false;
        Ok(())
    }

    /// Saves only when an operation changed the book. Returns whether it did.
    pub fn save_if_modified(&mut self) -> Result<bool> {
        if !self.modified {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn track(&mut self, result: CmdResult) -> CmdResult {
        self.modified |= result.modified;
        result
    }
}
