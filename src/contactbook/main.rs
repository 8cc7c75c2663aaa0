use clap::Parser;
use colored::*;
use contactbook::api::{CmdMessage, ConfigAction, ContactApi, MessageLevel, PageInfo, SearchHit};
use contactbook::commands::{CmdResult, Request};
use contactbook::config::BookConfig;
use contactbook::error::Result;
use contactbook::model::Record;
use contactbook::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ContactApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            phone,
            birthday,
        }) => {
            let result = ctx.api.add(&name, &phone, birthday.as_deref())?;
            print_messages(&result.messages);
        }
        Some(Commands::Change {
            name,
            old_phone,
            new_phone,
        }) => {
            let result = ctx.api.change_phone(&name, &old_phone, &new_phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::Phone { name }) => {
            let result = ctx.api.phone(&name)?;
            print_phones(&result.records);
        }
        Some(Commands::Show { page_size, page }) => {
            let result = ctx.api.show(page_size, page)?;
            print_page(&result);
        }
        Some(Commands::Search { term }) => {
            let result = ctx.api.search(&term)?;
            print_hits(&result.hits);
            print_messages(&result.messages);
        }
        Some(Commands::Birthday { name }) => {
            let result = ctx.api.birthday(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::SetBirthday { name, birthday }) => {
            let result = ctx.api.set_birthday(&name, &birthday)?;
            print_messages(&result.messages);
        }
        Some(Commands::AddPhone { name, phone }) => {
            let result = ctx.api.add_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::RemovePhone { name, phone }) => {
            let result = ctx.api.remove_phone(&name, &phone)?;
            print_messages(&result.messages);
        }
        Some(Commands::Remove { name }) => {
            let result = ctx.api.remove_contact(&name)?;
            print_messages(&result.messages);
        }
        Some(Commands::Exec { words }) => handle_exec(&mut ctx, &words)?,
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value)?,
        None => {
            let result = ctx.api.show(None, 1)?;
            print_page(&result);
        }
    }

    if ctx.api.save_if_modified()? {
        debug!(path = %ctx.api.store().path().display(), "address book saved");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "contactbook", "contactbook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let config = BookConfig::load(&data_dir)?;
    let book_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&data_dir),
    };
    debug!(path = %book_path.display(), "opening address book");

    let api = ContactApi::open(FileStore::new(book_path), config, data_dir)?;
    debug!(contacts = api.book().len(), "address book loaded");

    Ok(AppContext { api })
}

fn handle_exec(ctx: &mut AppContext, words: &[String]) -> Result<()> {
    let request = Request::parse(words)?;
    debug!(?request, "executing request");

    let result = ctx.api.execute(request.clone())?;
    match request {
        Request::Phone { .. } => print_phones(&result.records),
        // print_page reports the messages itself
        Request::Show { .. } => {
            print_page(&result);
            return Ok(());
        }
        Request::Search { .. } => print_hits(&result.hits),
        _ => {}
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        for key in BookConfig::keys() {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn join_phones<T: ToString>(phones: &[T]) -> String {
    phones
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_phones(records: &[Record]) {
    for record in records {
        if record.phones.is_empty() {
            println!("{} has no phone numbers.", record.name().to_string().bold());
        } else {
            println!(
                "{}: {}",
                record.name().to_string().bold(),
                join_phones(&record.phones)
            );
        }
    }
}

fn print_hits(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}: {}", hit.name.to_string().bold(), join_phones(&hit.phones));
    }
}

const NAME_MIN_WIDTH: usize = 8;

fn print_page(result: &CmdResult) {
    print_messages(&result.messages);
    if result.records.is_empty() {
        return;
    }

    let name_width = result
        .records
        .iter()
        .map(|r| r.name().as_str().width())
        .max()
        .unwrap_or(0)
        .max(NAME_MIN_WIDTH);

    for record in &result.records {
        let name = record.name().as_str();
        let padding = name_width.saturating_sub(name.width());
        let birthday = record
            .birthday
            .map(|b| format!("  {}", b).dimmed().to_string())
            .unwrap_or_default();
        println!(
            "{}{}  {}{}",
            name.bold(),
            " ".repeat(padding),
            join_phones(&record.phones),
            birthday
        );
    }

    if let Some(PageInfo { number, count, .. }) = result.page {
        if count > 1 {
            println!("{}", format!("page {} of {}", number, count).dimmed());
        }
    }
}
