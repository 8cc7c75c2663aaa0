use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version = env!("CONTACTBOOK_VERSION"))]
#[command(about = "Keep your contacts' phones and birthdays in one file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding config.json and the default address book
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact with its first phone number
    #[command(alias = "a")]
    Add {
        name: String,

        /// Digits only
        phone: String,

        /// Birthday as YYYY-MM-DD
        birthday: Option<String>,
    },

    /// Replace a contact's phone number
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phone numbers
    #[command(alias = "p")]
    Phone { name: String },

    /// List contacts one page at a time
    #[command(aliases = ["all", "ls"])]
    Show {
        /// Contacts per page (defaults to the configured page-size)
        page_size: Option<usize>,

        /// Page number, starting at 1
        #[arg(default_value_t = 1)]
        page: usize,
    },

    /// Find contacts by part of their name or phone number
    #[command(alias = "s")]
    Search { term: String },

    /// Days until a contact's next birthday
    Birthday { name: String },

    /// Set or replace a contact's birthday
    SetBirthday { name: String, birthday: String },

    /// Attach another phone number to a contact
    AddPhone { name: String, phone: String },

    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },

    /// Remove a contact
    #[command(alias = "rm")]
    Remove { name: String },

    /// Run one command written as words, e.g. `exec add mike 12345`
    Exec {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
