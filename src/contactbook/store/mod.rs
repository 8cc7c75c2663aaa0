//! # Storage Layer
//!
//! The [`BookStore`] trait abstracts where a session's [`AddressBook`] comes
//! from and goes to. A store never holds on to the book: it reads a full
//! snapshot when asked and writes a full snapshot when asked.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON snapshot file
//!   (`addressbook.dat` by default), replaced atomically on every save.
//! - [`memory::InMemoryStore`]: Keeps the snapshot in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "mike", "birthday": "1990-07-14", "phones": ["12345"] },
//!     { "name": "carol", "birthday": null, "phones": [] }
//!   ]
//! }
//! ```
//!
//! Records are written in book order, so reloading preserves pagination.
//! Every field goes through its validator on load.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const DEFAULT_FILENAME: &str = "addressbook.dat";

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Read the whole book. A store with nothing saved yet yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with this one.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

/// On-disk shape of a book.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl Snapshot {
    pub fn of(book: &AddressBook) -> Self {
        Self {
            contacts: book.records().to_vec(),
        }
    }

    pub fn into_book(self) -> Result<AddressBook> {
        AddressBook::from_records(self.contacts)
    }
}
