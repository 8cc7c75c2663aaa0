use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let hits = book.search(term);
    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'.", term)));
    }
    Ok(result.with_hits(hits))
}
