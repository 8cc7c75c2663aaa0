use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.lookup(name)?.clone();
    Ok(CmdResult::default().with_records(vec![record]))
}
