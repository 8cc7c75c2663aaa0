use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Replaces `old` with `new` in a contact's phones. A phone that does not
/// match is not an error; the result is simply unmodified.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let replaced = book.edit_phone(name, old, new)?;
    let record = book.lookup(name)?.clone();

    let mut result = CmdResult::default().with_records(vec![record]);
    if replaced == 0 {
        result.add_message(CmdMessage::info(format!(
            "{} has no phone {}, nothing changed.",
            name, old
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Phone number updated for {}: {} -> {}",
        name, old, new
    )));
    Ok(result.modified())
}
