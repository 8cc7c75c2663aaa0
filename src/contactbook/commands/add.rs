use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let record = book.add(name, phone, birthday)?.clone();

    let mut result = CmdResult::default().with_records(vec![record]).modified();
    result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    Ok(result)
}

/// Appends another phone to an existing contact.
pub fn phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.lookup_mut(name)?;
    record.add_phone(phone)?;
    let record = record.clone();

    let mut result = CmdResult::default().with_records(vec![record]).modified();
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        phone, name
    )));
    Ok(result)
}
