use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let removed = book.lookup_mut(name)?.remove_phone(phone);
    let record = book.lookup(name)?.clone();

    let mut result = CmdResult::default().with_records(vec![record]);
    if removed == 0 {
        result.add_message(CmdMessage::info(format!(
            "{} has no phone {}, nothing removed.",
            name, phone
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Removed phone {} from {}",
        phone, name
    )));
    Ok(result.modified())
}

pub fn contact(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.remove(name)?;

    let mut result = CmdResult::default().with_records(vec![record]).modified();
    result.add_message(CmdMessage::success(format!("Contact removed: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;

    #[test]
    fn removes_every_matching_phone() {
        let mut book = AddressBook::new();
        book.add("mike", "111", None).unwrap();
        let record = book.lookup_mut("mike").unwrap();
        record.add_phone("222").unwrap();
        record.add_phone("111").unwrap();

        let result = phone(&mut book, "mike", "111").unwrap();
        assert!(result.modified);
        let left: Vec<_> = book
            .lookup("mike")
            .unwrap()
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(left, vec!["222"]);
    }

    #[test]
    fn unknown_phone_is_noop() {
        let mut book = AddressBook::new();
        book.add("mike", "111", None).unwrap();
        let result = phone(&mut book, "mike", "999").unwrap();
        assert!(!result.modified);
    }

    #[test]
    fn removes_contact() {
        let mut book = AddressBook::new();
        book.add("mike", "111", None).unwrap();
        book.add("carol", "222", None).unwrap();

        contact(&mut book, "mike").unwrap();
        assert_eq!(book.names(), vec!["carol"]);
        assert!(matches!(
            contact(&mut book, "mike"),
            Err(ContactError::NotFound(_))
        ));
    }
}
