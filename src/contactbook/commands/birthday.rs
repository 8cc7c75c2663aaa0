use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

/// Reports how many days remain until a contact's next birthday.
pub fn run(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book.lookup(name)?.clone();
    let days = record.days_to_birthday_from(today);

    let mut result = CmdResult::default();
    match days {
        Some(0) => result.add_message(CmdMessage::success(format!(
            "Today is {}'s birthday!",
            name
        ))),
        Some(n) => result.add_message(CmdMessage::info(format!(
            "{} day(s) until {}'s birthday.",
            n, name
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "{} has no birthday set.",
            name
        ))),
    }
    result.days_to_birthday = days;
    Ok(result.with_records(vec![record]))
}

pub fn set(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = book.lookup_mut(name)?;
    record.set_birthday(birthday)?;
    let record = record.clone();

    let mut result = CmdResult::default().with_records(vec![record]).modified();
    result.add_message(CmdMessage::success(format!(
        "Birthday for {} set to {}",
        name, birthday
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_days() {
        let mut book = AddressBook::new();
        book.add("mike", "1", Some("1990-07-14")).unwrap();

        let result = run(&book, "mike", day(2024, 7, 1)).unwrap();
        assert_eq!(result.days_to_birthday, Some(13));

        let result = run(&book, "mike", day(2024, 7, 14)).unwrap();
        assert_eq!(result.days_to_birthday, Some(0));
    }

    #[test]
    fn without_birthday() {
        let mut book = AddressBook::new();
        book.add("mike", "1", None).unwrap();
        let result = run(&book, "mike", day(2024, 7, 1)).unwrap();
        assert_eq!(result.days_to_birthday, None);
    }

    #[test]
    fn set_then_count() {
        let mut book = AddressBook::new();
        book.add("mike", "1", None).unwrap();
        let result = set(&mut book, "mike", "2001-01-02").unwrap();
        assert!(result.modified);

        let result = run(&book, "mike", day(2024, 1, 1)).unwrap();
        assert_eq!(result.days_to_birthday, Some(1));
    }

    #[test]
    fn set_invalid_date_keeps_book() {
        let mut book = AddressBook::new();
        book.add("mike", "1", Some("1990-07-14")).unwrap();
        assert!(matches!(
            set(&mut book, "mike", "1990-02-30"),
            Err(ContactError::InvalidFormat(_))
        ));
        assert_eq!(
            book.lookup("mike").unwrap().birthday.unwrap().to_string(),
            "1990-07-14"
        );
    }
}
