//! # Address Book
//!
//! The [`AddressBook`] is the in-memory collection of [`Record`]s, keyed by
//! contact name. Records keep the order in which they were added; that order
//! drives listing, search results and pagination, so the same book always
//! pages the same way.
//!
//! Every mutating operation validates its input before touching the book: a
//! failed `add` inserts nothing and a failed `edit_phone` changes nothing.
//!
//! ## Pagination
//!
//! [`AddressBook::paginate`] takes a snapshot of the records and returns a
//! [`Pages`] value that owns it. Changing the book afterwards does not affect
//! pages already handed out; calling `paginate` again sees the new state.

use crate::error::{ContactError, Result};
use crate::field::{Birthday, Name, Phone};
use crate::model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A search match: the contact's name and its phones at the time of search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: Name,
    pub phones: Vec<Phone>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from records in order, rejecting repeated names.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut book = Self::new();
        for record in records {
            book.insert(record)?;
        }
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name().as_str()).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Adds a new contact with one phone and an optional birthday.
    pub fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> Result<&Record> {
        if self.contains(name) {
            return Err(ContactError::DuplicateContact(name.to_string()));
        }

        let name = Name::parse(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;
        let mut record = Record::new(name, birthday);
        record.add_phone(phone)?;

        self.records.push(record);
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Inserts an already built record, keyed by its own name.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.contains(record.name().as_str()) {
            return Err(ContactError::DuplicateContact(record.name().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<usize> {
        self.lookup_mut(name)?.edit_phone(old, new)
    }

    pub fn lookup(&self, name: &str) -> Result<&Record> {
        self.position(name)
            .map(|i| &self.records[i])
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut Record> {
        match self.position(name) {
            Some(i) => Ok(&mut self.records[i]),
            None => Err(ContactError::NotFound(name.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.position(name)
            .map(|i| self.records.remove(i))
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    /// Contacts whose name, or any of whose phones, contains `term`.
    ///
    /// Matching is a case-sensitive substring test; results follow insertion
    /// order.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        self.records
            .iter()
            .filter(|r| {
                r.name().as_str().contains(term) || r.phones.iter().any(|p| p.as_str().contains(term))
            })
            .map(|r| SearchHit {
                name: r.name().clone(),
                phones: r.phones.clone(),
            })
            .collect()
    }

    /// Splits a snapshot of the records into pages of `page_size`.
    pub fn paginate(&self, page_size: usize) -> Result<Pages> {
        if page_size == 0 {
            return Err(ContactError::InvalidFormat(
                "Page size must be at least 1.".to_string(),
            ));
        }
        Ok(Pages {
            records: self.records.clone(),
            page_size,
            cursor: 0,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// Consecutive, order-preserving chunks of a book snapshot.
///
/// Iterating yields each page once; [`Pages::page`] fetches a page by its
/// 1-based number without consuming anything.
#[derive(Debug, Clone)]
pub struct Pages {
    records: Vec<Record>,
    page_size: usize,
    cursor: usize,
}

impl Pages {
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn page(&self, number: usize) -> Result<&[Record]> {
        let pages = self.page_count();
        if number == 0 || number > pages {
            return Err(ContactError::PageNotFound {
                page: number,
                pages,
            });
        }
        let start = (number - 1) * self.page_size;
        let end = (start + self.page_size).min(self.records.len());
        Ok(&self.records[start..end])
    }
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }
        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.records.len() - self.cursor).div_ceil(self.page_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Snapshot;

    fn book_with(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add(&format!("contact{}", i), &format!("{}", 1000 + i), None)
                .unwrap();
        }
        book
    }

    fn phones_of(book: &AddressBook, name: &str) -> Vec<String> {
        book.lookup(name)
            .unwrap()
            .phones
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn add_inserts_record_keyed_by_name() {
        let mut book = AddressBook::new();
        book.add("mike", "12345", Some("1990-07-14")).unwrap();

        let r = book.lookup("mike").unwrap();
        assert_eq!(r.name().as_str(), "mike");
        assert_eq!(phones_of(&book, "mike"), vec!["12345"]);
        assert_eq!(r.birthday.unwrap().to_string(), "1990-07-14");
    }

    #[test]
    fn add_duplicate_keeps_first_record() {
        let mut book = AddressBook::new();
        book.add("mike", "12345", None).unwrap();

        let err = book.add("mike", "99999", None).unwrap_err();
        assert!(matches!(err, ContactError::DuplicateContact(ref n) if n == "mike"));
        assert_eq!(phones_of(&book, "mike"), vec!["12345"]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_invalid_input_inserts_nothing() {
        let mut book = AddressBook::new();
        assert!(matches!(
            book.add("mike", "12a", None),
            Err(ContactError::InvalidFormat(_))
        ));
        assert!(matches!(
            book.add("mike", "123", Some("2023-02-30")),
            Err(ContactError::InvalidFormat(_))
        ));
        assert!(matches!(
            book.add("", "123", None),
            Err(ContactError::InvalidFormat(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn edit_phone_missing_contact() {
        let mut book = AddressBook::new();
        assert!(matches!(
            book.edit_phone("carol", "1", "2"),
            Err(ContactError::NotFound(_))
        ));
    }

    #[test]
    fn edit_phone_replaces_matches() {
        let mut book = AddressBook::new();
        book.add("mike", "12345", None).unwrap();
        book.edit_phone("mike", "12345", "99999").unwrap();
        assert_eq!(phones_of(&book, "mike"), vec!["99999"]);

        book.edit_phone("mike", "00000", "11111").unwrap();
        assert_eq!(phones_of(&book, "mike"), vec!["99999"]);
    }

    #[test]
    fn lookup_missing_is_not_found() {
        let book = AddressBook::new();
        assert!(matches!(
            book.lookup("carol"),
            Err(ContactError::NotFound(ref n)) if n == "carol"
        ));
    }

    #[test]
    fn remove_drops_the_key() {
        let mut book = book_with(3);
        let removed = book.remove("contact1").unwrap();
        assert_eq!(removed.name().as_str(), "contact1");
        assert_eq!(book.names(), vec!["contact0", "contact2"]);
        assert!(book.remove("contact1").is_err());

        book.add("contact1", "1", None).unwrap();
        assert_eq!(book.names(), vec!["contact0", "contact2", "contact1"]);
    }

    #[test]
    fn edits_through_lookup_mut_keep_the_key_set() {
        let mut book = book_with(2);
        let record = book.lookup_mut("contact0").unwrap();
        record.add_phone("777").unwrap();
        record.set_birthday("1990-07-14").unwrap();
        record.phones.clear();
        assert_eq!(book.names(), vec!["contact0", "contact1"]);

        let reloaded = Snapshot::of(&book).into_book().unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn from_records_rejects_repeated_names() {
        let r = Record::new(Name::parse("mike").unwrap(), None);
        let err = AddressBook::from_records(vec![r.clone(), r]).unwrap_err();
        assert!(matches!(err, ContactError::DuplicateContact(_)));
    }

    #[test]
    fn search_by_name_and_phone() {
        let mut book = AddressBook::new();
        book.add("Annabelle", "111", None).unwrap();
        book.add("bob", "4155551234", None).unwrap();
        book.add("carol", "222", None).unwrap();

        let hits = book.search("Anna");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_str(), "Annabelle");

        let hits = book.search("5551");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_str(), "bob");
        assert_eq!(hits[0].phones[0].as_str(), "4155551234");

        assert!(book.search("zzz").is_empty());
    }

    #[test]
    fn search_keeps_insertion_order_and_is_a_snapshot() {
        let mut book = AddressBook::new();
        book.add("zed", "5", None).unwrap();
        book.add("amy", "15", None).unwrap();
        book.add("kim", "7", None).unwrap();

        let hits = book.search("5");
        book.edit_phone("zed", "5", "9").unwrap();

        let names: Vec<_> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
        assert_eq!(hits[0].phones[0].as_str(), "5");
    }

    #[test]
    fn search_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.add("Annabelle", "111", None).unwrap();
        assert!(book.search("anna").is_empty());
    }

    #[test]
    fn paginate_rejects_zero_page_size() {
        let book = book_with(3);
        assert!(matches!(
            book.paginate(0),
            Err(ContactError::InvalidFormat(_))
        ));
    }

    #[test]
    fn paginate_covers_every_record_once_in_order() {
        for count in 0..12 {
            let book = book_with(count);
            for page_size in 1..=count + 2 {
                let pages = book.paginate(page_size).unwrap();
                assert_eq!(pages.page_count(), count.div_ceil(page_size));
                assert_eq!(pages.len(), pages.page_count());

                let chunks: Vec<Vec<Record>> = pages.collect();
                assert_eq!(chunks.len(), count.div_ceil(page_size));
                for (i, chunk) in chunks.iter().enumerate() {
                    if i + 1 < chunks.len() {
                        assert_eq!(chunk.len(), page_size);
                    } else {
                        assert!(!chunk.is_empty() && chunk.len() <= page_size);
                    }
                }

                let flattened: Vec<&str> = chunks
                    .iter()
                    .flatten()
                    .map(|r| r.name().as_str())
                    .collect();
                assert_eq!(flattened, book.names());
            }
        }
    }

    #[test]
    fn page_lookup_by_number() {
        let book = book_with(5);
        let pages = book.paginate(2).unwrap();

        let names = |records: &[Record]| -> Vec<String> {
            records.iter().map(|r| r.name().to_string()).collect()
        };
        assert_eq!(names(pages.page(1).unwrap()), vec!["contact0", "contact1"]);
        assert_eq!(names(pages.page(3).unwrap()), vec!["contact4"]);

        assert!(matches!(
            pages.page(4),
            Err(ContactError::PageNotFound { page: 4, pages: 3 })
        ));
        assert!(matches!(
            pages.page(0),
            Err(ContactError::PageNotFound { .. })
        ));
    }

    #[test]
    fn pages_are_detached_from_later_changes() {
        let mut book = book_with(2);
        let pages = book.paginate(10).unwrap();
        book.add("late", "1", None).unwrap();

        assert_eq!(pages.page(1).unwrap().len(), 2);
        assert_eq!(book.paginate(10).unwrap().page(1).unwrap().len(), 3);
    }

    #[test]
    fn pages_restart_from_a_clone() {
        let book = book_with(3);
        let pages = book.paginate(2).unwrap();
        let first_pass: Vec<_> = pages.clone().collect();
        let second_pass: Vec<_> = pages.collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn empty_book_has_no_pages() {
        let pages = AddressBook::new().paginate(10).unwrap();
        assert_eq!(pages.page_count(), 0);
        assert!(matches!(
            pages.page(1),
            Err(ContactError::PageNotFound { page: 1, pages: 0 })
        ));
    }
}
