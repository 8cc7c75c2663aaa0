use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: AddressBook::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("contact{}", i + 1);
                let phone = format!("{}", 5550000 + i);
                self.book.add(&name, &phone, None).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, birthday: Option<&str>) -> Self {
            self.book.add(name, phone, birthday).unwrap();
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store.save(&self.book).unwrap();
            self.store.saves = 0;
            self.store
        }
    }
}
