use crate::error::Result;
use crate::field::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One contact: a unique name, its phones in insertion order and an
/// optional birthday.
///
/// The name is fixed at construction: it is the record's key inside an
/// [`AddressBook`](crate::book::AddressBook), so it has a getter but no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub phones: Vec<Phone>,
}

impl Record {
    pub fn new(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            birthday,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces every phone equal to `old` with `new`, returning how many
    /// were replaced. `new` is validated before anything is touched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize> {
        let replacement = Phone::parse(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// Removes every phone equal to `raw`, returning how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's
    /// month/day. A birthday falling on `today` is 0 days away, not a year.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday?.date();
        let mut next = occurrence_in(today.year(), born)?;
        if next < today {
            next = occurrence_in(today.year() + 1, born)?;
        }
        Some((next - today).num_days())
    }
}

/// The birthday's month/day in `year`. 29 February maps to 28 February in
/// non-leap years.
fn occurrence_in(year: i32, born: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), born.day() - 1))
}
