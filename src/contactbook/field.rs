//! Validated contact fields.
//!
//! A contact is made of three kinds of scalar values, each a newtype whose
//! inner value is private:
//!
//! - [`Name`]: any non-empty text
//! - [`Phone`]: one or more ASCII decimal digits
//! - [`Birthday`]: a real calendar date written as `YYYY-MM-DD`
//!
//! The only way to obtain one is through its validating `parse` (or the
//! equivalent `FromStr` / `TryFrom<String>`), so a field that exists is a
//! field that passed validation. Serde goes through the same path, which means
//! a hand-edited data file cannot load an invalid phone or date.

use crate::error::{ContactError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual form of a birthday, both for parsing and display.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validates a contact name.
    ///
    /// ```
    /// use contactbook::field::Name;
    ///
    /// assert!(Name::parse("mike").is_ok());
    /// assert!(Name::parse("Mary Ann").is_ok());
    /// assert!(Name::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(ContactError::InvalidFormat(
                "Name cannot be empty.".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validates a phone number: digits only, at least one of them.
    ///
    /// ```
    /// use contactbook::field::Phone;
    ///
    /// assert!(Phone::parse("4155551234").is_ok());
    /// assert!(Phone::parse("415-555").is_err());
    /// assert!(Phone::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContactError::InvalidFormat(format!(
                "Phone number must contain only digits, got '{}'.",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Validates a birthday written as `YYYY-MM-DD`.
    ///
    /// ```
    /// use contactbook::field::Birthday;
    ///
    /// assert!(Birthday::parse("1990-07-14").is_ok());
    /// assert!(Birthday::parse("2024-02-29").is_ok());
    /// assert!(Birthday::parse("2023-02-30").is_err());
    /// assert!(Birthday::parse("14/07/1990").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || {
            ContactError::InvalidFormat(format!(
                "Invalid date '{}'. Please use YYYY-MM-DD.",
                raw
            ))
        };
        // chrono's %Y takes a sign and any number of digits
        if !has_four_digit_year(raw) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn has_four_digit_year(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Name {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Name {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
