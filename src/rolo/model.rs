use crate::error::{Result, RoloError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Maximum number of phone numbers a single contact can hold.
pub const MAX_PHONES: usize = 3;

/// A contact's name. Non-empty, compared and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(RoloError::InvalidName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Name::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number: exactly [`PHONE_DIGITS`] ASCII digits, kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        if number.len() != PHONE_DIGITS || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(RoloError::InvalidPhone(number));
        }
        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Phone::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday, parsed from strict `DD.MM.YYYY` and rendered the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        parse_birthday(value)
            .map(Self)
            .ok_or_else(|| RoloError::InvalidBirthday(value.to_string()))
    }

    /// The calendar day this birthday falls on in `year`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years.
    pub fn on_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("Mar 1 exists in every year")
    }

    /// The next occurrence on or after `today`. A birthday falling on
    /// `today` counts as today, not next year.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.on_year(today.year());
        if this_year < today {
            self.on_year(today.year() + 1)
        } else {
            this_year
        }
    }
}

impl TryFrom<String> for Birthday {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> String {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

/// Strict `DD.MM.YYYY`: two digits, two digits, four digits, dots between.
fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('.');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return None;
    }
    if !day
        .chars()
        .chain(month.chars())
        .chain(year.chars())
        .all(|c| c.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// One contact: a name, up to [`MAX_PHONES`] unique phones, and an
/// optional birthday that can be set once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// The raw snapshot shape. Field formats are checked by the newtypes;
/// record-level invariants are checked when this converts to [`Record`].
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = RoloError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        if stored.phones.len() > MAX_PHONES {
            return Err(RoloError::PhoneLimit(MAX_PHONES));
        }
        for (pos, phone) in stored.phones.iter().enumerate() {
            if stored.phones[..pos].contains(phone) {
                return Err(RoloError::DuplicatePhone(phone.as_str().to_string()));
            }
        }
        Ok(Self {
            name: stored.name,
            phones: stored.phones,
            birthday: stored.birthday,
        })
    }
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends a phone. Rejects duplicates and refuses to
    /// grow past [`MAX_PHONES`].
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        let phone = Phone::new(number)?;
        if self.phones.contains(&phone) {
            return Err(RoloError::DuplicatePhone(number.to_string()));
        }
        if self.phones.len() >= MAX_PHONES {
            return Err(RoloError::PhoneLimit(MAX_PHONES));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Removes `number` and returns it, or `None` if it was not present.
    pub fn remove_phone(&mut self, number: &str) -> Option<Phone> {
        let pos = self.phones.iter().position(|p| p.as_str() == number)?;
        Some(self.phones.remove(pos))
    }

    /// Replaces `old` with `new` in place, keeping its position.
    ///
    /// Validates `new` and rejects it as a duplicate before anything is
    /// touched, so a failed edit leaves the record unchanged. Returns
    /// `Ok(false)` when `old` is not on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Phone::new(new)?;
        let pos = match self.phones.iter().position(|p| p.as_str() == old) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && *p == replacement)
        {
            return Err(RoloError::DuplicatePhone(new.to_string()));
        }
        self.phones[pos] = replacement;
        Ok(true)
    }

    /// Exact-match lookup.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Sets the birthday. A birthday can only be set once.
    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        if self.birthday.is_some() {
            return Err(RoloError::BirthdayTaken);
        }
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
