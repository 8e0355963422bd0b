use crate::model::{Name, Phone, Record};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a delete request ended up doing. Missing names and missing
/// phones are outcomes here, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    RemovedContact(Record),
    RemovedPhone(Phone),
    ContactNotFound,
    PhoneNotFound,
}

/// One upcoming birthday: whose it is and the day it is observed on.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayReminder {
    pub name: Name,
    pub date: NaiveDate,
}

/// All contacts, keyed by exact name. Serialized as a flat list of
/// records; the name index is rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    contacts: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. An existing record with the
    /// same name is replaced wholesale.
    pub fn add_record(&mut self, record: Record) {
        self.contacts
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.get_mut(name)
    }

    /// Removes a whole contact, or just one phone when `number` is
    /// given. Never fails; see [`DeleteOutcome`].
    pub fn delete(&mut self, name: &str, number: Option<&str>) -> DeleteOutcome {
        match number {
            None => match self.contacts.remove(name) {
                Some(record) => DeleteOutcome::RemovedContact(record),
                None => DeleteOutcome::ContactNotFound,
            },
            Some(number) => match self.contacts.get_mut(name) {
                None => DeleteOutcome::ContactNotFound,
                Some(record) => match record.remove_phone(number) {
                    Some(phone) => DeleteOutcome::RemovedPhone(phone),
                    None => DeleteOutcome::PhoneNotFound,
                },
            },
        }
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Birthdays observed within `[today, today + window_days]`, both
    /// ends included. Sorted by observed day, then by name. A window too
    /// large for the calendar counts as unbounded.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<BirthdayReminder> {
        let horizon = Duration::try_days(window_days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(NaiveDate::MAX);
        let mut due: Vec<BirthdayReminder> = self
            .contacts
            .values()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today);
                (next <= horizon).then(|| BirthdayReminder {
                    name: record.name().clone(),
                    date: next,
                })
            })
            .collect();
        due.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        due
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.contacts.into_values().collect()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::AddressBook;
    use crate::model::{Name, Record};

    /// Builds address books for tests without going through commands.
    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for number in phones {
                record.add_phone(number).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            record.add_phone(phone).unwrap();
            record.add_birthday(birthday).unwrap();
            self.book.add_record(record);
            self
        }
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::fixtures::BookFixture;
    use crate::model::Name;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn add_record_replaces_same_name() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0000000001", "0000000002"])
            .book;
        book.add_record(Record::new(Name::new("John").unwrap()));
        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let book = BookFixture::new().with_contact("John", &[]).book;
        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none());
        assert!(book.find("Joh").is_none());
    }

    #[test]
    fn delete_whole_contact() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        match book.delete("John", None) {
            DeleteOutcome::RemovedContact(record) => {
                assert_eq!(record.name().as_str(), "John");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(book.is_empty());
    }

    #[test]
    fn delete_single_phone_keeps_contact() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0000000001", "0000000002"])
            .book;
        let outcome = book.delete("John", Some("0000000001"));
        assert!(matches!(outcome, DeleteOutcome::RemovedPhone(_)));
        let record = book.find("John").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0000000002");
    }

    #[test]
    fn delete_missing_name_is_soft() {
        let mut book = AddressBook::new();
        assert_eq!(book.delete("Nobody", None), DeleteOutcome::ContactNotFound);
        assert_eq!(
            book.delete("Nobody", Some("0123456789")),
            DeleteOutcome::ContactNotFound
        );
    }

    #[test]
    fn delete_missing_phone_is_soft() {
        let mut book = BookFixture::new()
            .with_contact("John", &["0000000001"])
            .book;
        assert_eq!(
            book.delete("John", Some("0000000002")),
            DeleteOutcome::PhoneNotFound
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn records_come_back_in_name_order() {
        let book = BookFixture::new()
            .with_contact("Zoe", &[])
            .with_contact("Anna", &[])
            .with_contact("Mark", &[])
            .book;
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Mark", "Zoe"]);
    }

    #[test]
    fn upcoming_includes_today_and_window_end() {
        let book = BookFixture::new()
            .with_birthday("Today", "0000000001", "10.06.1990")
            .with_birthday("WindowEnd", "0000000002", "17.06.1985")
            .with_birthday("PastWindow", "0000000003", "18.06.1985")
            .book;
        let due = book.upcoming_birthdays(date(10, 6, 2024), 7);
        let names: Vec<&str> = due.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "WindowEnd"]);
        assert_eq!(due[0].date, date(10, 6, 2024));
        assert_eq!(due[1].date, date(17, 6, 2024));
    }

    #[test]
    fn upcoming_skips_birthday_earlier_this_year() {
        let book = BookFixture::new()
            .with_birthday("NewYear", "0000000001", "01.01.1990")
            .book;
        assert!(book
            .upcoming_birthdays(date(10, 6, 2024), 7)
            .is_empty());
    }

    #[test]
    fn upcoming_wraps_around_year_end() {
        let book = BookFixture::new()
            .with_birthday("NewYear", "0000000001", "02.01.1990")
            .book;
        let due = book.upcoming_birthdays(date(30, 12, 2024), 7);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].date, date(2, 1, 2025));
    }

    #[test]
    fn upcoming_observes_feb_29_on_mar_1() {
        let book = BookFixture::new()
            .with_birthday("Leap", "0000000001", "29.02.2000")
            .book;
        let due = book.upcoming_birthdays(date(27, 2, 2023), 7);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].date, date(1, 3, 2023));
    }

    #[test]
    fn upcoming_sorts_by_day_then_name() {
        let book = BookFixture::new()
            .with_birthday("Zoe", "0000000001", "12.06.1990")
            .with_birthday("Anna", "0000000002", "12.06.1988")
            .with_birthday("Mark", "0000000003", "11.06.1970")
            .book;
        let due = book.upcoming_birthdays(date(10, 6, 2024), 7);
        let names: Vec<&str> = due.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Mark", "Anna", "Zoe"]);
    }

    #[test]
    fn upcoming_ignores_contacts_without_birthdays() {
        let book = BookFixture::new()
            .with_contact("John", &["0123456789"])
            .book;
        assert!(book.upcoming_birthdays(date(10, 6, 2024), 7).is_empty());
    }

    #[test]
    fn zero_window_means_today_only() {
        let book = BookFixture::new()
            .with_birthday("Today", "0000000001", "10.06.1990")
            .with_birthday("Tomorrow", "0000000002", "11.06.1990")
            .book;
        let due = book.upcoming_birthdays(date(10, 6, 2024), 0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name.as_str(), "Today");
    }

    #[test]
    fn oversized_window_counts_as_unbounded() {
        let book = BookFixture::new()
            .with_birthday("Anywhen", "0000000001", "01.01.1990")
            .book;
        let due = book.upcoming_birthdays(date(10, 6, 2024), i64::MAX);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].date, date(1, 1, 2025));
    }

    #[test]
    fn book_round_trips_through_json() {
        let book = BookFixture::new()
            .with_contact("John", &["0000000001", "0000000002"])
            .with_birthday("Jane", "0000000003", "29.02.2024")
            .book;
        let json = serde_json::to_string_pretty(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn book_serializes_as_a_record_list() {
        let book = BookFixture::new().with_contact("John", &[]).book;
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn loading_rejects_invalid_phone_in_snapshot() {
        let json = r#"[{"name": "John", "phones": ["123"], "birthday": null}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }

    #[test]
    fn loading_rejects_a_fourth_phone_in_snapshot() {
        let json = r#"[{"name": "John", "phones":
            ["0000000001", "0000000002", "0000000003", "0000000004"]}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }

    #[test]
    fn loading_rejects_duplicate_phones_in_snapshot() {
        let json = r#"[{"name": "John", "phones": ["0000000001", "0000000001"]}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }
}
