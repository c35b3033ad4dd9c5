//! # Address Book
//!
//! The collection of all [`Record`]s, keyed by normalized (lowercase) name.
//!
//! Lookups are case-insensitive: callers may pass names as typed and the book
//! lowercases them before touching the map. Iteration is ordered by key, so
//! listings and birthday reports come out alphabetically.

use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, BIRTHDAY_FORMAT};
use crate::record::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt;

pub const UPCOMING_HEADER: &str = "Next week You need to congratulate:";
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    /// The day to congratulate on, already moved off weekends.
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name.capitalized(),
            self.date.format(BIRTHDAY_FORMAT)
        )
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records
            .get(&name.to_lowercase())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(&name.to_lowercase())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `today..=today + window_days`.
    ///
    /// Birthdays landing on a weekend are reported on the following Monday.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let Some(last_day) = today.checked_add_days(Days::new(u64::from(window_days))) else {
            return Vec::new();
        };

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut next = occurrence_in(birthday, today.year())?;
                if next < today {
                    next = occurrence_in(birthday, today.year() + 1)?;
                }
                if next > last_day {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    date: skip_weekend(next),
                })
            })
            .collect()
    }

    /// The report as printable lines: a header followed by one line per contact.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<String> {
        std::iter::once(UPCOMING_HEADER.to_string())
            .chain(
                self.upcoming_birthdays(today, window_days)
                    .iter()
                    .map(ToString::to_string),
            )
            .collect()
    }
}

/// The birthday's anniversary in `year`. Feb 29 falls back to Feb 28 in common years.
fn occurrence_in(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    let date = birthday.date();
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}

fn skip_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(Name::parse(name).unwrap());
        if let Some(b) = birthday {
            record.add_birthday(b).unwrap();
        }
        record
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-10-14 is a Wednesday
    const TODAY: (i32, u32, u32) = (2026, 10, 14);

    fn today() -> NaiveDate {
        ymd(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn find_is_case_insensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        assert_eq!(book.find("JOHN").unwrap().name().as_str(), "john");
        assert!(book.find_mut("jOhN").is_ok());
    }

    #[test]
    fn find_missing_contact() {
        let book = AddressBook::new();
        assert!(matches!(
            book.find("nobody"),
            Err(BookError::ContactNotFound(name)) if name == "nobody"
        ));
    }

    #[test]
    fn add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        let mut first = record("john", None);
        first.add_phone("1111111111").unwrap();
        book.add_record(first);
        let replaced = book.add_record(record("JOHN", None));

        assert!(replaced.is_some());
        assert_eq!(book.len(), 1);
        assert!(book.find("john").unwrap().phones().is_empty());
    }

    #[test]
    fn keys_match_record_names() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe", None));
        book.add_record(record("adam", None));
        for (key, rec) in &book.records {
            assert_eq!(key, rec.name().as_str());
        }
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["adam", "zoe"]);
    }

    #[test]
    fn delete_removes_record() {
        let mut book = AddressBook::new();
        book.add_record(record("john", None));
        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().as_str(), "john");
        assert!(book.is_empty());
        assert!(matches!(
            book.delete("john"),
            Err(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn birthday_seven_days_out_is_included() {
        let mut book = AddressBook::new();
        // 2026-10-21 is a Wednesday
        book.add_record(record("ann", Some("21.10.1990")));
        let upcoming = book.upcoming_birthdays(today(), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, ymd(2026, 10, 21));
    }

    #[test]
    fn birthday_eight_days_out_is_excluded() {
        let mut book = AddressBook::new();
        book.add_record(record("ann", Some("22.10.1990")));
        assert!(book.upcoming_birthdays(today(), 7).is_empty());
    }

    #[test]
    fn birthday_today_is_included() {
        let mut book = AddressBook::new();
        book.add_record(record("ann", Some("14.10.1990")));
        let upcoming = book.upcoming_birthdays(today(), 7);
        assert_eq!(upcoming[0].date, today());
    }

    #[test]
    fn past_birthday_is_not_upcoming() {
        let mut book = AddressBook::new();
        book.add_record(record("ann", Some("13.10.1990")));
        assert!(book.upcoming_birthdays(today(), 7).is_empty());
    }

    #[test]
    fn weekend_birthdays_move_to_monday() {
        let mut book = AddressBook::new();
        // 2026-10-17 is a Saturday, 2026-10-18 a Sunday
        book.add_record(record("sat", Some("17.10.1985")));
        book.add_record(record("sun", Some("18.10.1985")));
        let upcoming = book.upcoming_birthdays(today(), 7);
        assert_eq!(upcoming.len(), 2);
        assert!(upcoming.iter().all(|u| u.date == ymd(2026, 10, 19)));
    }

    #[test]
    fn sunday_on_last_day_is_reported_on_monday_after_window() {
        let mut book = AddressBook::new();
        // today is Sunday 2026-10-11; day 7 is Sunday 18.10, day 8 is Monday 19.10
        book.add_record(record("sun", Some("18.10.1985")));
        book.add_record(record("mon", Some("19.10.1985")));
        let upcoming = book.upcoming_birthdays(ymd(2026, 10, 11), 7);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name.as_str(), "sun");
        assert_eq!(upcoming[0].date, ymd(2026, 10, 19));
    }

    #[test]
    fn window_wraps_into_next_year() {
        let mut book = AddressBook::new();
        // 2027-01-01 is a Friday
        book.add_record(record("ann", Some("01.01.2000")));
        let upcoming = book.upcoming_birthdays(ymd(2026, 12, 28), 7);
        assert_eq!(upcoming[0].date, ymd(2027, 1, 1));
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record("leap", Some("29.02.2000")));
        // 2027-02-28 is a Sunday
        let upcoming = book.upcoming_birthdays(ymd(2027, 2, 25), 7);
        assert_eq!(upcoming[0].date, ymd(2027, 3, 1));
    }

    #[test]
    fn records_without_birthday_are_skipped() {
        let mut book = AddressBook::new();
        book.add_record(record("nobday", None));
        book.add_record(record("ann", Some("15.10.1990")));
        let lines = book.get_upcoming_birthdays(today(), 7);
        assert_eq!(lines, vec![UPCOMING_HEADER.to_string(), "Ann: 15.10.2026".to_string()]);
    }
}
