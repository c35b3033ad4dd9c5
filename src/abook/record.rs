use crate::fields::{Birthday, FieldError, Name, Phone};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Phone already exists.")]
    DuplicatePhone,

    #[error("No such phone exists.")]
    PhoneNotFound(String),

    #[error("No birthday set for {0}.")]
    NoBirthday(String),
}

/// A single contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
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

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<&Phone, RecordError> {
        let phone = Phone::parse(raw)?;
        if self.phones.contains(&phone) {
            return Err(RecordError::DuplicatePhone);
        }
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    pub fn remove_phone(&mut self, digits: &str) -> Result<Phone, RecordError> {
        let pos = self
            .position(digits)
            .ok_or_else(|| RecordError::PhoneNotFound(digits.to_string()))?;
        Ok(self.phones.remove(pos))
    }

    /// Replaces `old` in place, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<&Phone, RecordError> {
        let phone = Phone::parse(new)?;
        let pos = self
            .position(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        if self.phones[pos] != phone && self.phones.contains(&phone) {
            return Err(RecordError::DuplicatePhone);
        }
        self.phones[pos] = phone;
        Ok(&self.phones[pos])
    }

    pub fn find_phone(&self, digits: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == digits)
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<Birthday, RecordError> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    pub fn show_birthday(&self) -> Result<String, RecordError> {
        let birthday = self
            .birthday
            .ok_or_else(|| RecordError::NoBirthday(self.name.capitalized()))?;
        Ok(format!("{}'s birthday: {}", self.name.capitalized(), birthday))
    }

    fn position(&self, digits: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == digits)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
