// src/contact.rs
use crate::core::sanitize::or_placeholder;

/// One normalized contact. No field is ever blank: blanks become `N/A`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    title: String,
    email: String,
}

impl Record {
    /// Trim each field and substitute `N/A` for any field left empty.
    pub fn new(name: &str, title: &str, email: &str) -> Self {
        Self {
            name: or_placeholder(name),
            title: or_placeholder(title),
            email: or_placeholder(email),
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn title(&self) -> &str { &self.title }
    pub fn email(&self) -> &str { &self.email }

    /// Cells in display order: name, title, email.
    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.title, &self.email]
    }
}

/// A record as it sits in the store, with its row id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredContact {
    pub id: i64,
    pub record: Record,
}
