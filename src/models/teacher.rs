//! Teacher model.
//!
//! A teacher is qualified for a set of subjects and can hold at most one
//! lesson per time slot. Qualification is the only screening the batch
//! engine applies when picking a teacher for a placement.

use serde::{Deserialize, Serialize};

/// A teacher with subject qualifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// IDs of subjects this teacher is qualified to teach.
    pub subject_ids: Vec<String>,
}

impl Teacher {
    /// Creates a new teacher with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            surname: String::new(),
            subject_ids: Vec::new(),
        }
    }

    /// Sets the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the family name.
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Whether this teacher is qualified for a subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}
