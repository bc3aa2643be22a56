//! Class (student group) model.
//!
//! A class is a fixed group of students that receives lessons together.
//! Its head count drives room selection: a lesson may only be placed in
//! a room whose capacity covers the whole class.

use serde::{Deserialize, Serialize};

/// A class of students to be timetabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Unique class identifier.
    pub id: String,
    /// Display name (e.g., "Year 9 Blue").
    pub name: String,
    /// Short label used in timetable cells (e.g., "9B").
    pub abbreviation: String,
    /// Number of students in the class.
    pub capacity: u32,
}

impl Class {
    /// Creates a new class with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            abbreviation: String::new(),
            capacity: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the abbreviation.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Sets the student head count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}
