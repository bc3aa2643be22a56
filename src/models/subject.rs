//! Subject model.
//!
//! A subject owes every class a fixed number of lesson hours per week.
//! That weekly obligation is what the demand decomposer turns into
//! placeable blocks.

use serde::{Deserialize, Serialize};

/// A taught subject with a weekly hour obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Subject name (e.g., "Mathematics").
    pub name: String,
    /// Lesson hours owed to each class per week. Must be positive for
    /// the subject to generate any demand.
    pub weekly_hours: u32,
}

impl Subject {
    /// Creates a new subject with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weekly_hours: 0,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly hour obligation.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = hours;
        self
    }
}
