//! School configuration model.
//!
//! Captures the bell schedule a school runs every active weekday:
//! the first and last lesson boundary, the fixed lesson length, and
//! the lunch window that no lesson may intersect.
//!
//! # Time Representation
//! All fields are times of day (`chrono::NaiveTime`); the engine never
//! deals in calendar dates except when exporting lessons anchored to an
//! arbitrary date.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A school's weekly scheduling configuration.
///
/// The four time fields are optional because the surrounding record
/// forms may hand over a partially filled configuration; a config with
/// any of them missing (or a zero session length) produces an empty
/// time grid and is unschedulable.
///
/// Invariant (checked by [`validate_input`](crate::validation::validate_input),
/// not at construction): `start_time < lunch_start <= lunch_end < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    /// School name.
    pub name: String,
    /// First lesson may start at this time.
    pub start_time: Option<NaiveTime>,
    /// Last lesson must end by this time.
    pub end_time: Option<NaiveTime>,
    /// Length of one lesson slot in minutes.
    pub session_minutes: u32,
    /// Lunch window start.
    pub lunch_start: Option<NaiveTime>,
    /// Lunch window end.
    pub lunch_end: Option<NaiveTime>,
    /// Weekdays on which lessons are held.
    pub days: Vec<Weekday>,
}

impl SchoolConfig {
    /// Creates a configuration with no times and no active days.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: None,
            end_time: None,
            session_minutes: 0,
            lunch_start: None,
            lunch_end: None,
            days: Vec::new(),
        }
    }

    /// Sets the daily start and end boundaries.
    pub fn with_hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets the lesson slot length in minutes.
    pub fn with_session_minutes(mut self, minutes: u32) -> Self {
        self.session_minutes = minutes;
        self
    }

    /// Sets the lunch window.
    pub fn with_lunch(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.lunch_start = Some(start);
        self.lunch_end = Some(end);
        self
    }

    /// Sets the active weekdays.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = days;
        self
    }

    /// Adds one active weekday.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.days.push(day);
        self
    }

    /// Whether every time field needed for grid construction is present.
    pub fn has_complete_times(&self) -> bool {
        self.start_time.is_some()
            && self.end_time.is_some()
            && self.lunch_start.is_some()
            && self.lunch_end.is_some()
            && self.session_minutes > 0
    }
}
