//! Lesson (placed block) model.
//!
//! A lesson is the engine's output unit: one subject taught to one class
//! by one teacher in one room, on a weekday, spanning one or more
//! consecutive slots. The span is stored as a start label plus a slot
//! count; wall-clock timestamps are derived on export.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A placed lesson block.
///
/// Invariants maintained by the engines that mint lessons:
/// - the span never straddles the lunch window;
/// - no other lesson shares a (class, day, slot), (teacher, day, slot),
///   or (room, day, slot) triple with this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: String,
    /// Taught subject.
    pub subject_id: String,
    /// Receiving class.
    pub class_id: String,
    /// Assigned teacher.
    pub teacher_id: String,
    /// Assigned room.
    pub classroom_id: String,
    /// Weekday the lesson repeats on.
    pub day: Weekday,
    /// Start label of the first occupied slot.
    pub start: NaiveTime,
    /// Number of consecutive slots occupied (1 or 2 in practice).
    pub slot_count: u32,
}

impl Lesson {
    /// Creates a single-slot lesson.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        class_id: impl Into<String>,
        teacher_id: impl Into<String>,
        classroom_id: impl Into<String>,
        day: Weekday,
        start: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            class_id: class_id.into(),
            teacher_id: teacher_id.into(),
            classroom_id: classroom_id.into(),
            day,
            start,
            slot_count: 1,
        }
    }

    /// Sets the slot count.
    pub fn with_slot_count(mut self, slot_count: u32) -> Self {
        self.slot_count = slot_count;
        self
    }

    /// Start labels of every slot this lesson occupies.
    pub fn slot_times(&self, slot_minutes: u32) -> Vec<NaiveTime> {
        (0..self.slot_count)
            .map(|k| self.start + Duration::minutes((k * slot_minutes) as i64))
            .collect()
    }

    /// Whether this lesson occupies the given (day, slot) cell.
    pub fn covers(&self, day: Weekday, slot: NaiveTime, slot_minutes: u32) -> bool {
        self.day == day && self.slot_times(slot_minutes).contains(&slot)
    }

    /// Start and end timestamps anchored to an arbitrary calendar date.
    ///
    /// Only the time of day and the weekday carry meaning; the anchor
    /// exists so the persistence boundary can store real timestamps.
    pub fn time_span(&self, anchor: NaiveDate, slot_minutes: u32) -> (NaiveDateTime, NaiveDateTime) {
        let start = anchor.and_time(self.start);
        let end = start + Duration::minutes((self.slot_count * slot_minutes) as i64);
        (start, end)
    }
}
