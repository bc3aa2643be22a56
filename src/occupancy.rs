//! Occupancy bookkeeping over the three resource axes.
//!
//! Placement legality is tracked per (resource, day, slot) on three
//! independent axes: the class receiving the lesson, the teacher giving
//! it, and the room hosting it. Both the batch engine and the
//! interactive editor consult the same [`ConflictChecker`] surface, so
//! conflict semantics cannot drift between them.
//!
//! Keys are proper composite values rather than concatenated strings,
//! so the same identifier on different axes can never collide.

use std::collections::HashSet;

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Lesson;

/// One of the three independently checked resource dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// The student group receiving the lesson.
    Class,
    /// The teacher giving the lesson.
    Teacher,
    /// The room hosting the lesson.
    Room,
}

/// The atomic busy-marker: one resource on one axis at one weekly cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccupancyKey {
    /// Which axis the resource lives on.
    pub kind: ResourceKind,
    /// The resource's identifier within its axis.
    pub resource_id: String,
    /// Weekday of the cell.
    pub day: Weekday,
    /// Slot-start label of the cell.
    pub slot: NaiveTime,
}

impl OccupancyKey {
    /// Creates a key for one occupancy cell.
    pub fn new(kind: ResourceKind, resource_id: impl Into<String>, day: Weekday, slot: NaiveTime) -> Self {
        Self {
            kind,
            resource_id: resource_id.into(),
            day,
            slot,
        }
    }
}

/// Conflict surface shared by the batch engine and the interactive editor.
///
/// Implementations answer and mutate per-cell occupancy; the span
/// variants step across a block of consecutive slots, one session
/// length apart.
pub trait ConflictChecker {
    /// Whether a resource is free at a cell.
    fn is_free(&self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime) -> bool;

    /// Marks a resource busy at a cell. Idempotent.
    fn reserve(&mut self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime);

    /// Clears a resource's busy marker at a cell. Idempotent.
    fn release(&mut self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime);

    /// Whether all `block_len` slots from `start` are free for a resource.
    fn is_span_free(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        day: Weekday,
        start: NaiveTime,
        block_len: u32,
        slot_minutes: u32,
    ) -> bool {
        span_slots(start, block_len, slot_minutes)
            .all(|slot| self.is_free(kind, resource_id, day, slot))
    }

    /// Reserves all `block_len` slots from `start` for a resource.
    fn reserve_span(
        &mut self,
        kind: ResourceKind,
        resource_id: &str,
        day: Weekday,
        start: NaiveTime,
        block_len: u32,
        slot_minutes: u32,
    ) {
        for slot in span_slots(start, block_len, slot_minutes) {
            self.reserve(kind, resource_id, day, slot);
        }
    }

    /// Releases all `block_len` slots from `start` for a resource.
    fn release_span(
        &mut self,
        kind: ResourceKind,
        resource_id: &str,
        day: Weekday,
        start: NaiveTime,
        block_len: u32,
        slot_minutes: u32,
    ) {
        for slot in span_slots(start, block_len, slot_minutes) {
            self.release(kind, resource_id, day, slot);
        }
    }
}

fn span_slots(start: NaiveTime, block_len: u32, slot_minutes: u32) -> impl Iterator<Item = NaiveTime> {
    (0..block_len).map(move |k| start + Duration::minutes((k * slot_minutes) as i64))
}

/// Set-backed occupancy ledger.
///
/// Entries persist for the lifetime of one generation run or one
/// interactive session; bulk regeneration starts from a fresh ledger.
#[derive(Debug, Clone, Default)]
pub struct OccupancyLedger {
    busy: HashSet<OccupancyKey>,
}

impl OccupancyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the busy set from an existing lesson list.
    ///
    /// Used when an interactive session opens over a previously
    /// generated schedule.
    pub fn from_lessons(lessons: &[Lesson], slot_minutes: u32) -> Self {
        let mut ledger = Self::new();
        for lesson in lessons {
            ledger.reserve_lesson(lesson, slot_minutes);
        }
        ledger
    }

    /// Marks all three axes busy across a lesson's span.
    pub fn reserve_lesson(&mut self, lesson: &Lesson, slot_minutes: u32) {
        for (kind, id) in lesson_axes(lesson) {
            self.reserve_span(kind, id, lesson.day, lesson.start, lesson.slot_count, slot_minutes);
        }
    }

    /// Clears all three axes across a lesson's span.
    pub fn release_lesson(&mut self, lesson: &Lesson, slot_minutes: u32) {
        for (kind, id) in lesson_axes(lesson) {
            self.release_span(kind, id, lesson.day, lesson.start, lesson.slot_count, slot_minutes);
        }
    }

    /// Number of busy cells across all axes.
    pub fn busy_count(&self) -> usize {
        self.busy.len()
    }
}

fn lesson_axes(lesson: &Lesson) -> [(ResourceKind, &str); 3] {
    [
        (ResourceKind::Class, lesson.class_id.as_str()),
        (ResourceKind::Teacher, lesson.teacher_id.as_str()),
        (ResourceKind::Room, lesson.classroom_id.as_str()),
    ]
}

impl ConflictChecker for OccupancyLedger {
    fn is_free(&self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime) -> bool {
        !self
            .busy
            .contains(&OccupancyKey::new(kind, resource_id, day, slot))
    }

    fn reserve(&mut self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime) {
        self.busy.insert(OccupancyKey::new(kind, resource_id, day, slot));
    }

    fn release(&mut self, kind: ResourceKind, resource_id: &str, day: Weekday, slot: NaiveTime) {
        self.busy.remove(&OccupancyKey::new(kind, resource_id, day, slot));
    }
}
