//! Interactive single-lesson placement and removal.
//!
//! Backs hand-editing of an already generated schedule: a teacher and
//! subject dropped onto a (class, day, slot) cell become a single-slot
//! lesson, and a lesson dragged off the grid is removed. Adds are
//! validated against the same three occupancy axes as batch placement,
//! through the same [`ConflictChecker`] surface; a rejected add leaves
//! the lesson list untouched.
//!
//! Every operation is one synchronous in-memory mutation. The revised
//! list is handed back to the persistence boundary for an atomic
//! bulk save.

use chrono::{NaiveTime, Weekday};
use thiserror::Error;

use crate::models::{Classroom, Lesson};
use crate::occupancy::{ConflictChecker, OccupancyLedger, ResourceKind};

/// Why an interactive add was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The class already has a lesson at the target cell.
    #[error("the class already has a lesson in this slot")]
    SlotOccupied,
    /// The teacher is already giving a lesson at the target cell.
    #[error("the teacher is already scheduled in this slot")]
    TeacherConflict,
    /// Every room is occupied at the target cell.
    #[error("no room is available in this slot")]
    NoRoomAvailable,
}

/// In-memory editor over a lesson list.
///
/// Owns the working list, the room inventory, and an incrementally
/// maintained [`OccupancyLedger`] bootstrapped from the initial
/// lessons.
#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    lessons: Vec<Lesson>,
    rooms: Vec<Classroom>,
    slot_minutes: u32,
    ledger: OccupancyLedger,
}

impl ScheduleEditor {
    /// Opens an editing session over an existing schedule.
    pub fn new(lessons: Vec<Lesson>, rooms: Vec<Classroom>, slot_minutes: u32) -> Self {
        let ledger = OccupancyLedger::from_lessons(&lessons, slot_minutes);
        Self {
            lessons,
            rooms,
            slot_minutes,
            ledger,
        }
    }

    /// The current lesson list.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Consumes the editor, yielding the revised list for bulk save.
    pub fn into_lessons(self) -> Vec<Lesson> {
        self.lessons
    }

    /// Places a single-slot lesson at a (class, day, slot) cell.
    ///
    /// Checks, in order: the class axis (`SlotOccupied`), the teacher
    /// axis (`TeacherConflict`), then the room axis across the whole
    /// inventory (`NoRoomAvailable`); the first free room in inventory
    /// order is assigned. On failure nothing is mutated.
    pub fn add(
        &mut self,
        teacher_id: &str,
        subject_id: &str,
        class_id: &str,
        day: Weekday,
        slot: NaiveTime,
    ) -> Result<Lesson, EditError> {
        if !self.ledger.is_free(ResourceKind::Class, class_id, day, slot) {
            return Err(EditError::SlotOccupied);
        }
        if !self.ledger.is_free(ResourceKind::Teacher, teacher_id, day, slot) {
            return Err(EditError::TeacherConflict);
        }
        let Some(room) = self
            .rooms
            .iter()
            .find(|r| self.ledger.is_free(ResourceKind::Room, &r.id, day, slot))
        else {
            return Err(EditError::NoRoomAvailable);
        };

        // The class axis was free, so the coordinate id is unique.
        let id = format!("{}-{}-{}", class_id, day, slot.format("%H:%M"));
        let lesson = Lesson::new(id, subject_id, class_id, teacher_id, room.id.clone(), day, slot);
        self.ledger.reserve_lesson(&lesson, self.slot_minutes);
        self.lessons.push(lesson.clone());
        Ok(lesson)
    }

    /// Removes a lesson by id, freeing its cells on all three axes.
    ///
    /// Unknown ids are a no-op; returns whether a lesson was removed.
    pub fn remove(&mut self, lesson_id: &str) -> bool {
        match self.lessons.iter().position(|l| l.id == lesson_id) {
            Some(index) => {
                let lesson = self.lessons.remove(index);
                self.ledger.release_lesson(&lesson, self.slot_minutes);
                true
            }
            None => false,
        }
    }
}
