//! Placement engines.
//!
//! Two consumers of the same occupancy rules:
//!
//! - [`TimetableGenerator`]: the one-shot batch heuristic that places
//!   the whole weekly demand, doubles first, with randomized
//!   day/teacher/room tie-breaks.
//! - [`ScheduleEditor`]: interactive single-lesson add/remove over an
//!   existing schedule, with typed rejection reasons.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod batch;
mod interactive;

pub use batch::{
    GenerationError, GenerationOutcome, GenerationRequest, TimetableGenerator,
    MAX_DAILY_SUBJECT_HOURS,
};
pub use interactive::{EditError, ScheduleEditor};
