//! Timetabling domain models.
//!
//! Provides the core data types for representing a school's timetabling
//! problem and its solution. Entities (school config, classes, subjects,
//! teachers, rooms) are supplied by the surrounding application and are
//! read-only during a generation run; lessons are the engine's output.
//!
//! # Domain Mappings
//!
//! | timetabler | Scheduling literature |
//! |------------|----------------------|
//! | Class      | Student group / curriculum |
//! | Subject    | Event type with weekly demand |
//! | Teacher    | Disjunctive resource (qualification-constrained) |
//! | Classroom  | Disjunctive resource (capacity-constrained) |
//! | Lesson     | Placed event (assignment) |

mod class;
mod lesson;
mod room;
mod school;
mod subject;
mod teacher;

pub use class::Class;
pub use lesson::Lesson;
pub use room::Classroom;
pub use school::SchoolConfig;
pub use subject::Subject;
pub use teacher::Teacher;
