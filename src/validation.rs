//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the entities handed over by the
//! record layer before a generation run. Detects:
//! - Duplicate IDs
//! - Teachers qualified for unknown subjects
//! - A lunch window or day boundary ordering that can never schedule
//! - Subjects owing no hours
//! - Demand that can never place (no qualified teacher, no fitting room)
//!
//! Validation is advisory: the generator itself only refuses an empty
//! time grid. Callers run these checks up front to report configuration
//! mistakes with more precision than an unplaced-demand summary.

use std::collections::HashSet;

use crate::models::{Class, Classroom, SchoolConfig, Subject, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A teacher references a subject that doesn't exist.
    UnknownSubjectReference,
    /// School times violate `start < lunch_start <= lunch_end < end`.
    InvalidTimeOrder,
    /// A subject owes zero weekly hours.
    ZeroWeeklyHours,
    /// No teacher is qualified for a subject.
    NoQualifiedTeacher,
    /// No room seats a class.
    NoFittingRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a generation run.
///
/// Checks:
/// 1. No duplicate class/subject/teacher/room IDs
/// 2. All teacher qualifications reference existing subjects
/// 3. Config times, when all present, are correctly ordered
/// 4. Every subject owes at least one weekly hour
/// 5. Every subject has at least one qualified teacher
/// 6. Every class fits in at least one room
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    school: &SchoolConfig,
    classes: &[Class],
    subjects: &[Subject],
    teachers: &[Teacher],
    rooms: &[Classroom],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_duplicate_ids("class", classes.iter().map(|c| c.id.as_str()), &mut errors);
    check_duplicate_ids("subject", subjects.iter().map(|s| s.id.as_str()), &mut errors);
    check_duplicate_ids("teacher", teachers.iter().map(|t| t.id.as_str()), &mut errors);
    check_duplicate_ids("room", rooms.iter().map(|r| r.id.as_str()), &mut errors);

    // Qualification references
    let subject_ids: HashSet<&str> = subjects.iter().map(|s| s.id.as_str()).collect();
    for teacher in teachers {
        for subject_id in &teacher.subject_ids {
            if !subject_ids.contains(subject_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubjectReference,
                    format!("Teacher '{}' references unknown subject '{}'", teacher.id, subject_id),
                ));
            }
        }
    }

    // Time ordering, only meaningful when every field is present
    if let (Some(start), Some(end), Some(lunch_start), Some(lunch_end)) = (
        school.start_time,
        school.end_time,
        school.lunch_start,
        school.lunch_end,
    ) {
        if !(start < lunch_start && lunch_start <= lunch_end && lunch_end < end) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeOrder,
                format!(
                    "School '{}' times must satisfy start < lunch_start <= lunch_end < end",
                    school.name
                ),
            ));
        }
    }

    for subject in subjects {
        if subject.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeeklyHours,
                format!("Subject '{}' owes no weekly hours", subject.id),
            ));
        }
        if !teachers.iter().any(|t| t.teaches(&subject.id)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoQualifiedTeacher,
                format!("No teacher is qualified for subject '{}'", subject.id),
            ));
        }
    }

    for class in classes {
        if !rooms.iter().any(|r| r.fits(class.capacity)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoFittingRoom,
                format!("No room seats class '{}' ({} students)", class.id, class.capacity),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicate_ids<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}
