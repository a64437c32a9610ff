//! Input validation for timetabling instances.
//!
//! Checks structural integrity of a `Problem` before solving. Detects:
//! - Duplicate course, room, or curriculum IDs
//! - Curriculum members referencing unknown courses
//! - Unavailability rows referencing unknown courses
//! - Unavailability slots outside the day × period grid
//!
//! A degenerate grid (zero days, periods, or rooms) is deliberately not an
//! error: solving it yields an empty pool and a fully-unassigned schedule,
//! which is a valid terminal outcome.

use crate::models::Problem;
use std::collections::HashSet;

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
    /// A curriculum or unavailability row references a course that doesn't exist.
    UnknownCourse,
    /// An unavailability row names a day or period outside the grid.
    SlotOutOfGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetabling instance.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate room IDs
/// 3. No duplicate curriculum IDs
/// 4. Every curriculum member refers to an existing course
/// 5. Every unavailability row refers to an existing course
/// 6. Every unavailability row lies inside the time grid
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in &problem.courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &problem.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut curriculum_ids = HashSet::new();
    for cur in &problem.curricula {
        if !curriculum_ids.insert(cur.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate curriculum ID: {}", cur.id),
            ));
        }

        for member in &cur.courses {
            if !course_ids.contains(member.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!(
                        "Curriculum '{}' references unknown course '{}'",
                        cur.id, member
                    ),
                ));
            }
        }
    }

    for constraint in &problem.unavailability {
        if !course_ids.contains(constraint.course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!(
                    "Unavailability row references unknown course '{}'",
                    constraint.course_id
                ),
            ));
        }

        if constraint.day >= problem.days || constraint.period >= problem.periods_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotOutOfGrid,
                format!(
                    "Unavailability for '{}' at day {}, period {} is outside the {}x{} grid",
                    constraint.course_id,
                    constraint.day,
                    constraint.period,
                    problem.days,
                    problem.periods_per_day
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
