//! Unavailability constraints.
//!
//! An unavailability row forbids one course from being taught in one
//! (day, period). Violations are hard (H4): the priority solver avoids
//! them during construction and the evaluator charges 100 apiece for
//! any that slip through the fallback path.

use serde::{Deserialize, Serialize};

/// A forbidden (course, day, period) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailability {
    /// Affected course identifier.
    pub course_id: String,
    /// Day index (0-based).
    pub day: u32,
    /// Period index within the day (0-based).
    pub period: u32,
}

impl Unavailability {
    /// Creates a new unavailability constraint.
    pub fn new(course_id: impl Into<String>, day: u32, period: u32) -> Self {
        Self {
            course_id: course_id.into(),
            day,
            period,
        }
    }

    /// Whether this constraint forbids the given placement.
    pub fn forbids(&self, course_id: &str, day: u32, period: u32) -> bool {
        self.course_id == course_id && self.day == day && self.period == period
    }
}
