//! Course model.
//!
//! A course is a series of identical lectures taught by one teacher to a
//! fixed student population. Every lecture must be assigned its own
//! (day, period, room) slot.
//!
//! # Reference
//! Bonutti et al. (2012), "Benchmarking curriculum-based course timetabling"

use serde::{Deserialize, Serialize};

/// A course to be timetabled.
///
/// Immutable after load. The lecture count drives how many slots the
/// solvers must claim; `min_working_days` feeds the S3 soft rule and
/// `students` the S1 room-capacity rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Identifier of the teacher giving every lecture of this course.
    pub teacher: String,
    /// Number of lectures that must be scheduled.
    pub lectures: u32,
    /// Minimum number of distinct days the lectures should spread across.
    pub min_working_days: u32,
    /// Number of enrolled students.
    pub students: u32,
}

impl Course {
    /// Creates a new course with the given ID and teacher.
    pub fn new(id: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            teacher: teacher.into(),
            lectures: 0,
            min_working_days: 0,
            students: 0,
        }
    }

    /// Sets the required lecture count.
    pub fn with_lectures(mut self, lectures: u32) -> Self {
        self.lectures = lectures;
        self
    }

    /// Sets the minimum number of working days.
    pub fn with_min_working_days(mut self, min_working_days: u32) -> Self {
        self.min_working_days = min_working_days;
        self
    }

    /// Sets the enrolled student count.
    pub fn with_students(mut self, students: u32) -> Self {
        self.students = students;
        self
    }
}
