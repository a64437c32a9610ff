//! Curriculum model.
//!
//! A curriculum groups courses followed by the same students. No two
//! courses of a curriculum may be taught in the same day and period,
//! and gaps between its lectures within a day are penalized (S4).
//!
//! # Reference
//! Di Gaspero, McCollum, Schaerf (2007), "The Second International
//! Timetabling Competition: Curriculum-based Course Timetabling"

use serde::{Deserialize, Serialize};

/// A group of courses sharing a student population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    /// Unique curriculum identifier.
    pub id: String,
    /// Member course identifiers, in instance order.
    pub courses: Vec<String>,
}

impl Curriculum {
    /// Creates a new, empty curriculum.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            courses: Vec::new(),
        }
    }

    /// Adds a member course.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.courses.push(course_id.into());
        self
    }

    /// Whether the given course belongs to this curriculum.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c == course_id)
    }

    /// Number of member courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
