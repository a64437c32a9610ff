//! Problem instance model.
//!
//! An immutable description of one timetabling instance: the day × period
//! time grid plus courses, rooms, curricula, and unavailability rows. The
//! loader (out of scope here) guarantees referential integrity; see
//! `validation` for the crate-side checks.
//!
//! # Reference
//! Di Gaspero, McCollum, Schaerf (2007), ITC-2007 Track 3 problem format

use serde::{Deserialize, Serialize};

use super::{Course, Curriculum, Room, Unavailability};

/// A complete timetabling instance.
///
/// Collections keep the instance's natural order: the randomized solver
/// processes courses exactly in `courses` order, and the slot pool is
/// built over `rooms` in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    /// Instance name.
    pub name: String,
    /// Number of teaching days.
    pub days: u32,
    /// Number of periods in each day.
    pub periods_per_day: u32,
    /// Courses to be timetabled.
    pub courses: Vec<Course>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Curricula grouping the courses.
    pub curricula: Vec<Curriculum>,
    /// Forbidden (course, day, period) combinations.
    pub unavailability: Vec<Unavailability>,
}

impl Problem {
    /// Creates an empty instance over the given time grid.
    pub fn new(days: u32, periods_per_day: u32) -> Self {
        Self {
            days,
            periods_per_day,
            ..Self::default()
        }
    }

    /// Sets the instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a curriculum.
    pub fn with_curriculum(mut self, curriculum: Curriculum) -> Self {
        self.curricula.push(curriculum);
        self
    }

    /// Adds an unavailability constraint.
    pub fn with_unavailability(mut self, constraint: Unavailability) -> Self {
        self.unavailability.push(constraint);
        self
    }

    /// Finds a course by ID.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Finds a room by ID.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Curricula that contain the given course.
    pub fn curricula_of<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a Curriculum> {
        self.curricula.iter().filter(move |cur| cur.contains(course_id))
    }

    /// Whether the course is barred from the given day and period.
    pub fn is_unavailable(&self, course_id: &str, day: u32, period: u32) -> bool {
        self.unavailability
            .iter()
            .any(|c| c.forbids(course_id, day, period))
    }

    /// Total number of (day, period, room) slots in the grid.
    pub fn total_slots(&self) -> u32 {
        self.days * self.periods_per_day * self.rooms.len() as u32
    }

    /// Total number of lectures demanded across all courses.
    pub fn total_lectures(&self) -> u32 {
        self.courses.iter().map(|c| c.lectures).sum()
    }

    /// How many demanded lectures exceed the slot supply.
    ///
    /// Zero when supply covers demand; otherwise the exact number of
    /// lectures no builder can place.
    pub fn lecture_deficit(&self) -> u32 {
        self.total_lectures().saturating_sub(self.total_slots())
    }
}
