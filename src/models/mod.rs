//! Timetabling domain models.
//!
//! Core data types for curriculum-based course timetabling: the immutable
//! problem instance (courses, rooms, curricula, unavailability rows over a
//! day × period grid) and the schedule artifact the solvers produce.
//!
//! # Reference
//! Di Gaspero, McCollum, Schaerf (2007), "The Second International
//! Timetabling Competition: Curriculum-based Course Timetabling (Track 3)"

mod course;
mod curriculum;
mod problem;
mod room;
mod schedule;
mod unavailability;

pub use course::Course;
pub use curriculum::Curriculum;
pub use problem::Problem;
pub use room::Room;
pub use schedule::{LectureAssignment, Schedule, UnassignedLecture};
pub use unavailability::Unavailability;
