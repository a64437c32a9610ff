//! Schedule (solution) model.
//!
//! A schedule is the artifact a constructive solver hands back: one
//! (day, period, room) assignment per lecture, plus the lectures that
//! could not be placed at all when the slot pool ran dry. The solver
//! owns it exclusively during construction; evaluation only reads it.

use serde::{Deserialize, Serialize};

/// A complete (or best-effort) timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Lecture assignments, in the order the solver placed them.
    pub assignments: Vec<LectureAssignment>,
    /// Lectures left without a slot after the pool was exhausted.
    pub unassigned: Vec<UnassignedLecture>,
}

/// One lecture placed into one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureAssignment {
    /// Course the lecture belongs to.
    pub course_id: String,
    /// Day index (0-based).
    pub day: u32,
    /// Period index within the day (0-based).
    pub period: u32,
    /// Assigned room.
    pub room_id: String,
    /// Lecture sequence number within its course (1-based).
    pub lecture: u32,
}

/// A lecture that could not be given any slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedLecture {
    /// Course the lecture belongs to.
    pub course_id: String,
    /// Lecture sequence number within its course (1-based).
    pub lecture: u32,
}

impl LectureAssignment {
    /// Creates a new lecture assignment.
    pub fn new(
        course_id: impl Into<String>,
        day: u32,
        period: u32,
        room_id: impl Into<String>,
        lecture: u32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            day,
            period,
            room_id: room_id.into(),
            lecture,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: LectureAssignment) {
        self.assignments.push(assignment);
    }

    /// Records a lecture as unassignable.
    pub fn add_unassigned(&mut self, course_id: impl Into<String>, lecture: u32) {
        self.unassigned.push(UnassignedLecture {
            course_id: course_id.into(),
            lecture,
        });
    }

    /// Number of placed lectures.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every demanded lecture received a slot.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// All assignments belonging to a course, in placement order.
    pub fn assignments_for_course(&self, course_id: &str) -> Vec<&LectureAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .collect()
    }

    /// Whether some lecture already occupies the given slot.
    pub fn is_slot_occupied(&self, day: u32, period: u32, room_id: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.day == day && a.period == period && a.room_id == room_id)
    }

    /// Whether the course already has a lecture at the given day and period.
    pub fn has_lecture_at(&self, course_id: &str, day: u32, period: u32) -> bool {
        self.assignments
            .iter()
            .any(|a| a.course_id == course_id && a.day == day && a.period == period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c1", 1, 0, "rA", 2));
        s.add_assignment(LectureAssignment::new("c2", 0, 1, "rB", 1));
        s
    }

    #[test]
    fn test_assignment_queries() {
        let s = sample_schedule();
        assert_eq!(s.assignment_count(), 3);
        assert_eq!(s.assignments_for_course("c1").len(), 2);
        assert_eq!(s.assignments_for_course("c2").len(), 1);
        assert!(s.assignments_for_course("c3").is_empty());
    }

    #[test]
    fn test_slot_occupancy() {
        let s = sample_schedule();
        assert!(s.is_slot_occupied(0, 0, "rA"));
        assert!(!s.is_slot_occupied(0, 0, "rB"));
        assert!(!s.is_slot_occupied(2, 0, "rA"));
    }

    #[test]
    fn test_has_lecture_at() {
        let s = sample_schedule();
        assert!(s.has_lecture_at("c1", 0, 0));
        assert!(!s.has_lecture_at("c1", 0, 1));
        assert!(!s.has_lecture_at("c2", 1, 0));
    }

    #[test]
    fn test_completeness() {
        let mut s = sample_schedule();
        assert!(s.is_complete());
        s.add_unassigned("c3", 1);
        assert!(!s.is_complete());
        assert_eq!(s.unassigned[0].course_id, "c3");
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.assignment_count(), 0);
        assert!(s.is_complete());
        assert!(!s.is_slot_occupied(0, 0, "rA"));
    }
}
