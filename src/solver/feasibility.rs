//! Hard-feasibility check for a candidate placement.
//!
//! Decides whether one lecture of a course may occupy a (day, period, room)
//! slot given everything already placed. The constructive solvers call this
//! for every pool slot they consider; the checks are ordered so the cheap
//! slot-occupancy test runs first and any failure short-circuits.
//!
//! Scans are linear over the placed assignments. Instance sizes in this
//! problem class are small enough that indexing by (day, period) buys
//! nothing; behavior, not speed, is the contract here.

use crate::models::{Problem, Schedule};

/// Whether placing a lecture of `course_id` at (day, period, room) keeps
/// the schedule hard-feasible.
///
/// Checks, in order, each short-circuiting to `false`:
/// 1. Room/time exclusivity: the slot is not already occupied.
/// 2. Teacher conflict: no placed lecture shares the teacher at (day, period).
/// 3. Curriculum conflict: no curriculum containing the course already has
///    a lecture at (day, period).
/// 4. Unavailability: (course, day, period) is not a forbidden combination.
///
/// Pure function; a course id unknown to the problem is never feasible.
pub fn is_feasible(
    problem: &Problem,
    schedule: &Schedule,
    course_id: &str,
    day: u32,
    period: u32,
    room_id: &str,
) -> bool {
    if schedule.is_slot_occupied(day, period, room_id) {
        return false;
    }

    let Some(course) = problem.course(course_id) else {
        return false;
    };

    for placed in &schedule.assignments {
        if placed.day != day || placed.period != period {
            continue;
        }
        if let Some(other) = problem.course(&placed.course_id) {
            if other.teacher == course.teacher {
                return false;
            }
        }
    }

    for curriculum in problem.curricula_of(course_id) {
        for member in &curriculum.courses {
            if schedule.has_lecture_at(member, day, period) {
                return false;
            }
        }
    }

    if problem.is_unavailable(course_id, day, period) {
        return false;
    }

    true
}
