//! Hard and soft penalty evaluation.
//!
//! Scores a finished schedule against the constraint set. Hard rules mark
//! invalid real-world timetables and weigh 100 per excess occurrence; soft
//! rules grade quality. Both evaluators are pure, total over any schedule
//! (missing or colliding lectures included), and independent of container
//! iteration order.
//!
//! # Rules
//!
//! | Rule | Meaning | Weight |
//! |------|---------|--------|
//! | H2 | two lectures in one (day, period, room) | 100 × excess |
//! | H3 | teacher double-booked in a (day, period) | 100 × excess |
//! | H3 | curriculum double-booked in a (day, period) | 100 × excess |
//! | H4 | lecture on a forbidden (course, day, period) | 100 each |
//! | S1 | students beyond room capacity | 1 per seat |
//! | S2 | course spread over several rooms | 1 per extra room |
//! | S3 | lectures on fewer days than required | 5 per missing day |
//! | S4 | gap between curriculum lectures within a day | 2 per gap |
//!
//! # Reference
//! Bonutti, De Cesco, Di Gaspero, Schaerf (2012), "Benchmarking
//! curriculum-based course timetabling"

use std::collections::{HashMap, HashSet};

use crate::models::{Problem, Schedule};

/// Weight of one excess occurrence under any hard rule.
const HARD_WEIGHT: u32 = 100;
/// Weight per day missing from a course's minimum working days (S3).
const MIN_DAYS_WEIGHT: u32 = 5;
/// Weight per hole in a curriculum's daily period sequence (S4).
const COMPACTNESS_WEIGHT: u32 = 2;

/// Total hard penalty of a schedule.
///
/// Sums the H2, H3 (teacher and curriculum), and H4 contributions. Zero
/// means no invalid double-booking or unavailability violation remains.
pub fn hard_penalty(schedule: &Schedule, problem: &Problem) -> u32 {
    room_conflicts(schedule)
        + teacher_conflicts(schedule, problem)
        + curriculum_conflicts(schedule, problem)
        + unavailability_violations(schedule, problem)
}

/// Total soft penalty of a schedule.
///
/// Sums the S1 through S4 contributions.
pub fn soft_penalty(schedule: &Schedule, problem: &Problem) -> u32 {
    room_capacity(schedule, problem)
        + room_stability(schedule)
        + min_working_days(schedule, problem)
        + curriculum_compactness(schedule, problem)
}

/// Per-rule penalty breakdown.
///
/// Every field already carries its rule weight; `hard()`, `soft()`, and
/// `total()` are plain sums. Computed once per schedule, consumed by
/// reporting layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePenalty {
    /// H2: slots hosting more than one lecture.
    pub room_conflicts: u32,
    /// H3: teachers giving two lectures in one day and period.
    pub teacher_conflicts: u32,
    /// H3: curricula with two lectures in one day and period.
    pub curriculum_conflicts: u32,
    /// H4: lectures sitting on forbidden (course, day, period) rows.
    pub unavailability_violations: u32,
    /// S1: enrolled students beyond seat capacity.
    pub room_capacity: u32,
    /// S2: extra rooms used per course.
    pub room_stability: u32,
    /// S3: days missing from courses' minimum working days.
    pub min_working_days: u32,
    /// S4: holes in curricula's daily period sequences.
    pub curriculum_compactness: u32,
}

impl SchedulePenalty {
    /// Computes the full breakdown for a schedule.
    pub fn calculate(schedule: &Schedule, problem: &Problem) -> Self {
        Self {
            room_conflicts: room_conflicts(schedule),
            teacher_conflicts: teacher_conflicts(schedule, problem),
            curriculum_conflicts: curriculum_conflicts(schedule, problem),
            unavailability_violations: unavailability_violations(schedule, problem),
            room_capacity: room_capacity(schedule, problem),
            room_stability: room_stability(schedule),
            min_working_days: min_working_days(schedule, problem),
            curriculum_compactness: curriculum_compactness(schedule, problem),
        }
    }

    /// Hard penalty: H2 + H3 + H4.
    pub fn hard(&self) -> u32 {
        self.room_conflicts
            + self.teacher_conflicts
            + self.curriculum_conflicts
            + self.unavailability_violations
    }

    /// Soft penalty: S1 + S2 + S3 + S4.
    pub fn soft(&self) -> u32 {
        self.room_capacity
            + self.room_stability
            + self.min_working_days
            + self.curriculum_compactness
    }

    /// Hard + soft.
    pub fn total(&self) -> u32 {
        self.hard() + self.soft()
    }
}

/// H2: group assignments by (day, period, room) and charge each slot's
/// occupancy beyond one.
fn room_conflicts(schedule: &Schedule) -> u32 {
    let mut occupancy: HashMap<(u32, u32, &str), u32> = HashMap::new();
    for a in &schedule.assignments {
        *occupancy.entry((a.day, a.period, a.room_id.as_str())).or_insert(0) += 1;
    }

    excess_penalty(&occupancy)
}

/// H3 (teacher): group by (day, period, teacher).
fn teacher_conflicts(schedule: &Schedule, problem: &Problem) -> u32 {
    let mut occupancy: HashMap<(u32, u32, &str), u32> = HashMap::new();
    for a in &schedule.assignments {
        if let Some(course) = problem.course(&a.course_id) {
            *occupancy.entry((a.day, a.period, course.teacher.as_str())).or_insert(0) += 1;
        }
    }

    excess_penalty(&occupancy)
}

/// H3 (curriculum): per curriculum, group member lectures by (day, period).
fn curriculum_conflicts(schedule: &Schedule, problem: &Problem) -> u32 {
    let mut occupancy: HashMap<(&str, u32, u32), u32> = HashMap::new();
    for curriculum in &problem.curricula {
        for course_id in &curriculum.courses {
            for a in schedule.assignments_for_course(course_id) {
                *occupancy.entry((curriculum.id.as_str(), a.day, a.period)).or_insert(0) += 1;
            }
        }
    }

    excess_penalty(&occupancy)
}

/// H4: flat charge per lecture sitting on a forbidden (course, day, period).
fn unavailability_violations(schedule: &Schedule, problem: &Problem) -> u32 {
    let violating = schedule
        .assignments
        .iter()
        .filter(|a| problem.is_unavailable(&a.course_id, a.day, a.period))
        .count() as u32;

    HARD_WEIGHT * violating
}

/// `100 × (count − 1)` summed over every over-occupied key.
fn excess_penalty<K>(occupancy: &HashMap<K, u32>) -> u32 {
    occupancy
        .values()
        .filter(|&&count| count > 1)
        .map(|&count| HARD_WEIGHT * (count - 1))
        .sum()
}

/// S1: overflow seats, one point per student beyond capacity.
fn room_capacity(schedule: &Schedule, problem: &Problem) -> u32 {
    let mut penalty = 0;
    for a in &schedule.assignments {
        if let (Some(course), Some(room)) = (problem.course(&a.course_id), problem.room(&a.room_id))
        {
            penalty += course.students.saturating_sub(room.capacity);
        }
    }
    penalty
}

/// S2: one point per room a course uses beyond its first.
fn room_stability(schedule: &Schedule) -> u32 {
    let mut rooms_by_course: HashMap<&str, HashSet<&str>> = HashMap::new();
    for a in &schedule.assignments {
        rooms_by_course
            .entry(a.course_id.as_str())
            .or_default()
            .insert(a.room_id.as_str());
    }

    rooms_by_course
        .values()
        .map(|rooms| (rooms.len() as u32).saturating_sub(1))
        .sum()
}

/// S3: five points per day a course falls short of its minimum working
/// days, counting true distinct days.
fn min_working_days(schedule: &Schedule, problem: &Problem) -> u32 {
    let mut penalty = 0;
    for course in &problem.courses {
        let days: HashSet<u32> = schedule
            .assignments_for_course(&course.id)
            .iter()
            .map(|a| a.day)
            .collect();

        let distinct = days.len() as u32;
        if distinct < course.min_working_days {
            penalty += MIN_DAYS_WEIGHT * (course.min_working_days - distinct);
        }
    }
    penalty
}

/// S4: per curriculum and day, two points for every adjacent pair of used
/// periods that are not consecutive.
fn curriculum_compactness(schedule: &Schedule, problem: &Problem) -> u32 {
    let mut penalty = 0;
    for curriculum in &problem.curricula {
        let mut periods_by_day: HashMap<u32, HashSet<u32>> = HashMap::new();
        for course_id in &curriculum.courses {
            for a in schedule.assignments_for_course(course_id) {
                periods_by_day.entry(a.day).or_default().insert(a.period);
            }
        }

        for periods in periods_by_day.values() {
            let mut sorted: Vec<u32> = periods.iter().copied().collect();
            sorted.sort_unstable();
            let gaps = sorted.windows(2).filter(|pair| pair[1] != pair[0] + 1).count();
            penalty += COMPACTNESS_WEIGHT * gaps as u32;
        }
    }
    penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Curriculum, LectureAssignment, Room, Unavailability};

    fn make_problem() -> Problem {
        Problem::new(5, 4)
            .with_course(Course::new("c1", "t1").with_lectures(2).with_min_working_days(2).with_students(30))
            .with_course(Course::new("c2", "t1").with_lectures(1).with_students(25))
            .with_course(Course::new("c3", "t2").with_lectures(1).with_students(45))
            .with_room(Room::new("rA", 32))
            .with_room(Room::new("rB", 50))
            .with_curriculum(Curriculum::new("q1").with_course("c1").with_course("c3"))
            .with_unavailability(Unavailability::new("c2", 0, 0))
    }

    fn clean_schedule() -> Schedule {
        // Feasible by hand: distinct slots, teachers, curriculum periods;
        // rooms big enough; c1 on two days
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c1", 1, 0, "rA", 2));
        s.add_assignment(LectureAssignment::new("c2", 0, 1, "rA", 1));
        s.add_assignment(LectureAssignment::new("c3", 0, 1, "rB", 1));
        s
    }

    #[test]
    fn test_clean_schedule_scores_zero() {
        let p = make_problem();
        let s = clean_schedule();
        assert_eq!(hard_penalty(&s, &p), 0);
        assert_eq!(soft_penalty(&s, &p), 0);
    }

    #[test]
    fn test_room_conflict_penalized() {
        let p = make_problem();
        let mut s = clean_schedule();
        // Second occupant of (0, 0, rA)
        s.add_assignment(LectureAssignment::new("c3", 0, 0, "rA", 1));

        // H2 = 100; the extra lecture also collides on curriculum q1 at (0,0)
        assert_eq!(room_conflicts(&s), 100);
        assert!(hard_penalty(&s, &p) >= 100);
    }

    #[test]
    fn test_triple_booking_counts_excess() {
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("a", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("b", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c", 0, 0, "rA", 1));

        // Three occupants of one slot: 100 x (3 - 1)
        assert_eq!(room_conflicts(&s), 200);
    }

    #[test]
    fn test_teacher_conflict_penalized() {
        let p = make_problem();
        let mut s = Schedule::new();
        // c1 and c2 are both taught by t1
        s.add_assignment(LectureAssignment::new("c1", 2, 2, "rA", 1));
        s.add_assignment(LectureAssignment::new("c2", 2, 2, "rB", 1));

        assert_eq!(teacher_conflicts(&s, &p), 100);
        assert_eq!(room_conflicts(&s), 0);
    }

    #[test]
    fn test_curriculum_conflict_penalized() {
        let p = make_problem();
        let mut s = Schedule::new();
        // c1 and c3 share q1; different teachers and rooms
        s.add_assignment(LectureAssignment::new("c1", 3, 1, "rA", 1));
        s.add_assignment(LectureAssignment::new("c3", 3, 1, "rB", 1));

        assert_eq!(curriculum_conflicts(&s, &p), 100);
        assert_eq!(teacher_conflicts(&s, &p), 0);
    }

    #[test]
    fn test_unavailability_penalized() {
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c2", 0, 0, "rA", 1));

        assert_eq!(unavailability_violations(&s, &p), 100);
        assert_eq!(hard_penalty(&s, &p), 100);
    }

    #[test]
    fn test_hard_penalty_monotone_in_conflicts() {
        let p = make_problem();
        let mut s = clean_schedule();
        let before = hard_penalty(&s, &p);

        s.add_assignment(LectureAssignment::new("c2", 0, 0, "rA", 1));
        let after = hard_penalty(&s, &p);
        assert!(after > before);

        s.add_assignment(LectureAssignment::new("c3", 0, 0, "rA", 1));
        assert!(hard_penalty(&s, &p) > after);
    }

    #[test]
    fn test_room_capacity_overflow() {
        let p = make_problem();
        let mut s = Schedule::new();
        // 45 students into 32 seats
        s.add_assignment(LectureAssignment::new("c3", 1, 1, "rA", 1));
        assert_eq!(room_capacity(&s, &p), 13);

        // Fits exactly: no penalty
        let mut fits = Schedule::new();
        fits.add_assignment(LectureAssignment::new("c2", 1, 1, "rA", 1));
        assert_eq!(room_capacity(&fits, &p), 0);
    }

    #[test]
    fn test_room_stability() {
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c1", 1, 0, "rB", 2));
        s.add_assignment(LectureAssignment::new("c1", 2, 0, "rA", 3));

        // Two distinct rooms: one extra
        assert_eq!(room_stability(&s), 1);
    }

    #[test]
    fn test_min_working_days_same_day() {
        // min_working_days = 2 but both lectures land on day 0
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c1", 0, 1, "rA", 2));

        assert_eq!(min_working_days(&s, &p), 5);
    }

    #[test]
    fn test_min_working_days_satisfied() {
        let p = make_problem();
        let s = clean_schedule(); // c1 on days 0 and 1
        assert_eq!(min_working_days(&s, &p), 0);
    }

    #[test]
    fn test_compactness_gap() {
        // Curriculum lectures at periods 0 and 2 of one day skip period 1
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c3", 0, 2, "rB", 1));

        assert_eq!(curriculum_compactness(&s, &p), 2);
    }

    #[test]
    fn test_compactness_consecutive_periods() {
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("c1", 0, 0, "rA", 1));
        s.add_assignment(LectureAssignment::new("c3", 0, 1, "rB", 1));

        assert_eq!(curriculum_compactness(&s, &p), 0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let p = make_problem();
        let mut s = clean_schedule();
        s.add_assignment(LectureAssignment::new("c3", 0, 0, "rA", 1));

        assert_eq!(hard_penalty(&s, &p), hard_penalty(&s, &p));
        assert_eq!(soft_penalty(&s, &p), soft_penalty(&s, &p));
    }

    #[test]
    fn test_totals_independent_of_assignment_order() {
        let p = make_problem();
        let mut s = clean_schedule();
        s.add_assignment(LectureAssignment::new("c3", 0, 0, "rA", 1));

        let mut reversed = s.clone();
        reversed.assignments.reverse();

        assert_eq!(hard_penalty(&s, &p), hard_penalty(&reversed, &p));
        assert_eq!(soft_penalty(&s, &p), soft_penalty(&reversed, &p));
    }

    #[test]
    fn test_total_over_incomplete_schedule() {
        // Missing lectures never panic; S3 still charges the absent days
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_unassigned("c1", 1);
        s.add_unassigned("c1", 2);

        assert_eq!(hard_penalty(&s, &p), 0);
        // c1 demands 2 working days and has none
        assert_eq!(min_working_days(&s, &p), 10);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        // Hand-built schedule naming entities outside the problem
        let p = make_problem();
        let mut s = Schedule::new();
        s.add_assignment(LectureAssignment::new("ghost", 0, 0, "nowhere", 1));

        assert_eq!(teacher_conflicts(&s, &p), 0);
        assert_eq!(room_capacity(&s, &p), 0);
        assert_eq!(hard_penalty(&s, &p), 0);
    }

    #[test]
    fn test_breakdown_matches_evaluators() {
        let p = make_problem();
        let mut s = clean_schedule();
        s.add_assignment(LectureAssignment::new("c2", 0, 0, "rA", 1));

        let breakdown = SchedulePenalty::calculate(&s, &p);
        assert_eq!(breakdown.hard(), hard_penalty(&s, &p));
        assert_eq!(breakdown.soft(), soft_penalty(&s, &p));
        assert_eq!(breakdown.total(), breakdown.hard() + breakdown.soft());
        // The added lecture violates c2's unavailability row
        assert_eq!(breakdown.unavailability_violations, 100);
    }
}
