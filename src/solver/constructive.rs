//! Constructive timetable builders.
//!
//! Two one-shot heuristics share a single assignment loop over a pool of
//! (day, period, room) slots. Each pool slot is a one-time resource:
//! consuming it on assignment is what keeps room/time exclusivity intact
//! during normal construction.
//!
//! `PrioritySolver` orders courses by slots-per-lecture ratio so the most
//! demanding courses pick while the pool is richest. `RandomSolver`
//! shuffles the pool once and takes courses in instance order; it exists
//! as a quality baseline, not a target solution.
//!
//! Neither variant improves its result afterwards. A caller wanting a
//! better timetable solves again (for the randomized variant, with a
//! different generator state) and keeps the best score.
//!
//! # Reference
//! Carter & Laporte (1998), "Recent developments in practical course
//! timetabling"

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::feasibility::is_feasible;
use crate::models::{Course, LectureAssignment, Problem, Schedule};

/// One bookable (day, period, room) unit of time and space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Day index (0-based).
    pub day: u32,
    /// Period index within the day (0-based).
    pub period: u32,
    /// Room identifier.
    pub room_id: String,
}

/// The full day × period × room product in construction order.
///
/// Built fresh for every solve call; no pool state survives a build.
fn slot_pool(problem: &Problem) -> Vec<Slot> {
    let mut pool = Vec::with_capacity(problem.total_slots() as usize);
    for day in 0..problem.days {
        for period in 0..problem.periods_per_day {
            for room in &problem.rooms {
                pool.push(Slot {
                    day,
                    period,
                    room_id: room.id.clone(),
                });
            }
        }
    }
    pool
}

/// Deterministic greedy builder.
///
/// Courses are processed ascending by `total_slots / lectures` (a course
/// demanding relatively more lectures goes first), ties broken by course
/// id; the pool is scanned in construction order and the first feasible
/// slot wins.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, Problem, Room};
/// use u_timetable::solver::PrioritySolver;
///
/// let problem = Problem::new(1, 1)
///     .with_course(Course::new("c1", "t1").with_lectures(1))
///     .with_room(Room::new("rA", 30));
///
/// let schedule = PrioritySolver::new().solve(&problem);
/// assert_eq!(schedule.assignment_count(), 1);
/// assert!(schedule.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct PrioritySolver;

impl PrioritySolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Builds a schedule for the given instance.
    pub fn solve(&self, problem: &Problem) -> Schedule {
        let total_slots = problem.total_slots();
        let mut order: Vec<&Course> = problem.courses.iter().collect();
        order.sort_by(|a, b| {
            slots_per_lecture(total_slots, a)
                .partial_cmp(&slots_per_lecture(total_slots, b))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        assign_courses(problem, &order, slot_pool(problem))
    }
}

impl Default for PrioritySolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Randomized baseline builder.
///
/// Identical assignment loop, but the pool is shuffled once up front and
/// courses are taken in the instance's natural order. Expected to violate
/// more hard constraints on average than [`PrioritySolver`].
#[derive(Debug, Clone)]
pub struct RandomSolver;

impl RandomSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Builds a schedule using the thread-local generator.
    pub fn solve(&self, problem: &Problem) -> Schedule {
        self.solve_with(problem, &mut rand::rng())
    }

    /// Builds a schedule using the supplied generator.
    ///
    /// Inject a seeded generator to make a build reproducible.
    pub fn solve_with<R: Rng + ?Sized>(&self, problem: &Problem, rng: &mut R) -> Schedule {
        let mut pool = slot_pool(problem);
        pool.shuffle(rng);

        let order: Vec<&Course> = problem.courses.iter().collect();
        assign_courses(problem, &order, pool)
    }
}

impl Default for RandomSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Slots-per-lecture priority ratio; lower schedules earlier.
fn slots_per_lecture(total_slots: u32, course: &Course) -> f64 {
    if course.lectures == 0 {
        0.0
    } else {
        f64::from(total_slots) / f64::from(course.lectures)
    }
}

/// Shared assignment loop over a course order and a slot pool.
///
/// Per lecture: first feasible pool slot wins and is consumed. Lectures
/// with no feasible slot are parked; once every course has been processed
/// they take whatever remains at the front of the pool with no feasibility
/// check, and anything beyond the pool is reported as unassigned.
fn assign_courses(problem: &Problem, order: &[&Course], mut pool: Vec<Slot>) -> Schedule {
    let mut schedule = Schedule::new();
    let mut unscheduled: Vec<(String, u32)> = Vec::new();

    for course in order {
        for lecture in 1..=course.lectures {
            let found = pool.iter().position(|slot| {
                is_feasible(
                    problem,
                    &schedule,
                    &course.id,
                    slot.day,
                    slot.period,
                    &slot.room_id,
                )
            });

            match found {
                Some(idx) => {
                    let slot = pool.remove(idx);
                    schedule.add_assignment(LectureAssignment::new(
                        &course.id,
                        slot.day,
                        slot.period,
                        slot.room_id,
                        lecture,
                    ));
                }
                None => unscheduled.push((course.id.clone(), lecture)),
            }
        }
    }

    for (course_id, lecture) in unscheduled {
        if pool.is_empty() {
            warn!(course = %course_id, lecture, "slot pool exhausted, lecture left unassigned");
            schedule.add_unassigned(course_id, lecture);
        } else {
            // Forced placement: consumes the slot even where it collides.
            let slot = pool.remove(0);
            schedule.add_assignment(LectureAssignment::new(
                course_id,
                slot.day,
                slot.period,
                slot.room_id,
                lecture,
            ));
        }
    }

    debug!(
        assigned = schedule.assignment_count(),
        unassigned = schedule.unassigned.len(),
        "constructive build finished"
    );

    schedule
}
