//! Constructive solvers and penalty evaluation.
//!
//! Provides the hard-feasibility predicate, two one-shot timetable
//! builders, and the hard/soft scoring functions.
//!
//! # Algorithm
//!
//! Both builders consume a fresh pool of (day, period, room) slots and
//! give each lecture the first slot the feasibility check accepts.
//! `PrioritySolver` orders courses by demand-to-supply ratio;
//! `RandomSolver` shuffles the pool and keeps the instance's course order.
//!
//! # Scoring
//!
//! `hard_penalty` quantifies residual infeasibility (double bookings,
//! teacher and curriculum clashes, unavailability violations at weight
//! 100); `soft_penalty` quantifies quality (room capacity and stability,
//! minimum working days, curriculum compactness).
//!
//! # References
//!
//! - Di Gaspero, McCollum, Schaerf (2007), ITC-2007 Track 3
//! - Carter & Laporte (1998), "Recent developments in practical course
//!   timetabling"

mod constructive;
mod feasibility;
mod penalty;

pub use constructive::{PrioritySolver, RandomSolver, Slot};
pub use feasibility::is_feasible;
pub use penalty::{hard_penalty, soft_penalty, SchedulePenalty};
