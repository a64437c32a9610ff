//! Curriculum-based course timetabling engine.
//!
//! Builds and scores lecture timetables: every lecture of every course is
//! assigned a (day, period, room) slot while hard constraints are respected
//! as far as construction allows, and hard/soft penalty functions grade any
//! candidate schedule. Instance parsing and report rendering live in the
//! surrounding collaborators — this crate receives a populated [`models::Problem`]
//! and hands back a [`models::Schedule`] with its scores.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `Curriculum`,
//!   `Unavailability`, `Problem`, `Schedule`, `LectureAssignment`
//! - **`solver`**: Feasibility check, `PrioritySolver`, `RandomSolver`,
//!   and penalty evaluation
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   course references, out-of-grid unavailability slots)
//!
//! # Architecture
//!
//! Construction is one-shot: a builder produces a schedule once and never
//! improves it. Iterative improvement (local search, metaheuristics) is a
//! separate layer that this crate deliberately does not contain; repeated
//! randomized builds with fresh generator states are the supported way to
//! sample alternatives.
//!
//! # References
//!
//! - Di Gaspero, McCollum, Schaerf (2007), "The Second International
//!   Timetabling Competition: Curriculum-based Course Timetabling"
//! - Bonutti, De Cesco, Di Gaspero, Schaerf (2012), "Benchmarking
//!   curriculum-based course timetabling"

pub mod models;
pub mod solver;
pub mod validation;
