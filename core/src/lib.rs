//! Sprint Desk — a deterministic sprint simulation for a small IT
//! support team.
//!
//! A synthetic ticket backlog is assigned day-by-day to the roster,
//! the workday engine plays out each member's day (dependency gating,
//! effort estimation, escalation), and an end-of-sprint snapshot
//! aggregates the results.
//!
//! RULES:
//!   - Single-threaded and fully synchronous; day N's full cycle
//!     completes before day N+1 begins.
//!   - Members are processed in fixed roster order in every pass.
//!   - All randomness flows through the RngBank streams.

pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod planning;
pub mod rng;
pub mod schedule;
pub mod sprint;
pub mod team;
pub mod ticket;
pub mod types;
pub mod workday;
