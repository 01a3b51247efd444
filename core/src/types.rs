//! Shared primitive types used across the entire simulation.

/// A simulation day. Days are 1-based; day 1 is the first sprint day.
pub type Day = u64;

/// A stable, unique ticket identifier, e.g. "SNW-1004" or "JIRA-2001".
pub type TicketId = String;

/// The canonical run identifier.
pub type RunId = String;
