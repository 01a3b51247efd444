//! Ticket model — the unit of work flowing through the sprint.

use crate::types::TicketId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Originating ticket system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TicketSource {
    ServiceNow,
    Jira,
}

impl TicketSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceNow => "ServiceNow",
            Self::Jira => "Jira",
        }
    }
}

/// Ticket priority, highest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Triage sort rank — lower triages first.
    pub fn triage_rank(&self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }
}

/// Ticket lifecycle states.
///
/// Open → Assigned → InProgress → Closed, with Blocked reachable from
/// Open/Assigned while dependencies are unresolved (reverting to Open
/// once they clear), and InProgress → Open on escalation.
/// Closed is terminal — a Closed ticket is never revisited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    Blocked,
    Closed,
}

/// A work ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub source: TicketSource,
    pub priority: Priority,
    pub category: String,
    pub description: String,
    pub estimated_effort: Option<u32>,
    /// Set exactly once, when the ticket closes.
    pub actual_effort: Option<u32>,
    pub status: TicketStatus,
    pub assigned_to: Option<String>,
    pub created_timestamp: Option<NaiveDateTime>,
    pub completed_timestamp: Option<NaiveDateTime>,
    /// May reference ids absent from the board — those carry no
    /// constraint.
    pub dependencies: Vec<TicketId>,
}

impl Ticket {
    /// Build an Open ticket with no assignment history.
    pub fn new(
        ticket_id: impl Into<TicketId>,
        source: TicketSource,
        priority: Priority,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            source,
            priority,
            category: category.into(),
            description: description.into(),
            estimated_effort: None,
            actual_effort: None,
            status: TicketStatus::Open,
            assigned_to: None,
            created_timestamp: None,
            completed_timestamp: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_effort(mut self, points: u32) -> Self {
        self.estimated_effort = Some(points);
        self
    }

    pub fn with_dependency(mut self, dep: impl Into<TicketId>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    /// Dependency ids that resolve to a non-Closed ticket on the board.
    pub fn unresolved_dependencies(&self, board: &[Ticket]) -> Vec<TicketId> {
        self.dependencies
            .iter()
            .filter(|dep| {
                board
                    .iter()
                    .any(|t| &t.ticket_id == *dep && t.status != TicketStatus::Closed)
            })
            .cloned()
            .collect()
    }
}
