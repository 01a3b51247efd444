//! End-of-sprint metrics snapshot.

use crate::team::TeamMember;
use crate::ticket::Ticket;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate sprint results, serializable as a flat document.
#[derive(Debug, Clone, Serialize)]
pub struct SprintMetrics {
    /// Backlog plus completed work.
    pub total_tickets: usize,
    pub completed_tickets: usize,
    /// Realized effort points over completed work (actual effort,
    /// falling back to the estimate, then 0).
    pub velocity: u32,
    pub completed_by_priority: BTreeMap<String, usize>,
    pub completed_by_category: BTreeMap<String, usize>,
    /// Cumulative workload per member.
    pub utilization: BTreeMap<String, u32>,
    /// Escalation events observed in the log stream.
    pub escalations: usize,
}

impl SprintMetrics {
    pub fn compute(
        backlog: &[Ticket],
        completed: &[Ticket],
        team: &[TeamMember],
        logs: &[String],
    ) -> Self {
        let velocity = completed
            .iter()
            .map(|t| t.actual_effort.or(t.estimated_effort).unwrap_or(0))
            .sum();

        let mut completed_by_priority: BTreeMap<String, usize> = BTreeMap::new();
        let mut completed_by_category: BTreeMap<String, usize> = BTreeMap::new();
        for ticket in completed {
            *completed_by_priority
                .entry(ticket.priority.as_str().to_string())
                .or_insert(0) += 1;
            *completed_by_category
                .entry(ticket.category.clone())
                .or_insert(0) += 1;
        }

        let utilization = team
            .iter()
            .map(|m| (m.name.clone(), m.current_workload))
            .collect();

        let escalations = logs.iter().filter(|l| l.contains("Escalating")).count();

        Self {
            total_tickets: backlog.len() + completed.len(),
            completed_tickets: completed.len(),
            velocity,
            completed_by_priority,
            completed_by_category,
            utilization,
            escalations,
        }
    }
}
