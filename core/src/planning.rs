//! Sprint planning — triage-meeting prioritization and commitment.
//!
//! Rendering the plan as markdown is the runner's job; the core only
//! produces the structured outcome.

use crate::team::TeamMember;
use crate::ticket::Ticket;
use crate::types::TicketId;

/// Points of capacity one fully available member brings to a sprint.
const POINTS_PER_MEMBER: f64 = 8.0;

/// Outcome of the triage meeting.
#[derive(Debug, Clone)]
pub struct TriagePlan {
    /// Tickets committed for the sprint, in working order.
    pub committed: Vec<TicketId>,
    /// Team capacity in story points.
    pub capacity: u32,
    /// Points committed against that capacity.
    pub committed_points: u32,
    /// "A->B" pairs for sequenced dependent work.
    pub dependency_chains: Vec<String>,
    /// Tickets reviewed in the meeting.
    pub reviewed: usize,
}

/// Order tickets for triage: dependencies before dependents, seeded in
/// priority order (Critical first). Returns indices into `tickets`.
pub fn prioritize_tickets(tickets: &[Ticket]) -> Vec<usize> {
    let mut seed_order: Vec<usize> = (0..tickets.len()).collect();
    seed_order.sort_by_key(|&i| tickets[i].priority.triage_rank());

    let mut visited = vec![false; tickets.len()];
    let mut ordered = Vec::with_capacity(tickets.len());
    for i in seed_order {
        visit(i, tickets, &mut visited, &mut ordered);
    }
    ordered
}

fn visit(i: usize, tickets: &[Ticket], visited: &mut [bool], ordered: &mut Vec<usize>) {
    if visited[i] {
        return;
    }
    // Marked before recursing so a dependency cycle terminates.
    visited[i] = true;
    for dep in &tickets[i].dependencies {
        if let Some(j) = tickets.iter().position(|t| &t.ticket_id == dep) {
            visit(j, tickets, visited, ordered);
        }
    }
    ordered.push(i);
}

/// Simulate the triage meeting: prioritize the backlog, then commit
/// tickets the team has both capacity and skills for.
pub fn simulate_triage_meeting(tickets: &[Ticket], team: &[TeamMember]) -> TriagePlan {
    let ordered = prioritize_tickets(tickets);

    let capacity =
        (team.iter().map(|m| m.availability).sum::<f64>() * POINTS_PER_MEMBER) as u32;
    let mut committed = Vec::new();
    let mut committed_points = 0u32;

    for &i in &ordered {
        let effort = tickets[i].estimated_effort.unwrap_or(1);
        if committed_points + effort > capacity {
            continue;
        }
        if team.iter().any(|m| m.can_handle(&tickets[i])) {
            committed.push(tickets[i].ticket_id.clone());
            committed_points += effort;
        }
    }

    let dependency_chains = ordered
        .iter()
        .flat_map(|&i| {
            tickets[i]
                .dependencies
                .iter()
                .map(move |dep| format!("{}->{dep}", tickets[i].ticket_id))
        })
        .collect();

    log::debug!(
        "triage: reviewed {} tickets, committed {committed_points}/{capacity} pts",
        tickets.len()
    );

    TriagePlan {
        committed,
        capacity,
        committed_points,
        dependency_chains,
        reviewed: tickets.len(),
    }
}
