//! Daily work engine — plays out one team member's workday over their
//! assigned tickets.
//!
//! Ticket handling, in list order:
//!   1. Capability gate: skip, state untouched, when the member cannot
//!      handle the ticket.
//!   2. Dependency gate: Blocked while any dependency on the board is
//!      still open.
//!   3. Start → effort estimate → either escalate (skill < 6 and the
//!      estimate exceeds the threshold) or complete.
//!
//! A day with any Critical ticket runs in after-hours mode; if the
//! normal entries never left business hours, one extra incident-response
//! entry is forced past 18:00.

use crate::{
    rng::SimRng,
    schedule::TimestampSequencer,
    team::TeamMember,
    ticket::{Priority, Ticket, TicketStatus},
    types::{Day, TicketId},
};

/// Effort above which a junior (skill < 6) hands the ticket back.
pub const ESCALATION_THRESHOLD: u32 = 5;

/// What one member-day produced: the narrative log lines in emission
/// order, and the tickets handed back for senior routing.
#[derive(Debug, Default)]
pub struct DayOutcome {
    pub logs: Vec<String>,
    pub escalated: Vec<TicketId>,
}

/// Simulate one member's workday.
///
/// `board` is the live ticket lookup (the backlog); completed tickets
/// are all Closed, so an id absent from the board carries no
/// dependency constraint. `assigned` indexes into `board`.
pub fn simulate_work_day(
    member: &mut TeamMember,
    board: &mut [Ticket],
    assigned: &[usize],
    day: Day,
    rng: &mut SimRng,
) -> DayOutcome {
    let after_hours = assigned
        .iter()
        .any(|&i| board[i].priority == Priority::Critical);
    let mut seq = TimestampSequencer::new(day, after_hours);
    let mut outcome = DayOutcome::default();

    log::debug!(
        "day={day} {}: {} assigned ticket(s){}",
        member.name,
        assigned.len(),
        if after_hours { " [after-hours]" } else { "" }
    );

    outcome.logs.push(format!(
        "{} | {} | Planning and standup",
        seq.next(rng),
        member.name
    ));

    for &idx in assigned {
        if !member.can_handle(&board[idx]) {
            outcome.logs.push(format!(
                "{} | {} | Unable to work on {}",
                seq.next(rng),
                member.name,
                board[idx].ticket_id
            ));
            continue;
        }

        let unresolved = board[idx].unresolved_dependencies(board);
        if !unresolved.is_empty() {
            board[idx].status = TicketStatus::Blocked;
            outcome.logs.push(format!(
                "{} | {} | Blocked on {} waiting for {}",
                seq.next(rng),
                member.name,
                board[idx].ticket_id,
                unresolved.join(",")
            ));
            continue;
        }

        outcome.logs.push(format!(
            "{} | {} | Started {}: {}",
            seq.next(rng),
            member.name,
            board[idx].ticket_id,
            board[idx].description
        ));
        board[idx].status = TicketStatus::InProgress;
        board[idx].assigned_to = Some(member.name.clone());

        let effort = member.estimate_effort(&board[idx]);

        if member.skill_level < 6 && effort > ESCALATION_THRESHOLD {
            board[idx].status = TicketStatus::Open;
            board[idx].assigned_to = None;
            outcome.logs.push(format!(
                "{} | {} | Escalating {} to senior engineer",
                seq.next(rng),
                member.name,
                board[idx].ticket_id
            ));
            log::info!(
                "day={day} {} escalated {} (estimated {effort} pts)",
                member.name,
                board[idx].ticket_id
            );
            outcome.escalated.push(board[idx].ticket_id.clone());
            continue;
        }

        let ts = seq.next(rng);
        board[idx].actual_effort = Some(effort);
        board[idx].status = TicketStatus::Closed;
        board[idx].completed_timestamp = Some(seq.current());
        member.current_workload += effort;
        member.completed_tickets.push(board[idx].ticket_id.clone());
        outcome.logs.push(format!(
            "{ts} | {} | Completed {} in {effort} pts",
            member.name, board[idx].ticket_id
        ));
    }

    outcome.logs.push(format!(
        "{} | {} | Wrap up and documentation",
        seq.next(rng),
        member.name
    ));

    if after_hours && seq.within_business_hours() {
        outcome.logs.push(format!(
            "{} | {} | After-hours incident response",
            seq.next_after_hours(rng),
            member.name
        ));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketSource;

    fn ticket(id: &str, category: &str, points: u32) -> Ticket {
        Ticket::new(
            id,
            TicketSource::ServiceNow,
            Priority::Medium,
            category,
            "test work item",
        )
        .with_effort(points)
    }

    #[test]
    fn incapable_member_leaves_ticket_untouched() {
        let mut member = TeamMember::new("junior", "Junior Engineer", 4, &["Email"]);
        let mut board = vec![ticket("SNW-1", "Networking", 2)];

        let outcome = simulate_work_day(&mut member, &mut board, &[0], 1, &mut SimRng::new(1, 0));

        assert_eq!(board[0].status, TicketStatus::Open);
        assert!(board[0].assigned_to.is_none());
        assert!(
            outcome.logs.iter().any(|l| l.contains("Unable to work on SNW-1")),
            "expected an unable-to-work log line"
        );
    }

    #[test]
    fn completion_accrues_workload_and_closes_ticket() {
        let mut member = TeamMember::new("mid", "Engineer", 5, &["Email"]);
        let mut board = vec![ticket("SNW-1", "Email", 3)];

        let outcome = simulate_work_day(&mut member, &mut board, &[0], 1, &mut SimRng::new(1, 0));

        assert_eq!(board[0].status, TicketStatus::Closed);
        assert_eq!(board[0].actual_effort, Some(3));
        assert!(board[0].completed_timestamp.is_some());
        assert_eq!(member.current_workload, 3);
        assert_eq!(member.completed_tickets, vec!["SNW-1".to_string()]);
        assert!(outcome.escalated.is_empty());
    }

    #[test]
    fn junior_escalates_heavy_ticket() {
        // skill 4 → factor 1.1; 8 × 1.1 = 8.8 → 9 pts, over the threshold
        let mut member = TeamMember::new("junior", "Junior Engineer", 4, &["Email"]);
        let mut board = vec![ticket("SNW-1", "Email", 8)];

        let outcome = simulate_work_day(&mut member, &mut board, &[0], 1, &mut SimRng::new(1, 0));

        assert_eq!(board[0].status, TicketStatus::Open);
        assert!(board[0].assigned_to.is_none());
        assert!(board[0].actual_effort.is_none());
        assert_eq!(member.current_workload, 0);
        assert_eq!(outcome.escalated, vec!["SNW-1".to_string()]);
        assert!(
            outcome.logs.iter().any(|l| l.contains("Escalating SNW-1")),
            "expected an escalation log line"
        );
    }

    #[test]
    fn unresolved_dependency_blocks_ticket() {
        let mut member = TeamMember::new("senior", "Senior Engineer", 8, &[]);
        let mut board = vec![
            ticket("SNW-1", "Email", 2),
            ticket("SNW-2", "Email", 2).with_dependency("SNW-1"),
        ];

        // Work only the dependent ticket; its dependency is still Open.
        simulate_work_day(&mut member, &mut board, &[1], 1, &mut SimRng::new(1, 0));

        assert_eq!(board[1].status, TicketStatus::Blocked);
        assert!(board[1].assigned_to.is_none());
    }

    #[test]
    fn absent_dependency_is_no_constraint() {
        let mut member = TeamMember::new("senior", "Senior Engineer", 8, &[]);
        let mut board = vec![ticket("SNW-1", "Email", 2).with_dependency("SNW-9999")];

        simulate_work_day(&mut member, &mut board, &[0], 1, &mut SimRng::new(1, 0));

        assert_eq!(board[0].status, TicketStatus::Closed);
    }
}
