//! End-to-end sprint runs: assignment, completion, and workload
//! bookkeeping.

use sprintdesk_core::{
    generator::TicketGenerator,
    rng::{RngBank, StreamSlot},
    sprint::SprintSimulator,
    team::TeamMember,
    ticket::{Priority, Ticket, TicketSource, TicketStatus},
};

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
fn two_tickets_two_members_close_in_one_day() {
    let team = vec![
        TeamMember::new("dev", "Developer", 6, &["Email"]),
        TeamMember::new("junior", "Junior Engineer", 5, &["Slack"]),
    ];
    let mut sim = SprintSimulator::new(team, 1, 42);
    sim.set_backlog(vec![
        ticket("SNW-1", "Email", 3),
        ticket("SNW-2", "Slack", 2),
    ]);

    let logs = sim.run_complete_simulation().to_vec();

    assert!(!logs.is_empty(), "expected a non-empty log stream");
    assert_eq!(
        sim.completed_work().len(),
        2,
        "both tickets should close on day 1"
    );
    for t in sim.completed_work() {
        assert_eq!(t.status, TicketStatus::Closed);
        assert!(t.actual_effort.is_some(), "{} closed without actual effort", t.ticket_id);
    }
    assert_eq!(sim.completed_work()[0].assigned_to.as_deref(), Some("dev"));
    assert_eq!(sim.completed_work()[1].assigned_to.as_deref(), Some("junior"));
}

#[test]
fn first_capable_member_in_roster_order_wins() {
    // Both members can handle Email; the earlier roster slot claims it.
    let team = vec![
        TeamMember::new("first", "Engineer", 5, &["Email"]),
        TeamMember::new("second", "Engineer", 5, &["Email"]),
    ];
    let mut sim = SprintSimulator::new(team, 1, 42);
    sim.set_backlog(vec![ticket("SNW-1", "Email", 2)]);

    sim.run_complete_simulation();

    assert_eq!(sim.completed_work().len(), 1);
    assert_eq!(
        sim.completed_work()[0].assigned_to.as_deref(),
        Some("first"),
        "first-match assignment must follow roster order"
    );
}

#[test]
fn closed_tickets_are_never_revisited() {
    let team = vec![TeamMember::new("dev", "Developer", 8, &[])];
    let mut sim = SprintSimulator::new(team, 5, 42);
    sim.set_backlog(vec![ticket("SNW-1", "Email", 2)]);

    sim.run_complete_simulation();

    // Closed exactly once: one completion log line, one completed entry.
    let completions = sim
        .daily_logs()
        .iter()
        .filter(|l| l.contains("Completed SNW-1"))
        .count();
    assert_eq!(completions, 1, "ticket closed more than once");
    assert_eq!(sim.completed_work().len(), 1);
    assert_eq!(
        sim.team()[0].completed_tickets,
        vec!["SNW-1".to_string()]
    );
}

#[test]
fn workload_matches_completed_effort() {
    let bank = RngBank::new(0xDEAD_BEEF);
    let mut rng = bank.for_stream(StreamSlot::Backlog);
    let backlog = TicketGenerator::new().generate_realistic_tickets(20, &mut rng);

    let team = vec![
        TeamMember::new("senior", "Senior Engineer", 9, &["Email", "Network"]),
        TeamMember::new("mid", "Engineer", 6, &["Slack", "Google Workspace"]),
        TeamMember::new("junior", "Junior Engineer", 4, &["VPN", "MFA"]),
    ];
    let mut sim = SprintSimulator::new(team, 10, 0xDEAD_BEEF);
    sim.set_backlog(backlog);

    sim.run_complete_simulation();

    for member in sim.team() {
        let earned: u32 = sim
            .completed_work()
            .iter()
            .filter(|t| member.completed_tickets.contains(&t.ticket_id))
            .map(|t| t.actual_effort.unwrap_or(0))
            .sum();
        assert_eq!(
            member.current_workload, earned,
            "{} workload diverged from completed effort",
            member.name
        );
    }
}
