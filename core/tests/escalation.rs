//! Escalation: juniors hand heavy tickets back, a senior picks them up
//! the same day, and the chain stops after one level.

use sprintdesk_core::{
    sprint::SprintSimulator,
    team::TeamMember,
    ticket::{Priority, Ticket, TicketSource, TicketStatus},
};

fn heavy_ticket(id: &str) -> Ticket {
    Ticket::new(
        id,
        TicketSource::ServiceNow,
        Priority::High,
        "Email",
        "complex mail routing failure",
    )
    .with_effort(8)
}

#[test]
fn junior_escalates_and_senior_closes_same_day() {
    // Roster order puts the junior first, so they claim the ticket;
    // skill 4 over an 8-point estimate trips the threshold.
    let team = vec![
        TeamMember::new("junior", "Junior Engineer", 4, &["Email"]),
        TeamMember::new("senior", "Senior Engineer", 9, &[]),
    ];
    let mut sim = SprintSimulator::new(team, 1, 42);
    sim.set_backlog(vec![heavy_ticket("SNW-1")]);

    let logs = sim.run_complete_simulation().to_vec();

    assert!(
        logs.iter().any(|l| l.contains("Escalating")),
        "expected an Escalating log line"
    );
    assert_eq!(sim.completed_work().len(), 1, "senior should close the escalated ticket");
    let closed = &sim.completed_work()[0];
    assert_eq!(closed.status, TicketStatus::Closed);
    assert_eq!(closed.assigned_to.as_deref(), Some("senior"));
    // skill 9 → 8 × 0.6 = 4.8 → 5 pts
    assert_eq!(closed.actual_effort, Some(5));

    let junior = &sim.team()[0];
    assert_eq!(junior.current_workload, 0, "escalated work must not accrue to the junior");
    assert!(junior.completed_tickets.is_empty());

    assert_eq!(sim.metrics().escalations, 1);
}

#[test]
fn escalated_ticket_stays_open_without_a_senior() {
    let team = vec![TeamMember::new("junior", "Junior Engineer", 4, &["Email"])];
    let mut sim = SprintSimulator::new(team, 2, 42);
    sim.set_backlog(vec![heavy_ticket("SNW-1")]);

    let logs = sim.run_complete_simulation().to_vec();

    assert!(sim.completed_work().is_empty());
    assert_eq!(sim.backlog()[0].status, TicketStatus::Open);
    assert!(sim.backlog()[0].assigned_to.is_none());
    // Escalated once per day with nobody to route to.
    assert_eq!(
        logs.iter().filter(|l| l.contains("Escalating")).count(),
        2
    );
}

#[test]
fn light_ticket_does_not_escalate() {
    let team = vec![
        TeamMember::new("junior", "Junior Engineer", 4, &["Email"]),
        TeamMember::new("senior", "Senior Engineer", 9, &[]),
    ];
    let mut sim = SprintSimulator::new(team, 1, 42);
    // skill 4 → 3 × 1.1 = 3.3 → 3 pts, under the threshold
    sim.set_backlog(vec![Ticket::new(
        "SNW-1",
        TicketSource::ServiceNow,
        Priority::Medium,
        "Email",
        "list membership fix",
    )
    .with_effort(3)]);

    sim.run_complete_simulation();

    assert_eq!(sim.completed_work().len(), 1);
    assert_eq!(
        sim.completed_work()[0].assigned_to.as_deref(),
        Some("junior"),
        "the junior should keep a ticket under the escalation threshold"
    );
    assert_eq!(sim.metrics().escalations, 0);
}
