//! Markdown rendering for the pre-sprint analysis and sprint report.
//!
//! Rendering is peripheral: it reads core data products (tickets, the
//! triage plan, the log stream, the metrics snapshot) and never feeds
//! anything back into the simulation.

use sprintdesk_core::{
    error::SimResult,
    metrics::SprintMetrics,
    planning::TriagePlan,
    team::TeamMember,
    ticket::Ticket,
};

/// Backlog table, one row per ticket.
pub fn format_tickets(tickets: &[Ticket]) -> String {
    let mut lines = vec![
        "| Ticket ID | Source | Priority | Category | Est Effort | Dependencies | Description |"
            .to_string(),
        "|---|---|---|---|---|---|---|".to_string(),
    ];
    for t in tickets {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} |",
            t.ticket_id,
            t.source.as_str(),
            t.priority.as_str(),
            t.category,
            t.estimated_effort.unwrap_or(1),
            t.dependencies.join(","),
            t.description
        ));
    }
    lines.join("\n")
}

/// Team capacity & skill matrix table.
pub fn format_team(team: &[TeamMember]) -> String {
    let mut lines = vec![
        "| Name | Role | Skill Level | Specialties | Availability |".to_string(),
        "|---|---|---|---|---|".to_string(),
    ];
    for m in team {
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            m.name,
            m.role,
            m.skill_level,
            m.specialties.join(", "),
            m.availability
        ));
    }
    lines.join("\n")
}

/// Triage meeting notes plus the commitment table.
pub fn format_triage(plan: &TriagePlan, tickets: &[Ticket]) -> String {
    let mut notes = vec![
        format!(
            "- Reviewed {} tickets and prioritized Critical and High items first.",
            plan.reviewed
        ),
        "- Matched work to available team skills and workloads.".to_string(),
    ];
    if !plan.dependency_chains.is_empty() {
        notes.push(format!(
            "- Sequenced dependent work: {}",
            plan.dependency_chains.join(", ")
        ));
    }
    notes.push("- Flagged high-effort items for risk mitigation.".to_string());
    notes.push(format!(
        "- Team capacity for this sprint is {} story points; committed {} points of work.",
        plan.capacity, plan.committed_points
    ));

    let mut commit = vec![
        "| Ticket ID | Priority | Est Effort |".to_string(),
        "|---|---|---|".to_string(),
    ];
    for id in &plan.committed {
        if let Some(t) = tickets.iter().find(|t| &t.ticket_id == id) {
            commit.push(format!(
                "| {} | {} | {} |",
                t.ticket_id,
                t.priority.as_str(),
                t.estimated_effort.unwrap_or(1)
            ));
        }
    }
    commit.push(String::new());
    commit.push(format!("Estimated velocity: {} pts", plan.committed_points));

    format!(
        "## Triage Meeting Notes\n\n{}\n\n## Sprint Commitment & Goals\n\n{}",
        notes.join("\n"),
        commit.join("\n")
    )
}

/// Assemble the full markdown report.
pub fn render_report(
    backlog_section: &str,
    team_section: &str,
    triage_section: &str,
    logs: &[String],
    metrics: &SprintMetrics,
) -> SimResult<String> {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let metrics_json = serde_json::to_string_pretty(metrics)?;

    Ok(format!(
        "# Pre-Sprint Analysis\n\n\
         _Generated on {generated}_\n\n\
         ## Ticket Backlog\n\n{backlog_section}\n\n\
         ## Team Capacity & Skill Matrix\n\n{team_section}\n\n\
         {triage_section}\n\n\
         # Sprint Log\n\n```\n{}\n```\n\n\
         # Sprint Metrics\n\n```json\n{metrics_json}\n```\n",
        logs.join("\n")
    ))
}
