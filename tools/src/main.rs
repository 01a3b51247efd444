//! sprint-runner: headless sprint simulation runner for Sprint Desk.
//!
//! Usage:
//!   sprint-runner --seed 12345 --days 10 --tickets 20
//!   sprint-runner --config sprint.json --report sprint_report.md

mod report;

use anyhow::Result;
use sprintdesk_core::{
    config::SimConfig,
    generator::TicketGenerator,
    metrics::SprintMetrics,
    planning,
    rng::{RngBank, StreamSlot},
    sprint::SprintSimulator,
    team::TeamMember,
};
use std::env;
use std::path::Path;
use uuid::Uuid;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SimConfig::load(Path::new(&w[1]))?,
        None => SimConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.sprint_length_days = parse_arg(&args, "--days", config.sprint_length_days);
    config.ticket_count = parse_arg(&args, "--tickets", config.ticket_count);
    let report_path = args
        .windows(2)
        .find(|w| w[0] == "--report")
        .map(|w| w[1].clone());

    let run_id = format!("run-{}", Uuid::new_v4());
    println!("Sprint Desk — sprint-runner");
    println!("  run_id:  {run_id}");
    println!("  seed:    {}", config.seed);
    println!("  days:    {}", config.sprint_length_days);
    println!("  tickets: {}", config.ticket_count);
    println!();

    let team = build_team();
    let bank = RngBank::new(config.seed);
    let mut backlog_rng = bank.for_stream(StreamSlot::Backlog);
    let tickets =
        TicketGenerator::new().generate_realistic_tickets(config.ticket_count, &mut backlog_rng);

    let plan = planning::simulate_triage_meeting(&tickets, &team);

    // Rendered before the run consumes the backlog.
    let backlog_section = report::format_tickets(&tickets);
    let team_section = report::format_team(&team);
    let triage_section = report::format_triage(&plan, &tickets);

    let mut sim = SprintSimulator::new(team, config.sprint_length_days, config.seed);
    sim.set_backlog(tickets);
    sim.run_complete_simulation();

    let metrics = sim.metrics();
    print_summary(&sim, &metrics);

    if let Some(path) = report_path {
        let doc = report::render_report(
            &backlog_section,
            &team_section,
            &triage_section,
            sim.daily_logs(),
            &metrics,
        )?;
        std::fs::write(&path, doc)?;
        println!();
        println!("Report written to {path}");
    }

    Ok(())
}

/// Default team composition for the sprint simulation.
fn build_team() -> Vec<TeamMember> {
    vec![
        TeamMember::new(
            "dev_engineer",
            "Senior Developer/DevOps Engineer",
            9,
            &["Python", "Java", "Infrastructure Automation"],
        ),
        TeamMember::new(
            "senior_syseng",
            "Senior Information Systems Engineer",
            8,
            &["Google Workspace", "Email Architecture", "Authentication Systems"],
        ),
        TeamMember::new(
            "junior_syseng_tech",
            "Junior Information Systems Engineer (Technical)",
            5,
            &[
                "Java",
                "Python",
                "Slack Administration",
                "Email Support",
                "Adobe Enterprise License Management",
            ],
        ),
        TeamMember::new(
            "junior_syseng_a",
            "Junior Information Systems Engineer A",
            4,
            &["User Provisioning", "Permissions Management", "Documentation"],
        ),
        TeamMember::new(
            "junior_syseng_b",
            "Junior Information Systems Engineer B",
            4,
            &[
                "Hardware/Software Inventory",
                "Network Troubleshooting",
                "User Training",
                "Compliance Support",
            ],
        ),
        TeamMember::new(
            "project_manager",
            "Project Manager",
            7,
            &[
                "Sprint Planning",
                "Backlog Management",
                "Stakeholder Communication",
                "Risk Management",
            ],
        )
        .with_availability(0.8),
    ]
}

fn print_summary(sim: &SprintSimulator, metrics: &SprintMetrics) {
    println!("=== SPRINT SUMMARY ===");
    println!("  total tickets: {}", metrics.total_tickets);
    println!("  completed:     {}", metrics.completed_tickets);
    println!("  velocity:      {} pts", metrics.velocity);
    println!("  escalations:   {}", metrics.escalations);
    println!("  backlog left:  {}", sim.backlog().len());

    println!();
    println!("=== TEAM UTILIZATION ===");
    for member in sim.team() {
        println!(
            "  {:<20} {:>3} pts | {} tickets",
            member.name,
            member.current_workload,
            member.completed_tickets.len()
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
