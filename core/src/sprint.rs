//! Sprint orchestrator — drives the multi-day simulation loop.
//!
//! DAY CYCLE (fixed, documented, never reordered):
//!   1. Standup block
//!   2. Assignment pass over the backlog: dependency gating, then the
//!      first capable member in roster order claims each Open ticket
//!   3. Workday engine per member with assignments
//!   4. Escalation routing to the first capable senior
//!   5. Workday engine per member with an escalation batch — that
//!      pass's own escalation output is discarded (one level per day)
//!   6. Sweep Closed tickets into completed work
//!
//! RULES:
//!   - Members are processed in fixed roster order in both passes.
//!   - Closed is terminal; the sweep only ever moves backlog → completed.
//!   - All randomness flows through the RngBank streams, so a run is
//!     reproducible given the master seed.

use crate::{
    metrics::SprintMetrics,
    rng::{RngBank, SimRng, StreamSlot},
    team::TeamMember,
    ticket::{Ticket, TicketStatus},
    types::{Day, TicketId},
    workday,
};

pub struct SprintSimulator {
    team: Vec<TeamMember>,
    sprint_length: Day,
    current_day: Day,
    backlog: Vec<Ticket>,
    completed_work: Vec<Ticket>,
    daily_logs: Vec<String>,
    schedule_rng: SimRng,
}

impl SprintSimulator {
    pub fn new(team: Vec<TeamMember>, sprint_length_days: Day, seed: u64) -> Self {
        let bank = RngBank::new(seed);
        Self {
            team,
            sprint_length: sprint_length_days,
            current_day: 0,
            backlog: Vec::new(),
            completed_work: Vec::new(),
            daily_logs: Vec::new(),
            schedule_rng: bank.for_stream(StreamSlot::Schedule),
        }
    }

    /// Seed the sprint backlog. Replaces any existing backlog.
    pub fn set_backlog(&mut self, tickets: Vec<Ticket>) {
        self.backlog = tickets;
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn backlog(&self) -> &[Ticket] {
        &self.backlog
    }

    pub fn completed_work(&self) -> &[Ticket] {
        &self.completed_work
    }

    pub fn daily_logs(&self) -> &[String] {
        &self.daily_logs
    }

    pub fn current_day(&self) -> Day {
        self.current_day
    }

    /// Run the full sprint end-to-end. Returns the chronological log
    /// stream.
    pub fn run_complete_simulation(&mut self) -> &[String] {
        for day in 1..=self.sprint_length {
            self.current_day = day;
            self.simulate_daily_standup(day);
            self.simulate_work_day(day);
        }
        log::info!(
            "sprint finished: {} completed, {} left in backlog",
            self.completed_work.len(),
            self.backlog.len()
        );
        &self.daily_logs
    }

    /// End-of-sprint aggregate snapshot.
    pub fn metrics(&self) -> SprintMetrics {
        SprintMetrics::compute(
            &self.backlog,
            &self.completed_work,
            &self.team,
            &self.daily_logs,
        )
    }

    fn simulate_daily_standup(&mut self, day: Day) {
        self.daily_logs.push(format!("Day {day} Standup"));
        for member in &self.team {
            self.daily_logs.push(format!(
                "- {}: {} tickets completed",
                member.name,
                member.completed_tickets.len()
            ));
        }
    }

    fn simulate_work_day(&mut self, day: Day) {
        // Assignment pass. First capable member in roster order claims
        // each Open ticket; at most one member per ticket per day.
        let mut assignments: Vec<Vec<usize>> = vec![Vec::new(); self.team.len()];

        for idx in 0..self.backlog.len() {
            if self.backlog[idx].status == TicketStatus::Closed {
                continue;
            }

            if !self.backlog[idx].dependencies.is_empty() {
                let unresolved = self.backlog[idx].unresolved_dependencies(&self.backlog);
                if !unresolved.is_empty() {
                    self.backlog[idx].status = TicketStatus::Blocked;
                    self.daily_logs.push(format!(
                        "Day {day} | {} blocked waiting for {}",
                        self.backlog[idx].ticket_id,
                        unresolved.join(",")
                    ));
                    continue;
                }
                if self.backlog[idx].status == TicketStatus::Blocked {
                    self.backlog[idx].status = TicketStatus::Open;
                }
            }

            if self.backlog[idx].status != TicketStatus::Open {
                continue;
            }

            if let Some(m_idx) = self
                .team
                .iter()
                .position(|m| m.can_handle(&self.backlog[idx]))
            {
                self.backlog[idx].status = TicketStatus::Assigned;
                assignments[m_idx].push(idx);
            }
        }

        // Primary pass, fixed roster order.
        let mut escalated: Vec<TicketId> = Vec::new();
        for m_idx in 0..self.team.len() {
            if assignments[m_idx].is_empty() {
                continue;
            }
            let outcome = workday::simulate_work_day(
                &mut self.team[m_idx],
                &mut self.backlog,
                &assignments[m_idx],
                day,
                &mut self.schedule_rng,
            );
            self.daily_logs.extend(outcome.logs);
            escalated.extend(outcome.escalated);
        }

        // Escalation routing: the first senior in roster order claims
        // each escalated ticket for a same-day second pass.
        let mut escalation_batches: Vec<Vec<usize>> = vec![Vec::new(); self.team.len()];
        for ticket_id in &escalated {
            let Some(idx) = self
                .backlog
                .iter()
                .position(|t| &t.ticket_id == ticket_id)
            else {
                continue;
            };
            let Some(m_idx) = self
                .team
                .iter()
                .position(|m| m.skill_level >= 7 && m.can_handle(&self.backlog[idx]))
            else {
                log::warn!("day={day} no senior available for escalated {ticket_id}");
                continue;
            };
            self.backlog[idx].status = TicketStatus::Assigned;
            escalation_batches[m_idx].push(idx);
        }

        // Second pass; any further escalation output is discarded.
        for m_idx in 0..self.team.len() {
            if escalation_batches[m_idx].is_empty() {
                continue;
            }
            let outcome = workday::simulate_work_day(
                &mut self.team[m_idx],
                &mut self.backlog,
                &escalation_batches[m_idx],
                day,
                &mut self.schedule_rng,
            );
            self.daily_logs.extend(outcome.logs);
        }

        // Sweep: Closed tickets migrate to completed work, preserving
        // the relative order of what remains.
        let mut remaining = Vec::with_capacity(self.backlog.len());
        for ticket in self.backlog.drain(..) {
            if ticket.status == TicketStatus::Closed {
                self.completed_work.push(ticket);
            } else {
                remaining.push(ticket);
            }
        }
        self.backlog = remaining;
    }
}
