//! Team member model — capability and effort estimation rules.

use crate::ticket::Ticket;
use crate::types::TicketId;
use serde::{Deserialize, Serialize};

/// A team member and their capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// 1–10 scale; 7+ is senior enough to pick up anything.
    pub skill_level: u8,
    pub specialties: Vec<String>,
    /// Fraction of capacity in (0.0, 1.0].
    pub availability: f64,
    /// Accumulated completed effort points. Never decreases.
    pub current_workload: u32,
    /// Ids of tickets this member closed, in completion order.
    pub completed_tickets: Vec<TicketId>,
}

impl TeamMember {
    pub fn new(name: &str, role: &str, skill_level: u8, specialties: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            skill_level,
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            availability: 1.0,
            current_workload: 0,
            completed_tickets: Vec::new(),
        }
    }

    pub fn with_availability(mut self, availability: f64) -> Self {
        self.availability = availability;
        self
    }

    /// Whether this member can pick up the ticket. Fails closed:
    /// Project Manager roles coordinate, they never take tickets.
    pub fn can_handle(&self, ticket: &Ticket) -> bool {
        if self.role.to_ascii_lowercase().starts_with("project manager") {
            return false;
        }
        self.specialties.iter().any(|s| s == &ticket.category) || self.skill_level >= 7
    }

    /// Story-point estimate for this member working the ticket.
    /// Deterministic: skill discounts the base estimate, partial
    /// availability inflates it. Never below 1 point.
    pub fn estimate_effort(&self, ticket: &Ticket) -> u32 {
        let base = f64::from(ticket.estimated_effort.unwrap_or(1));
        let skill_factor = (1.5 - f64::from(self.skill_level) / 10.0).max(0.5);
        let availability_factor = if self.availability > 0.0 {
            1.0 / self.availability
        } else {
            2.0
        };
        ((base * skill_factor * availability_factor).round() as u32).max(1)
    }
}
