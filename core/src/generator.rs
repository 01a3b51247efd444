//! Synthetic backlog generation from curated ticket templates.
//!
//! All draws flow through the Backlog RNG stream, so the same seed
//! reproduces the same backlog. The created-timestamp jitter is
//! anchored to wall-clock "now" and is cosmetic only.

use crate::rng::SimRng;
use crate::ticket::{Priority, Ticket, TicketSource, TicketStatus};
use chrono::{Duration, Local};

/// Ticket mix shares: operations / incidents / projects.
const OPERATIONS_SHARE: f64 = 0.60;
const INCIDENTS_SHARE: f64 = 0.25;

/// Chance that a generated ticket depends on another one.
const DEPENDENCY_CHANCE: f64 = 0.10;

const PRIORITY_WEIGHTS: &[(Priority, f64)] = &[
    (Priority::Critical, 0.10),
    (Priority::High, 0.20),
    (Priority::Medium, 0.50),
    (Priority::Low, 0.20),
];

struct TicketTemplate {
    category: &'static str,
    description: &'static str,
}

const OPERATION_TEMPLATES: &[TicketTemplate] = &[
    TicketTemplate { category: "Google Workspace",     description: "Google Workspace user provisioning/deprovisioning" },
    TicketTemplate { category: "Email",                description: "Email distribution list management" },
    TicketTemplate { category: "Slack",                description: "Slack workspace administration (channels, permissions, integrations)" },
    TicketTemplate { category: "Adobe Creative Cloud", description: "Adobe Creative Cloud license management" },
    TicketTemplate { category: "VPN",                  description: "VPN access issues and certificate renewals" },
    TicketTemplate { category: "MFA",                  description: "Multi-factor authentication setup and troubleshooting" },
    TicketTemplate { category: "File Sharing",         description: "File sharing permission escalations" },
    TicketTemplate { category: "MDM",                  description: "Mobile device management (MDM) enrollment issues" },
];

const INCIDENT_TEMPLATES: &[TicketTemplate] = &[
    TicketTemplate { category: "Email",                description: "Email delivery failures and routing issues" },
    TicketTemplate { category: "Google Workspace",     description: "Google Workspace service outages or performance degradation" },
    TicketTemplate { category: "Slack",                description: "Slack integration failures with third-party tools" },
    TicketTemplate { category: "Adobe Creative Cloud", description: "Adobe Creative Cloud authentication problems" },
    TicketTemplate { category: "Network",              description: "Network connectivity issues affecting remote workers" },
    TicketTemplate { category: "Security",             description: "Security incidents requiring immediate response" },
    TicketTemplate { category: "Backup",               description: "Data backup and recovery operations" },
];

const PROJECT_TEMPLATES: &[TicketTemplate] = &[
    TicketTemplate { category: "Google Workspace",     description: "Implementation of new Google Workspace policies" },
    TicketTemplate { category: "Slack",                description: "Development of custom Slack bots or integrations" },
    TicketTemplate { category: "Email",                description: "Migration project for email systems or user data" },
    TicketTemplate { category: "Automation",           description: "Automation scripts for routine administrative tasks" },
    TicketTemplate { category: "Infrastructure",       description: "Infrastructure upgrades and capacity planning" },
    TicketTemplate { category: "Compliance",           description: "Compliance reporting and audit preparation" },
    TicketTemplate { category: "Integration",          description: "Integration projects between enterprise tools" },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum TicketKind {
    Operations,
    Incidents,
    Projects,
}

impl TicketKind {
    fn templates(&self) -> &'static [TicketTemplate] {
        match self {
            Self::Operations => OPERATION_TEMPLATES,
            Self::Incidents => INCIDENT_TEMPLATES,
            Self::Projects => PROJECT_TEMPLATES,
        }
    }
}

/// Issues sequential ticket ids per source system. Owned by the
/// generator — never process-wide state.
#[derive(Debug)]
pub struct IdCounter {
    servicenow: u32,
    jira: u32,
}

impl IdCounter {
    pub fn new() -> Self {
        Self {
            servicenow: 1000,
            jira: 2000,
        }
    }

    fn next_servicenow(&mut self) -> String {
        let id = format!("SNW-{}", self.servicenow);
        self.servicenow += 1;
        id
    }

    fn next_jira(&mut self) -> String {
        let id = format!("JIRA-{}", self.jira);
        self.jira += 1;
        id
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TicketGenerator {
    counter: IdCounter,
}

impl TicketGenerator {
    pub fn new() -> Self {
        Self {
            counter: IdCounter::new(),
        }
    }

    /// Generate `count` tickets with the 60/25/15
    /// operations/incidents/projects mix. Operations and incident
    /// counts floor; projects take the remainder.
    pub fn generate_realistic_tickets(&mut self, count: usize, rng: &mut SimRng) -> Vec<Ticket> {
        let n_ops = (count as f64 * OPERATIONS_SHARE) as usize;
        let n_inc = (count as f64 * INCIDENTS_SHARE) as usize;
        let n_proj = count - n_ops - n_inc;

        let mut tickets = Vec::with_capacity(count);
        for _ in 0..n_ops {
            tickets.push(self.make_ticket(TicketKind::Operations, rng));
        }
        for _ in 0..n_inc {
            tickets.push(self.make_ticket(TicketKind::Incidents, rng));
        }
        for _ in 0..n_proj {
            tickets.push(self.make_ticket(TicketKind::Projects, rng));
        }

        // Sparse dependency wiring between generated tickets.
        for i in 0..tickets.len() {
            if !rng.chance(DEPENDENCY_CHANCE) {
                continue;
            }
            let j = rng.next_u64_below(tickets.len() as u64) as usize;
            if i != j {
                let dep = tickets[j].ticket_id.clone();
                tickets[i].dependencies.push(dep);
            }
        }

        log::debug!(
            "generated {} tickets ({n_ops} ops, {n_inc} incidents, {n_proj} projects)",
            tickets.len()
        );
        tickets
    }

    fn make_ticket(&mut self, kind: TicketKind, rng: &mut SimRng) -> Ticket {
        let templates = kind.templates();
        let template = &templates[rng.next_u64_below(templates.len() as u64) as usize];

        let (ticket_id, source) = match kind {
            TicketKind::Projects => (self.counter.next_jira(), TicketSource::Jira),
            _ => (self.counter.next_servicenow(), TicketSource::ServiceNow),
        };

        let priority = pick_priority(rng);
        let estimated = estimate_effort(kind, priority, rng);
        let created =
            Local::now().naive_local() + Duration::minutes(rng.range_inclusive(0, 120) as i64);

        Ticket {
            ticket_id,
            source,
            priority,
            category: template.category.to_string(),
            description: template.description.to_string(),
            estimated_effort: Some(estimated),
            actual_effort: None,
            status: TicketStatus::Open,
            assigned_to: None,
            created_timestamp: Some(created),
            completed_timestamp: None,
            dependencies: Vec::new(),
        }
    }
}

impl Default for TicketGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a priority from the ordered weighted distribution.
fn pick_priority(rng: &mut SimRng) -> Priority {
    let roll = rng.next_f64();
    let mut cumulative = 0.0;
    for (priority, weight) in PRIORITY_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return *priority;
        }
    }
    Priority::Low
}

/// Story points by ticket kind, bumped for urgent work.
fn estimate_effort(kind: TicketKind, priority: Priority, rng: &mut SimRng) -> u32 {
    let base = match kind {
        TicketKind::Operations => rng.range_inclusive(1, 3),
        TicketKind::Incidents => rng.range_inclusive(2, 5),
        TicketKind::Projects => rng.range_inclusive(3, 8),
    } as u32;
    match priority {
        Priority::Critical => base + 2,
        Priority::High => base + 1,
        _ => base,
    }
}
