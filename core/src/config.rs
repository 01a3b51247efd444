//! Run configuration.

use crate::error::SimResult;
use crate::types::Day;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Master seed for all RNG streams.
    pub seed: u64,
    /// Sprint length in business days.
    pub sprint_length_days: Day,
    /// Number of synthetic backlog tickets to generate.
    pub ticket_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sprint_length_days: 10,
            ticket_count: 20,
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
