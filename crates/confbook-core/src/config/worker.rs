//! Background reconciliation sweep configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reconciliation sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Whether the sweep task is started with the server.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in seconds between sweep passes.
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
}

impl SweepConfig {
    /// Interval between passes.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.max(1))
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: default_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    900
}
