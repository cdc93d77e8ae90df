//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// How a subject's weekly hours are counted across groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMode {
    /// One counter per subject, shared by every group. Once the first group
    /// taking a subject has received its weekly hours, later groups sharing
    /// that subject receive none.
    #[default]
    PerSubject,
    /// One counter per (subject, group): every group receives the subject's
    /// full weekly hours.
    PerGroup,
}

/// Tunable scheduler behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Weekly-hour accounting mode.
    #[serde(default)]
    pub fulfillment: FulfillmentMode,
}

impl SchedulerConfig {
    /// Creates the default configuration (shared per-subject counters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fulfillment mode.
    pub fn with_fulfillment(mut self, mode: FulfillmentMode) -> Self {
        self.fulfillment = mode;
        self
    }
}
