use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wastenot_shared::KarmaEvent;

/// Running karma balance plus the full award history.
///
/// Feed it the [`KarmaEvent`]s collected from inventory and donation
/// operations; it never goes below zero, so deductions larger than the
/// balance simply floor it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KarmaLedger {
    points: i64,
    history: Vec<KarmaEvent>,
}

impl KarmaLedger {
    pub fn new() -> Self {
        KarmaLedger::default()
    }

    /// Rebuild a ledger by replaying persisted history.
    pub fn from_history(history: Vec<KarmaEvent>) -> Self {
        let mut ledger = KarmaLedger::new();
        for event in history {
            ledger.apply(event);
        }
        ledger
    }

    /// Apply one event, recording it and adjusting the balance.
    pub fn apply(&mut self, event: KarmaEvent) {
        self.points = (self.points + event.points).max(0);
        tracing::debug!(points = event.points, reason = %event.reason, balance = self.points, "Karma event applied");
        self.history.push(event);
    }

    pub fn award(&mut self, points: i64, reason: impl Into<String>, at: DateTime<Utc>) {
        self.apply(KarmaEvent::new(points, reason, at));
    }

    pub fn deduct(&mut self, points: i64, reason: impl Into<String>, at: DateTime<Utc>) {
        self.apply(KarmaEvent::new(-points, reason, at));
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn history(&self) -> &[KarmaEvent] {
        &self.history
    }
}
