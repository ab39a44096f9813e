use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A single karma award (or deduction) produced by a sustainable action:
/// logging an item, donating, accepting a meal suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarmaEvent {
    /// Signed point delta; deductions are negative.
    pub points: i64,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

impl KarmaEvent {
    pub fn new(points: i64, reason: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        KarmaEvent {
            points,
            reason: reason.into(),
            occurred_at,
        }
    }
}

/// Receiver for karma events.
///
/// The original app broadcast these over a global event bus; here the sink is
/// passed explicitly into every operation that can award points, and the
/// caller decides what to do with them (feed a ledger, ignore, collect).
pub trait EventSink: Send + Sync {
    fn emit(&self, event: KarmaEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: KarmaEvent) {}
}

/// Buffers events in memory so the caller can inspect or drain them.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<KarmaEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<KarmaEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Removes and returns all buffered events.
    pub fn drain(&self) -> Vec<KarmaEvent> {
        self.events
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: KarmaEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn collecting_sink_buffers_in_order() {
        let sink = CollectingSink::new();
        let now = Utc::now();
        sink.emit(KarmaEvent::new(10, "Added item to inventory", now));
        sink.emit(KarmaEvent::new(50, "Donated 1 item", now));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].points, 10);
        assert_eq!(events[1].points, 50);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let sink = CollectingSink::new();
        sink.emit(KarmaEvent::new(15, "Accepted meal suggestion", Utc::now()));
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.events().is_empty());
    }
}
