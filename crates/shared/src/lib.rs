//! Cross-cutting types shared by the wastenot crates: the injected clock
//! and the karma event channel.

pub mod clock;
pub mod events;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{CollectingSink, EventSink, KarmaEvent, NullSink};
