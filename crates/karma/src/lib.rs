//! Karma gamification for wastenot: the point ledger and the achievement
//! badges layered on top of it. Consumes the [`wastenot_shared::KarmaEvent`]s
//! emitted by inventory and donation operations; the planner core itself
//! never awards points.

pub mod badges;
pub mod ledger;

pub use badges::{builtin_badges, AchievementTracker, ActivityStats, Badge, UnlockRule};
pub use ledger::KarmaLedger;
