use crate::ledger::KarmaLedger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Behavioral condition a badge watches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum UnlockRule {
    /// The inventory holds at least this many items.
    InventoryCount(usize),
    /// At least this many donation pickups have been scheduled.
    DonationCount(usize),
    /// At least this many individual items donated across all pickups.
    ItemsDonated(usize),
}

impl UnlockRule {
    pub fn satisfied_by(&self, stats: &ActivityStats) -> bool {
        match *self {
            UnlockRule::InventoryCount(n) => stats.inventory_size >= n,
            UnlockRule::DonationCount(n) => stats.donations_made >= n,
            UnlockRule::ItemsDonated(n) => stats.items_donated >= n,
        }
    }
}

/// Snapshot of the household activity the unlock rules are checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityStats {
    pub inventory_size: usize,
    pub donations_made: usize,
    pub items_donated: usize,
}

/// An achievement unlocked by household activity. Earning it pays its
/// `karma_reward` into the ledger as a one-time bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rule: UnlockRule,
    pub karma_reward: i64,
}

impl Badge {
    /// Reason string recorded on the ledger when this badge is earned. The
    /// tracker recognizes it when replaying history, so it must stay stable.
    pub fn unlock_reason(&self) -> String {
        format!("Earned badge: {}", self.name)
    }
}

/// The built-in achievement set.
pub fn builtin_badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, description: &str, icon: &str, rule, karma_reward| Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        rule,
        karma_reward,
    };
    vec![
        badge(
            "first_item",
            "First Steps",
            "Add your first item to inventory",
            "🌱",
            UnlockRule::InventoryCount(1),
            50,
        ),
        badge(
            "waste_warrior",
            "Waste Warrior",
            "Save 10 items from being wasted",
            "🗑️",
            UnlockRule::ItemsDonated(10),
            100,
        ),
        badge(
            "generous_donor",
            "Generous Donor",
            "Make your first donation",
            "🎁",
            UnlockRule::DonationCount(1),
            150,
        ),
        badge(
            "inventory_master",
            "Inventory Master",
            "Maintain 20 items in inventory",
            "📦",
            UnlockRule::InventoryCount(20),
            200,
        ),
        badge(
            "donation_champion",
            "Donation Champion",
            "Make 5 donations",
            "🏆",
            UnlockRule::DonationCount(5),
            500,
        ),
    ]
}

/// Tracks which badges have already been earned so each unlock fires once
/// and pays its reward once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementTracker {
    badges: Vec<Badge>,
    earned: HashSet<String>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        AchievementTracker {
            badges: builtin_badges(),
            earned: HashSet::new(),
        }
    }

    pub fn with_badges(badges: Vec<Badge>) -> Self {
        AchievementTracker {
            badges,
            earned: HashSet::new(),
        }
    }

    /// Rebuild the earned set from a ledger's history. Badges leave their
    /// [`Badge::unlock_reason`] on the ledger when earned, so a replayed
    /// history restores the tracker without separate persistence.
    pub fn replay(&mut self, ledger: &KarmaLedger) {
        for badge in &self.badges {
            let reason = badge.unlock_reason();
            if ledger.history().iter().any(|event| event.reason == reason) {
                self.earned.insert(badge.id.clone());
            }
        }
    }

    /// Check every unearned badge against the current activity snapshot.
    /// Newly satisfied badges are marked earned, their karma reward is paid
    /// into the ledger, and they are returned in definition order.
    pub fn newly_earned(
        &mut self,
        stats: &ActivityStats,
        ledger: &mut KarmaLedger,
        at: DateTime<Utc>,
    ) -> Vec<Badge> {
        let mut unlocked = Vec::new();
        for badge in &self.badges {
            if badge.rule.satisfied_by(stats) && self.earned.insert(badge.id.clone()) {
                tracing::info!(badge = %badge.id, reward = badge.karma_reward, "Achievement unlocked");
                ledger.award(badge.karma_reward, badge.unlock_reason(), at);
                unlocked.push(badge.clone());
            }
        }
        unlocked
    }

    /// Every badge earned so far, in definition order.
    pub fn earned(&self) -> Vec<&Badge> {
        self.badges
            .iter()
            .filter(|b| self.earned.contains(&b.id))
            .collect()
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }
}
