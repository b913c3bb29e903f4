//! Milestone achievements.
//!
//! Each [`AchievementKind`] is measured against one counter (discovered
//! elements, level, successful crafts). A check walks that kind's
//! milestones in ascending threshold order and unlocks every one the
//! counter has reached that is not yet recorded. Unlocking is idempotent:
//! a milestone already in the set is skipped and never re-granted.

use alchemy_types::{Achievement, AchievementKind, AchievementUnlocked, Progress};
use tracing::info;

use crate::config::BalanceConfig;
use crate::state::GameState;

impl GameState {
    /// Current value of the counter a milestone kind is measured against.
    pub fn milestone_counter(&self, kind: AchievementKind) -> u64 {
        match kind {
            AchievementKind::Discovery => u64::try_from(self.discovered_count()).unwrap_or(u64::MAX),
            AchievementKind::Level => u64::from(self.level),
            AchievementKind::Crafts => self.stats.successful_crafts,
        }
    }

    /// Unlock every reached milestone of `kind` and apply all rewards,
    /// including any level-ups caused by the experience bonus.
    pub fn check_achievements(&mut self, kind: AchievementKind, balance: &BalanceConfig) -> Progress {
        let unlocked = self.unlock_milestones(kind, balance);
        let bonus = unlocked
            .iter()
            .fold(0_u64, |acc, a| acc.saturating_add(a.exp));
        let mut progress = Progress {
            level_ups: Vec::new(),
            achievements: unlocked,
        };
        if bonus > 0 {
            progress.absorb(self.gain_experience(bonus, balance));
        }
        progress
    }

    /// Check every milestone kind, in [`AchievementKind::ALL`] order.
    ///
    /// Used after a whole state is brought in at once, where several
    /// thresholds of several kinds may already be past.
    pub fn check_all_achievements(&mut self, balance: &BalanceConfig) -> Progress {
        let mut progress = Progress::default();
        for kind in AchievementKind::ALL {
            progress.absorb(self.check_achievements(kind, balance));
        }
        progress
    }

    /// Mark reached milestones and grant their coins.
    ///
    /// The experience bonus is only reported, not applied; the caller
    /// feeds it through [`GameState::gain_experience`].
    pub(crate) fn unlock_milestones(
        &mut self,
        kind: AchievementKind,
        balance: &BalanceConfig,
    ) -> Vec<AchievementUnlocked> {
        let counter = self.milestone_counter(kind);
        let reward = balance.achievements.for_kind(kind);
        let mut unlocked = Vec::new();

        for &achievement in Achievement::milestones(kind) {
            let threshold = achievement.threshold();
            if u64::from(threshold) > counter {
                break;
            }
            if !self.achievements.insert(achievement) {
                continue;
            }
            let record = AchievementUnlocked {
                achievement,
                coins: reward.coins_per.saturating_mul(u64::from(threshold)),
                exp: reward.exp_per.saturating_mul(u64::from(threshold)),
            };
            self.earn_coins(record.coins);
            info!(
                player = %self.player_id,
                achievement = ?achievement,
                coins = record.coins,
                exp = record.exp,
                "achievement unlocked"
            );
            unlocked.push(record);
        }

        unlocked
    }
}

#[cfg(test)]
mod tests {
    use alchemy_types::{ElementId, InventoryEntry};

    use super::*;

    fn discover(state: &mut GameState, n: usize) {
        for i in 0..n {
            state
                .elements
                .insert(ElementId::new(format!("thing_{i}")), InventoryEntry::discovered(1));
        }
    }

    #[test]
    fn nothing_unlocks_below_first_threshold() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        let progress = state.check_achievements(AchievementKind::Discovery, &balance);
        assert!(progress.is_empty());
    }

    #[test]
    fn discovery_milestone_grants_coins_and_exp() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        discover(&mut state, 4); // 6 starters + 4 = 10
        let progress = state.check_achievements(AchievementKind::Discovery, &balance);
        assert_eq!(progress.achievements.len(), 1);
        assert_eq!(progress.achievements.first().map(|a| a.achievement), Some(Achievement::Discovered10));
        assert_eq!(state.coins, 50 + 100);
        assert_eq!(state.exp, 50);
    }

    #[test]
    fn second_check_grants_nothing() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        discover(&mut state, 20);
        let first = state.check_achievements(AchievementKind::Discovery, &balance);
        assert!(!first.is_empty());
        let coins = state.coins;
        let exp = state.exp;
        let second = state.check_achievements(AchievementKind::Discovery, &balance);
        assert!(second.is_empty());
        assert_eq!(state.coins, coins);
        assert_eq!(state.exp, exp);
    }

    #[test]
    fn batch_unlocks_in_ascending_order() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        discover(&mut state, 60); // 66 discovered
        let progress = state.check_achievements(AchievementKind::Discovery, &balance);
        let unlocked: Vec<Achievement> = progress.achievements.iter().map(|a| a.achievement).collect();
        assert_eq!(
            unlocked,
            vec![Achievement::Discovered10, Achievement::Discovered25, Achievement::Discovered50]
        );
        // 50 + 125 + 250 exp -> enough for level 3 (100 + 200)
        assert_eq!(progress.level_ups.len(), 2);
    }

    #[test]
    fn full_check_covers_every_kind() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        discover(&mut state, 4);
        state.level = 5;
        state.exp_to_next = balance.leveling.exp_to_next(5);
        state.stats.successful_crafts = 50;
        let progress = state.check_all_achievements(&balance);
        let unlocked: Vec<Achievement> = progress.achievements.iter().map(|a| a.achievement).collect();
        assert_eq!(
            unlocked,
            vec![Achievement::Discovered10, Achievement::Level5, Achievement::Crafts50]
        );
        assert!(state.check_all_achievements(&balance).is_empty());
    }

    #[test]
    fn craft_milestones_follow_successful_crafts() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        state.stats.successful_crafts = 100;
        let progress = state.check_achievements(AchievementKind::Crafts, &balance);
        assert_eq!(progress.achievements.len(), 2);
        assert_eq!(state.coins, 50 + 50 + 100);
        assert!(progress.level_ups.is_empty());
    }
}
