//! Experience and leveling.
//!
//! A single experience grant may cross several level thresholds. Each
//! crossing is applied in turn, with the threshold recomputed for the new
//! level and that level's rewards granted, and is reported as its own
//! [`LevelUp`] so the presentation layer can show them in order.
//!
//! Level milestone achievements are checked after the level-ups of a
//! grant. Their experience bonus (zero with the default balance) is fed
//! back into the same loop.

use alchemy_types::{AchievementKind, LevelUp, Progress};
use tracing::info;

use crate::config::BalanceConfig;
use crate::state::GameState;

impl GameState {
    /// Add experience and resolve every level-up it causes.
    ///
    /// After the call `exp < exp_to_next` holds.
    pub fn gain_experience(&mut self, amount: u64, balance: &BalanceConfig) -> Progress {
        let mut progress = Progress::default();
        self.exp = self.exp.saturating_add(amount);

        loop {
            while self.exp >= self.exp_to_next {
                if self.exp_to_next == 0 {
                    self.exp_to_next = balance.leveling.exp_to_next(self.level);
                    continue;
                }
                let Some(next) = self.level.checked_add(1) else {
                    // Level cap reached: bank the surplus below the threshold.
                    self.exp = self.exp_to_next.saturating_sub(1);
                    break;
                };
                self.exp = self.exp.saturating_sub(self.exp_to_next);
                self.level = next;
                self.exp_to_next = balance.leveling.exp_to_next(next);
                let reward = balance.leveling.reward(next);
                self.apply_level_reward(reward);
                progress.level_ups.push(reward);
            }

            let unlocked = self.unlock_milestones(AchievementKind::Level, balance);
            let bonus = unlocked
                .iter()
                .fold(0_u64, |acc, a| acc.saturating_add(a.exp));
            progress.achievements.extend(unlocked);
            if bonus == 0 {
                break;
            }
            self.exp = self.exp.saturating_add(bonus);
        }

        progress
    }

    fn apply_level_reward(&mut self, reward: LevelUp) {
        self.earn_coins(reward.coins);
        self.meat = self.meat.saturating_add(reward.meat);
        self.bones = self.bones.saturating_add(reward.bones);
        info!(
            player = %self.player_id,
            level = reward.level,
            coins = reward.coins,
            meat = reward.meat,
            bones = reward.bones,
            "level up"
        );
    }
}

#[cfg(test)]
mod tests {
    use alchemy_types::Achievement;

    use super::*;

    #[test]
    fn small_grant_does_not_level() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        let progress = state.gain_experience(99, &balance);
        assert!(progress.is_empty());
        assert_eq!(state.level, 1);
        assert_eq!(state.exp, 99);
    }

    #[test]
    fn exact_threshold_levels_once() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        let progress = state.gain_experience(100, &balance);
        assert_eq!(progress.level_ups.len(), 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.exp, 0);
        assert_eq!(state.exp_to_next, 200);
        // 50 start + 30 for level 2
        assert_eq!(state.coins, 80);
        assert_eq!(state.meat, 3 + 1);
        assert_eq!(state.bones, 5 + 3);
    }

    #[test]
    fn large_grant_levels_repeatedly_in_order() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        state.exp = state.exp_to_next.saturating_sub(1);
        let grant = state.exp_to_next.saturating_mul(2);
        let progress = state.gain_experience(grant, &balance);

        assert!(!progress.level_ups.is_empty());
        assert!(state.exp < state.exp_to_next);
        let levels: Vec<u32> = progress.level_ups.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![2]);
        // 99 + 200 = 299 -> level 2 with 199 of 200
        assert_eq!(state.exp, 199);
    }

    #[test]
    fn huge_grant_reports_every_level_and_milestone() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        // Levels 1..=5 need 100+200+300+400 = 1000 exp.
        let progress = state.gain_experience(1_000, &balance);
        let levels: Vec<u32> = progress.level_ups.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![2, 3, 4, 5]);
        assert_eq!(state.level, 5);
        assert!(state.exp < state.exp_to_next);
        assert_eq!(progress.achievements.len(), 1);
        assert!(state.achievements.contains(&Achievement::Level5));
    }

    #[test]
    fn invariant_holds_for_many_grants() {
        let balance = BalanceConfig::default();
        let mut state = GameState::default();
        let mut last_level = state.level;
        for grant in [0_u64, 1, 57, 300, 4_999, 12_345, 100_000] {
            state.gain_experience(grant, &balance);
            assert!(state.exp < state.exp_to_next);
            assert!(state.level >= last_level);
            last_level = state.level;
        }
    }
}
