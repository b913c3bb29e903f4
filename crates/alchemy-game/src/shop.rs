//! Shop purchases and the daily login bonus.

use alchemy_types::{AchievementKind, DailyBonus, Progress, Purchased, ShopItem, TreatKind};
use chrono::NaiveDate;
use tracing::info;

use crate::config::BalanceConfig;
use crate::error::GameError;
use crate::inventory;
use crate::state::GameState;

impl GameState {
    /// Buy one unit of `item` for `price` coins.
    ///
    /// Buying an undiscovered element discovers it and runs the discovery
    /// milestone check.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientFunds`] when `price` exceeds the coins
    /// held; nothing changes.
    pub fn purchase(&mut self, item: ShopItem, price: u64, balance: &BalanceConfig) -> Result<Purchased, GameError> {
        let remaining = self
            .coins
            .checked_sub(price)
            .ok_or(GameError::InsufficientFunds {
                price,
                available: self.coins,
            })?;

        let mut first_discovery = false;
        match &item {
            ShopItem::Element(id) => {
                first_discovery = inventory::add_element(&mut self.elements, id, 1)?;
            }
            ShopItem::Treat(TreatKind::Meat) => self.meat = self.meat.saturating_add(1),
            ShopItem::Treat(TreatKind::Bone) => self.bones = self.bones.saturating_add(1),
        }
        self.coins = remaining;
        self.stats.coins_spent = self.stats.coins_spent.saturating_add(price);

        let mut progress = Progress::default();
        if first_discovery {
            self.stats.elements_discovered = self.stats.elements_discovered.saturating_add(1);
            progress.absorb(self.check_achievements(AchievementKind::Discovery, balance));
        }

        info!(player = %self.player_id, item = ?item, price, "purchase");

        Ok(Purchased {
            item,
            price,
            first_discovery,
            progress,
        })
    }

    /// Grant the daily bonus once per calendar day.
    ///
    /// # Errors
    ///
    /// [`GameError::DailyBonusAlreadyClaimed`] if it was already claimed
    /// on `today`.
    pub fn claim_daily_bonus(&mut self, today: NaiveDate, balance: &BalanceConfig) -> Result<DailyBonus, GameError> {
        if self.last_daily_bonus == Some(today) {
            return Err(GameError::DailyBonusAlreadyClaimed(today));
        }
        let bonus = &balance.daily_bonus;
        self.earn_coins(bonus.coins);
        self.meat = self.meat.saturating_add(bonus.meat);
        self.bones = self.bones.saturating_add(bonus.bones);
        self.last_daily_bonus = Some(today);

        info!(player = %self.player_id, %today, coins = bonus.coins, "daily bonus claimed");

        Ok(DailyBonus {
            coins: bonus.coins,
            meat: bonus.meat,
            bones: bonus.bones,
        })
    }
}
