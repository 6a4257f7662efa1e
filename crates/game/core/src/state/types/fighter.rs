//! Hit points and combat stats.
//!
//! HP is private: the only ways to change it are [`Fighter::take_damage`] and
//! [`Fighter::heal`], both of which clamp to `[0, max_hp]`. The death
//! transition is not triggered here; callers go through
//! [`crate::combat::apply_damage`], which inspects the returned
//! [`DamageTaken`] together with the owner's AI slot.

/// Flat bonuses granted by currently equipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatBonus {
    pub power: i32,
    pub defense: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    max_hp: u32,
    hp: u32,
    pub base_power: i32,
    pub base_defense: i32,
    /// Cached equipment bonus. Must be refreshed whenever equipment changes.
    bonus: CombatBonus,
}

/// Result of a single damage intake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageTaken {
    /// HP actually removed (never more than the HP that was left).
    pub dealt: u32,
    /// True when HP is zero after the hit.
    pub depleted: bool,
}

impl Fighter {
    /// Creates a fighter at full health. `max_hp` is clamped to at least 1.
    pub fn new(max_hp: u32, base_defense: i32, base_power: i32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            max_hp,
            hp: max_hp,
            base_power,
            base_defense,
            bonus: CombatBonus::default(),
        }
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn bonus(&self) -> CombatBonus {
        self.bonus
    }

    pub(crate) fn set_bonus(&mut self, bonus: CombatBonus) {
        self.bonus = bonus;
    }

    /// Effective attack power: base plus equipment.
    pub fn power(&self) -> i32 {
        self.base_power + self.bonus.power
    }

    /// Effective defense: base plus equipment.
    pub fn defense(&self) -> i32 {
        self.base_defense + self.bonus.defense
    }

    pub fn is_full(&self) -> bool {
        self.hp == self.max_hp
    }

    /// Removes up to `amount` HP, saturating at zero.
    pub fn take_damage(&mut self, amount: u32) -> DamageTaken {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        DamageTaken {
            dealt,
            depleted: self.hp == 0,
        }
    }

    /// Restores up to `amount` HP without exceeding the maximum.
    ///
    /// Returns the amount actually recovered; zero at full health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let recovered = amount.min(self.max_hp - self.hp);
        self.hp += recovered;
        recovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut fighter = Fighter::new(30, 1, 2);
        let taken = fighter.take_damage(35);
        assert_eq!(taken.dealt, 30);
        assert!(taken.depleted);
        assert_eq!(fighter.hp(), 0);

        let again = fighter.take_damage(5);
        assert_eq!(again.dealt, 0);
        assert_eq!(fighter.hp(), 0);
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut fighter = Fighter::new(30, 1, 2);
        assert_eq!(fighter.heal(4), 0);

        fighter.take_damage(2);
        assert_eq!(fighter.heal(4), 2);
        assert_eq!(fighter.hp(), 30);
    }

    #[test]
    fn effective_stats_include_bonus() {
        let mut fighter = Fighter::new(10, 1, 2);
        fighter.set_bonus(CombatBonus {
            power: 2,
            defense: 3,
        });
        assert_eq!(fighter.power(), 4);
        assert_eq!(fighter.defense(), 4);
    }

    #[test]
    fn zero_max_hp_is_raised_to_one() {
        let fighter = Fighter::new(0, 0, 0);
        assert_eq!(fighter.max_hp(), 1);
        assert_eq!(fighter.hp(), 1);
    }
}
