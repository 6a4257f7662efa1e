/// Experience tracking for actors.
///
/// Monsters only use `xp_given`; the player accumulates `current_xp` and
/// levels up whenever it reaches [`Level::experience_to_next_level`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub current_level: u32,
    pub current_xp: u32,
    pub level_up_base: u32,
    pub level_up_factor: u32,
    /// XP awarded to the player when this actor dies.
    pub xp_given: u32,
}

impl Level {
    /// A level track that can advance (the player's).
    pub fn progression(level_up_base: u32, level_up_factor: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor,
            xp_given: 0,
        }
    }

    /// A level track that only yields XP on death (monsters).
    pub fn bounty(xp_given: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base: 0,
            level_up_factor: 0,
            xp_given,
        }
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.level_up_base > 0 && self.current_xp >= self.experience_to_next_level()
    }

    /// Adds experience. Returns false when nothing was added.
    pub fn add_xp(&mut self, xp: u32) -> bool {
        if xp == 0 || self.level_up_base == 0 {
            return false;
        }
        self.current_xp = self.current_xp.saturating_add(xp);
        true
    }

    /// Advances one level, carrying surplus XP over.
    pub fn increase_level(&mut self) {
        self.current_xp = self
            .current_xp
            .saturating_sub(self.experience_to_next_level());
        self.current_level += 1;
    }
}
