/// Behaviour slot of an actor. An empty slot (`None` on the actor) means dead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiState {
    /// Driven by decoded player intents; skipped by the enemy sweep.
    Controlled,
    /// Chases and attacks the player while standing in the player's view.
    Hostile,
    /// Stumbles randomly, then restores `previous`.
    Confused {
        previous: Box<AiState>,
        turns_remaining: u32,
    },
}

impl AiState {
    pub fn confused(previous: AiState, turns: u32) -> Self {
        Self::Confused {
            previous: Box::new(previous),
            turns_remaining: turns,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, AiState::Controlled)
    }
}
