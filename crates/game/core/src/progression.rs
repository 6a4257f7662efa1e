//! Level-up choices.

use crate::action::ActionError;
use crate::palette;
use crate::state::{Entity, GameState};

/// Stat to improve when the player advances a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum StatChoice {
    /// Restore HP to full.
    Vitality,
    /// +1 base power.
    Strength,
    /// +1 base defense.
    Agility,
}

/// True when the player has enough XP for the next level.
pub fn level_up_pending(state: &GameState) -> bool {
    state
        .player()
        .and_then(Entity::as_actor)
        .is_some_and(|actor| actor.is_alive() && actor.level.requires_level_up())
}

/// Spends one pending level on `choice`.
pub fn level_up(state: &mut GameState, choice: StatChoice) -> Result<(), ActionError> {
    if !level_up_pending(state) {
        return Err(ActionError::NoLevelUpPending);
    }
    let Some(actor) = state.player_mut().and_then(Entity::as_actor_mut) else {
        return Err(ActionError::EntityNotFound(crate::state::EntityId::PLAYER));
    };

    actor.level.increase_level();
    let message = match choice {
        StatChoice::Vitality => {
            let max = actor.fighter.max_hp();
            actor.fighter.heal(max);
            "Your wounds close and your breath steadies."
        }
        StatChoice::Strength => {
            actor.fighter.base_power += 1;
            "You feel stronger!"
        }
        StatChoice::Agility => {
            actor.fighter.base_defense += 1;
            "Your movements are getting swifter!"
        }
    };
    state.message(message, palette::WHITE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::award_xp;
    use crate::state::EntityId;
    use crate::test_utils::{arena, hp, player_fighter_mut};

    #[test]
    fn no_level_without_xp() {
        let (mut state, _) = arena();
        assert_eq!(
            level_up(&mut state, StatChoice::Strength),
            Err(ActionError::NoLevelUpPending)
        );
    }

    #[test]
    fn choices_apply_and_carry_surplus() {
        let (mut state, _) = arena();
        assert!(award_xp(&mut state, 400));
        assert!(level_up_pending(&state));
        assert_eq!(state.log.last().unwrap().text, "You advance to level 2!");

        level_up(&mut state, StatChoice::Strength).unwrap();
        let player = state.player().unwrap();
        let actor = player.as_actor().unwrap();
        assert_eq!(actor.level.current_level, 2);
        assert_eq!(actor.level.current_xp, 50);
        assert_eq!(actor.fighter.power(), 3);
        assert!(!level_up_pending(&state));
    }

    #[test]
    fn vitality_restores_health() {
        let (mut state, _) = arena();
        player_fighter_mut(&mut state).take_damage(20);
        award_xp(&mut state, 350);

        level_up(&mut state, StatChoice::Vitality).unwrap();
        assert_eq!(hp(&state, EntityId::PLAYER), 30);
    }

    #[test]
    fn choices_parse_from_text() {
        assert_eq!("agility".parse::<StatChoice>(), Ok(StatChoice::Agility));
        assert!("charisma".parse::<StatChoice>().is_err());
    }
}
