use crate::combat;
use crate::config::GameConfig;
use crate::palette;
use crate::state::{EntityId, GameState};

use super::{ActionError, ActionOutcome, ActionTransition, capitalize, living_actor};

/// Attacks the living actor at `(dx, dy)`.
///
/// A blow that does no damage still costs the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn target(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let attacker = living_actor(state, self.actor)?;
        let target = attacker.position.offset(self.dx, self.dy);
        state
            .map
            .actor_at(target)
            .map(|defender| defender.id)
            .ok_or(ActionError::NothingToAttack)
    }
}

impl ActionTransition for MeleeAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        self.target(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let target = self.target(state)?;
        let attacker = living_actor(state, self.actor)?;
        let defender = living_actor(state, target)?;

        let (Some(attacker_fighter), Some(defender_fighter)) =
            (attacker.fighter(), defender.fighter())
        else {
            return Err(ActionError::NotAnActor(target));
        };
        let damage = combat::melee_damage(attacker_fighter, defender_fighter);
        let description = format!("{} attacks {}", capitalize(&attacker.name), defender.name);
        let color = if self.actor.is_player() {
            palette::PLAYER_ATTACK
        } else {
            palette::ENEMY_ATTACK
        };

        if damage > 0 {
            state.message(format!("{description} for {damage} hit points"), color);
            combat::apply_damage(state, config, target, damage as u32)?;
        } else {
            state.message(format!("{description} but does no damage"), color);
        }
        Ok(ActionOutcome::Performed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Fighter, Position};
    use crate::test_utils::{arena, hp, spawn_monster, spawn_orc};

    #[test]
    fn melee_subtracts_power_minus_defense() {
        let (mut state, config) = arena();
        let orc = spawn_orc(&mut state, Position::new(6, 5));

        MeleeAction::new(EntityId::PLAYER, 1, 0)
            .perform(&mut state, &config)
            .unwrap();

        assert_eq!(hp(&state, orc), 8);
        assert_eq!(
            state.log.last().unwrap().text,
            "Priest attacks Orc for 2 hit points"
        );
    }

    #[test]
    fn zero_damage_is_still_a_turn() {
        let (mut state, config) = arena();
        let troll = spawn_monster(
            &mut state,
            "Troll",
            Position::new(6, 5),
            Fighter::new(16, 5, 5),
            100,
        );

        let outcome = MeleeAction::new(EntityId::PLAYER, 1, 0).perform(&mut state, &config);
        assert_eq!(outcome, Ok(ActionOutcome::Performed));
        assert_eq!(hp(&state, troll), 16);
        assert_eq!(
            state.log.last().unwrap().text,
            "Priest attacks Troll but does no damage"
        );
    }

    #[test]
    fn nothing_to_attack() {
        let (mut state, config) = arena();
        let result = MeleeAction::new(EntityId::PLAYER, 1, 0).perform(&mut state, &config);
        assert_eq!(result, Err(ActionError::NothingToAttack));
        assert!(state.log.is_empty());
    }

    #[test]
    fn killing_blow_runs_death_transition() {
        let (mut state, config) = arena();
        let orc = spawn_monster(&mut state, "orc", Position::new(5, 6), Fighter::new(2, 0, 4), 35);

        MeleeAction::new(EntityId::PLAYER, 0, 1)
            .perform(&mut state, &config)
            .unwrap();

        let corpse = state.map.entity(orc).unwrap();
        assert!(!corpse.is_alive());
        assert_eq!(corpse.name, "remains of orc");
        let texts: Vec<_> = state.log.iter().map(|m| m.text.clone()).collect();
        assert_eq!(
            texts,
            [
                "Priest attacks orc for 2 hit points",
                "orc is dead!",
                "You gain 35 experience points.",
            ]
        );
    }

    #[test]
    fn enemy_attack_names_are_capitalized() {
        let (mut state, config) = arena();
        let orc = spawn_monster(&mut state, "orc", Position::new(6, 5), Fighter::new(10, 0, 4), 35);

        MeleeAction::new(orc, -1, 0).perform(&mut state, &config).unwrap();
        assert_eq!(hp(&state, EntityId::PLAYER), 27);
        assert_eq!(
            state.log.last().unwrap().text,
            "Orc attacks Priest for 3 hit points"
        );
    }
}
