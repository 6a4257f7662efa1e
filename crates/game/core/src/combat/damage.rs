use crate::action::ActionError;
use crate::config::GameConfig;
use crate::state::{EntityId, Fighter, GameState};

use super::death;

/// Outcome of one [`apply_damage`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub dealt: u32,
    /// True only for the call that triggered the death transition.
    pub killed: bool,
}

/// Melee damage before clamping: effective power minus effective defense.
///
/// Zero or negative means the blow glances off.
pub fn melee_damage(attacker: &Fighter, defender: &Fighter) -> i32 {
    attacker.power() - defender.defense()
}

/// Removes HP from `target` and runs the death transition when it empties.
///
/// Damaging an actor that is already dead changes nothing observable.
pub fn apply_damage(
    state: &mut GameState,
    config: &GameConfig,
    target: EntityId,
    amount: u32,
) -> Result<DamageReport, ActionError> {
    let entity = state
        .map
        .entity_mut(target)
        .ok_or(ActionError::EntityNotFound(target))?;
    let actor = entity
        .as_actor_mut()
        .ok_or(ActionError::NotAnActor(target))?;

    let taken = actor.fighter.take_damage(amount);
    let killed = taken.depleted && actor.ai.is_some();
    if killed {
        death::die(state, config, target)?;
    }

    Ok(DamageReport {
        dealt: taken.dealt,
        killed,
    })
}

/// Restores up to `amount` HP to a living actor. Returns the HP recovered.
///
/// Corpses cannot be healed: there is no way back from death.
pub fn apply_healing(
    state: &mut GameState,
    target: EntityId,
    amount: u32,
) -> Result<u32, ActionError> {
    let entity = state
        .map
        .entity_mut(target)
        .ok_or(ActionError::EntityNotFound(target))?;
    let actor = entity
        .as_actor_mut()
        .ok_or(ActionError::NotAnActor(target))?;

    if !actor.is_alive() {
        return Ok(0);
    }
    Ok(actor.fighter.heal(amount))
}
