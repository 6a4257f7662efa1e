//! Enemy decision making.
//!
//! AI never mutates state directly: it picks an [`Action`] and runs it
//! through the same pipeline the player uses. Failures are returned so the
//! sweep can forfeit that actor's turn.

mod path;

pub use path::first_step_towards;

use strum::{EnumCount, IntoEnumIterator};

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition, MoveAction};
use crate::config::GameConfig;
use crate::env::{PcgRng, RngOracle, compute_seed};
use crate::palette;
use crate::state::{AiState, Direction, EntityId, GameState};

/// Runs one turn for `actor` according to its AI slot.
///
/// Dead actors and the controlled player do nothing.
pub fn take_turn(
    state: &mut GameState,
    config: &GameConfig,
    actor: EntityId,
) -> Result<ActionOutcome, ActionError> {
    let ai = state
        .map
        .entity(actor)
        .and_then(|entity| entity.as_actor())
        .and_then(|components| components.ai.clone());

    match ai {
        None | Some(AiState::Controlled) => Ok(ActionOutcome::Performed),
        Some(AiState::Hostile) => hostile_action(state, actor)?.perform(state, config),
        Some(AiState::Confused {
            previous,
            turns_remaining,
        }) => confused_turn(state, config, actor, *previous, turns_remaining),
    }
}

/// Chase and attack the player while standing in the player's view.
fn hostile_action(state: &GameState, actor: EntityId) -> Result<Action, ActionError> {
    let me = state.map.entity(actor).ok_or(ActionError::EntityNotFound(actor))?;
    let Some(player) = state.player().filter(|player| player.is_alive()) else {
        return Ok(Action::wait(actor));
    };

    if !state.map.is_visible(me.position) {
        return Ok(Action::wait(actor));
    }

    let dx = player.position.x - me.position.x;
    let dy = player.position.y - me.position.y;
    if me.position.chebyshev(player.position) <= 1 {
        return Ok(Action::melee(actor, dx, dy));
    }

    Ok(
        match first_step_towards(&state.map, me.position, player.position) {
            Some(step) => Action::Move(MoveAction::new(
                actor,
                step.x - me.position.x,
                step.y - me.position.y,
            )),
            None => Action::wait(actor),
        },
    )
}

/// Stumble in a random direction, or snap out of it when the countdown ends.
fn confused_turn(
    state: &mut GameState,
    config: &GameConfig,
    actor: EntityId,
    previous: AiState,
    turns_remaining: u32,
) -> Result<ActionOutcome, ActionError> {
    let entity = state
        .map
        .entity_mut(actor)
        .ok_or(ActionError::EntityNotFound(actor))?;
    let name = entity.name.clone();
    let components = entity
        .as_actor_mut()
        .ok_or(ActionError::NotAnActor(actor))?;

    if turns_remaining == 0 {
        components.ai = Some(previous);
        state.message(
            format!("The {name} is no longer confused."),
            palette::STATUS_APPLIED,
        );
        return Ok(ActionOutcome::Performed);
    }

    components.ai = Some(AiState::Confused {
        previous: Box::new(previous),
        turns_remaining: turns_remaining - 1,
    });

    let nonce = state.turn.next_nonce();
    let roll = PcgRng.next_u32(compute_seed(state.game_seed, nonce, actor.0, 0));
    let Some(direction) = Direction::iter().nth(roll as usize % Direction::COUNT) else {
        return Action::wait(actor).perform(state, config);
    };
    Action::bump(actor, direction).perform(state, config)
}
