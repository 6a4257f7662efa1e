use crate::action::ActionError;
use crate::config::GameConfig;
use crate::palette;
use crate::state::{EntityId, GameState, RenderOrder};

/// Corpse glyph for anything that is not the player.
const CORPSE_GLYPH: char = '≈';

pub fn corpse_name(name: &str) -> String {
    format!("remains of {name}")
}

/// Turns a freshly killed actor into a corpse. Called once, from `apply_damage`.
pub(super) fn die(
    state: &mut GameState,
    config: &GameConfig,
    target: EntityId,
) -> Result<(), ActionError> {
    let entity = state
        .map
        .entity_mut(target)
        .ok_or(ActionError::EntityNotFound(target))?;

    let (message, color) = if target.is_player() {
        ("You died! Better luck next time.".to_owned(), palette::PLAYER_DIE)
    } else {
        entity.appearance.glyph = CORPSE_GLYPH;
        (format!("{} is dead!", entity.name), palette::ENEMY_DIE)
    };

    entity.appearance.fg = palette::DEAD_BLOOD_FG;
    entity.appearance.bg = None;
    entity.blocks_movement = false;
    entity.render_order = RenderOrder::Corpse;
    entity.name = corpse_name(&entity.name);
    entity.light_radius = config.corpse_light_radius;

    let xp_given = match entity.as_actor_mut() {
        Some(actor) => {
            actor.ai = None;
            actor.level.xp_given
        }
        None => return Err(ActionError::NotAnActor(target)),
    };

    state.message(message, color);

    if xp_given > 0 {
        award_xp(state, xp_given);
    }
    Ok(())
}

/// Adds XP to the player and announces a pending level-up.
///
/// Returns true when the player now has a level-up waiting.
pub fn award_xp(state: &mut GameState, xp: u32) -> bool {
    let Some(level) = state
        .player_mut()
        .and_then(|player| player.as_actor_mut())
        .map(|actor| &mut actor.level)
    else {
        return false;
    };

    if !level.add_xp(xp) {
        return false;
    }
    let ready = level.requires_level_up();
    let next_level = level.current_level + 1;

    state.message(format!("You gain {xp} experience points."), palette::WHITE);
    if ready {
        state.message(format!("You advance to level {next_level}!"), palette::WHITE);
    }
    ready
}
