//! Consumable activation.
//!
//! Each effect validates everything it needs (visibility, a target, at least
//! one actor hit) before the first mutation, so a failed use leaves the state
//! untouched and the item in the pack.

use crate::combat;
use crate::config::GameConfig;
use crate::palette;
use crate::state::{AiState, ConsumableEffect, CrossArms, EntityId, GameState, Position};

use super::{ActionError, ActionOutcome, ActionTransition, living_actor};

/// Activates a carried consumable, optionally at a selected tile.
///
/// Without an explicit target, tile-targeted effects aim at the user's own
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self {
            actor,
            item,
            target,
        }
    }

    fn prepare(&self, state: &GameState) -> Result<(ConsumableEffect, Position), ActionError> {
        let user = living_actor(state, self.actor)?;
        let item = user
            .as_actor()
            .and_then(|actor| actor.inventory.as_ref())
            .ok_or(ActionError::NoInventory)?
            .get(self.item)
            .ok_or(ActionError::ItemNotCarried)?;
        let effect = item
            .as_item()
            .and_then(|components| components.consumable)
            .ok_or_else(|| ActionError::NotConsumable(item.name.clone()))?;
        Ok((effect, self.target.unwrap_or(user.position)))
    }

    /// Removes the spent item from the user's pack.
    fn consume(&self, state: &mut GameState) {
        if let Some(actor) = state
            .map
            .entity_mut(self.actor)
            .and_then(|entity| entity.as_actor_mut())
        {
            actor.equipment.unequip_item(self.item);
            if let Some(inventory) = actor.inventory.as_mut() {
                inventory.remove(self.item);
            }
        }
    }
}

impl ActionTransition for UseItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        self.prepare(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let (effect, target) = self.prepare(state)?;

        match effect {
            ConsumableEffect::Heal { amount } => heal(state, self.actor, amount)?,
            ConsumableEffect::ConfusionRanged { turns } => {
                confuse(state, self.actor, target, turns)?
            }
            ConsumableEffect::AreaRadius { damage, radius } => {
                area_blast(state, config, target, damage, radius)?
            }
            ConsumableEffect::CrossShaped { damage, arms } => {
                cross_blast(state, config, target, damage, arms)?
            }
            ConsumableEffect::NearestBeam { damage, max_range } => {
                nearest_beam(state, config, self.actor, damage, max_range)?
            }
        }

        self.consume(state);
        Ok(ActionOutcome::Performed)
    }
}

fn require_visible(state: &GameState, target: Position) -> Result<(), ActionError> {
    if state.map.is_visible(target) {
        Ok(())
    } else {
        Err(ActionError::TargetNotVisible)
    }
}

fn heal(state: &mut GameState, user: EntityId, amount: u32) -> Result<(), ActionError> {
    let recovered = combat::apply_healing(state, user, amount)?;
    if recovered == 0 {
        return Err(ActionError::HealthFull);
    }
    state.message(
        format!("The potion warms your body and soothes your wounds, recovering {recovered} HP!"),
        palette::HP_RECOVERED,
    );
    Ok(())
}

fn confuse(
    state: &mut GameState,
    user: EntityId,
    target: Position,
    turns: u32,
) -> Result<(), ActionError> {
    require_visible(state, target)?;
    let victim = state
        .map
        .actor_at(target)
        .ok_or(ActionError::NoEnemyTargeted)?;
    if victim.id == user {
        return Err(ActionError::CannotConfuseSelf);
    }
    let victim_id = victim.id;
    let name = victim.name.clone();

    let actor = state
        .map
        .entity_mut(victim_id)
        .and_then(|entity| entity.as_actor_mut())
        .ok_or(ActionError::NotAnActor(victim_id))?;
    // Re-confusing restarts the countdown but keeps the original behaviour.
    let previous = match actor.ai.take() {
        Some(AiState::Confused { previous, .. }) => *previous,
        Some(ai) => ai,
        None => return Err(ActionError::NoEnemyTargeted),
    };
    actor.ai = Some(AiState::confused(previous, turns));

    state.message(
        format!("With a vacant and confused gaze the {name} starts to stumble around!"),
        palette::STATUS_APPLIED,
    );
    Ok(())
}

/// Living actors matching `hit`, in map order, as `(id, name)` pairs.
fn living_where(state: &GameState, hit: impl Fn(Position) -> bool) -> Vec<(EntityId, String)> {
    state
        .map
        .living_actors()
        .filter(|entity| hit(entity.position))
        .map(|entity| (entity.id, entity.name.clone()))
        .collect()
}

fn area_blast(
    state: &mut GameState,
    config: &GameConfig,
    center: Position,
    damage: u32,
    radius: f64,
) -> Result<(), ActionError> {
    require_visible(state, center)?;
    let victims = living_where(state, |position| position.distance(center) <= radius);
    if victims.is_empty() {
        return Err(ActionError::NoTargetsInArea);
    }

    for (id, name) in victims {
        state.message(
            format!("The {name} is hammered by the inevitable, taking {damage} damage!"),
            palette::LIGHT_ORANGE,
        );
        combat::apply_damage(state, config, id, damage)?;
    }
    Ok(())
}

fn cross_blast(
    state: &mut GameState,
    config: &GameConfig,
    center: Position,
    damage: u32,
    arms: CrossArms,
) -> Result<(), ActionError> {
    require_visible(state, center)?;
    let caught = living_where(state, |position| arms.contains(center, position));
    if caught.is_empty() {
        return Err(ActionError::NoTargetsInArea);
    }

    let mut player = None;
    for (id, name) in caught {
        if id.is_player() {
            player = Some(name);
            continue;
        }
        state.message(
            format!("The {name} is purified by flame, taking {damage} damage!"),
            palette::LIGHT_ORANGE,
        );
        combat::apply_damage(state, config, id, damage)?;
    }

    // The player is handled last so the heal reads as the closing line.
    if let Some(name) = player {
        let recovered = combat::apply_healing(state, EntityId::PLAYER, damage / 2)?;
        state.message(
            format!("The {name} is purified by flame, recovering {recovered} HP!"),
            palette::HP_RECOVERED,
        );
    }
    Ok(())
}

fn nearest_beam(
    state: &mut GameState,
    config: &GameConfig,
    user: EntityId,
    damage: u32,
    max_range: f64,
) -> Result<(), ActionError> {
    let origin = living_actor(state, user)?.position;

    let mut closest: Option<(f64, EntityId, &str)> = None;
    for entity in state.map.living_actors() {
        if entity.id == user || !state.map.is_visible(entity.position) {
            continue;
        }
        let distance = origin.distance(entity.position);
        if distance > max_range {
            continue;
        }
        if closest.is_none_or(|(best, _, _)| distance < best) {
            closest = Some((distance, entity.id, entity.name.as_str()));
        }
    }

    let (_, target, name) = closest.ok_or(ActionError::NoEnemyInRange)?;
    let message = format!("Sunbeam blazes into {name}, glowing and pure, for {damage} damage!");
    state.message(message, palette::LIGHT_ORANGE);
    combat::apply_damage(state, config, target, damage)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Entity, Fighter};
    use crate::test_utils::{
        arena, consumable, give, hp, player_fighter_mut, refresh_fov, spawn_monster, spawn_orc,
    };

    const CROSS: CrossArms = CrossArms {
        up: 2,
        down: 3,
        left: 2,
        right: 2,
    };

    fn use_item(
        state: &mut GameState,
        config: &GameConfig,
        effect: ConsumableEffect,
        target: Option<Position>,
    ) -> (EntityId, Result<ActionOutcome, ActionError>) {
        let item = give(state, &consumable("Scroll", effect));
        let result = UseItemAction::new(EntityId::PLAYER, item, target).perform(state, config);
        (item, result)
    }

    fn carried(state: &GameState, item: EntityId) -> bool {
        state
            .player()
            .and_then(Entity::as_actor)
            .and_then(|actor| actor.inventory.as_ref())
            .is_some_and(|inventory| inventory.get(item).is_some())
    }

    #[test]
    fn heal_at_full_health_keeps_potion() {
        let (mut state, config) = arena();
        let potion = ConsumableEffect::Heal { amount: 4 };
        let (item, result) = use_item(&mut state, &config, potion, None);

        assert_eq!(result, Err(ActionError::HealthFull));
        assert!(carried(&state, item));
    }

    #[test]
    fn heal_restores_up_to_max_and_consumes() {
        let (mut state, config) = arena();
        player_fighter_mut(&mut state).take_damage(2);

        let potion = ConsumableEffect::Heal { amount: 4 };
        let (item, result) = use_item(&mut state, &config, potion, None);

        assert!(result.is_ok());
        assert_eq!(hp(&state, EntityId::PLAYER), 30);
        assert!(!carried(&state, item));
        assert_eq!(
            state.log.last().unwrap().text,
            "The potion warms your body and soothes your wounds, recovering 2 HP!"
        );
    }

    #[test]
    fn confusion_wraps_previous_ai() {
        let (mut state, config) = arena();
        let orc = spawn_orc(&mut state, Position::new(7, 5));

        let (item, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::ConfusionRanged { turns: 10 },
            Some(Position::new(7, 5)),
        );

        assert!(result.is_ok());
        assert!(!carried(&state, item));
        let ai = state.map.entity(orc).unwrap().as_actor().unwrap().ai.clone();
        assert_eq!(ai, Some(AiState::confused(AiState::Hostile, 10)));
    }

    #[test]
    fn confusion_failures() {
        let (mut state, config) = arena();
        let effect = ConsumableEffect::ConfusionRanged { turns: 10 };

        let (_, empty) = use_item(&mut state, &config, effect, Some(Position::new(7, 5)));
        assert_eq!(empty, Err(ActionError::NoEnemyTargeted));

        let (_, myself) = use_item(&mut state, &config, effect, None);
        assert_eq!(myself, Err(ActionError::CannotConfuseSelf));

        let (_, unseen) = use_item(&mut state, &config, effect, Some(Position::new(20, 20)));
        assert_eq!(unseen, Err(ActionError::TargetNotVisible));
    }

    #[test]
    fn area_hits_inside_radius_only() {
        let (mut state, config) = arena();
        // Player out of the way of the blast.
        state.player_mut().unwrap().position = Position::new(1, 1);
        refresh_fov(&mut state);
        let near = spawn_monster(
            &mut state,
            "Near",
            Position::new(7, 6),
            Fighter::new(30, 0, 0),
            0,
        );
        let far = spawn_monster(&mut state, "Far", Position::new(9, 9), Fighter::new(30, 0, 0), 0);

        let (item, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::AreaRadius {
                damage: 12,
                radius: 3.0,
            },
            Some(Position::new(5, 5)),
        );

        assert!(result.is_ok());
        assert!(!carried(&state, item));
        assert_eq!(hp(&state, near), 18);
        assert_eq!(hp(&state, far), 30);
        assert_eq!(hp(&state, EntityId::PLAYER), 30);
    }

    #[test]
    fn area_with_no_targets_fails_without_consuming() {
        let (mut state, config) = arena();
        let (item, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::AreaRadius {
                damage: 12,
                radius: 1.0,
            },
            Some(Position::new(8, 8)),
        );
        assert_eq!(result, Err(ActionError::NoTargetsInArea));
        assert!(carried(&state, item));
    }

    #[test]
    fn cross_damages_enemies_and_heals_player_last() {
        let (mut state, config) = arena();
        player_fighter_mut(&mut state).take_damage(10);
        let inside = spawn_orc(&mut state, Position::new(5, 8));
        let outside = spawn_orc(&mut state, Position::new(6, 6));

        let (_, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::CrossShaped {
                damage: 15,
                arms: CROSS,
            },
            Some(Position::new(5, 5)),
        );

        assert!(result.is_ok());
        assert!(!state.map.entity(inside).unwrap().is_alive());
        assert_eq!(hp(&state, outside), 10);
        assert_eq!(hp(&state, EntityId::PLAYER), 27);
        assert_eq!(
            state.log.last().unwrap().text,
            "The Priest is purified by flame, recovering 7 HP!"
        );
    }

    #[test]
    fn cross_with_only_player_outside_footprint_enemy() {
        let (mut state, config) = arena();
        let enemy = spawn_orc(&mut state, Position::new(8, 8));

        let (_, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::CrossShaped {
                damage: 15,
                arms: CROSS,
            },
            None,
        );

        assert!(result.is_ok());
        assert_eq!(hp(&state, enemy), 10);
        assert_eq!(hp(&state, EntityId::PLAYER), 30);
    }

    #[test]
    fn beam_picks_strictly_closest_visible() {
        let (mut state, config) = arena();
        let far = spawn_monster(&mut state, "Far", Position::new(5, 9), Fighter::new(30, 0, 0), 0);
        let near = spawn_monster(
            &mut state,
            "Near",
            Position::new(7, 5),
            Fighter::new(30, 0, 0),
            0,
        );
        let tie = spawn_monster(&mut state, "Tie", Position::new(3, 5), Fighter::new(30, 0, 0), 0);

        let (_, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::NearestBeam {
                damage: 20,
                max_range: 5.0,
            },
            None,
        );

        assert!(result.is_ok());
        assert_eq!(hp(&state, near), 10);
        assert_eq!(hp(&state, tie), 30);
        assert_eq!(hp(&state, far), 30);
        assert_eq!(
            state.log.last().unwrap().text,
            "Sunbeam blazes into Near, glowing and pure, for 20 damage!"
        );
    }

    #[test]
    fn beam_without_target_in_range() {
        let (mut state, config) = arena();
        spawn_orc(&mut state, Position::new(10, 10));

        let (item, result) = use_item(
            &mut state,
            &config,
            ConsumableEffect::NearestBeam {
                damage: 20,
                max_range: 5.0,
            },
            None,
        );
        assert_eq!(result, Err(ActionError::NoEnemyInRange));
        assert!(carried(&state, item));
    }
}
