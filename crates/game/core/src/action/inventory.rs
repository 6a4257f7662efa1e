use crate::config::GameConfig;
use crate::state::{ActorComponents, Entity, EntityId, GameState, Inventory};

use super::{ActionError, ActionOutcome, ActionTransition, living_actor};

fn inventory_of(entity: &Entity) -> Result<&Inventory, ActionError> {
    entity
        .as_actor()
        .and_then(|actor| actor.inventory.as_ref())
        .ok_or(ActionError::NoInventory)
}

fn actor_mut(state: &mut GameState, id: EntityId) -> Result<&mut ActorComponents, ActionError> {
    state
        .map
        .entity_mut(id)
        .ok_or(ActionError::EntityNotFound(id))?
        .as_actor_mut()
        .ok_or(ActionError::NotAnActor(id))
}

/// Name of a carried item, or `ItemNotCarried`.
fn carried_item_name(
    state: &GameState,
    actor: EntityId,
    item: EntityId,
) -> Result<String, ActionError> {
    let entity = living_actor(state, actor)?;
    inventory_of(entity)?
        .get(item)
        .map(|item| item.name.clone())
        .ok_or(ActionError::ItemNotCarried)
}

/// Moves the item under the actor into its pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn item_here(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let entity = living_actor(state, self.actor)?;
        let inventory = inventory_of(entity)?;
        let item = state
            .map
            .item_at(entity.position)
            .ok_or(ActionError::NothingToPickUp)?;
        if inventory.is_full() {
            return Err(ActionError::InventoryFull);
        }
        Ok(item.id)
    }
}

impl ActionTransition for PickupAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        self.item_here(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let item_id = self.item_here(state)?;
        let item = state
            .map
            .remove(item_id)
            .ok_or(ActionError::EntityNotFound(item_id))?;
        let name = item.name.clone();

        let inventory = actor_mut(state, self.actor)?
            .inventory
            .as_mut()
            .ok_or(ActionError::NoInventory)?;
        if let Err(item) = inventory.try_push(item) {
            // Capacity was checked above; put it back rather than lose it.
            state.map.add(item);
            return Err(ActionError::InventoryFull);
        }

        state.message(format!("You picked up the {name}!"), crate::palette::WHITE);
        Ok(ActionOutcome::Performed)
    }
}

/// Puts a carried item on the floor, taking it off first if worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        carried_item_name(state, self.actor, self.item).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let position = living_actor(state, self.actor)?.position;
        let actor = actor_mut(state, self.actor)?;

        let was_worn = actor.equipment.unequip_item(self.item);
        let mut item = actor
            .inventory
            .as_mut()
            .and_then(|inventory| inventory.remove(self.item))
            .ok_or(ActionError::ItemNotCarried)?;
        if was_worn {
            actor.refresh_bonuses();
        }

        item.position = position;
        let name = item.name.clone();
        state.map.add(item);

        if was_worn {
            state.message(format!("You remove the {name}."), crate::palette::WHITE);
        }
        state.message(format!("You dropped the {name}."), crate::palette::WHITE);
        Ok(ActionOutcome::Performed)
    }
}

/// Toggles whether a carried equippable is worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        let entity = living_actor(state, self.actor)?;
        let item = inventory_of(entity)?
            .get(self.item)
            .ok_or(ActionError::ItemNotCarried)?;
        match item.as_item().and_then(|components| components.equippable) {
            Some(_) => Ok(()),
            None => Err(ActionError::NotEquippable(item.name.clone())),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<ActionOutcome, ActionError> {
        let messages = toggle_equip(actor_mut(state, self.actor)?, self.item)?;
        for message in messages {
            state.message(message, crate::palette::WHITE);
        }
        Ok(ActionOutcome::Performed)
    }
}

/// Equips or unequips `item` and refreshes bonuses. Returns the log lines.
pub(crate) fn toggle_equip(
    actor: &mut ActorComponents,
    item: EntityId,
) -> Result<Vec<String>, ActionError> {
    let inventory = actor.inventory.as_ref().ok_or(ActionError::NoInventory)?;
    let carried = inventory.get(item).ok_or(ActionError::ItemNotCarried)?;
    let slot = carried
        .as_item()
        .and_then(|components| components.equippable)
        .map(|equippable| equippable.slot)
        .ok_or_else(|| ActionError::NotEquippable(carried.name.clone()))?;
    let name = carried.name.clone();

    let mut messages = Vec::new();
    if actor.equipment.is_equipped(item) {
        actor.equipment.unequip(slot);
        messages.push(format!("You remove the {name}."));
    } else {
        if let Some(previous) = actor.equipment.equip(slot, item) {
            let previous_name = inventory
                .get(previous)
                .map(|entity| entity.name.clone())
                .unwrap_or_default();
            messages.push(format!("You remove the {previous_name}."));
        }
        messages.push(format!("You equip the {name}."));
    }
    actor.refresh_bonuses();
    Ok(messages)
}
