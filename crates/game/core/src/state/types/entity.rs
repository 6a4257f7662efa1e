//! Entities and their component bundles.
//!
//! Every entity is owned by exactly one container: the map's entity list or an
//! actor's [`Inventory`]. Cross references between entities are [`EntityId`]
//! handles resolved at use time.

use crate::palette::Rgb;

use super::{
    AiState, CombatBonus, Equipment, EntityId, Fighter, Inventory, ItemComponents, Level, Position,
    RenderOrder,
};

/// Glyph plus colors used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Option<Rgb>,
}

impl Appearance {
    pub const fn new(glyph: char, fg: Rgb) -> Self {
        Self { glyph, fg, bg: None }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub appearance: Appearance,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    /// FOV radius when this entity is the viewing origin.
    pub light_radius: u32,
    pub kind: EntityKind,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Actor(Box<ActorComponents>),
    Item(ItemComponents),
    Scenery(SceneryKind),
}

/// Non-interactive markers that still react to a bump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneryKind {
    StairsUp,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorComponents {
    /// `None` means the actor is dead.
    pub ai: Option<AiState>,
    pub fighter: Fighter,
    pub level: Level,
    pub equipment: Equipment,
    pub inventory: Option<Inventory>,
}

impl ActorComponents {
    pub fn new(ai: AiState, fighter: Fighter, level: Level) -> Self {
        Self {
            ai: Some(ai),
            fighter,
            level,
            equipment: Equipment::new(),
            inventory: None,
        }
    }

    pub fn with_inventory(mut self, capacity: usize) -> Self {
        self.inventory = Some(Inventory::new(capacity));
        self
    }

    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Recomputes the fighter's cached equipment bonus.
    pub fn refresh_bonuses(&mut self) -> CombatBonus {
        let bonus = self.equipment.bonus(self.inventory.as_ref());
        self.fighter.set_bonus(bonus);
        bonus
    }
}

impl Entity {
    /// Actors always block movement and draw on top.
    pub fn actor(
        name: impl Into<String>,
        appearance: Appearance,
        light_radius: u32,
        components: ActorComponents,
    ) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            position: Position::ORIGIN,
            name: name.into(),
            appearance,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            light_radius,
            kind: EntityKind::Actor(Box::new(components)),
        }
    }

    /// Items never block movement.
    pub fn item(
        name: impl Into<String>,
        appearance: Appearance,
        components: ItemComponents,
    ) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            position: Position::ORIGIN,
            name: name.into(),
            appearance,
            blocks_movement: false,
            render_order: RenderOrder::Item,
            light_radius: 0,
            kind: EntityKind::Item(components),
        }
    }

    pub fn scenery(name: impl Into<String>, appearance: Appearance, kind: SceneryKind) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            position: Position::ORIGIN,
            name: name.into(),
            appearance,
            blocks_movement: false,
            render_order: RenderOrder::Stairs,
            light_radius: 0,
            kind: EntityKind::Scenery(kind),
        }
    }

    /// Clones a template into a concrete entity.
    pub fn spawn(&self, id: EntityId, position: Position) -> Self {
        let mut entity = self.clone();
        entity.id = id;
        entity.position = position;
        entity
    }

    pub fn as_actor(&self) -> Option<&ActorComponents> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut ActorComponents> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemComponents> {
        match &self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn scenery_kind(&self) -> Option<SceneryKind> {
        match self.kind {
            EntityKind::Scenery(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_actor(&self) -> bool {
        matches!(self.kind, EntityKind::Actor(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, EntityKind::Item(_))
    }

    pub fn is_alive(&self) -> bool {
        self.as_actor().is_some_and(ActorComponents::is_alive)
    }

    pub fn fighter(&self) -> Option<&Fighter> {
        self.as_actor().map(|actor| &actor.fighter)
    }
}
