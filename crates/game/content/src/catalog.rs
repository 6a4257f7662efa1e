//! Entity templates for the monastery crawl.
//!
//! Templates are plain [`Entity`] values with an unassigned id. Spawning
//! clones a template and stamps a fresh id and position onto it.

use game_core::palette::{self, Rgb};
use game_core::{
    ActorComponents, AiState, Appearance, ConsumableEffect, CrossArms, Entity, EntityId,
    Equippable, Fighter, GameConfig, IdAllocator, Inventory, ItemComponents, Level, Position,
    SceneryKind,
};

use crate::spawn::SpawnRules;

/// Opening lines, one picked per new game.
pub const WELCOME_MESSAGES: [&str; 4] = [
    "Torchlight flickers as the monastery doors close behind you",
    "Darkness envelops the dusty corridors of the monastery",
    "Your footsteps echo through the empty monastery",
    "You descend the monastery stairs with uncertainty",
];

/// Deterministic pick from [`WELCOME_MESSAGES`].
pub fn welcome_message(seed: u64) -> &'static str {
    WELCOME_MESSAGES[(seed % WELCOME_MESSAGES.len() as u64) as usize]
}

/// Only the player originates a field of view, so this is cosmetic.
const MONSTER_LIGHT_RADIUS: u32 = 8;

/// Every template the generator and the new-game setup draw from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub player: Entity,
    /// Item template names placed in the player's pack and worn at start.
    pub starting_gear: Vec<String>,
    pub stairs_up: Entity,
    pub monsters: Vec<Entity>,
    pub items: Vec<Entity>,
    pub spawns: SpawnRules,
}

impl Catalog {
    /// Built-in content set.
    pub fn builtin() -> Self {
        Self {
            player: player(),
            starting_gear: vec!["Dagger".into(), "Vestments".into()],
            stairs_up: Entity::scenery(
                "Stairs up",
                Appearance {
                    glyph: '<',
                    fg: Rgb(150, 150, 170),
                    bg: Some(Rgb(105, 105, 105)),
                },
                SceneryKind::StairsUp,
            ),
            monsters: vec![
                monster("Orc", Appearance::new('Ω', Rgb(63, 127, 63)), 10, 0, 4, 35),
                monster("Troll", Appearance::new('☻', Rgb(0, 240, 0)), 16, 1, 5, 100),
            ],
            items: vec![
                consumable(
                    "Potion - Healing",
                    Appearance::new('!', Rgb(127, 0, 255)),
                    ConsumableEffect::Heal { amount: 4 },
                ),
                consumable(
                    "Scroll - Babel",
                    Appearance::new('?', Rgb(217, 48, 200)),
                    ConsumableEffect::ConfusionRanged { turns: 10 },
                ),
                consumable(
                    "Scroll - Reckoning",
                    Appearance::new('☼', Rgb(255, 0, 0)),
                    ConsumableEffect::AreaRadius {
                        damage: 12,
                        radius: 3.0,
                    },
                ),
                consumable(
                    "Scroll - Holy Blast",
                    Appearance::new('┼', Rgb(200, 200, 0)),
                    ConsumableEffect::CrossShaped {
                        damage: 15,
                        arms: CrossArms {
                            up: 2,
                            down: 3,
                            left: 2,
                            right: 2,
                        },
                    },
                ),
                consumable(
                    "Scroll - Sunbeam",
                    Appearance::new('▼', Rgb(204, 102, 0)),
                    ConsumableEffect::NearestBeam {
                        damage: 20,
                        max_range: 5.0,
                    },
                ),
                gear("Dagger", '/', Rgb(0, 191, 255), Equippable::weapon(2)),
                gear("Cudgel", '/', Rgb(0, 191, 255), Equippable::weapon(4)),
                gear("Vestments", '[', Rgb(139, 69, 19), Equippable::armor(1)),
                gear("Chain Mail", '[', Rgb(139, 69, 19), Equippable::armor(3)),
            ],
            spawns: SpawnRules::builtin(),
        }
    }

    pub fn monster(&self, name: &str) -> Option<&Entity> {
        self.monsters.iter().find(|entity| entity.name == name)
    }

    pub fn item(&self, name: &str) -> Option<&Entity> {
        self.items.iter().find(|entity| entity.name == name)
    }

    /// Looks a name up in monsters first, then items.
    pub fn template(&self, name: &str) -> Option<&Entity> {
        self.monster(name).or_else(|| self.item(name))
    }

    /// Builds the player with the reserved id, the configured light radius, a
    /// config-sized pack and the starting gear already worn.
    ///
    /// Starting gear names that have no template are skipped.
    pub fn spawn_player(&self, ids: &mut IdAllocator, config: &GameConfig) -> Entity {
        let mut player = self.player.spawn(EntityId::PLAYER, Position::ORIGIN);
        player.light_radius = config.player_light_radius;
        if let Some(actor) = player.as_actor_mut() {
            actor.level = Level::progression(config.level_up_base, config.level_up_factor);
            let mut inventory = Inventory::new(config.inventory_capacity);

            for name in &self.starting_gear {
                let Some(template) = self.item(name) else {
                    continue;
                };
                let item = template.spawn(ids.allocate(), Position::ORIGIN);
                let worn = item.as_item().and_then(|item| item.equippable);
                let id = item.id;
                if inventory.try_push(item).is_err() {
                    break;
                }
                if let Some(equippable) = worn {
                    actor.equipment.equip(equippable.slot, id);
                }
            }

            actor.inventory = Some(inventory);
            actor.refresh_bonuses();
        }
        player
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn player() -> Entity {
    Entity::actor(
        "Priest",
        Appearance {
            glyph: '☺',
            fg: palette::CORNFLOWER,
            bg: Some(palette::BLACK),
        },
        GameConfig::DEFAULT_PLAYER_LIGHT_RADIUS,
        ActorComponents::new(
            AiState::Controlled,
            Fighter::new(30, 1, 2),
            Level::progression(
                GameConfig::DEFAULT_LEVEL_UP_BASE,
                GameConfig::DEFAULT_LEVEL_UP_FACTOR,
            ),
        ),
    )
}

fn monster(
    name: &str,
    appearance: Appearance,
    hp: u32,
    defense: i32,
    power: i32,
    xp: u32,
) -> Entity {
    Entity::actor(
        name,
        appearance,
        MONSTER_LIGHT_RADIUS,
        ActorComponents::new(
            AiState::Hostile,
            Fighter::new(hp, defense, power),
            Level::bounty(xp),
        ),
    )
}

fn consumable(name: &str, appearance: Appearance, effect: ConsumableEffect) -> Entity {
    Entity::item(name, appearance, ItemComponents::consumable(effect))
}

fn gear(name: &str, glyph: char, fg: Rgb, equippable: Equippable) -> Entity {
    Entity::item(
        name,
        Appearance::new(glyph, fg),
        ItemComponents::equippable(equippable),
    )
}
