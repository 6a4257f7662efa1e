//! Fixtures shared by the inline test modules.

use crate::config::GameConfig;
use crate::palette;
use crate::state::{
    ActorComponents, AiState, Appearance, ConsumableEffect, Entity, EntityId, Equippable,
    Fighter, GameMap, GameState, ItemComponents, Level, Position, Tile,
};

pub const ARENA_SIZE: i32 = 12;

/// A walled 12x12 room with the player at (5, 5) and FOV computed.
pub fn arena() -> (GameState, GameConfig) {
    let config = GameConfig::default().with_map_size(ARENA_SIZE as u32, ARENA_SIZE as u32);
    let mut map = GameMap::new(config.map_width, config.map_height);
    for y in 1..ARENA_SIZE - 1 {
        for x in 1..ARENA_SIZE - 1 {
            map.set_tile(Position::new(x, y), Tile::floor());
        }
    }
    map.set_downstairs(Position::new(ARENA_SIZE - 2, ARENA_SIZE - 2));

    let player = Entity::actor(
        "Priest",
        Appearance::new('@', palette::CORNFLOWER),
        8,
        ActorComponents::new(
            AiState::Controlled,
            Fighter::new(30, 1, 2),
            Level::progression(config.level_up_base, config.level_up_factor),
        )
        .with_inventory(config.inventory_capacity),
    )
    .spawn(EntityId::PLAYER, Position::new(5, 5));
    map.add(player);

    let mut state = GameState::new(7, map);
    refresh_fov(&mut state);
    (state, config)
}

pub fn refresh_fov(state: &mut GameState) {
    let (origin, radius) = {
        let player = state.player().expect("player");
        (player.position, player.light_radius)
    };
    state.map.update_fov(origin, radius);
}

pub fn spawn_orc(state: &mut GameState, position: Position) -> EntityId {
    spawn_monster(state, "Orc", position, Fighter::new(10, 0, 4), 35)
}

pub fn spawn_monster(
    state: &mut GameState,
    name: &str,
    position: Position,
    fighter: Fighter,
    xp: u32,
) -> EntityId {
    let id = state.ids.allocate();
    let monster = Entity::actor(
        name,
        Appearance::new('o', palette::WHITE),
        8,
        ActorComponents::new(AiState::Hostile, fighter, Level::bounty(xp)),
    )
    .spawn(id, position);
    state.map.add(monster);
    id
}

pub fn consumable(name: &str, effect: ConsumableEffect) -> Entity {
    Entity::item(
        name,
        Appearance::new('!', palette::WHITE),
        ItemComponents::consumable(effect),
    )
}

pub fn gear(name: &str, equippable: Equippable) -> Entity {
    Entity::item(
        name,
        Appearance::new('/', palette::WHITE),
        ItemComponents::equippable(equippable),
    )
}

/// Puts an item template straight into the player's pack.
pub fn give(state: &mut GameState, template: &Entity) -> EntityId {
    let id = state.ids.allocate();
    let item = template.spawn(id, Position::ORIGIN);
    let inventory = state
        .player_mut()
        .and_then(Entity::as_actor_mut)
        .and_then(|actor| actor.inventory.as_mut())
        .expect("player inventory");
    assert!(inventory.try_push(item).is_ok(), "inventory full");
    id
}

/// Drops an item template on the floor.
pub fn place(state: &mut GameState, template: &Entity, position: Position) -> EntityId {
    let id = state.ids.allocate();
    state.map.add(template.spawn(id, position));
    id
}

pub fn hp(state: &GameState, id: EntityId) -> u32 {
    state
        .map
        .entity(id)
        .and_then(Entity::fighter)
        .map(Fighter::hp)
        .expect("fighter")
}

pub fn player_fighter_mut(state: &mut GameState) -> &mut Fighter {
    &mut state
        .player_mut()
        .and_then(Entity::as_actor_mut)
        .expect("player")
        .fighter
}
