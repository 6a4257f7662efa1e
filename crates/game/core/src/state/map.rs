//! Tile grid, entity set and visibility grids for one floor.
//!
//! All queries are side-effect free. Entities live in a `Vec` in insertion
//! order, which is the iteration order every sweep and query relies on.

use bitflags::bitflags;

use crate::palette::{self, Rgb};

use super::fov;
use super::{Entity, EntityId, Position};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const WALKABLE    = 1 << 0;
        const TRANSPARENT = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGlyph {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// One grid cell with lit and unlit render variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub flags: TileFlags,
    /// Drawn when explored but not currently visible.
    pub dark: TileGlyph,
    /// Drawn when visible.
    pub light: TileGlyph,
}

impl Tile {
    pub const fn floor() -> Self {
        Self {
            flags: TileFlags::WALKABLE.union(TileFlags::TRANSPARENT),
            dark: TileGlyph {
                glyph: '░',
                fg: palette::FLOOR_FG,
                bg: palette::FLOOR_BG,
            },
            light: TileGlyph {
                glyph: '░',
                fg: palette::FLOOR_FG,
                bg: palette::TORCH_BASE,
            },
        }
    }

    pub const fn wall() -> Self {
        const WALL: TileGlyph = TileGlyph {
            glyph: '█',
            fg: palette::WALL_FG,
            bg: palette::WALL_BG,
        };
        Self {
            flags: TileFlags::empty(),
            dark: WALL,
            light: WALL,
        }
    }

    pub const fn down_stairs() -> Self {
        Self {
            flags: TileFlags::WALKABLE.union(TileFlags::TRANSPARENT),
            dark: TileGlyph {
                glyph: '>',
                fg: palette::FLOOR_FG,
                bg: palette::FLOOR_BG,
            },
            light: TileGlyph {
                glyph: '>',
                fg: palette::WHITE,
                bg: palette::TORCH_BASE,
            },
        }
    }

    pub fn is_walkable(&self) -> bool {
        self.flags.contains(TileFlags::WALKABLE)
    }

    pub fn is_transparent(&self) -> bool {
        self.flags.contains(TileFlags::TRANSPARENT)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    entities: Vec<Entity>,
    downstairs: Position,
}

impl GameMap {
    /// Creates a solid-wall map with no entities.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); cells],
            visible: vec![false; cells],
            explored: vec![false; cells],
            entities: Vec::new(),
            downstairs: Position::ORIGIN,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y as usize) * (self.width as usize) + position.x as usize)
    }

    // ---- terrain ------------------------------------------------------

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|index| &self.tiles[index])
    }

    /// Overwrites a tile. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = tile;
        }
    }

    /// False when out of bounds or the tile is not walkable.
    pub fn walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_walkable)
    }

    pub fn transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_transparent)
    }

    pub fn downstairs(&self) -> Position {
        self.downstairs
    }

    pub fn set_downstairs(&mut self, position: Position) {
        self.downstairs = position;
        self.set_tile(position, Tile::down_stairs());
    }

    // ---- entities -----------------------------------------------------

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn entities_at(&self, position: Position) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.position == position)
    }

    /// First entity at `position` whose blocking flag is set.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities_at(position)
            .find(|entity| entity.blocks_movement)
    }

    /// First living actor at `position`. Corpses are ignored.
    pub fn actor_at(&self, position: Position) -> Option<&Entity> {
        self.entities_at(position).find(|entity| entity.is_alive())
    }

    /// Any entity at `position`, blocking or not.
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities_at(position).next()
    }

    pub fn item_at(&self, position: Position) -> Option<&Entity> {
        self.entities_at(position).find(|entity| entity.is_item())
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_alive())
    }

    /// Ids of living actors in iteration order, for sweeps that mutate.
    pub fn living_actor_ids(&self) -> Vec<EntityId> {
        self.living_actors().map(|entity| entity.id).collect()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entity(EntityId::PLAYER)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entity_mut(EntityId::PLAYER)
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Takes an entity out of the map, preserving the order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Comma-separated names of the entities at a visible tile.
    pub fn names_at(&self, position: Position) -> String {
        if !self.is_visible(position) {
            return String::new();
        }
        self.entities_at(position)
            .map(|entity| entity.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    // ---- visibility ---------------------------------------------------

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.visible[index])
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.explored[index])
    }

    /// Row-major visibility grid.
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// Row-major explored grid.
    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    /// Recomputes `visible` from `origin` and folds it into `explored`.
    pub fn update_fov(&mut self, origin: Position, radius: u32) {
        self.visible = fov::compute_fov(self.width, self.height, origin, radius, |position| {
            self.transparent(position)
        });
        for (explored, visible) in self.explored.iter_mut().zip(&self.visible) {
            *explored |= *visible;
        }
    }

    /// Marks every tile explored.
    pub fn reveal(&mut self) {
        self.explored.fill(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorComponents, AiState, Appearance, Fighter, Level};

    fn open_map(width: u32, height: u32) -> GameMap {
        let mut map = GameMap::new(width, height);
        for y in 1..height as i32 - 1 {
            for x in 1..width as i32 - 1 {
                map.set_tile(Position::new(x, y), Tile::floor());
            }
        }
        map
    }

    fn orc(id: u32, x: i32, y: i32) -> Entity {
        Entity::actor(
            "Orc",
            Appearance::new('o', palette::WHITE),
            8,
            ActorComponents::new(AiState::Hostile, Fighter::new(10, 0, 4), Level::bounty(35)),
        )
        .spawn(EntityId(id), Position::new(x, y))
    }

    #[test]
    fn walkable_rejects_walls_and_out_of_bounds() {
        let map = open_map(5, 5);
        assert!(map.walkable(Position::new(2, 2)));
        assert!(!map.walkable(Position::new(0, 2)));
        assert!(!map.walkable(Position::new(-1, 2)));
        assert!(!map.walkable(Position::new(2, 5)));
    }

    #[test]
    fn actor_at_ignores_corpses() {
        let mut map = open_map(5, 5);
        let mut corpse = orc(1, 2, 2);
        if let Some(actor) = corpse.as_actor_mut() {
            actor.ai = None;
        }
        corpse.blocks_movement = false;
        map.add(corpse);

        let here = Position::new(2, 2);
        assert!(map.actor_at(here).is_none());
        assert!(map.blocking_entity_at(here).is_none());
        assert!(map.entity_at(here).is_some());

        map.add(orc(2, 2, 2));
        assert_eq!(map.actor_at(here).map(|e| e.id), Some(EntityId(2)));
    }

    #[test]
    fn explored_is_monotonic() {
        let mut map = open_map(20, 5);
        map.update_fov(Position::new(2, 2), 2);
        let seen = Position::new(3, 2);
        assert!(map.is_visible(seen));

        map.update_fov(Position::new(16, 2), 2);
        assert!(!map.is_visible(seen));
        assert!(map.is_explored(seen));
    }

    #[test]
    fn names_at_requires_visibility() {
        let mut map = open_map(6, 6);
        map.add(orc(1, 3, 3));
        assert_eq!(map.names_at(Position::new(3, 3)), "");

        map.update_fov(Position::new(2, 2), 4);
        assert_eq!(map.names_at(Position::new(3, 3)), "Orc");
    }
}
