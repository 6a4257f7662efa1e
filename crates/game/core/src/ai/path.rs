//! Breadth-first path search over walkable tiles.

use std::collections::{HashMap, VecDeque};

use strum::IntoEnumIterator;

use crate::config::GameConfig;
use crate::state::{Direction, GameMap, Position};

/// First step of a shortest 8-connected path from `from` to `to`.
///
/// Tiles holding a blocking entity are avoided, except the goal itself. The
/// search gives up after [`GameConfig::MAX_PATH_NODES`] tiles.
pub fn first_step_towards(map: &GameMap, from: Position, to: Position) -> Option<Position> {
    if from == to {
        return None;
    }

    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut frontier = VecDeque::from([from]);
    came_from.insert(from, from);

    while let Some(current) = frontier.pop_front() {
        if current == to {
            break;
        }
        if came_from.len() >= GameConfig::MAX_PATH_NODES {
            return None;
        }

        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            let next = current.offset(dx, dy);
            if came_from.contains_key(&next) || !map.walkable(next) {
                continue;
            }
            if next != to && map.blocking_entity_at(next).is_some() {
                continue;
            }
            came_from.insert(next, current);
            frontier.push_back(next);
        }
    }

    if !came_from.contains_key(&to) {
        return None;
    }

    let mut step = to;
    while let Some(&parent) = came_from.get(&step) {
        if parent == from {
            return Some(step);
        }
        step = parent;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tile;

    fn corridor() -> GameMap {
        // ######
        // #....#
        // ####.#
        // #....#
        // ######
        let mut map = GameMap::new(6, 5);
        for x in 1..5 {
            map.set_tile(Position::new(x, 1), Tile::floor());
            map.set_tile(Position::new(x, 3), Tile::floor());
        }
        map.set_tile(Position::new(4, 2), Tile::floor());
        map
    }

    #[test]
    fn follows_the_corridor() {
        let map = corridor();
        let step = first_step_towards(&map, Position::new(1, 1), Position::new(1, 3));
        assert_eq!(step, Some(Position::new(2, 1)));
    }

    #[test]
    fn unreachable_goal() {
        let mut map = corridor();
        map.set_tile(Position::new(4, 2), Tile::wall());
        assert_eq!(
            first_step_towards(&map, Position::new(1, 1), Position::new(1, 3)),
            None
        );
    }
}
