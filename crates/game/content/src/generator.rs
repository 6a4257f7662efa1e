//! Rooms-and-corridors floor generator.
//!
//! Rooms are axis-aligned rectangles placed at random and rejected on
//! overlap. Each new room is joined to the previous one by an L-shaped
//! corridor. The player arrives at the centre of the first room and the
//! downstairs sits at the centre of the last.

use game_core::{
    GameMap, GeneratedFloor, GenerationError, GenerationParams, IdAllocator, LayoutGenerator,
    PcgRng, Position, RngStream, Tile,
};

use crate::catalog::Catalog;

/// Rectangle in tile coordinates. The outer ring stays wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Room {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Room {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Overlap check including the wall ring, so rooms never share walls.
    fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    fn inner(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y1 + 1..self.y2)
            .flat_map(move |y| (self.x1 + 1..self.x2).map(move |x| Position::new(x, y)))
    }

    fn random_inner(&self, rng: &mut RngStream) -> Position {
        Position::new(
            rng.range_i32(self.x1 + 1, self.x2 - 1),
            rng.range_i32(self.y1 + 1, self.y2 - 1),
        )
    }
}

/// Default [`LayoutGenerator`] backed by a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub struct MonasteryLayout {
    catalog: Catalog,
}

impl MonasteryLayout {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn carve(map: &mut GameMap, room: &Room) {
        for position in room.inner() {
            map.set_tile(position, Tile::floor());
        }
    }

    fn tunnel(map: &mut GameMap, from: Position, to: Position, horizontal_first: bool) {
        let corner = if horizontal_first {
            Position::new(to.x, from.y)
        } else {
            Position::new(from.x, to.y)
        };
        for (start, end) in [(from, corner), (corner, to)] {
            for x in start.x.min(end.x)..=start.x.max(end.x) {
                for y in start.y.min(end.y)..=start.y.max(end.y) {
                    map.set_tile(Position::new(x, y), Tile::floor());
                }
            }
        }
    }

    fn populate(
        &self,
        map: &mut GameMap,
        room: &Room,
        floor: u32,
        reserved: Position,
        rng: &mut RngStream,
        ids: &mut IdAllocator,
    ) {
        let rules = &self.catalog.spawns;
        let monsters = rng.range(0, rules.max_monsters(floor));
        let items = rng.range(0, rules.max_items(floor));

        let mut picks = Vec::new();
        for _ in 0..monsters {
            picks.extend(rules.pick_monster(floor, rng));
        }
        for _ in 0..items {
            picks.extend(rules.pick_item(floor, rng));
        }

        for name in picks {
            let position = room.random_inner(rng);
            if position == reserved || map.entity_at(position).is_some() {
                continue;
            }
            if let Some(template) = self.catalog.template(name) {
                map.add(template.spawn(ids.allocate(), position));
            }
        }
    }
}

impl LayoutGenerator for MonasteryLayout {
    fn generate(
        &self,
        params: &GenerationParams,
        ids: &mut IdAllocator,
    ) -> Result<GeneratedFloor, GenerationError> {
        // Narrower rooms have no interior to stand on.
        let min_size = params.room_min_size.max(3);
        if params.map_width < min_size + 2 || params.map_height < min_size + 2 {
            return Err(GenerationError::MapTooSmall {
                width: params.map_width,
                height: params.map_height,
            });
        }

        let mut rng = PcgRng::stream(params.seed);
        let mut map = GameMap::new(params.map_width, params.map_height);
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..params.max_rooms {
            let width = rng.range(min_size, params.room_max_size.max(min_size)) as i32;
            let height = rng.range(min_size, params.room_max_size.max(min_size)) as i32;
            let max_x = params.map_width as i32 - width - 1;
            let max_y = params.map_height as i32 - height - 1;
            if max_x < 0 || max_y < 0 {
                continue;
            }

            let room = Room::new(
                rng.range_i32(0, max_x),
                rng.range_i32(0, max_y),
                width,
                height,
            );
            if rooms.iter().any(|other| room.intersects(other)) {
                continue;
            }

            Self::carve(&mut map, &room);
            if let Some(previous) = rooms.last() {
                let horizontal_first = rng.chance(50);
                Self::tunnel(&mut map, previous.center(), room.center(), horizontal_first);
            }
            rooms.push(room);
        }

        let (Some(first), Some(last)) = (rooms.first().copied(), rooms.last().copied()) else {
            return Err(GenerationError::NoStartPosition);
        };
        let player_start = first.center();

        for room in &rooms {
            self.populate(&mut map, room, params.floor, player_start, &mut rng, ids);
        }

        let mut downstairs = last.center();
        if downstairs == player_start {
            downstairs = Position::new(last.x2 - 1, last.y2 - 1);
        }
        map.set_downstairs(downstairs);

        map.add(self.catalog.stairs_up.spawn(ids.allocate(), player_start));

        tracing::debug!(
            floor = params.floor,
            rooms = rooms.len(),
            entities = map.entities().count(),
            "generated floor"
        );

        Ok(GeneratedFloor { map, player_start })
    }
}
