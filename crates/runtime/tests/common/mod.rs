#![allow(dead_code)]

use game_content::Catalog;
use game_core::{
    GameConfig, GameMap, GeneratedFloor, GenerationError, GenerationParams, IdAllocator,
    LayoutGenerator, Position, Tile,
};
use runtime::Session;

pub const START: Position = Position::new(2, 2);
pub const STAIRS: Position = Position::new(3, 2);

/// One open 10x10 room with hand-placed templates. Every floor looks the same.
pub struct FixedRoom {
    catalog: Catalog,
    placements: Vec<(&'static str, Position)>,
}

impl FixedRoom {
    pub fn empty() -> Self {
        Self {
            catalog: Catalog::builtin(),
            placements: Vec::new(),
        }
    }

    pub fn with(mut self, template: &'static str, position: Position) -> Self {
        self.placements.push((template, position));
        self
    }
}

impl LayoutGenerator for FixedRoom {
    fn generate(
        &self,
        _params: &GenerationParams,
        ids: &mut IdAllocator,
    ) -> Result<GeneratedFloor, GenerationError> {
        let mut map = GameMap::new(12, 12);
        for y in 1..11 {
            for x in 1..11 {
                map.set_tile(Position::new(x, y), Tile::floor());
            }
        }
        map.set_downstairs(STAIRS);

        for (name, position) in &self.placements {
            let template = self
                .catalog
                .template(name)
                .ok_or_else(|| GenerationError::Failed(format!("unknown template {name}")))?;
            map.add(template.spawn(ids.allocate(), *position));
        }

        Ok(GeneratedFloor {
            map,
            player_start: START,
        })
    }
}

/// New game on a [`FixedRoom`]; everything placed near `START` is in view.
pub fn session(room: FixedRoom) -> Session {
    Session::new_game(
        7,
        GameConfig::default(),
        &Catalog::builtin(),
        Box::new(room),
    )
    .expect("fixed room always generates")
}

pub fn player_position(session: &Session) -> Position {
    session.state().player().unwrap().position
}

pub fn texts(report: &runtime::TurnReport) -> Vec<&str> {
    report
        .new_messages
        .iter()
        .map(|message| message.text.as_str())
        .collect()
}
