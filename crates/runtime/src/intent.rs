//! Decoded player input and the input-interpretation modes.

use game_core::{Direction, EntityId, Position, StatChoice, TargetShape};

/// What the UI boundary hands the session after decoding a key or click.
///
/// Inventory intents address items by pack slot (0-based), the way a menu
/// letter would.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    Move(Direction),
    Wait,
    Pickup,
    Drop(usize),
    Equip(usize),
    Use(usize),
    Descend,
    /// Nudge the tile-selection cursor.
    MoveCursor(Direction),
    /// Jump the cursor to a tile and confirm it, as a mouse click would.
    SelectTile(Position),
    ConfirmTile,
    Cancel,
    LevelUp(StatChoice),
    Quit { save: bool },
}

/// Which flow the next intent is routed to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Normal,
    /// A consumable is waiting for its target tile.
    AwaitingTile {
        item: EntityId,
        cursor: Position,
        shape: TargetShape,
    },
    /// The player has XP for a level and must pick a stat.
    AwaitingLevelUp,
    /// The player is dead; only quitting is accepted.
    GameOver,
}

impl Mode {
    pub fn cursor(&self) -> Option<Position> {
        match self {
            Mode::AwaitingTile { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }
}
