//! Fixed color palette for log messages and entity appearance.

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const LIGHT_ORANGE: Rgb = Rgb(255, 165, 80);
pub const CORNFLOWER: Rgb = Rgb(100, 149, 237);

pub const PLAYER_ATTACK: Rgb = Rgb(224, 224, 224);
pub const ENEMY_ATTACK: Rgb = Rgb(255, 192, 192);
pub const PLAYER_DIE: Rgb = Rgb(255, 48, 48);
pub const ENEMY_DIE: Rgb = Rgb(255, 160, 48);

pub const WELCOME_TEXT: Rgb = Rgb(32, 160, 255);
pub const HP_RECOVERED: Rgb = Rgb(0, 255, 0);
pub const STATUS_APPLIED: Rgb = Rgb(63, 255, 63);
pub const NEEDS_TARGET: Rgb = Rgb(63, 255, 255);
pub const IMPOSSIBLE: Rgb = Rgb(128, 128, 128);
pub const INVALID: Rgb = Rgb(255, 255, 0);
pub const DESCEND: Rgb = Rgb(159, 63, 255);

pub const FLOOR_FG: Rgb = Rgb(30, 30, 50);
pub const FLOOR_BG: Rgb = Rgb(20, 20, 20);
pub const WALL_FG: Rgb = Rgb(40, 40, 60);
pub const WALL_BG: Rgb = Rgb(80, 80, 80);
pub const TORCH_BASE: Rgb = Rgb(150, 130, 0);
pub const DEAD_BLOOD_FG: Rgb = Rgb(190, 0, 0);
