/// Immutable tuning parameters handed to the engine at construction.
///
/// Nothing in the rules reads process-wide globals; every knob that the
/// original constants covered lives here instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Full map width in tiles.
    pub map_width: u32,
    /// Full map height in tiles (HUD rows already excluded).
    pub map_height: u32,
    /// Rows reserved for the HUD; used when a floor shrinks its map.
    pub hud_rows: u32,

    /// Number of slots in the player's pack.
    pub inventory_capacity: usize,
    /// Player light radius on arrival. Deeper floors may roll a new one.
    pub player_light_radius: u32,
    /// Light radius left on a corpse after the death transition.
    pub corpse_light_radius: u32,

    /// XP required for the first level-up.
    pub level_up_base: u32,
    /// Extra XP required per level already gained.
    pub level_up_factor: u32,

    pub floor: FloorScaling,
}

/// Knobs for per-floor parameter scaling on stair descent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FloorScaling {
    /// `max_rooms = ceil(w * h / rand[room_divisor_min, room_divisor_max])`.
    pub room_divisor_min: u32,
    pub room_divisor_max: u32,
    pub room_min_size_min: u32,
    pub room_min_size_max: u32,
    /// `room_max_size = room_min_size + rand[spread_min, spread_max]`.
    pub room_size_spread_min: u32,
    pub room_size_spread_max: u32,
    /// Percent chance (from floor 2 on) of a shrunken map.
    pub shrink_chance: u32,
    /// Percent chance (from floor 2 on) of revealing the whole map.
    pub reveal_chance: u32,
    /// Percent chance (from floor 2 on) of an expanded light radius.
    pub wide_light_chance: u32,
    pub light_radius_min: u32,
    pub light_radius_max: u32,
    pub wide_light_radius_min: u32,
    pub wide_light_radius_max: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Upper bound of tiles examined by a single AI path search.
    pub const MAX_PATH_NODES: usize = 4096;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_WIDTH: u32 = 79;
    pub const DEFAULT_MAP_HEIGHT: u32 = 43;
    pub const DEFAULT_HUD_ROWS: u32 = 5;
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;
    pub const DEFAULT_PLAYER_LIGHT_RADIUS: u32 = 4;
    pub const DEFAULT_CORPSE_LIGHT_RADIUS: u32 = 1;
    pub const DEFAULT_LEVEL_UP_BASE: u32 = 200;
    pub const DEFAULT_LEVEL_UP_FACTOR: u32 = 150;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            hud_rows: Self::DEFAULT_HUD_ROWS,
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            player_light_radius: Self::DEFAULT_PLAYER_LIGHT_RADIUS,
            corpse_light_radius: Self::DEFAULT_CORPSE_LIGHT_RADIUS,
            level_up_base: Self::DEFAULT_LEVEL_UP_BASE,
            level_up_factor: Self::DEFAULT_LEVEL_UP_FACTOR,
            floor: FloorScaling::default(),
        }
    }

    pub fn with_map_size(mut self, width: u32, height: u32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for FloorScaling {
    fn default() -> Self {
        Self {
            room_divisor_min: 5,
            room_divisor_max: 80,
            room_min_size_min: 2,
            room_min_size_max: 6,
            room_size_spread_min: 2,
            room_size_spread_max: 5,
            shrink_chance: 25,
            reveal_chance: 10,
            wide_light_chance: 5,
            light_radius_min: 2,
            light_radius_max: 5,
            wide_light_radius_min: 10,
            wide_light_radius_max: 20,
        }
    }
}
