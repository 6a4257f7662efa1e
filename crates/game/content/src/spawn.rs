//! Floor-scaled spawn tables.
//!
//! Every table is a list of `(from_floor, value)` steps. The value in effect
//! on a floor is the one from the highest step not above it.

use game_core::RngStream;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    /// Template name in the catalog.
    pub template: String,
    pub weights: Vec<(u32, u32)>,
}

impl SpawnEntry {
    pub fn new(template: impl Into<String>, weights: &[(u32, u32)]) -> Self {
        Self {
            template: template.into(),
            weights: weights.to_vec(),
        }
    }

    pub fn weight_at(&self, floor: u32) -> u32 {
        step_value(&self.weights, floor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRules {
    pub max_monsters_per_room: Vec<(u32, u32)>,
    pub max_items_per_room: Vec<(u32, u32)>,
    pub monsters: Vec<SpawnEntry>,
    pub items: Vec<SpawnEntry>,
}

impl SpawnRules {
    pub fn builtin() -> Self {
        Self {
            max_monsters_per_room: vec![(1, 2), (4, 3), (6, 5)],
            max_items_per_room: vec![(1, 1), (4, 2)],
            monsters: vec![
                SpawnEntry::new("Orc", &[(1, 80)]),
                SpawnEntry::new("Troll", &[(3, 15), (5, 30), (7, 60)]),
            ],
            items: vec![
                SpawnEntry::new("Potion - Healing", &[(1, 35)]),
                SpawnEntry::new("Scroll - Babel", &[(2, 10)]),
                SpawnEntry::new("Scroll - Sunbeam", &[(2, 25)]),
                SpawnEntry::new("Scroll - Holy Blast", &[(3, 15)]),
                SpawnEntry::new("Scroll - Reckoning", &[(4, 25)]),
                SpawnEntry::new("Cudgel", &[(4, 5), (6, 15)]),
                SpawnEntry::new("Chain Mail", &[(6, 15)]),
            ],
        }
    }

    pub fn max_monsters(&self, floor: u32) -> u32 {
        step_value(&self.max_monsters_per_room, floor)
    }

    pub fn max_items(&self, floor: u32) -> u32 {
        step_value(&self.max_items_per_room, floor)
    }

    pub fn pick_monster(&self, floor: u32, rng: &mut RngStream) -> Option<&str> {
        weighted_pick(&self.monsters, floor, rng)
    }

    pub fn pick_item(&self, floor: u32, rng: &mut RngStream) -> Option<&str> {
        weighted_pick(&self.items, floor, rng)
    }
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self::builtin()
    }
}

fn step_value(steps: &[(u32, u32)], floor: u32) -> u32 {
    steps
        .iter()
        .filter(|(from, _)| *from <= floor)
        .max_by_key(|(from, _)| *from)
        .map_or(0, |(_, value)| *value)
}

/// `None` when nothing has weight on this floor.
fn weighted_pick<'a>(
    entries: &'a [SpawnEntry],
    floor: u32,
    rng: &mut RngStream,
) -> Option<&'a str> {
    let total: u32 = entries.iter().map(|entry| entry.weight_at(floor)).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.range(0, total - 1);
    for entry in entries {
        let weight = entry.weight_at(floor);
        if roll < weight {
            return Some(&entry.template);
        }
        roll -= weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PcgRng;

    #[test]
    fn later_steps_override_earlier_ones() {
        let troll = SpawnEntry::new("Troll", &[(3, 15), (5, 30), (7, 60)]);
        assert_eq!(troll.weight_at(1), 0);
        assert_eq!(troll.weight_at(3), 15);
        assert_eq!(troll.weight_at(6), 30);
        assert_eq!(troll.weight_at(40), 60);
    }

    #[test]
    fn room_limits_scale_with_depth() {
        let rules = SpawnRules::builtin();
        assert_eq!(rules.max_monsters(1), 2);
        assert_eq!(rules.max_monsters(5), 3);
        assert_eq!(rules.max_monsters(9), 5);
        assert_eq!(rules.max_items(3), 1);
        assert_eq!(rules.max_items(4), 2);
    }

    #[test]
    fn first_floor_only_spawns_orcs_and_potions() {
        let rules = SpawnRules::builtin();
        let mut rng = PcgRng::stream(99);
        for _ in 0..50 {
            assert_eq!(rules.pick_monster(1, &mut rng), Some("Orc"));
            assert_eq!(rules.pick_item(1, &mut rng), Some("Potion - Healing"));
        }
    }

    #[test]
    fn empty_table_picks_nothing() {
        let rules = SpawnRules {
            monsters: vec![SpawnEntry::new("Troll", &[(3, 15)])],
            ..SpawnRules::builtin()
        };
        assert_eq!(rules.pick_monster(1, &mut PcgRng::stream(1)), None);
    }
}
