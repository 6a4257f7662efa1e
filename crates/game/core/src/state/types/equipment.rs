use super::{CombatBonus, EntityId, Inventory};

/// Which body slot an equippable occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// Passive bonuses granted by an item while worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

impl Equippable {
    pub const fn weapon(power_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Weapon,
            power_bonus,
            defense_bonus: 0,
        }
    }

    pub const fn armor(defense_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Armor,
            power_bonus: 0,
            defense_bonus,
        }
    }
}

/// Worn items, stored as handles into the owner's [`Inventory`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Option<EntityId>,
    armor: Option<EntityId>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_slot(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.weapon == Some(item) || self.armor == Some(item)
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: EntityId) -> Option<EntityId> {
        self.slot_mut(slot).replace(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EntityId> {
        self.slot_mut(slot).take()
    }

    /// Clears whichever slot holds `item`. Returns true if it was worn.
    pub fn unequip_item(&mut self, item: EntityId) -> bool {
        for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
            if self.in_slot(slot) == Some(item) {
                self.unequip(slot);
                return true;
            }
        }
        false
    }

    /// Sums the bonuses of every worn item found in `inventory`.
    pub fn bonus(&self, inventory: Option<&Inventory>) -> CombatBonus {
        let Some(inventory) = inventory else {
            return CombatBonus::default();
        };

        [self.weapon, self.armor]
            .into_iter()
            .flatten()
            .filter_map(|id| inventory.get(id)?.as_item()?.equippable)
            .fold(CombatBonus::default(), |acc, gear| CombatBonus {
                power: acc.power + gear.power_bonus,
                defense: acc.defense + gear.defense_bonus,
            })
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
        }
    }
}
