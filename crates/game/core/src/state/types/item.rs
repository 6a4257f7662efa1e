//! Item behaviours: consumable effects and equippable bonuses.
//!
//! Activation logic lives in [`crate::action::consumable`]; this module only
//! holds the data each variant carries.

use super::{Equippable, Position};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemComponents {
    pub consumable: Option<ConsumableEffect>,
    pub equippable: Option<Equippable>,
}

impl ItemComponents {
    pub fn consumable(effect: ConsumableEffect) -> Self {
        Self {
            consumable: Some(effect),
            equippable: None,
        }
    }

    pub fn equippable(equippable: Equippable) -> Self {
        Self {
            consumable: None,
            equippable: Some(equippable),
        }
    }
}

/// Closed set of consumable effects.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restores up to `amount` HP to the user.
    Heal { amount: u32 },
    /// Confuses one visible actor at the selected tile for `turns` turns.
    ConfusionRanged { turns: u32 },
    /// Damages every living actor within `radius` of the selected tile.
    AreaRadius { damage: u32, radius: f64 },
    /// Damages actors on a cross footprint; heals the player caught in it.
    CrossShaped { damage: u32, arms: CrossArms },
    /// Damages the closest visible actor within `max_range` of the user.
    NearestBeam { damage: u32, max_range: f64 },
}

impl ConsumableEffect {
    /// How the effect acquires its target.
    pub fn targeting(&self) -> TargetingMode {
        match self {
            Self::Heal { .. } | Self::NearestBeam { .. } => TargetingMode::Immediate,
            Self::ConfusionRanged { .. } => TargetingMode::SelectTile(TargetShape::Single),
            Self::AreaRadius { radius, .. } => {
                TargetingMode::SelectTile(TargetShape::Radius(*radius))
            }
            Self::CrossShaped { arms, .. } => TargetingMode::SelectTile(TargetShape::Cross(*arms)),
        }
    }
}

/// Target acquisition policy for a consumable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetingMode {
    /// Resolved on use (self or nearest enemy).
    Immediate,
    /// Suspends normal input until a tile is chosen.
    SelectTile(TargetShape),
}

impl TargetingMode {
    pub fn requires_tile(&self) -> bool {
        matches!(self, TargetingMode::SelectTile(_))
    }
}

/// Footprint preview for the tile-selection cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetShape {
    Single,
    Radius(f64),
    Cross(CrossArms),
}

/// Arm lengths of an axis-aligned cross, measured from its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossArms {
    pub up: u32,
    pub down: u32,
    pub left: u32,
    pub right: u32,
}

impl CrossArms {
    pub const fn symmetric(length: u32) -> Self {
        Self {
            up: length,
            down: length,
            left: length,
            right: length,
        }
    }

    /// True if `position` lies on the cross centered at `center`.
    pub fn contains(&self, center: Position, position: Position) -> bool {
        let dx = position.x - center.x;
        let dy = position.y - center.y;
        let on_vertical = dx == 0 && -(self.up as i32) <= dy && dy <= self.down as i32;
        let on_horizontal = dy == 0 && -(self.left as i32) <= dx && dx <= self.right as i32;
        on_vertical || on_horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_respects_asymmetric_arms() {
        let arms = CrossArms {
            up: 2,
            down: 3,
            left: 2,
            right: 2,
        };
        let center = Position::new(10, 10);

        assert!(arms.contains(center, center));
        assert!(arms.contains(center, Position::new(10, 13)));
        assert!(!arms.contains(center, Position::new(10, 7)));
        assert!(arms.contains(center, Position::new(8, 10)));
        assert!(!arms.contains(center, Position::new(13, 10)));
        assert!(!arms.contains(center, Position::new(11, 11)));
    }

    #[test]
    fn targeting_modes() {
        assert_eq!(
            ConsumableEffect::Heal { amount: 4 }.targeting(),
            TargetingMode::Immediate
        );
        assert!(
            ConsumableEffect::ConfusionRanged { turns: 10 }
                .targeting()
                .requires_tile()
        );
    }
}
