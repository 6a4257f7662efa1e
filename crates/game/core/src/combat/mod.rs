//! Damage, healing and the death transition.
//!
//! Every HP change in the rules goes through [`apply_damage`] or
//! [`apply_healing`]. The death transition lives behind `apply_damage`, so it
//! fires exactly once per actor no matter which action dealt the final blow.

mod damage;
mod death;

pub use damage::{DamageReport, apply_damage, apply_healing, melee_damage};
pub use death::{award_xp, corpse_name};
