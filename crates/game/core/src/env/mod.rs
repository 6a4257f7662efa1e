//! Collaborators the rules consult but do not own.
//!
//! [`RngOracle`] supplies deterministic randomness and [`LayoutGenerator`]
//! builds new floors on descent.
mod layout;
mod rng;

pub use layout::{GeneratedFloor, GenerationError, GenerationParams, LayoutGenerator};
pub use rng::{PcgRng, RngOracle, RngStream, compute_seed};
