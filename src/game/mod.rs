//! Game Module
//!
//! First-person traversal of generated mazes. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `map`: Bounds-total wall queries over a finished grid
//! - `player`: Viewpoint with collision-checked movement
//! - `raycast`: Camera-plane DDA, one hit record per screen column

pub mod map;
pub mod player;
pub mod raycast;

// Re-export key types
pub use map::WorldMap;
pub use player::{Player, PlayerConfig};
pub use raycast::{RayHit, Raycaster, DEFAULT_MAX_DISTANCE};
