//! # Mazecast
//!
//! Seeded maze generation with a first-person raycast view. One u64
//! seed reproduces the same maze, the same walk, and the same rendered
//! columns, run after run.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         MAZECAST                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/              - Deterministic primitives               │
//! │  ├── rng.rs         - Seeded xoroshiro128+ draw stream       │
//! │  ├── vec2.rs        - 2D float vector                        │
//! │  └── hash.rs        - Domain-separated SHA-256 digests       │
//! │                                                              │
//! │  maze/              - Grid generation (deterministic)        │
//! │  ├── grid.rs        - Cell grid, wire codes, digests         │
//! │  ├── depth_first.rs - Backtracking corridor carver           │
//! │  └── division.rs    - Recursive chamber splitter             │
//! │                                                              │
//! │  game/              - Traversal over a finished grid         │
//! │  ├── map.rs         - Bounds-total wall queries              │
//! │  ├── player.rs      - Collision-checked viewpoint            │
//! │  └── raycast.rs     - Camera-plane DDA per screen column     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `maze/` modules are **100% deterministic**:
//! - All randomness comes from one seeded xoroshiro128+ stream
//! - Draw order is part of each generator's layout contract
//! - No system time dependencies
//! - Grid digests are stable across platforms
//!
//! Given one seed, generation produces **identical grids** anywhere.
//! The float-based `game/` layer sits outside that guarantee but is a
//! pure function of its inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod maze;

// Re-export commonly used types
pub use crate::core::rng::{derive_seed, RandomStream};
pub use crate::core::vec2::Vec2;
pub use crate::game::{Player, PlayerConfig, RayHit, Raycaster, WorldMap};
pub use crate::maze::{Cell, DepthFirstGenerator, MazeGrid, RecursiveDivisionGenerator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
