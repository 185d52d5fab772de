//! Core deterministic primitives.
//!
//! Everything in this module is designed for perfect cross-platform
//! determinism: the same seed must replay to the same maze, the same
//! digests, and the same cast distances everywhere.

pub mod hash;
pub mod rng;
pub mod vec2;

// Re-export core types
pub use hash::{hash_with_domain, Digest32, DomainHasher};
pub use rng::{derive_seed, RandomStream, RngError};
pub use vec2::Vec2;
