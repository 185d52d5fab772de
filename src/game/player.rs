//! Player
//!
//! First-person viewpoint: a position, a heading, and fixed-step
//! movement that a world map may veto.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::map::WorldMap;

/// Movement tuning for a [`Player`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal field of view in degrees.
    pub fov_degrees: f32,
    /// World units covered by one forward or backward step.
    pub move_speed: f32,
    /// Scales the fixed 0.1 radian turn increment.
    pub rotate_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 120.0, // wide lens
            move_speed: 0.2,    // units per step
            rotate_speed: 2.0,  // 0.2 radians per turn
        }
    }
}

/// A viewpoint inside (or outside) a [`WorldMap`].
///
/// With a map attached, a step or teleport only commits when the
/// candidate cell is open; blocked moves leave the player exactly where
/// it was. Without a map every move commits, which the generators' own
/// tests lean on. The heading accumulates without wrapping.
#[derive(Clone, Debug)]
pub struct Player<'a> {
    position: Vec2,
    angle: f32,
    config: PlayerConfig,
    map: Option<&'a WorldMap>,
}

impl<'a> Player<'a> {
    /// A free-floating player with no collision map.
    pub fn new(x: f32, y: f32, angle: f32, config: PlayerConfig) -> Self {
        Self {
            position: Vec2::new(x, y),
            angle,
            config,
            map: None,
        }
    }

    /// A player whose moves are checked against `map`.
    pub fn with_map(map: &'a WorldMap, x: f32, y: f32, angle: f32, config: PlayerConfig) -> Self {
        Self {
            position: Vec2::new(x, y),
            angle,
            config,
            map: Some(map),
        }
    }

    /// Step one `move_speed` along the current heading.
    pub fn move_forward(&mut self) {
        let step = Vec2::from_angle(self.angle).scale(self.config.move_speed);
        self.try_move(self.position + step);
    }

    /// Step one `move_speed` against the current heading.
    pub fn move_backwards(&mut self) {
        let step = Vec2::from_angle(self.angle).scale(self.config.move_speed);
        self.try_move(self.position - step);
    }

    /// Rotate the heading counter-clockwise by `0.1 * rotate_speed`.
    pub fn turn_left(&mut self) {
        self.angle -= 0.1 * self.config.rotate_speed;
    }

    /// Rotate the heading clockwise by `0.1 * rotate_speed`.
    pub fn turn_right(&mut self) {
        self.angle += 0.1 * self.config.rotate_speed;
    }

    /// Teleport to (x, y), subject to the same collision veto as a step.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.try_move(Vec2::new(x, y));
    }

    /// Point the heading at `angle` radians. Never vetoed.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current x coordinate.
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Current y coordinate.
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Current heading in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Field of view in degrees, for the caster.
    pub fn fov_degrees(&self) -> f32 {
        self.config.fov_degrees
    }

    /// Tuning this player was built with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    // The candidate lands in the cell found by truncating toward zero,
    // matching the integer casts the map queries use.
    fn try_move(&mut self, candidate: Vec2) {
        if let Some(map) = self.map {
            if map.is_wall(candidate.x as i32, candidate.y as i32) {
                return;
            }
        }
        self.position = candidate;
    }
}

// =============================================================================
// TESTS
// =============================================================================
