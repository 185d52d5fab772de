//! Raycast Engine
//!
//! Camera-plane DDA over a [`WorldMap`]: one ray per screen column,
//! each marched cell boundary to cell boundary until it strikes a
//! blocking cell, leaves the grid, or runs past the distance cutoff.
//!
//! Distances are measured from the ray origin to the boundary where
//! the ray entered its final cell. Hits are corrected for fisheye by
//! multiplying that raw distance with the cosine of the ray's angle
//! off the player's heading, so a flat wall renders flat; capped rays
//! skip the correction and carry the cutoff itself.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::core::vec2::Vec2;
use crate::game::map::WorldMap;
use crate::game::player::Player;

/// Traversal cutoff used by [`Raycaster::default`], in world units.
pub const DEFAULT_MAX_DISTANCE: f32 = 6.0;

/// One column's ray result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Fisheye-corrected distance to the struck cell; capped rays
    /// carry the uncorrected cutoff instead.
    pub distance: f32,
    /// X where the ray stopped, at the raw (uncorrected) distance.
    pub hit_x: f32,
    /// Y where the ray stopped, at the raw (uncorrected) distance.
    pub hit_y: f32,
    /// Code of the struck cell; the plain wall code for off-grid and
    /// capped rays.
    pub wall_type: u8,
    /// True when the final step crossed a vertical grid line.
    pub vertical_hit: bool,
    /// Absolute heading of this ray in radians.
    pub angle: f32,
}

/// Column-per-ray caster with a hard range limit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Raycaster {
    max_distance: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl Raycaster {
    /// A caster that gives up past `max_distance` world units.
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Current range limit.
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Replace the range limit.
    pub fn set_max_distance(&mut self, distance: f32) {
        self.max_distance = distance;
    }

    /// Cast one ray per screen column, left to right.
    ///
    /// Column `i` sits at camera-plane offset `t = 2i/count - 1`; its
    /// direction is the heading plus the plane axis scaled by
    /// `tan(fov/2) * t`, re-normalized. `hits[i]` belongs to screen
    /// column `i`, which is the whole interface to a renderer.
    pub fn cast_all_columns(
        &self,
        player: &Player<'_>,
        map: &WorldMap,
        count: usize,
    ) -> Vec<RayHit> {
        let heading = player.angle();
        let forward = Vec2::from_angle(heading);
        let half_fov = player.fov_degrees() * (PI / 180.0) / 2.0;
        let plane = forward.perpendicular().scale(half_fov.tan());

        let mut hits = Vec::with_capacity(count);
        for column in 0..count {
            let t = 2.0 * column as f32 / count as f32 - 1.0;
            let ray = (forward + plane.scale(t)).normalize();
            let angle = ray.y.atan2(ray.x);
            hits.push(self.cast_single_ray(player.position(), angle, heading, map));
        }
        hits
    }

    /// March a single ray from `origin` along `angle`.
    ///
    /// `heading` is the player's view direction; the angle between the
    /// two feeds the fisheye correction. Callers casting standalone
    /// rays pass the same value for both.
    pub fn cast_single_ray(
        &self,
        origin: Vec2,
        angle: f32,
        heading: f32,
        map: &WorldMap,
    ) -> RayHit {
        let direction = Vec2::from_angle(angle);

        let mut map_x = origin.x.floor() as i32;
        let mut map_y = origin.y.floor() as i32;

        // 1/0 is infinity here, which keeps an axis-aligned ray's dead
        // axis from ever winning a step.
        let delta_dist_x = (1.0 / direction.x).abs();
        let delta_dist_y = (1.0 / direction.y).abs();

        let (step_x, mut side_dist_x) = if direction.x < 0.0 {
            (-1, (origin.x - map_x as f32) * delta_dist_x)
        } else {
            (1, (map_x as f32 + 1.0 - origin.x) * delta_dist_x)
        };
        let (step_y, mut side_dist_y) = if direction.y < 0.0 {
            (-1, (origin.y - map_y as f32) * delta_dist_y)
        } else {
            (1, (map_y as f32 + 1.0 - origin.y) * delta_dist_y)
        };

        let mut vertical_hit = false;
        let mut traveled = 0.0;
        let capped = loop {
            // Advance into whichever cell boundary is nearer; the
            // distance of that boundary is the ray's length so far.
            if side_dist_x < side_dist_y {
                traveled = side_dist_x;
                side_dist_x += delta_dist_x;
                map_x += step_x;
                vertical_hit = true;
            } else {
                traveled = side_dist_y;
                side_dist_y += delta_dist_y;
                map_y += step_y;
                vertical_hit = false;
            }

            if traveled > self.max_distance {
                break true;
            }
            // Off-grid queries read as solid, so leaving the map ends
            // the march the same way a wall does.
            if map.is_wall(map_x, map_y) {
                break false;
            }
        };

        if capped {
            let end = origin + direction.scale(self.max_distance);
            return RayHit {
                distance: self.max_distance,
                hit_x: end.x,
                hit_y: end.y,
                wall_type: 1,
                vertical_hit,
                angle,
            };
        }

        let end = origin + direction.scale(traveled);
        let off_heading = normalize_angle_diff(angle - heading);
        RayHit {
            distance: traveled * off_heading.cos(),
            hit_x: end.x,
            hit_y: end.y,
            wall_type: map.wall_type(map_x, map_y),
            vertical_hit,
            angle,
        }
    }
}

/// Fold an angle difference into [-PI, PI].
fn normalize_angle_diff(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

// =============================================================================
// TESTS
// =============================================================================
