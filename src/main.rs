//! Mazecast Demo
//!
//! Generates mazes from a seed, walks a scripted route through one
//! while raycasting every frame, then regenerates and replays the
//! whole run to prove the output is reproducible.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mazecast::core::hash::{Digest32, DomainHasher};
use mazecast::game::{Player, PlayerConfig, Raycaster, WorldMap};
use mazecast::maze::{DepthFirstGenerator, RecursiveDivisionGenerator};
use mazecast::{derive_seed, VERSION};

/// Demo maze side length in cells.
const MAZE_SIZE: usize = 21;
/// Frames in the scripted walk.
const WALK_FRAMES: u32 = 240;
/// Rays cast per frame.
const SCREEN_COLUMNS: usize = 320;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Mazecast v{}", VERSION);

    let seed = seed_from_args()?;
    info!("Seed: {}", seed);

    demo_walk(seed)
}

/// Seed from the first CLI argument: a number is used as-is, any other
/// text is hashed down to one. With no argument the clock decides,
/// which is the only nondeterminism in the binary.
fn seed_from_args() -> anyhow::Result<u64> {
    match std::env::args().nth(1) {
        Some(arg) => Ok(arg.parse().unwrap_or_else(|_| derive_seed(&arg))),
        None => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock is before the Unix epoch")?;
            Ok(now.as_nanos() as u64)
        }
    }
}

/// Generate both maze styles, walk the carved one, replay, compare.
fn demo_walk(seed: u64) -> anyhow::Result<()> {
    info!("=== Generating Mazes ===");

    let mut carver = DepthFirstGenerator::new(seed);
    let carved = carver.generate(MAZE_SIZE, MAZE_SIZE)?;
    info!("Depth-first {}x{}:\n{}", carved.width(), carved.height(), carved);
    info!("Depth-first digest: {}", hex::encode(carved.digest()));

    let mut divider = RecursiveDivisionGenerator::new(seed);
    let divided = divider.generate(MAZE_SIZE, MAZE_SIZE)?;
    info!(
        "Recursive division {}x{}:\n{}",
        divided.width(),
        divided.height(),
        divided
    );
    info!("Recursive division digest: {}", hex::encode(divided.digest()));

    info!("=== Walking the Depth-First Maze ===");
    let map = WorldMap::new(carved);
    let (pose, walk_digest) = run_walk(&map);
    info!(
        "Final pose: ({:.3}, {:.3}) facing {:.3} rad",
        pose.0, pose.1, pose.2
    );
    info!("Walk digest: {}", hex::encode(walk_digest));

    // Regenerate from the same seed and replay the same script; any
    // divergence means a draw or a float leaked somewhere.
    info!("=== Verifying Determinism ===");
    let mut recarver = DepthFirstGenerator::new(seed);
    let replay_map = WorldMap::new(recarver.generate(MAZE_SIZE, MAZE_SIZE)?);
    let (replay_pose, replay_digest) = run_walk(&replay_map);
    info!("Replay digest: {}", hex::encode(replay_digest));

    let same_pose = pose.0.to_bits() == replay_pose.0.to_bits()
        && pose.1.to_bits() == replay_pose.1.to_bits()
        && pose.2.to_bits() == replay_pose.2.to_bits();
    if walk_digest == replay_digest && same_pose {
        info!("DETERMINISM VERIFIED: Digests match!");
    } else {
        info!("DETERMINISM FAILURE: Digests differ!");
    }

    Ok(())
}

/// Scripted route: five steps forward, two turns right, one turn left,
/// every eight frames. Returns the final (x, y, angle) pose and a
/// digest folded over the whole run.
fn run_walk(map: &WorldMap) -> ((f32, f32, f32), Digest32) {
    let mut player = Player::with_map(map, 1.5, 1.5, 0.0, PlayerConfig::default());
    let caster = Raycaster::default();

    let mut hasher = DomainHasher::new(b"MAZECAST_WALK_V1");
    let mut columns_cast = 0usize;

    for frame in 0..WALK_FRAMES {
        match frame % 8 {
            0..=4 => player.move_forward(),
            5 | 6 => player.turn_right(),
            _ => player.turn_left(),
        }

        let hits = caster.cast_all_columns(&player, map, SCREEN_COLUMNS);
        columns_cast += hits.len();

        let mut nearest = f32::INFINITY;
        let mut capped = 0usize;
        for hit in &hits {
            nearest = nearest.min(hit.distance);
            if hit.distance >= caster.max_distance() {
                capped += 1;
            }
        }

        hasher.update_u32(frame);
        hasher.update_bytes(&player.x().to_le_bytes());
        hasher.update_bytes(&player.y().to_le_bytes());
        hasher.update_bytes(&player.angle().to_le_bytes());
        hasher.update_bytes(&nearest.to_le_bytes());

        // Report every second of simulated time
        if (frame + 1) % 60 == 0 {
            info!(
                "Frame {}: at ({:.2}, {:.2}) facing {:.2} rad, nearest wall {:.2}, {}/{} columns capped",
                frame + 1,
                player.x(),
                player.y(),
                player.angle(),
                nearest,
                capped,
                SCREEN_COLUMNS,
            );
        }
    }

    info!("Cast {} columns over {} frames", columns_cast, WALK_FRAMES);
    ((player.x(), player.y(), player.angle()), hasher.finalize())
}
