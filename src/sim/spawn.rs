//! Obstacle spawning and movement assignment
//!
//! Spawner: every spawn cadence, draw four independent values (travel axis,
//! lateral offset, edge side, size class) and place a new obstacle a fixed
//! margin beyond the viewport edge. Mover: hand it a single translation to
//! the defender anchor, duration from the size table. There is no cap on
//! live obstacles and no re-targeting after assignment.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle, SizeClass, SpawnEdge, Travel};
use crate::consts::{DEFENDER_ANCHOR, SPAWN_EDGE_MARGIN};
use crate::settings::Settings;

/// One spawn decision: everything random about a new obstacle
#[derive(Debug, Clone, Copy)]
pub struct SpawnDraw {
    pub edge: SpawnEdge,
    /// Percent of the perpendicular viewport dimension, 0-99
    pub lateral_pct: u32,
    pub size: SizeClass,
}

/// Draw a spawn decision: axis 50/50, lateral 0-99, side 50/50, size 1/3 each
pub fn draw_spawn(rng: &mut Pcg32) -> SpawnDraw {
    let horizontal_travel = rng.random_bool(0.5);
    let lateral_pct = rng.random_range(0..100u32);
    let far_side = rng.random_bool(0.5);
    let size = SizeClass::ALL[rng.random_range(0..SizeClass::ALL.len())];

    let edge = match (horizontal_travel, far_side) {
        (true, false) => SpawnEdge::Left,
        (true, true) => SpawnEdge::Right,
        (false, false) => SpawnEdge::Top,
        (false, true) => SpawnEdge::Bottom,
    };

    SpawnDraw {
        edge,
        lateral_pct,
        size,
    }
}

/// Spawn position for a draw: on the chosen edge, offset laterally by the
/// drawn percentage, pushed `SPAWN_EDGE_MARGIN` px outside the viewport
pub fn edge_position(draw: &SpawnDraw, settings: &Settings) -> Vec2 {
    let lateral = draw.lateral_pct as f32 / 100.0;
    match draw.edge {
        SpawnEdge::Left => Vec2::new(-SPAWN_EDGE_MARGIN, lateral * settings.viewport_h),
        SpawnEdge::Right => Vec2::new(
            settings.viewport_w + SPAWN_EDGE_MARGIN,
            lateral * settings.viewport_h,
        ),
        SpawnEdge::Top => Vec2::new(lateral * settings.viewport_w, -SPAWN_EDGE_MARGIN),
        SpawnEdge::Bottom => Vec2::new(
            lateral * settings.viewport_w,
            settings.viewport_h + SPAWN_EDGE_MARGIN,
        ),
    }
}

/// Mover: one fire-and-forget translation from the spawn position to the
/// defender anchor, duration from the size-to-duration table
pub fn assign_travel(from: Vec2, size: SizeClass) -> Travel {
    Travel::new(from, DEFENDER_ANCHOR - from, size.travel_secs())
}

/// Create a new obstacle and hand it to the mover. Returns its id.
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let draw = draw_spawn(&mut state.rng);
    let from = edge_position(&draw, &state.settings);
    let id = state.next_obstacle_id();

    log::debug!(
        "spawn obstacle #{id} {:?} from {:?} at ({:.0}, {:.0})",
        draw.size,
        draw.edge,
        from.x,
        from.y
    );

    state.obstacles.push(Obstacle {
        id,
        size: draw.size,
        edge: draw.edge,
        travel: assign_travel(from, draw.size),
    });
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn outside_viewport(pos: Vec2, s: &Settings) -> bool {
        pos.x <= -SPAWN_EDGE_MARGIN
            || pos.x >= s.viewport_w + SPAWN_EDGE_MARGIN
            || pos.y <= -SPAWN_EDGE_MARGIN
            || pos.y >= s.viewport_h + SPAWN_EDGE_MARGIN
    }

    #[test]
    fn test_spawn_positions_offscreen_by_margin() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let draw = draw_spawn(&mut rng);
            let pos = edge_position(&draw, &settings);
            assert!(
                outside_viewport(pos, &settings),
                "spawn at {pos:?} is not offscreen"
            );
        }
    }

    #[test]
    fn test_lateral_offset_stays_on_perpendicular_axis() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let draw = draw_spawn(&mut rng);
            let pos = edge_position(&draw, &settings);
            match draw.edge {
                SpawnEdge::Left | SpawnEdge::Right => {
                    assert!(pos.y >= 0.0 && pos.y < settings.viewport_h);
                }
                SpawnEdge::Top | SpawnEdge::Bottom => {
                    assert!(pos.x >= 0.0 && pos.x < settings.viewport_w);
                }
            }
        }
    }

    #[test]
    fn test_size_classes_roughly_uniform() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut counts = [0u32; 3];
        let n = 9000;
        for _ in 0..n {
            match draw_spawn(&mut rng).size {
                SizeClass::Small => counts[0] += 1,
                SizeClass::Medium => counts[1] += 1,
                SizeClass::Big => counts[2] += 1,
            }
        }
        for &c in &counts {
            // Each class should land near n/3; allow 10% relative slack
            let expected = n / 3;
            assert!(
                (c as i64 - expected as i64).unsigned_abs() < (expected / 10) as u64,
                "size distribution skewed: {counts:?}"
            );
        }
    }

    #[test]
    fn test_mover_targets_anchor_with_table_duration() {
        let from = Vec2::new(-SPAWN_EDGE_MARGIN, 100.0);
        let mut travel = assign_travel(from, SizeClass::Medium);
        assert_eq!(travel.duration_secs, 30.0);

        travel.advance(travel.duration_secs);
        assert_eq!(travel.position(), DEFENDER_ANCHOR);
    }

    #[test]
    fn test_spawn_obstacle_appends_with_monotonic_ids() {
        let mut state = GameState::new(5, Settings::default());
        let a = spawn_obstacle(&mut state);
        let b = spawn_obstacle(&mut state);
        assert!(b > a);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].id, a);
        assert_eq!(state.obstacles[1].id, b);
    }
}
