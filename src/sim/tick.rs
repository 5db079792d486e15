//! Fixed timestep simulation tick
//!
//! The host loop calls [`tick`] with a fixed dt; the spawner and collision
//! detector fire from millisecond accumulators in here, at the cadences the
//! settings configure. Both cadences stop for good at game over - that is
//! the only cancellation path. The cosmetic animations (reticle, planet
//! spin) are not cadenced off and keep running.

use glam::Vec2;

use super::collision::run_detection;
use super::launch::fire_projectile;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GamePhase, GameState};
use crate::aim_angle;

/// Cosmetic planet rotation: degrees added per spin tick
const PLANET_SPIN_STEP_DEG: f32 = 0.5;
/// Spin tick cadence in milliseconds
const PLANET_SPIN_INTERVAL_MS: f32 = 100.0;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position (drives the aiming reticle)
    pub aim: Option<Vec2>,
    /// Click position (fires a projectile). One-shot: the host clears it
    /// after the first substep that consumes it.
    pub fire: Option<Vec2>,
}

/// Advance the game by one fixed timestep, pushing events for the view
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let dt_ms = dt * 1000.0;

    // Reticle and planet spin outlive the game itself
    if let Some(pointer) = input.aim {
        state.aim_theta = aim_angle(state.defender_center(), pointer);
    }
    state.spin_accum_ms += dt_ms;
    while state.spin_accum_ms >= PLANET_SPIN_INTERVAL_MS {
        state.spin_accum_ms -= PLANET_SPIN_INTERVAL_MS;
        state.planet_spin_deg += PLANET_SPIN_STEP_DEG;
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ms += dt_ms as f64;

    for obstacle in &mut state.obstacles {
        obstacle.travel.advance(dt);
    }
    for projectile in &mut state.projectiles {
        projectile.travel.advance(dt);
    }

    if let Some(click) = input.fire {
        if let Some(id) = fire_projectile(state, click) {
            events.push(GameEvent::ProjectileFired { id });
        }
    }

    state.spawn_accum_ms += dt_ms;
    while state.spawn_accum_ms >= state.settings.spawn_interval_ms {
        state.spawn_accum_ms -= state.settings.spawn_interval_ms;
        let id = spawn_obstacle(state);
        events.push(GameEvent::ObstacleSpawned { id });
    }

    state.detect_accum_ms += dt_ms;
    while state.detect_accum_ms >= state.settings.detection_interval_ms {
        state.detect_accum_ms -= state.settings.detection_interval_ms;
        run_detection(state, events);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }
}
