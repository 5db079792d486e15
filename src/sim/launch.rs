//! Projectile launcher
//!
//! A click spawns a projectile at the defender anchor and assigns it one
//! translation through the click point, extrapolated far enough past the
//! origin to exit the screen. Launching is gated on the game being alive.

use glam::Vec2;

use super::state::{GameState, Projectile, Travel};
use crate::consts::{
    NEAR_VERTICAL_BAND, PROJECTILE_DEFAULT_SECS, PROJECTILE_REACH, PROJECTILE_SLOW_SECS,
    SPAWN_EDGE_MARGIN,
};

/// Translation from the defender anchor through `click`, extrapolated
/// `PROJECTILE_REACH` px past the origin horizontally along the same slope.
///
/// A perfectly vertical click (`dx == 0`) would divide by zero; it is
/// special-cased to straight vertical travel so no non-finite value can
/// reach a transform. `signum(+0) = 1` resolves a click exactly on the
/// origin to downward travel.
pub fn launch_translation(origin: Vec2, click: Vec2, viewport_h: f32) -> Vec2 {
    let dx = click.x - origin.x;
    let dy = click.y - origin.y;

    if dx == 0.0 {
        return Vec2::new(0.0, dy.signum() * (viewport_h + SPAWN_EDGE_MARGIN));
    }

    let slope = dy / dx;
    let target_x = dx + PROJECTILE_REACH.copysign(dx);
    Vec2::new(target_x, slope * target_x)
}

/// Travel duration for a translation: near-vertical shots (horizontal
/// magnitude inside the band) go slow, everything else gets the default
pub fn travel_duration(delta: Vec2) -> f32 {
    if delta.x.abs() < NEAR_VERTICAL_BAND {
        PROJECTILE_SLOW_SECS
    } else {
        PROJECTILE_DEFAULT_SECS
    }
}

/// Fire a projectile at `click`. Returns the new id, or `None` when the
/// game is over (the alive flag gates the launcher).
pub fn fire_projectile(state: &mut GameState, click: Vec2) -> Option<u32> {
    if !state.alive() {
        return None;
    }

    let origin = state.defender_center();
    let delta = launch_translation(origin, click, state.settings.viewport_h);
    let duration = travel_duration(delta);
    let id = state.next_projectile_id();

    log::debug!(
        "fire projectile #{id} delta ({:.0}, {:.0}) over {duration}s",
        delta.x,
        delta.y
    );

    state.projectiles.push(Projectile {
        id,
        travel: Travel::new(origin, delta, duration),
    });
    Some(id)
}
