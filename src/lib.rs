//! Planet Defender - a pointer-aimed arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (spawning, projectiles, collisions, game state)
//! - `view`: DOM view layer (wasm32 only)
//! - `settings`: Serialized game configuration

pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod view;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Fixed on-screen point obstacles target and projectiles originate from
    pub const DEFENDER_ANCHOR: Vec2 = Vec2::new(660.0, 323.0);
    /// Collision radius of the defender
    pub const DEFENDER_RADIUS: f32 = 75.0;
    /// Collision radius of a projectile
    pub const PROJECTILE_RADIUS: f32 = 75.0;
    /// Extra slack on the obstacle/defender proximity check
    pub const DEFENDER_HIT_SLOP: f32 = 35.0;
    /// Extra slack on the obstacle/projectile proximity check
    pub const PROJECTILE_HIT_SLOP: f32 = 50.0;

    /// Obstacles spawn this far beyond the viewport edge
    pub const SPAWN_EDGE_MARGIN: f32 = 150.0;

    /// Horizontal extrapolation past the click point, so shots exit the screen
    pub const PROJECTILE_REACH: f32 = 500.0;
    /// Shots whose extrapolated horizontal travel stays inside this band are
    /// near-vertical and get the slow duration
    pub const NEAR_VERTICAL_BAND: f32 = 520.0;
    /// Travel duration for near-vertical shots
    pub const PROJECTILE_SLOW_SECS: f32 = 15.0;
    /// Travel duration for everything else
    pub const PROJECTILE_DEFAULT_SECS: f32 = 2.0;
}

/// Center point of an axis-aligned box given its top-left corner and size
#[inline]
pub fn center_of(top_left: Vec2, size: Vec2) -> Vec2 {
    top_left + size / 2.0
}

/// Angle (radians) from `origin` toward `pointer`, for the aiming reticle
#[inline]
pub fn aim_angle(origin: Vec2, pointer: Vec2) -> f32 {
    (pointer.y - origin.y).atan2(pointer.x - origin.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_center_of_midpoint() {
        let c = center_of(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0));
        assert_eq!(c, Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_aim_angle_cardinals() {
        let origin = Vec2::new(660.0, 323.0);
        assert!((aim_angle(origin, origin + Vec2::new(100.0, 0.0))).abs() < 1e-6);
        let down = aim_angle(origin, origin + Vec2::new(0.0, 100.0));
        assert!((down - FRAC_PI_2).abs() < 1e-6);
    }
}
