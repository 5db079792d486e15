//! Simulation module
//!
//! All gameplay logic lives here, platform-free:
//! - Owned entity pools and stable ids (no view-tree inspection)
//! - Seeded RNG for the spawner
//! - Fixed timestep tick hosting the spawn/detection cadences

pub mod collision;
pub mod launch;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{defender_hit_threshold, projectile_hit_threshold, run_detection};
pub use launch::fire_projectile;
pub use spawn::spawn_obstacle;
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, Projectile, SizeClass, SpawnEdge, Travel,
};
pub use tick::{TickInput, tick};
