//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`] owned by the tick driver -
//! no ambient globals, no re-querying the view for logical state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

/// Obstacle size class
///
/// Drawn uniformly at spawn time. Size decides both the collision radius and
/// the travel duration (the literal table: larger obstacles arrive sooner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Big,
}

impl SizeClass {
    /// All classes, in draw order
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Big];

    /// Collision radius in pixels
    pub fn radius(&self) -> f32 {
        match self {
            SizeClass::Small => 35.0,
            SizeClass::Medium => 60.0,
            SizeClass::Big => 75.0,
        }
    }

    /// Travel duration from spawn edge to the defender anchor, in seconds
    pub fn travel_secs(&self) -> f32 {
        match self {
            SizeClass::Big => 25.0,
            SizeClass::Medium => 30.0,
            SizeClass::Small => 45.0,
        }
    }

    /// CSS class name on the view side
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Big => "big",
        }
    }
}

/// Which viewport edge an obstacle entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// A fire-and-forget linear translation
///
/// The sim-side stand-in for a CSS transform transition: assigned once at
/// creation, never re-targeted, completion never awaited. Position is a pure
/// function of elapsed time, clamped at the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Travel {
    /// Starting center position
    pub from: Vec2,
    /// Total translation to apply over the duration
    pub delta: Vec2,
    /// Duration in seconds
    pub duration_secs: f32,
    /// Elapsed time in seconds
    pub elapsed_secs: f32,
}

impl Travel {
    pub fn new(from: Vec2, delta: Vec2, duration_secs: f32) -> Self {
        Self {
            from,
            delta,
            duration_secs,
            elapsed_secs: 0.0,
        }
    }

    /// Advance elapsed time (saturates at the duration)
    pub fn advance(&mut self, dt: f32) {
        self.elapsed_secs = (self.elapsed_secs + dt).min(self.duration_secs);
    }

    /// Fraction of the translation applied so far, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
        }
    }

    /// Current center position
    pub fn position(&self) -> Vec2 {
        self.from + self.delta * self.progress()
    }

    pub fn finished(&self) -> bool {
        self.elapsed_secs >= self.duration_secs
    }
}

/// A hazard drifting from a screen edge toward the defender
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub size: SizeClass,
    pub edge: SpawnEdge,
    pub travel: Travel,
}

impl Obstacle {
    pub fn center(&self) -> Vec2 {
        self.travel.position()
    }
}

/// A player-fired shot traveling from the defender toward a clicked point
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub travel: Travel,
}

impl Projectile {
    pub fn center(&self) -> Vec2 {
        self.travel.position()
    }
}

/// Current phase of gameplay
///
/// The Playing -> GameOver transition is one-way and final for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Something the view needs to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new obstacle entered the pool
    ObstacleSpawned { id: u32 },
    /// A new projectile entered the pool
    ProjectileFired { id: u32 },
    /// A projectile destroyed an obstacle; both left the pool, score bumped
    ObstacleShot { obstacle: u32, projectile: u32 },
    /// An obstacle reached the defender; pools cleared, cadences stopped
    Defeat { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed (spawner RNG)
    pub seed: u64,
    /// Game configuration
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Score: one point per obstacle shot down. Only ever increases.
    pub score: u32,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live projectiles, in fire order. Misses are never reaped.
    pub projectiles: Vec<Projectile>,
    /// Aiming reticle angle (radians), driven by pointer position
    pub aim_theta: f32,
    /// Cosmetic planet rotation (degrees)
    pub planet_spin_deg: f32,
    /// Simulation time in milliseconds
    pub time_ms: f64,
    pub(crate) rng: Pcg32,
    pub(crate) spawn_accum_ms: f32,
    pub(crate) detect_accum_ms: f32,
    pub(crate) spin_accum_ms: f32,
    next_obstacle_id: u32,
    next_projectile_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and configuration
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self {
            seed,
            settings,
            phase: GamePhase::Playing,
            score: 0,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            aim_theta: 0.0,
            planet_spin_deg: 0.0,
            time_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            spawn_accum_ms: 0.0,
            detect_accum_ms: 0.0,
            spin_accum_ms: 0.0,
            next_obstacle_id: 0,
            next_projectile_id: 0,
        }
    }

    /// Whether input and cadences are still live
    pub fn alive(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Defender center in viewport coordinates
    pub fn defender_center(&self) -> Vec2 {
        DEFENDER_ANCHOR
    }

    /// Allocate the next obstacle ID (monotonic, never reused)
    pub fn next_obstacle_id(&mut self) -> u32 {
        self.next_obstacle_id += 1;
        self.next_obstacle_id
    }

    /// Allocate the next projectile ID (monotonic, never reused)
    pub fn next_projectile_id(&mut self) -> u32 {
        self.next_projectile_id += 1;
        self.next_projectile_id
    }
}
