//! Collision detection
//!
//! One detection pass runs two checks over the live pools: every obstacle
//! against the defender, then every obstacle against every projectile.
//! Plain Euclidean circle proximity with size-dependent thresholds; full
//! pairwise scans, which is fine at this entity count.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, SizeClass};
use crate::consts::{DEFENDER_HIT_SLOP, DEFENDER_RADIUS, PROJECTILE_HIT_SLOP, PROJECTILE_RADIUS};

/// Proximity threshold for an obstacle reaching the defender
#[inline]
pub fn defender_hit_threshold(size: SizeClass) -> f32 {
    size.radius() + DEFENDER_RADIUS + DEFENDER_HIT_SLOP
}

/// Proximity threshold for a projectile destroying an obstacle
#[inline]
pub fn projectile_hit_threshold(size: SizeClass) -> f32 {
    size.radius() + PROJECTILE_RADIUS + PROJECTILE_HIT_SLOP
}

#[inline]
fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) <= threshold
}

/// Run one detection pass, pushing events for the view.
///
/// An obstacle reaching the defender ends the game: both pools are cleared
/// and the phase flips to GameOver, once, for good. Otherwise each
/// obstacle/projectile pair below threshold is removed and scores a point;
/// a projectile consumed by one match cannot match again this pass.
pub fn run_detection(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let defender = state.defender_center();

    for obstacle in &state.obstacles {
        if within(obstacle.center(), defender, defender_hit_threshold(obstacle.size)) {
            log::info!(
                "obstacle #{} reached the defender, final score {}",
                obstacle.id,
                state.score
            );
            state.phase = GamePhase::GameOver;
            state.obstacles.clear();
            state.projectiles.clear();
            events.push(GameEvent::Defeat { score: state.score });
            return;
        }
    }

    let mut hits: Vec<(u32, u32)> = Vec::new();
    for obstacle in &state.obstacles {
        let threshold = projectile_hit_threshold(obstacle.size);
        for projectile in &state.projectiles {
            if hits.iter().any(|&(_, p)| p == projectile.id) {
                continue;
            }
            if within(obstacle.center(), projectile.center(), threshold) {
                hits.push((obstacle.id, projectile.id));
                break;
            }
        }
    }

    for &(obstacle, projectile) in &hits {
        state.obstacles.retain(|o| o.id != obstacle);
        state.projectiles.retain(|p| p.id != projectile);
        state.score += 1;
        events.push(GameEvent::ObstacleShot {
            obstacle,
            projectile,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFENDER_ANCHOR;
    use crate::settings::Settings;
    use crate::sim::state::{Obstacle, Projectile, SpawnEdge, Travel};

    fn obstacle_at(id: u32, size: SizeClass, pos: Vec2) -> Obstacle {
        Obstacle {
            id,
            size,
            edge: SpawnEdge::Left,
            travel: Travel::new(pos, Vec2::ZERO, 1.0),
        }
    }

    fn projectile_at(id: u32, pos: Vec2) -> Projectile {
        Projectile {
            id,
            travel: Travel::new(pos, Vec2::ZERO, 1.0),
        }
    }

    #[test]
    fn test_thresholds_follow_size_table() {
        assert_eq!(defender_hit_threshold(SizeClass::Small), 35.0 + 75.0 + 35.0);
        assert_eq!(defender_hit_threshold(SizeClass::Big), 75.0 + 75.0 + 35.0);
        assert_eq!(
            projectile_hit_threshold(SizeClass::Medium),
            60.0 + 75.0 + 50.0
        );
    }

    #[test]
    fn test_defender_hit_ends_game_and_clears_pools() {
        let mut state = GameState::new(1, Settings::default());
        let close = DEFENDER_ANCHOR + Vec2::new(defender_hit_threshold(SizeClass::Small) - 1.0, 0.0);
        state.obstacles.push(obstacle_at(1, SizeClass::Small, close));
        state.obstacles.push(obstacle_at(
            2,
            SizeClass::Big,
            DEFENDER_ANCHOR + Vec2::new(2000.0, 0.0),
        ));
        state.projectiles.push(projectile_at(1, Vec2::new(-500.0, -500.0)));

        let mut events = Vec::new();
        run_detection(&mut state, &mut events);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.obstacles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(events, vec![GameEvent::Defeat { score: 0 }]);
    }

    #[test]
    fn test_defender_miss_outside_threshold() {
        let mut state = GameState::new(1, Settings::default());
        let far = DEFENDER_ANCHOR + Vec2::new(defender_hit_threshold(SizeClass::Big) + 1.0, 0.0);
        state.obstacles.push(obstacle_at(1, SizeClass::Big, far));

        let mut events = Vec::new();
        run_detection(&mut state, &mut events);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_projectile_hit_removes_pair_and_scores() {
        let mut state = GameState::new(1, Settings::default());
        let spot = Vec2::new(200.0, 100.0);
        state.obstacles.push(obstacle_at(1, SizeClass::Medium, spot));
        state
            .projectiles
            .push(projectile_at(1, spot + Vec2::new(50.0, 0.0)));
        // Unrelated pair, far away and out of range of each other
        state
            .obstacles
            .push(obstacle_at(2, SizeClass::Small, Vec2::new(3000.0, 3000.0)));
        state
            .projectiles
            .push(projectile_at(2, Vec2::new(-3000.0, 100.0)));

        let mut events = Vec::new();
        run_detection(&mut state, &mut events);

        assert_eq!(state.score, 1);
        assert_eq!(
            events,
            vec![GameEvent::ObstacleShot {
                obstacle: 1,
                projectile: 1
            }]
        );
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].id, 2);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, 2);
    }

    #[test]
    fn test_one_projectile_cannot_destroy_two_obstacles() {
        let mut state = GameState::new(1, Settings::default());
        let spot = Vec2::new(200.0, 100.0);
        state.obstacles.push(obstacle_at(1, SizeClass::Small, spot));
        state.obstacles.push(obstacle_at(2, SizeClass::Small, spot));
        state.projectiles.push(projectile_at(1, spot));

        let mut events = Vec::new();
        run_detection(&mut state, &mut events);

        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_empty_pools_are_a_no_op() {
        let mut state = GameState::new(1, Settings::default());
        let mut events = Vec::new();
        run_detection(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_score_only_increases_across_passes() {
        let mut state = GameState::new(1, Settings::default());
        let mut events = Vec::new();

        let spot = Vec2::new(200.0, 100.0);
        state.obstacles.push(obstacle_at(1, SizeClass::Small, spot));
        state.projectiles.push(projectile_at(1, spot));
        run_detection(&mut state, &mut events);
        let after_first = state.score;

        run_detection(&mut state, &mut events);
        assert!(state.score >= after_first);
        assert_eq!(state.score, 1);
    }
}
