//! Collision and pulse resolution
//!
//! Proximity uses the combined player radius and enemy extent halved, so an
//! enemy has to get well inside the drawn circle before it counts.

use glam::Vec2;

use super::state::Enemy;

/// Contact distance threshold for a player radius and enemy extent
#[inline]
pub fn contact_distance(player_radius: f32, enemy_extent: f32) -> f32 {
    (player_radius + enemy_extent) / 2.0
}

/// Whether an enemy centered at `enemy_pos` has caught the player
#[inline]
pub fn touches_player(player_pos: Vec2, enemy_pos: Vec2, player_radius: f32, enemy_extent: f32) -> bool {
    player_pos.distance(enemy_pos) < contact_distance(player_radius, enemy_extent)
}

/// Index of the first enemy (in iteration order) touching the player
pub fn first_contact(
    player_pos: Vec2,
    enemies: &[Enemy],
    player_radius: f32,
    enemy_extent: f32,
) -> Option<usize> {
    enemies
        .iter()
        .position(|e| touches_player(player_pos, e.pos, player_radius, enemy_extent))
}

/// Remove every enemy within `radius` of `center`; returns how many were removed.
///
/// Survivors are rebuilt into a fresh collection rather than removed in place.
pub fn sweep_pulse(enemies: &mut Vec<Enemy>, center: Vec2, radius: f32) -> usize {
    let before = enemies.len();
    let survivors: Vec<Enemy> = std::mem::take(enemies)
        .into_iter()
        .filter(|e| center.distance(e.pos) > radius)
        .collect();
    *enemies = survivors;
    before - enemies.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            elite: false,
        }
    }

    #[test]
    fn contact_threshold_is_strict() {
        // (30 + 30) / 2 = 30
        assert!(touches_player(Vec2::ZERO, Vec2::new(29.9, 0.0), 30.0, 30.0));
        assert!(!touches_player(Vec2::ZERO, Vec2::new(30.0, 0.0), 30.0, 30.0));
        assert!(touches_player(Vec2::ZERO, Vec2::ZERO, 30.0, 30.0));
    }

    #[test]
    fn first_contact_finds_earliest() {
        let enemies = vec![enemy(200.0, 0.0), enemy(0.0, 10.0), enemy(5.0, 0.0)];
        assert_eq!(first_contact(Vec2::ZERO, &enemies, 30.0, 30.0), Some(1));
        assert_eq!(first_contact(Vec2::new(1000.0, 0.0), &enemies, 30.0, 30.0), None);
    }

    #[test]
    fn sweep_removes_inclusive_radius() {
        let mut enemies = vec![
            enemy(65.0, 0.0),
            enemy(0.0, 64.0),
            enemy(65.1, 0.0),
            enemy(300.0, 300.0),
        ];
        let removed = sweep_pulse(&mut enemies, Vec2::ZERO, 65.0);
        assert_eq!(removed, 2);
        assert_eq!(enemies, vec![enemy(65.1, 0.0), enemy(300.0, 300.0)]);
    }

    #[test]
    fn sweep_on_empty_is_noop() {
        let mut enemies = Vec::new();
        assert_eq!(sweep_pulse(&mut enemies, Vec2::ZERO, 400.0), 0);
    }
}
