//! Edge spawning
//!
//! Enemies enter from just outside a random viewport edge.

use glam::Vec2;
use rand::Rng;

use super::state::Enemy;

/// Viewport edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Spawn position `offset` units outside this edge, `along` units along it
    pub fn position(&self, along: f32, offset: f32, width: f32, height: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(along, -offset),
            Edge::Bottom => Vec2::new(along, height + offset),
            Edge::Left => Vec2::new(-offset, along),
            Edge::Right => Vec2::new(width + offset, along),
        }
    }

    /// Length of the edge a spawn coordinate is drawn from
    pub fn span(&self, width: f32, height: f32) -> f32 {
        match self {
            Edge::Top | Edge::Bottom => width,
            Edge::Left | Edge::Right => height,
        }
    }
}

/// Roll one enemy on a random edge.
///
/// The coordinate along the edge is a whole unit in `[0, span]`.
pub fn spawn_enemy(
    rng: &mut impl Rng,
    width: f32,
    height: f32,
    offset: f32,
    elite_chance: f32,
) -> Enemy {
    let edge = Edge::random(rng);
    let span = edge.span(width, height).max(0.0) as u32;
    let along = rng.random_range(0..=span) as f32;
    let elite = rng.random::<f32>() < elite_chance;
    Enemy {
        pos: edge.position(along, offset, width, height),
        elite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn on_spawn_ring(pos: Vec2, offset: f32, width: f32, height: f32) -> bool {
        let top_or_bottom = (pos.y == -offset || pos.y == height + offset)
            && (0.0..=width).contains(&pos.x);
        let left_or_right = (pos.x == -offset || pos.x == width + offset)
            && (0.0..=height).contains(&pos.y);
        top_or_bottom || left_or_right
    }

    #[test]
    fn spawns_just_outside_an_edge() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let enemy = spawn_enemy(&mut rng, 1000.0, 700.0, 30.0, 0.1);
            assert!(
                on_spawn_ring(enemy.pos, 30.0, 1000.0, 700.0),
                "unexpected spawn at {:?}",
                enemy.pos
            );
        }
    }

    #[test]
    fn every_edge_is_used() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let edge = Edge::random(&mut rng);
            seen[Edge::ALL.iter().position(|e| *e == edge).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn elite_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..100 {
            assert!(!spawn_enemy(&mut rng, 100.0, 100.0, 10.0, 0.0).elite);
            assert!(spawn_enemy(&mut rng, 100.0, 100.0, 10.0, 1.0).elite);
        }
    }
}
