//! Scrolling starfield behind the playfield.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use deadsky_core::types::{Vector2, Viewport};

/// Stars scroll down with the level. A star leaving the bottom comes back
/// at the top with a fresh random x.
#[derive(Debug, Clone)]
pub struct Starfield {
    viewport: Viewport,
    speed: f64,
    stars: Vec<Vector2>,
    rng: ChaCha8Rng,
}

impl Starfield {
    pub fn new(viewport: Viewport, count: usize, speed: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| {
                Vector2::new(
                    rng.gen_range(0.0..viewport.width),
                    rng.gen_range(0.0..viewport.height),
                )
            })
            .collect();
        Self {
            viewport,
            speed,
            stars,
            rng,
        }
    }

    pub fn stars(&self) -> &[Vector2] {
        &self.stars
    }

    pub fn update(&mut self, dt: f64) {
        let amount = self.speed * dt;
        for star in &mut self.stars {
            if star.y + amount <= self.viewport.height {
                star.y += amount;
            } else {
                *star = Vector2::new(self.rng.gen_range(0.0..self.viewport.width), 0.0);
            }
        }
    }
}
