//! Fundamental geometric and simulation types.
//!
//! Screen coordinates: x grows to the right, y grows downward, origin at the
//! top-left corner of the viewport. Units are pixels and seconds.

use serde::{Deserialize, Serialize};

/// 2D vector used for positions, velocities and per-tick shifts.
pub type Vector2 = glam::DVec2;

/// Clamp `x` into `[low, high]`.
///
/// Works for any ordered type so health (integer) and coordinates (float)
/// share one helper. `low` must not exceed `high`.
pub fn ensure_range<T: PartialOrd + Copy>(x: T, low: T, high: T) -> T {
    if x < low {
        return low;
    }
    if x > high {
        return high;
    }
    x
}

/// True when two circles overlap (touching edges do not count).
pub fn circles_collide(first: &Circle, second: &Circle) -> bool {
    first.center.distance(second.center) < first.radius + second.radius
}

/// Bounding circle of a game object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.radius
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.radius
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.center.y + self.radius
    }
}

/// The visible playfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether the bounding box of `circle` overlaps the viewport.
    pub fn intersects(&self, circle: &Circle) -> bool {
        circle.left() < self.width
            && circle.right() > 0.0
            && circle.top() < self.height
            && circle.bottom() > 0.0
    }
}

/// Simulation time tracking. Ticks are driven by a variable frame delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
