//! Formation geometry: step vectors, group fitting and start placement.

use rand::Rng;

use deadsky_core::enums::Formation;
use deadsky_core::types::Vector2;

/// Offset between consecutive ships of a formation.
///
/// Every formation moves along at least one axis, so `distance > 0` gives
/// a non-degenerate step.
pub fn formation_step(formation: Formation, distance: f64) -> Vector2 {
    match formation {
        Formation::HorizontalLine => Vector2::new(distance, 0.0),
        Formation::VerticalLine => Vector2::new(0.0, distance),
        Formation::Slash => Vector2::new(-distance, distance),
        Formation::Backslash => Vector2::new(distance, distance),
    }
}

/// Area ship centers may occupy: x in `[min_x, max_x]`, depth in
/// `[min_depth, max_depth]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub min_x: f64,
    pub max_x: f64,
    pub min_depth: f64,
    pub max_depth: f64,
}

impl SpawnArea {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_depth - self.min_depth
    }

    pub fn contains(&self, point: Vector2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x)
            && (self.min_depth..=self.max_depth).contains(&point.y)
    }
}

/// Largest group size not above `wanted` whose span fits inside `area`.
pub fn fit_group_size(wanted: usize, step: Vector2, area: &SpawnArea) -> usize {
    let mut size = wanted.max(1);
    if step.x != 0.0 {
        size = size.min(max_steps(area.width(), step.x.abs()) + 1);
    }
    if step.y != 0.0 {
        size = size.min(max_steps(area.depth(), step.y.abs()) + 1);
    }
    size
}

fn max_steps(room: f64, step: f64) -> usize {
    if room <= 0.0 {
        return 0;
    }
    (room / step).floor() as usize
}

/// Random start point such that `start + step * i` stays inside `area`
/// for every `i` in `0..size`.
///
/// A negative step component grows the formation toward the low bound, so
/// the start is drawn from the high end of the range instead.
pub fn place_formation<R: Rng + ?Sized>(
    rng: &mut R,
    step: Vector2,
    size: usize,
    area: &SpawnArea,
) -> Vector2 {
    let span = step * size.saturating_sub(1) as f64;
    let x = sample_axis(rng, span.x, area.min_x, area.max_x);
    let y = sample_axis(rng, span.y, area.min_depth, area.max_depth);
    Vector2::new(x, y)
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, span: f64, low: f64, high: f64) -> f64 {
    let (from, to) = if span >= 0.0 {
        (low, high - span)
    } else {
        (low - span, high)
    };
    if to <= from {
        return from;
    }
    rng.gen_range(from..=to)
}

/// Centers of a formation of `size` ships.
pub fn formation_positions(start: Vector2, step: Vector2, size: usize) -> Vec<Vector2> {
    (0..size).map(|i| start + step * i as f64).collect()
}
