use glam::Vec2;

use crate::grid::Grid;

/// Radial displacement brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Falloff {
    pub radius: f32,
    pub min_intensity: f32,
}

impl Falloff {
    pub fn new(radius: f32, min_intensity: f32) -> Self {
        Self {
            radius,
            min_intensity,
        }
    }

    /// Push every free point by `delta` weighted by its distance to `anchor`.
    ///
    /// Reads and writes the live grid in place: two passes in a row compound.
    /// The dirty flag is raised once, after the whole pass.
    pub fn displace(&self, grid: &mut Grid, anchor: Vec2, delta: Vec2) {
        for p in grid.points_mut() {
            if is_boundary(*p) {
                continue;
            }
            let intensity = drag_intensity(anchor, *p, self.radius);
            if intensity < self.min_intensity {
                continue;
            }
            *p += intensity * delta;
        }
        grid.mark_dirty();
    }
}

/// Position of `value` between `a` and `b`, unclamped. Returns 0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Weight of a drag anchored at `anchor` on `point`.
///
/// Linear ramp from 1 at the anchor to 0 at `radius`, clamped, then squared so
/// the effect concentrates near the pointer with a soft halo around it.
#[inline]
pub fn drag_intensity(anchor: Vec2, point: Vec2, radius: f32) -> f32 {
    let distance = anchor.distance(point);
    let linear = inverse_lerp(radius, 0.0, distance).clamp(0.0, 1.0);
    linear * linear
}

/// Points with any coordinate exactly on the frame edge are pinned.
#[inline]
pub fn is_boundary(p: Vec2) -> bool {
    p.x == 0.0 || p.x == 1.0 || p.y == 0.0 || p.y == 1.0
}
