// Row-major from the top row: index = row * (n + 1) + col,
// x = col / n, y = 1 - row / n (y up).

use std::sync::Arc;

use glam::Vec2;

use crate::state::MeshVertex;

#[derive(Clone, Debug)]
pub struct Grid {
    segments: usize,
    points: Vec<Vec2>,
    original: Arc<[Vec2]>,
    dirty: bool,
}

impl Grid {
    /// Build an `(n + 1) x (n + 1)` lattice spanning exactly `[0, 1]` on both axes.
    ///
    /// Panics when `segments` is zero.
    pub fn new(segments: usize) -> Self {
        assert!(segments > 0, "grid needs at least one segment");
        let side = segments + 1;
        let n = segments as f32;
        let mut points = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                points.push(Vec2::new(col as f32 / n, 1.0 - row as f32 / n));
            }
        }
        let original: Arc<[Vec2]> = points.clone().into();
        Self {
            segments,
            points,
            original,
            dirty: true,
        }
    }

    #[inline]
    pub fn segments(&self) -> usize {
        self.segments
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Vec2 {
        self.points[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, p: Vec2) {
        self.points[i] = p;
    }

    /// Rest position of point `i`.
    #[inline]
    pub fn original(&self, i: usize) -> Vec2 {
        self.original[i]
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Vec2] {
        &mut self.points
    }

    pub(crate) fn split_mut(&mut self) -> (&mut [Vec2], &[Vec2]) {
        (&mut self.points, &self.original)
    }

    #[inline]
    pub fn originals(&self) -> &[Vec2] {
        &self.original
    }

    /// Flag the geometry for re-upload. Cheap; consumers poll with [`Grid::take_dirty`].
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Triangle list covering every cell with two counter-clockwise triangles.
    pub fn indices(&self) -> Vec<u32> {
        let side = (self.segments + 1) as u32;
        let mut out = Vec::with_capacity(self.segments * self.segments * 6);
        for row in 0..self.segments as u32 {
            for col in 0..self.segments as u32 {
                let a = col + side * row;
                let b = col + side * (row + 1);
                let c = (col + 1) + side * (row + 1);
                let d = (col + 1) + side * row;
                out.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        out
    }

    /// Pack current positions with their rest positions as texture coordinates.
    pub fn write_vertices(&self, out: &mut Vec<MeshVertex>) {
        out.clear();
        out.extend(
            self.points
                .iter()
                .zip(self.original.iter())
                .map(|(p, uv)| MeshVertex {
                    position: p.to_array(),
                    uv: uv.to_array(),
                }),
        );
    }
}
