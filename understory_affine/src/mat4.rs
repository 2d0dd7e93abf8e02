// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 4×4 matrix and its 2D composition helpers.

use core::ops::Mul;

use kurbo::{Affine, Point, Size, Vec2};

/// A 4×4 matrix, row-major, acting on column vectors.
///
/// Only the 2D affine part and the projection's depth flip are ever populated; every other entry
/// keeps its identity value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    rows: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Build from rows.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Orthographic projection from pixel space to normalized device coordinates.
    ///
    /// Maps `[0, width] × [0, height]` to `[-1, 1] × [-1, 1]` with `(0, 0)` at the top-left
    /// (`y` grows downward on screen), and flips depth.
    /// `width` and `height` must be non-zero.
    pub fn ortho(width: f64, height: f64) -> Self {
        debug_assert!(width != 0.0 && height != 0.0, "degenerate viewport");
        Self::from_rows([
            [2.0 / width, 0.0, 0.0, -1.0],
            [0.0, -2.0 / height, 0.0, 1.0],
            [0.0, 0.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `self · T(v)`: translate points by `v` before applying `self`.
    #[must_use]
    pub fn translate(self, v: Vec2) -> Self {
        self * Self::from(Affine::translate(v))
    }

    /// `self · S(v)`: scale points by `v.x` and `v.y` before applying `self`.
    #[must_use]
    pub fn scale(self, v: Vec2) -> Self {
        self * Self::from(Affine::scale_non_uniform(v.x, v.y))
    }

    /// `self · R(degrees)`: rotate points about the origin before applying `self`.
    ///
    /// Positive angles turn `+x` toward `+y`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        self * Self::from(Affine::rotate(degrees.to_radians()))
    }

    /// Entry at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 4 or more.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> [f64; 4] {
        self.rows[i]
    }

    /// Column `j`.
    pub fn column(&self, j: usize) -> [f64; 4] {
        [
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        ]
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            *row = self.column(i);
        }
        Self::from_rows(out)
    }

    /// The 2D affine part (upper-left 2×2 block and the x/y translation).
    pub fn to_affine(&self) -> Affine {
        let r = &self.rows;
        Affine::new([r[0][0], r[1][0], r[0][1], r[1][1], r[0][3], r[1][3]])
    }

    /// The 16 entries row by row, for backends that upload with a transpose.
    pub fn to_row_major(&self) -> [f32; 16] {
        flatten(&self.rows)
    }

    /// The 16 entries column by column, the layout GLSL uniforms expect without a transpose.
    pub fn to_column_major(&self) -> [f32; 16] {
        flatten(&self.transpose().rows)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Uniform uploads are single precision."
)]
fn flatten(rows: &[[f64; 4]; 4]) -> [f32; 16] {
    let mut out = [0.0_f32; 16];
    for (i, v) in rows.iter().flatten().enumerate() {
        out[i] = *v as f32;
    }
    out
}

impl From<Affine> for Mat4 {
    fn from(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_rows([
            [a, c, 0.0, e],
            [b, d, 0.0, f],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Point> for Mat4 {
    type Output = Point;

    /// Transform a point on the `z = 0` plane.
    fn mul(self, p: Point) -> Point {
        let r = &self.rows;
        Point::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][3],
            r[1][0] * p.x + r[1][1] * p.y + r[1][3],
        )
    }
}

/// Model matrix mapping the unit quad onto a placed, sized and rotated quad.
///
/// Composes `T(position) · T(size / 2) · R(angle) · [T(-size / 2)] · S(size)`.
/// With `center_on_pivot` the quad turns about its own center and its top-left corner rests at
/// `position` when unrotated. Without it the quad turns about its top-left corner, which sits at
/// `position + size / 2`.
pub fn model(position: Point, size: Size, angle_degrees: f64, center_on_pivot: bool) -> Mat4 {
    let half = size.to_vec2() * 0.5;
    let mut m = Mat4::IDENTITY
        .translate(position.to_vec2())
        .translate(half)
        .rotate(angle_degrees);
    if center_on_pivot {
        m = m.translate(-half);
    }
    m.scale(size.to_vec2())
}
