// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_affine --heading-base-level=0

//! Understory Affine: 4×4 render matrices restricted to 2D affine use.
//!
//! GPU pipelines take 4×4 matrices as shader uniforms even when everything drawn is flat.
//! This crate builds those matrices from Kurbo geometry:
//!
//! - [`Mat4::IDENTITY`] and [`Mat4::ortho`], a pixel-space projection with a top-left origin.
//! - [`Mat4::translate`], [`Mat4::scale`] and [`Mat4::rotate`], which right-multiply the running
//!   matrix, so the last call is applied to points first.
//! - [`model`], which maps the unit quad `(0, 0)–(1, 1)` onto a sized, rotated, positioned quad.
//!
//! Matrices act on column vectors (`p' = M · p`) and are stored row-major.
//! [`Mat4::to_row_major`] and [`Mat4::to_column_major`] produce the 16 `f32` values a uniform upload
//! expects, depending on whether the backend transposes.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_affine::{Mat4, model};
//!
//! let projection = Mat4::ortho(800.0, 600.0);
//! let top_left = projection * Point::new(0.0, 0.0);
//! assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));
//!
//! // A 40×20 quad at (100, 50), not rotated.
//! let m = model(Point::new(100.0, 50.0), Size::new(40.0, 20.0), 0.0, true);
//! let far_corner = m * Point::new(1.0, 1.0);
//! assert!((far_corner.x - 140.0).abs() < 1e-9);
//! assert!((far_corner.y - 70.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod mat4;

pub use mat4::{Mat4, model};
