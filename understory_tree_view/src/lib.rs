// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_view --heading-base-level=0

//! Understory Tree View: draw a binary search tree, one frame at a time.
//!
//! This crate ties the lower layers together:
//!
//! - [`understory_bst`] holds the values.
//! - [`understory_tree_layout`] places them, once per frame, into a reused [`Sequence`](understory_sequence::Sequence).
//! - [`understory_affine`] builds the model matrices for each quad and the orthographic projection.
//!
//! The scene does not own a window. Everything it draws goes through a [`RenderTarget`], which
//! receives a projection, a stream of unit quads described by [`Uniforms`], and a `present` call
//! per frame. A GPU backend maps these onto its shader uniforms (`u_projection`, `u_model`,
//! `u_offset`, `u_color`, `u_alpha`, `u_type`); [`RecordingTarget`] keeps them in memory instead.
//!
//! Each frame draws, in order:
//!
//! 1. One thin rotated quad per parent/child edge ([`DrawMode::Line`]).
//! 2. One quad per label character, centered on the node. With the procedural atlas each quad
//!    carries its atlas cell from [`atlas_offset`]; characters without a cell are skipped.
//!
//! # Example
//!
//! ```rust
//! use understory_bst::BinaryTree;
//! use understory_tree_layout::LayoutStrategy;
//! use understory_tree_view::{DrawMode, RecordingTarget, SceneConfig, TreeScene};
//!
//! let tree: BinaryTree<i32> = [5, 3, 2, 4, 7, 6, 8].into_iter().collect();
//! let mut scene = TreeScene::new(tree, LayoutStrategy::default(), SceneConfig::default())?;
//!
//! let mut target = RecordingTarget::closing_after(2);
//! assert_eq!(scene.run(&mut target, None), 2);
//!
//! assert_eq!(target.last_frame_of(DrawMode::Line).count(), 6);
//! assert_eq!(target.last_frame_of(DrawMode::AtlasGlyph).count(), 7);
//! # Ok::<(), understory_tree_view::InitializationError>(())
//! ```
//!
//! ## Logging
//!
//! Scene setup and the end of the frame loop are logged at `info`, each frame at `debug`, and
//! each label at `trace`, all through [`tracing`]. The first label character with no glyph is
//! reported once at `warn`.

mod atlas;
mod error;
mod scene;
mod target;

pub use atlas::{ATLAS_CHARS, DECIMAL_POINT_CELL, GlyphTable, MINUS_CELL, atlas_offset};
pub use error::InitializationError;
pub use scene::{FrameStats, GlyphSource, SceneConfig, SceneLayers, TreeScene};
pub use target::{DrawMode, RecordingTarget, RenderTarget, Uniforms};
