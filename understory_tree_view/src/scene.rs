// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame scene driver.

use core::fmt::{Display, Write as _};
use std::path::PathBuf;

use bitflags::bitflags;
use kurbo::{Point, Size, Vec2};
use tracing::{debug, info, trace, warn};
use understory_affine::{Mat4, model};
use understory_bst::BinaryTree;
use understory_sequence::Sequence;
use understory_tree_layout::{LayoutRecord, LayoutStrategy, TreeLayout, bounds};

use crate::atlas::GlyphTable;
use crate::error::InitializationError;
use crate::target::{DrawMode, RenderTarget, Uniforms};

bitflags! {
    /// Parts of the scene drawn each frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SceneLayers: u8 {
        /// Lines from each node to its parent.
        const EDGES  = 0b0000_0001;
        /// Value labels.
        const LABELS = 0b0000_0010;
    }
}

impl Default for SceneLayers {
    fn default() -> Self {
        Self::EDGES | Self::LABELS
    }
}

/// Where label glyphs come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GlyphSource {
    /// The built-in digit atlas; draws use [`DrawMode::AtlasGlyph`].
    #[default]
    ProceduralAtlas,
    /// A font file; draws use [`DrawMode::FontGlyph`]. The file must exist at startup.
    Font {
        /// Font file path.
        path: PathBuf,
    },
}

impl GlyphSource {
    fn draw_mode(&self) -> DrawMode {
        match self {
            Self::ProceduralAtlas => DrawMode::AtlasGlyph,
            Self::Font { .. } => DrawMode::FontGlyph,
        }
    }
}

/// Scene appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Window size in pixels.
    pub viewport: Size,
    /// Size of one label glyph in pixels.
    pub glyph_size: Size,
    /// Edge line thickness in pixels.
    pub line_thickness: f64,
    /// Gap between the top of the window and the root label.
    pub margin: f64,
    /// Edge RGBA.
    pub line_color: [f32; 4],
    /// Label RGBA.
    pub label_color: [f32; 4],
    /// Overall opacity.
    pub alpha: f32,
    /// What to draw.
    pub layers: SceneLayers,
    /// Where glyphs come from.
    pub glyphs: GlyphSource,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 720.0),
            glyph_size: Size::new(12.0, 20.0),
            line_thickness: 2.0,
            margin: 40.0,
            line_color: [0.6, 0.6, 0.6, 1.0],
            label_color: [1.0, 1.0, 1.0, 1.0],
            alpha: 1.0,
            layers: SceneLayers::default(),
            glyphs: GlyphSource::default(),
        }
    }
}

/// What one frame drew.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Layout records produced.
    pub records: usize,
    /// Edge quads drawn.
    pub lines: usize,
    /// Glyph quads drawn.
    pub glyphs: usize,
    /// Label characters with no glyph.
    pub skipped_glyphs: usize,
}

/// A tree, a layout strategy, and the frame-owned layout buffer.
///
/// Each [`render_frame`](Self::render_frame) lays the tree out again into the same buffer
/// (reset, not reallocated), then hands one quad per edge and one per label character to the
/// render target.
pub struct TreeScene<T, L = LayoutStrategy> {
    tree: BinaryTree<T>,
    layout: L,
    config: SceneConfig,
    projection: Mat4,
    records: Sequence<LayoutRecord<T>>,
    glyphs: GlyphTable,
    label: String,
    warned_unrenderable: bool,
}

impl<T, L: core::fmt::Debug> core::fmt::Debug for TreeScene<T, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeScene")
            .field("tree", &self.tree)
            .field("layout", &self.layout)
            .field("viewport", &self.config.viewport)
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

fn validate_viewport(viewport: Size) -> Result<(), InitializationError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(viewport.width) && ok(viewport.height) {
        Ok(())
    } else {
        Err(InitializationError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

impl<T: Copy + Display, L: TreeLayout> TreeScene<T, L> {
    /// Check the configuration and set up the scene.
    ///
    /// # Errors
    ///
    /// [`InitializationError::InvalidViewport`] if the viewport is empty or not finite,
    /// [`InitializationError::InvalidLayout`] if the strategy's parameters fail
    /// [`TreeLayout::validate`], and [`InitializationError::MissingFont`] if a font source points
    /// at no file.
    pub fn new(
        tree: BinaryTree<T>,
        layout: L,
        config: SceneConfig,
    ) -> Result<Self, InitializationError> {
        validate_viewport(config.viewport)?;
        layout.validate()?;
        if let GlyphSource::Font { path } = &config.glyphs
            && !path.is_file()
        {
            return Err(InitializationError::MissingFont { path: path.clone() });
        }
        info!(
            nodes = tree.len(),
            height = tree.height(),
            width = config.viewport.width,
            height_px = config.viewport.height,
            "tree scene ready"
        );
        Ok(Self {
            records: Sequence::with_capacity(tree.len()),
            projection: Mat4::ortho(config.viewport.width, config.viewport.height),
            tree,
            layout,
            config,
            glyphs: GlyphTable::default(),
            label: String::new(),
            warned_unrenderable: false,
        })
    }

    /// Change the viewport and rebuild the projection.
    ///
    /// # Errors
    ///
    /// [`InitializationError::InvalidViewport`] if the new viewport is empty or not finite; the
    /// scene keeps its previous viewport.
    pub fn resize(&mut self, viewport: Size) -> Result<(), InitializationError> {
        validate_viewport(viewport)?;
        self.config.viewport = viewport;
        self.projection = Mat4::ortho(viewport.width, viewport.height);
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        Ok(())
    }

    /// The tree being drawn.
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// The active layout strategy.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The projection handed to the target each frame.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Records from the most recent frame. Empty before the first frame.
    pub fn records(&self) -> &Sequence<LayoutRecord<T>> {
        &self.records
    }

    /// Pixel position of a record from the most recent frame.
    pub fn screen_position(&self, record: &LayoutRecord<T>) -> Point {
        record.position + self.origin()
    }

    /// Offset from layout space to pixel space: the drawing is centered horizontally and hangs
    /// `margin` below the top edge.
    fn origin(&self) -> Vec2 {
        let Some(extent) = bounds(&self.records) else {
            return Vec2::ZERO;
        };
        Vec2::new(
            self.config.viewport.width * 0.5 - extent.center().x,
            self.config.margin + self.config.glyph_size.height * 0.5 - extent.y0,
        )
    }

    /// Lay out, draw and present one frame.
    pub fn render_frame<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> FrameStats {
        self.layout.layout_into(&self.tree, &mut self.records);
        target.set_projection(self.projection.to_row_major());

        let origin = self.origin();
        let Self {
            config,
            records,
            glyphs,
            label,
            warned_unrenderable,
            ..
        } = self;
        let mut stats = FrameStats {
            records: records.len(),
            ..FrameStats::default()
        };

        if config.layers.contains(SceneLayers::EDGES) {
            for record in records.iter() {
                let Some(parent) = record.parent_record(records) else {
                    continue;
                };
                let m = edge_model(
                    parent.position + origin,
                    record.position + origin,
                    config.line_thickness,
                );
                target.draw(&Uniforms {
                    model: m.to_row_major(),
                    offset: [0.0; 4],
                    color: config.line_color,
                    alpha: config.alpha,
                    mode: DrawMode::Line,
                    glyph: None,
                });
                stats.lines += 1;
            }
        }

        if config.layers.contains(SceneLayers::LABELS) {
            let mode = config.glyphs.draw_mode();
            let glyph = config.glyph_size;
            for record in records.iter() {
                label.clear();
                write!(label, "{}", record.value).ok();
                let count = label.chars().count() as f64;
                let center = record.position + origin;
                let start = center - Vec2::new(glyph.width * count, glyph.height) * 0.5;
                trace!(label = %label, x = center.x, y = center.y, "label");

                for (i, c) in label.chars().enumerate() {
                    let offset = match mode {
                        DrawMode::FontGlyph => [0.0, 0.0, 1.0, 1.0],
                        _ => match glyphs.lookup(c) {
                            Some(cell) => cell,
                            None => {
                                if !*warned_unrenderable {
                                    warn!(%c, label = %label, "no atlas glyph, skipping character");
                                    *warned_unrenderable = true;
                                }
                                stats.skipped_glyphs += 1;
                                continue;
                            }
                        },
                    };
                    let at = start + Vec2::new(glyph.width * i as f64, 0.0);
                    target.draw(&Uniforms {
                        model: model(at, glyph, 0.0, true).to_row_major(),
                        offset,
                        color: config.label_color,
                        alpha: config.alpha,
                        mode,
                        glyph: Some(c),
                    });
                    stats.glyphs += 1;
                }
            }
        }

        target.present();
        debug!(
            records = stats.records,
            lines = stats.lines,
            glyphs = stats.glyphs,
            skipped = stats.skipped_glyphs,
            "frame presented"
        );
        stats
    }

    /// Render frames until the target asks to close or `max_frames` were drawn.
    ///
    /// Returns the number of frames drawn.
    pub fn run<R: RenderTarget + ?Sized>(&mut self, target: &mut R, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while !target.should_close() && max_frames.is_none_or(|max| frames < max) {
            self.render_frame(target);
            frames += 1;
        }
        info!(frames, "frame loop finished");
        frames
    }
}

/// Model matrix for a `thickness`-wide line quad from `from` to `to`.
fn edge_model(from: Point, to: Point, thickness: f64) -> Mat4 {
    let d = to - from;
    let size = Size::new(d.hypot(), thickness);
    let corner = from.midpoint(to) - size.to_vec2() * 0.5;
    model(corner, size, d.atan2().to_degrees(), true)
}
