// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render target seam and the uniforms handed across it.

/// Which draw path a quad takes; uploaded as the `u_type` uniform.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DrawMode {
    /// A solid connecting line between a node and its parent.
    Line,
    /// A digit glyph sampled from the procedural digit atlas at `u_offset`.
    AtlasGlyph,
    /// A digit glyph rendered from a font texture.
    FontGlyph,
}

impl DrawMode {
    /// The integer a shader switches on.
    pub const fn code(self) -> i32 {
        match self {
            Self::Line => 0,
            Self::AtlasGlyph => 1,
            Self::FontGlyph => 2,
        }
    }
}

/// Per-draw uniform values for one unit quad.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Uniforms {
    /// `u_model`: maps the unit quad into pixel space, row-major.
    pub model: [f32; 16],
    /// `u_offset`: atlas cell as `[x, y, width, height]` in texture coordinates.
    pub offset: [f32; 4],
    /// `u_color`: RGBA.
    pub color: [f32; 4],
    /// `u_alpha`: overall opacity.
    pub alpha: f32,
    /// `u_type`: draw path.
    pub mode: DrawMode,
    /// The character drawn, for glyph modes. A font-backed target binds this glyph's texture.
    pub glyph: Option<char>,
}

/// The rendering collaborator: whatever owns the window, shaders and textures.
///
/// A frame is a [`set_projection`](Self::set_projection) call, any number of [`draw`](Self::draw)
/// calls, and one [`present`](Self::present). Everything is synchronous.
pub trait RenderTarget {
    /// Bind `u_projection` (row-major) for the draws that follow.
    fn set_projection(&mut self, projection: [f32; 16]);

    /// Draw one unit quad with the given uniforms.
    fn draw(&mut self, uniforms: &Uniforms);

    /// Finish the frame.
    fn present(&mut self);

    /// Whether a shutdown was requested. Polled between frames.
    fn should_close(&self) -> bool {
        false
    }
}

/// Headless target that keeps everything it is handed.
///
/// Useful for tests and for running the frame loop without a window.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    /// Last projection set.
    pub projection: Option<[f32; 16]>,
    /// Draws since the last [`present`](RenderTarget::present).
    pub draws: Vec<Uniforms>,
    /// Draws of the last presented frame.
    pub last_frame: Vec<Uniforms>,
    /// Frames presented so far.
    pub frames: u64,
    /// Request shutdown once this many frames were presented.
    pub close_after: Option<u64>,
}

impl RecordingTarget {
    /// A target that never asks to close.
    pub fn new() -> Self {
        Self::default()
    }

    /// A target that asks to close after `frames` presented frames.
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            ..Self::default()
        }
    }

    /// Draws of the last presented frame with the given mode.
    pub fn last_frame_of(&self, mode: DrawMode) -> impl Iterator<Item = &Uniforms> + '_ {
        self.last_frame.iter().filter(move |u| u.mode == mode)
    }
}

impl RenderTarget for RecordingTarget {
    fn set_projection(&mut self, projection: [f32; 16]) {
        self.projection = Some(projection);
    }

    fn draw(&mut self, uniforms: &Uniforms) {
        self.draws.push(*uniforms);
    }

    fn present(&mut self) {
        self.last_frame = core::mem::take(&mut self.draws);
        self.frames += 1;
    }

    fn should_close(&self) -> bool {
        self.close_after.is_some_and(|n| self.frames >= n)
    }
}
