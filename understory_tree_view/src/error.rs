// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup failures.

use std::path::PathBuf;

use understory_tree_layout::InvalidParameter;

/// Something the scene or a render target needs could not be set up.
///
/// All of these are fatal: report them before entering the frame loop rather than continuing with
/// a missing resource.
#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    /// The configured font file does not exist or cannot be read.
    #[error("font not found at {}", path.display())]
    MissingFont {
        /// Path that was tried.
        path: PathBuf,
    },
    /// The window or its graphics context could not be created.
    #[error("window creation failed: {reason}")]
    Window {
        /// Platform diagnostic.
        reason: String,
    },
    /// A shader stage failed to compile or the program failed to link.
    #[error("{stage} shader failed to compile: {log}")]
    Shader {
        /// Which stage, for example `"vertex"`.
        stage: &'static str,
        /// Compiler info log.
        log: String,
    },
    /// A texture or glyph atlas could not be loaded.
    #[error("texture load failed: {reason}")]
    Texture {
        /// Loader diagnostic.
        reason: String,
    },
    /// The viewport has a zero, negative or non-finite dimension.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
    /// The layout strategy has a parameter it cannot place nodes with.
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] InvalidParameter),
}
