// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless frame loop.
//!
//! Build a tree from the command line, run the scene against a recording target, and log what
//! each frame drew. Set `RUST_LOG` or pass `--verbose` for per-frame and per-label output.
//!
//! Run:
//! - `cargo run -p understory_demos --example tree_view_headless -- 5 3 2 4 7 6 8`
//! - `cargo run -p understory_demos --example tree_view_headless -- --strategy width --frames 10 -v`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kurbo::Size;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use understory_bst::BinaryTree;
use understory_tree_layout::{AngleLine, HalvingOffset, LayoutStrategy, SubtreeWidth};
use understory_tree_view::{
    DrawMode, GlyphSource, InitializationError, RecordingTarget, SceneConfig, TreeScene,
};

const DEFAULT_VALUES: [f64; 7] = [5.0, 3.0, 2.0, 4.0, 7.0, 6.0, 8.0];

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Strategy {
    /// Children at a horizontal offset that halves per level.
    Halving,
    /// Edges at a fixed angle from the vertical.
    Angle,
    /// One column per node in in-order.
    Width,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,
    /// Layout strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Halving)]
    strategy: Strategy,
    /// Horizontal spacing in pixels; the strategy's default when omitted.
    #[arg(long, value_parser = parse_spacing)]
    spacing: Option<f64>,
    /// Frames to render before stopping.
    #[arg(long, default_value_t = 3)]
    frames: u64,
    /// Draw labels from this font instead of the digit atlas.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Log each frame.
    #[arg(short, long)]
    verbose: bool,
    /// Values to insert, in order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

fn parse_spacing(arg: &str) -> Result<f64, String> {
    let spacing: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if spacing.is_finite() && spacing > 0.0 {
        Ok(spacing)
    } else {
        Err(format!("spacing must be a positive number of pixels, got {arg}"))
    }
}

impl Cli {
    fn layout(&self) -> LayoutStrategy {
        match self.strategy {
            Strategy::Halving => {
                let base = HalvingOffset::default();
                HalvingOffset {
                    spacing: self.spacing.unwrap_or(base.spacing),
                    ..base
                }
                .into()
            }
            Strategy::Angle => {
                let base = AngleLine::default();
                AngleLine {
                    spacing: self.spacing.unwrap_or(base.spacing),
                    ..base
                }
                .into()
            }
            Strategy::Width => {
                let base = SubtreeWidth::default();
                SubtreeWidth {
                    spacing: self.spacing.unwrap_or(base.spacing),
                    ..base
                }
                .into()
            }
        }
    }

    fn config(&self) -> SceneConfig {
        SceneConfig {
            viewport: Size::new(self.width, self.height),
            glyphs: self
                .font
                .clone()
                .map_or(GlyphSource::ProceduralAtlas, |path| GlyphSource::Font { path }),
            ..SceneConfig::default()
        }
    }
}

fn main() -> Result<(), InitializationError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let values: &[f64] = if cli.values.is_empty() {
        &DEFAULT_VALUES
    } else {
        &cli.values
    };
    let tree: BinaryTree<f64> = values.iter().copied().collect();

    let mut scene = TreeScene::new(tree, cli.layout(), cli.config()).inspect_err(|e| {
        error!(%e, "could not set up the scene");
    })?;
    let mut target = RecordingTarget::closing_after(cli.frames);
    let frames = scene.run(&mut target, None);

    info!(
        frames,
        lines = target.last_frame_of(DrawMode::Line).count(),
        glyphs = target.last_frame.len() - target.last_frame_of(DrawMode::Line).count(),
        "done"
    );
    for record in scene.records() {
        let at = scene.screen_position(record);
        info!(value = record.value, x = at.x, y = at.y, depth = record.depth, "node");
    }
    Ok(())
}
