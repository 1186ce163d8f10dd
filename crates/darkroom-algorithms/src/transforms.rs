// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PixelTransforms — the single entry point a front end wires its menu
// items to. Every operation reads an immutable grid and returns a new one.

use darkroom_core::error::Result;
use darkroom_core::{PixelGrid, TransformConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{blur, color, equalize, geometry};

/// A named pixel operation, serializable so actions can be recorded and
/// replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    Negative,
    GreenScreen,
    Blur,
    /// Region with top-left corner at column `x`, row `y`.
    Crop {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    Equalize,
}

impl Transform {
    /// Stable short name, suitable for menus and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RotateLeft => "rotate_left",
            Self::RotateRight => "rotate_right",
            Self::FlipHorizontal => "flip_horizontal",
            Self::Negative => "negative",
            Self::GreenScreen => "green_screen",
            Self::Blur => "blur",
            Self::Crop { .. } => "crop",
            Self::Equalize => "equalize",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crop {
                x,
                y,
                width,
                height,
            } => write!(f, "crop {width}x{height} at ({x}, {y})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Stateless facade over the individual transforms.
///
/// Holds only configuration; it never caches pixels, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct PixelTransforms {
    config: TransformConfig,
}

impl PixelTransforms {
    // -- Construction ---------------------------------------------------------

    /// Create a facade after checking `config`.
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a facade from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            config: TransformConfig::from_json(json)?,
        })
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    // -- Input ----------------------------------------------------------------

    /// Build an opaque grid from wide `[red, green, blue]` triples, applying
    /// the configured channel policy to values outside `0..=255`.
    #[instrument(skip_all, fields(rows = rows.len(), policy = ?self.config.channel_policy))]
    pub fn grid_from_channels(&self, rows: &[Vec<[i32; 3]>]) -> Result<PixelGrid> {
        let grid = PixelGrid::from_channel_rows(rows, self.config.channel_policy)?;
        debug!(cols = grid.cols(), "Grid built from channel values");
        Ok(grid)
    }

    // -- Operations -----------------------------------------------------------

    pub fn rotate_left(&self, source: &PixelGrid) -> PixelGrid {
        geometry::rotate_left(source)
    }

    pub fn rotate_right(&self, source: &PixelGrid) -> PixelGrid {
        geometry::rotate_right(source)
    }

    pub fn flip_horizontal(&self, source: &PixelGrid) -> PixelGrid {
        geometry::flip_horizontal(source)
    }

    pub fn negative(&self, source: &PixelGrid) -> PixelGrid {
        color::negative(source)
    }

    pub fn green_screen(&self, source: &PixelGrid) -> PixelGrid {
        color::green_screen_with_ratio(source, self.config.green_screen_ratio)
    }

    pub fn blur(&self, source: &PixelGrid) -> PixelGrid {
        blur::blur_with(source, &self.config)
    }

    pub fn crop(
        &self,
        source: &PixelGrid,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<PixelGrid> {
        geometry::crop(source, x, y, width, height)
    }

    pub fn equalize(&self, source: &PixelGrid) -> Result<PixelGrid> {
        equalize::equalize(source)
    }

    // -- Dispatch -------------------------------------------------------------

    /// Run one named transform.
    #[instrument(skip(self, source), fields(op = transform.name()))]
    pub fn apply(&self, transform: &Transform, source: &PixelGrid) -> Result<PixelGrid> {
        let output = match *transform {
            Transform::RotateLeft => self.rotate_left(source),
            Transform::RotateRight => self.rotate_right(source),
            Transform::FlipHorizontal => self.flip_horizontal(source),
            Transform::Negative => self.negative(source),
            Transform::GreenScreen => self.green_screen(source),
            Transform::Blur => self.blur(source),
            Transform::Crop {
                x,
                y,
                width,
                height,
            } => self.crop(source, x, y, width, height)?,
            Transform::Equalize => self.equalize(source)?,
        };
        debug!(rows = output.rows(), cols = output.cols(), "Transform applied");
        Ok(output)
    }

    /// Run `transforms` in order, feeding each output into the next.
    ///
    /// Stops at the first failure; the source is never modified, so the
    /// caller still holds the last good image.
    #[instrument(skip_all, fields(steps = transforms.len()))]
    pub fn apply_all(&self, transforms: &[Transform], source: &PixelGrid) -> Result<PixelGrid> {
        info!("Running transform sequence");
        let mut current = source.clone();
        for transform in transforms {
            current = self.apply(transform, &current)?;
        }
        Ok(current)
    }
}

// -- Tests --------------------------------------------------------------------
