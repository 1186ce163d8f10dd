// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric transforms — quarter-turn rotations, horizontal mirroring, and
// rectangular cropping. Pixels are moved verbatim; no channel is touched.

use darkroom_core::error::{DarkroomError, Result};
use darkroom_core::PixelGrid;
use tracing::{debug, instrument};

/// Rotate 90 degrees counterclockwise.
///
/// A `rows x cols` source becomes `cols x rows`; source pixel `(r, c)` lands
/// at `(cols - 1 - c, r)`.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn rotate_left(source: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (source.rows(), source.cols());
    let pixels = source.pixels();
    let rotated = PixelGrid::from_fn(cols, rows, |r, c| pixels[c * cols + (cols - 1 - r)]);
    debug!(new_rows = rotated.rows(), new_cols = rotated.cols(), "Rotated left");
    rotated
}

/// Rotate 90 degrees clockwise.
///
/// Source pixel `(r, c)` lands at `(c, rows - 1 - r)`.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn rotate_right(source: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (source.rows(), source.cols());
    let pixels = source.pixels();
    let rotated = PixelGrid::from_fn(cols, rows, |r, c| pixels[(rows - 1 - c) * cols + r]);
    debug!(new_rows = rotated.rows(), new_cols = rotated.cols(), "Rotated right");
    rotated
}

/// Mirror each row left-to-right. On odd widths the centre column stays put.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn flip_horizontal(source: &PixelGrid) -> PixelGrid {
    let cols = source.cols();
    let pixels = source.pixels();
    let flipped = PixelGrid::from_fn(source.rows(), cols, |r, c| pixels[r * cols + (cols - 1 - c)]);
    debug!(swapped_per_row = cols / 2, "Flipped horizontally");
    flipped
}

/// Extract the `width x height` region whose top-left corner is column `x`,
/// row `y`.
///
/// The region must lie entirely inside the source; anything else fails with
/// [`DarkroomError::OutOfBounds`] before any pixel is copied. A zero-sized
/// region inside the bounds yields an empty grid.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn crop(source: &PixelGrid, x: usize, y: usize, width: usize, height: usize) -> Result<PixelGrid> {
    let (rows, cols) = (source.rows(), source.cols());
    let fits_x = x.checked_add(width).is_some_and(|right| right <= cols);
    let fits_y = y.checked_add(height).is_some_and(|bottom| bottom <= rows);
    if !fits_x || !fits_y {
        return Err(DarkroomError::OutOfBounds {
            x,
            y,
            width,
            height,
            cols,
            rows,
        });
    }

    let pixels = source.pixels();
    let cropped = PixelGrid::from_fn(height, width, |r, c| pixels[(y + r) * cols + (x + c)]);
    debug!(x, y, width, height, "Cropped");
    Ok(cropped)
}

// -- Tests --------------------------------------------------------------------
