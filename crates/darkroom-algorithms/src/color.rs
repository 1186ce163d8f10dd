// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour transforms — negative and green-screen keying.

use darkroom_core::pixel::{self, TRANSPARENT};
use darkroom_core::PixelGrid;
use tracing::{debug, instrument};

/// Default keying ratio: green must exceed twice the larger of red and blue.
pub const GREEN_SCREEN_RATIO: u32 = 2;

/// Invert every colour channel (`v -> 255 - v`). Alpha is left alone.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn negative(source: &PixelGrid) -> PixelGrid {
    let cols = source.cols();
    let pixels = source.pixels();
    let inverted = PixelGrid::from_fn(source.rows(), cols, |r, c| {
        let p = pixels[r * cols + c];
        pixel::pack_rgba(
            255 - pixel::red(p),
            255 - pixel::green(p),
            255 - pixel::blue(p),
            pixel::alpha(p),
        )
    });
    debug!(pixels = inverted.pixel_count(), "Negative applied");
    inverted
}

/// Key out green backdrop pixels with the default ratio.
///
/// See [`green_screen_with_ratio`].
pub fn green_screen(source: &PixelGrid) -> PixelGrid {
    green_screen_with_ratio(source, GREEN_SCREEN_RATIO)
}

/// Make a pixel fully transparent when `green > ratio * max(red, blue)`.
///
/// The mask is binary: keyed pixels keep their colour and only lose alpha,
/// everything else is copied unchanged.
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn green_screen_with_ratio(source: &PixelGrid, ratio: u32) -> PixelGrid {
    let cols = source.cols();
    let pixels = source.pixels();
    let mut keyed = 0usize;
    let output = PixelGrid::from_fn(source.rows(), cols, |r, c| {
        let p = pixels[r * cols + c];
        let bigger = u32::from(pixel::red(p).max(pixel::blue(p)));
        if u32::from(pixel::green(p)) > ratio.saturating_mul(bigger) {
            keyed += 1;
            pixel::with_alpha(p, TRANSPARENT)
        } else {
            p
        }
    });
    debug!(keyed, "Green screen applied");
    output
}

// -- Tests --------------------------------------------------------------------
