// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 box blur with a divide-by-ten normaliser.

use darkroom_core::pixel;
use darkroom_core::{BlurBorder, PixelGrid, TransformConfig};
use tracing::{debug, instrument};

/// Blur with the default settings: divisor 10, black border.
pub fn blur(source: &PixelGrid) -> PixelGrid {
    blur_with(source, &TransformConfig::default())
}

/// Average each interior pixel with its eight neighbours.
///
/// Every channel is summed over the 3x3 neighbourhood and integer-divided
/// by `config.blur_divisor`, saturating at 255. The result is opaque.
/// Only pixels with a full neighbourhood are convolved; the outer frame is
/// either left zero or copied from the source depending on
/// `config.blur_border`. The divisor must be non-zero (see
/// [`TransformConfig::validate`]); zero is treated as one.
#[instrument(skip(source, config), fields(rows = source.rows(), cols = source.cols(), divisor = config.blur_divisor))]
pub fn blur_with(source: &PixelGrid, config: &TransformConfig) -> PixelGrid {
    let (rows, cols) = (source.rows(), source.cols());
    let divisor = config.blur_divisor.max(1);
    let pixels = source.pixels();

    let mut output = match config.blur_border {
        BlurBorder::Black => PixelGrid::new(rows, cols),
        BlurBorder::Preserve => source.clone(),
    };

    if rows < 3 || cols < 3 {
        debug!("No interior pixels to blur");
        return output;
    }

    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            let (mut red, mut green, mut blue) = (0u32, 0u32, 0u32);
            for nr in r - 1..=r + 1 {
                for &p in &pixels[nr * cols + c - 1..=nr * cols + c + 1] {
                    red += u32::from(pixel::red(p));
                    green += u32::from(pixel::green(p));
                    blue += u32::from(pixel::blue(p));
                }
            }
            let scale = |sum: u32| (sum / divisor).min(255) as u8;
            output.set(r, c, pixel::pack_rgb(scale(red), scale(green), scale(blue)));
        }
    }

    debug!(interior = (rows - 2) * (cols - 2), "Blur complete");
    output
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use darkroom_core::pixel::pack_rgb;

    fn uniform(rows: usize, cols: usize, value: u8) -> PixelGrid {
        PixelGrid::from_fn(rows, cols, |_, _| pack_rgb(value, value, value))
    }

    #[test]
    fn uniform_three_by_three_truncates_nine_tenths() {
        let blurred = blur(&uniform(3, 3, 100));
        assert_eq!(blurred.get(1, 1), Some(pack_rgb(90, 90, 90)));

        let bright = blur(&uniform(3, 3, 255));
        // 9 * 255 / 10 = 229.5, truncated.
        assert_eq!(bright.get(1, 1), Some(pack_rgb(229, 229, 229)));
    }

    #[test]
    fn border_is_black_by_default() {
        let blurred = blur(&uniform(4, 5, 200));
        for r in 0..4 {
            for c in 0..5 {
                let interior = r > 0 && r < 3 && c > 0 && c < 4;
                let p = blurred.get(r, c).unwrap();
                if interior {
                    assert_eq!(p, pack_rgb(180, 180, 180));
                } else {
                    assert_eq!(p, 0, "border pixel ({r}, {c}) should be zero");
                }
            }
        }
    }

    #[test]
    fn border_can_be_preserved() {
        let source = uniform(3, 4, 50);
        let config = TransformConfig {
            blur_border: BlurBorder::Preserve,
            ..TransformConfig::default()
        };
        let blurred = blur_with(&source, &config);
        assert_eq!(blurred.get(0, 0), source.get(0, 0));
        assert_eq!(blurred.get(2, 3), source.get(2, 3));
        assert_eq!(blurred.get(1, 1), Some(pack_rgb(45, 45, 45)));
    }

    #[test]
    fn each_pixel_starts_from_fresh_sums() {
        // A single bright pixel in the middle of a 3x5 strip: both
        // neighbouring interior pixels see exactly one bright sample.
        let mut source = uniform(3, 5, 0);
        source.set(1, 2, pack_rgb(200, 100, 50));
        let blurred = blur(&source);

        assert_eq!(blurred.get(1, 1), Some(pack_rgb(20, 10, 5)));
        assert_eq!(blurred.get(1, 2), Some(pack_rgb(20, 10, 5)));
        assert_eq!(blurred.get(1, 3), Some(pack_rgb(20, 10, 5)));
    }

    #[test]
    fn channels_are_summed_independently() {
        let source = PixelGrid::from_fn(3, 3, |r, _| match r {
            0 => pack_rgb(10, 0, 0),
            1 => pack_rgb(0, 20, 0),
            _ => pack_rgb(0, 0, 30),
        });
        // Each row contributes three samples of its channel.
        assert_eq!(blur(&source).get(1, 1), Some(pack_rgb(3, 6, 9)));
    }

    #[test]
    fn small_divisor_saturates() {
        let config = TransformConfig {
            blur_divisor: 1,
            ..TransformConfig::default()
        };
        let blurred = blur_with(&uniform(3, 3, 100), &config);
        assert_eq!(blurred.get(1, 1), Some(pack_rgb(255, 255, 255)));
    }

    #[test]
    fn tiny_images_have_no_interior() {
        for (rows, cols) in [(0, 0), (1, 1), (2, 5), (5, 2)] {
            let blurred = blur(&uniform(rows, cols, 77));
            assert_eq!((blurred.rows(), blurred.cols()), (rows, cols));
            assert!(blurred.pixels().iter().all(|&p| p == 0));
        }
    }
}
