// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Luminosity histogram equalization.
//
// The pipeline has three stages: bin every pixel by luminosity, take the
// running sum of the bins, then remap each pixel to
// `255 * cumulative[luminosity] / total_pixels` as an opaque grey.

use darkroom_core::error::{DarkroomError, Result};
use darkroom_core::pixel;
use darkroom_core::PixelGrid;
use tracing::{debug, info, instrument};

/// Number of luminosity levels.
pub const LEVELS: usize = 256;

/// Pixel counts indexed by luminosity level.
type Histogram = [u64; LEVELS];

/// Perceptual luminosity of an RGB triple, `round(0.299 r + 0.587 g + 0.114 b)`.
///
/// The weights sum to one, so the result is always in `0..=255` and a grey
/// pixel `(v, v, v)` has luminosity `v`.
#[inline]
pub fn luminosity(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = 299 * u32::from(red) + 587 * u32::from(green) + 114 * u32::from(blue);
    ((weighted + 500) / 1000) as u8
}

#[inline]
fn pixel_luminosity(p: u32) -> u8 {
    luminosity(pixel::red(p), pixel::green(p), pixel::blue(p))
}

/// Spread the luminosity levels of `source` across the full range.
///
/// The output is always greyscale, opaque, and the same size as the
/// source. An image with no pixels has no distribution to equalize and
/// fails with [`DarkroomError::EmptyImage`].
#[instrument(skip(source), fields(rows = source.rows(), cols = source.cols()))]
pub fn equalize(source: &PixelGrid) -> Result<PixelGrid> {
    if source.is_empty() {
        return Err(DarkroomError::EmptyImage {
            operation: "equalize",
        });
    }

    let histogram = compute_luminosity_histogram(source);
    let cumulative = compute_cumulative_luminosity_histogram(&histogram);
    let occupied = histogram.iter().filter(|&&count| count > 0).count();
    info!(occupied, "Equalizing luminosity");

    Ok(enhanced_image(&cumulative, source))
}

fn compute_luminosity_histogram(source: &PixelGrid) -> Histogram {
    let mut histogram = [0u64; LEVELS];
    for &p in source.pixels() {
        histogram[usize::from(pixel_luminosity(p))] += 1;
    }
    histogram
}

fn compute_cumulative_luminosity_histogram(histogram: &Histogram) -> Histogram {
    let mut cumulative = [0u64; LEVELS];
    let mut running = 0u64;
    for (slot, &count) in cumulative.iter_mut().zip(histogram) {
        running += count;
        *slot = running;
    }
    cumulative
}

/// Remap every pixel through the cumulative histogram. `source` must be
/// non-empty.
fn enhanced_image(cumulative: &Histogram, source: &PixelGrid) -> PixelGrid {
    let total = source.pixel_count() as u64;
    let cols = source.cols();
    let pixels = source.pixels();

    let output = PixelGrid::from_fn(source.rows(), cols, |r, c| {
        let level = usize::from(pixel_luminosity(pixels[r * cols + c]));
        let grey = (255 * cumulative[level] / total) as u8;
        pixel::pack_rgb(grey, grey, grey)
    });
    debug!(total, "Remapped pixels through cumulative histogram");
    output
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use darkroom_core::pixel::pack_rgb;

    fn grey(v: u8) -> u32 {
        pack_rgb(v, v, v)
    }

    fn is_grey(p: u32) -> bool {
        pixel::red(p) == pixel::green(p) && pixel::green(p) == pixel::blue(p)
    }

    #[test]
    fn luminosity_weights() {
        assert_eq!(luminosity(0, 0, 0), 0);
        assert_eq!(luminosity(255, 255, 255), 255);
        assert_eq!(luminosity(255, 0, 0), 76);
        assert_eq!(luminosity(0, 255, 0), 150);
        assert_eq!(luminosity(0, 0, 255), 29);
        for v in [1u8, 17, 128, 254] {
            assert_eq!(luminosity(v, v, v), v);
        }
    }

    #[test]
    fn histogram_bins_by_exact_level() {
        let source = PixelGrid::from_rows(vec![vec![grey(0), grey(0), grey(255), grey(42)]]).unwrap();
        let histogram = compute_luminosity_histogram(&source);
        assert_eq!(histogram[0], 2);
        assert_eq!(histogram[42], 1);
        assert_eq!(histogram[255], 1);
        assert_eq!(histogram.iter().sum::<u64>(), 4);
    }

    #[test]
    fn cumulative_is_a_prefix_sum() {
        let mut histogram = [0u64; LEVELS];
        histogram[0] = 3;
        histogram[10] = 2;
        histogram[255] = 5;
        let cumulative = compute_cumulative_luminosity_histogram(&histogram);
        assert_eq!(cumulative[0], 3);
        assert_eq!(cumulative[9], 3);
        assert_eq!(cumulative[10], 5);
        assert_eq!(cumulative[254], 5);
        assert_eq!(cumulative[255], 10);
    }

    #[test]
    fn uniform_image_maps_to_white() {
        let source = PixelGrid::from_fn(3, 4, |_, _| pack_rgb(90, 30, 200));
        let equalized = equalize(&source).unwrap();
        assert!(equalized.pixels().iter().all(|&p| p == grey(255)));
    }

    #[test]
    fn checkerboard_splits_to_extremes() {
        let source =
            PixelGrid::from_rows(vec![vec![grey(255), grey(0)], vec![grey(0), grey(255)]]).unwrap();
        let equalized = equalize(&source).unwrap();
        assert_eq!(
            equalized.to_rows(),
            vec![vec![grey(255), grey(127)], vec![grey(127), grey(255)]]
        );
    }

    #[test]
    fn output_is_opaque_grey_of_same_size() {
        let source = PixelGrid::from_fn(4, 6, |r, c| {
            pixel::pack_rgba((r * 60) as u8, (c * 40) as u8, 120, 0)
        });
        let equalized = equalize(&source).unwrap();
        assert_eq!((equalized.rows(), equalized.cols()), (4, 6));
        assert!(equalized.pixels().iter().all(|&p| is_grey(p) && pixel::alpha(p) == 255));
    }

    #[test]
    fn equalizing_twice_is_stable() {
        let source = PixelGrid::from_rows(vec![vec![grey(0), grey(85), grey(170), grey(255)]]).unwrap();
        let once = equalize(&source).unwrap();
        assert_eq!(
            once.to_rows(),
            vec![vec![grey(63), grey(127), grey(191), grey(255)]]
        );
        assert_eq!(equalize(&once).unwrap(), once);
    }

    #[test]
    fn equalization_preserves_brightness_order() {
        let source = PixelGrid::from_fn(1, 8, |_, c| grey((c * 30) as u8));
        let equalized = equalize(&source).unwrap();
        let levels: Vec<u8> = equalized.pixels().iter().map(|&p| pixel::red(p)).collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]), "levels not increasing: {levels:?}");
    }

    #[test]
    fn empty_image_is_rejected() {
        for (rows, cols) in [(0, 0), (3, 0), (0, 3)] {
            let err = equalize(&PixelGrid::new(rows, cols)).unwrap_err();
            assert!(matches!(err, DarkroomError::EmptyImage { operation: "equalize" }));
        }
    }
}
