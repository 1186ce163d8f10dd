// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel grid — the rectangular matrix of packed colour values every
// transform reads from and writes to.

use image::{Rgba, RgbaImage};

use crate::config::ChannelPolicy;
use crate::error::{DarkroomError, Result};
use crate::pixel;

/// A `rows x cols` matrix of packed 0xAARRGGBB pixels, stored row-major.
///
/// Every row has the same length by construction, so indexing with
/// `(row, col)` inside `rows() x cols()` never needs further checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<u32>,
}

impl PixelGrid {
    // -- Construction ---------------------------------------------------------

    /// A grid filled with zero (transparent black) pixels.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; see [`PixelGrid::try_new`].
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// A grid filled with zero pixels, or `ImageTooLarge` when the pixel
    /// count does not fit in `usize`.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = pixel_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            pixels: vec![0; len],
        })
    }

    /// A grid whose pixel at `(row, col)` is `f(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; see
    /// [`PixelGrid::try_from_fn`].
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> u32) -> Self {
        match Self::try_from_fn(rows, cols, f) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible [`PixelGrid::from_fn`]: `ImageTooLarge` instead of a panic.
    pub fn try_from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> u32,
    ) -> Result<Self> {
        let mut pixels = Vec::with_capacity(pixel_len(rows, cols)?);
        for r in 0..rows {
            for c in 0..cols {
                pixels.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a grid from nested rows of packed pixels.
    ///
    /// An empty outer vector yields a 0x0 grid. Rows of differing length
    /// are rejected.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DarkroomError::RaggedRows {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            pixels.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            pixels,
        })
    }

    /// Build an opaque grid from `[red, green, blue]` triples, narrowing
    /// each channel under `policy`.
    pub fn from_channel_rows(rows: &[Vec<[i32; 3]>], policy: ChannelPolicy) -> Result<Self> {
        let packed = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&[r, g, b]| pixel::try_pack_rgb(r, g, b, policy))
                    .collect::<Result<Vec<u32>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(packed)
    }

    /// Copy an `image` crate RGBA buffer into a grid.
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|&Rgba([r, g, b, a])| pixel::pack_rgba(r, g, b, a))
            .collect();
        Self {
            rows: height as usize,
            cols: width as usize,
            pixels,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no pixels (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.pixels[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(row, col)`. Returns `false` (and writes
    /// nothing) outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if row < self.rows && col < self.cols {
            self.pixels[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Borrow one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.pixels[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.rows).map(move |r| &self.pixels[r * self.cols..(r + 1) * self.cols])
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.iter_rows().map(<[u32]>::to_vec).collect()
    }

    /// Copy the grid into an `image` crate RGBA buffer.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let too_large = || DarkroomError::ImageTooLarge {
            rows: self.rows,
            cols: self.cols,
        };
        let width = u32::try_from(self.cols).map_err(|_| too_large())?;
        let height = u32::try_from(self.rows).map_err(|_| too_large())?;
        Ok(RgbaImage::from_fn(width, height, |x, y| {
            let p = self.pixels[y as usize * self.cols + x as usize];
            Rgba([pixel::red(p), pixel::green(p), pixel::blue(p), pixel::alpha(p)])
        }))
    }
}

/// Pixel count of a `rows x cols` grid, checked against overflow.
fn pixel_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(DarkroomError::ImageTooLarge { rows, cols })
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::pack_rgb;

    #[test]
    fn new_grid_is_transparent_black() {
        let grid = PixelGrid::new(2, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn overflowing_dimensions_are_too_large() {
        assert!(matches!(
            PixelGrid::try_new(usize::MAX, 2),
            Err(DarkroomError::ImageTooLarge { rows: usize::MAX, cols: 2 })
        ));
        assert!(matches!(
            PixelGrid::try_from_fn(2, usize::MAX, |_, _| 0),
            Err(DarkroomError::ImageTooLarge { .. })
        ));
        assert_eq!(PixelGrid::try_new(usize::MAX, 0).unwrap().pixel_count(), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds the addressable size")]
    fn new_panics_on_overflowing_dimensions() {
        let _ = PixelGrid::new(usize::MAX, usize::MAX);
    }

    #[test]
    fn from_rows_keeps_row_major_order() {
        let grid = PixelGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.get(0, 2), Some(3));
        assert_eq!(grid.get(1, 0), Some(4));
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = PixelGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        match err {
            DarkroomError::RaggedRows {
                row,
                expected,
                actual,
            } => assert_eq!((row, expected, actual), (1, 2, 1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = PixelGrid::from_rows(Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.rows(), grid.cols()), (0, 0));

        let no_cols = PixelGrid::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert!(no_cols.is_empty());
        assert_eq!((no_cols.rows(), no_cols.cols()), (2, 0));
    }

    #[test]
    fn out_of_range_access_is_none() {
        let mut grid = PixelGrid::new(1, 1);
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(0, 1), None);
        assert!(!grid.set(0, 1, 7));
        assert!(grid.set(0, 0, 7));
        assert_eq!(grid.get(0, 0), Some(7));
        assert!(grid.row(1).is_none());
    }

    #[test]
    fn channel_rows_respect_policy() {
        let rows = vec![vec![[0, 128, 255], [300, 0, 0]]];
        assert!(matches!(
            PixelGrid::from_channel_rows(&rows, ChannelPolicy::Reject),
            Err(DarkroomError::ChannelOutOfRange { value: 300, .. })
        ));

        let clamped = PixelGrid::from_channel_rows(&rows, ChannelPolicy::Clamp).unwrap();
        assert_eq!(clamped.get(0, 0), Some(pack_rgb(0, 128, 255)));
        assert_eq!(clamped.get(0, 1), Some(pack_rgb(255, 0, 0)));
    }

    #[test]
    fn rgba_image_interop_preserves_layout() {
        let grid = PixelGrid::from_fn(2, 3, |r, c| pixel::pack_rgba(r as u8, c as u8, 9, 100));
        let image = grid.to_rgba_image().unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [1, 2, 9, 100]);
        assert_eq!(PixelGrid::from_rgba_image(&image), grid);
    }
}
