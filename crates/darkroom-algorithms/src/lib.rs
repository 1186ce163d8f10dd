// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// darkroom-algorithms — Stateless pixel transforms for the Darkroom editor.
//
// Provides geometric transforms (rotate left/right, horizontal flip, crop),
// colour transforms (negative, green-screen keying), a 3x3 blur, and
// luminosity histogram equalization. Every operation borrows its source
// grid and returns a freshly allocated one.

pub mod blur;
pub mod color;
pub mod equalize;
pub mod geometry;
pub mod transforms;

// Re-export the entry points so callers can use `darkroom_algorithms::rotate_left` etc.
pub use blur::{blur, blur_with};
pub use color::{green_screen, green_screen_with_ratio, negative};
pub use equalize::{equalize, luminosity};
pub use geometry::{crop, flip_horizontal, rotate_left, rotate_right};
pub use transforms::{PixelTransforms, Transform};
