// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Darkroom — Pixel grid, packed colour helpers, configuration, and error
// definitions shared by the transform crates.

pub mod config;
pub mod error;
pub mod grid;
pub mod human_errors;
pub mod pixel;

pub use config::{BlurBorder, ChannelPolicy, TransformConfig};
pub use error::{DarkroomError, Result};
pub use grid::PixelGrid;
pub use pixel::Channel;
