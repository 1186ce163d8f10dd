// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Darkroom.

use thiserror::Error;

use crate::pixel::Channel;

/// Top-level error type for all Darkroom operations.
#[derive(Debug, Error)]
pub enum DarkroomError {
    // -- Geometry --
    #[error(
        "crop region out of bounds: {width}x{height} at ({x}, {y}) does not fit in a {cols}x{rows} image"
    )]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        cols: usize,
        rows: usize,
    },

    #[error("{operation} requires a non-empty image")]
    EmptyImage { operation: &'static str },

    // -- Pixel data --
    #[error("{channel} channel out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange { channel: Channel, value: i32 },

    #[error("ragged pixel grid: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("image of {cols}x{rows} pixels exceeds the addressable size")]
    ImageTooLarge { rows: usize, cols: usize },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DarkroomError>;
