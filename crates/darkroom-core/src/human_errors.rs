// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the darkroom front end.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so menu handlers can show a dialog without matching on the enum.

use crate::error::DarkroomError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (pick another region, load a picture first).
    ActionRequired,
    /// Retrying will not help; the input or setup itself is broken.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `DarkroomError` into a `HumanError`.
pub fn humanize_error(err: &DarkroomError) -> HumanError {
    match err {
        DarkroomError::OutOfBounds {
            width,
            height,
            cols,
            rows,
            ..
        } => HumanError {
            message: "The selected area goes past the edge of the picture.".into(),
            suggestion: format!(
                "Select an area that fits inside the {cols}x{rows} picture. (Selection: {width}x{height})"
            ),
            severity: Severity::ActionRequired,
        },

        DarkroomError::EmptyImage { .. } => HumanError {
            message: "There is no picture to work on.".into(),
            suggestion: "Load a picture first, then try again.".into(),
            severity: Severity::ActionRequired,
        },

        DarkroomError::ChannelOutOfRange { channel, value } => HumanError {
            message: "This picture contains colours we can't handle.".into(),
            suggestion: format!(
                "A {channel} value of {value} is outside 0 to 255. Try re-saving the picture as a standard 8-bit image."
            ),
            severity: Severity::Permanent,
        },

        DarkroomError::RaggedRows { .. } | DarkroomError::ImageTooLarge { .. } => HumanError {
            message: "This picture appears to be damaged.".into(),
            suggestion: "Try opening a different copy of the picture.".into(),
            severity: Severity::Permanent,
        },

        DarkroomError::InvalidConfig(detail) => HumanError {
            message: "The darkroom settings aren't valid.".into(),
            suggestion: format!("Check your settings and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        DarkroomError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "The file may be damaged. Delete it to go back to the default settings.".into(),
            severity: Severity::Permanent,
        },
    }
}
