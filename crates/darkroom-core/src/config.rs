// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DarkroomError, Result};

/// What to do with wide-integer channel values outside `0..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Fail with `ChannelOutOfRange`.
    #[default]
    Reject,
    /// Saturate to the nearest bound.
    Clamp,
}

/// How the blur treats the one-pixel frame it cannot convolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurBorder {
    /// Border pixels stay zero (transparent black).
    #[default]
    Black,
    /// Border pixels are copied from the source.
    Preserve,
}

/// Tunables shared by all pixel transforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Normaliser applied to each 3x3 channel sum (default 10).
    pub blur_divisor: u32,
    /// Border handling for the blur.
    pub blur_border: BlurBorder,
    /// A pixel is keyed out when `green > ratio * max(red, blue)` (default 2).
    pub green_screen_ratio: u32,
    /// Policy for out-of-range channel input.
    pub channel_policy: ChannelPolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            blur_divisor: 10,
            blur_border: BlurBorder::Black,
            green_screen_ratio: 2,
            channel_policy: ChannelPolicy::Reject,
        }
    }
}

impl TransformConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.blur_divisor == 0 {
            return Err(DarkroomError::InvalidConfig(
                "blur_divisor must be at least 1".into(),
            ));
        }
        if self.green_screen_ratio == 0 {
            return Err(DarkroomError::InvalidConfig(
                "green_screen_ratio must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
