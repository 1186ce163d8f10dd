// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Packed colour helpers. A pixel is a `u32` laid out as 0xAARRGGBB.

use serde::{Deserialize, Serialize};

use crate::config::ChannelPolicy;
use crate::error::{DarkroomError, Result};

/// Alpha value of a fully opaque pixel.
pub const OPAQUE: u8 = 0xFF;

/// Alpha value of a fully transparent pixel.
pub const TRANSPARENT: u8 = 0x00;

/// One of the four channels packed into a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Alpha => write!(f, "alpha"),
        }
    }
}

/// Pack an opaque pixel.
#[inline]
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    pack_rgba(red, green, blue, OPAQUE)
}

/// Pack a pixel with an explicit alpha channel.
#[inline]
pub const fn pack_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

#[inline]
pub const fn red(pixel: u32) -> u8 {
    (pixel >> 16) as u8
}

#[inline]
pub const fn green(pixel: u32) -> u8 {
    (pixel >> 8) as u8
}

#[inline]
pub const fn blue(pixel: u32) -> u8 {
    pixel as u8
}

#[inline]
pub const fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

/// Same red/green/blue, replaced alpha.
#[inline]
pub const fn with_alpha(pixel: u32, alpha: u8) -> u32 {
    (pixel & 0x00FF_FFFF) | ((alpha as u32) << 24)
}

/// Narrow a wide channel value to a byte according to `policy`.
///
/// Under [`ChannelPolicy::Reject`] anything outside `0..=255` is an error;
/// under [`ChannelPolicy::Clamp`] it is saturated to the nearest bound.
pub fn checked_channel(channel: Channel, value: i32, policy: ChannelPolicy) -> Result<u8> {
    match u8::try_from(value) {
        Ok(byte) => Ok(byte),
        Err(_) => match policy {
            ChannelPolicy::Reject => Err(DarkroomError::ChannelOutOfRange { channel, value }),
            ChannelPolicy::Clamp => Ok(value.clamp(0, 255) as u8),
        },
    }
}

/// Pack an opaque pixel from wide channel values.
pub fn try_pack_rgb(red: i32, green: i32, blue: i32, policy: ChannelPolicy) -> Result<u32> {
    try_pack_rgba(red, green, blue, i32::from(OPAQUE), policy)
}

/// Pack a pixel from wide channel values, alpha included.
pub fn try_pack_rgba(
    red: i32,
    green: i32,
    blue: i32,
    alpha: i32,
    policy: ChannelPolicy,
) -> Result<u32> {
    Ok(pack_rgba(
        checked_channel(Channel::Red, red, policy)?,
        checked_channel(Channel::Green, green, policy)?,
        checked_channel(Channel::Blue, blue, policy)?,
        checked_channel(Channel::Alpha, alpha, policy)?,
    ))
}

// -- Tests --------------------------------------------------------------------
