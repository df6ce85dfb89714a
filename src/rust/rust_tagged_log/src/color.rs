// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
use core::fmt;

/// Color with floating point channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Precomputed 8-bit color encoding.
///
/// Displays as uppercase `RRGGBBAA` hex, the form embedded into rich text
/// markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorCode {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Convert a `[0, 1]` channel to `[0, 255]`, clamping out of range values.
fn channel_to_u8(channel: f32) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Rgba> for ColorCode {
    fn from(color: Rgba) -> Self {
        Self {
            r: channel_to_u8(color.r),
            g: channel_to_u8(color.g),
            b: channel_to_u8(color.b),
            a: channel_to_u8(color.a),
        }
    }
}

impl ColorCode {
    /// Hex representation, `RRGGBBAA`.
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
