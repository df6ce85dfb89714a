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
use crate::color::ColorCode;
use crate::error_code::ErrorCode;
use core::fmt;
use core::str::FromStr;

/// Inline color syntax accepted by a sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Markup {
    /// `<color=#RRGGBBAA>text</color>`
    #[default]
    RichText,

    /// 24-bit ANSI foreground escape sequence.
    Ansi,

    /// No color.
    Plain,
}

impl Markup {
    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Markup::RichText => "rich_text",
            Markup::Ansi => "ansi",
            Markup::Plain => "plain",
        }
    }

    /// Wrap `text` in `color` using this syntax.
    pub fn colorize(self, text: &str, color: &ColorCode) -> String {
        match self {
            Markup::RichText => format!("<color=#{color}>{text}</color>"),
            Markup::Ansi => format!(
                "\x1b[38;2;{};{};{}m{text}\x1b[0m",
                color.r, color.g, color.b
            ),
            Markup::Plain => text.to_string(),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Markup {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich_text" | "richtext" | "rich" => Ok(Markup::RichText),
            "ansi" => Ok(Markup::Ansi),
            "plain" | "none" => Ok(Markup::Plain),
            _ => Err(ErrorCode::InvalidMarkup(s.to_string())),
        }
    }
}

/// Format a console line: `[name] message`, with `message` wrapped in
/// `color` when one is given.
pub fn format_line(name: &str, message: &str, color: Option<&ColorCode>, markup: Markup) -> String {
    match color {
        Some(color) => format!("[{name}] {}", markup.colorize(message, color)),
        None => format!("[{name}] {message}"),
    }
}
