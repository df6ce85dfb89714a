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
use crate::color::Rgba;
use crate::error_code::ErrorCode;
use core::fmt;
use core::str::FromStr;

/// Subsystem a message belongs to.
/// Selects the display color of informational messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Networking, matchmaking, transport.
    Network,

    /// User interface.
    Ui,

    /// User experience flows.
    Ux,

    /// Game rules and simulation.
    GameLogic,

    /// Data loading and persistence.
    Data,

    /// Advertisement integration.
    Ads,

    /// Firebase integration.
    Firebase,

    /// Everything else.
    #[default]
    Other,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Network,
        Category::Ui,
        Category::Ux,
        Category::GameLogic,
        Category::Data,
        Category::Ads,
        Category::Firebase,
        Category::Other,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Network => "network",
            Category::Ui => "ui",
            Category::Ux => "ux",
            Category::GameLogic => "game_logic",
            Category::Data => "data",
            Category::Ads => "ads",
            Category::Firebase => "firebase",
            Category::Other => "other",
        }
    }

    /// Display color of the category.
    pub fn color(self) -> Rgba {
        match self {
            Category::Network => Rgba::new(0.247, 0.5, 0.95, 1.0),
            Category::Ui => Rgba::new(1.0, 0.9, 0.2, 1.0),
            Category::Ux => Rgba::new(0.4, 0.9, 0.8, 1.0),
            Category::GameLogic => Rgba::new(1.0, 0.6, 0.2, 1.0),
            Category::Data => Rgba::new(0.8, 0.4, 0.9, 1.0),
            Category::Ads => Rgba::new(0.95, 0.35, 0.55, 1.0),
            Category::Firebase => Rgba::new(0.2, 0.8, 0.3, 1.0),
            Category::Other => Rgba::new(0.7, 0.7, 0.7, 1.0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "network" => Ok(Category::Network),
            // `ui_ux` was a single category in older call sites.
            "ui" | "ui_ux" => Ok(Category::Ui),
            "ux" => Ok(Category::Ux),
            "game_logic" | "gamelogic" => Ok(Category::GameLogic),
            "data" => Ok(Category::Data),
            "ads" => Ok(Category::Ads),
            "firebase" => Ok(Category::Firebase),
            "other" => Ok(Category::Other),
            _ => Err(ErrorCode::InvalidCategory(s.to_string())),
        }
    }
}
