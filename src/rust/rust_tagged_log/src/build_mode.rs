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
use crate::error_code::ErrorCode;
use crate::log::{debug, warn};
use core::fmt;
use core::str::FromStr;
use core::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted when the process-wide mode was never set.
pub const MODE_ENV_VAR: &str = "TAGGED_LOG_MODE";

/// Kind of build the process runs in.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// End-user build, all output suppressed.
    Production = 0,

    /// Build flagged for development diagnostics.
    Development = 1,

    /// Running inside an interactive editor.
    Editor = 2,
}

impl BuildMode {
    /// Output is permitted in this mode.
    pub fn is_development(self) -> bool {
        match self {
            BuildMode::Production => false,
            BuildMode::Development | BuildMode::Editor => true,
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
            BuildMode::Editor => "editor",
        }
    }

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(BuildMode::Production),
            1 => Some(BuildMode::Development),
            2 => Some(BuildMode::Editor),
            _ => None,
        }
    }

    /// Mode implied by the compilation profile.
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildMode {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "release" => Ok(BuildMode::Production),
            "development" | "dev" | "debug" => Ok(BuildMode::Development),
            "editor" => Ok(BuildMode::Editor),
            _ => Err(ErrorCode::InvalidBuildMode(s.to_string())),
        }
    }
}

/// Predicate deciding whether output is permitted.
/// Queried on every logging call.
pub trait Environment: Send + Sync {
    /// Current build mode.
    fn build_mode(&self) -> BuildMode;

    /// Output is permitted.
    fn is_development(&self) -> bool {
        self.build_mode().is_development()
    }
}

/// Environment with a fixed mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticEnvironment(pub BuildMode);

impl Environment for StaticEnvironment {
    fn build_mode(&self) -> BuildMode {
        self.0
    }
}

/// Environment backed by the process-wide mode (see [`set_build_mode`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn build_mode(&self) -> BuildMode {
        build_mode()
    }
}

const MODE_UNSET: u8 = u8::MAX;

/// Process-wide build mode.
static BUILD_MODE: AtomicU8 = AtomicU8::new(MODE_UNSET);

/// Resolve initial mode from [`MODE_ENV_VAR`] value or build profile.
fn initial_build_mode(env_value: Option<String>) -> BuildMode {
    match env_value {
        Some(value) => match value.parse() {
            Ok(mode) => mode,
            Err(_) => {
                warn!("ignoring invalid {MODE_ENV_VAR} value: {value:?}");
                BuildMode::from_build_profile()
            }
        },
        None => BuildMode::from_build_profile(),
    }
}

/// Set the process-wide build mode.
pub fn set_build_mode(mode: BuildMode) {
    BUILD_MODE.store(mode as u8, Ordering::Relaxed);
    debug!("build mode set to {mode}");
}

/// Get the process-wide build mode.
///
/// If it was never set, it is resolved once from [`MODE_ENV_VAR`] and the
/// build profile.
pub fn build_mode() -> BuildMode {
    if let Some(mode) = BuildMode::from_u8(BUILD_MODE.load(Ordering::Relaxed)) {
        return mode;
    }

    let mode = initial_build_mode(std::env::var(MODE_ENV_VAR).ok());
    match BUILD_MODE.compare_exchange(
        MODE_UNSET,
        mode as u8,
        Ordering::Relaxed,
        Ordering::Relaxed,
    ) {
        Ok(_) => mode,
        // Another thread won the race, use its value.
        Err(current) => BuildMode::from_u8(current).unwrap_or(mode),
    }
}

#[cfg(test)]
pub(crate) fn clear_build_mode() {
    BUILD_MODE.store(MODE_UNSET, Ordering::Relaxed);
}

#[cfg(test)]
mod build_mode_tests {
    use crate::build_mode::{
        build_mode, initial_build_mode, set_build_mode, BuildMode, Environment,
        ProcessEnvironment, StaticEnvironment, MODE_ENV_VAR,
    };
    use crate::error_code::ErrorCode;
    use crate::test_utils::lock_and_reset;

    #[test]
    fn test_is_development() {
        assert!(!BuildMode::Production.is_development());
        assert!(BuildMode::Development.is_development());
        assert!(BuildMode::Editor.is_development());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("release".parse::<BuildMode>(), Ok(BuildMode::Production));
        assert_eq!("Dev".parse::<BuildMode>(), Ok(BuildMode::Development));
        assert_eq!(" editor ".parse::<BuildMode>(), Ok(BuildMode::Editor));
        assert!("staging"
            .parse::<BuildMode>()
            .is_err_and(|e| e == ErrorCode::InvalidBuildMode("staging".to_string())));
    }

    #[test]
    fn test_static_environment() {
        assert!(!StaticEnvironment(BuildMode::Production).is_development());
        assert!(StaticEnvironment(BuildMode::Editor).is_development());
    }

    #[test]
    fn test_set_build_mode() {
        let _lock = lock_and_reset();

        set_build_mode(BuildMode::Production);
        assert_eq!(build_mode(), BuildMode::Production);
        assert!(!ProcessEnvironment.is_development());

        set_build_mode(BuildMode::Editor);
        assert_eq!(build_mode(), BuildMode::Editor);
        assert!(ProcessEnvironment.is_development());
    }

    #[test]
    fn test_initial_from_env_value() {
        assert_eq!(initial_build_mode(Some("editor".to_string())), BuildMode::Editor);
        assert_eq!(
            initial_build_mode(Some("Production".to_string())),
            BuildMode::Production
        );
    }

    #[test]
    fn test_initial_invalid_env_value() {
        assert_eq!(
            initial_build_mode(Some("staging".to_string())),
            BuildMode::from_build_profile()
        );
    }

    #[test]
    fn test_initial_without_env_value() {
        assert_eq!(initial_build_mode(None), BuildMode::from_build_profile());
    }

    #[test]
    fn test_unset_resolved_once() {
        let _lock = lock_and_reset();

        let expected = initial_build_mode(std::env::var(MODE_ENV_VAR).ok());
        assert_eq!(build_mode(), expected);
        assert_eq!(build_mode(), expected);
    }
}
