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
use crate::build_mode::{set_build_mode, BuildMode};
use crate::error_code::ErrorCode;
use crate::log::{info, warn};
use crate::sink::{set_default_sink, SinkParameters};
use crate::sink_registry::SinkRegistry;
use tinyjson::JsonValue;

// Example of a config document:
// {
//   "mode": "development",
//   "sink": { "name": "stdout", "markup": "ansi" }
// }
//
// `"sink": "stdout"` is a shorthand for `{ "name": "stdout" }`.

/// Process-wide logger configuration, applied once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoggerConfig {
    /// Build mode, left unchanged if not set.
    pub mode: Option<BuildMode>,

    /// Default sink parameters, left unchanged if not set.
    pub sink: Option<SinkParameters>,
}

fn parse_mode(value: JsonValue) -> Result<Option<BuildMode>, ErrorCode> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(mode) => Ok(Some(mode.parse()?)),
        _ => Err(ErrorCode::InvalidConfig("`mode` must be a string".to_string())),
    }
}

fn parse_sink(value: JsonValue) -> Result<Option<SinkParameters>, ErrorCode> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(name) => Ok(Some(SinkParameters::from([("name".to_string(), name)]))),
        JsonValue::Object(object) => {
            let mut parameters = SinkParameters::new();
            for (key, value) in object {
                match value {
                    JsonValue::String(value) => {
                        parameters.insert(key, value);
                    }
                    _ => {
                        return Err(ErrorCode::InvalidConfig(format!(
                            "`sink.{key}` must be a string"
                        )))
                    }
                }
            }
            Ok(Some(parameters))
        }
        _ => Err(ErrorCode::InvalidConfig(
            "`sink` must be a string or an object".to_string(),
        )),
    }
}

impl LoggerConfig {
    /// Parse config from JSON document.
    ///
    /// # Return Values
    ///   * Ok: parsed config
    ///   * `ErrorCode::JsonParserError`: malformed JSON
    ///   * `ErrorCode::InvalidConfig`: unexpected document shape
    ///   * `ErrorCode::InvalidBuildMode`: unknown `mode` value
    pub fn from_json(s: &str) -> Result<Self, ErrorCode> {
        let value: JsonValue = s.parse()?;
        let mut root = match value {
            JsonValue::Object(root) => root,
            _ => {
                return Err(ErrorCode::InvalidConfig(
                    "config root must be an object".to_string(),
                ))
            }
        };

        let mode = match root.remove("mode") {
            Some(value) => parse_mode(value)?,
            None => None,
        };
        let sink = match root.remove("sink") {
            Some(value) => parse_sink(value)?,
            None => None,
        };

        for key in root.keys() {
            warn!("ignoring unknown config key: {key}");
        }

        Ok(Self { mode, sink })
    }

    /// Read and parse config file.
    ///
    /// # Return Values
    ///   * Ok: parsed config
    ///   * `ErrorCode::FileNotFound`: config file not found
    ///   * `ErrorCode::ConfigFileReadError`: config file not readable
    ///   * errors of [`LoggerConfig::from_json`]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ErrorCode> {
        let json_str = std::fs::read_to_string(path)?;
        Self::from_json(&json_str)
    }

    /// Install configured default sink and build mode.
    /// On error nothing is changed.
    pub fn apply(&self) -> Result<(), ErrorCode> {
        let sink = match &self.sink {
            Some(parameters) => Some(SinkRegistry::create(parameters)?),
            None => None,
        };

        if let Some(sink) = sink {
            set_default_sink(sink);
        }
        if let Some(mode) = self.mode {
            set_build_mode(mode);
        }

        info!("logger config applied: {:?}", self);
        Ok(())
    }
}
