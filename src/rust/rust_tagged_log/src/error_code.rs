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

/// Configuration error codes.
///
/// Logging calls themselves never fail; these are returned only while
/// setting up sinks, build modes and configuration.
#[derive(Debug, PartialEq)]
pub enum ErrorCode {
    /// Error that was not yet mapped
    UnmappedError,

    /// File not found
    FileNotFound,

    /// Config file read error
    ConfigFileReadError,

    /// JSON parser error
    JsonParserError,

    /// Config document has unexpected shape
    InvalidConfig(String),

    /// Unknown category name
    InvalidCategory(String),

    /// Unknown build mode name
    InvalidBuildMode(String),

    /// Unknown markup name
    InvalidMarkup(String),

    /// Sink name not registered
    UnknownSink,

    /// Sink name already registered
    SinkAlreadyRegistered,

    /// Sink parameters rejected by factory
    InvalidSinkParameters,

    /// Key not found
    KeyNotFound,

    /// Mutex failed
    MutexLockFailed,
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorCode::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            ErrorCode::InvalidCategory(name) => write!(f, "invalid category: {name}"),
            ErrorCode::InvalidBuildMode(name) => write!(f, "invalid build mode: {name}"),
            ErrorCode::InvalidMarkup(name) => write!(f, "invalid markup: {name}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(cause: std::io::Error) -> Self {
        let kind = cause.kind();
        match kind {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::PermissionDenied => {
                ErrorCode::ConfigFileReadError
            }
            _ => {
                eprintln!("error: unmapped error: {kind}");
                ErrorCode::UnmappedError
            }
        }
    }
}

impl From<tinyjson::JsonParseError> for ErrorCode {
    fn from(cause: tinyjson::JsonParseError) -> Self {
        eprintln!(
            "error: JSON parser error: line = {}, column = {}",
            cause.line(),
            cause.column()
        );
        ErrorCode::JsonParserError
    }
}
