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

//! Logging module.
//! Diagnostics of this crate itself, forwarded to the `log` crate under the
//! `"TLOG"` target. Compiled out without the `logging` feature.

#![allow(unused_macros)]

pub(crate) const CONTEXT: &str = "TLOG";

/// Proxy for `log::error!`.
#[cfg(feature = "logging")]
macro_rules! error {
    ($($arg:tt)+) => (::log::error!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::warn!`.
#[cfg(feature = "logging")]
macro_rules! warning {
    ($($arg:tt)+) => (::log::warn!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::info!`.
#[cfg(feature = "logging")]
macro_rules! info {
    ($($arg:tt)+) => (::log::info!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::debug!`.
#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)+) => (::log::debug!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::trace!`.
#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)+) => (::log::trace!(target: $crate::log::CONTEXT, $($arg)+));
}

// Without `logging` the arguments are still type-checked, but nothing is emitted.
#[cfg(not(feature = "logging"))]
macro_rules! error {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! warning {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! info {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

// Export macros from this module (e.g., `crate::log::error`).
// `#[macro_export]` would export them from crate (e.g., `crate::error`).
//
// `warning as warn` is due to `warn` macro name conflicting with `warn` attribute.
#[allow(unused_imports)]
pub(crate) use {debug, error, info, trace, warning as warn};
