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

//! Tagged, leveled console logging for development builds.
//!
//! Every message is prefixed with `[name]`. Informational messages are
//! colored by the logger's [`Category`](category::Category) using the inline
//! markup of the target sink. Nothing is written in production builds.
//!
//! ```
//! use rust_tagged_log::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = TaggedLoggerBuilder::new("Matchmaker")
//!     .category(Category::Network)
//!     .sink(Arc::new(sink.clone()))
//!     .build_mode(BuildMode::Development)
//!     .build()?;
//!
//! logger.log_info("connected");
//! assert_eq!(
//!     sink.lines(Channel::Info),
//!     vec!["[Matchmaker] <color=#3F80F2FF>connected</color>".to_string()]
//! );
//! # Ok::<(), ErrorCode>(())
//! ```

pub mod build_mode;
pub mod category;
pub mod color;
pub mod config;
pub mod error_code;
pub mod format;
mod log;
#[cfg(feature = "logging")]
pub mod log_sink;
mod macros;
pub mod memory_sink;
pub mod sink;
pub mod sink_registry;
pub mod stdout_sink;
pub mod tagged_logger;
pub mod tagged_logger_builder;
#[cfg(test)]
mod test_utils;

pub mod prelude {
    pub use crate::build_mode::{
        build_mode, set_build_mode, BuildMode, Environment, ProcessEnvironment, StaticEnvironment,
        MODE_ENV_VAR,
    };
    pub use crate::category::Category;
    pub use crate::color::{ColorCode, Rgba};
    pub use crate::config::LoggerConfig;
    pub use crate::error_code::ErrorCode;
    pub use crate::format::{format_line, Markup};
    #[cfg(feature = "logging")]
    pub use crate::log_sink::LogSink;
    pub use crate::memory_sink::{MemorySink, SinkRecord};
    pub use crate::sink::{
        default_sink, set_default_sink, Channel, ConsoleSink, ConsoleSinkFactory, SinkParameters,
    };
    pub use crate::sink_registry::SinkRegistry;
    pub use crate::stdout_sink::StdoutSink;
    pub use crate::tagged_logger::{
        log_error_global, log_info_global, log_warning_global, TaggedLogger,
    };
    pub use crate::tagged_logger_builder::TaggedLoggerBuilder;
    pub use crate::{tlog_error, tlog_info, tlog_warn};
}
