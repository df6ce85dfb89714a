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
//! Example for basic operations.
//! - Creating loggers with `TaggedLogger::new` and `TaggedLoggerBuilder`.
//! - Leveled logging: `log_info`, `log_warning`, `log_error`.
//! - Free functions without an instance and build mode gating.

use rust_tagged_log::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), ErrorCode> {
    // Print everything to stdout/stderr with ANSI colors.
    set_default_sink(Arc::new(StdoutSink::default()));
    set_build_mode(BuildMode::Development);

    {
        println!("-> instance usage");
        let matchmaker = TaggedLogger::new("Matchmaker", Category::Network);
        matchmaker.log_info("connected");
        matchmaker.log_warning("high latency");
        matchmaker.log_error("connection lost");
        tlog_info!(matchmaker, "{} players in lobby", 4);
    }

    {
        println!("-> builder usage, rich text markup");
        let sink = MemorySink::new();
        let store = TaggedLoggerBuilder::new("Store")
            .category(Category::Ads)
            .sink(Arc::new(sink.clone()))
            .build()?;
        store.log_info("catalog loaded");
        for record in sink.records() {
            println!("{}: {}", record.channel, record.line);
        }
    }

    {
        println!("-> free functions");
        log_error_global("Store", "purchase failed");
    }

    {
        println!("-> production mode, nothing printed below");
        set_build_mode(BuildMode::Production);
        log_error_global("Store", "purchase failed");
        TaggedLogger::new("Hud", Category::Ui).log_info("hidden");
    }

    Ok(())
}
