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

//! Command line front end: emit a single tagged message, or list categories.

use rust_tagged_log::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

const HELP: &str = "\
tlog_tool - emit a tagged log message

USAGE:
  tlog_tool [OPTIONS] --message <TEXT>
  tlog_tool --list-categories

OPTIONS:
  -n, --name <NAME>          Logger name [default: tlog_tool]
  -c, --category <CATEGORY>  Message category, instance logging only [default: other]
  -l, --level <LEVEL>        info | warning | error [default: info]
  -m, --message <TEXT>       Message text
      --mode <MODE>          production | development | editor
      --sink <NAME>          Registered sink name, replaces config sink [default: stdout]
      --markup <MARKUP>      rich_text | ansi | plain, applied to config sink if any
      --config <FILE>        JSON config file, options above override it
      --global               Use free functions instead of a logger instance
                             (uncolored, cannot be combined with --category)
      --list-categories      Print category names and colors
  -h, --help                 Print help
";

/// Message level.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Level {
    Info,
    Warning,
    Error,
}

impl core::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(format!("invalid level: {s}")),
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
struct Arguments {
    name: String,
    category: Option<Category>,
    level: Level,
    message: Option<String>,
    mode: Option<BuildMode>,
    sink: Option<String>,
    markup: Option<Markup>,
    config: Option<PathBuf>,
    global: bool,
    list_categories: bool,
}

fn to_message<E: core::fmt::Display>(e: E) -> String {
    e.to_string()
}

/// Parse arguments, `None` if help was requested.
fn parse_arguments(mut pargs: pico_args::Arguments) -> Result<Option<Arguments>, String> {
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let arguments = Arguments {
        global: pargs.contains("--global"),
        list_categories: pargs.contains("--list-categories"),
        name: pargs
            .opt_value_from_str(["-n", "--name"])
            .map_err(to_message)?
            .unwrap_or_else(|| "tlog_tool".to_string()),
        category: pargs
            .opt_value_from_str(["-c", "--category"])
            .map_err(to_message)?,
        level: pargs
            .opt_value_from_str(["-l", "--level"])
            .map_err(to_message)?
            .unwrap_or(Level::Info),
        message: pargs
            .opt_value_from_str(["-m", "--message"])
            .map_err(to_message)?,
        mode: pargs.opt_value_from_str("--mode").map_err(to_message)?,
        sink: pargs.opt_value_from_str("--sink").map_err(to_message)?,
        markup: pargs.opt_value_from_str("--markup").map_err(to_message)?,
        config: pargs.opt_value_from_str("--config").map_err(to_message)?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    // Free functions are never colored.
    if arguments.global && arguments.category.is_some() {
        return Err("--category cannot be combined with --global".to_string());
    }

    Ok(Some(arguments))
}

/// `log` backend for the `log` sink and the library's own diagnostics.
fn init_logging() {
    #[cfg(feature = "env_logger")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn list_categories(out: &mut dyn Write) -> std::io::Result<()> {
    for category in Category::ALL {
        writeln!(out, "{:<12} {}", category.name(), ColorCode::from(category.color()))?;
    }
    Ok(())
}

/// Config file merged with command line overrides.
///
/// `--sink` replaces the configured sink, `--markup` is added to whichever
/// sink is in effect (`stdout` if none is configured).
fn effective_config(arguments: &Arguments) -> Result<LoggerConfig, ErrorCode> {
    let mut config = match &arguments.config {
        Some(path) => LoggerConfig::from_file(path)?,
        None => LoggerConfig::default(),
    };

    if let Some(name) = &arguments.sink {
        config.sink = Some(SinkParameters::from([("name".to_string(), name.clone())]));
    }
    if let Some(markup) = arguments.markup {
        config
            .sink
            .get_or_insert_with(|| {
                SinkParameters::from([("name".to_string(), "stdout".to_string())])
            })
            .insert("markup".to_string(), markup.name().to_string());
    }
    if let Some(mode) = arguments.mode {
        config.mode = Some(mode);
    }

    Ok(config)
}

fn emit(arguments: &Arguments, message: &str) {
    if arguments.global {
        match arguments.level {
            Level::Info => log_info_global(&arguments.name, message),
            Level::Warning => log_warning_global(&arguments.name, message),
            Level::Error => log_error_global(&arguments.name, message),
        }
    } else {
        let category = arguments.category.unwrap_or_default();
        let logger = TaggedLogger::new(arguments.name.clone(), category);
        match arguments.level {
            Level::Info => logger.log_info(message),
            Level::Warning => logger.log_warning(message),
            Level::Error => logger.log_error(message),
        }
    }
}

/// Execute parsed command line.
///
/// `base_sink` is the default sink unless config or options select another.
fn run(
    arguments: &Arguments,
    base_sink: Arc<dyn ConsoleSink>,
    out: &mut dyn Write,
) -> Result<(), String> {
    if arguments.list_categories {
        return list_categories(out).map_err(to_message);
    }

    let message = arguments
        .message
        .as_deref()
        .ok_or_else(|| "missing --message".to_string())?;

    let config = effective_config(arguments).map_err(to_message)?;
    set_default_sink(base_sink);
    config.apply().map_err(to_message)?;

    log::debug!("emitting {:?} message in {} mode", arguments.level, build_mode());
    emit(arguments, message);
    Ok(())
}

fn main() -> Result<(), String> {
    init_logging();

    match parse_arguments(pico_args::Arguments::from_env())? {
        Some(arguments) => run(
            &arguments,
            Arc::new(StdoutSink::default()),
            &mut std::io::stdout().lock(),
        ),
        None => Ok(()),
    }
}
