//! Console sink forwarding lines to `tracing` test outputs.

use rust_tagged_log::prelude::{ConsoleSink, Markup};
use tracing::info;

/// Sink tracing every line with its channel.
pub struct TracingSink;

impl ConsoleSink for TracingSink {
    fn info(&self, line: &str) {
        info!(channel = "info", line);
    }

    fn warning(&self, line: &str) {
        info!(channel = "warning", line);
    }

    fn error(&self, line: &str) {
        info!(channel = "error", line);
    }

    fn markup(&self) -> Markup {
        Markup::RichText
    }
}
