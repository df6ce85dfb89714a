use crate::helpers::logger_instance::emit_global;
use crate::helpers::logger_parameters::LoggerParameters;
use crate::helpers::tracing_sink::TracingSink;
use rust_tagged_log::prelude::{set_build_mode, set_default_sink};
use std::sync::Arc;
use test_scenarios_rust::scenario::{Scenario, ScenarioGroup, ScenarioGroupImpl};

/// Emit configured messages using free functions and process-wide state.
struct GlobalMessages;

impl Scenario for GlobalMessages {
    fn name(&self) -> &str {
        "global_messages"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = LoggerParameters::from_json(input).expect("Failed to parse parameters");

        set_default_sink(Arc::new(TracingSink));
        if let Some(mode) = params.mode {
            set_build_mode(mode);
        }

        for message in &params.messages {
            emit_global(&params.name, message)?;
        }

        Ok(())
    }
}

pub fn global_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "global",
        vec![Box::new(GlobalMessages)],
        vec![],
    ))
}
