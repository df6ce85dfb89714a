use crate::helpers::error_code_to_string;
use crate::helpers::logger_instance::{emit, logger_instance};
use crate::helpers::logger_parameters::LoggerParameters;
use test_scenarios_rust::scenario::{Scenario, ScenarioGroup, ScenarioGroupImpl};

/// Emit all configured messages, output depends on `mode` parameter.
struct MessagesByMode;

impl Scenario for MessagesByMode {
    fn name(&self) -> &str {
        "messages_by_mode"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = LoggerParameters::from_json(input).expect("Failed to parse parameters");
        let logger = logger_instance(&params).map_err(error_code_to_string)?;

        for message in &params.messages {
            emit(&logger, message)?;
        }

        Ok(())
    }
}

/// Emit every configured message twice, no deduplication expected.
struct RepeatedMessages;

impl Scenario for RepeatedMessages {
    fn name(&self) -> &str {
        "repeated_messages"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = LoggerParameters::from_json(input).expect("Failed to parse parameters");
        let logger = logger_instance(&params).map_err(error_code_to_string)?;

        for message in &params.messages {
            emit(&logger, message)?;
            emit(&logger, message)?;
        }

        Ok(())
    }
}

pub fn gating_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "gating",
        vec![Box::new(MessagesByMode), Box::new(RepeatedMessages)],
        vec![],
    ))
}
