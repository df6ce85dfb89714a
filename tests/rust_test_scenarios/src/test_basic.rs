use crate::helpers::error_code_to_string;
use crate::helpers::logger_instance::logger_instance;
use crate::helpers::logger_parameters::LoggerParameters;
use test_scenarios_rust::scenario::Scenario;

pub struct BasicScenario;

/// Single colored info line from a logger instance.
impl Scenario for BasicScenario {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        // Print and parse parameters.
        eprintln!("{input}");
        let params = LoggerParameters::from_json(input).expect("Failed to parse parameters");

        // Create logger.
        let logger = logger_instance(&params).map_err(error_code_to_string)?;

        // Simple info.
        logger.log_info("example_message");

        Ok(())
    }
}
