use crate::cit::cit_scenario_group;
use crate::test_basic::BasicScenario;
use test_scenarios_rust::cli::run_cli_app;
use test_scenarios_rust::scenario::{ScenarioGroup, ScenarioGroupImpl};
use test_scenarios_rust::test_context::TestContext;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cit;
mod helpers;
mod test_basic;

/// All scenario groups, addressed as `basic.*` and `cit.*`.
fn scenario_tree() -> Box<dyn ScenarioGroup> {
    let basic_group = Box::new(ScenarioGroupImpl::new(
        "basic",
        vec![Box::new(BasicScenario)],
        vec![],
    ));
    Box::new(ScenarioGroupImpl::new(
        "root",
        vec![],
        vec![basic_group, cit_scenario_group()],
    ))
}

/// Scenario outputs are JSON lines on stdout, one per sink write.
/// Timestamps and targets are left out so outputs compare verbatim.
fn init_tracing_subscriber() -> Result<(), String> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("failed to set tracing subscriber: {e}"))
}

/// Library diagnostics (`TLOG` target) go to stderr through `env_logger`.
fn init_logging() {
    #[cfg(feature = "env_logger")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<(), String> {
    let raw_arguments: Vec<String> = std::env::args().collect();
    init_logging();
    init_tracing_subscriber()?;

    let test_context = TestContext::new(scenario_tree());
    run_cli_app(&raw_arguments, &test_context)
}
