use crate::cit::categories::categories_group;
use crate::cit::gating::gating_group;
use crate::cit::global::global_group;
use test_scenarios_rust::scenario::{ScenarioGroup, ScenarioGroupImpl};

mod categories;
mod gating;
mod global;

/// Create a group containing scenarios for CITs.
pub fn cit_scenario_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "cit",
        vec![],
        vec![categories_group(), gating_group(), global_group()],
    ))
}
