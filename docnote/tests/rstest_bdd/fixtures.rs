//! Shared fixtures for the behaviour scenarios.

use docnote::{ChildGroups, Stackables};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

/// Nodes of the chain under test, nearest first, and the resolved mapping.
#[derive(Debug, Default, ScenarioState)]
pub struct CascadeState {
    pub nodes: Slot<Vec<Value>>,
    pub resolved: Slot<Stackables>,
}

/// Declared child groups and the outcome of ordering children by them.
#[derive(Debug, Default, ScenarioState)]
pub struct GroupState {
    pub groups: Slot<ChildGroups>,
    pub ordered: Slot<Vec<String>>,
    pub unmatched: Slot<Vec<String>>,
}

/// Creates an empty chain for each scenario.
#[fixture]
pub fn cascade_state() -> CascadeState {
    CascadeState::default()
}

/// Creates empty group state for each scenario.
#[fixture]
pub fn group_state() -> GroupState {
    GroupState::default()
}
