//! Binds the `docnote` feature files to the step registry.

use crate::fixtures::{CascadeState, GroupState, cascade_state, group_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/cascade.feature",
    fixtures = [cascade_state: CascadeState, group_state: GroupState]
);
