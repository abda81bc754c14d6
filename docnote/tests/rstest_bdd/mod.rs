//! `rstest-bdd` behaviour suite for `docnote`.
//!
//! Fixtures hold per-scenario state, step definitions drive the cascade
//! resolver and group ordering, and the scenarios module binds the
//! `.feature` files to both.

mod fixtures;
mod scenarios;
mod steps;
