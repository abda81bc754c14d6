//! Test helpers shared across crates in the docnote workspace.
//!
//! [`nodes`] builds configs and symbol chains from JSON literals, and
//! [`figment`] wraps `figment::Jail` for tests that read `docnote.toml` or
//! `DOCNOTE_*` variables.

pub mod figment;
pub mod nodes;
