//! Error types produced while constructing docnote configuration.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::DocnoteError;

#[cfg(test)]
mod tests;
