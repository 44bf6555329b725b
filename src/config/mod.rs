//! Configuration model for sqlprompt.
//!
//! This module defines the [`Config`] struct that represents `sqlprompt.yaml`
//! and the [`Credentials`] read from the process environment. Unknown YAML
//! fields are ignored and every field has a default, so the config file is
//! optional.

mod credentials;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use credentials::Credentials;
pub use model::Config;
