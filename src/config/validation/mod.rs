//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: implementations for each configuration section
//! - `tests`: test suite for the validators

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
