//! Core types and configuration for hoist.
//!
//! This crate defines the `hoist.toml` schema ([`HoistConfig`]), the
//! registry naming scheme ([`ImageReferences`]), the ordered deploy
//! [`Step`]s, and shared error types.

pub mod config;
pub mod error;
pub mod reference;
pub mod step;

pub use config::{AwsConfig, ConfigOverrides, FunctionConfig, HoistConfig, ImageConfig};
pub use error::{Error, Result};
pub use reference::{ImageReferences, LOCAL_TAG};
pub use step::Step;
