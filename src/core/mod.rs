//! Shared plumbing: identifiers and error types

pub mod error;
pub mod types;

pub use error::{ConfigError, DecodeError};
pub use types::SkillId;
