//! Core type definitions used throughout the crate

use serde::{Deserialize, Serialize};

/// Unique identifier for skill nodes, assigned by the definition
///
/// Ids are positive; zero is rejected at build time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SkillId(pub u32);

impl SkillId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
