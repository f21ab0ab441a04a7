//! Error types for graph construction and state decoding

use crate::core::types::SkillId;
use thiserror::Error;

/// Fatal errors raised while building a skill graph from a definition
///
/// Construction aborts entirely on the first error; no partially-built
/// graph is ever returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Duplicate skill id: {0:?}")]
    DuplicateId(SkillId),

    #[error("Skill ids must be positive")]
    InvalidId,

    #[error("Skill {0:?} has a max_points of 0")]
    InvalidMaxPoints(SkillId),

    #[error("Skill {id:?} starts with {points} points but allows at most {max_points}")]
    PointsExceedMax {
        id: SkillId,
        points: u32,
        max_points: u32,
    },

    #[error("Skill {dependent:?} depends on unknown skill {dependency:?}")]
    UnknownDependency {
        dependent: SkillId,
        dependency: SkillId,
    },

    #[error("Skill {0:?} depends on itself")]
    SelfDependency(SkillId),

    #[error("Linking {dependent:?} -> {dependency:?} would create a cycle")]
    CyclicDependency {
        dependent: SkillId,
        dependency: SkillId,
    },

    #[error("numPortraits must be at least 1")]
    InvalidPortraitCount,

    #[error("Unsupported definition format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON definition error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML definition error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Non-fatal errors raised while decoding a persisted state token
///
/// A failed decode leaves live state untouched; the caller falls back
/// to defaults.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Malformed state payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DuplicateId(SkillId(3));
        assert!(err.to_string().contains("Duplicate"));

        let err = ConfigError::CyclicDependency {
            dependent: SkillId(1),
            dependency: SkillId(2),
        };
        assert!(err.to_string().contains("cycle"));

        let err = ConfigError::UnknownDependency {
            dependent: SkillId(1),
            dependency: SkillId(9),
        };
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_decode_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = DecodeError::from(json_err);
        assert!(err.to_string().contains("Malformed"));
    }
}
