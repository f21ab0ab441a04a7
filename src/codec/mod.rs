//! Compact, transport-safe serialization of build + character state
//!
//! A state token is compact JSON run through URL-safe, unpadded base64,
//! so it survives a URL fragment unescaped. Encoding is deterministic
//! for a given logical state (skills ordered by ascending id); decoding
//! is all-or-nothing into a staging [`BuildState`].

use crate::core::error::DecodeError;
use crate::core::types::SkillId;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Point allocation for a single skill in the wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAllocation {
    pub id: SkillId,
    pub points: u32,
}

/// Everything a share token carries
///
/// `portrait_index` and `avatar_name` are optional on the wire; a
/// missing field leaves the corresponding live value unchanged when the
/// state is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildState {
    pub skills: Vec<SkillAllocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_name: Option<String>,
}

/// Serialize a state into an opaque fragment-safe token
pub fn encode(state: &BuildState) -> String {
    // A BuildState has no map keys or fallible Serialize impls, so JSON
    // serialization cannot fail.
    let json = serde_json::to_vec(state).expect("BuildState serializes infallibly");
    URL_SAFE_NO_PAD.encode(json)
}

/// Inverse of [`encode`]; never applies anything to live state
pub fn decode(token: &str) -> Result<BuildState, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Next 1-indexed portrait, wrapping past `num_portraits` back to 1
pub fn next_portrait(current: u32, num_portraits: u32) -> u32 {
    current % num_portraits.max(1) + 1
}

/// Previous 1-indexed portrait, wrapping below 1 to `num_portraits`
pub fn previous_portrait(current: u32, num_portraits: u32) -> u32 {
    if current <= 1 {
        num_portraits.max(1)
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> BuildState {
        BuildState {
            skills: vec![SkillAllocation {
                id: SkillId(1),
                points: 2,
            }],
            portrait_index: Some(1),
            avatar_name: Some("X".to_string()),
        }
    }

    #[test]
    fn test_round_trip_identity() {
        let state = sample_state();
        let token = encode(&state);
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(encode(&sample_state()), encode(&sample_state()));
    }

    #[test]
    fn test_token_is_fragment_safe() {
        let state = BuildState {
            skills: (1..=40)
                .map(|i| SkillAllocation {
                    id: SkillId(i),
                    points: i % 4,
                })
                .collect(),
            portrait_index: Some(7),
            avatar_name: Some("Sigrún of the Vale?&#".to_string()),
        };
        let token = encode(&state);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(decode(&token).unwrap(), state);
    }

    #[test]
    fn test_optional_fields_omitted_and_restored_as_none() {
        let state = BuildState {
            skills: vec![SkillAllocation {
                id: SkillId(3),
                points: 1,
            }],
            portrait_index: None,
            avatar_name: None,
        };
        let token = encode(&state);
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.portrait_index, None);
        assert_eq!(decoded.avatar_name, None);
    }

    #[test]
    fn test_malformed_base64_is_encoding_error() {
        let result = decode("!!!not-base64!!!");
        assert!(matches!(result, Err(DecodeError::Encoding(_))));
    }

    #[test]
    fn test_valid_base64_invalid_payload_is_payload_error() {
        let token = URL_SAFE_NO_PAD.encode(b"{\"skills\": \"nope\"}");
        let result = decode(&token);
        assert!(matches!(result, Err(DecodeError::Payload(_))));
    }

    #[test]
    fn test_portrait_cycling_wraps_both_ways() {
        assert_eq!(next_portrait(1, 3), 2);
        assert_eq!(next_portrait(2, 3), 3);
        assert_eq!(next_portrait(3, 3), 1);

        assert_eq!(previous_portrait(3, 3), 2);
        assert_eq!(previous_portrait(2, 3), 1);
        assert_eq!(previous_portrait(1, 3), 3);
    }

    #[test]
    fn test_portrait_cycling_single_portrait() {
        assert_eq!(next_portrait(1, 1), 1);
        assert_eq!(previous_portrait(1, 1), 1);
    }
}
