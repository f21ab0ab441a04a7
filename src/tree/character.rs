//! Character identity state paired with a skill graph

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Display name used until the user picks one
pub const DEFAULT_AVATAR_NAME: &str = "Your Name";

/// Name and portrait selection for the character behind a build
///
/// Created with defaults at tree construction and mutated only through
/// the facade. `portrait` is 1-indexed and stays within
/// `1..=num_portraits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    pub avatar_name: String,
    pub portrait: u32,
    pub num_portraits: u32,
}

impl CharacterState {
    /// Fresh character with a randomly rolled portrait
    pub fn new(num_portraits: u32) -> Self {
        let num_portraits = num_portraits.max(1);
        let portrait = rand::thread_rng().gen_range(1..=num_portraits);
        Self {
            avatar_name: DEFAULT_AVATAR_NAME.to_string(),
            portrait,
            num_portraits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rolls_portrait_in_range() {
        for _ in 0..50 {
            let state = CharacterState::new(4);
            assert!((1..=4).contains(&state.portrait));
        }
    }

    #[test]
    fn test_single_portrait_always_one() {
        let state = CharacterState::new(1);
        assert_eq!(state.portrait, 1);
        assert_eq!(state.avatar_name, DEFAULT_AVATAR_NAME);
    }

    #[test]
    fn test_zero_portraits_clamped_to_one() {
        let state = CharacterState::new(0);
        assert_eq!(state.num_portraits, 1);
        assert_eq!(state.portrait, 1);
    }
}
