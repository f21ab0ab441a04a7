//! Change notification emitted after each committed mutation

use crate::core::types::SkillId;
use crate::tree::character::CharacterState;

/// Which mutation produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    PointsChanged,
    StateRestored,
    PortraitChanged,
    NameChanged,
}

/// Read-only view of one node at event time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub id: SkillId,
    pub points: u32,
    pub max_points: u32,
}

/// Snapshot delivered to listeners once the mutation is fully applied
///
/// Consumers only read; the live tree is never reachable from here.
/// `share_code` is the freshly encoded state token, so persistence
/// layers can store it without calling back into the tree.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub nodes: Vec<NodeSnapshot>,
    pub character: CharacterState,
    pub share_code: String,
}

/// Listener callback registered on a tree
pub type Listener = Box<dyn FnMut(&ChangeEvent)>;
