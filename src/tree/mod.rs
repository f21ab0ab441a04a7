//! Skill tree facade: public operations, character state, notification
//!
//! Single-threaded and synchronous: every operation runs to completion
//! before the next external trigger. Mutation is push-then-notify; one
//! event per committed mutation, emitted only after state is fully
//! applied. Mutation re-entered from inside notification delivery is
//! refused.

pub mod character;
pub mod events;

pub use character::{CharacterState, DEFAULT_AVATAR_NAME};
pub use events::{ChangeEvent, ChangeKind, Listener, NodeSnapshot};

use crate::codec::{self, BuildState, SkillAllocation};
use crate::core::error::{ConfigError, DecodeError};
use crate::core::types::SkillId;
use crate::graph::{SkillGraph, TreeDefinition};
use crate::grouping;
use crate::rules;
use crate::stats;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Owner of a skill graph, its character state, and the listener
/// registry; the engine's entire context, no ambient globals
pub struct SkillTree {
    graph: SkillGraph,
    character: CharacterState,
    default_stats: BTreeMap<String, f32>,
    points_per_level: u32,
    listeners: Vec<Listener>,
    /// Set while listeners run; mutations observed true refuse to apply
    notifying: bool,
}

impl SkillTree {
    /// Build the graph and pair it with a fresh character
    pub fn from_definition(definition: &TreeDefinition) -> Result<Self, ConfigError> {
        if definition.num_portraits == 0 {
            return Err(ConfigError::InvalidPortraitCount);
        }
        let graph = SkillGraph::build(definition)?;
        Ok(Self {
            graph,
            character: CharacterState::new(definition.num_portraits),
            default_stats: definition.default_stats.clone(),
            points_per_level: definition.points_per_level,
            listeners: Vec::new(),
            notifying: false,
        })
    }

    pub fn graph(&self) -> &SkillGraph {
        &self.graph
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    /// Register a listener for committed mutations
    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Spend one point on a skill; `false` when refused (routine)
    pub fn add_point(&mut self, id: SkillId) -> bool {
        if self.notifying {
            return false;
        }
        if !rules::add_point(&mut self.graph, id) {
            return false;
        }
        debug!(?id, "point added");
        self.notify(ChangeKind::PointsChanged);
        true
    }

    /// Refund one point from a skill; `false` when refused (routine)
    pub fn remove_point(&mut self, id: SkillId) -> bool {
        if self.notifying {
            return false;
        }
        if !rules::remove_point(&mut self.graph, id) {
            return false;
        }
        debug!(?id, "point removed");
        self.notify(ChangeKind::PointsChanged);
        true
    }

    pub fn can_add_point(&self, id: SkillId) -> bool {
        rules::can_add_point(&self.graph, id)
    }

    pub fn can_remove_point(&self, id: SkillId) -> bool {
        rules::can_remove_point(&self.graph, id)
    }

    /// Full current state, skills ordered by ascending id
    pub fn get_state(&self) -> BuildState {
        let mut skills: Vec<SkillAllocation> = self
            .graph
            .nodes()
            .map(|n| SkillAllocation {
                id: n.id,
                points: n.points(),
            })
            .collect();
        skills.sort_unstable_by_key(|s| s.id);
        BuildState {
            skills,
            portrait_index: Some(self.character.portrait),
            avatar_name: Some(self.character.avatar_name.clone()),
        }
    }

    /// Encode the current state into a shareable token
    pub fn share_code(&self) -> String {
        codec::encode(&self.get_state())
    }

    /// Apply a decoded state to the live tree
    ///
    /// Unknown skill ids are ignored; decoded points are clamped into
    /// `0..=max_points` and portraits into `1..=num_portraits`; absent
    /// optional fields leave live values untouched. Idempotent: applying
    /// an already-applied state changes nothing and emits nothing.
    /// Returns whether anything changed.
    pub fn set_state(&mut self, state: &BuildState) -> bool {
        if self.notifying {
            return false;
        }
        let mut changed = false;

        for alloc in &state.skills {
            let Some(node) = self.graph.get_mut(alloc.id) else {
                warn!(id = ?alloc.id, "ignoring unknown skill in restored state");
                continue;
            };
            let points = alloc.points.min(node.max_points);
            if node.points() != points {
                node.set_points(points);
                changed = true;
            }
        }

        if let Some(portrait) = state.portrait_index {
            let portrait = portrait.clamp(1, self.character.num_portraits);
            if self.character.portrait != portrait {
                self.character.portrait = portrait;
                changed = true;
            }
        }

        if let Some(name) = &state.avatar_name {
            if &self.character.avatar_name != name {
                self.character.avatar_name = name.clone();
                changed = true;
            }
        }

        if changed {
            self.notify(ChangeKind::StateRestored);
        }
        changed
    }

    /// Decode a token and apply it; live state is untouched on failure
    pub fn restore(&mut self, token: &str) -> Result<bool, DecodeError> {
        let state = codec::decode(token)?;
        Ok(self.set_state(&state))
    }

    pub fn compute_stats(&self) -> BTreeMap<String, f32> {
        stats::compute_stats(&self.graph, &self.default_stats)
    }

    pub fn compute_talents(&self) -> Vec<String> {
        stats::compute_talents(&self.graph)
    }

    pub fn total_points(&self) -> u32 {
        stats::total_points(&self.graph)
    }

    pub fn level(&self) -> u32 {
        stats::level_for(self.total_points(), self.points_per_level)
    }

    pub fn group_into_trees(&self) -> Vec<Vec<SkillId>> {
        grouping::group_into_trees(&self.graph)
    }

    /// Cycle the portrait forward; returns the new selection
    pub fn next_portrait(&mut self) -> u32 {
        if self.notifying {
            return self.character.portrait;
        }
        let next = codec::next_portrait(self.character.portrait, self.character.num_portraits);
        if next != self.character.portrait {
            self.character.portrait = next;
            self.notify(ChangeKind::PortraitChanged);
        }
        self.character.portrait
    }

    /// Cycle the portrait backward; returns the new selection
    pub fn previous_portrait(&mut self) -> u32 {
        if self.notifying {
            return self.character.portrait;
        }
        let previous =
            codec::previous_portrait(self.character.portrait, self.character.num_portraits);
        if previous != self.character.portrait {
            self.character.portrait = previous;
            self.notify(ChangeKind::PortraitChanged);
        }
        self.character.portrait
    }

    /// Rename the avatar; `false` when the name is unchanged
    pub fn set_avatar_name(&mut self, name: impl Into<String>) -> bool {
        if self.notifying {
            return false;
        }
        let name = name.into();
        if self.character.avatar_name == name {
            return false;
        }
        self.character.avatar_name = name;
        self.notify(ChangeKind::NameChanged);
        true
    }

    /// Dispatch one event; state is fully applied before this runs
    fn notify(&mut self, kind: ChangeKind) {
        let event = ChangeEvent {
            kind,
            nodes: self
                .graph
                .nodes()
                .map(|n| NodeSnapshot {
                    id: n.id,
                    points: n.points(),
                    max_points: n.max_points,
                })
                .collect(),
            character: self.character.clone(),
            share_code: self.share_code(),
        };

        self.notifying = true;
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(&event);
        }
        // Listeners subscribed during dispatch land in self.listeners;
        // keep registration order stable.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
        self.notifying = false;
    }
}

impl std::fmt::Debug for SkillTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillTree")
            .field("graph", &self.graph)
            .field("character", &self.character)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
