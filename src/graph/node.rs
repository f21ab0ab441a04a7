//! A single allocatable skill node

use crate::core::error::ConfigError;
use crate::core::types::SkillId;
use crate::graph::definition::SkillDefinition;

/// Bonus a skill grants to a named stat, scaled by allocated points
#[derive(Debug, Clone, PartialEq)]
pub struct StatBonus {
    pub name: String,
    pub weight: f32,
}

/// An allocatable unit in the skill graph
///
/// Points move only through the allocation rules; the invariant
/// `0 <= points <= max_points` holds at all times. Neighbor links are
/// id references into the owning graph, never ownership.
#[derive(Debug, Clone)]
pub struct SkillNode {
    pub id: SkillId,
    pub title: String,
    pub description: String,
    pub max_points: u32,
    pub icon: String,
    points: u32,
    /// Direct prerequisites, in definition order
    dependencies: Vec<SkillId>,
    /// Inverse of `dependencies`, maintained by the graph; lookup only
    dependents: Vec<SkillId>,
    stats: Vec<StatBonus>,
    talents: Vec<String>,
    rank_descriptions: Vec<String>,
}

impl SkillNode {
    /// Instantiate a node from its definition entry
    ///
    /// Dependency edges are resolved later, in the graph's second pass.
    pub fn from_definition(def: &SkillDefinition) -> Result<Self, ConfigError> {
        if def.id.0 == 0 {
            return Err(ConfigError::InvalidId);
        }
        if def.max_points == 0 {
            return Err(ConfigError::InvalidMaxPoints(def.id));
        }
        if def.points > def.max_points {
            return Err(ConfigError::PointsExceedMax {
                id: def.id,
                points: def.points,
                max_points: def.max_points,
            });
        }

        Ok(Self {
            id: def.id,
            title: def.title.clone(),
            description: def.description.clone(),
            max_points: def.max_points,
            icon: def.icon.clone(),
            points: def.points,
            dependencies: Vec::new(),
            dependents: Vec::new(),
            stats: def
                .stats
                .iter()
                .map(|s| StatBonus {
                    name: s.title.clone(),
                    weight: s.value,
                })
                .collect(),
            talents: def.talents.clone(),
            rank_descriptions: def.rank_descriptions.clone(),
        })
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Set points directly; caller is responsible for staying within
    /// `0..=max_points` (allocation rules and state restore both clamp)
    pub(crate) fn set_points(&mut self, points: u32) {
        debug_assert!(points <= self.max_points);
        self.points = points;
    }

    pub fn dependencies(&self) -> &[SkillId] {
        &self.dependencies
    }

    pub fn dependents(&self) -> &[SkillId] {
        &self.dependents
    }

    /// Record a direct prerequisite; no-op when already present
    pub(crate) fn push_dependency(&mut self, dependency: SkillId) {
        if !self.dependencies.contains(&dependency) {
            self.dependencies.push(dependency);
        }
    }

    /// Record an inverse back-reference; no-op when already present
    pub(crate) fn push_dependent(&mut self, dependent: SkillId) {
        if !self.dependents.contains(&dependent) {
            self.dependents.push(dependent);
        }
    }

    pub fn stats(&self) -> &[StatBonus] {
        &self.stats
    }

    pub fn talents(&self) -> &[String] {
        &self.talents
    }

    pub fn has_points(&self) -> bool {
        self.points > 0
    }

    pub fn has_max_points(&self) -> bool {
        self.points >= self.max_points
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Description of the rank the current points have unlocked
    pub fn current_rank_description(&self) -> &str {
        if self.points == 0 {
            return "";
        }
        self.rank_descriptions
            .get(self.points as usize - 1)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Description of the rank the next point would unlock
    pub fn next_rank_description(&self) -> &str {
        self.rank_descriptions
            .get(self.points as usize)
            .map(String::as_str)
            .unwrap_or("")
    }
}
