//! Skill graph: node ownership, construction, and dependency wiring
//!
//! The graph exclusively owns every node for its lifetime. Construction
//! is two-pass: instantiate all nodes, then resolve dependency edges.
//! Every edge insertion is checked, so the dependency relation is a DAG
//! at all times.

pub mod definition;
pub mod node;

pub use definition::{SkillDefinition, StatBonusDef, TreeDefinition};
pub use node::{SkillNode, StatBonus};

use crate::core::error::ConfigError;
use crate::core::types::SkillId;
use ahash::{AHashMap, AHashSet};

/// Owner of the full node set
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    nodes: AHashMap<SkillId, SkillNode>,
    /// Definition order, used for deterministic iteration
    order: Vec<SkillId>,
}

impl SkillGraph {
    /// Build a graph from a declarative definition
    ///
    /// Pass 1 instantiates every node; pass 2 resolves each `dependsOn`
    /// list into checked dependency edges. Any failure aborts the whole
    /// build.
    pub fn build(definition: &TreeDefinition) -> Result<Self, ConfigError> {
        let mut graph = Self {
            nodes: AHashMap::with_capacity(definition.skills.len()),
            order: Vec::with_capacity(definition.skills.len()),
        };

        for def in &definition.skills {
            let node = SkillNode::from_definition(def)?;
            if graph.nodes.contains_key(&node.id) {
                return Err(ConfigError::DuplicateId(node.id));
            }
            graph.order.push(node.id);
            graph.nodes.insert(node.id, node);
        }

        for def in &definition.skills {
            for &dependency in &def.depends_on {
                graph.add_dependency(def.id, dependency)?;
            }
        }

        tracing::info!(skills = graph.len(), "skill graph built");
        Ok(graph)
    }

    /// Look up a node; `None` for unknown ids, never a panic
    pub fn get(&self, id: SkillId) -> Option<&SkillNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: SkillId) -> Option<&mut SkillNode> {
        self.nodes.get_mut(&id)
    }

    /// Add `dependency` as a direct prerequisite of `dependent`
    ///
    /// Symmetric (the dependent is recorded on the dependency's side)
    /// and idempotent: re-adding an existing edge is a no-op. Fails if
    /// either id is unknown or the edge would close a cycle.
    pub fn add_dependency(
        &mut self,
        dependent: SkillId,
        dependency: SkillId,
    ) -> Result<(), ConfigError> {
        if dependent == dependency {
            return Err(ConfigError::SelfDependency(dependent));
        }
        if !self.nodes.contains_key(&dependency) || !self.nodes.contains_key(&dependent) {
            return Err(ConfigError::UnknownDependency {
                dependent,
                dependency,
            });
        }
        // The edge closes a cycle iff the dependency already depends,
        // transitively, on the dependent.
        if self.depends_transitively(dependency, dependent) {
            return Err(ConfigError::CyclicDependency {
                dependent,
                dependency,
            });
        }

        if let Some(node) = self.nodes.get_mut(&dependent) {
            node.push_dependency(dependency);
        }
        if let Some(node) = self.nodes.get_mut(&dependency) {
            node.push_dependent(dependent);
        }
        Ok(())
    }

    /// True if `from` reaches `target` by following dependency edges
    fn depends_transitively(&self, from: SkillId, target: SkillId) -> bool {
        let mut visited: AHashSet<SkillId> = AHashSet::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.dependencies().iter().copied());
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in definition order
    pub fn nodes(&self) -> impl Iterator<Item = &SkillNode> + '_ {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// Node ids in definition order
    pub fn ids(&self) -> &[SkillId] {
        &self.order
    }
}
