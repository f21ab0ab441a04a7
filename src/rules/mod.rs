//! Allocation legality rules and point mutations
//!
//! Legality depends only on direct neighbors' point counts, so every
//! check is O(direct edges). Transitive validity is an emergent
//! invariant: a node can only reach points > 0 if its own dependencies
//! already had points > 0, recursively.

use crate::core::types::SkillId;
use crate::graph::SkillGraph;

/// A point may be added iff every direct dependency holds at least one
/// point and the node is below its budget
pub fn can_add_point(graph: &SkillGraph, id: SkillId) -> bool {
    let Some(node) = graph.get(id) else {
        return false;
    };
    if node.points() >= node.max_points {
        return false;
    }
    node.dependencies()
        .iter()
        .all(|dep| graph.get(*dep).map_or(false, |d| d.has_points()))
}

/// A point may be removed iff the node holds one and dropping it would
/// not leave an active dependent without its prerequisite
pub fn can_remove_point(graph: &SkillGraph, id: SkillId) -> bool {
    let Some(node) = graph.get(id) else {
        return false;
    };
    if node.points() == 0 {
        return false;
    }
    // Decrementing toward 0 is only blocked while a dependent is active
    node.points() > 1
        || !node
            .dependents()
            .iter()
            .any(|dep| graph.get(*dep).map_or(false, |d| d.has_points()))
}

/// Add exactly one point; `false` (with no mutation) when not legal.
/// A disallowed request is routine, not an error.
pub fn add_point(graph: &mut SkillGraph, id: SkillId) -> bool {
    if !can_add_point(graph, id) {
        return false;
    }
    if let Some(node) = graph.get_mut(id) {
        let points = node.points() + 1;
        node.set_points(points);
        true
    } else {
        false
    }
}

/// Remove exactly one point; mirrors [`add_point`]
pub fn remove_point(graph: &mut SkillGraph, id: SkillId) -> bool {
    if !can_remove_point(graph, id) {
        return false;
    }
    if let Some(node) = graph.get_mut(id) {
        let points = node.points() - 1;
        node.set_points(points);
        true
    } else {
        false
    }
}
