//! Partition the graph into independent trees for layout consumers
//!
//! The output feeds only the external rendering layer; the engine
//! itself never consumes it.

use crate::core::types::SkillId;
use crate::graph::SkillGraph;
use ahash::AHashSet;

/// One ordered sequence of node ids per root
///
/// Roots are nodes with no dependencies, visited in ascending id order.
/// Each sequence is the root followed by a depth-first walk forward
/// along `dependents` edges, siblings in definition order. A shared
/// visited set keeps every node in exactly one sequence, so a node
/// reachable from several roots lands in the lowest-id root's tree.
pub fn group_into_trees(graph: &SkillGraph) -> Vec<Vec<SkillId>> {
    let mut roots: Vec<SkillId> = graph
        .nodes()
        .filter(|n| !n.has_dependencies())
        .map(|n| n.id)
        .collect();
    roots.sort_unstable();

    let mut visited: AHashSet<SkillId> = AHashSet::new();
    let mut trees = Vec::with_capacity(roots.len());

    for root in roots {
        let mut sequence = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            sequence.push(id);
            if let Some(node) = graph.get(id) {
                // Reverse push so definition order pops first
                for &dependent in node.dependents().iter().rev() {
                    stack.push(dependent);
                }
            }
        }
        trees.push(sequence);
    }
    trees
}
