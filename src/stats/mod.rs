//! Derived statistics over the current allocation
//!
//! Every function here is a pure read of graph state; nothing mutates.

use crate::graph::SkillGraph;
use std::collections::BTreeMap;

/// Allocation points required per derived character level
///
/// Level is `total_points / divisor + 1`, so a fresh character sits at
/// level 1. This is a pacing policy, not a graph property; callers can
/// override it through the definition's `pointsPerLevel`.
pub const DEFAULT_POINTS_PER_LEVEL: u32 = 3;

/// Total per-stat bonuses for the current allocation
///
/// Starts from a copy of `default_stats` and adds `weight * points` for
/// every stat entry of every funded node. Stat names not present in the
/// defaults start at zero.
pub fn compute_stats(
    graph: &SkillGraph,
    default_stats: &BTreeMap<String, f32>,
) -> BTreeMap<String, f32> {
    let mut totals = default_stats.clone();
    for node in graph.nodes() {
        if !node.has_points() {
            continue;
        }
        for bonus in node.stats() {
            *totals.entry(bonus.name.clone()).or_insert(0.0) +=
                bonus.weight * node.points() as f32;
        }
    }
    totals
}

/// Talent tags active on the current allocation
///
/// De-duplicated; first occurrence in definition order wins, so display
/// order is stable across calls.
pub fn compute_talents(graph: &SkillGraph) -> Vec<String> {
    let mut talents: Vec<String> = Vec::new();
    for node in graph.nodes() {
        if !node.has_points() {
            continue;
        }
        for talent in node.talents() {
            if !talents.iter().any(|t| t == talent) {
                talents.push(talent.clone());
            }
        }
    }
    talents
}

/// Sum of allocated points across all nodes
pub fn total_points(graph: &SkillGraph) -> u32 {
    graph.nodes().map(|n| n.points()).sum()
}

/// Derived character level for a point total
///
/// A divisor of 0 is treated as 1.
pub fn level_for(total_points: u32, points_per_level: u32) -> u32 {
    total_points / points_per_level.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SkillId;
    use crate::graph::TreeDefinition;
    use crate::rules;

    fn graph() -> SkillGraph {
        let def = TreeDefinition::from_json_str(
            r#"{ "skills": [
                {
                    "id": 1, "title": "Swordplay", "maxPoints": 3,
                    "stats": [{ "title": "Might", "value": 2.0 }],
                    "talents": ["Duelist"]
                },
                {
                    "id": 2, "title": "Riposte", "maxPoints": 2, "dependsOn": [1],
                    "stats": [{ "title": "Might", "value": 1.0 }, { "title": "Grace", "value": 1.5 }],
                    "talents": ["Duelist", "Counterattack"]
                }
            ]}"#,
        )
        .unwrap();
        SkillGraph::build(&def).unwrap()
    }

    fn defaults() -> BTreeMap<String, f32> {
        let mut m = BTreeMap::new();
        m.insert("Might".to_string(), 10.0);
        m.insert("Vigor".to_string(), 5.0);
        m
    }

    #[test]
    fn test_empty_allocation_returns_defaults() {
        let graph = graph();
        let stats = compute_stats(&graph, &defaults());
        assert_eq!(stats.get("Might"), Some(&10.0));
        assert_eq!(stats.get("Vigor"), Some(&5.0));
        assert_eq!(stats.get("Grace"), None);
        assert!(compute_talents(&graph).is_empty());
        assert_eq!(total_points(&graph), 0);
    }

    #[test]
    fn test_stats_scale_with_points() {
        let mut graph = graph();
        rules::add_point(&mut graph, SkillId(1));
        rules::add_point(&mut graph, SkillId(1));
        rules::add_point(&mut graph, SkillId(2));

        let stats = compute_stats(&graph, &defaults());
        // Might: 10 + 2*2 (node 1) + 1*1 (node 2)
        assert_eq!(stats.get("Might"), Some(&15.0));
        // Grace missing from defaults, initialized at 0
        assert_eq!(stats.get("Grace"), Some(&1.5));
        assert_eq!(stats.get("Vigor"), Some(&5.0));
    }

    #[test]
    fn test_compute_stats_is_pure() {
        let mut graph = graph();
        rules::add_point(&mut graph, SkillId(1));
        let first = compute_stats(&graph, &defaults());
        let second = compute_stats(&graph, &defaults());
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutation_delta_is_weight_times_points() {
        let mut graph = graph();
        rules::add_point(&mut graph, SkillId(1));
        let before = compute_stats(&graph, &defaults());

        rules::add_point(&mut graph, SkillId(1));
        let after = compute_stats(&graph, &defaults());

        assert_eq!(
            after.get("Might").unwrap() - before.get("Might").unwrap(),
            2.0
        );
        assert_eq!(after.get("Vigor"), before.get("Vigor"));
    }

    #[test]
    fn test_talents_deduplicated_in_definition_order() {
        let mut graph = graph();
        rules::add_point(&mut graph, SkillId(1));
        rules::add_point(&mut graph, SkillId(2));

        let talents = compute_talents(&graph);
        assert_eq!(
            talents,
            vec!["Duelist".to_string(), "Counterattack".to_string()]
        );
    }

    #[test]
    fn test_level_policy() {
        assert_eq!(level_for(0, DEFAULT_POINTS_PER_LEVEL), 1);
        assert_eq!(level_for(2, DEFAULT_POINTS_PER_LEVEL), 1);
        assert_eq!(level_for(3, DEFAULT_POINTS_PER_LEVEL), 2);
        assert_eq!(level_for(7, DEFAULT_POINTS_PER_LEVEL), 3);
        assert_eq!(level_for(10, 5), 3);
        // Degenerate divisor falls back to 1
        assert_eq!(level_for(4, 0), 5);
    }
}
