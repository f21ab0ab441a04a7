//! Skilltree - Interactive Build Planner
//!
//! Loads a skill definition file, then takes allocation commands from
//! stdin and prints derived stats and the shareable build code after
//! each change.

use skilltree::core::error::ConfigError;
use skilltree::core::types::SkillId;
use skilltree::graph::TreeDefinition;
use skilltree::tree::SkillTree;

use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter("skilltree=debug")
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/skills.json".to_string());
    let definition = TreeDefinition::from_file(Path::new(&path))?;
    let mut tree = SkillTree::from_definition(&definition)?;

    tree.subscribe(|event| {
        println!("  build code: {}", event.share_code);
    });

    println!("\n=== BUILD PLANNER ===");
    println!("Loaded {} skills from {}", tree.graph().len(), path);
    println!();
    println!("Commands:");
    println!("  list            - Show all skills and their points");
    println!("  add <id>        - Spend a point on a skill");
    println!("  remove <id>     - Refund a point from a skill");
    println!("  stats           - Show derived stats, talents, level");
    println!("  trees           - Show the tree grouping");
    println!("  load <code>     - Restore a build from a share code");
    println!("  name <name>     - Rename the character");
    println!("  portrait <+|->  - Cycle the portrait");
    println!("  quit / q        - Exit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("");

        match command {
            "list" => {
                for tree_ids in tree.group_into_trees() {
                    for id in tree_ids {
                        if let Some(node) = tree.graph().get(id) {
                            let marker = if node.has_max_points() {
                                "*"
                            } else if tree.can_add_point(id) {
                                "+"
                            } else {
                                " "
                            };
                            println!(
                                "  [{}] {:>3} {} ({}/{})",
                                marker, id.0, node.title, node.points(), node.max_points
                            );
                        }
                    }
                    println!();
                }
            }
            "add" | "remove" => match arg.parse::<u32>() {
                Ok(raw) => {
                    let id = SkillId(raw);
                    let applied = if command == "add" {
                        tree.add_point(id)
                    } else {
                        tree.remove_point(id)
                    };
                    if !applied {
                        println!("  not allowed for skill {}", raw);
                    }
                }
                Err(_) => println!("  usage: {} <id>", command),
            },
            "stats" => {
                for (name, value) in tree.compute_stats() {
                    println!("  {}: {}", name, value);
                }
                let talents = tree.compute_talents();
                if !talents.is_empty() {
                    println!("  talents: {}", talents.join(", "));
                }
                println!(
                    "  level {} ({} points spent)",
                    tree.level(),
                    tree.total_points()
                );
            }
            "trees" => {
                for (i, tree_ids) in tree.group_into_trees().iter().enumerate() {
                    let titles: Vec<&str> = tree_ids
                        .iter()
                        .filter_map(|id| tree.graph().get(*id))
                        .map(|n| n.title.as_str())
                        .collect();
                    println!("  tree {}: {}", i + 1, titles.join(" -> "));
                }
            }
            "load" => match tree.restore(arg) {
                Ok(true) => println!("  build restored"),
                Ok(false) => println!("  build unchanged"),
                Err(e) => println!("  bad code: {}", e),
            },
            "name" => {
                let name = line.trim().strip_prefix("name").unwrap_or("").trim();
                if name.is_empty() {
                    println!("  usage: name <name>");
                } else {
                    tree.set_avatar_name(name);
                    println!("  hello, {}", tree.character().avatar_name);
                }
            }
            "portrait" => {
                let portrait = match arg {
                    "-" => tree.previous_portrait(),
                    _ => tree.next_portrait(),
                };
                println!(
                    "  portrait {}/{}",
                    portrait,
                    tree.character().num_portraits
                );
            }
            "quit" | "q" => break,
            "" => {}
            other => println!("  unknown command: {}", other),
        }
    }

    Ok(())
}
