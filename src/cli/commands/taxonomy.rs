use crate::cli::commands::{open_session, split_path};
use crate::cli::parser::{Commands, TaxonomyAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::taxonomy::Taxonomy;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET, color_for_demand};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Taxonomy { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            TaxonomyAction::Tree => print_tree(session.taxonomy().tree()),

            TaxonomyAction::Add { level, name, path } => {
                let path = split_path(path);
                if session.add_taxonomy_node(*level, &path, name)? {
                    success(format!("Added {level} '{}'.", name.trim()));
                } else {
                    warning(format!("{level} '{}' already exists.", name.trim()));
                }
            }

            TaxonomyAction::Rm { level, name, path } => {
                let path = split_path(path);
                if session.remove_taxonomy_node(*level, &path, name)? {
                    success(format!("Removed {level} '{name}'."));
                } else {
                    warning(format!("{level} '{name}' not found."));
                }
            }

            TaxonomyAction::Resolve { episode } => match session.taxonomy().resolve_episode(episode) {
                Some(c) => println!("{episode} → {c}"),
                None => info(format!("'{episode}' is not listed in the taxonomy.")),
            },
        }
    }
    Ok(())
}

fn print_tree(tree: &Taxonomy) {
    for (d, projects) in tree.demands.iter() {
        println!("{}{d}{RESET}", color_for_demand(d));
        for (p, activities) in projects.iter() {
            println!("  {p}");
            for (a, behaviors) in activities.iter() {
                println!("    {a}");
                for (b, episodes) in behaviors.iter() {
                    if episodes.is_empty() {
                        println!("      {b}");
                    } else {
                        println!("      {b} {GREY}[{}]{RESET}", episodes.join(", "));
                    }
                }
            }
        }
    }
}
