//! Starter documents written on first run, or used when a stored document
//! cannot be read.

use crate::models::classification::Classification;
use crate::models::location::Location;
use crate::models::taxonomy::{Level, Taxonomy};
use crate::models::template::Template;
use std::collections::BTreeMap;

/// (episode, demand, project, activity, behavior, default location)
const SEED: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Sleep", "Personal", "Sleep", "Rest", "Lying", "Home"),
    ("Meal", "Personal", "Nutrition", "Eating", "Sitting", "Restaurant"),
    ("Phone", "Personal", "Leisure", "Screen time", "Sitting", "Home"),
    ("Work", "Work", "Office work", "Desk work", "Sitting", "Office"),
    ("Commute", "Mobility", "Commute", "Transit", "Riding", "On the move"),
];

/// Extra categories with no starter episode.
const EMPTY_BRANCHES: &[(&str, &str, &str, &str)] = &[
    ("Social", "Friends", "Meeting", "Talking"),
    ("Family", "Household", "Chores", "Standing"),
];

pub fn taxonomy() -> Taxonomy {
    let mut service = crate::core::taxonomy::TaxonomyService::default();
    let rows = SEED
        .iter()
        .map(|(e, d, p, a, b, _)| (*d, *p, *a, *b, Some(*e)))
        .chain(EMPTY_BRANCHES.iter().map(|(d, p, a, b)| (*d, *p, *a, *b, None)));

    for (d, p, a, b, episode) in rows {
        let names = [d, p, a, b];
        for (depth, name) in names.iter().enumerate() {
            let path: Vec<String> = names[..depth].iter().map(|s| s.to_string()).collect();
            if let Some(level) = Level::from_depth(depth) {
                // Names are non-empty constants; adding cannot fail.
                let _ = service.add_node(level, &path, name);
            }
        }
        if let Some(e) = episode {
            let _ = service.register_episode(&Classification::new(d, p, a, b), e);
        }
    }
    service.tree().clone()
}

pub fn templates() -> BTreeMap<String, Template> {
    SEED.iter()
        .map(|(e, d, p, a, b, loc)| {
            (
                e.to_string(),
                Template::new(Classification::new(*d, *p, *a, *b), Location::named(*loc)),
            )
        })
        .collect()
}
