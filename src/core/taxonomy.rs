//! In-memory classification tree with the editing rules of the taxonomy
//! editor: unique siblings, no orphaned parents, first-match episode lookup.

use crate::errors::{AppError, AppResult};
use crate::models::classification::Classification;
use crate::models::taxonomy::{
    ActivityTypes, Behaviors, Episodes, Level, OrderedMap, Projects, Taxonomy,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct TaxonomyService {
    tree: Taxonomy,
}

fn child<'a, V>(map: &'a OrderedMap<V>, key: &str, level: Level) -> AppResult<&'a V> {
    map.get(key)
        .ok_or_else(|| AppError::TaxonomyPath(format!("unknown {level} '{key}'")))
}

fn child_mut<'a, V>(map: &'a mut OrderedMap<V>, key: &str, level: Level) -> AppResult<&'a mut V> {
    map.get_mut(key)
        .ok_or_else(|| AppError::TaxonomyPath(format!("unknown {level} '{key}'")))
}

fn check_depth(level: Level, path: &[String]) -> AppResult<()> {
    if path.len() != level.depth() {
        return Err(AppError::TaxonomyPath(format!(
            "a {level} needs a parent path of {} element(s), got {}",
            level.depth(),
            path.len()
        )));
    }
    Ok(())
}

/// Removes `name` from a sibling set, refusing to empty it.
fn remove_keeping_one<V>(map: &mut OrderedMap<V>, name: &str) -> AppResult<bool> {
    if !map.contains_key(name) {
        return Ok(false);
    }
    if map.len() == 1 {
        return Err(AppError::LastSibling(name.to_string()));
    }
    Ok(map.remove(name).is_some())
}

impl TaxonomyService {
    pub fn new(mut tree: Taxonomy) -> Self {
        // Leaves hold a deduplicated list; documents edited by hand may not.
        for projects in tree.demands.values_mut() {
            for activities in projects.values_mut() {
                for behaviors in activities.values_mut() {
                    for episodes in behaviors.values_mut() {
                        let mut seen: Vec<String> = Vec::with_capacity(episodes.len());
                        episodes.retain(|e| {
                            if e.trim().is_empty() || seen.contains(e) {
                                false
                            } else {
                                seen.push(e.clone());
                                true
                            }
                        });
                    }
                }
            }
        }
        Self { tree }
    }

    pub fn tree(&self) -> &Taxonomy {
        &self.tree
    }

    fn projects(&self, path: &[String]) -> AppResult<&Projects> {
        child(&self.tree.demands, &path[0], Level::Demand)
    }

    fn activity_types(&self, path: &[String]) -> AppResult<&ActivityTypes> {
        child(self.projects(path)?, &path[1], Level::Project)
    }

    fn behaviors(&self, path: &[String]) -> AppResult<&Behaviors> {
        child(self.activity_types(path)?, &path[2], Level::Activity)
    }

    fn episodes(&self, path: &[String]) -> AppResult<&Episodes> {
        child(self.behaviors(path)?, &path[3], Level::Behavior)
    }

    fn projects_mut(&mut self, path: &[String]) -> AppResult<&mut Projects> {
        child_mut(&mut self.tree.demands, &path[0], Level::Demand)
    }

    fn activity_types_mut(&mut self, path: &[String]) -> AppResult<&mut ActivityTypes> {
        child_mut(self.projects_mut(path)?, &path[1], Level::Project)
    }

    fn behaviors_mut(&mut self, path: &[String]) -> AppResult<&mut Behaviors> {
        child_mut(self.activity_types_mut(path)?, &path[2], Level::Activity)
    }

    fn episodes_mut(&mut self, path: &[String]) -> AppResult<&mut Episodes> {
        child_mut(self.behaviors_mut(path)?, &path[3], Level::Behavior)
    }

    /// Adds `name` at `level` under `path`. Returns `false` when it already exists.
    pub fn add_node(&mut self, level: Level, path: &[String], name: &str) -> AppResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyNodeName);
        }
        check_depth(level, path)?;

        let added = match level {
            Level::Demand => self
                .tree
                .demands
                .insert_if_absent(name, Projects::default()),
            Level::Project => self
                .projects_mut(path)?
                .insert_if_absent(name, ActivityTypes::default()),
            Level::Activity => self
                .activity_types_mut(path)?
                .insert_if_absent(name, Behaviors::default()),
            Level::Behavior => self
                .behaviors_mut(path)?
                .insert_if_absent(name, Episodes::default()),
            Level::Episode => {
                let episodes = self.episodes_mut(path)?;
                if episodes.iter().any(|e| e == name) {
                    false
                } else {
                    episodes.push(name.to_string());
                    true
                }
            }
        };

        if added {
            info!(level = %level, ?path, name, "taxonomy node added");
        }
        Ok(added)
    }

    /// Removes `name` at `level` under `path`. Returns `false` when it does not
    /// exist. Category levels always keep at least one child per parent.
    pub fn remove_node(&mut self, level: Level, path: &[String], name: &str) -> AppResult<bool> {
        let name = name.trim();
        check_depth(level, path)?;

        let removed = match level {
            Level::Demand => remove_keeping_one(&mut self.tree.demands, name)?,
            Level::Project => remove_keeping_one(self.projects_mut(path)?, name)?,
            Level::Activity => remove_keeping_one(self.activity_types_mut(path)?, name)?,
            Level::Behavior => remove_keeping_one(self.behaviors_mut(path)?, name)?,
            Level::Episode => {
                let episodes = self.episodes_mut(path)?;
                let before = episodes.len();
                episodes.retain(|e| e != name);
                episodes.len() != before
            }
        };

        if removed {
            info!(level = %level, ?path, name, "taxonomy node removed");
        }
        Ok(removed)
    }

    /// Ordered names of the nodes at `level` under `path`.
    pub fn children(&self, level: Level, path: &[String]) -> AppResult<Vec<String>> {
        check_depth(level, path)?;

        let names: Vec<String> = match level {
            Level::Demand => self.tree.demands.keys().map(str::to_string).collect(),
            Level::Project => self.projects(path)?.keys().map(str::to_string).collect(),
            Level::Activity => self
                .activity_types(path)?
                .keys()
                .map(str::to_string)
                .collect(),
            Level::Behavior => self.behaviors(path)?.keys().map(str::to_string).collect(),
            Level::Episode => self.episodes(path)?.clone(),
        };
        Ok(names)
    }

    /// Full path of the first leaf listing `episode`, in insertion order.
    pub fn resolve_episode(&self, episode: &str) -> Option<Classification> {
        let episode = episode.trim();
        for (d, projects) in self.tree.demands.iter() {
            for (p, activities) in projects.iter() {
                for (a, behaviors) in activities.iter() {
                    for (b, episodes) in behaviors.iter() {
                        if episodes.iter().any(|e| e == episode) {
                            debug!(episode, "resolved from taxonomy");
                            return Some(Classification::new(d, p, a, b));
                        }
                    }
                }
            }
        }
        None
    }

    /// Whether the four names of `path` address an existing Behavior leaf.
    pub fn contains_path(&self, path: &Classification) -> bool {
        self.episodes(&path.to_path()).is_ok()
    }

    /// Adds `episode` to the leaf addressed by `path`.
    pub fn register_episode(&mut self, path: &Classification, episode: &str) -> AppResult<bool> {
        self.add_node(Level::Episode, &path.to_path(), episode)
    }
}
