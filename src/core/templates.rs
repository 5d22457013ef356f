//! Episode name → classification bindings.
//!
//! Two write paths exist: [`TemplateService::learn`] is called by the ledger
//! and only fills a missing entry, [`TemplateService::upsert`] is the explicit
//! user action and always wins.

use crate::core::taxonomy::TaxonomyService;
use crate::errors::{AppError, AppResult};
use crate::models::classification::Classification;
use crate::models::location::Location;
use crate::models::template::Template;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct TemplateService {
    templates: BTreeMap<String, Template>,
}

impl TemplateService {
    pub fn new(templates: BTreeMap<String, Template>) -> Self {
        let templates = templates
            .into_iter()
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, t)| (name.trim().to_string(), t))
            .collect();
        Self { templates }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Template> {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn lookup(&self, episode: &str) -> Option<&Template> {
        self.templates.get(episode.trim())
    }

    /// Templates sorted by episode name.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Explicit "save as template" / "edit template". A classified path must
    /// exist in the taxonomy; an unclassified one is accepted as-is.
    pub fn upsert(
        &mut self,
        episode: &str,
        classification: Classification,
        location: Option<Location>,
        taxonomy: &TaxonomyService,
    ) -> AppResult<Template> {
        let episode = episode.trim();
        if episode.is_empty() {
            return Err(AppError::EmptyEpisode);
        }
        if !classification.is_unclassified() && !taxonomy.contains_path(&classification) {
            return Err(AppError::TaxonomyPath(format!(
                "'{classification}' is not a known demand/project/activity/behavior path"
            )));
        }

        let template = Template::new(classification, location.unwrap_or_default());
        self.templates
            .insert(episode.to_string(), template.clone());
        info!(episode, "template saved");
        Ok(template)
    }

    /// Auto-learn: stores a template only when `episode` has none yet.
    pub fn learn(
        &mut self,
        episode: &str,
        classification: &Classification,
        location: &Location,
    ) -> bool {
        let episode = episode.trim();
        if episode.is_empty() || self.templates.contains_key(episode) {
            return false;
        }
        self.templates.insert(
            episode.to_string(),
            Template::new(classification.clone(), location.clone()),
        );
        info!(episode, %classification, "template learned");
        true
    }

    pub fn delete(&mut self, episode: &str) -> bool {
        let removed = self.templates.remove(episode.trim()).is_some();
        if removed {
            info!(episode, "template deleted");
        }
        removed
    }
}
