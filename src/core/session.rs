//! One user session: the four services plus the store they are persisted to.
//!
//! Every mutation runs to completion in memory and is then written through
//! to the store as a full document. A failed save is returned to the caller
//! but the in-memory state is kept; it stays the most current copy.

use crate::core::calculator::coverage::build_day_coverage;
use crate::core::calculator::summary::build_day_summary;
use crate::core::ledger::LedgerService;
use crate::core::recommend::{RecommendationService, RecommendationSettings};
use crate::core::seed;
use crate::core::taxonomy::TaxonomyService;
use crate::core::templates::TemplateService;
use crate::errors::AppResult;
use crate::models::activity::{Activity, ActivityDraft};
use crate::models::classification::Classification;
use crate::models::coverage::DayCoverage;
use crate::models::day_summary::DaySummary;
use crate::models::location::Location;
use crate::models::recommendation::Recommendation;
use crate::models::taxonomy::{Level, Taxonomy};
use crate::models::template::Template;
use crate::store::{Document, DocumentStore};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub struct Session<S: DocumentStore> {
    store: S,
    ledger: LedgerService,
    taxonomy: TaxonomyService,
    templates: TemplateService,
    recommender: RecommendationService,
}

/// Reads and parses `doc`; any failure yields `fallback()`.
fn load_or<T, S, F>(store: &S, doc: Document, fallback: F) -> T
where
    T: DeserializeOwned,
    S: DocumentStore,
    F: FnOnce() -> T,
{
    match store.load(doc) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("{} is not valid, starting from defaults: {e}", doc.file_name());
                fallback()
            }
        },
        Ok(None) => fallback(),
        Err(e) => {
            warn!("cannot read {}, starting from defaults: {e}", doc.file_name());
            fallback()
        }
    }
}

impl<S: DocumentStore> Session<S> {
    pub fn open(store: S, settings: RecommendationSettings) -> Self {
        let activities: Vec<Activity> = load_or(&store, Document::Activities, Vec::new);
        let tree: Taxonomy = load_or(&store, Document::Taxonomy, seed::taxonomy);
        let templates: BTreeMap<String, Template> =
            load_or(&store, Document::Templates, seed::templates);

        let session = Self {
            store,
            ledger: LedgerService::new(activities),
            taxonomy: TaxonomyService::new(tree),
            templates: TemplateService::new(templates),
            recommender: RecommendationService::new(settings),
        };
        info!(
            activities = session.ledger.len(),
            templates = session.templates.len(),
            "session opened"
        );
        session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ledger(&self) -> &LedgerService {
        &self.ledger
    }

    pub fn taxonomy(&self) -> &TaxonomyService {
        &self.taxonomy
    }

    pub fn templates(&self) -> &TemplateService {
        &self.templates
    }

    /// Writes `doc` as a whole from the in-memory state.
    pub fn save(&self, doc: Document) -> AppResult<()> {
        let json = match doc {
            Document::Activities => serde_json::to_string_pretty(self.ledger.as_slice())?,
            Document::Taxonomy => serde_json::to_string_pretty(self.taxonomy.tree())?,
            Document::Templates => serde_json::to_string_pretty(self.templates.as_map())?,
        };
        self.store.save(doc, &json)
    }

    pub fn add_activity(&mut self, draft: ActivityDraft) -> AppResult<Activity> {
        let templates_before = self.templates.len();
        let activity = self
            .ledger
            .add(draft, &mut self.templates, &self.taxonomy)?;

        let learned = self.templates.len() != templates_before;
        let mut registered = false;
        if learned && self.taxonomy.contains_path(&activity.classification) {
            registered = self
                .taxonomy
                .register_episode(&activity.classification, &activity.episode)?;
        }

        self.save(Document::Activities)?;
        if learned {
            self.save(Document::Templates)?;
        }
        if registered {
            self.save(Document::Taxonomy)?;
        }
        Ok(activity)
    }

    /// `Ok(false)` when no activity has `id`; nothing is written then.
    pub fn remove_activity(&mut self, id: i64) -> AppResult<bool> {
        if !self.ledger.remove(id) {
            return Ok(false);
        }
        self.save(Document::Activities)?;
        Ok(true)
    }

    pub fn clear_activities(&mut self) -> AppResult<usize> {
        let n = self.ledger.clear();
        self.save(Document::Activities)?;
        Ok(n)
    }

    pub fn add_taxonomy_node(&mut self, level: Level, path: &[String], name: &str) -> AppResult<bool> {
        let added = self.taxonomy.add_node(level, path, name)?;
        if added {
            self.save(Document::Taxonomy)?;
        }
        Ok(added)
    }

    pub fn remove_taxonomy_node(
        &mut self,
        level: Level,
        path: &[String],
        name: &str,
    ) -> AppResult<bool> {
        let removed = self.taxonomy.remove_node(level, path, name)?;
        if removed {
            self.save(Document::Taxonomy)?;
        }
        Ok(removed)
    }

    /// Explicit template edit. The episode is also listed under its leaf.
    pub fn save_template(
        &mut self,
        episode: &str,
        classification: Classification,
        location: Option<Location>,
    ) -> AppResult<Template> {
        let previous = self
            .templates
            .lookup(episode)
            .map(|t| t.classification.clone());
        let template = self
            .templates
            .upsert(episode, classification, location, &self.taxonomy)?;

        let mut tree_changed = false;
        // A moved template leaves its old leaf.
        if let Some(old) = previous
            && old != template.classification
            && self.taxonomy.contains_path(&old)
        {
            tree_changed |=
                self.taxonomy
                    .remove_node(Level::Episode, &old.to_path(), episode)?;
        }
        if template.classification.is_complete() {
            tree_changed |= self
                .taxonomy
                .register_episode(&template.classification, episode)?;
        }
        if tree_changed {
            self.save(Document::Taxonomy)?;
        }
        self.save(Document::Templates)?;
        Ok(template)
    }

    pub fn delete_template(&mut self, episode: &str) -> AppResult<bool> {
        if !self.templates.delete(episode) {
            return Ok(false);
        }
        self.save(Document::Templates)?;
        Ok(true)
    }

    pub fn dismiss(&mut self, name: &str) {
        self.recommender.dismiss(name);
    }

    pub fn recommend(&self, now: NaiveDateTime) -> Vec<Recommendation> {
        self.recommender
            .recommend(now, self.ledger.as_slice(), &self.templates)
    }

    pub fn day_coverage(&self, date: NaiveDate) -> DayCoverage {
        build_day_coverage(date, self.ledger.as_slice())
    }

    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        build_day_summary(date, self.ledger.as_slice())
    }
}
