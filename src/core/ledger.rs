//! Time-ordered collection of logged activities.
//!
//! Invariant: after every mutation `activities` is sorted non-decreasing by
//! `start` (stable, so equal starts keep insertion order).

use crate::core::taxonomy::TaxonomyService;
use crate::core::templates::TemplateService;
use crate::errors::{AppError, AppResult};
use crate::models::activity::{Activity, ActivityDraft};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

/// Applies the overnight rule and rejects empty or negative intervals.
///
/// An `end` on the same calendar date as `start` but earlier in clock time is
/// taken to be on the following day (23:30 → 00:30 lasts one hour).
pub fn normalize_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let end = if end < start && end.date() == start.date() {
        end + Duration::days(1)
    } else {
        end
    };

    if (end - start).num_minutes() <= 0 {
        return Err(AppError::NonPositiveDuration {
            start: start.format("%Y-%m-%d %H:%M").to_string(),
            end: end.format("%Y-%m-%d %H:%M").to_string(),
        });
    }
    Ok((start, end))
}

/// Read-only selection criteria for [`LedgerService::list`]. Every `None`
/// field matches everything.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Activities whose interval touches this calendar day.
    pub date: Option<NaiveDate>,
    /// Inclusive bounds on the start date.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Case-insensitive substring of the episode or the description.
    pub text: Option<String>,
    pub demand: Option<String>,
    pub project: Option<String>,
    pub activity_type: Option<String>,
    pub behavior: Option<String>,
    pub location: Option<String>,
}

fn same_field(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_deref()
        .is_none_or(|w| w.trim().eq_ignore_ascii_case(actual))
}

impl ActivityFilter {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn matches(&self, a: &Activity) -> bool {
        if let Some(day) = self.date
            && !a.intersects_day(day)
        {
            return false;
        }
        if self.from.is_some_and(|from| a.start_date() < from) {
            return false;
        }
        if self.to.is_some_and(|to| a.start_date() > to) {
            return false;
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            if !a.episode.to_lowercase().contains(&needle)
                && !a.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(loc) = &self.location
            && !a.location.name.to_lowercase().contains(&loc.to_lowercase())
        {
            return false;
        }

        let c = &a.classification;
        same_field(&self.demand, &c.demand)
            && same_field(&self.project, &c.project)
            && same_field(&self.activity_type, &c.activity_type)
            && same_field(&self.behavior, &c.behavior)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LedgerService {
    activities: Vec<Activity>,
}

impl LedgerService {
    /// Builds a ledger from persisted records. Durations are recomputed from the
    /// endpoints; records with an empty interval are dropped.
    pub fn new(records: Vec<Activity>) -> Self {
        let mut activities: Vec<Activity> = records
            .into_iter()
            .filter_map(|mut a| match normalize_interval(a.start, a.end) {
                Ok((start, end)) => {
                    a.start = start;
                    a.end = end;
                    a.duration = (end - start).num_minutes();
                    Some(a)
                }
                Err(e) => {
                    warn!(id = a.id, "dropping stored activity: {e}");
                    None
                }
            })
            .collect();
        activities.sort_by_key(|a| a.start);
        Self { activities }
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    fn next_id(&self) -> i64 {
        let now = Local::now().timestamp_millis();
        let max = self.activities.iter().map(|a| a.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    /// Validates `draft`, resolves its classification and inserts it.
    ///
    /// Classification: explicit → template → taxonomy leaf → unclassified.
    /// An explicit path must name an existing taxonomy leaf.
    /// Location: explicit → template default → none. A first-seen episode is
    /// learned by `templates`.
    pub fn add(
        &mut self,
        draft: ActivityDraft,
        templates: &mut TemplateService,
        taxonomy: &TaxonomyService,
    ) -> AppResult<Activity> {
        let start = draft.start.ok_or(AppError::MissingTime("start"))?;
        let end = draft.end.ok_or(AppError::MissingTime("end"))?;
        let episode = draft.episode.trim().to_string();
        if episode.is_empty() {
            return Err(AppError::EmptyEpisode);
        }
        let (start, end) = normalize_interval(start, end)?;

        if let Some(c) = &draft.classification
            && !c.is_unclassified()
            && !taxonomy.contains_path(c)
        {
            return Err(AppError::TaxonomyPath(format!(
                "'{c}' is not a known demand/project/activity/behavior path"
            )));
        }

        let template = templates.lookup(&episode).cloned();

        let classification = match draft.classification {
            Some(c) => c,
            None => template
                .as_ref()
                .map(|t| t.classification.clone())
                .or_else(|| taxonomy.resolve_episode(&episode))
                .unwrap_or_default(),
        };

        let location = draft
            .location
            .filter(|l| !l.is_empty())
            .or_else(|| {
                template
                    .as_ref()
                    .and_then(|t| t.default_location().cloned())
            })
            .unwrap_or_default();

        let activity = Activity {
            id: self.next_id(),
            start,
            end,
            duration: (end - start).num_minutes(),
            classification,
            episode,
            location,
            description: draft.description.trim().to_string(),
            created_at: Local::now().naive_local(),
        };

        self.activities.push(activity.clone());
        self.activities.sort_by_key(|a| a.start);

        info!(
            id = activity.id,
            episode = %activity.episode,
            duration = activity.duration,
            "activity added"
        );

        if template.is_none() {
            templates.learn(
                &activity.episode,
                &activity.classification,
                &activity.location,
            );
        }

        Ok(activity)
    }

    /// Removes the record with `id`. Returns `false` when there is none.
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(pos) = self.activities.iter().position(|a| a.id == id) else {
            return false;
        };
        let removed = self.activities.remove(pos);
        info!(id, episode = %removed.episode, "activity removed");
        true
    }

    pub fn clear(&mut self) -> usize {
        let n = self.activities.len();
        self.activities.clear();
        n
    }

    /// Lazy, restartable view over the records matching `filter`, in ledger order.
    pub fn list<'a, 'f>(
        &'a self,
        filter: &'f ActivityFilter,
    ) -> impl Iterator<Item = &'a Activity> + Clone + use<'a, 'f> {
        self.activities.iter().filter(move |a| filter.matches(a))
    }

    /// Chronologically last record (by start).
    pub fn last(&self) -> Option<&Activity> {
        self.activities.last()
    }

    /// Default start for the next entry.
    ///
    /// Continues seamlessly from the last record unless it ended more than
    /// `gap_threshold` ago (or there is none), in which case the entry is
    /// anchored to `now - default_duration`.
    pub fn suggest_start(
        &self,
        now: NaiveDateTime,
        gap_threshold: Duration,
        default_duration: Duration,
    ) -> NaiveDateTime {
        match self.last() {
            None => now - default_duration,
            Some(last) if last.end > now => now,
            Some(last) if now - last.end <= gap_threshold => last.end,
            Some(_) => now - default_duration,
        }
    }
}
