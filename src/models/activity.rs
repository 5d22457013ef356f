use super::{classification::Classification, location::Location};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged interval of the ledger.
///
/// Records are never edited in place: an edit is a delete followed by a new
/// `add`, so `id` and `created_at` never change once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "start_time")]
    pub start: NaiveDateTime,
    #[serde(rename = "end_time")]
    pub end: NaiveDateTime,
    /// Minutes, always `end - start`.
    #[serde(default)]
    pub duration: i64,
    #[serde(flatten)]
    pub classification: Classification,
    pub episode: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(default)]
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl Activity {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn time_range(&self) -> String {
        let end_fmt = if self.end.date() != self.start.date() {
            "%H:%M (+1d)"
        } else {
            "%H:%M"
        };
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format(end_fmt)
        )
    }

    /// Whether `[start, end)` intersects `[day 00:00, next day 00:00)`.
    pub fn intersects_day(&self, day: NaiveDate) -> bool {
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        self.start < day_end && self.end > day_start
    }
}

/// Input of `LedgerService::add`. Times are optional so a missing one is
/// reported as a validation error rather than a panic.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub episode: String,
    /// Explicit classification; when `None` it is resolved from templates
    /// or the taxonomy.
    pub classification: Option<Classification>,
    pub location: Option<Location>,
    pub description: String,
}

impl ActivityDraft {
    pub fn new(episode: impl Into<String>) -> Self {
        Self {
            episode: episode.into(),
            ..Default::default()
        }
    }

    pub fn between(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn classified(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
