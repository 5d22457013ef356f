pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod day;
pub mod del;
pub mod export;
pub mod init;
pub mod last;
pub mod list;
pub mod recommend;
pub mod taxonomy;
pub mod template;

use crate::cli::parser::ClassArgs;
use crate::config::Config;
use crate::core::recommend::RecommendationSettings;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::classification::Classification;
use crate::store::JsonFileStore;

pub(crate) type CliSession = Session<JsonFileStore>;

/// Opens the session backed by the configured data directory.
pub(crate) fn open_session(cfg: &Config) -> AppResult<CliSession> {
    let store = JsonFileStore::new(cfg.data_path())?;
    let settings = RecommendationSettings {
        max_results: cfg.max_recommendations,
        sequence_window: cfg.sequence_window,
        location_cap: cfg.location_cap,
    };
    Ok(Session::open(store, settings))
}

impl ClassArgs {
    /// `None` when no flag was given; all four are required otherwise.
    pub fn to_classification(&self) -> AppResult<Option<Classification>> {
        let fields = [&self.demand, &self.project, &self.activity, &self.behavior];
        if fields.iter().all(|f| f.is_none()) {
            return Ok(None);
        }
        match fields {
            [Some(d), Some(p), Some(a), Some(b)] => Ok(Some(Classification::new(
                d.as_str(),
                p.as_str(),
                a.as_str(),
                b.as_str(),
            ))),
            _ => Err(AppError::TaxonomyPath(
                "give all of --demand, --project, --activity and --behavior".to_string(),
            )),
        }
    }
}

/// Splits `Personal/Sleep` into path elements.
pub(crate) fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
