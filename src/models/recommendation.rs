use super::{classification::Classification, location::Location};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    TimeOfDay,
    Sequence,
    Location,
}

impl RecommendationSource {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationSource::TimeOfDay => "time of day",
            RecommendationSource::Sequence => "usually next",
            RecommendationSource::Location => "at this place",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    /// 0..=100
    pub score: u8,
    pub classification: Classification,
    pub location: Option<Location>,
    pub source: RecommendationSource,
}
