use crate::models::activity::Activity;
use serde::Serialize;

/// Flat row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActivityExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: i64,
    pub episode: String,
    pub demand: String,
    pub project: String,
    pub activity: String,
    pub behavior: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: String,
}

impl From<&Activity> for ActivityExport {
    fn from(a: &Activity) -> Self {
        let c = &a.classification;
        Self {
            id: a.id,
            date: a.start.format("%Y-%m-%d").to_string(),
            start: a.start.format("%Y-%m-%dT%H:%M").to_string(),
            end: a.end.format("%Y-%m-%dT%H:%M").to_string(),
            duration: a.duration,
            episode: a.episode.clone(),
            demand: c.demand.clone(),
            project: c.project.clone(),
            activity: c.activity_type.clone(),
            behavior: c.behavior.clone(),
            location: a.location.name.clone(),
            lat: a.location.coordinates.map(|p| p.lat),
            lng: a.location.coordinates.map(|p| p.lng),
            description: a.description.clone(),
        }
    }
}
