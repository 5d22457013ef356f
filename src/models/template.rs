use super::{classification::Classification, location::Location};
use serde::{Deserialize, Serialize};

/// Saved binding of an episode name to its classification and default location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(flatten)]
    pub classification: Classification,
    #[serde(flatten)]
    pub location: Location,
}

impl Template {
    pub fn new(classification: Classification, location: Location) -> Self {
        Self {
            classification,
            location,
        }
    }

    pub fn default_location(&self) -> Option<&Location> {
        if self.location.is_empty() {
            None
        } else {
            Some(&self.location)
        }
    }
}
