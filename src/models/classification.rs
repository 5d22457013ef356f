use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved taxonomy path of an activity: Demand → Project → Activity → Behavior.
/// All four empty means "unclassified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, alias = "cat")]
    pub demand: String,
    #[serde(default)]
    pub project: String,
    #[serde(default, rename = "activity")]
    pub activity_type: String,
    #[serde(default)]
    pub behavior: String,
}

impl Classification {
    pub fn new(
        demand: impl Into<String>,
        project: impl Into<String>,
        activity_type: impl Into<String>,
        behavior: impl Into<String>,
    ) -> Self {
        Self {
            demand: demand.into().trim().to_string(),
            project: project.into().trim().to_string(),
            activity_type: activity_type.into().trim().to_string(),
            behavior: behavior.into().trim().to_string(),
        }
    }

    pub fn unclassified() -> Self {
        Self::default()
    }

    pub fn is_unclassified(&self) -> bool {
        self.segments().iter().all(|s| s.is_empty())
    }

    /// A full path names all four levels.
    pub fn is_complete(&self) -> bool {
        self.segments().iter().all(|s| !s.is_empty())
    }

    pub fn segments(&self) -> [&str; 4] {
        [
            &self.demand,
            &self.project,
            &self.activity_type,
            &self.behavior,
        ]
    }

    pub fn to_path(&self) -> Vec<String> {
        self.segments().iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unclassified() {
            return write!(f, "unclassified");
        }
        let parts: Vec<&str> = self
            .segments()
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        write!(f, "{}", parts.join(" › "))
    }
}
