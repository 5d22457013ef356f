use chrono::NaiveDate;
use serde::Serialize;

pub const MINUTES_PER_DAY: u32 = 1440;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    Activity {
        id: i64,
        episode: String,
        demand: String,
    },
    Gap,
}

/// Half-open `[start_minute, end_minute)` slice of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSegment {
    pub start_minute: u32,
    pub end_minute: u32,
    #[serde(flatten)]
    pub kind: SegmentKind,
}

impl CoverageSegment {
    pub fn gap(start_minute: u32, end_minute: u32) -> Self {
        Self {
            start_minute,
            end_minute,
            kind: SegmentKind::Gap,
        }
    }

    pub fn len(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_gap(&self) -> bool {
        matches!(self.kind, SegmentKind::Gap)
    }
}

/// Gapless partition of one calendar day into activity and gap segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCoverage {
    pub date: NaiveDate,
    pub segments: Vec<CoverageSegment>,
}

impl DayCoverage {
    pub fn covered_minutes(&self) -> u32 {
        self.segments
            .iter()
            .filter(|s| !s.is_gap())
            .map(CoverageSegment::len)
            .sum()
    }

    pub fn gap_minutes(&self) -> u32 {
        self.segments
            .iter()
            .filter(|s| s.is_gap())
            .map(CoverageSegment::len)
            .sum()
    }

    pub fn total_minutes(&self) -> u32 {
        self.segments.iter().map(CoverageSegment::len).sum()
    }
}
