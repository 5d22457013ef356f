use super::coverage::DayCoverage;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub activity_count: usize,
    pub covered_minutes: u32,
    pub gap_minutes: u32,
    pub coverage: DayCoverage,
}
