use crate::core::calculator::coverage::build_day_coverage;
use crate::models::activity::Activity;
use crate::models::day_summary::DaySummary;
use chrono::NaiveDate;

/// Count of activities touching `date` plus recorded and unrecorded minutes.
pub fn build_day_summary(date: NaiveDate, activities: &[Activity]) -> DaySummary {
    let coverage = build_day_coverage(date, activities);

    DaySummary {
        date,
        activity_count: activities.iter().filter(|a| a.intersects_day(date)).count(),
        covered_minutes: coverage.covered_minutes(),
        gap_minutes: coverage.gap_minutes(),
        coverage,
    }
}
