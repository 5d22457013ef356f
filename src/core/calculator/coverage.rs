//! Splits one calendar day into contiguous activity and gap segments.

use crate::models::activity::Activity;
use crate::models::coverage::{CoverageSegment, DayCoverage, MINUTES_PER_DAY, SegmentKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Minute offset of `t` from `day_start`, clamped to `[0, 1440]`.
fn minute_of_day(day_start: NaiveDateTime, t: NaiveDateTime) -> u32 {
    (t - day_start)
        .num_minutes()
        .clamp(0, MINUTES_PER_DAY as i64) as u32
}

/// Coverage of `date` by `activities`.
///
/// The result always spans `[0, 1440)` without holes or overlaps. When two
/// activities overlap, the later-starting one wins: each segment is cut at
/// the start of the next activity.
pub fn build_day_coverage(date: NaiveDate, activities: &[Activity]) -> DayCoverage {
    let day_start = date.and_time(NaiveTime::MIN);

    let mut clipped: Vec<(u32, u32, &Activity)> = activities
        .iter()
        .filter(|a| a.intersects_day(date))
        .map(|a| {
            (
                minute_of_day(day_start, a.start),
                minute_of_day(day_start, a.end),
                a,
            )
        })
        .collect();
    // Stable: equal starts keep ledger order, so the later entry wins.
    clipped.sort_by_key(|(start, _, _)| *start);

    let mut segments = Vec::with_capacity(clipped.len() * 2 + 1);
    let mut cursor = 0u32;

    for (i, (start, end, activity)) in clipped.iter().enumerate() {
        let end = clipped
            .get(i + 1)
            .map_or(*end, |(next_start, _, _)| (*end).min(*next_start));
        if end <= *start {
            continue;
        }

        if *start > cursor {
            segments.push(CoverageSegment::gap(cursor, *start));
        }
        segments.push(CoverageSegment {
            start_minute: *start,
            end_minute: end,
            kind: SegmentKind::Activity {
                id: activity.id,
                episode: activity.episode.clone(),
                demand: activity.classification.demand.clone(),
            },
        });
        cursor = end;
    }

    if cursor < MINUTES_PER_DAY {
        segments.push(CoverageSegment::gap(cursor, MINUTES_PER_DAY));
    }

    DayCoverage { date, segments }
}
