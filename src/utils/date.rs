use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

/// Bounds of a single period expression: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn single_period(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    match p.len() {
        4 => {
            let year: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            month_bounds(y.parse().ok()?, m.parse().ok()?)
        }
        10 => parse_date(p).map(|d| (d, d)),
        _ => None,
    }
}

/// Parse a period (used by `list --period` and `export --range`).
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - A:B, where A and B are any of the above (e.g. `2024-09:2025-09`)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("invalid period '{p}'"));

    let (from, to) = match p.split_once(':') {
        Some((a, b)) => {
            let (from, _) = single_period(a).ok_or_else(invalid)?;
            let (_, to) = single_period(b).ok_or_else(invalid)?;
            (from, to)
        }
        None => single_period(p).ok_or_else(invalid)?,
    };

    if to < from {
        return Err(AppError::InvalidDate(format!(
            "period '{p}' ends before it starts"
        )));
    }
    Ok((from, to))
}

pub fn current_month() -> (NaiveDate, NaiveDate) {
    let t = today();
    month_bounds(t.year(), t.month()).unwrap_or((t, t))
}
