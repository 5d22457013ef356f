use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::coverage::{CoverageSegment, DayCoverage, MINUTES_PER_DAY, SegmentKind};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_demand};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::minute_label;

const BAR_CELLS: u32 = 48;
const CELL_MINUTES: u32 = MINUTES_PER_DAY / BAR_CELLS;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let session = open_session(cfg)?;
        let summary = session.day_summary(d);

        header(d.format("%A %Y-%m-%d"));
        println!("{}", render_bar(&summary.coverage));
        println!("{GREY}00    03    06    09    12    15    18    21    24{RESET}\n");

        for seg in &summary.coverage.segments {
            println!("{}", describe(seg));
        }

        println!(
            "\n{} activities · covered {} · gaps {}",
            summary.activity_count,
            mins2readable(summary.covered_minutes as i64, false, false),
            mins2readable(summary.gap_minutes as i64, false, false),
        );
    }
    Ok(())
}

/// One character per half hour, colored by the segment at its midpoint.
fn render_bar(coverage: &DayCoverage) -> String {
    let mut bar = String::new();
    for cell in 0..BAR_CELLS {
        let mid = cell * CELL_MINUTES + CELL_MINUTES / 2;
        let seg = coverage
            .segments
            .iter()
            .find(|s| s.start_minute <= mid && mid < s.end_minute);
        match seg.map(|s| &s.kind) {
            Some(SegmentKind::Activity { demand, .. }) => {
                bar.push_str(&format!("{}█{RESET}", color_for_demand(demand)));
            }
            _ => bar.push_str(&format!("{GREY}·{RESET}")),
        }
    }
    bar
}

fn describe(seg: &CoverageSegment) -> String {
    let span = format!(
        "{} - {}",
        minute_label(seg.start_minute),
        minute_label(seg.end_minute)
    );
    let len = mins2readable(seg.len() as i64, false, true);
    match &seg.kind {
        SegmentKind::Activity {
            id,
            episode,
            demand,
        } => format!(
            "{span}  {len}  {}{episode}{RESET} {GREY}#{id}{RESET}",
            color_for_demand(demand)
        ),
        SegmentKind::Gap => format!("{GREY}{span}  {len}  (gap){RESET}"),
    }
}
