use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::ActivityFilter;
use crate::errors::AppResult;
use crate::models::activity::Activity;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        today,
        search,
        class,
        location,
        details,
    } = cmd
    {
        let session = open_session(cfg)?;

        let mut filter = ActivityFilter {
            text: search.clone(),
            demand: class.demand.clone(),
            project: class.project.clone(),
            activity_type: class.activity.clone(),
            behavior: class.behavior.clone(),
            location: location.clone(),
            ..Default::default()
        };

        let narrowed = filter.text.is_some()
            || filter.demand.is_some()
            || filter.project.is_some()
            || filter.activity_type.is_some()
            || filter.behavior.is_some()
            || filter.location.is_some();

        // Period: --today, --period, or the current month when nothing else narrows the list
        let label = if *today {
            let d = date::today();
            filter.date = Some(d);
            d.to_string()
        } else if let Some(p) = period {
            let (from, to) = date::parse_period(p)?;
            filter.from = Some(from);
            filter.to = Some(to);
            format!("{from} → {to}")
        } else if !narrowed {
            let (from, to) = date::current_month();
            filter.from = Some(from);
            filter.to = Some(to);
            format!("{from} → {to}")
        } else {
            "all dates".to_string()
        };

        let rows: Vec<&Activity> = session.ledger().list(&filter).collect();
        if rows.is_empty() {
            info(format!("No activities for {label}."));
            return Ok(());
        }

        print_table(&rows, *details);

        let total: i64 = rows.iter().map(|a| a.duration).sum();
        println!(
            "{GREY}{} activities, {} logged ({label}){RESET}",
            rows.len(),
            mins2readable(total, false, false)
        );
    }
    Ok(())
}

fn print_table(rows: &[&Activity], details: bool) {
    let mut columns = vec![
        Column::new("ID", 14),
        Column::new("Date", 10),
        Column::new("Time", 19),
        Column::new("Min", 5),
        Column::new("Episode", 24),
        Column::new("Location", 20),
    ];
    if details {
        columns.push(Column::new("Classification", 60));
        columns.push(Column::new("Note", 40));
    }

    let mut table = Table::new(columns);
    for a in rows {
        let mut row = vec![
            a.id.to_string(),
            a.start.format("%Y-%m-%d").to_string(),
            a.time_range(),
            a.duration.to_string(),
            a.episode.clone(),
            a.location.display(),
        ];
        if details {
            row.push(a.classification.to_string());
            row.push(if a.description.is_empty() {
                "-".to_string()
            } else {
                a.description.clone()
            });
        }
        table.add_row(row);
    }

    print!("{}", table.render());
}
