use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityDraft;
use crate::models::location::{Coordinates, Location};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::{self, parse_optional_time};

/// Log a new activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        episode,
        date: date_arg,
        start,
        end,
        class,
        location,
        lat,
        lng,
        description,
        save_template,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Parse times
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Classification and location (optional)
        //
        let classification = class.to_classification()?;

        let coordinates = match (lat, lng) {
            (Some(la), Some(ln)) => Some(Coordinates::new(*la, *ln)?),
            _ => None,
        };
        let place = match (location, coordinates) {
            (None, None) => None,
            (name, coords) => Some(
                Location::named(name.clone().unwrap_or_default()).with_coordinates(coords),
            ),
        };

        //
        // 4. Open session and resolve the default interval
        //
        let mut session = open_session(cfg)?;
        let now = time::now();

        // "now" is only a sensible end for today's entries
        let end_dt = match end_parsed {
            Some(t) => time::at(d, t),
            None if d == now.date() => now,
            None => return Err(AppError::MissingTime("end")),
        };
        let start_dt = match start_parsed {
            Some(t) => time::at(d, t),
            None => {
                let suggested = session.ledger().suggest_start(
                    end_dt.min(now),
                    cfg.gap_threshold(),
                    cfg.default_duration(),
                );
                info(format!("Start defaulted to {}", suggested.format("%Y-%m-%d %H:%M")));
                suggested
            }
        };

        let mut draft = ActivityDraft::new(episode.as_str()).between(start_dt, end_dt);
        draft.classification = classification;
        draft.location = place;
        draft.description = description.clone().unwrap_or_default();

        //
        // 5. Execute
        //
        let activity = session.add_activity(draft)?;

        success(format!(
            "Logged #{}: {} {} ({}) [{}] @ {}",
            activity.id,
            activity.start.format("%Y-%m-%d"),
            activity.time_range(),
            mins2readable(activity.duration, false, false),
            activity.classification,
            activity.location.display(),
        ));

        if *save_template {
            session.save_template(
                &activity.episode,
                activity.classification.clone(),
                Some(activity.location.clone()),
            )?;
            success(format!("Template saved for '{}'.", activity.episode));
        }
    }

    Ok(())
}
