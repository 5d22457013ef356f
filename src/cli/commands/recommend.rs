use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::recommendation::{Recommendation, RecommendationSource};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_score};
use crate::utils::formatting::pad_right;
use crate::utils::time;
use ansi_term::Colour;

fn color_for_source(source: RecommendationSource) -> Colour {
    match source {
        RecommendationSource::TimeOfDay => Colour::Yellow,
        RecommendationSource::Sequence => Colour::Purple,
        RecommendationSource::Location => Colour::Cyan,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recommend { at, dismiss } = cmd {
        let now = match at {
            Some(s) => time::parse_datetime(s)?,
            None => time::now(),
        };

        let mut session = open_session(cfg)?;
        for name in dismiss {
            session.dismiss(name);
        }

        let recs = session.recommend(now);
        if recs.is_empty() {
            info("No suggestions yet: log a few activities first.");
            return Ok(());
        }

        header(format!("Suggestions for {}", now.format("%Y-%m-%d %H:%M")));
        for (i, r) in recs.iter().enumerate() {
            print_recommendation(i + 1, r);
        }
    }
    Ok(())
}

fn print_recommendation(rank: usize, r: &Recommendation) {
    let place = r
        .location
        .as_ref()
        .map(|l| l.display())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{rank}. {} {}{:>3}%{RESET}  {}  @ {}  {}",
        pad_right(&r.name, 20),
        color_for_score(r.score),
        r.score,
        r.classification,
        place,
        color_for_source(r.source).paint(format!("[{}]", r.source.label())),
    );
}
