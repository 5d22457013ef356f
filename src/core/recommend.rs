//! Heuristic "what next?" suggestions from the activity history.
//!
//! Three independent generators (time of day, recent sequence, recent places)
//! each propose candidates; [`merge_candidates`] keeps the best score per
//! name. No history means no suggestions.

use crate::core::templates::TemplateService;
use crate::models::activity::Activity;
use crate::models::classification::Classification;
use crate::models::location::Location;
use crate::models::recommendation::{Recommendation, RecommendationSource};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

const TIME_OF_DAY_CAP: f64 = 95.0;
const SEQUENCE_CAP: f64 = 90.0;
const LOCATION_CAP: f64 = 85.0;
const TIME_OF_DAY_GROUPS: usize = 2;
const MIN_TRANSITIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayBand {
    EarlyMorning,
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

impl DayBand {
    pub fn of(t: NaiveTime) -> Self {
        match t.hour() {
            5..=7 => DayBand::EarlyMorning,
            8..=10 => DayBand::Morning,
            11..=12 => DayBand::Midday,
            13..=16 => DayBand::Afternoon,
            17..=20 => DayBand::Evening,
            _ => DayBand::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayBand::EarlyMorning => "early morning",
            DayBand::Morning => "morning",
            DayBand::Midday => "midday",
            DayBand::Afternoon => "afternoon",
            DayBand::Evening => "evening",
            DayBand::Night => "night",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub max_results: usize,
    /// How many of the most recent activities the sequence heuristic looks at.
    pub sequence_window: usize,
    /// How many distinct recent places the location heuristic looks at.
    pub location_cap: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            max_results: 3,
            sequence_window: 10,
            location_cap: 3,
        }
    }
}

fn score(count: usize, total: usize, cap: f64) -> u8 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round().min(cap) as u8
}

/// Same-classification activities, in chronological order.
struct Group<'a> {
    classification: Classification,
    members: Vec<&'a Activity>,
}

#[derive(PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Path(&'a Classification),
    Episode(&'a str),
}

/// Unclassified activities have no shared path, so each episode name is its
/// own group.
fn group_key(a: &Activity) -> GroupKey<'_> {
    if a.classification.is_unclassified() {
        GroupKey::Episode(a.episode.trim())
    } else {
        GroupKey::Path(&a.classification)
    }
}

/// Groups by full classification path (or episode, when unclassified),
/// largest first; ties go to the group seen most recently.
fn group_by_classification<'a>(activities: &[&'a Activity]) -> Vec<Group<'a>> {
    let mut index: HashMap<GroupKey<'a>, usize> = HashMap::new();
    let mut groups: Vec<Group<'a>> = Vec::new();

    for &a in activities {
        match index.get(&group_key(a)) {
            Some(&i) => groups[i].members.push(a),
            None => {
                index.insert(group_key(a), groups.len());
                groups.push(Group {
                    classification: a.classification.clone(),
                    members: vec![a],
                });
            }
        }
    }

    groups.sort_by(|x, y| {
        y.members
            .len()
            .cmp(&x.members.len())
            .then_with(|| last_start(y).cmp(&last_start(x)))
    });
    groups
}

fn last_start(g: &Group) -> NaiveDateTime {
    g.members
        .last()
        .map(|a| a.start)
        .unwrap_or(NaiveDateTime::MIN)
}

/// Most frequent value of `key` among `members`; ties go to the most recent.
fn most_frequent<'a, F>(members: &[&'a Activity], key: F) -> Option<&'a Activity>
where
    F: Fn(&Activity) -> &str,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, a) in members.iter().enumerate() {
        let k = key(a);
        if k.trim().is_empty() {
            continue;
        }
        let entry = counts.entry(k).or_insert((0, i));
        entry.0 += 1;
        entry.1 = i;
    }
    counts
        .into_values()
        .max_by_key(|(count, last)| (*count, *last))
        .map(|(_, last)| members[last])
}

fn candidate(
    group: &Group,
    score: u8,
    source: RecommendationSource,
    location: Option<Location>,
    templates: &TemplateService,
) -> Option<Recommendation> {
    let name = most_frequent(&group.members, |a| &a.episode)?.episode.clone();
    let location = location
        .or_else(|| {
            templates
                .lookup(&name)
                .and_then(|t| t.default_location().cloned())
        })
        .or_else(|| most_frequent(&group.members, |a| &a.location.name).map(|a| a.location.clone()));

    Some(Recommendation {
        name,
        score,
        classification: group.classification.clone(),
        location,
        source,
    })
}

/// Classifications most often started in the same band of the day as `now`.
pub fn time_of_day_candidates(
    now: NaiveDateTime,
    history: &[&Activity],
    templates: &TemplateService,
) -> Vec<Recommendation> {
    let band = DayBand::of(now.time());
    let in_band: Vec<&Activity> = history
        .iter()
        .copied()
        .filter(|a| DayBand::of(a.start.time()) == band)
        .collect();
    if in_band.is_empty() {
        return Vec::new();
    }

    debug!(band = band.label(), total = in_band.len(), "time-of-day history");
    group_by_classification(&in_band)
        .iter()
        .take(TIME_OF_DAY_GROUPS)
        .filter_map(|g| {
            candidate(
                g,
                score(g.members.len(), in_band.len(), TIME_OF_DAY_CAP),
                RecommendationSource::TimeOfDay,
                None,
                templates,
            )
        })
        .collect()
}

/// What usually follows the classification of the latest activity, judged
/// on the last `window` activities. A transition must recur to count.
pub fn sequence_candidates(
    history: &[&Activity],
    window: usize,
    templates: &TemplateService,
) -> Vec<Recommendation> {
    let recent = &history[history.len().saturating_sub(window)..];
    if recent.len() < 2 {
        return Vec::new();
    }
    let Some(tail) = recent.last() else {
        return Vec::new();
    };
    let transitions = recent.len() - 1;

    let successors: Vec<&Activity> = recent
        .windows(2)
        .filter(|w| group_key(w[0]) == group_key(tail))
        .map(|w| w[1])
        .collect();

    group_by_classification(&successors)
        .into_iter()
        .next()
        .filter(|g| g.members.len() >= MIN_TRANSITIONS)
        .and_then(|g| {
            candidate(
                &g,
                score(g.members.len(), transitions, SEQUENCE_CAP),
                RecommendationSource::Sequence,
                None,
                templates,
            )
        })
        .into_iter()
        .collect()
}

/// For each recently visited place, the classification most often logged there.
pub fn location_candidates(
    history: &[&Activity],
    cap: usize,
    templates: &TemplateService,
) -> Vec<Recommendation> {
    let mut places: Vec<&str> = Vec::new();
    for a in history.iter().rev() {
        let name = a.location.name.trim();
        if name.is_empty() || places.contains(&name) {
            continue;
        }
        places.push(name);
        if places.len() == cap {
            break;
        }
    }

    places
        .into_iter()
        .filter_map(|place| {
            let here: Vec<&Activity> = history
                .iter()
                .copied()
                .filter(|a| a.location.name.trim() == place)
                .collect();
            let group = group_by_classification(&here).into_iter().next()?;
            let location = group.members.last().map(|a| a.location.clone());
            candidate(
                &group,
                score(group.members.len(), here.len(), LOCATION_CAP),
                RecommendationSource::Location,
                location,
                templates,
            )
        })
        .collect()
}

/// Drops dismissed names, keeps the best score per name, sorts by score
/// (descending, stable) and truncates.
pub fn merge_candidates(
    candidates: Vec<Recommendation>,
    dismissed: &BTreeSet<String>,
    max: usize,
) -> Vec<Recommendation> {
    let mut merged: Vec<Recommendation> = Vec::new();
    for c in candidates {
        if dismissed.contains(&c.name) {
            continue;
        }
        match merged.iter_mut().find(|m| m.name == c.name) {
            Some(existing) if c.score > existing.score => *existing = c,
            Some(_) => {}
            None => merged.push(c),
        }
    }
    merged.sort_by(|a, b| b.score.cmp(&a.score));
    merged.truncate(max);
    merged
}

/// Per-session recommender: settings plus names dismissed in this session.
#[derive(Debug, Clone, Default)]
pub struct RecommendationService {
    settings: RecommendationSettings,
    dismissed: BTreeSet<String>,
}

impl RecommendationService {
    pub fn new(settings: RecommendationSettings) -> Self {
        Self {
            settings,
            dismissed: BTreeSet::new(),
        }
    }

    pub fn dismiss(&mut self, name: &str) {
        self.dismissed.insert(name.trim().to_string());
    }

    /// Ranked suggestions for `now` from the activities that started by then.
    pub fn recommend(
        &self,
        now: NaiveDateTime,
        activities: &[Activity],
        templates: &TemplateService,
    ) -> Vec<Recommendation> {
        let history: Vec<&Activity> = activities.iter().filter(|a| a.start <= now).collect();
        if history.is_empty() {
            return Vec::new();
        }

        let mut candidates = time_of_day_candidates(now, &history, templates);
        candidates.extend(sequence_candidates(
            &history,
            self.settings.sequence_window,
            templates,
        ));
        candidates.extend(location_candidates(
            &history,
            self.settings.location_cap,
            templates,
        ));

        merge_candidates(candidates, &self.dismissed, self.settings.max_results)
    }
}
