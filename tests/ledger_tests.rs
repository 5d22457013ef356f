use rdaylog::core::ledger::{ActivityFilter, normalize_interval};
use rdaylog::errors::AppError;
use rdaylog::models::activity::ActivityDraft;
use rdaylog::models::classification::Classification;
use rdaylog::models::location::Location;

mod common;
use chrono::Duration;
use common::{Books, day, dt};

#[test]
fn add_computes_duration_and_keeps_order() {
    let mut books = Books::empty();

    let breakfast = books.log("breakfast", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 30));
    assert_eq!(breakfast.duration, 90);
    assert_eq!(books.ledger.len(), 1);

    books.log("wake up", dt(2025, 3, 1, 8, 0), dt(2025, 3, 1, 9, 0));

    let names: Vec<&str> = books
        .ledger
        .list(&ActivityFilter::default())
        .map(|a| a.episode.as_str())
        .collect();
    assert_eq!(names, ["wake up", "breakfast"]);
}

#[test]
fn ledger_stays_sorted_after_every_add() {
    let mut books = Books::empty();
    for (h, name) in [(14, "c"), (7, "a"), (20, "d"), (9, "b"), (7, "a2")] {
        books.log(name, dt(2025, 3, 2, h, 0), dt(2025, 3, 2, h, 30));
        let starts: Vec<_> = books.ledger.as_slice().iter().map(|a| a.start).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }
    // equal starts keep insertion order
    let names: Vec<&str> = books.ledger.as_slice().iter().map(|a| a.episode.as_str()).collect();
    assert_eq!(names, ["a", "a2", "b", "c", "d"]);
}

#[test]
fn overnight_entry_wraps_to_next_day() {
    let mut books = Books::empty();
    let a = books.log("night shift", dt(2025, 3, 1, 23, 30), dt(2025, 3, 1, 0, 30));

    assert_eq!(a.duration, 60);
    assert_eq!(a.end, dt(2025, 3, 2, 0, 30));
    assert_eq!(a.time_range(), "23:30 - 00:30 (+1d)");

    let b = books.log("late", dt(2025, 3, 3, 23, 0), dt(2025, 3, 3, 1, 0));
    assert_eq!(b.duration, 120);
}

#[test]
fn equal_endpoints_are_rejected() {
    let err = normalize_interval(dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 9, 0)).unwrap_err();
    assert!(matches!(err, AppError::NonPositiveDuration { .. }));

    // An end on an earlier date is not an overnight wrap.
    let err = normalize_interval(dt(2025, 3, 2, 9, 0), dt(2025, 3, 1, 10, 0)).unwrap_err();
    assert!(matches!(err, AppError::NonPositiveDuration { .. }));
}

#[test]
fn validation_errors_leave_ledger_untouched() {
    let mut books = Books::empty();
    books.log("one", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 0));

    let missing = ActivityDraft::new("two");
    let err = books
        .ledger
        .add(missing, &mut books.templates, &books.taxonomy)
        .unwrap_err();
    assert!(matches!(err, AppError::MissingTime("start")));

    let blank = ActivityDraft::new("   ").between(dt(2025, 3, 1, 11, 0), dt(2025, 3, 1, 12, 0));
    let err = books
        .ledger
        .add(blank, &mut books.templates, &books.taxonomy)
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyEpisode));

    assert_eq!(books.ledger.len(), 1);
    assert_eq!(books.templates.len(), 1);
}

#[test]
fn unknown_explicit_path_is_rejected_before_insert() {
    let mut books = Books::empty();
    books.log("seed", dt(2025, 3, 1, 8, 0), dt(2025, 3, 1, 9, 0));
    let templates_before = books.templates.len();

    let bogus = ActivityDraft::new("odd")
        .between(dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 0))
        .classified(Classification::new("No", "Such", "Path", "Here"));
    let err = books
        .ledger
        .add(bogus, &mut books.templates, &books.taxonomy)
        .unwrap_err();
    assert!(matches!(err, AppError::TaxonomyPath(_)));
    assert_eq!(books.ledger.len(), 1);
    assert_eq!(books.templates.len(), templates_before);
    assert!(books.templates.lookup("odd").is_none());

    // an explicit empty path means "unclassified" and is always accepted
    let plain = ActivityDraft::new("odd")
        .between(dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 0))
        .classified(Classification::unclassified());
    let added = books
        .ledger
        .add(plain, &mut books.templates, &books.taxonomy)
        .expect("unclassified accepted");
    assert!(added.classification.is_unclassified());
    assert_eq!(books.ledger.len(), 2);
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut books = Books::empty();
    let a = books.log("a", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 0));
    let b = books.log("b", dt(2025, 3, 1, 8, 0), dt(2025, 3, 1, 9, 0));
    let before: Vec<i64> = books.ledger.as_slice().iter().map(|x| x.id).collect();

    assert!(!books.ledger.remove(a.id.max(b.id) + 1000));
    let after: Vec<i64> = books.ledger.as_slice().iter().map(|x| x.id).collect();
    assert_eq!(before, after);

    assert!(books.ledger.remove(a.id));
    assert_eq!(books.ledger.len(), 1);
    assert!(books.ledger.get(a.id).is_none());
}

#[test]
fn ids_are_unique_even_when_added_quickly() {
    let mut books = Books::empty();
    let ids: Vec<i64> = (0..20)
        .map(|i| books.log("x", dt(2025, 3, 1, 0, i), dt(2025, 3, 1, 0, i + 1)).id)
        .collect();
    let mut dedup = ids.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), ids.len());
}

#[test]
fn explicit_values_beat_template() {
    let mut books = Books::empty();
    let sport = Classification::new("Personal", "Health", "Sport", "Running");
    books.add(
        ActivityDraft::new("run")
            .between(dt(2025, 3, 1, 7, 0), dt(2025, 3, 1, 8, 0))
            .classified(sport.clone())
            .at(Location::named("Park")),
    );

    // template was learned: a bare entry reuses it
    let again = books.log("run", dt(2025, 3, 2, 7, 0), dt(2025, 3, 2, 8, 0));
    assert_eq!(again.classification, sport);
    assert_eq!(again.location.name, "Park");

    // explicit location wins, template unchanged
    let other = books.add(
        ActivityDraft::new("run")
            .between(dt(2025, 3, 3, 7, 0), dt(2025, 3, 3, 8, 0))
            .at(Location::named("Beach"))
            .described("windy"),
    );
    assert_eq!(other.location.name, "Beach");
    assert_eq!(other.description, "windy");
    assert_eq!(
        books.templates.lookup("run").map(|t| t.location.name.as_str()),
        Some("Park")
    );
}

#[test]
fn filter_by_day_text_and_category() {
    let mut books = Books::empty();
    let work = Classification::new("Work", "Office work", "Desk work", "Sitting");
    books.add(
        ActivityDraft::new("Standup")
            .between(dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 9, 15))
            .classified(work)
            .described("daily sync"),
    );
    books.log("night shift", dt(2025, 3, 1, 23, 0), dt(2025, 3, 2, 2, 0));
    books.log("lunch", dt(2025, 3, 2, 12, 0), dt(2025, 3, 2, 13, 0));

    let on_second: Vec<&str> = books
        .ledger
        .list(&ActivityFilter::on(day(2025, 3, 2)))
        .map(|a| a.episode.as_str())
        .collect();
    assert_eq!(on_second, ["night shift", "lunch"]);

    let text = ActivityFilter {
        text: Some("SYNC".into()),
        ..Default::default()
    };
    assert_eq!(books.ledger.list(&text).count(), 1);

    let by_demand = ActivityFilter {
        demand: Some("work".into()),
        ..Default::default()
    };
    let listed = books.ledger.list(&by_demand);
    // restartable view
    assert_eq!(listed.clone().count(), 1);
    assert_eq!(listed.map(|a| a.episode.as_str()).next(), Some("Standup"));
}

#[test]
fn suggest_start_follows_last_entry() {
    let mut books = Books::empty();
    let threshold = Duration::hours(12);
    let dd = Duration::minutes(30);
    let now = dt(2025, 3, 1, 12, 0);

    assert_eq!(books.ledger.suggest_start(now, threshold, dd), dt(2025, 3, 1, 11, 30));

    books.log("work", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 11, 0));
    assert_eq!(books.ledger.suggest_start(now, threshold, dd), dt(2025, 3, 1, 11, 0));

    let much_later = dt(2025, 3, 2, 12, 0);
    assert_eq!(
        books.ledger.suggest_start(much_later, threshold, dd),
        dt(2025, 3, 2, 11, 30)
    );

    let before_end = dt(2025, 3, 1, 10, 0);
    assert_eq!(books.ledger.suggest_start(before_end, threshold, dd), before_end);
}

#[test]
fn clear_empties_the_ledger() {
    let mut books = Books::empty();
    books.log("a", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 10, 0));
    books.log("b", dt(2025, 3, 1, 10, 0), dt(2025, 3, 1, 11, 0));
    assert_eq!(books.ledger.clear(), 2);
    assert!(books.ledger.is_empty());
    assert!(books.ledger.last().is_none());
}
