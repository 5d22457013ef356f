use rdaylog::core::seed;
use rdaylog::core::taxonomy::TaxonomyService;
use rdaylog::core::templates::TemplateService;
use rdaylog::errors::AppError;
use rdaylog::models::activity::ActivityDraft;
use rdaylog::models::classification::Classification;
use rdaylog::models::location::Location;
use rdaylog::models::template::Template;

mod common;
use common::{Books, dt};

fn meal() -> Classification {
    Classification::new("Personal", "Nutrition", "Eating", "Sitting")
}

#[test]
fn first_use_learns_a_template() {
    let mut books = Books::empty();
    let first = books.add(
        ActivityDraft::new("tea")
            .between(dt(2025, 3, 1, 16, 0), dt(2025, 3, 1, 16, 15))
            .classified(meal())
            .at(Location::named("Kitchen")),
    );

    let t = books.templates.lookup("tea").cloned().unwrap();
    assert_eq!(t.classification, first.classification);
    assert_eq!(t.location.name, "Kitchen");

    // logging again without explicit values reuses it, unchanged
    let again = books.log("tea", dt(2025, 3, 2, 16, 0), dt(2025, 3, 2, 16, 15));
    assert_eq!(again.classification, meal());
    assert_eq!(books.templates.lookup("tea"), Some(&t));
}

#[test]
fn learn_never_overwrites() {
    let mut templates = TemplateService::default();
    assert!(templates.learn("x", &meal(), &Location::default()));
    assert!(!templates.learn("x", &Classification::unclassified(), &Location::named("Elsewhere")));
    assert_eq!(templates.lookup("x").map(|t| t.classification.clone()), Some(meal()));
}

#[test]
fn upsert_wins_and_validates_the_path() {
    let taxonomy = TaxonomyService::new(seed::taxonomy());
    let mut templates = TemplateService::new(seed::templates());

    let work = Classification::new("Work", "Office work", "Desk work", "Sitting");
    let saved = templates
        .upsert("Meal", work.clone(), Some(Location::named("Canteen")), &taxonomy)
        .unwrap();
    assert_eq!(saved, Template::new(work, Location::named("Canteen")));
    assert_eq!(templates.lookup("Meal"), Some(&saved));

    let bogus = Classification::new("No", "Such", "Path", "Here");
    let err = templates.upsert("Meal", bogus, None, &taxonomy).unwrap_err();
    assert!(matches!(err, AppError::TaxonomyPath(_)));

    let err = templates
        .upsert(" ", Classification::unclassified(), None, &taxonomy)
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyEpisode));
}

#[test]
fn classification_falls_back_to_taxonomy_then_unclassified() {
    let mut books = Books::empty();
    books.taxonomy = TaxonomyService::new(seed::taxonomy());

    let commute = books.log("Commute", dt(2025, 3, 1, 8, 0), dt(2025, 3, 1, 8, 40));
    assert_eq!(
        commute.classification,
        Classification::new("Mobility", "Commute", "Transit", "Riding")
    );

    let odd = books.log("juggling", dt(2025, 3, 1, 9, 0), dt(2025, 3, 1, 9, 10));
    assert!(odd.classification.is_unclassified());
    assert_eq!(odd.classification.to_string(), "unclassified");
}

#[test]
fn delete_and_list() {
    let mut templates = TemplateService::new(seed::templates());
    let names: Vec<&str> = templates.list().map(|(n, _)| n).collect();
    assert_eq!(names, ["Commute", "Meal", "Phone", "Sleep", "Work"]);

    assert!(templates.delete("Phone"));
    assert!(!templates.delete("Phone"));
    assert_eq!(templates.len(), 4);
}
