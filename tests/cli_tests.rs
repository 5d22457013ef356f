use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

fn ids(env: &TestEnv) -> Vec<i64> {
    let v: serde_json::Value = serde_json::from_str(&env.read("activities.json")).unwrap();
    v.as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_init_creates_documents() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    for f in ["activities.json", "taxonomy.json", "templates.json"] {
        assert!(env.data_dir().join(f).exists(), "{f} missing");
    }
    assert!(env.read("templates.json").contains("Commute"));
    // no config file in test mode
    assert!(!env.path(".rdaylog/rdaylog.conf").exists());
}

#[test]
fn test_init_keeps_existing_documents() {
    let env = TestEnv::new();
    env.init().add("breakfast", "2025-03-01", "09:00", "10:30");

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Created").not());
    assert_eq!(ids(&env).len(), 1);
}

#[test]
fn test_add_and_list() {
    let env = TestEnv::new();
    env.init()
        .add("breakfast", "2025-03-01", "09:00", "10:30")
        .add("wake up", "2025-03-01", "08:00", "09:00")
        .add("Meal", "2025-03-01", "12:00", "12:45");

    env.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("wake up"))
        .stdout(contains("breakfast"))
        .stdout(contains("08:00 - 09:00"))
        .stdout(contains("Restaurant"))
        .stdout(contains("3 activities"));

    env.cmd()
        .args(["list", "--period", "2025-03-01", "--details", "--demand", "Personal"])
        .assert()
        .success()
        .stdout(contains("Personal › Nutrition"))
        .stdout(contains("breakfast").not());

    env.cmd()
        .args(["list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No activities"));
}

#[test]
fn test_add_overnight_and_explicit_values() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args([
            "add", "night shift", "--date", "2025-03-01", "--start", "23:30", "--end", "00:30",
            "--demand", "Work", "--project", "Office work", "--activity", "Desk work",
            "--behavior", "Sitting", "--loc", "Hospital", "--lat", "45.46", "--lng", "-9.19",
            "--desc", "ER",
        ])
        .assert()
        .success()
        .stdout(contains("23:30 - 00:30 (+1d)"))
        .stdout(contains("01h 00m"))
        .stdout(contains("Work › Office work"));

    let raw = env.read("activities.json");
    assert!(raw.contains("\"end_time\": \"2025-03-02T00:30:00\""));
    assert!(raw.contains("\"location_name\": \"Hospital\""));
    assert!(raw.contains("\"duration\": 60"));
}

#[test]
fn test_add_rejects_bad_input() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["add", "x", "--date", "2025-03-01", "--start", "9h", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    env.cmd()
        .args(["add", "x", "--date", "2025-03-01", "--start", "10:00", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("End time must be later"));

    env.cmd()
        .args(["add", "x", "--date", "2025-03-01", "--start", "09:00", "--end", "10:00", "--demand", "Work"])
        .assert()
        .failure()
        .stderr(contains("--behavior"));

    env.cmd()
        .args(["add", "x", "--date", "2025-03-01", "--start", "09:00", "--end", "10:00", "--lat", "95", "--lng", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));

    env.cmd()
        .args([
            "add", "x", "--date", "2025-03-01", "--start", "09:00", "--end", "10:00",
            "--demand", "No", "--project", "Such", "--activity", "Path", "--behavior", "Here",
            "--save-template",
        ])
        .assert()
        .failure()
        .stderr(contains("Taxonomy path error"));
    assert!(!env.read("templates.json").contains("\"No\""));

    // a past day has no sensible default end
    env.cmd()
        .args(["add", "x", "--date", "2025-03-01", "--start", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Missing end time"));

    assert!(ids(&env).is_empty());
}

#[test]
fn test_add_with_default_times() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["add", "quick note"])
        .assert()
        .success()
        .stdout(contains("Start defaulted to"))
        .stdout(contains("00h 30m"));
}

#[test]
fn test_day_coverage() {
    let env = TestEnv::new();
    env.init()
        .add("breakfast", "2025-03-01", "09:00", "10:30")
        .add("wake up", "2025-03-01", "08:00", "09:00");

    env.cmd()
        .args(["day", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("00:00 - 08:00"))
        .stdout(contains("(gap)"))
        .stdout(contains("10:30 - 24:00"))
        .stdout(contains("2 activities"))
        .stdout(contains("covered 02h 30m"));

    env.cmd()
        .args(["day", "2025-03-02"])
        .assert()
        .success()
        .stdout(contains("0 activities"))
        .stdout(contains("gaps 24h 00m"));
}

#[test]
fn test_del_by_id() {
    let env = TestEnv::new();
    env.init().add("breakfast", "2025-03-01", "09:00", "10:30");
    let id = ids(&env)[0];

    env.cmd()
        .args(["del", &(id + 1).to_string(), "--yes"])
        .assert()
        .success()
        .stdout(contains("not found"));
    assert_eq!(ids(&env).len(), 1);

    // declined confirmation keeps the record
    env.cmd()
        .args(["del", &id.to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));
    assert_eq!(ids(&env).len(), 1);

    env.cmd()
        .args(["del", &id.to_string()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));
    assert!(ids(&env).is_empty());
}

#[test]
fn test_last_and_clear() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .arg("last")
        .assert()
        .success()
        .stdout(contains("No activities"));

    env.add("Work", "2025-03-03", "09:00", "17:00");
    env.cmd()
        .arg("last")
        .assert()
        .success()
        .stdout(contains("Work"))
        .stdout(contains("Office"))
        .stdout(contains("Next entry would start at"));

    env.cmd()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 activities deleted"));
    assert!(ids(&env).is_empty());
    assert!(env.read("templates.json").contains("Work"));
}

#[test]
fn test_recommend() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["recommend", "--at", "2025-03-05 12:10"])
        .assert()
        .success()
        .stdout(contains("No suggestions"));

    for d in ["2025-03-01", "2025-03-02", "2025-03-03"] {
        env.add("Meal", d, "12:00", "12:45");
    }

    env.cmd()
        .args(["recommend", "--at", "2025-03-05 12:10"])
        .assert()
        .success()
        .stdout(contains("Meal"))
        .stdout(contains("95%"));

    env.cmd()
        .args(["recommend", "--at", "2025-03-05 12:10", "--dismiss", "Meal"])
        .assert()
        .success()
        .stdout(contains("No suggestions"));

    env.cmd()
        .args(["recommend", "--at", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn test_template_commands() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(contains("Commute").and(contains("Sleep")));

    env.cmd()
        .args([
            "template", "set", "brunch", "--demand", "Personal", "--project", "Nutrition",
            "--activity", "Eating", "--behavior", "Sitting", "--loc", "Cafe",
        ])
        .assert()
        .success()
        .stdout(contains("Template 'brunch' saved"));

    env.cmd()
        .args(["template", "show", "brunch"])
        .assert()
        .success()
        .stdout(contains("Cafe"));

    env.cmd()
        .args(["taxonomy", "resolve", "brunch"])
        .assert()
        .success()
        .stdout(contains("Personal › Nutrition › Eating › Sitting"));

    env.cmd()
        .args([
            "template", "set", "brunch", "--demand", "No", "--project", "Such",
            "--activity", "Path", "--behavior", "Here",
        ])
        .assert()
        .failure()
        .stderr(contains("Taxonomy path error"));

    env.cmd()
        .args(["template", "del", "brunch"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    env.cmd()
        .args(["template", "show", "brunch"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_taxonomy_commands() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["taxonomy", "add", "project", "Reading", "--path", "Personal"])
        .assert()
        .success()
        .stdout(contains("Added project 'Reading'"));

    env.cmd()
        .args(["taxonomy", "add", "activity", "Novel", "--path", "Personal/Reading"])
        .assert()
        .success();

    env.cmd()
        .args(["taxonomy", "tree"])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("Novel"));

    // Social › Friends has a single activity
    env.cmd()
        .args(["taxonomy", "rm", "activity", "Meeting", "--path", "Social/Friends"])
        .assert()
        .failure()
        .stderr(contains("last remaining entry"));

    env.cmd()
        .args(["taxonomy", "add", "behavior", "x", "--path", "Personal"])
        .assert()
        .failure()
        .stderr(contains("parent path"));

    env.cmd()
        .args(["taxonomy", "rm", "project", "Reading", "--path", "Personal"])
        .assert()
        .success()
        .stdout(contains("Removed project 'Reading'"));

    env.cmd()
        .args(["taxonomy", "resolve", "nothing"])
        .assert()
        .success()
        .stdout(contains("not listed"));
}

#[test]
fn test_corrupt_document_falls_back() {
    let env = TestEnv::new();
    env.init();
    std::fs::write(env.data_dir().join("taxonomy.json"), "{ broken").unwrap();

    env.cmd()
        .args(["taxonomy", "resolve", "Sleep"])
        .assert()
        .success()
        .stdout(contains("Personal › Sleep"));
}
