#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rdaylog::core::ledger::LedgerService;
use rdaylog::core::taxonomy::TaxonomyService;
use rdaylog::core::templates::TemplateService;
use rdaylog::models::activity::{Activity, ActivityDraft};
use rdaylog::models::classification::Classification;
use rdaylog::models::taxonomy::Level;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdaylog")
}

/// Isolated home + data directory for one CLI test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `rdaylog --data-dir <tmp>/data` with HOME pointed at the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = rdl();
        cmd.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Runs `init` in test mode (no config file is written).
    pub fn init(&self) -> &Self {
        self.cmd().args(["--test", "init"]).assert().success();
        self
    }

    pub fn add(&self, episode: &str, date: &str, start: &str, end: &str) -> &Self {
        self.cmd()
            .args(["add", episode, "--date", date, "--start", start, "--end", end])
            .assert()
            .success();
        self
    }

    pub fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.data_dir().join(file)).expect("read data file")
    }
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(h, min, 0))
        .expect("valid date-time")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Ledger with empty taxonomy and templates, for pure ledger tests.
/// Explicit classifications passed to `add` are created in the taxonomy first.
pub struct Books {
    pub ledger: LedgerService,
    pub templates: TemplateService,
    pub taxonomy: TaxonomyService,
}

impl Books {
    pub fn empty() -> Self {
        Self {
            ledger: LedgerService::default(),
            templates: TemplateService::default(),
            taxonomy: TaxonomyService::default(),
        }
    }

    /// Creates every missing level of `path`.
    pub fn allow(&mut self, path: &Classification) {
        let segments = path.to_path();
        for depth in 0..segments.len() {
            let level = Level::from_depth(depth).expect("depth below four");
            self.taxonomy
                .add_node(level, &segments[..depth], &segments[depth])
                .expect("valid taxonomy path");
        }
    }

    pub fn add(&mut self, draft: ActivityDraft) -> Activity {
        if let Some(path) = draft.classification.as_ref().filter(|c| c.is_complete()) {
            self.allow(path);
        }
        self.ledger
            .add(draft, &mut self.templates, &self.taxonomy)
            .expect("activity accepted")
    }

    pub fn log(&mut self, episode: &str, start: NaiveDateTime, end: NaiveDateTime) -> Activity {
        self.add(ActivityDraft::new(episode).between(start, end))
    }
}
