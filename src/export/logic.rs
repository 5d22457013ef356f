use crate::core::ledger::{ActivityFilter, LedgerService};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ActivityExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger.
    ///
    /// - `range`: `None`, `"all"` or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B` (each side any of the former)
    ///
    /// Returns the number of exported rows.
    pub fn export(
        ledger: &LedgerService,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let mut filter = ActivityFilter::default();
        if let Some(r) = range.filter(|r| !r.eq_ignore_ascii_case("all")) {
            let (from, to) = parse_period(r)?;
            filter.from = Some(from);
            filter.to = Some(to);
        }

        let rows: Vec<ActivityExport> = ledger.list(&filter).map(ActivityExport::from).collect();

        if rows.is_empty() {
            warning("No activities found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }
        info!(format = format.as_str(), rows = rows.len(), file, "export written");

        Ok(rows.len())
    }
}
