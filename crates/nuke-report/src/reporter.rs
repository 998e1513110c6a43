//! Final report of a cleanup run

use crate::config::{ReportConfig, ReportFormat, RowOrder};
use crate::entry::{BatchEntry, Entry, ReportRow};
use crate::error::Result;
use crate::render::{outcome_table, render_section};
use crate::store::RecordStore;
use std::io::Write;

/// Records outcomes during a run and prints the summary once it is done
///
/// Workers record through `record`/`record_batch` (or a cloned
/// [`RecordStore`] handle); a single caller prints after all work finished.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    store: RecordStore,
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_store(RecordStore::new(), config)
    }

    /// Report on an existing store
    pub fn with_store(store: RecordStore, config: ReportConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn record(&self, entry: Entry) {
        self.store.record(entry);
    }

    pub fn record_batch(&self, batch: BatchEntry) {
        self.store.record_batch(batch);
    }

    pub fn summary(&self) -> ReportSummary {
        self.store.summary()
    }

    /// Print the report to stdout
    ///
    /// Never fails; a broken stdout is logged and otherwise ignored.
    pub fn print(&self) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_to(&mut out) {
            tracing::warn!("Failed to print cleanup report: {}", e);
        }
    }

    /// Render the report as a string
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the report to any writer
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let entries = self.entries();

        match self.config.format {
            ReportFormat::Table => {
                writeln!(out, "{}", render_section(&self.config.title, self.config.color))?;
                let table = outcome_table(&entries, self.config.show_errors);
                writeln!(out, "{table}")?;
            }
            ReportFormat::Json => {
                let rows: Vec<ReportRow> = entries.iter().map(ReportRow::from).collect();
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            }
        }
        out.flush()?;

        let summary = ReportSummary::from_entries(&entries);
        tracing::info!(
            total = summary.total,
            deleted = summary.deleted,
            failed = summary.failed,
            format = %self.config.format,
            "Cleanup report rendered"
        );
        Ok(())
    }

    /// Snapshot of the store in configured row order
    fn entries(&self) -> Vec<Entry> {
        let mut entries = self.store.snapshot();
        if self.config.order == RowOrder::Identifier {
            entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        }
        entries
    }
}

/// Counts of recorded outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub deleted: usize,
    pub failed: usize,
}

impl ReportSummary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |mut summary, entry| {
                summary.total += 1;
                if entry.is_failure() {
                    summary.failed += 1;
                } else {
                    summary.deleted += 1;
                }
                summary
            })
    }

    /// True when no recorded deletion failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} resources: {} deleted, {} failed",
            self.total, self.deleted, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn plain() -> ReportConfig {
        ReportConfig::default().with_color(false)
    }

    #[test]
    fn test_render_sorted_by_identifier() {
        let reporter = Reporter::new(plain());
        reporter.record(Entry::deleted("b-bucket", "s3"));
        reporter.record(Entry::deleted("a-bucket", "s3"));
        reporter.record(Entry::deleted("c-bucket", "s3"));

        let report = reporter.render().unwrap();
        let a = report.find("a-bucket").unwrap();
        let b = report.find("b-bucket").unwrap();
        let c = report.find("c-bucket").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_render_starts_with_section() {
        let reporter = Reporter::new(plain());
        let report = reporter.render().unwrap();
        assert!(report.starts_with("\nNuking complete:\n\n"));
    }

    #[test]
    fn test_custom_title() {
        let reporter = Reporter::new(plain().with_title("Cleanup finished:"));
        let report = reporter.render().unwrap();
        assert!(report.contains("Cleanup finished:"));
        assert!(!report.contains("Nuking complete:"));
    }

    #[test]
    fn test_json_format() {
        let reporter = Reporter::new(plain().with_format(ReportFormat::Json));
        reporter.record(Entry::deleted("arn:1", "s3"));
        reporter.record(Entry::failed("arn:2", "s3", anyhow!("denied")));

        let report = reporter.render().unwrap();
        let rows: Vec<ReportRow> = serde_json::from_str(&report).unwrap();
        assert_eq!(
            rows,
            vec![
                ReportRow {
                    identifier: "arn:1".to_string(),
                    resource_type: "s3".to_string(),
                    deleted: true,
                    error: None,
                },
                ReportRow {
                    identifier: "arn:2".to_string(),
                    resource_type: "s3".to_string(),
                    deleted: false,
                    error: Some("denied".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_render_does_not_clear_store() {
        let reporter = Reporter::new(plain());
        reporter.record(Entry::deleted("arn:1", "s3"));
        reporter.render().unwrap();
        assert_eq!(reporter.store().len(), 1);
    }

    #[test]
    fn test_with_store_reports_shared_records() {
        let store = RecordStore::new();
        let reporter = Reporter::with_store(store.clone(), plain());
        store.record(Entry::deleted("vpc-1", "vpc"));
        assert!(reporter.render().unwrap().contains("vpc-1"));
    }

    #[test]
    fn test_summary_display() {
        let summary = ReportSummary {
            total: 3,
            deleted: 2,
            failed: 1,
        };
        assert_eq!(summary.to_string(), "3 resources: 2 deleted, 1 failed");
        assert!(!summary.is_success());
        assert!(ReportSummary::default().is_success());
    }
}
