//! Cleanup run reporting
//!
//! Collects per-resource outcomes while a cleanup run deletes cloud
//! resources, then renders a summary table once the run is finished.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ ┌──────────┐ ┌──────────┐
//! │ worker 1 │ │ worker 2 │ │ worker n │   record / record_batch
//! └────┬─────┘ └────┬─────┘ └────┬─────┘
//!      │            │            │
//! ┌────▼────────────▼────────────▼─────┐
//! │            RecordStore             │
//! │   Mutex<HashMap<String, Entry>>    │
//! └─────────────────┬──────────────────┘
//!                   │ snapshot
//! ┌─────────────────▼──────────────────┐
//! │              Reporter              │
//! │   section header + summary table   │
//! └────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use nuke_report::{BatchEntry, Entry, Reporter};
//!
//! let reporter = Reporter::default();
//! reporter.record(Entry::deleted("arn:aws:s3:::logs", "s3-bucket"));
//! reporter.record(Entry::failed(
//!     "arn:aws:s3:::backups",
//!     "s3-bucket",
//!     anyhow::anyhow!("access denied"),
//! ));
//! reporter.record_batch(BatchEntry::new(
//!     vec!["dash-a".to_string(), "dash-b".to_string()],
//!     "cloudwatch-dashboard",
//! ));
//!
//! let report = reporter.render().unwrap();
//! assert!(report.contains("Nuking complete:"));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod render;
pub mod reporter;
pub mod store;

// Re-exports
pub use config::{ReportConfig, ReportFormat, RowOrder};
pub use entry::{BatchEntry, Entry, EntryError, EntryStatus, ReportRow};
pub use error::{ReportError, Result};
pub use reporter::{ReportSummary, Reporter};
pub use store::RecordStore;
