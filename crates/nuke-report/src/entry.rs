//! Outcome types recorded by cleanup workers

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error attached to a failed outcome
///
/// Shared so one batch failure can be attached to every identifier in the batch.
pub type EntryError = Arc<anyhow::Error>;

/// Outcome of deleting a single resource
#[derive(Debug, Clone)]
pub struct Entry {
    /// Unique resource identifier (ARN, resource ID, ...)
    pub identifier: String,

    /// Resource type label (e.g., "s3-bucket", "ec2-instance")
    pub resource_type: String,

    /// Error if the deletion failed
    pub error: Option<EntryError>,
}

impl Entry {
    /// Outcome of a resource that was deleted
    pub fn deleted(identifier: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            resource_type: resource_type.into(),
            error: None,
        }
    }

    /// Outcome of a resource whose deletion failed
    pub fn failed(
        identifier: impl Into<String>,
        resource_type: impl Into<String>,
        error: impl Into<anyhow::Error>,
    ) -> Self {
        Self::deleted(identifier, resource_type).with_error(Arc::new(error.into()))
    }

    pub fn with_error(mut self, error: EntryError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn status(&self) -> EntryStatus {
        if self.error.is_some() {
            EntryStatus::Failed
        } else {
            EntryStatus::Deleted
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Error chain rendered on one line, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| format!("{:#}", e))
    }
}

/// Outcome shared by many resources deleted in one call
///
/// Batch delete APIs succeed or fail as a whole, so every identifier gets the
/// same resource type and error.
#[derive(Debug, Clone, Default)]
pub struct BatchEntry {
    pub identifiers: Vec<String>,
    pub resource_type: String,
    pub error: Option<EntryError>,
}

impl BatchEntry {
    pub fn new(identifiers: Vec<String>, resource_type: impl Into<String>) -> Self {
        Self {
            identifiers,
            resource_type: resource_type.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<anyhow::Error>) -> Self {
        self.error = Some(Arc::new(error.into()));
        self
    }

    /// One entry per identifier, in sequence order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.identifiers.iter().map(move |identifier| Entry {
            identifier: identifier.clone(),
            resource_type: self.resource_type.clone(),
            error: self.error.clone(),
        })
    }
}

/// Deletion status shown in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Deleted,
    Failed,
}

impl EntryStatus {
    /// Table cell for the "Deleted Successfully" column
    pub fn glyph(&self) -> &'static str {
        match self {
            EntryStatus::Deleted => "  ✅  ",
            EntryStatus::Failed => "  ❌  ",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Deleted => write!(f, "deleted"),
            EntryStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Serializable view of an entry, used for JSON reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub identifier: String,
    pub resource_type: String,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Entry> for ReportRow {
    fn from(entry: &Entry) -> Self {
        Self {
            identifier: entry.identifier.clone(),
            resource_type: entry.resource_type.clone(),
            deleted: !entry.is_failure(),
            error: entry.error_message(),
        }
    }
}
