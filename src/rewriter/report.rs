use crate::rewriter::notice::NoticeChange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Updated,
    Unchanged,
    SkippedBinary,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<NoticeChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn updated(path: &Path, changes: Vec<NoticeChange>) -> Self {
        Self::new(path, FileStatus::Updated, changes, None)
    }

    pub fn unchanged(path: &Path) -> Self {
        Self::new(path, FileStatus::Unchanged, Vec::new(), None)
    }

    pub fn skipped_binary(path: &Path) -> Self {
        Self::new(path, FileStatus::SkippedBinary, Vec::new(), None)
    }

    pub fn failed<S: Into<String>>(path: &Path, error: S) -> Self {
        Self::new(path, FileStatus::Failed, Vec::new(), Some(error.into()))
    }

    fn new(
        path: &Path,
        status: FileStatus,
        changes: Vec<NoticeChange>,
        error: Option<String>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            status,
            changes,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReport {
    pub year: i32,
    pub holder: String,
    pub dry_run: bool,
    /// Set when Ctrl-C stopped the run before every file was checked.
    pub cancelled: bool,
    pub files: Vec<FileResult>,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl UpdateReport {
    pub fn new(year: i32, holder: &str, dry_run: bool) -> Self {
        Self {
            year,
            holder: holder.to_string(),
            dry_run,
            cancelled: false,
            files: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::ZERO,
        }
    }

    pub fn push(&mut self, result: FileResult) {
        self.files.push(result);
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn finish(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.files.iter().filter(|f| f.status == FileStatus::Failed)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.files.len(),
            updated: self.count(FileStatus::Updated),
            unchanged: self.count(FileStatus::Unchanged),
            skipped_binary: self.count(FileStatus::SkippedBinary),
            failed: self.count(FileStatus::Failed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped_binary: usize,
    pub failed: usize,
}
