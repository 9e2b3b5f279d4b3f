use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::WordCountError;

/// Cleaned word -> occurrence count.
pub type WordTable = HashMap<String, u64>;

/// Per-file counting summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountStats {
    pub file_name: String,
    pub total_words: u64,
    pub unique_words: u64,
    pub processing_time: Duration,
}

/// Output of the per-file pipeline: the local table and the stats derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub stats: WordCountStats,
    pub table: WordTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotRegularFile,
    Cancelled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "file does not exist"),
            SkipReason::NotRegularFile => write!(f, "not a regular file"),
            SkipReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: WordCountError,
}

/// Results of the most recent batch.
#[derive(Debug, Default)]
pub struct AggregateState {
    pub(crate) global_table: WordTable,
    pub(crate) file_stats: Vec<WordCountStats>,
    pub(crate) skipped: Vec<SkippedFile>,
    pub(crate) failures: Vec<FileFailure>,
    pub(crate) total_processing_time: Duration,
}

impl AggregateState {
    pub fn global_table(&self) -> &WordTable {
        &self.global_table
    }

    /// Stats of every successfully processed file, in input order.
    pub fn file_stats(&self) -> &[WordCountStats] {
        &self.file_stats
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    pub fn total_unique_words(&self) -> usize {
        self.global_table.len()
    }

    pub fn total_processing_time(&self) -> Duration {
        self.total_processing_time
    }

    pub fn files_processed(&self) -> usize {
        self.file_stats.len()
    }

    pub(crate) fn reset(&mut self) {
        self.global_table.clear();
        self.file_stats.clear();
        self.skipped.clear();
        self.failures.clear();
        self.total_processing_time = Duration::ZERO;
    }
}
