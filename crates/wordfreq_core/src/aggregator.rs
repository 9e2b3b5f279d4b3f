use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use rayon::prelude::*;
use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::file_counter::process_file_with;
use crate::{
    AggregateState, CancellationToken, FileCount, FileFailure, LetterSet, Normalizer, SkipReason,
    SkippedFile, WordCountError, WordCountStats, WordTable,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterConfig {
    /// Worker pool width; 0 picks the detected hardware concurrency.
    pub thread_count: usize,
    pub letters: LetterSet,
}

impl CounterConfig {
    pub fn with_threads(thread_count: usize) -> Self {
        Self {
            thread_count,
            ..Self::default()
        }
    }
}

/// Runs the per-file pipeline concurrently and keeps the merged result of the last batch.
#[derive(Debug)]
pub struct WordCounter {
    thread_count: usize,
    normalizer: Normalizer,
    state: AggregateState,
}

enum UnitOutcome {
    Counted(WordCountStats),
    Failed(WordCountError),
    Cancelled,
}

impl WordCounter {
    pub fn new(config: CounterConfig) -> Self {
        let thread_count = resolve_thread_count(config.thread_count);
        wf_info!("Using {} threads for word processing", thread_count);
        Self {
            thread_count,
            normalizer: Normalizer::new(config.letters),
            state: AggregateState::default(),
        }
    }

    /// Count every path and replace the previous batch's results.
    ///
    /// Missing paths are skipped and per-file failures are collected in the
    /// state; only a failure to start the worker pool is returned as an error.
    pub fn process_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<(), WordCountError> {
        self.process_files_with_cancel(paths, &CancellationToken::new())
    }

    pub fn process_files_with_cancel<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        cancel: &CancellationToken,
    ) -> Result<(), WordCountError> {
        let started = Instant::now();
        self.state.reset();

        let runnable = self.prefilter(paths);
        wf_info!(
            "Processing {} files ({} skipped before start)",
            runnable.len(),
            self.state.skipped.len()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .thread_name(|index| format!("wordfreq-worker-{index}"))
            .build()
            .map_err(|err| WordCountError::ThreadPool(err.to_string()))?;

        let global = Mutex::new(WordTable::new());
        let normalizer = &self.normalizer;
        // Collecting an indexed parallel iterator keeps input order.
        let outcomes: Vec<UnitOutcome> = pool.install(|| {
            runnable
                .par_iter()
                .map(|path| run_unit(path, normalizer, &global, cancel))
                .collect()
        });

        self.state.global_table = global.into_inner().unwrap_or_else(PoisonError::into_inner);
        for (path, outcome) in runnable.into_iter().zip(outcomes) {
            match outcome {
                UnitOutcome::Counted(stats) => self.state.file_stats.push(stats),
                UnitOutcome::Failed(error) => self.state.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    error,
                }),
                UnitOutcome::Cancelled => self.state.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: SkipReason::Cancelled,
                }),
            }
        }

        self.state.total_processing_time = started.elapsed();
        wf_info!(
            "Batch finished in {} ms: {} processed, {} failed, {} skipped, {} unique words",
            self.state.total_processing_time.as_millis(),
            self.state.file_stats.len(),
            self.state.failures.len(),
            self.state.skipped.len(),
            self.state.global_table.len()
        );
        Ok(())
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn total_unique_words(&self) -> usize {
        self.state.total_unique_words()
    }

    pub fn total_processing_time(&self) -> std::time::Duration {
        self.state.total_processing_time()
    }

    fn prefilter<'a, P: AsRef<Path>>(&mut self, paths: &'a [P]) -> Vec<&'a Path> {
        let mut runnable = Vec::with_capacity(paths.len());
        for path in paths.iter().map(AsRef::as_ref) {
            let reason = match fs::metadata(path) {
                Ok(meta) if meta.is_file() => {
                    runnable.push(path);
                    continue;
                }
                Ok(_) => SkipReason::NotRegularFile,
                Err(_) => SkipReason::Missing,
            };
            wf_warn!("Skipping {:?}: {}", path, reason);
            self.state.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason,
            });
        }
        runnable
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

fn run_unit(
    path: &Path,
    normalizer: &Normalizer,
    global: &Mutex<WordTable>,
    cancel: &CancellationToken,
) -> UnitOutcome {
    if cancel.is_cancelled() {
        wf_debug!("Cancelled before start: {:?}", path);
        return UnitOutcome::Cancelled;
    }

    match process_file_with(path, normalizer) {
        Ok(FileCount { stats, table }) => {
            {
                let mut global = global.lock().unwrap_or_else(PoisonError::into_inner);
                merge_tables(&mut global, table);
            }
            wf_info!(
                "Processed file {} ({} words, {} unique) in {} ms",
                stats.file_name,
                stats.total_words,
                stats.unique_words,
                stats.processing_time.as_millis()
            );
            UnitOutcome::Counted(stats)
        }
        Err(error) => {
            wf_warn!("Failed to process {:?}: {}", path, error);
            UnitOutcome::Failed(error)
        }
    }
}

/// Add every count of `local` into `target`.
pub fn merge_tables(target: &mut WordTable, local: WordTable) {
    for (word, count) in local {
        *target.entry(word).or_insert(0) += count;
    }
}

/// Requested width, or the detected CPU count when 0; never below 1.
pub fn resolve_thread_count(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested
    }
}
