use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::{json, Value};
use wordfreq_core::{AggregateState, WordCountError};
use wordfreq_logging::wf_info;

use crate::persist::AtomicFileWriter;
use crate::rank::top_words;

pub fn build_json_summary(state: &AggregateState, top: usize) -> Value {
    json!({
        "total_unique_words": state.total_unique_words(),
        "files_processed": state.files_processed(),
        "total_processing_ms": millis(state.total_processing_time()),
        "files": state.file_stats().iter().map(|s| {
            json!({
                "file_name": s.file_name,
                "total_words": s.total_words,
                "unique_words": s.unique_words,
                "processing_ms": millis(s.processing_time)
            })
        }).collect::<Vec<_>>(),
        "top_words": top_words(state.global_table(), top).into_iter().map(|(word, count)| {
            json!({ "word": word, "count": count })
        }).collect::<Vec<_>>(),
        "skipped": state.skipped().iter().map(|s| {
            json!({ "path": s.path.display().to_string(), "reason": s.reason.to_string() })
        }).collect::<Vec<_>>(),
        "failed": state.failures().iter().map(|f| {
            json!({ "path": f.path.display().to_string(), "error": f.error.to_string() })
        }).collect::<Vec<_>>()
    })
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

pub fn save_json_summary(
    state: &AggregateState,
    path: &Path,
    top: usize,
) -> Result<PathBuf, WordCountError> {
    let summary = build_json_summary(state, top);
    let (writer, filename) =
        AtomicFileWriter::for_target(path).map_err(|err| err.into_output_error(path))?;
    let written = writer
        .write(&filename, summary.to_string().as_bytes())
        .map_err(|err| err.into_output_error(path))?;
    wf_info!("JSON summary saved to {:?}", written);
    Ok(written)
}
