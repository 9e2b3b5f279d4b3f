use std::path::{Path, PathBuf};

use wordfreq_core::{AggregateState, WordCountError, WordCountStats, UTF8_BOM};
use wordfreq_logging::wf_info;

use crate::persist::AtomicFileWriter;
use crate::rank::top_words;

/// Words listed in the console summary.
pub const CONSOLE_TOP: usize = 5;
/// Words listed in the persisted report.
pub const REPORT_TOP: usize = 20;

const CONSOLE_WORD_WIDTH: usize = 15;
const REPORT_WORD_WIDTH: usize = 20;

/// Console summary: totals, per-file blocks, skipped and failed files, top words.
pub fn render_summary(state: &AggregateState, top: usize) -> String {
    let mut out = String::new();
    out.push_str("Word Count Summary\n");
    out.push_str("===================\n");
    push_totals(&mut out, state);

    for stats in state.file_stats() {
        push_file_block(&mut out, stats);
    }

    if !state.skipped().is_empty() {
        out.push_str("Skipped files:\n");
        for skipped in state.skipped() {
            out.push_str(&format!("  {}: {}\n", skipped.path.display(), skipped.reason));
        }
        out.push('\n');
    }
    if !state.failures().is_empty() {
        out.push_str("Failed files:\n");
        for failure in state.failures() {
            out.push_str(&format!("  {}: {}\n", failure.path.display(), failure.error));
        }
        out.push('\n');
    }

    out.push_str(&format!("{top} most frequent words:\n"));
    push_top_words(&mut out, state, top, CONSOLE_WORD_WIDTH);
    out
}

/// Persisted report body, without the leading BOM.
pub fn render_report(state: &AggregateState, top: usize) -> String {
    let mut out = String::new();
    out.push_str("Word Count Summary\n");
    push_totals(&mut out, state);

    out.push_str("File Statistics\n");
    for stats in state.file_stats() {
        push_file_block(&mut out, stats);
    }

    out.push_str(&format!("{top} most frequent words\n"));
    push_top_words(&mut out, state, top, REPORT_WORD_WIDTH);
    out
}

/// Write the report with a UTF-8 BOM to `path`, replacing any previous report atomically.
pub fn save_report(
    state: &AggregateState,
    path: &Path,
    top: usize,
) -> Result<PathBuf, WordCountError> {
    let body = render_report(state, top);
    let mut content = Vec::with_capacity(UTF8_BOM.len() + body.len());
    content.extend_from_slice(&UTF8_BOM);
    content.extend_from_slice(body.as_bytes());

    let (writer, filename) =
        AtomicFileWriter::for_target(path).map_err(|err| err.into_output_error(path))?;
    let written = writer
        .write(&filename, &content)
        .map_err(|err| err.into_output_error(path))?;
    wf_info!("Results saved to {:?}", written);
    Ok(written)
}

fn push_totals(out: &mut String, state: &AggregateState) {
    out.push_str(&format!(
        "Total Unique Words: {}\nTotal Files Processed: {}\nTotal Processing Time: {} ms\n\n",
        state.total_unique_words(),
        state.files_processed(),
        state.total_processing_time().as_millis()
    ));
}

fn push_file_block(out: &mut String, stats: &WordCountStats) {
    out.push_str(&format!(
        "File: {}\nTotal Words: {}\nUnique Words: {}\nProcessing Time: {} ms\n\n",
        stats.file_name,
        stats.total_words,
        stats.unique_words,
        stats.processing_time.as_millis()
    ));
}

fn push_top_words(out: &mut String, state: &AggregateState, top: usize, width: usize) {
    for (word, count) in top_words(state.global_table(), top) {
        out.push_str(&format!("{word:<width$}: {count}\n"));
    }
}
