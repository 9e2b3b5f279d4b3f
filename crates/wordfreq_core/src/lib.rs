//! Wordfreq core: text normalization, per-file counting and concurrent aggregation.
mod aggregator;
mod cancel;
mod error;
mod file_counter;
mod normalize;
mod paths;
mod types;

pub use aggregator::{merge_tables, resolve_thread_count, CounterConfig, WordCounter};
pub use cancel::CancellationToken;
pub use error::WordCountError;
pub use file_counter::{count_words, process_file, process_file_with};
pub use normalize::{
    classify_letter, clean_word, detect_utf8_bom, tokenize, validate_utf8, LetterSet, Normalizer,
    UTF8_BOM,
};
pub use paths::{file_exists, is_text_file, TEXT_EXTENSIONS};
pub use types::{
    AggregateState, FileCount, FileFailure, SkipReason, SkippedFile, WordCountStats, WordTable,
};
