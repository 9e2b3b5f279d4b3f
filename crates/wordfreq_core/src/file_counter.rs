use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use wordfreq_logging::wf_debug;

use crate::normalize::{detect_utf8_bom, UTF8_BOM};
use crate::{FileCount, Normalizer, WordCountError, WordCountStats, WordTable};

/// Count one file with the default letter set.
pub fn process_file(path: &Path) -> Result<FileCount, WordCountError> {
    process_file_with(path, &Normalizer::default())
}

/// Read, tokenize and count one file.
///
/// The whole file is held in memory. `processing_time` covers the full
/// read + tokenize + count pipeline.
pub fn process_file_with(
    path: &Path,
    normalizer: &Normalizer,
) -> Result<FileCount, WordCountError> {
    let started = Instant::now();

    let mut file = File::open(path).map_err(|err| WordCountError::from_open(path, err))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|err| WordCountError::processing(path, err.to_string()))?;

    let content = if detect_utf8_bom(&bytes) {
        wf_debug!("Skipping UTF-8 BOM in {:?}", path);
        &bytes[UTF8_BOM.len()..]
    } else {
        &bytes[..]
    };

    let table = count_words_with(content, normalizer);
    let stats = WordCountStats {
        file_name: path.display().to_string(),
        total_words: table.values().sum(),
        unique_words: table.len() as u64,
        processing_time: started.elapsed(),
    };

    Ok(FileCount { stats, table })
}

/// Build a cleaned-word table from raw bytes with the default letter set.
pub fn count_words(bytes: &[u8]) -> WordTable {
    count_words_with(bytes, &Normalizer::default())
}

pub(crate) fn count_words_with(bytes: &[u8], normalizer: &Normalizer) -> WordTable {
    let mut table = WordTable::new();
    for token in normalizer.tokenize(bytes) {
        let word = normalizer.clean_word(&token);
        if word.is_empty() {
            continue;
        }
        *table.entry(word).or_insert(0) += 1;
    }
    table
}
