use wordfreq_core::WordTable;

/// The `n` most frequent words, highest count first; equal counts sort by word.
pub fn top_words(table: &WordTable, n: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = table
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}
