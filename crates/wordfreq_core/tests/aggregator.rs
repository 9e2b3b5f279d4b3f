use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_core::{
    CancellationToken, CounterConfig, SkipReason, WordCountError, WordCounter, WordTable,
};

fn init_logging() {
    wordfreq_logging::initialize_for_tests();
}

fn table(pairs: &[(&str, u64)]) -> WordTable {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

fn write_files(dir: &TempDir, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

#[test]
fn two_files_merge_into_global_table() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(&temp, &[("one.txt", "a a b"), ("two.txt", "b c c")]);

    let mut counter = WordCounter::new(CounterConfig::with_threads(2));
    counter.process_files(&paths).unwrap();

    let state = counter.state();
    assert_eq!(state.global_table(), &table(&[("a", 2), ("b", 2), ("c", 2)]));
    assert_eq!(counter.total_unique_words(), 3);
    assert_eq!(state.files_processed(), 2);
    assert!(state.failures().is_empty());
    assert!(state.skipped().is_empty());
}

#[test]
fn file_stats_follow_input_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let files: Vec<(String, String)> = (0..12)
        .map(|i| (format!("f{i:02}.txt"), "word ".repeat(i * 500 + 1)))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .rev()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    let paths = write_files(&temp, &borrowed);

    let mut counter = WordCounter::new(CounterConfig::with_threads(4));
    counter.process_files(&paths).unwrap();

    let names: Vec<String> = counter
        .state()
        .file_stats()
        .iter()
        .map(|s| s.file_name.clone())
        .collect();
    let expected: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    assert_eq!(names, expected);
}

#[test]
fn global_table_is_independent_of_pool_width_and_input_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(
        &temp,
        &[
            ("a.txt", "Ala ma kota. Kot ma Alę!"),
            ("b.txt", "The quick brown fox; the lazy dog."),
            ("c.txt", "kot kot KOT fox"),
            ("d.txt", "żółw Żółw ŻÓŁW the"),
            ("e.txt", ""),
        ],
    );

    let mut baseline = WordCounter::new(CounterConfig::with_threads(1));
    baseline.process_files(&paths).unwrap();
    let expected = baseline.state().global_table().clone();
    assert_eq!(expected.get("kot"), Some(&4));
    assert_eq!(expected.get("the"), Some(&3));
    assert_eq!(expected.get("żółw"), Some(&3));

    for threads in [2, 3, 8] {
        for rotation in 0..paths.len() {
            let mut reordered = paths.clone();
            reordered.rotate_left(rotation);
            if rotation % 2 == 1 {
                reordered.reverse();
            }
            let mut counter = WordCounter::new(CounterConfig::with_threads(threads));
            counter.process_files(&reordered).unwrap();
            assert_eq!(counter.state().global_table(), &expected);
        }
    }
}

#[test]
fn global_counts_equal_sum_of_file_counts() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(
        &temp,
        &[("x.txt", "one two two three three three"), ("y.txt", "three two one one")],
    );

    let mut counter = WordCounter::default();
    counter.process_files(&paths).unwrap();

    let state = counter.state();
    let total_words: u64 = state.file_stats().iter().map(|s| s.total_words).sum();
    assert_eq!(state.global_table().values().sum::<u64>(), total_words);
    assert_eq!(state.global_table(), &table(&[("one", 3), ("two", 3), ("three", 4)]));
}

#[test]
fn missing_and_directory_paths_are_skipped() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let mut paths = write_files(&temp, &[("real.txt", "hello hello")]);
    let missing = temp.path().join("missing.txt");
    let dir = temp.path().join("subdir");
    fs::create_dir(&dir).unwrap();
    paths.insert(0, missing.clone());
    paths.push(dir.clone());

    let mut counter = WordCounter::new(CounterConfig::with_threads(2));
    counter.process_files(&paths).unwrap();

    let state = counter.state();
    assert_eq!(state.files_processed(), 1);
    assert_eq!(state.global_table(), &table(&[("hello", 2)]));
    let skipped: Vec<_> = state
        .skipped()
        .iter()
        .map(|s| (s.path.clone(), s.reason))
        .collect();
    assert_eq!(
        skipped,
        vec![
            (missing, SkipReason::Missing),
            (dir, SkipReason::NotRegularFile)
        ]
    );
}

#[test]
fn empty_file_is_processed_without_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(&temp, &[("empty.txt", "")]);

    let mut counter = WordCounter::new(CounterConfig::with_threads(1));
    counter.process_files(&paths).unwrap();

    let stats = &counter.state().file_stats()[0];
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.unique_words, 0);
    assert_eq!(counter.total_unique_words(), 0);
}

#[test]
fn repeated_batches_do_not_accumulate() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let first = write_files(&temp, &[("first.txt", "alpha beta")]);
    let second = write_files(&temp, &[("second.txt", "gamma")]);

    let mut counter = WordCounter::new(CounterConfig::with_threads(2));
    counter.process_files(&first).unwrap();
    assert_eq!(counter.total_unique_words(), 2);

    counter.process_files(&second).unwrap();
    assert_eq!(counter.state().global_table(), &table(&[("gamma", 1)]));
    assert_eq!(counter.state().files_processed(), 1);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_collected_as_failure_and_batch_continues() {
    use std::os::unix::fs::PermissionsExt;

    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(&temp, &[("ok.txt", "fine words"), ("locked.txt", "secret")]);
    fs::set_permissions(&paths[1], fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can still read the file; nothing to check then.
    if fs::read(&paths[1]).is_ok() {
        return;
    }

    let mut counter = WordCounter::new(CounterConfig::with_threads(2));
    counter.process_files(&paths).unwrap();

    let state = counter.state();
    assert_eq!(state.files_processed(), 1);
    assert_eq!(state.failures().len(), 1);
    assert_eq!(state.failures()[0].path, paths[1]);
    assert!(matches!(
        state.failures()[0].error,
        WordCountError::FilePermission { .. }
    ));
    assert_eq!(state.global_table(), &table(&[("fine", 1), ("words", 1)]));
}

#[test]
fn cancelled_batch_skips_every_unit() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let paths = write_files(&temp, &[("a.txt", "a"), ("b.txt", "b")]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut counter = WordCounter::new(CounterConfig::with_threads(2));
    counter.process_files_with_cancel(&paths, &cancel).unwrap();

    let state = counter.state();
    assert_eq!(state.files_processed(), 0);
    assert!(state.global_table().is_empty());
    assert!(state
        .skipped()
        .iter()
        .all(|s| s.reason == SkipReason::Cancelled));
    assert_eq!(state.skipped().len(), 2);
}

#[test]
fn configured_thread_count_is_reported() {
    assert_eq!(WordCounter::new(CounterConfig::with_threads(3)).thread_count(), 3);
    assert!(WordCounter::new(CounterConfig::with_threads(0)).thread_count() >= 1);
}
