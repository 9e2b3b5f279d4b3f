use std::path::Path;

/// Extensions recognized by [`is_text_file`], without the leading dot.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "log", "csv", "md", "xml", "json", "cpp", "h", "hpp", "py", "java", "c", "js", "html",
    "css", "php", "rb", "go", "swift", "ts", "vb", "pl", "sql", "yaml", "yml",
];

/// True when `path` exists and is a regular file (symlinks are followed).
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Extension-based text file check, case-insensitive.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
