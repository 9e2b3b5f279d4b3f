use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wordfreq_core::file_exists;
use wordfreq_logging::wf_warn;

/// Read file paths line by line until an empty line or end of input.
///
/// Paths that do not name an existing regular file are reported and dropped.
pub fn prompt_for_paths<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<Vec<PathBuf>> {
    writeln!(output, "Provide a path for files (empty to finish):")?;
    let mut paths = Vec::new();
    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let path = PathBuf::from(line);
        if file_exists(&path) {
            paths.push(path);
        } else {
            wf_warn!("File does not exist: {:?}", path);
            writeln!(output, "File does not exist: {}", path.display())?;
        }
    }
    Ok(paths)
}
