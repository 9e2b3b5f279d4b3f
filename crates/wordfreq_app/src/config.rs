use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordfreq_core::WordCountError;
use wordfreq_logging::wf_info;
use wordfreq_report::{CONSOLE_TOP, REPORT_TOP};

use crate::cli::Cli;

pub const DEFAULT_OUTPUT: &str = "wordCountSummary.txt";

/// Optional settings read from a RON file, e.g.
/// `(threads: Some(4), output: Some("summary.txt"))`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub threads: Option<usize>,
    pub output: Option<PathBuf>,
    pub json_output: Option<PathBuf>,
    pub console_top: Option<usize>,
    pub report_top: Option<usize>,
}

/// Effective settings after merging the config file with CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub threads: usize,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
    pub console_top: usize,
    pub report_top: usize,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig, WordCountError> {
    let content = fs::read_to_string(path).map_err(|err| WordCountError::InvalidArgument {
        argument: format!("--config {}", path.display()),
        reason: err.to_string(),
    })?;
    let config = parse_file_config(&content).map_err(|reason| WordCountError::InvalidArgument {
        argument: format!("--config {}", path.display()),
        reason,
    })?;
    wf_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

fn parse_file_config(content: &str) -> Result<FileConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}

impl AppConfig {
    /// CLI values win over file values; unset values fall back to defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        Self {
            threads: cli.threads.or(file.threads).unwrap_or(0),
            output: cli
                .output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            json_output: cli.json_output.clone().or(file.json_output),
            console_top: file.console_top.unwrap_or(CONSOLE_TOP),
            report_top: file.report_top.unwrap_or(REPORT_TOP),
        }
    }
}
