use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Count word frequencies across text files.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version)]
pub struct Cli {
    /// Files to count; prompts on stdin when none are given.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Worker threads (0 = auto-detect).
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Report file to write.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a JSON summary to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json_output: Option<PathBuf>,

    /// RON configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_options() {
        let cli = Cli::try_parse_from([
            "wordfreq", "-t", "4", "-o", "out.txt", "--log", "both", "a.txt", "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.threads, Some(4));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.log, LogTarget::Both);
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn rejects_unparseable_thread_count() {
        assert!(Cli::try_parse_from(["wordfreq", "--threads", "many", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["wordfreq", "--threads", "-1", "a.txt"]).is_err());
    }

    #[test]
    fn no_files_is_accepted_for_prompting() {
        let cli = Cli::try_parse_from(["wordfreq"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.log, LogTarget::Terminal);
    }
}
