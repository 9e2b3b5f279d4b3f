//! Wires CLI, configuration, counting and reporting together.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use wordfreq_core::{is_text_file, CounterConfig, WordCounter};
use wordfreq_logging::{wf_info, wf_warn, LogDestination, DEFAULT_LOG_FILE};
use wordfreq_report::{render_summary, save_json_summary, save_report};

use crate::cli::{Cli, LogTarget};
use crate::config::{load_file_config, AppConfig, FileConfig};
use crate::prompt::prompt_for_paths;

/// How a run ended when no error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    NoInput,
    NothingProcessed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Completed
    }
}

pub fn run(cli: Cli) -> Result<Outcome> {
    init_logging(&cli);

    let file_config = match &cli.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = AppConfig::resolve(&cli, file_config);

    let files = if cli.files.is_empty() {
        prompt_for_paths(io::stdin().lock(), io::stdout()).context("failed to read file paths")?
    } else {
        cli.files.clone()
    };
    if files.is_empty() {
        eprintln!("No files provided for processing.");
        return Ok(Outcome::NoInput);
    }

    for path in files.iter().filter(|path| !is_text_file(path)) {
        wf_warn!("{:?} does not have a known text extension; counting anyway", path);
    }

    wf_info!("Processing {} files", files.len());
    let mut counter = WordCounter::new(CounterConfig::with_threads(config.threads));
    counter.process_files(&files)?;
    let state = counter.state();

    print!("{}", render_summary(state, config.console_top));

    if state.files_processed() == 0 {
        // Keep any previous report rather than replacing it with an empty one.
        eprintln!("No files were processed successfully.");
        return Ok(Outcome::NothingProcessed);
    }

    let written = save_report(state, &config.output, config.report_top)?;
    println!("Results saved to {}", written.display());
    if let Some(json_path) = &config.json_output {
        let written = save_json_summary(state, json_path, config.report_top)?;
        println!("JSON summary saved to {}", written.display());
    }

    Ok(Outcome::Completed)
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let destination = match cli.log {
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::File(log_file),
        LogTarget::Both => LogDestination::Both(log_file),
    };
    if !wordfreq_logging::initialize(destination, level) {
        eprintln!("Warning: logging is disabled");
    }
}
