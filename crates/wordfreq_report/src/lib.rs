//! Wordfreq report builder: ranking, text rendering and atomic persistence.
mod json;
mod persist;
mod rank;
mod render;

pub use json::{build_json_summary, save_json_summary};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use rank::top_words;
pub use render::{render_report, render_summary, save_report, CONSOLE_TOP, REPORT_TOP};
