use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::report::console::format_console_report;
use crate::report::markdown::{DEFAULT_TRACE_LINES, format_markdown_report};
use crate::report::report_model::TestError;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "bluepill-report",
    version,
    about = "Summarize failures in Bluepill JUnit XML results"
)]
pub struct Cli {
    /// JUnit results XML file
    pub xml_file: PathBuf,

    /// Output format: terminal or markdown. Unknown values print as terminal.
    pub mode: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: bluepill-report.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Trailing trace lines to keep per error in markdown output
    #[arg(long)]
    pub trace_lines: Option<usize>,

    /// Exit with status 1 when any failure or error was found
    #[arg(long)]
    pub fail_on_errors: bool,
}

// ============================================================================
// Output mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Markdown,
}

impl OutputMode {
    /// Anything that isn't a known mode falls back to terminal output.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "terminal" => OutputMode::Terminal,
            "markdown" => OutputMode::Markdown,
            other => {
                warn!(mode = other, "unknown output mode, using terminal");
                OutputMode::Terminal
            }
        }
    }

    pub fn render(&self, errors: &[TestError], trace_lines: usize) -> String {
        match self {
            OutputMode::Terminal => format_console_report(errors),
            OutputMode::Markdown => format_markdown_report(errors, trace_lines),
        }
    }
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `bluepill-report.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_terminal")]
    pub format: String,

    #[serde(default)]
    pub fail_on_errors: bool,

    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: default_terminal(),
            fail_on_errors: false,
            markdown: MarkdownConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    #[serde(default = "default_trace_lines")]
    pub trace_lines: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            trace_lines: DEFAULT_TRACE_LINES,
        }
    }
}

// Serde default helpers
fn default_terminal() -> String { "terminal".to_string() }
fn default_trace_lines() -> usize { DEFAULT_TRACE_LINES }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("bluepill-report.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => {
                debug!(path = config_path, "loaded config");
                config
            }
            Err(e) => {
                warn!(path = config_path, error = %e, "ignoring malformed config");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved options (merge CLI args with config file)
// ============================================================================

/// Settings after applying CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub mode: OutputMode,
    pub trace_lines: usize,
    pub fail_on_errors: bool,
}

pub fn resolve_options(cli: &Cli, config: &AppConfig) -> PrintOptions {
    PrintOptions {
        mode: OutputMode::from_arg(cli.mode.as_deref().unwrap_or(&config.format)),
        trace_lines: cli.trace_lines.unwrap_or(config.markdown.trace_lines),
        fail_on_errors: cli.fail_on_errors || config.fail_on_errors,
    }
}
