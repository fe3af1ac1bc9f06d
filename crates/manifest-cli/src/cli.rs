//! CLI argument definitions for the latent manifest filler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "latent-fill",
    version,
    about = "Populate latent_path from image_path in a manifest CSV",
    long_about = "Fill the latent_path column of a neuroimaging manifest.\n\n\
                  Rows whose latent_path is blank get the image_path with its\n\
                  trailing .nii / .nii.gz replaced by _latent.npz; populated\n\
                  rows are left untouched."
)]
pub struct Cli {
    /// Input manifest CSV.
    #[arg(long = "in", value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV (default: overwrite the input).
    #[arg(long = "out", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
