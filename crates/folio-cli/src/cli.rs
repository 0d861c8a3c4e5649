//! CLI argument definitions for Folio Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Folio Studio - validate and publish portfolio content",
    long_about = "Validate and publish blog posts, projects and profile edits.\n\n\
                  Drafts are read from JSON files and go through the same\n\
                  validation and submission rules as the editing surfaces."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: the user config directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// API base URL (overrides the settings file).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a draft file and print per-field outcomes.
    Validate(ValidateArgs),

    /// Validate and submit a blog post or project draft.
    Publish(PublishArgs),

    /// Edit a profile in place and commit the changes.
    Profile(ProfileArgs),

    /// List a user's projects.
    Projects(ProjectsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Kind of draft in the file.
    #[arg(value_enum)]
    pub kind: DraftKindArg,

    /// JSON draft file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct PublishArgs {
    /// Kind of draft in the file.
    #[arg(value_enum)]
    pub kind: PublishKindArg,

    /// JSON draft file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Id of the user publishing the content.
    #[arg(long = "owner", value_name = "ID")]
    pub owner: String,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// JSON file holding the current profile.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Id of the profile owner (default: the id in FILE).
    #[arg(long = "owner", value_name = "ID")]
    pub owner: Option<String>,

    /// Set a text field, e.g. --set title="Staff Engineer".
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Append a tag (at most 6 tags are kept).
    #[arg(long = "add-tag", value_name = "TAG")]
    pub add_tag: Vec<String>,

    /// Remove every occurrence of a tag.
    #[arg(long = "remove-tag", value_name = "TAG")]
    pub remove_tag: Vec<String>,
}

#[derive(Parser)]
pub struct ProjectsArgs {
    /// Id of the user whose projects are listed.
    #[arg(long = "owner", value_name = "ID")]
    pub owner: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DraftKindArg {
    Blog,
    Project,
    Profile,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PublishKindArg {
    Blog,
    Project,
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
