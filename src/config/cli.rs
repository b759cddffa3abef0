use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "base-helpers")]
#[command(about = "Controller helper routines: names, whitespace, duplicates, URLs, iframes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Trim and collapse whitespace
    Normalize { text: String },

    /// Check an entity name against the configured disallowed characters
    ValidateName {
        name: String,
        /// Do not report warnings
        #[arg(long)]
        quiet: bool,
    },

    /// Print the query parameters of a URL as JSON
    UrlParams { url: String },

    /// Join two sentences
    NeatJoin { first: String, second: String },

    /// Check whether a JSON value has no entries
    IsEmpty { json: String },

    /// Check whether a value is already used in a JSON object or array file
    Duplicate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        field: String,
        /// Key being edited (object input)
        #[arg(long, conflicts_with = "index")]
        key: Option<String>,
        /// Index being edited (array input)
        #[arg(long)]
        index: Option<usize>,
        /// Candidate value; parsed as JSON when possible, otherwise taken as a string
        value: String,
    },

    /// Replace the content of `<frames-dir>/<id>.html`
    Iframe {
        #[arg(long)]
        frames_dir: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long)]
        content_file: PathBuf,
    },
}
