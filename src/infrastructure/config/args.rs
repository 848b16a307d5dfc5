use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "emoji-vault",
    version,
    about = "Low-latency base64 emoji image lookups",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the brand documents.
    #[arg(long, value_name = "DIR", global = true)]
    pub assets_dir: Option<PathBuf>,

    /// Maximum number of cached emojis.
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Skip preloading popular emojis.
    #[arg(long, global = true)]
    pub no_preload: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the base64 image for each codepoint.
    Lookup {
        /// Brand (icon set) to look up.
        brand: String,

        /// Codepoints such as `2764` or `1f600`.
        #[arg(required = true)]
        codepoints: Vec<String>,
    },

    /// Convert a directory of `emoji_u<hex>.png` files into a JSON asset.
    Convert {
        /// Directory containing the images.
        dir: PathBuf,

        /// Output JSON file.
        output: PathBuf,
    },
}
