use crate::domain::model::{ContentMode, FlagStyle};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flagkit")]
#[command(about = "Country flags from country, currency and phone codes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the emoji flag for a code (a white flag if it is unknown)
    Emoji {
        #[arg(value_enum)]
        source: EmojiSource,
        code: String,
    },

    /// Print the country code for a phone or currency code
    Resolve {
        #[arg(value_enum)]
        kind: CodeKind,
        code: String,
    },

    /// Describe how a flag would be drawn, as JSON
    View {
        country: String,

        /// default, circle or rounded:<radius>
        #[arg(long)]
        style: Option<FlagStyle>,

        /// fill or fit
        #[arg(long)]
        content_mode: Option<ContentMode>,

        #[arg(long)]
        width: Option<usize>,

        #[arg(long)]
        height: Option<usize>,
    },

    /// Load the flag image for a country from the asset directory
    Asset {
        country: String,

        /// Image file extension, overrides [assets].extension
        #[arg(long)]
        ext: Option<String>,

        /// Copy the image here instead of reporting its size
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump a reference table
    List {
        #[arg(value_enum)]
        kind: CodeKind,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmojiSource {
    Country,
    Currency,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeKind {
    Phone,
    Currency,
}

impl CodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Phone => "phone",
            CodeKind::Currency => "currency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
