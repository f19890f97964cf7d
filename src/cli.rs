//! Command-line interface definitions for DailyBytes.
//!
//! This module defines the CLI arguments and subcommands using the `clap`
//! crate. Global options can be provided via command-line flags or
//! environment variables.

use crate::store::{DEFAULT_TARGET_COUNT, MAX_TARGET_COUNT};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the DailyBytes content service.
///
/// # Examples
///
/// ```sh
/// # Landing view as JSON
/// daily_bytes featured
///
/// # Second page of quotes as Markdown, no simulated latency
/// daily_bytes --latency-scale 0 --format markdown list quotes --page 2
///
/// # Custom seed data
/// DAILY_BYTES_SEED_FILE=./seeds.yaml daily_bytes export ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional YAML or JSON file overriding the built-in seed collections
    #[arg(short, long, global = true, env = "DAILY_BYTES_SEED_FILE")]
    pub seed_file: Option<String>,

    /// Number of items each category is expanded to (at most 100000)
    #[arg(
        short,
        long,
        global = true,
        env = "DAILY_BYTES_TARGET_COUNT",
        default_value_t = DEFAULT_TARGET_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_TARGET_COUNT as u64)
    )]
    pub target_count: usize,

    /// Multiplier for simulated latency (0 disables it)
    #[arg(long, global = true, env = "DAILY_BYTES_LATENCY_SCALE", default_value_t = 1.0)]
    pub latency_scale: f64,

    /// Maximum random jitter in milliseconds added to each call
    #[arg(long, global = true, env = "DAILY_BYTES_JITTER_MS", default_value_t = 0)]
    pub jitter_ms: u64,

    /// Rendering for stdout
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Markdown,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List category metadata
    Categories,

    /// Show the featured bundle for the landing view
    Featured {
        #[arg(long, default_value_t = 4)]
        page_size: usize,
    },

    /// Show one page of a category
    List {
        category: String,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 12)]
        page_size: usize,
    },

    /// Show one item of a category by id
    Get { category: String, id: String },

    /// Show an article with related articles
    Article {
        id: String,
        #[arg(long, default_value_t = 3)]
        related: usize,
    },

    /// Show the horoscope for a sign
    Horoscope { sign: String },

    /// Page through a category until it runs out
    Scroll {
        category: String,
        #[arg(long, default_value_t = 12)]
        page_size: usize,
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Write featured.json and the first page of each category to a directory
    Export {
        dir: String,
        #[arg(long, default_value_t = 12)]
        page_size: usize,
    },
}
