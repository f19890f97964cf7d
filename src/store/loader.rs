//! Seed file loading.
//!
//! A seed file replaces some or all of the built-in seed lists. It is a
//! single YAML or JSON document keyed by category tag:
//!
//! ```yaml
//! tech:
//!   - id: t1
//!     title: The Future of AI
//!     summary: ...
//!     date: 2025-03-14
//!     content: ...
//!     category: tech
//!     tags: [AI]
//!     readTime: 6
//! quotes: []
//! ```
//!
//! Keys the file leaves out keep their built-in seed. An explicitly empty
//! list (`quotes: []`) empties that category.

use super::seed::SeedSet;
use crate::models::{Article, BrainTeaser, Horoscope, Joke, Quote, Video};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML in seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON in seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Seed file too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
}

/// Maximum accepted seed file size (1 MiB).
pub const MAX_SEED_FILE_SIZE: u64 = 1_048_576;

/// Seed lists as they appear in a file: every category optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedOverrides {
    tech: Option<Vec<Article>>,
    health: Option<Vec<Article>>,
    stocks: Option<Vec<Article>>,
    horoscope: Option<Vec<Horoscope>>,
    quotes: Option<Vec<Quote>>,
    jokes: Option<Vec<Joke>>,
    brainteasers: Option<Vec<BrainTeaser>>,
    videos: Option<Vec<Video>>,
}

impl SeedOverrides {
    fn apply(self, mut seeds: SeedSet) -> SeedSet {
        macro_rules! take {
            ($($field:ident),+) => {
                $(
                    if let Some(list) = self.$field {
                        debug!(category = stringify!($field), count = list.len(), "Seed override");
                        seeds.$field = list;
                    }
                )+
            };
        }
        take!(tech, health, stocks, horoscope, quotes, jokes, brainteasers, videos);
        seeds
    }
}

/// Parse seed overrides from a string and lay them over `fallback`.
///
/// `json` selects the JSON parser; otherwise the text is read as YAML.
pub fn parse_seeds(text: &str, json: bool, fallback: SeedSet) -> Result<SeedSet, SeedError> {
    let overrides: SeedOverrides = if text.trim().is_empty() {
        SeedOverrides::default()
    } else if json {
        serde_json::from_str(text)?
    } else {
        serde_yaml::from_str(text)?
    };
    Ok(overrides.apply(fallback).normalize())
}

/// Load a seed file and lay it over the built-in seeds.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (including when it does not exist)
/// - The file is larger than [`MAX_SEED_FILE_SIZE`]
/// - The content is not valid YAML/JSON for the seed schema
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_seed_file(path: &Path) -> Result<SeedSet, SeedError> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > MAX_SEED_FILE_SIZE {
        return Err(SeedError::TooLarge {
            size: meta.len(),
            max: MAX_SEED_FILE_SIZE,
        });
    }

    let text = tokio::fs::read_to_string(path).await?;
    let json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let seeds = parse_seeds(&text, json, SeedSet::builtin())?;
    info!(bytes = text.len(), json, "Loaded seed file");
    Ok(seeds)
}
