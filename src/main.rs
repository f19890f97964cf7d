//! # DailyBytes CLI
//!
//! Builds the content store once at startup and answers one retrieval
//! command against it, printing JSON or Markdown to stdout. Logs go to
//! stderr.
//!
//! ## Usage
//!
//! ```sh
//! daily_bytes featured
//! daily_bytes --format markdown list quotes --page 2
//! daily_bytes scroll jokes --page-size 20
//! daily_bytes export ./out
//! ```

use chrono::Local;
use clap::Parser;
use daily_bytes::api::{RetrievalError, RetrievalService, SimulatedLatency};
use daily_bytes::cli::{Cli, Command, Format};
use daily_bytes::models::{Article, Category, ContentItem};
use daily_bytes::outputs::{json, markdown};
use daily_bytes::store::{ContentStore, SeedSet, load_seed_file};
use daily_bytes::utils::{ensure_writable_dir, truncate_for_log};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

/// How many category files `export` writes at once.
const EXPORT_CONCURRENCY: usize = 4;

type Service = RetrievalService<SimulatedLatency>;

/// Article detail output: the article and its related articles.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleView {
    article: Article,
    related_articles: Vec<Article>,
}

/// Result of driving the incremental loader.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollReport {
    category: String,
    pages_loaded: usize,
    has_more: bool,
    items: Vec<ContentItem>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let seeds = match &args.seed_file {
        Some(path) => match load_seed_file(Path::new(path)).await {
            Ok(seeds) => {
                info!(%path, "Loaded seed file");
                seeds
            }
            Err(e) => {
                error!(%path, error = %e, "Failed to load seed file");
                return Err(e.into());
            }
        },
        None => SeedSet::builtin(),
    };

    let store = ContentStore::build(&seeds, args.target_count, Local::now().date_naive());
    let latency = SimulatedLatency::new(args.latency_scale, Duration::from_millis(args.jitter_ms));
    let api = RetrievalService::new(Arc::new(store), latency);

    match run(&api, args.command, args.format).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<RetrievalError>() {
            Some(RetrievalError::NotFound { category, id }) => {
                warn!(%category, %id, "Not found");
                Ok(ExitCode::FAILURE)
            }
            _ => {
                error!(error = %e, "Command failed");
                Err(e)
            }
        },
    }
}

async fn run(api: &Service, command: Command, format: Format) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Categories => {
            let categories = api.categories();
            emit(format, &categories, || {
                markdown::categories_to_markdown(&categories)
            })?;
        }
        Command::Featured { page_size } => {
            let bundle = api.get_featured_bundle(page_size).await?;
            emit(format, &bundle, || markdown::featured_to_markdown(&bundle))?;
        }
        Command::List {
            category,
            page,
            page_size,
        } => {
            let items = api.list_by_category(&category, page, page_size).await?;
            let info = Category::from_tag(&category).map(Category::info);
            emit(format, &items, || {
                markdown::page_to_markdown(info.as_ref(), page, &items)
            })?;
        }
        Command::Get { category, id } => {
            let item = api.get_by_id(&category, &id).await?;
            emit(format, &item, || markdown::item_to_markdown(&item))?;
        }
        Command::Article { id, related } => {
            let article = api.get_article(&id).await?;
            let related_articles = api.get_related_articles(&article, related).await?;
            let view = ArticleView {
                article,
                related_articles,
            };
            emit(format, &view, || {
                markdown::article_to_markdown(&view.article, &view.related_articles)
            })?;
        }
        Command::Horoscope { sign } => {
            let horoscope = api.get_horoscope_by_sign(&sign).await?;
            let item = ContentItem::from(horoscope);
            emit(format, &item, || markdown::item_to_markdown(&item))?;
        }
        Command::Scroll {
            category,
            page_size,
            max_pages,
        } => {
            let report = scroll(api, &category, page_size, max_pages).await?;
            let info = Category::from_tag(&category).map(Category::info);
            emit(format, &report, || {
                markdown::page_to_markdown(info.as_ref(), report.pages_loaded, &report.items)
            })?;
        }
        Command::Export { dir, page_size } => {
            export(api, &dir, page_size).await?;
        }
    }
    Ok(())
}

/// Print `value` to stdout in the requested format.
fn emit<T, F>(format: Format, value: &T, render_markdown: F) -> Result<(), Box<dyn Error>>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Result<String, fmt::Error>,
{
    let out = match format {
        Format::Json => json::to_pretty_json(value)?,
        Format::Markdown => render_markdown()?,
    };
    debug!(preview = %truncate_for_log(&out, 200), "Rendered output");
    println!("{out}");
    Ok(())
}

#[instrument(level = "info", skip(api))]
async fn scroll(
    api: &Service,
    category: &str,
    page_size: usize,
    max_pages: Option<usize>,
) -> Result<ScrollReport, RetrievalError> {
    let mut loader = api.incremental(category, page_size);
    let pages_loaded = loader.load_all(max_pages).await?;
    let has_more = loader.has_more();
    Ok(ScrollReport {
        category: category.to_string(),
        pages_loaded,
        has_more,
        items: loader.into_items(),
    })
}

/// Write `featured.json` and the first page of every category to `dir`.
#[instrument(level = "info", skip(api))]
async fn export(api: &Service, dir: &str, page_size: usize) -> Result<(), Box<dyn Error>> {
    if let Err(e) = ensure_writable_dir(dir).await {
        error!(
            path = %dir,
            error = %e,
            "Export directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let bundle = api.get_featured_bundle(page_size).await?;
    json::write_json(&bundle, dir, "featured").await?;

    let results: Vec<Result<usize, Box<dyn Error>>> = stream::iter(Category::ALL)
        .map(|category| async move {
            let items = api.list_page(category, 1, page_size).await?;
            json::write_json(&items, dir, category.as_str()).await?;
            Ok::<usize, Box<dyn Error>>(items.len())
        })
        .buffer_unordered(EXPORT_CONCURRENCY)
        .collect()
        .await;

    let mut written = 0usize;
    for result in results {
        match result {
            Ok(count) => {
                debug!(count, "Exported category page");
                written += 1;
            }
            Err(e) => {
                error!(error = %e, "Failed to export category page");
                return Err(e);
            }
        }
    }

    info!(files = written + 1, path = %dir, "Export complete");
    Ok(())
}
