//! # DailyBytes
//!
//! An in-memory content store and paginated retrieval service for a news and
//! entertainment front page: tech, health and market articles, horoscopes,
//! quotes, jokes, brain teasers and videos.
//!
//! ## Architecture
//!
//! 1. **Seeding**: Small hand-authored collections, built in or loaded from a
//!    YAML/JSON file ([`store::seed`], [`store::loader`])
//! 2. **Materialization**: Each collection is expanded once to a target count
//!    into an immutable [`ContentStore`]
//! 3. **Retrieval**: [`RetrievalService`] serves pages, id lookups and the
//!    featured bundle after a simulated network delay
//! 4. **Incremental loading**: [`IncrementalLoader`] appends successive pages
//!    until a short page signals the end
//!
//! ## Example
//!
//! ```ignore
//! let store = Arc::new(ContentStore::with_defaults(Local::now().date_naive()));
//! let api = RetrievalService::new(store, NoLatency);
//! let quotes = api.list_by_category("quotes", 1, 12).await?;
//! ```

pub mod api;
pub mod cli;
pub mod feed;
pub mod models;
pub mod outputs;
pub mod store;
pub mod utils;

pub use api::{Latency, NoLatency, RetrievalError, RetrievalService, SimulatedLatency};
pub use feed::{IncrementalLoader, PageSource};
pub use models::{Category, ContentItem, FeaturedBundle};
pub use store::{ContentStore, SeedError, SeedSet};
