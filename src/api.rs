//! Read-only retrieval service over the [`ContentStore`].
//!
//! This module is the stand-in for a remote content API. Every operation
//! reads from the immutable store after an artificial pause that models
//! network latency.
//!
//! # Architecture
//!
//! - [`Latency`]: Trait deciding how long each operation waits before answering
//! - [`SimulatedLatency`]: Real `tokio` sleeps with optional random jitter
//! - [`NoLatency`]: Answers immediately; used by tests
//! - [`RetrievalService`]: Paginated reads, id lookups and the featured bundle
//!
//! # Pagination
//!
//! Pages are 1-based. Page `p` of size `s` covers offsets `(p-1)*s ..
//! (p-1)*s + s` in the collection's fixed order. Page 0, size 0 and pages
//! past the end are empty.
//!
//! # Unknown Categories
//!
//! Reads against an unrecognized category tag return an empty result, never
//! an error. Only id lookups report [`RetrievalError::NotFound`].

use crate::models::{
    Article, ArticleCategory, BrainTeaser, Category, CategoryInfo, ContentItem, FeaturedBundle,
    Horoscope, Joke, Quote, Video,
};
use crate::store::ContentStore;
use rand::{Rng, rng};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Order in which the article collections are searched by [`RetrievalService::get_article`].
///
/// Ids are only unique per collection, so the first collection holding a
/// matching id wins.
pub const ARTICLE_LOOKUP_PRIORITY: [ArticleCategory; 3] = [
    ArticleCategory::Tech,
    ArticleCategory::Health,
    ArticleCategory::Stocks,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    #[error("No item with id '{id}' in {category}")]
    NotFound { category: String, id: String },

    /// Generic backend failure. The in-memory service never produces this;
    /// it exists so callers handle the failure path a remote API will have.
    #[error("Retrieval failed: {0}")]
    Failed(String),
}

impl RetrievalError {
    fn not_found(category: impl Into<String>, id: &str) -> Self {
        RetrievalError::NotFound {
            category: category.into(),
            id: id.to_string(),
        }
    }
}

/// Kind of read, used to pick the simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The aggregate landing read.
    Featured,
    /// A paginated list read.
    List,
    /// A single-item lookup.
    Lookup,
}

impl Operation {
    /// Baseline delay for this kind of read.
    pub fn base_delay(self) -> StdDuration {
        match self {
            Operation::Featured => StdDuration::from_millis(500),
            Operation::List => StdDuration::from_millis(300),
            Operation::Lookup => StdDuration::from_millis(200),
        }
    }
}

/// Strategy for the pause before each read completes.
///
/// Implementors only wait; they never fail and have no retry or timeout
/// semantics.
pub trait Latency {
    /// Wait before answering a read of kind `op`.
    async fn pause(&self, op: Operation);
}

/// Answers immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    async fn pause(&self, _op: Operation) {}
}

/// Sleeps for each operation's base delay, scaled, plus random jitter.
///
/// # Delay Formula
///
/// ```text
/// delay = base_delay(op) * scale + random_jitter(0..=max_jitter)
/// ```
#[derive(Clone, Copy)]
pub struct SimulatedLatency {
    /// Multiplier applied to every base delay. `0.0` disables the base delay.
    scale: f64,
    /// Upper bound for the random extra delay.
    max_jitter: StdDuration,
}

impl SimulatedLatency {
    /// Create a latency strategy.
    ///
    /// Negative or non-finite scales are treated as `0.0`.
    pub fn new(scale: f64, max_jitter: StdDuration) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            0.0
        };
        Self { scale, max_jitter }
    }

    /// The delay before jitter for one operation.
    ///
    /// Saturates at [`StdDuration::MAX`] when the scaled delay does not fit.
    pub fn scaled_delay(&self, op: Operation) -> StdDuration {
        StdDuration::try_from_secs_f64(op.base_delay().as_secs_f64() * self.scale)
            .unwrap_or(StdDuration::MAX)
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(1.0, StdDuration::ZERO)
    }
}

impl fmt::Debug for SimulatedLatency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedLatency")
            .field("scale", &self.scale)
            .field("max_jitter", &self.max_jitter)
            .finish()
    }
}

impl Latency for SimulatedLatency {
    async fn pause(&self, op: Operation) {
        let mut delay = self.scaled_delay(op);
        let jitter_cap = self.max_jitter.as_millis() as u64;
        if jitter_cap > 0 {
            let jitter_ms: u64 = rng().random_range(0..=jitter_cap);
            delay = delay.saturating_add(StdDuration::from_millis(jitter_ms));
        }
        if delay.is_zero() {
            return;
        }
        debug!(?op, ?delay, "Simulating latency");
        sleep(delay).await;
    }
}

/// Offsets covered by `page` of size `page_size` in a collection of `len` items.
///
/// Returns an empty range for page 0, size 0, or an offset at or past `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= len {
        return len..len;
    }
    start..start.saturating_add(page_size).min(len)
}

/// The items of one page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Paginated, read-only access to a shared [`ContentStore`].
///
/// Cloning is cheap: clones share the same store.
#[derive(Debug, Clone)]
pub struct RetrievalService<L = SimulatedLatency> {
    store: Arc<ContentStore>,
    latency: L,
}

impl<L> RetrievalService<L>
where
    L: Latency,
{
    pub fn new(store: Arc<ContentStore>, latency: L) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Display metadata for every category, in navigation order.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        Category::ALL.into_iter().map(Category::info).collect()
    }

    /// One page of a category, by tag.
    ///
    /// An unknown tag yields an empty page.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_by_category(
        &self,
        category: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<ContentItem>, RetrievalError> {
        let Some(category) = Category::from_tag(category) else {
            self.latency.pause(Operation::List).await;
            warn!(category, "Unknown category; returning empty page");
            return Ok(Vec::new());
        };
        self.list_page(category, page, page_size).await
    }

    /// One page of a category.
    #[instrument(level = "debug", skip(self, category), fields(%category))]
    pub async fn list_page(
        &self,
        category: Category,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<ContentItem>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        let range = page_range(self.store.len(category), page, page_size);
        let items = self.store.slice(category, range);
        debug!(count = items.len(), "Listed page");
        Ok(items)
    }

    /// The item with `id` in one category, by tag.
    ///
    /// The lookup never crosses categories; an unknown tag finds nothing.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_by_id(&self, category: &str, id: &str) -> Result<ContentItem, RetrievalError> {
        self.latency.pause(Operation::Lookup).await;
        Category::from_tag(category)
            .and_then(|c| self.store.find(c, id))
            .ok_or_else(|| RetrievalError::not_found(category, id))
    }

    /// An article from any article category.
    ///
    /// Collections are searched in [`ARTICLE_LOOKUP_PRIORITY`] order and the
    /// first match is returned.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_article(&self, id: &str) -> Result<Article, RetrievalError> {
        self.latency.pause(Operation::Lookup).await;
        ARTICLE_LOOKUP_PRIORITY
            .into_iter()
            .find_map(|category| self.store.find_article(category, id))
            .cloned()
            .ok_or_else(|| RetrievalError::not_found("articles", id))
    }

    /// The landing view's aggregate read.
    ///
    /// The featured article is the first tech article; every list is page 1
    /// of its category at `page_size`.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_featured_bundle(
        &self,
        page_size: usize,
    ) -> Result<FeaturedBundle, RetrievalError> {
        self.latency.pause(Operation::Featured).await;
        let store = &self.store;
        let bundle = FeaturedBundle {
            featured_article: store.articles(ArticleCategory::Tech).first().cloned(),
            tech_articles: first_page(store.articles(ArticleCategory::Tech), page_size),
            health_articles: first_page(store.articles(ArticleCategory::Health), page_size),
            stock_articles: first_page(store.articles(ArticleCategory::Stocks), page_size),
            horoscopes: first_page(store.horoscopes(), page_size),
            quotes: first_page(store.quotes(), page_size),
            jokes: first_page(store.jokes(), page_size),
            brain_teasers: first_page(store.brain_teasers(), page_size),
            youtube_videos: first_page(store.videos(), page_size),
        };
        debug!(
            featured = bundle.featured_article.as_ref().map(|a| a.base.id.as_str()),
            "Built featured bundle"
        );
        Ok(bundle)
    }

    /// Every article, tech then health then stocks.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_all_articles(&self) -> Result<Vec<Article>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(ARTICLE_LOOKUP_PRIORITY
            .into_iter()
            .flat_map(|c| self.store.articles(c).iter().cloned())
            .collect())
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn list_articles(
        &self,
        category: ArticleCategory,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Article>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.articles(category), page, page_size).to_vec())
    }

    pub async fn list_horoscopes(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Horoscope>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.horoscopes(), page, page_size).to_vec())
    }

    pub async fn list_quotes(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Quote>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.quotes(), page, page_size).to_vec())
    }

    pub async fn list_jokes(&self, page: usize, page_size: usize) -> Result<Vec<Joke>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.jokes(), page, page_size).to_vec())
    }

    pub async fn list_brain_teasers(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<BrainTeaser>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.brain_teasers(), page, page_size).to_vec())
    }

    pub async fn list_videos(&self, page: usize, page_size: usize) -> Result<Vec<Video>, RetrievalError> {
        self.latency.pause(Operation::List).await;
        Ok(paginate(self.store.videos(), page, page_size).to_vec())
    }

    /// Articles to show next to `article` on its detail page.
    ///
    /// Reads page 1 of the article's category with one extra slot, drops the
    /// article itself, and keeps at most `limit`.
    #[instrument(level = "debug", skip_all, fields(id = %article.base.id, limit = limit))]
    pub async fn get_related_articles(
        &self,
        article: &Article,
        limit: usize,
    ) -> Result<Vec<Article>, RetrievalError> {
        let candidates = self
            .list_articles(article.category, 1, limit.saturating_add(1))
            .await?;
        Ok(candidates
            .into_iter()
            .filter(|a| a.base.id != article.base.id)
            .take(limit)
            .collect())
    }

    /// The first horoscope whose sign matches, ignoring case.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_horoscope_by_sign(&self, sign: &str) -> Result<Horoscope, RetrievalError> {
        self.latency.pause(Operation::Lookup).await;
        self.store
            .horoscopes()
            .iter()
            .find(|h| h.sign.eq_ignore_ascii_case(sign.trim()))
            .cloned()
            .ok_or_else(|| RetrievalError::not_found(Category::Horoscope.as_str(), sign))
    }
}

fn first_page<T: Clone>(items: &[T], page_size: usize) -> Vec<T> {
    paginate(items, 1, page_size).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Content;
    use crate::store::{DEFAULT_TARGET_COUNT, SeedSet};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 6).unwrap()
    }

    fn service() -> RetrievalService<NoLatency> {
        RetrievalService::new(Arc::new(ContentStore::with_defaults(today())), NoLatency)
    }

    fn ids(items: &[ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_page_range_bounds() {
        assert_eq!(page_range(100, 1, 10), 0..10);
        assert_eq!(page_range(100, 3, 10), 20..30);
        assert_eq!(page_range(95, 10, 10), 90..95);
        assert!(page_range(100, 11, 10).is_empty());
        assert!(page_range(100, 0, 10).is_empty());
        assert!(page_range(100, 1, 0).is_empty());
        assert!(page_range(0, 1, 10).is_empty());
        assert!(page_range(100, usize::MAX, usize::MAX).is_empty());
    }

    #[tokio::test]
    async fn test_pages_concatenate_without_drift() {
        let api = service();
        for category in Category::ALL {
            for size in [1, 3, 7, 12, 40, 60] {
                let mut joined = api.list_page(category, 1, size).await.unwrap();
                joined.extend(api.list_page(category, 2, size).await.unwrap());
                let double = api.list_page(category, 1, size * 2).await.unwrap();
                assert_eq!(joined, double, "{category} size {size}");
            }
        }
    }

    #[tokio::test]
    async fn test_list_by_category_offsets() {
        let api = service();
        let page = api.list_by_category("quotes", 2, 4).await.unwrap();
        assert_eq!(ids(&page), vec!["q1-4", "q2-5", "q3-6", "q4-7"]);
    }

    #[tokio::test]
    async fn test_list_past_end_is_empty() {
        let api = service();
        let last = api.list_by_category("jokes", 9, 12).await.unwrap();
        assert_eq!(last.len(), DEFAULT_TARGET_COUNT - 96);
        assert!(api.list_by_category("jokes", 10, 12).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_not_error() {
        let api = service();
        assert!(api.list_by_category("sports", 1, 10).await.unwrap().is_empty());
        assert!(api.list_by_category("", 1, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_matches_id() {
        let api = service();
        for (category, id) in [("tech", "t1"), ("videos", "v3-50"), ("brainteasers", "bt2-97")] {
            let item = api.get_by_id(category, id).await.unwrap();
            assert_eq!(item.id(), id);
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let api = service();
        let err = api.get_by_id("tech", "h1").await.unwrap_err();
        assert_eq!(
            err,
            RetrievalError::NotFound {
                category: "tech".to_string(),
                id: "h1".to_string()
            }
        );
        assert!(api.get_by_id("sports", "t1").await.is_err());
        assert!(api.get_by_id("tech", "t1-100").await.is_err());
    }

    #[tokio::test]
    async fn test_featured_bundle_matches_first_pages() {
        let api = service();
        let bundle = api.get_featured_bundle(4).await.unwrap();

        let first_tech = api.store().articles(ArticleCategory::Tech)[0].clone();
        assert_eq!(bundle.featured_article, Some(first_tech));

        let quotes: Vec<ContentItem> = bundle.quotes.iter().cloned().map(Into::into).collect();
        assert_eq!(quotes, api.list_by_category("quotes", 1, 4).await.unwrap());
        assert_eq!(bundle.youtube_videos, api.list_videos(1, 4).await.unwrap());
        assert_eq!(bundle.brain_teasers.len(), 4);
        assert_eq!(bundle.stock_articles.len(), 4);
    }

    #[tokio::test]
    async fn test_featured_bundle_empty_tech() {
        let seeds = SeedSet {
            tech: Vec::new(),
            ..SeedSet::builtin()
        };
        let store = ContentStore::build(&seeds, 10, today());
        let api = RetrievalService::new(Arc::new(store), NoLatency);

        let bundle = api.get_featured_bundle(4).await.unwrap();
        assert_eq!(bundle.featured_article, None);
        assert!(bundle.tech_articles.is_empty());
        assert_eq!(bundle.jokes.len(), 4);
    }

    #[tokio::test]
    async fn test_get_article_priority_order() {
        let mut seeds = SeedSet::builtin();
        let mut shared_health = seeds.health[0].clone();
        shared_health.base_mut().id = "dup".to_string();
        let mut shared_stock = seeds.stocks[0].clone();
        shared_stock.base_mut().id = "dup".to_string();
        seeds.health.push(shared_health);
        seeds.stocks.insert(0, shared_stock);

        let store = ContentStore::build(&seeds, 4, today());
        let api = RetrievalService::new(Arc::new(store), NoLatency);

        let found = api.get_article("dup").await.unwrap();
        assert_eq!(found.category, ArticleCategory::Health);
        assert!(api.get_article("missing").await.is_err());
    }

    #[tokio::test]
    async fn test_list_all_articles_order() {
        let api = service();
        let all = api.list_all_articles().await.unwrap();
        assert_eq!(all.len(), 3 * DEFAULT_TARGET_COUNT);
        assert_eq!(all[0].base.id, "t1");
        assert_eq!(all[DEFAULT_TARGET_COUNT].base.id, "h1");
        assert_eq!(all[2 * DEFAULT_TARGET_COUNT].base.id, "s1");
    }

    #[tokio::test]
    async fn test_related_articles_exclude_self() {
        let api = service();
        let article = api.get_article("t2").await.unwrap();
        let related = api.get_related_articles(&article, 3).await.unwrap();
        let related_ids: Vec<_> = related.iter().map(|a| a.base.id.as_str()).collect();
        assert_eq!(related_ids, vec!["t1", "t3", "t4"]);

        let deep = api.get_article("t3-50").await.unwrap();
        let related = api.get_related_articles(&deep, 3).await.unwrap();
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|a| a.category == ArticleCategory::Tech));
    }

    #[tokio::test]
    async fn test_horoscope_by_sign_case_insensitive() {
        let api = service();
        let h = api.get_horoscope_by_sign("gemini").await.unwrap();
        assert_eq!(h.sign, "Gemini");
        assert_eq!(h.base.id, "hr3");
        assert!(matches!(
            api.get_horoscope_by_sign("Ophiuchus").await,
            Err(RetrievalError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_typed_lists_agree_with_untyped() {
        let api = service();
        let typed: Vec<ContentItem> = api
            .list_brain_teasers(3, 5)
            .await
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(typed, api.list_by_category("brainteasers", 3, 5).await.unwrap());

        let health = api.list_articles(ArticleCategory::Health, 1, 2).await.unwrap();
        assert_eq!(health[0].base.id, "h1");
        assert_eq!(api.list_jokes(1, 1).await.unwrap()[0].base.id, "j1");
        assert_eq!(api.list_horoscopes(1, 2).await.unwrap().len(), 2);
    }

    #[test]
    fn test_categories_in_navigation_order() {
        let api = service();
        let names: Vec<_> = api.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            names,
            vec!["tech", "health", "stocks", "horoscope", "quotes", "jokes", "brainteasers", "videos"]
        );
    }

    #[test]
    fn test_simulated_latency_scaling() {
        let latency = SimulatedLatency::new(0.5, StdDuration::ZERO);
        assert_eq!(latency.scaled_delay(Operation::Featured), StdDuration::from_millis(250));
        assert_eq!(latency.scaled_delay(Operation::Lookup), StdDuration::from_millis(100));

        let disabled = SimulatedLatency::new(-3.0, StdDuration::ZERO);
        assert_eq!(disabled.scaled_delay(Operation::List), StdDuration::ZERO);
        let nan = SimulatedLatency::new(f64::NAN, StdDuration::ZERO);
        assert_eq!(nan.scaled_delay(Operation::List), StdDuration::ZERO);
    }

    #[test]
    fn test_simulated_latency_huge_scale_saturates() {
        let latency = SimulatedLatency::new(1e300, StdDuration::ZERO);
        assert_eq!(latency.scaled_delay(Operation::List), StdDuration::MAX);

        let latency = SimulatedLatency::new(f64::MAX, StdDuration::from_millis(10));
        assert_eq!(latency.scaled_delay(Operation::Featured), StdDuration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_sleeps() {
        let latency = SimulatedLatency::default();
        let start = tokio::time::Instant::now();
        latency.pause(Operation::List).await;
        assert!(start.elapsed() >= StdDuration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_jitter_bounded() {
        let latency = SimulatedLatency::new(0.0, StdDuration::from_millis(40));
        let start = tokio::time::Instant::now();
        latency.pause(Operation::Featured).await;
        assert!(start.elapsed() <= StdDuration::from_millis(40));
    }
}
