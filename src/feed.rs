//! Incremental ("infinite scroll") loading of category pages.
//!
//! An [`IncrementalLoader`] owns a growing list of items for one view. Each
//! [`IncrementalLoader::load_more`] call requests the next page from a
//! [`PageSource`] and appends it. A page shorter than the requested size is
//! the only exhaustion signal; after it, further calls issue no requests.

use crate::api::{Latency, RetrievalError, RetrievalService};
use crate::models::ContentItem;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Anything that can serve numbered pages.
pub trait PageSource {
    type Item;

    /// Fetch 1-based `page` with at most `page_size` items.
    async fn fetch_page(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Self::Item>, RetrievalError>;
}

/// Pages of one category, read through a [`RetrievalService`].
///
/// The category is kept as a raw tag: an unknown tag behaves like an empty
/// collection, so the first load exhausts the feed.
#[derive(Debug)]
pub struct CategoryFeed<'a, L> {
    service: &'a RetrievalService<L>,
    category: String,
}

impl<'a, L> CategoryFeed<'a, L> {
    pub fn new(service: &'a RetrievalService<L>, category: impl Into<String>) -> Self {
        Self {
            service,
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl<L: Latency> PageSource for CategoryFeed<'_, L> {
    type Item = ContentItem;

    async fn fetch_page(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<ContentItem>, RetrievalError> {
        self.service
            .list_by_category(&self.category, page, page_size)
            .await
    }
}

impl<L: Latency> RetrievalService<L> {
    /// An incremental loader over one category of this service.
    pub fn incremental(
        &self,
        category: impl Into<String>,
        page_size: usize,
    ) -> IncrementalLoader<CategoryFeed<'_, L>> {
        IncrementalLoader::new(CategoryFeed::new(self, category), page_size)
    }
}

/// Accumulates successive pages from a [`PageSource`].
pub struct IncrementalLoader<S: PageSource> {
    source: S,
    page_size: usize,
    /// Next page to request.
    page: usize,
    items: Vec<S::Item>,
    has_more: bool,
}

impl<S: PageSource> fmt::Debug for IncrementalLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalLoader")
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("loaded", &self.items.len())
            .field("has_more", &self.has_more)
            .finish()
    }
}

impl<S: PageSource> IncrementalLoader<S> {
    /// A fresh loader at page 1 with nothing loaded.
    ///
    /// A `page_size` of 0 is raised to 1; a zero-sized page could never be
    /// "short" and the loader would never finish.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            page: 1,
            items: Vec::new(),
            has_more: true,
        }
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<S::Item> {
        self.items
    }

    /// The page the next [`load_more`](Self::load_more) will request.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Request the next page and append it.
    ///
    /// Returns the number of items appended. Once the source has returned a
    /// short page this is a no-op returning `Ok(0)` without calling the
    /// source. On error nothing changes, so calling again retries the same
    /// page.
    #[instrument(level = "debug", skip_all, fields(page = self.page, page_size = self.page_size))]
    pub async fn load_more(&mut self) -> Result<usize, RetrievalError> {
        if !self.has_more {
            debug!("Feed exhausted; skipping request");
            return Ok(0);
        }

        let batch = match self.source.fetch_page(self.page, self.page_size).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(page = self.page, error = %e, "Failed to load page");
                return Err(e);
            }
        };

        let appended = batch.len();
        if appended < self.page_size {
            self.has_more = false;
        }
        self.items.extend(batch);
        self.page += 1;

        debug!(
            appended,
            total = self.items.len(),
            has_more = self.has_more,
            "Loaded page"
        );
        Ok(appended)
    }

    /// Keep loading until the source is exhausted or `max_pages` more pages
    /// have been requested.
    ///
    /// Returns the number of pages requested by this call.
    pub async fn load_all(&mut self, max_pages: Option<usize>) -> Result<usize, RetrievalError> {
        let mut requested = 0usize;
        while self.has_more && max_pages.is_none_or(|max| requested < max) {
            self.load_more().await?;
            requested += 1;
        }
        info!(
            pages = requested,
            total = self.items.len(),
            has_more = self.has_more,
            "Incremental load finished"
        );
        Ok(requested)
    }

    /// Drop everything loaded and start again from page 1.
    pub fn reset(&mut self) {
        self.page = 1;
        self.items.clear();
        self.has_more = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NoLatency;
    use crate::store::ContentStore;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::sync::Arc;

    /// Serves `0..len` and counts requests.
    struct CountingSource {
        len: usize,
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn new(len: usize) -> Self {
            Self {
                len,
                calls: Cell::new(0),
            }
        }
    }

    impl PageSource for CountingSource {
        type Item = usize;

        async fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<usize>, RetrievalError> {
            self.calls.set(self.calls.get() + 1);
            let range = crate::api::page_range(self.len, page, page_size);
            Ok(range.collect())
        }
    }

    /// Fails every request.
    struct FailingSource;

    impl PageSource for FailingSource {
        type Item = usize;

        async fn fetch_page(&self, _page: usize, _page_size: usize) -> Result<Vec<usize>, RetrievalError> {
            Err(RetrievalError::Failed("backend unavailable".to_string()))
        }
    }

    fn service() -> RetrievalService<NoLatency> {
        let today = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        RetrievalService::new(Arc::new(ContentStore::with_defaults(today)), NoLatency)
    }

    #[tokio::test]
    async fn test_initial_state() {
        let loader = IncrementalLoader::new(CountingSource::new(10), 4);
        assert_eq!(loader.page(), 1);
        assert!(loader.items().is_empty());
        assert!(loader.has_more());
    }

    #[tokio::test]
    async fn test_load_more_appends_in_order() {
        let mut loader = IncrementalLoader::new(CountingSource::new(10), 4);
        assert_eq!(loader.load_more().await.unwrap(), 4);
        assert_eq!(loader.load_more().await.unwrap(), 4);
        assert_eq!(loader.items(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(loader.page(), 3);
        assert!(loader.has_more());
    }

    #[tokio::test]
    async fn test_short_page_exhausts_and_stops_requests() {
        let mut loader = IncrementalLoader::new(CountingSource::new(10), 4);
        loader.load_more().await.unwrap();
        loader.load_more().await.unwrap();
        assert_eq!(loader.load_more().await.unwrap(), 2);
        assert!(!loader.has_more());
        assert_eq!(loader.page(), 4);
        assert_eq!(loader.source().calls.get(), 3);

        let before = loader.items().to_vec();
        assert_eq!(loader.load_more().await.unwrap(), 0);
        assert_eq!(loader.source().calls.get(), 3);
        assert_eq!(loader.items(), &before[..]);
        assert_eq!(loader.page(), 4);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_empty_page() {
        let mut loader = IncrementalLoader::new(CountingSource::new(8), 4);
        loader.load_more().await.unwrap();
        loader.load_more().await.unwrap();
        assert!(loader.has_more());

        assert_eq!(loader.load_more().await.unwrap(), 0);
        assert!(!loader.has_more());
        assert_eq!(loader.page(), 4);
        assert_eq!(loader.items().len(), 8);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_state_unchanged() {
        let mut loader = IncrementalLoader::new(FailingSource, 5);
        let err = loader.load_more().await.unwrap_err();
        assert_eq!(err, RetrievalError::Failed("backend unavailable".to_string()));
        assert_eq!(loader.page(), 1);
        assert!(loader.items().is_empty());
        assert!(loader.has_more());
    }

    #[tokio::test]
    async fn test_zero_page_size_is_raised() {
        let mut loader = IncrementalLoader::new(CountingSource::new(2), 0);
        assert_eq!(loader.page_size(), 1);
        assert_eq!(loader.load_all(None).await.unwrap(), 3);
        assert_eq!(loader.items(), &[0, 1]);
    }

    #[tokio::test]
    async fn test_load_all_respects_cap() {
        let mut loader = IncrementalLoader::new(CountingSource::new(100), 10);
        assert_eq!(loader.load_all(Some(3)).await.unwrap(), 3);
        assert_eq!(loader.items().len(), 30);
        assert!(loader.has_more());
    }

    #[tokio::test]
    async fn test_reset() {
        let mut loader = IncrementalLoader::new(CountingSource::new(3), 5);
        loader.load_more().await.unwrap();
        assert!(!loader.has_more());

        loader.reset();
        assert_eq!(loader.page(), 1);
        assert!(loader.items().is_empty());
        assert!(loader.has_more());
        assert_eq!(loader.load_more().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_category_feed_scrolls_whole_collection() {
        let api = service();
        let mut loader = api.incremental("videos", 12);
        let pages = loader.load_all(None).await.unwrap();

        assert_eq!(pages, 9);
        assert!(!loader.has_more());
        let expected = api.list_by_category("videos", 1, 100).await.unwrap();
        assert_eq!(loader.into_items(), expected);
    }

    #[tokio::test]
    async fn test_category_feed_unknown_category() {
        let api = service();
        let mut loader = api.incremental("sports", 12);
        assert_eq!(loader.load_more().await.unwrap(), 0);
        assert!(!loader.has_more());
        assert_eq!(loader.source().category(), "sports");
    }
}
