//! The in-memory content store.
//!
//! A [`ContentStore`] is built once at startup from a [`SeedSet`] and never
//! changes afterwards. Each category's collection is produced by [`expand`],
//! which grows a short seed list to the target size by cycling through it
//! and rewriting ids, titles and dates.
//!
//! # Submodules
//!
//! - [`seed`]: Built-in seed lists
//! - [`loader`]: YAML/JSON seed file overrides

pub mod loader;
pub mod seed;

use crate::models::{
    Article, ArticleCategory, BrainTeaser, Category, Content, ContentItem, Horoscope, Joke, Quote,
    Video,
};
use chrono::{Days, NaiveDate};
use std::ops::Range;
use tracing::{debug, info, instrument, warn};

pub use loader::{SeedError, load_seed_file};
pub use seed::SeedSet;

/// Number of items each category is expanded to by default.
pub const DEFAULT_TARGET_COUNT: usize = 100;

/// Largest accepted expansion target per category.
pub const MAX_TARGET_COUNT: usize = 100_000;

/// Grow `seed` to `target` items.
///
/// The first `seed.len()` items are the seed, unchanged. Each later item at
/// position `index` is a copy of `seed[index % seed.len()]` with:
/// - id `"{seed.id}-{index}"`
/// - title `"{seed.title} {index + 1}"`
/// - date `today - index days`
///
/// If `target` is not larger than the seed, the first `target` seed items are
/// returned as-is. An empty seed always yields an empty collection.
///
/// # Examples
///
/// ```ignore
/// // seed [t1], target 3 -> [t1, t1-1 ("... 2", today-1), t1-2 ("... 3", today-2)]
/// ```
pub fn expand<T: Content>(seed: &[T], target: usize, today: NaiveDate) -> Vec<T> {
    if seed.is_empty() {
        return Vec::new();
    }
    if target <= seed.len() {
        return seed[..target].to_vec();
    }

    let mut items = Vec::with_capacity(target);
    items.extend_from_slice(seed);
    for index in seed.len()..target {
        let mut item = seed[index % seed.len()].clone();
        let base = item.base_mut();
        base.id = format!("{}-{}", base.id, index);
        base.title = format!("{} {}", base.title, index + 1);
        base.date = today
            .checked_sub_days(Days::new(index as u64))
            .unwrap_or(NaiveDate::MIN);
        items.push(item);
    }
    items
}

fn to_items<T>(items: &[T]) -> Vec<ContentItem>
where
    T: Clone + Into<ContentItem>,
{
    items.iter().cloned().map(Into::into).collect()
}

fn find<'a, T: Content>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Immutable per-category collections, built once.
///
/// Share it behind an `Arc` when several services or tasks read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    tech: Vec<Article>,
    health: Vec<Article>,
    stocks: Vec<Article>,
    horoscopes: Vec<Horoscope>,
    quotes: Vec<Quote>,
    jokes: Vec<Joke>,
    brain_teasers: Vec<BrainTeaser>,
    videos: Vec<Video>,
    built_on: NaiveDate,
}

impl ContentStore {
    /// Expand every seed list to `target` items.
    ///
    /// Targets above [`MAX_TARGET_COUNT`] are clamped to it.
    #[instrument(level = "info", skip_all, fields(target_count = target, %today))]
    pub fn build(seeds: &SeedSet, target: usize, today: NaiveDate) -> Self {
        if target > MAX_TARGET_COUNT {
            warn!(target_count = target, max = MAX_TARGET_COUNT, "Target count clamped");
        }
        let target = target.min(MAX_TARGET_COUNT);
        let store = Self {
            tech: expand(&seeds.tech, target, today),
            health: expand(&seeds.health, target, today),
            stocks: expand(&seeds.stocks, target, today),
            horoscopes: expand(&seeds.horoscope, target, today),
            quotes: expand(&seeds.quotes, target, today),
            jokes: expand(&seeds.jokes, target, today),
            brain_teasers: expand(&seeds.brainteasers, target, today),
            videos: expand(&seeds.videos, target, today),
            built_on: today,
        };
        for category in Category::ALL {
            debug!(%category, count = store.len(category), "Materialized collection");
        }
        info!(target_count = target, total = store.total_len(), "Content store built");
        store
    }

    /// Built-in seeds expanded to [`DEFAULT_TARGET_COUNT`].
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self::build(&SeedSet::builtin(), DEFAULT_TARGET_COUNT, today)
    }

    /// The calendar day the derived dates were computed from.
    pub fn built_on(&self) -> NaiveDate {
        self.built_on
    }

    pub fn articles(&self, category: ArticleCategory) -> &[Article] {
        match category {
            ArticleCategory::Tech => &self.tech,
            ArticleCategory::Health => &self.health,
            ArticleCategory::Stocks => &self.stocks,
        }
    }

    pub fn horoscopes(&self) -> &[Horoscope] {
        &self.horoscopes
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn brain_teasers(&self) -> &[BrainTeaser] {
        &self.brain_teasers
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Number of items in one category's collection.
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Tech => self.tech.len(),
            Category::Health => self.health.len(),
            Category::Stocks => self.stocks.len(),
            Category::Horoscope => self.horoscopes.len(),
            Category::Quotes => self.quotes.len(),
            Category::Jokes => self.jokes.len(),
            Category::Brainteasers => self.brain_teasers.len(),
            Category::Videos => self.videos.len(),
        }
    }

    pub fn total_len(&self) -> usize {
        Category::ALL.into_iter().map(|c| self.len(c)).sum()
    }

    /// Items in `range` of one category, in collection order.
    ///
    /// The range is clamped to the collection, so an out-of-bounds range
    /// yields fewer (or no) items rather than panicking.
    pub fn slice(&self, category: Category, range: Range<usize>) -> Vec<ContentItem> {
        let len = self.len(category);
        let end = range.end.min(len);
        let start = range.start.min(end);
        match category {
            Category::Tech => to_items(&self.tech[start..end]),
            Category::Health => to_items(&self.health[start..end]),
            Category::Stocks => to_items(&self.stocks[start..end]),
            Category::Horoscope => to_items(&self.horoscopes[start..end]),
            Category::Quotes => to_items(&self.quotes[start..end]),
            Category::Jokes => to_items(&self.jokes[start..end]),
            Category::Brainteasers => to_items(&self.brain_teasers[start..end]),
            Category::Videos => to_items(&self.videos[start..end]),
        }
    }

    /// The item with `id` in one category, if present.
    pub fn find(&self, category: Category, id: &str) -> Option<ContentItem> {
        match category {
            Category::Tech => find(&self.tech, id).cloned().map(Into::into),
            Category::Health => find(&self.health, id).cloned().map(Into::into),
            Category::Stocks => find(&self.stocks, id).cloned().map(Into::into),
            Category::Horoscope => find(&self.horoscopes, id).cloned().map(Into::into),
            Category::Quotes => find(&self.quotes, id).cloned().map(Into::into),
            Category::Jokes => find(&self.jokes, id).cloned().map(Into::into),
            Category::Brainteasers => find(&self.brain_teasers, id).cloned().map(Into::into),
            Category::Videos => find(&self.videos, id).cloned().map(Into::into),
        }
    }

    /// The article with `id` in one article category.
    pub fn find_article(&self, category: ArticleCategory, id: &str) -> Option<&Article> {
        find(self.articles(category), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaseContent;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 6).unwrap()
    }

    fn joke(id: &str, title: &str) -> Joke {
        Joke {
            base: BaseContent {
                id: id.to_string(),
                title: title.to_string(),
                summary: "s".to_string(),
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                source: None,
                image_url: None,
            },
            text: format!("text of {id}"),
            category: "Puns".to_string(),
        }
    }

    #[test]
    fn test_expand_single_seed_scenario() {
        let seed = vec![joke("t1", "Joke")];
        let items = expand(&seed, 3, today());

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], seed[0]);
        assert_eq!(items[1].base.id, "t1-1");
        assert_eq!(items[1].base.title, "Joke 2");
        assert_eq!(items[2].base.id, "t1-2");
        assert_eq!(items[2].base.title, "Joke 3");
        assert_eq!(items[1].base.date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
        assert_eq!(items[2].base.date, NaiveDate::from_ymd_opt(2025, 5, 4).unwrap());
        assert_eq!(items[2].text, "text of t1");
    }

    #[test]
    fn test_expand_keeps_seed_prefix_and_cycles() {
        let seed = vec![joke("a", "A"), joke("b", "B"), joke("c", "C")];
        let items = expand(&seed, 8, today());

        assert_eq!(items.len(), 8);
        assert_eq!(&items[..3], &seed[..]);
        // index N derives from seed index 0
        assert_eq!(items[3].base.id, "a-3");
        assert_eq!(items[3].base.title, "A 4");
        assert_eq!(items[4].base.id, "b-4");
        assert_eq!(items[7].base.id, "b-7");
        assert_eq!(items[7].text, seed[1].text);
    }

    #[test]
    fn test_expand_dates_decrease_one_day_per_step() {
        let seed = vec![joke("a", "A"), joke("b", "B")];
        let items = expand(&seed, 10, today());
        for pair in items[2..].windows(2) {
            assert_eq!(pair[0].base.date - pair[1].base.date, chrono::Duration::days(1));
        }
        assert_eq!(items[2].base.date, NaiveDate::from_ymd_opt(2025, 5, 4).unwrap());
    }

    #[test]
    fn test_expand_target_not_above_seed() {
        let seed = vec![joke("a", "A"), joke("b", "B"), joke("c", "C")];
        assert_eq!(expand(&seed, 2, today()), seed[..2].to_vec());
        assert_eq!(expand(&seed, 3, today()), seed);
        assert!(expand(&seed, 0, today()).is_empty());
    }

    #[test]
    fn test_expand_empty_seed() {
        let seed: Vec<Joke> = Vec::new();
        assert!(expand(&seed, 100, today()).is_empty());
    }

    #[test]
    fn test_expand_is_deterministic() {
        let seed = vec![joke("a", "A"), joke("b", "B")];
        assert_eq!(expand(&seed, 50, today()), expand(&seed, 50, today()));
    }

    #[test]
    fn test_with_defaults_sizes() {
        let store = ContentStore::with_defaults(today());
        for category in Category::ALL {
            assert_eq!(store.len(category), DEFAULT_TARGET_COUNT, "{category}");
        }
        assert_eq!(store.total_len(), 8 * DEFAULT_TARGET_COUNT);
        assert_eq!(store.built_on(), today());
    }

    #[test]
    fn test_slice_clamps_range() {
        let store = ContentStore::with_defaults(today());
        assert_eq!(store.slice(Category::Quotes, 98..110).len(), 2);
        assert!(store.slice(Category::Quotes, 150..160).is_empty());
        assert_eq!(store.slice(Category::Videos, 0..3)[0].id(), "v1");
    }

    #[test]
    fn test_find_scoped_to_category() {
        let store = ContentStore::with_defaults(today());
        assert_eq!(store.find(Category::Tech, "t1").unwrap().id(), "t1");
        assert!(store.find(Category::Health, "t1").is_none());
        assert_eq!(store.find(Category::Jokes, "j2-41").unwrap().title(), "Daily Laugh 42");
        assert!(store.find_article(ArticleCategory::Stocks, "s1").is_some());
    }

    #[test]
    fn test_build_clamps_oversized_target() {
        let seeds = SeedSet {
            jokes: vec![joke("j1", "Daily Laugh")],
            ..SeedSet::default()
        };
        let store = ContentStore::build(&seeds, usize::MAX, today());
        assert_eq!(store.len(Category::Jokes), MAX_TARGET_COUNT);
        assert_eq!(store.len(Category::Tech), 0);
    }
}
