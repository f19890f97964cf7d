//! Data models for the content served by the retrieval layer.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`BaseContent`]: Fields shared by every entity (id, title, summary, date, ...)
//! - Entity types: [`Article`], [`Horoscope`], [`Quote`], [`Joke`], [`BrainTeaser`], [`Video`]
//! - [`ContentItem`]: A single item of any category, as returned by untyped reads
//! - [`Category`]: The eight fixed content partitions and their display metadata
//! - [`FeaturedBundle`]: The aggregate first-page read for the landing view
//!
//! Entities serialize as flat camelCase JSON objects (`imageUrl`, `readTime`,
//! `videoId`, ...) so the output matches what the front end consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every content entity.
///
/// `id` is unique within one category's collection only. Two categories may
/// hold items with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseContent {
    /// Identifier, unique within the owning collection.
    pub id: String,
    /// Headline shown on cards and detail pages.
    pub title: String,
    /// One or two sentence teaser.
    pub summary: String,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Where the item came from, either a bare domain or a full URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Optional image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl BaseContent {
    /// Extract the host name from the `source` field.
    ///
    /// Sources are stored either as full URLs (`https://www.wired.com/story`)
    /// or as bare domains (`medium.com`); both resolve to their host.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // "https://www.wired.com/story/x" -> "www.wired.com"
    /// // "medium.com"                     -> "medium.com"
    /// ```
    pub fn source_host(&self) -> Option<String> {
        let source = self.source.as_deref()?.trim();
        if source.is_empty() {
            return None;
        }
        let parsed = url::Url::parse(source)
            .ok()
            .filter(|u| u.host_str().is_some())
            .or_else(|| url::Url::parse(&format!("https://{source}")).ok())?;
        parsed.host_str().map(str::to_string)
    }
}

/// Shared access to the [`BaseContent`] embedded in every entity.
///
/// The store's expansion step only rewrites base fields, so it is written
/// once against this trait instead of once per entity type.
pub trait Content: Clone {
    fn base(&self) -> &BaseContent;
    fn base_mut(&mut self) -> &mut BaseContent;

    fn id(&self) -> &str {
        &self.base().id
    }
}

macro_rules! impl_content {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Content for $ty {
                fn base(&self) -> &BaseContent {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut BaseContent {
                    &mut self.base
                }
            }
        )+
    };
}

/// The category tag carried by an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Tech,
    Health,
    Stocks,
}

impl ArticleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleCategory::Tech => "tech",
            ArticleCategory::Health => "health",
            ArticleCategory::Stocks => "stocks",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news article from one of the three article categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub base: BaseContent,
    /// Full body text; paragraphs separated by blank lines.
    pub content: String,
    pub category: ArticleCategory,
    /// Topic tags. Treated as a set: duplicates are dropped on load.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated read time in minutes.
    pub read_time: u32,
}

/// A daily horoscope for one zodiac sign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horoscope {
    #[serde(flatten)]
    pub base: BaseContent,
    pub sign: String,
    pub prediction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(flatten)]
    pub base: BaseContent,
    pub author: String,
    pub text: String,
    /// Free-text label, e.g. "Motivation".
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    #[serde(flatten)]
    pub base: BaseContent,
    pub text: String,
    /// Free-text label, e.g. "Puns".
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized name for display.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainTeaser {
    #[serde(flatten)]
    pub base: BaseContent,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub category: String,
}

/// A video hosted on YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(flatten)]
    pub base: BaseContent,
    /// External YouTube video id.
    pub video_id: String,
    pub channel_name: String,
    pub category: String,
    pub view_count: u64,
}

impl Video {
    /// URL for the embeddable player.
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}",
            urlencoding::encode(&self.video_id)
        )
    }

    /// URL of the full-size thumbnail image.
    pub fn thumbnail_url(&self) -> String {
        format!(
            "https://img.youtube.com/vi/{}/maxresdefault.jpg",
            urlencoding::encode(&self.video_id)
        )
    }
}

impl_content!(Article, Horoscope, Quote, Joke, BrainTeaser, Video);

/// One of the eight fixed content partitions.
///
/// The string tags (`tech`, `health`, ...) are what URLs and the command
/// line use. An unrecognized tag is not an error: [`Category::from_tag`]
/// returns `None` and reads against it come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Health,
    Stocks,
    Horoscope,
    Quotes,
    Jokes,
    Brainteasers,
    Videos,
}

impl Category {
    /// All categories in canonical navigation order.
    pub const ALL: [Category; 8] = [
        Category::Tech,
        Category::Health,
        Category::Stocks,
        Category::Horoscope,
        Category::Quotes,
        Category::Jokes,
        Category::Brainteasers,
        Category::Videos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Health => "health",
            Category::Stocks => "stocks",
            Category::Horoscope => "horoscope",
            Category::Quotes => "quotes",
            Category::Jokes => "jokes",
            Category::Brainteasers => "brainteasers",
            Category::Videos => "videos",
        }
    }

    /// Resolve a category tag. Matching is exact and case-sensitive, as the
    /// tags come from route segments.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }

    /// The article category this partition holds, if it holds articles.
    pub fn article_category(self) -> Option<ArticleCategory> {
        match self {
            Category::Tech => Some(ArticleCategory::Tech),
            Category::Health => Some(ArticleCategory::Health),
            Category::Stocks => Some(ArticleCategory::Stocks),
            _ => None,
        }
    }

    /// Display metadata for navigation and page headers.
    pub fn info(self) -> CategoryInfo {
        let (name, description, icon) = match self {
            Category::Tech => (
                "Tech & AI News",
                "The latest in technology, AI and software",
                "cpu",
            ),
            Category::Health => (
                "Health Tips",
                "Practical advice for body and mind",
                "heart-pulse",
            ),
            Category::Stocks => (
                "Stock Market News",
                "Markets, sectors and investing insights",
                "trending-up",
            ),
            Category::Horoscope => (
                "Daily Horoscope",
                "What the stars have in store today",
                "sparkles",
            ),
            Category::Quotes => (
                "Quotes",
                "Words to inspire your day",
                "quote",
            ),
            Category::Jokes => ("Jokes", "A daily dose of laughter", "laugh"),
            Category::Brainteasers => (
                "Brain Teasers",
                "Puzzles and riddles to sharpen your mind",
                "brain",
            ),
            Category::Videos => (
                "Trending Videos",
                "Popular videos from around the web",
                "youtube",
            ),
        };
        CategoryInfo {
            id: self,
            name,
            description,
            icon,
        }
    }
}

impl From<ArticleCategory> for Category {
    fn from(value: ArticleCategory) -> Self {
        match value {
            ArticleCategory::Tech => Category::Tech,
            ArticleCategory::Health => Category::Health,
            ArticleCategory::Stocks => Category::Stocks,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A single item from any category.
///
/// Serializes without a tag, so a list of `ContentItem`s looks exactly like
/// a list of the underlying entity objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Article(Article),
    Horoscope(Horoscope),
    Quote(Quote),
    Joke(Joke),
    BrainTeaser(BrainTeaser),
    Video(Video),
}

impl ContentItem {
    pub fn base(&self) -> &BaseContent {
        match self {
            ContentItem::Article(a) => a.base(),
            ContentItem::Horoscope(h) => h.base(),
            ContentItem::Quote(q) => q.base(),
            ContentItem::Joke(j) => j.base(),
            ContentItem::BrainTeaser(b) => b.base(),
            ContentItem::Video(v) => v.base(),
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    /// Short kind label used in logs and rendered output.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Article(_) => "article",
            ContentItem::Horoscope(_) => "horoscope",
            ContentItem::Quote(_) => "quote",
            ContentItem::Joke(_) => "joke",
            ContentItem::BrainTeaser(_) => "brainteaser",
            ContentItem::Video(_) => "video",
        }
    }

    /// The text a listing card shows under the title.
    ///
    /// Quotes show their attribution, brain teasers their question, and
    /// everything else its summary.
    pub fn card_blurb(&self) -> String {
        match self {
            ContentItem::Quote(q) => format!("— {}", q.author),
            ContentItem::BrainTeaser(b) => b.question.clone(),
            other => other.base().summary.clone(),
        }
    }

    pub fn as_article(&self) -> Option<&Article> {
        match self {
            ContentItem::Article(a) => Some(a),
            _ => None,
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for ContentItem {
                fn from(value: $variant) -> Self {
                    ContentItem::$variant(value)
                }
            }
        )+
    };
}

impl_from_entity!(Article, Horoscope, Quote, Joke, BrainTeaser, Video);

/// The aggregate read that populates the landing view.
///
/// `featured_article` is the first tech article; every list is page 1 of
/// its category at the requested page size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedBundle {
    pub featured_article: Option<Article>,
    pub tech_articles: Vec<Article>,
    pub health_articles: Vec<Article>,
    pub stock_articles: Vec<Article>,
    pub horoscopes: Vec<Horoscope>,
    pub quotes: Vec<Quote>,
    pub jokes: Vec<Joke>,
    pub brain_teasers: Vec<BrainTeaser>,
    pub youtube_videos: Vec<Video>,
}
