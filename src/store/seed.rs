//! Hand-authored seed collections.
//!
//! Each category starts from a handful of items here; [`super::expand`]
//! grows them to the full collection size at startup. A seed file can
//! replace any of these lists (see [`super::loader`]).

use crate::models::{
    Article, ArticleCategory, BaseContent, BrainTeaser, Difficulty, Horoscope, Joke, Quote, Video,
};
use chrono::NaiveDate;
use itertools::Itertools;

/// Seed lists for all eight categories.
///
/// Field names match the category tags, so a seed file reads as
/// `tech: [...]`, `brainteasers: [...]` and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    pub tech: Vec<Article>,
    pub health: Vec<Article>,
    pub stocks: Vec<Article>,
    pub horoscope: Vec<Horoscope>,
    pub quotes: Vec<Quote>,
    pub jokes: Vec<Joke>,
    pub brainteasers: Vec<BrainTeaser>,
    pub videos: Vec<Video>,
}

impl SeedSet {
    /// The built-in seeds shipped with the crate, normalized.
    pub fn builtin() -> Self {
        Self {
            tech: tech_articles(),
            health: health_articles(),
            stocks: stock_articles(),
            horoscope: horoscopes(),
            quotes: quotes(),
            jokes: jokes(),
            brainteasers: brain_teasers(),
            videos: videos(),
        }
        .normalize()
    }

    /// Collapse duplicate article tags, keeping first-occurrence order.
    pub fn normalize(mut self) -> Self {
        for article in self
            .tech
            .iter_mut()
            .chain(self.health.iter_mut())
            .chain(self.stocks.iter_mut())
        {
            article.tags = std::mem::take(&mut article.tags)
                .into_iter()
                .unique()
                .collect();
        }
        self
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn pexels(photo: u32) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg"
    ))
}

fn base(
    id: &str,
    title: &str,
    summary: &str,
    date: NaiveDate,
    source: Option<&str>,
    image_url: Option<String>,
) -> BaseContent {
    BaseContent {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        date,
        source: source.map(str::to_string),
        image_url,
    }
}

fn article(
    base: BaseContent,
    category: ArticleCategory,
    tags: &[&str],
    read_time: u32,
    content: &str,
) -> Article {
    Article {
        base,
        content: content.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        read_time,
    }
}

fn tech_articles() -> Vec<Article> {
    vec![
        article(
            base(
                "t1",
                "The Future of AI in Healthcare",
                "How machine learning models are reshaping diagnosis and patient care.",
                day(2025, 3, 14),
                Some("techcrunch.com"),
                pexels(2977565),
            ),
            ArticleCategory::Tech,
            &["AI", "Machine Learning", "Healthcare"],
            6,
            "Hospitals are moving diagnostic models out of the lab and onto the ward.\n\n\
             Early deployments focus on imaging, where models already match specialists \
             on narrow tasks.\n\nThe harder problems are integration, auditing and trust.",
        ),
        article(
            base(
                "t2",
                "Quantum Computing Trends to Watch",
                "Error correction milestones bring practical quantum machines closer.",
                day(2025, 3, 12),
                Some("wired.com"),
                pexels(3861969),
            ),
            ArticleCategory::Tech,
            &["Quantum Computing", "Research"],
            8,
            "Logical qubits crossed an important threshold this year.\n\n\
             Vendors now publish roadmaps measured in error rates rather than raw qubit counts.",
        ),
        article(
            base(
                "t3",
                "Rust Adoption in Systems Programming",
                "Why more infrastructure teams are choosing memory-safe languages.",
                day(2025, 3, 10),
                Some("dev.to"),
                pexels(4050315),
            ),
            ArticleCategory::Tech,
            &["Programming", "Rust", "Security"],
            5,
            "Memory-safety bugs remain the largest class of security vulnerabilities.\n\n\
             Teams report fewer production incidents after rewriting hot paths.",
        ),
        article(
            base(
                "t4",
                "How 5G is Changing Manufacturing",
                "Private networks are turning factory floors into real-time systems.",
                day(2025, 3, 8),
                Some("theverge.com"),
                pexels(5483077),
            ),
            ArticleCategory::Tech,
            &["5G", "IoT", "Manufacturing"],
            4,
            "Low-latency wireless lets robots and sensors coordinate without cabling.\n\n\
             The payoff is faster retooling between product runs.",
        ),
    ]
}

fn health_articles() -> Vec<Article> {
    vec![
        article(
            base(
                "h1",
                "The Benefits of Meditation for Sleep Quality",
                "Ten minutes a day may be enough to fall asleep faster.",
                day(2025, 3, 13),
                Some("healthline.com"),
                pexels(5483064),
            ),
            ArticleCategory::Health,
            &["Mindfulness", "Sleep", "Mental Health"],
            5,
            "Short guided sessions before bed lower heart rate and quiet racing thoughts.\n\n\
             Consistency matters more than session length.",
        ),
        article(
            base(
                "h2",
                "5 Superfoods That Boost Energy",
                "Simple additions to breakfast that keep you going until lunch.",
                day(2025, 3, 11),
                Some("webmd.com"),
                pexels(5483071),
            ),
            ArticleCategory::Health,
            &["Nutrition", "Diet"],
            4,
            "Oats, eggs, berries, nuts and yogurt release energy slowly.\n\n\
             Pairing fibre with protein avoids the mid-morning crash.",
        ),
        article(
            base(
                "h3",
                "How to Improve Your Focus in 15 Minutes a Day",
                "Attention is a skill, and it can be trained.",
                day(2025, 3, 9),
                Some("health.harvard.edu"),
                pexels(5473950),
            ),
            ArticleCategory::Health,
            &["Focus", "Wellness"],
            6,
            "Single-tasking drills and scheduled breaks rebuild sustained attention.\n\n\
             Start with one distraction-free block each morning.",
        ),
    ]
}

fn stock_articles() -> Vec<Article> {
    vec![
        article(
            base(
                "s1",
                "Global Market: Volatility Ahead?",
                "Rate expectations and earnings season set up a bumpy quarter.",
                day(2025, 3, 14),
                Some("bloomberg.com"),
                pexels(5473947),
            ),
            ArticleCategory::Stocks,
            &["Market Analysis", "Economy"],
            7,
            "Futures markets are pricing fewer rate cuts than a month ago.\n\n\
             Analysts expect guidance, not results, to drive the next moves.",
        ),
        article(
            base(
                "s2",
                "Investing in Energy Stocks: A Long-term Perspective",
                "Transition spending reshapes where returns come from.",
                day(2025, 3, 12),
                Some("marketwatch.com"),
                pexels(5473945),
            ),
            ArticleCategory::Stocks,
            &["Investing", "Dividends", "Energy"],
            9,
            "Utilities and grid suppliers have quietly outperformed.\n\n\
             Dividend investors should weigh capital spending plans carefully.",
        ),
        article(
            base(
                "s3",
                "The Impact of Interest Rate Changes on Tech Markets",
                "Why long-duration growth stocks react first.",
                day(2025, 3, 10),
                Some("cnbc.com"),
                pexels(5473954),
            ),
            ArticleCategory::Stocks,
            &["Growth Stocks", "Trading"],
            5,
            "Higher discount rates shrink the present value of distant earnings.\n\n\
             That arithmetic explains most of the sector's rate sensitivity.",
        ),
    ]
}

fn horoscopes() -> Vec<Horoscope> {
    const SIGNS: [(&str, &str); 4] = [
        (
            "Aries",
            "Today brings a focus on career matters. Take time to trust your intuition.",
        ),
        (
            "Taurus",
            "The alignment of Venus suggests relationships will be significant today.",
        ),
        (
            "Gemini",
            "Creative pursuits take center stage. Remember to focus on priorities.",
        ),
        (
            "Cancer",
            "A favorable aspect brings attention to home and family. Communicate openly.",
        ),
    ];
    SIGNS
        .iter()
        .enumerate()
        .map(|(i, (sign, prediction))| Horoscope {
            base: base(
                &format!("hr{}", i + 1),
                &format!("{sign} Daily Horoscope"),
                &format!("Your daily horoscope for {sign}."),
                day(2025, 3, 14),
                None,
                pexels(3800516 + i as u32),
            ),
            sign: sign.to_string(),
            prediction: prediction.to_string(),
        })
        .collect()
}

fn quotes() -> Vec<Quote> {
    const QUOTES: [(&str, &str, &str); 4] = [
        (
            "Maya Angelou",
            "We may encounter many defeats but we must not be defeated.",
            "Resilience",
        ),
        (
            "Marcus Aurelius",
            "The happiness of your life depends upon the quality of your thoughts.",
            "Happiness",
        ),
        (
            "Marie Curie",
            "Nothing in life is to be feared, it is only to be understood.",
            "Wisdom",
        ),
        (
            "Nelson Mandela",
            "It always seems impossible until it's done.",
            "Motivation",
        ),
    ];
    QUOTES
        .iter()
        .enumerate()
        .map(|(i, (author, text, category))| Quote {
            base: base(
                &format!("q{}", i + 1),
                "Daily Inspiration",
                "A motivational quote to inspire your day.",
                day(2025, 3, 14),
                None,
                pexels(4709285 + i as u32),
            ),
            author: author.to_string(),
            text: text.to_string(),
            category: category.to_string(),
        })
        .collect()
}

fn jokes() -> Vec<Joke> {
    const JOKES: [(&str, &str); 4] = [
        (
            "Why do programmers prefer dark mode? Because light attracts bugs.",
            "Tech Humor",
        ),
        (
            "I'm reading a book about anti-gravity. It's impossible to put down.",
            "Puns",
        ),
        (
            "Why don't skeletons fight each other? They don't have the guts.",
            "Dad Jokes",
        ),
        (
            "I used to be a banker, but I lost interest.",
            "Wordplay",
        ),
    ];
    JOKES
        .iter()
        .enumerate()
        .map(|(i, (text, category))| Joke {
            base: base(
                &format!("j{}", i + 1),
                "Daily Laugh",
                "A joke to brighten your day.",
                day(2025, 3, 14),
                None,
                pexels(7875418 + i as u32),
            ),
            text: text.to_string(),
            category: category.to_string(),
        })
        .collect()
}

fn brain_teasers() -> Vec<BrainTeaser> {
    const TEASERS: [(&str, &str, Difficulty, &str); 3] = [
        (
            "What has keys but can't open locks?",
            "A piano.",
            Difficulty::Easy,
            "Riddle",
        ),
        (
            "A bat and a ball cost $1.10 in total. The bat costs $1.00 more than the ball. \
             How much does the ball cost?",
            "5 cents.",
            Difficulty::Medium,
            "Math Problem",
        ),
        (
            "Three boxes are labelled apples, oranges and mixed, and every label is wrong. \
             How many fruits must you draw to relabel them all?",
            "One, drawn from the box labelled mixed.",
            Difficulty::Hard,
            "Logic Puzzle",
        ),
    ];
    TEASERS
        .iter()
        .enumerate()
        .map(|(i, (question, answer, difficulty, category))| BrainTeaser {
            base: base(
                &format!("bt{}", i + 1),
                &format!("Daily Brain Teaser #{}", i + 1),
                "Challenge your mind with this brain teaser.",
                day(2025, 3, 14),
                None,
                pexels(7567774 + i as u32),
            ),
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty: *difficulty,
            category: category.to_string(),
        })
        .collect()
}

fn videos() -> Vec<Video> {
    const VIDEOS: [(&str, &str, &str, u64); 4] = [
        ("5KWELtJZvRU", "Tech Explained", "Technology", 482_113),
        ("UEEsdXn8oG8", "Daily Wellness", "Health", 91_540),
        ("Xn7KWR9EOGQ", "Market Minute", "Finance", 250_007),
        ("LL8Fa5pQEXY", "Weekend Picks", "Entertainment", 733_908),
    ];
    VIDEOS
        .iter()
        .enumerate()
        .map(|(i, (video_id, channel, category, views))| Video {
            base: base(
                &format!("v{}", i + 1),
                &format!("Trending Video #{}", i + 1),
                &format!("A trending {} video.", category.to_lowercase()),
                day(2025, 3, 14),
                Some("youtube.com"),
                Some(format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")),
            ),
            video_id: video_id.to_string(),
            channel_name: channel.to_string(),
            category: category.to_string(),
            view_count: *views,
        })
        .collect()
}
