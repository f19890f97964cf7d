//! Markdown rendering of bundles, pages and article detail views.
//!
//! Each item renders the way its card would on the site: quotes show their
//! attribution, brain teasers their question and a hidden answer, videos
//! their channel and view count.

use crate::models::{Article, CategoryInfo, ContentItem, FeaturedBundle};
use crate::utils::format_view_count;
use std::fmt::{self, Write};

fn write_item(md: &mut String, item: &ContentItem) -> fmt::Result {
    let base = item.base();
    writeln!(md, "### {}\n", base.title)?;
    match item {
        ContentItem::Article(a) => {
            writeln!(
                md,
                "*{} · {} · {} min read*\n",
                a.category, base.date, a.read_time
            )?;
            writeln!(md, "{}\n", base.summary)?;
            if !a.tags.is_empty() {
                writeln!(md, "Tags: {}\n", a.tags.join(", "))?;
            }
        }
        ContentItem::Horoscope(h) => {
            writeln!(md, "*{} · {}*\n", h.sign, base.date)?;
            writeln!(md, "{}\n", h.prediction)?;
        }
        ContentItem::Quote(q) => {
            writeln!(md, "> {}\n>\n> {}\n", q.text, item.card_blurb())?;
        }
        ContentItem::Joke(j) => {
            writeln!(md, "{}\n", j.text)?;
        }
        ContentItem::BrainTeaser(b) => {
            writeln!(md, "*{} · {}*\n", b.category, b.difficulty.label())?;
            writeln!(md, "{}\n", b.question)?;
            writeln!(
                md,
                "<details><summary>Answer</summary>{}</details>\n",
                b.answer
            )?;
        }
        ContentItem::Video(v) => {
            writeln!(
                md,
                "*{} · {} views*\n",
                v.channel_name,
                format_view_count(v.view_count)
            )?;
            writeln!(md, "[Watch]({})\n", v.embed_url())?;
        }
    }
    writeln!(md, "`{}`\n", base.id)?;
    Ok(())
}

fn write_section<T>(md: &mut String, title: &str, items: &[T]) -> fmt::Result
where
    T: Clone + Into<ContentItem>,
{
    if items.is_empty() {
        return Ok(());
    }
    writeln!(md, "## {title}\n")?;
    for item in items {
        write_item(md, &item.clone().into())?;
    }
    Ok(())
}

/// Render a single item.
pub fn item_to_markdown(item: &ContentItem) -> Result<String, fmt::Error> {
    let mut md = String::new();
    write_item(&mut md, item)?;
    Ok(md)
}

/// Render one page of a category.
pub fn page_to_markdown(
    info: Option<&CategoryInfo>,
    page: usize,
    items: &[ContentItem],
) -> Result<String, fmt::Error> {
    let mut md = String::new();
    match info {
        Some(info) => {
            writeln!(md, "# {}\n", info.name)?;
            writeln!(md, "{}\n", info.description)?;
        }
        None => writeln!(md, "# Category\n")?,
    }
    writeln!(md, "Page {page} · {} items\n", items.len())?;
    for item in items {
        write_item(&mut md, item)?;
    }
    Ok(md)
}

/// Render the landing view.
pub fn featured_to_markdown(bundle: &FeaturedBundle) -> Result<String, fmt::Error> {
    let mut md = String::new();
    writeln!(md, "# DailyBytes\n")?;
    if let Some(featured) = &bundle.featured_article {
        writeln!(md, "## Featured: {}\n", featured.base.title)?;
        writeln!(md, "{}\n", featured.base.summary)?;
    }
    write_section(&mut md, "Tech & AI News", &bundle.tech_articles)?;
    write_section(&mut md, "Health Tips", &bundle.health_articles)?;
    write_section(&mut md, "Stock Market News", &bundle.stock_articles)?;
    write_section(&mut md, "Trending Videos", &bundle.youtube_videos)?;
    write_section(&mut md, "Daily Horoscope", &bundle.horoscopes)?;
    write_section(&mut md, "Quotes", &bundle.quotes)?;
    write_section(&mut md, "Jokes", &bundle.jokes)?;
    write_section(&mut md, "Brain Teasers", &bundle.brain_teasers)?;
    Ok(md)
}

/// Render an article detail page with its related articles.
pub fn article_to_markdown(article: &Article, related: &[Article]) -> Result<String, fmt::Error> {
    let base = &article.base;
    let mut md = String::new();
    writeln!(md, "# {}\n", base.title)?;
    write!(md, "*{} · {} min read", base.date, article.read_time)?;
    if let Some(host) = base.source_host() {
        write!(md, " · Source: {host}")?;
    }
    writeln!(md, "*\n")?;
    if let Some(image) = &base.image_url {
        writeln!(md, "![{}]({})\n", base.title, image)?;
    }
    writeln!(md, "{}\n", article.content)?;
    if !article.tags.is_empty() {
        writeln!(md, "Tags: {}\n", article.tags.join(", "))?;
    }
    write_section(&mut md, "Related Articles", related)?;
    Ok(md)
}

/// Render the category navigation list.
pub fn categories_to_markdown(categories: &[CategoryInfo]) -> Result<String, fmt::Error> {
    let mut md = String::new();
    writeln!(md, "# Categories\n")?;
    for info in categories {
        writeln!(md, "- **{}** (`{}`): {}", info.name, info.id, info.description)?;
    }
    Ok(md)
}
