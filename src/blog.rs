use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", test))]
use dashmap::DashMap;
#[cfg(any(feature = "ssr", test))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", test))]
use pulldown_cmark::{Event, Parser};
#[cfg(any(feature = "ssr", test))]
use rust_embed::Embed;
#[cfg(any(feature = "ssr", test))]
use std::sync::LazyLock;

pub const WORDS_PER_MINUTE: usize = 200;

#[cfg(any(feature = "ssr", test))]
pub static GLOBAL_TEASER_CACHE: LazyLock<DashMap<String, PostTeaser>> =
    LazyLock::new(DashMap::new);

#[cfg(any(feature = "ssr", test))]
#[derive(Embed)]
#[folder = "posts"]
pub struct Posts;

#[cfg(any(feature = "ssr", test))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    snippet: String,
    image: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostTeaser {
    pub slug: String,
    pub title: String,
    pub snippet: String,
    pub image: String,
    pub date: DateTime<Utc>,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub tags: Vec<String>,
}

impl PostTeaser {
    pub fn display_date(&self) -> String {
        self.date.format("%b %e, %Y").to_string()
    }

    pub fn display_read_time(&self) -> String {
        format!("{} min read", self.read_time)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse blog post: {0}")]
    Parse(String),
}

/// Reading time of a markdown body in whole minutes, at least one.
#[cfg(any(feature = "ssr", test))]
pub fn reading_time(markdown: &str) -> u32 {
    let words = Parser::new(markdown)
        .map(|event| match event {
            Event::Text(text) | Event::Code(text) => text.split_whitespace().count(),
            _ => 0,
        })
        .sum::<usize>();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(any(feature = "ssr", test))]
pub fn parse_teaser(slug: &str, source: &str) -> Result<PostTeaser, BlogError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| BlogError::Parse(slug.to_string()))?;
    Ok(PostTeaser {
        slug: slug.to_string(),
        title: fm.data.title,
        snippet: fm.data.snippet,
        image: fm.data.image,
        date: fm.data.date,
        read_time: reading_time(&fm.content),
        tags: fm.data.tags,
    })
}

/// All embedded posts, newest first.
#[cfg(any(feature = "ssr", test))]
pub fn get_teasers() -> Result<Vec<PostTeaser>, BlogError> {
    let cache = &*GLOBAL_TEASER_CACHE;
    let mut teasers = Posts::iter()
        .map(|file| {
            let slug = file.strip_suffix(".md").unwrap_or(file.as_ref());
            if let Some(teaser) = cache.get(slug) {
                return Ok(teaser.clone());
            }
            let asset = Posts::get(&file).ok_or_else(|| BlogError::NotFound(file.to_string()))?;
            let source = std::str::from_utf8(&asset.data)
                .map_err(|_| BlogError::Parse(file.to_string()))?;
            let teaser = parse_teaser(slug, source)?;
            cache.insert(slug.to_string(), teaser.clone());
            Ok(teaser)
        })
        .collect::<Result<Vec<_>, BlogError>>()?;
    teasers.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(teasers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"---
title: Test Post
snippet: A short snippet
image: https://example.com/a.png
date: 2024-02-01T00:00:00Z
tags:
  - SQL
  - Python
---

Some words in a `code span` and a paragraph.
"#;

    #[test]
    fn test_parse_teaser() {
        let teaser = parse_teaser("test-post", POST).expect("front matter should parse");
        assert_eq!(teaser.slug, "test-post");
        assert_eq!(teaser.title, "Test Post");
        assert_eq!(teaser.tags, vec!["SQL".to_string(), "Python".to_string()]);
        assert_eq!(teaser.read_time, 1);
        assert_eq!(teaser.display_date(), "Feb  1, 2024");
        assert_eq!(teaser.display_read_time(), "1 min read");
    }

    #[test]
    fn test_parse_teaser_missing_fields() {
        let bad = "---\ntitle: Only a title\n---\nbody";
        assert_eq!(
            parse_teaser("bad", bad),
            Err(BlogError::Parse("bad".to_string()))
        );
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        // markup is not counted
        assert_eq!(reading_time(&"**word** ".repeat(400)), 2);
    }

    #[test]
    fn test_embedded_posts_newest_first() {
        let teasers = get_teasers().expect("embedded posts should parse");
        assert_eq!(teasers.len(), 4);
        assert!(teasers.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(teasers[0].slug, "ab-testing");
        // second call is served from the cache
        assert_eq!(get_teasers().unwrap(), teasers);
        assert!(GLOBAL_TEASER_CACHE.contains_key("cohort-analysis"));
    }
}
