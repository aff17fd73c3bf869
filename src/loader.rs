//! Document loader - turns raw content text into render-ready documents

use crate::config::LoadConfig;
use crate::document::{Document, Metadata};
use crate::error::LoadError;
use crate::frontmatter::FrontMatter;
use crate::markdown::MarkdownRenderer;

/// Loads documents from raw content text
///
/// The loader consumes bytes already read by the caller; it never opens
/// files itself. One loader can serve any number of independent inputs.
pub struct DocumentLoader {
    config: LoadConfig,
    renderer: MarkdownRenderer,
}

impl DocumentLoader {
    /// Create a loader with default options
    pub fn new() -> Self {
        Self::with_config(LoadConfig::default())
    }

    /// Create a loader with explicit options
    pub fn with_config(config: LoadConfig) -> Self {
        Self {
            config,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load a single document from content text
    pub fn load(&self, text: &str) -> Result<Document, LoadError> {
        let (fm, body) = FrontMatter::parse(text)?;

        let title = match fm.title {
            Some(ref title) => title.clone(),
            None => return Err(LoadError::MissingRequiredField("title")),
        };

        let date = match fm.date {
            Some(ref raw) => fm.parse_date().ok_or_else(|| LoadError::MalformedMetadata {
                reason: format!("invalid date value: {}", raw),
            })?,
            None => return Err(LoadError::MissingRequiredField("date")),
        };

        // Split excerpt and render markdown; an explicit front-matter
        // excerpt takes precedence over the separator split
        let (split_md, full_md) =
            MarkdownRenderer::split_excerpt(body, &self.config.excerpt_separator);
        let excerpt_md = fm.excerpt.clone().or(split_md);

        let content = self.renderer.render(&full_md)?;
        let excerpt = match excerpt_md {
            Some(ref e) => Some(self.renderer.render(e)?),
            None => None,
        };

        let time_to_read = fm
            .time_to_read
            .unwrap_or_else(|| estimate_time_to_read(&content, self.config.words_per_minute));

        tracing::debug!("Loaded document: {}", title);

        let metadata = Metadata {
            title,
            date,
            authors: fm.authors,
            excerpt: fm.excerpt,
            hero: fm.hero,
            draft: fm.draft,
            time_to_read: fm.time_to_read,
            extra: fm.extra,
        };

        Ok(Document {
            metadata,
            raw: body.to_string(),
            content,
            excerpt,
            time_to_read,
        })
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate reading time in minutes from rendered content
fn estimate_time_to_read(html: &str, words_per_minute: usize) -> u32 {
    let words = count_words(html);
    let minutes = words.div_ceil(words_per_minute.max(1));
    minutes.max(1) as u32
}

/// Count words in rendered HTML
fn count_words(html: &str) -> usize {
    let text = strip_html(html);
    // Count Chinese characters and English words
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if c > '\u{4E00}' && c < '\u{9FFF}' {
            count += 1;
            in_word = false;
        } else {
            in_word = false;
        }
    }

    count
}

/// Strip HTML tags from a string
fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}
