//! prepress: front-matter-driven content loading for blog publishing
//!
//! This crate turns raw article text - a front-matter block followed by a
//! Markdown body - into a render-ready [`Document`]: validated metadata
//! plus an HTML body fragment. Templating, routing, and file handling
//! belong to the publishing layer that consumes the documents.

pub mod config;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod listing;
pub mod loader;
pub mod markdown;

pub use config::LoadConfig;
pub use document::{Document, Metadata};
pub use error::LoadError;
pub use frontmatter::FrontMatter;
pub use loader::DocumentLoader;
pub use markdown::MarkdownRenderer;

/// Load a document with default options
pub fn load(text: &str) -> Result<Document, LoadError> {
    DocumentLoader::new().load(text)
}

/// Load a document with explicit options
pub fn load_with(config: LoadConfig, text: &str) -> Result<Document, LoadError> {
    DocumentLoader::with_config(config).load(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_list() {
        let published_text = "---\ntitle: Live Post\ndate: 2024-01-15\n---\nHello readers.\n";
        let draft_text = "---\ntitle: Draft Post\ndate: 2024-01-16\ndraft: true\n---\nNot ready.\n";

        let docs = vec![load(published_text).unwrap(), load(draft_text).unwrap()];
        let listed = listing::published(&docs);

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].metadata.title, "Live Post");
    }

    #[test]
    fn test_load_with_config() {
        let config = LoadConfig {
            words_per_minute: 1,
            ..Default::default()
        };
        let doc = load_with(config, "---\ntitle: Slow\ndate: 2024-01-15\n---\nThree short words.\n")
            .unwrap();
        assert_eq!(doc.time_to_read, 3);
    }
}
