//! Listing helpers for the publishing layer

use crate::document::Document;

/// Documents eligible for a published listing
///
/// Drafts are excluded unconditionally; a document with `draft = true`
/// never appears in the returned listing.
pub fn published(docs: &[Document]) -> Vec<&Document> {
    let listed: Vec<&Document> = docs.iter().filter(|d| !d.metadata.draft).collect();

    let excluded = docs.len() - listed.len();
    if excluded > 0 {
        tracing::debug!("Excluded {} draft document(s) from listing", excluded);
    }

    listed
}

/// Sort documents by date descending (newest first); ties within a day
/// fall back to title order
pub fn sort_by_date(docs: &mut [Document]) {
    docs.sort_by(|a, b| {
        b.metadata
            .date
            .cmp(&a.metadata.date)
            .then_with(|| a.metadata.title.cmp(&b.metadata.title))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DocumentLoader;

    fn make_doc(title: &str, date: &str, draft: bool) -> Document {
        let text = format!(
            "---\ntitle: {}\ndate: {}\ndraft: {}\n---\nBody of {}.\n",
            title, date, draft, title
        );
        DocumentLoader::new().load(&text).unwrap()
    }

    #[test]
    fn test_published_excludes_drafts() {
        let docs = vec![
            make_doc("Shipped", "2024-01-15", false),
            make_doc("Half Done", "2024-01-16", true),
            make_doc("Also Shipped", "2024-01-17", false),
        ];

        let listed = published(&docs);
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|d| !d.metadata.draft));
        assert!(listed.iter().all(|d| d.metadata.title != "Half Done"));
    }

    #[test]
    fn test_published_keeps_everything_without_drafts() {
        let docs = vec![
            make_doc("One", "2024-01-15", false),
            make_doc("Two", "2024-01-16", false),
        ];
        assert_eq!(published(&docs).len(), 2);
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let mut docs = vec![
            make_doc("Oldest", "2023-06-01", false),
            make_doc("Newest", "2024-03-01", false),
            make_doc("Middle", "2023-12-24", false),
        ];

        sort_by_date(&mut docs);
        let titles: Vec<&str> = docs.iter().map(|d| d.metadata.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_sort_ties_break_on_title() {
        let mut docs = vec![
            make_doc("Beta", "2024-01-15", false),
            make_doc("Alpha", "2024-01-15", false),
        ];

        sort_by_date(&mut docs);
        assert_eq!(docs[0].metadata.title, "Alpha");
        assert_eq!(docs[1].metadata.title, "Beta");
    }
}
