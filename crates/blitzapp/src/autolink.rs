//! # Autolinking
//!
//! Finds URL-shaped text in a document and turns it into hyperlink runs.
//!
//! ## Algorithm
//!
//! ```text
//! loop:
//!   for each paragraph, for each unvisited Text run:
//!     if the URL pattern matches:
//!       Text("a www.x.com b") -> Text("a "), Hyperlink("www.x.com"), Text(" b")
//!       restart from the top
//!   no match anywhere -> done
//! ```
//!
//! Empty left/right remainders are dropped. Remainders keep the style of the run
//! they came from and stay unvisited, so a second URL in the same run is found on
//! the next pass.
//!
//! Every pass either stops or moves a non-empty span of unvisited text into a
//! hyperlink, which is never scanned again. The loop therefore runs at most once
//! per URL in the document, and a second [`apply`] on its own output finds
//! nothing.
//!
//! ## URL Pattern
//!
//! Case-insensitive. A match starts at a word boundary with one of:
//! - a scheme (`https://`, `mailto:x`, `ftp://`),
//! - `www.` (optionally `www2.` etc.),
//! - a bare `domain.tld/`,
//!
//! then extends greedily over non-space characters (allowing balanced
//! parentheses) and drops trailing punctuation such as `.`, `,`, `)` or quotes.

use crate::document::{Block, Document, Inline, TextStyle};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b((?:[a-z][\w-]+:(?:/{1,3}|[a-z0-9%])|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#,
    )
    .expect("valid url regex")
});

/// Byte range of the first URL in `text`.
pub fn find_url(text: &str) -> Option<Range<usize>> {
    URL_PATTERN.find(text).map(|m| m.range())
}

/// Rewrites every URL in unvisited text runs into a hyperlink.
///
/// Returns whether anything changed.
pub fn apply(document: &mut Document) -> bool {
    let mut changed = false;
    while replace_first_url(document) {
        changed = true;
    }
    changed
}

fn replace_first_url(document: &mut Document) -> bool {
    let Some((block_index, inline_index, range)) = locate_first_url(document) else {
        return false;
    };

    let Some(Block::Paragraph { inlines }) = document.block(block_index) else {
        return false;
    };
    let mut inlines = inlines.clone();
    let pieces = match &inlines[inline_index] {
        Inline::Text { content, style, .. } => split_around(content, range, *style),
        Inline::Hyperlink { .. } => return false,
    };
    inlines.splice(inline_index..=inline_index, pieces);

    log::debug!("autolinked a url in block {}", block_index);
    document.replace(block_index, Block::Paragraph { inlines });
    true
}

fn locate_first_url(document: &Document) -> Option<(usize, usize, Range<usize>)> {
    document
        .blocks()
        .iter()
        .enumerate()
        .find_map(|(block_index, block)| {
            let Block::Paragraph { inlines } = block else {
                return None;
            };
            inlines
                .iter()
                .enumerate()
                .find_map(|(inline_index, inline)| match inline {
                    Inline::Text {
                        content,
                        visited: false,
                        ..
                    } => find_url(content).map(|range| (block_index, inline_index, range)),
                    _ => None,
                })
        })
}

fn split_around(content: &str, range: Range<usize>, style: TextStyle) -> Vec<Inline> {
    let left = &content[..range.start];
    let matched = &content[range.clone()];
    let right = &content[range.end..];

    let mut pieces = Vec::with_capacity(3);
    if !left.is_empty() {
        pieces.push(Inline::styled_text(left, style));
    }
    pieces.push(Inline::link(matched));
    if !right.is_empty() {
        pieces.push(Inline::styled_text(right, style));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> Document {
        Document::from_blocks(vec![Block::text(text)])
    }

    fn inlines(doc: &Document, block: usize) -> Vec<Inline> {
        match doc.block(block) {
            Some(Block::Paragraph { inlines }) => inlines.clone(),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_www_url_in_middle_of_sentence() {
        let mut doc = single("check this www.example.com for info");
        assert!(apply(&mut doc));
        assert_eq!(
            inlines(&doc, 0),
            vec![
                Inline::text("check this "),
                Inline::Hyperlink {
                    display_text: "www.example.com".into(),
                    uri: "www.example.com".into(),
                },
                Inline::text(" for info"),
            ]
        );
    }

    #[test]
    fn test_scheme_url_drops_trailing_period() {
        let mut doc = single("Docs at https://example.com/guide?x=1.");
        apply(&mut doc);
        assert_eq!(
            inlines(&doc, 0),
            vec![
                Inline::text("Docs at "),
                Inline::link("https://example.com/guide?x=1"),
                Inline::text("."),
            ]
        );
    }

    #[test]
    fn test_url_inside_parentheses() {
        let mut doc = single("(see http://foo.com/bar)");
        apply(&mut doc);
        assert_eq!(
            inlines(&doc, 0),
            vec![
                Inline::text("(see "),
                Inline::link("http://foo.com/bar"),
                Inline::text(")"),
            ]
        );
    }

    #[test]
    fn test_balanced_parentheses_stay_in_url() {
        let url = "http://en.wikipedia.org/wiki/Rust_(programming_language)";
        assert_eq!(find_url(url), Some(0..url.len()));
    }

    #[test]
    fn test_bare_domain_with_path() {
        assert_eq!(find_url("go to example.org/docs now"), Some(6..22));
    }

    #[test]
    fn test_bare_domain_needs_two_path_characters() {
        assert_eq!(find_url("a.com/x"), None);
        assert_eq!(find_url("a.com/xy"), Some(0..8));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(find_url("WWW.EXAMPLE.COM").is_some());
        assert!(find_url("HTTPS://EXAMPLE.COM").is_some());
    }

    #[test]
    fn test_plain_words_do_not_match() {
        assert_eq!(find_url("nothing to see here. really"), None);
        assert_eq!(find_url("example.com"), None);
    }

    #[test]
    fn test_multiple_urls_in_one_run() {
        let mut doc = single("a.com/xy and www.b.com");
        apply(&mut doc);
        assert_eq!(
            inlines(&doc, 0),
            vec![
                Inline::link("a.com/xy"),
                Inline::text(" and "),
                Inline::link("www.b.com"),
            ]
        );
    }

    #[test]
    fn test_urls_across_paragraphs() {
        let mut doc = Document::from_blocks(vec![
            Block::text("first www.one.com"),
            Block::link("/not/text"),
            Block::text("www.two.com second"),
        ]);
        apply(&mut doc);
        assert_eq!(doc.block(1), Some(&Block::link("/not/text")));
        assert_eq!(inlines(&doc, 0)[1], Inline::link("www.one.com"));
        assert_eq!(inlines(&doc, 2)[0], Inline::link("www.two.com"));
    }

    #[test]
    fn test_visited_text_is_skipped() {
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::visited_text(
            "www.example.com",
        )])]);
        let before = doc.clone();
        assert!(!apply(&mut doc));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_existing_hyperlink_is_not_reprocessed() {
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::Hyperlink {
            display_text: "www.example.com".into(),
            uri: "https://www.example.com".into(),
        }])]);
        assert!(!apply(&mut doc));
    }

    #[test]
    fn test_style_carries_to_remainders() {
        let bold = TextStyle {
            bold: true,
            ..Default::default()
        };
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::styled_text(
            "x www.y.com z",
            bold,
        )])]);
        apply(&mut doc);
        assert_eq!(
            inlines(&doc, 0),
            vec![
                Inline::styled_text("x ", bold),
                Inline::link("www.y.com"),
                Inline::styled_text(" z", bold),
            ]
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut doc = single("mail me: mailto:me@example.com or visit www.example.com/a(b)c!");
        apply(&mut doc);
        let once = doc.clone();
        assert!(!apply(&mut doc));
        assert_eq!(doc, once);
    }
}
