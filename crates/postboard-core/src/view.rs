//! Read-only render model for a post card.

use std::collections::HashMap;

use crate::codec;
use crate::domain::{Document, Post, PostContent, PostId};
use crate::render;

/// Subheader shown when a post carries no timestamp.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Everything a card needs to display one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub subheader: String,
    /// Upper-cased first letter of the title's first word, or `?`.
    pub avatar: String,
    pub plain_text: String,
    pub preview: String,
    /// False when the stored content could not be decoded.
    pub content_available: bool,
}

impl PostView {
    /// Build a view from a post and its already decoded document.
    pub fn from_post(post: &Post, document: &Document, preview_limit: usize) -> Self {
        let plain_text = render::to_plain_text(document);
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            subheader: post
                .created_at
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            avatar: avatar_initial(&post.title),
            preview: render::truncate(&plain_text, preview_limit),
            plain_text,
            content_available: true,
        }
    }

    /// Decode the post's content (placeholder on failure) and build its view.
    pub fn render(post: &Post, preview_limit: usize) -> Self {
        let outcome = codec::decode_or_placeholder(&post.content);
        let mut view = Self::from_post(post, &outcome.document, preview_limit);
        view.content_available = !outcome.is_placeholder();
        view
    }
}

fn avatar_initial(title: &str) -> String {
    title
        .split(' ')
        .next()
        .and_then(|word| word.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

struct CachedDocument {
    content: PostContent,
    document: Document,
    available: bool,
}

/// Decoded documents keyed by post id.
///
/// An entry is reused only while the post's content is unchanged, so a
/// cache hit always equals a fresh decode.
#[derive(Default)]
pub struct ViewCache {
    entries: HashMap<PostId, CachedDocument>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The decoded document for `post`, decoding only on a miss.
    pub fn document(&mut self, post: &Post) -> &Document {
        &self.entry(post).document
    }

    pub fn view(&mut self, post: &Post, preview_limit: usize) -> PostView {
        let entry = self.entry(post);
        let mut view = PostView::from_post(post, &entry.document, preview_limit);
        view.content_available = entry.available;
        view
    }

    /// Drop entries for posts no longer in `posts`.
    pub fn retain(&mut self, posts: &[Post]) {
        self.entries
            .retain(|id, _| posts.iter().any(|post| &post.id == id));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, post: &Post) -> &CachedDocument {
        let stale = self
            .entries
            .get(&post.id)
            .is_none_or(|cached| cached.content != post.content);

        if stale {
            let outcome = codec::decode_or_placeholder(&post.content);
            self.entries.insert(
                post.id.clone(),
                CachedDocument {
                    content: post.content.clone(),
                    available: !outcome.is_placeholder(),
                    document: outcome.document,
                },
            );
        }

        &self.entries[&post.id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PLACEHOLDER_TEXT;

    fn post(title: &str, body: &str) -> Post {
        Post {
            id: PostId::new("7"),
            title: title.to_string(),
            content: PostContent::Raw(codec::encode(&Document::from_text(body))),
            created_at: Some("14:05".to_string()),
        }
    }

    #[test]
    fn test_view_fields() {
        let view = PostView::render(&post("hello world", &"b".repeat(150)), 100);
        assert_eq!(view.avatar, "H");
        assert_eq!(view.subheader, "14:05");
        assert_eq!(view.preview.chars().count(), 103);
        assert!(view.preview.ends_with("..."));
        assert!(view.content_available);
    }

    #[test]
    fn test_view_fallbacks() {
        let mut p = post(" leading space", "body");
        p.created_at = None;
        p.content = PostContent::Raw("garbage".to_string());
        let view = PostView::render(&p, 100);
        assert_eq!(view.avatar, "?");
        assert_eq!(view.subheader, UNKNOWN_DATE);
        assert_eq!(view.plain_text, PLACEHOLDER_TEXT);
        assert!(!view.content_available);
    }

    #[test]
    fn test_cache_matches_fresh_decode() {
        let mut cache = ViewCache::new();
        let p = post("T", "first");
        assert_eq!(cache.view(&p, 100), PostView::render(&p, 100));
        assert_eq!(cache.view(&p, 100), PostView::render(&p, 100));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_redecodes_changed_content() {
        let mut cache = ViewCache::new();
        let mut p = post("T", "first");
        assert_eq!(render::to_plain_text(cache.document(&p)), "first");

        p.content = PostContent::Raw(codec::encode(&Document::from_text("second")));
        assert_eq!(render::to_plain_text(cache.document(&p)), "second");
    }

    #[test]
    fn test_cache_retain_drops_deleted_posts() {
        let mut cache = ViewCache::new();
        let p = post("T", "x");
        cache.document(&p);
        cache.retain(&[]);
        assert!(cache.is_empty());
    }
}
