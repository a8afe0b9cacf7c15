//! Domain entities - the rich-text document and the posts that carry it.

mod document;
mod post;

pub use document::{
    Block, BlockType, Document, Entity, EntityKey, EntityRange, InlineStyle, Mutability,
    PLACEHOLDER_TEXT, StyleRange,
};
pub use post::{NewPost, Post, PostContent, PostId};
