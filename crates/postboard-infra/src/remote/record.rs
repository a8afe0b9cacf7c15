//! Conversions between wire records and domain posts.

use serde_json::Value;

use postboard_core::domain::{NewPost, Post, PostContent, PostId};
use postboard_shared::{CreatePostRequest, PostRecord};

/// Conversion from a wire record to a domain post.
pub fn post_from_record(record: PostRecord) -> Post {
    let content = match record.content {
        Value::String(raw) => PostContent::Raw(raw),
        Value::Null => PostContent::default(),
        structured => PostContent::Structured(structured),
    };

    Post {
        id: PostId::new(record.id.to_string()),
        title: record.title,
        content,
        created_at: record.created_at,
    }
}

/// Conversion from a candidate post to the create request body.
pub fn create_request(post: &NewPost) -> CreatePostRequest {
    CreatePostRequest {
        title: post.title.clone(),
        content: post.content.clone(),
        created_at: post.created_at.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_shared::WireId;

    #[test]
    fn test_record_content_shapes() {
        let raw = post_from_record(PostRecord {
            id: WireId::Number(3),
            title: "A".to_string(),
            content: Value::String("{}".to_string()),
            created_at: None,
        });
        assert_eq!(raw.id, PostId::new("3"));
        assert_eq!(raw.content, PostContent::Raw("{}".to_string()));

        let structured = post_from_record(PostRecord {
            id: WireId::Text("x".to_string()),
            title: "B".to_string(),
            content: serde_json::json!({"blocks": []}),
            created_at: Some("08:00".to_string()),
        });
        assert!(matches!(structured.content, PostContent::Structured(_)));

        let missing = post_from_record(PostRecord {
            id: WireId::Number(4),
            title: String::new(),
            content: Value::Null,
            created_at: None,
        });
        assert!(missing.content.is_blank());
    }
}
