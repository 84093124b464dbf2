use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog post.
///
/// Ids are store-assigned strings, not generated here; the store owns the
/// numbering scheme. `updated_at` stays `None` until the first update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with the given store-assigned id.
    pub fn new(id: String, title: String, content: String, author: String) -> Self {
        Self {
            id,
            title,
            content,
            author,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Payload for creating a post. The store assigns the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update for a post. Only `title` and `content` can change;
/// `author` and `created_at` are immutable after creation.
///
/// An empty string counts as "not provided" - the field is left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Apply the patch to a post, skipping absent and empty fields.
    /// `updated_at` is touched whenever the patch is applied, even if
    /// neither field carried a value.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            post.title = title;
        }
        if let Some(content) = self.content.filter(|c| !c.is_empty()) {
            post.content = content;
        }
        post.updated_at = Some(Utc::now());
    }
}
