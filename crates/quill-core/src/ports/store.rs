use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// The authoritative, ordered collection of posts.
///
/// Resolvers are the sole callers; nothing else touches the collection.
/// Id assignment belongs to the implementation: the reference in-memory
/// store numbers posts as `(len + 1).to_string()`, so ids are predictable
/// and sequential, and an id freed by a deletion can be handed out again.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Full ordered snapshot, insertion order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// The matching post, or `None` if the id is unknown.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Append a new post at the end. The store assigns the id and
    /// `created_at`; `updated_at` starts absent.
    async fn append(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Patch a post in place. Returns `None` (not an error) if the id is
    /// unknown. Empty patch fields are left unchanged; `updated_at` is
    /// set whenever the post was found.
    async fn update_by_id(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, StoreError>;

    /// Remove a post permanently. Returns `false` (not an error) if the
    /// id is unknown.
    async fn remove_by_id(&self, id: &str) -> Result<bool, StoreError>;
}
