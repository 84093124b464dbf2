//! In-memory post store - the authoritative collection for the process
//! lifetime. Data is lost on process exit.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::StoreError;
use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::ports::PostStore;

use super::seed::seed_posts;

/// Ordered post collection behind an async RwLock.
///
/// Mutations serialize on the write lock, which keeps the count-based id
/// assignment free of read-modify-write races. Reads share the read lock
/// and hand out cloned snapshots, never references into the collection.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// A store preloaded with the four fixed startup posts.
    pub fn seeded() -> Self {
        Self {
            posts: RwLock::new(seed_posts()),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn append(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;

        // Count-based numbering: the next id is the current length plus
        // one, so an id freed by a deletion can be handed out again.
        let id = (posts.len() + 1).to_string();
        let post = Post::new(id, new_post.title, new_post.content, new_post.author);

        posts.push(post.clone());
        Ok(post)
    }

    async fn update_by_id(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(post);
        Ok(Some(post.clone()))
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;

        match posts.iter().position(|p| p.id == id) {
            Some(index) => {
                posts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
