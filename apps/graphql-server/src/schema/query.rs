//! Query resolvers.

use std::sync::Arc;

use async_graphql::{Context, Error, ID, Object, Result};
use quill_core::ports::PostStore;

use super::types::Post;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts in insertion order. Never fails; empty list when the
    /// store is empty.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let store = ctx.data_unchecked::<Arc<dyn PostStore>>();
        let posts = store.list().await.map_err(Error::new_with_source)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// A single post, or null when the id is unknown.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        let store = ctx.data_unchecked::<Arc<dyn PostStore>>();
        let post = store
            .find_by_id(&id.0)
            .await
            .map_err(Error::new_with_source)?;
        Ok(post.map(Post::from))
    }
}
