//! Mutation resolvers.
//!
//! Not-found is a value, never an error: `updatePost` returns null and
//! `deletePost` returns false for unknown ids. Required-argument
//! validation happens at the schema level before these resolvers run.

use std::sync::Arc;

use async_graphql::{Context, Error, ID, Object, Result};
use quill_core::domain::{NewPost, PostPatch};
use quill_core::ports::PostStore;

use super::types::Post;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a post and append it to the store. Always appends; calling
    /// this twice with the same arguments creates two posts.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post> {
        let store = ctx.data_unchecked::<Arc<dyn PostStore>>();
        let post = store
            .append(NewPost {
                title,
                content,
                author,
            })
            .await
            .map_err(Error::new_with_source)?;
        Ok(Post::from(post))
    }

    /// Update a post's title and/or content. Empty strings count as
    /// "not provided" and leave the field unchanged.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Post>> {
        let store = ctx.data_unchecked::<Arc<dyn PostStore>>();
        let post = store
            .update_by_id(&id.0, PostPatch { title, content })
            .await
            .map_err(Error::new_with_source)?;
        Ok(post.map(Post::from))
    }

    /// Delete a post. True when a post was removed, false otherwise.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let store = ctx.data_unchecked::<Arc<dyn PostStore>>();
        store
            .remove_by_id(&id.0)
            .await
            .map_err(Error::new_with_source)
    }
}
