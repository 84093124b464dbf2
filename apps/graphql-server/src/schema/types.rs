//! Wire types exposed by the GraphQL schema.

use async_graphql::{ID, SimpleObject};
use chrono::{DateTime, SecondsFormat, Utc};
use quill_core::domain;

/// Wire form of a post.
///
/// Timestamps are ISO-8601 strings with millisecond precision and a `Z`
/// suffix (what JavaScript's `toISOString` produces), not a DateTime
/// scalar; the schema contract declares them as `String`.
#[derive(Debug, Clone, SimpleObject)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

fn iso8601(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<domain::Post> for Post {
    fn from(post: domain::Post) -> Self {
        Self {
            id: ID(post.id),
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: iso8601(post.created_at),
            updated_at: post.updated_at.map(iso8601),
        }
    }
}
