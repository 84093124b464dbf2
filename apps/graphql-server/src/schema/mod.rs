//! GraphQL schema - query and mutation roots over the post store.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use quill_core::ports::PostStore;

/// The full GraphQL schema type.
pub type PostsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the injected store.
pub fn build_schema(store: Arc<dyn PostStore>) -> PostsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_infra::InMemoryPostStore;
    use serde_json::{Value, json};

    fn seeded_schema() -> PostsSchema {
        build_schema(Arc::new(InMemoryPostStore::seeded()))
    }

    async fn execute(schema: &PostsSchema, query: &str) -> Value {
        let response = schema.execute(query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().expect("data should be json")
    }

    #[tokio::test]
    async fn posts_returns_all_seeds_in_order() {
        let schema = seeded_schema();

        let data = execute(&schema, "{ posts { id title author createdAt } }").await;

        let posts = data["posts"].as_array().expect("posts should be a list");
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0]["id"], "1");
        assert_eq!(posts[3]["id"], "4");
        assert_eq!(posts[0]["author"], "Dana Whitfield");
        assert_eq!(posts[0]["createdAt"], "2025-11-20T00:00:00.000Z");
    }

    #[tokio::test]
    async fn post_returns_full_record() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"{ post(id: "1") { id title content author createdAt updatedAt } }"#,
        )
        .await;

        assert_eq!(data["post"]["id"], "1");
        assert_eq!(data["post"]["updatedAt"], "2025-11-21T00:00:00.000Z");

        // Seed "2" has never been updated.
        let data = execute(&schema, r#"{ post(id: "2") { id updatedAt } }"#).await;
        assert_eq!(data["post"]["updatedAt"], Value::Null);
    }

    #[tokio::test]
    async fn post_with_unknown_id_is_null_not_error() {
        let schema = seeded_schema();

        let data = execute(&schema, r#"{ post(id: "99") { id } }"#).await;

        assert_eq!(data["post"], Value::Null);
    }

    #[tokio::test]
    async fn create_post_appends_with_next_id() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"mutation {
                createPost(title: "T", content: "C", author: "A") {
                    id title content author updatedAt
                }
            }"#,
        )
        .await;

        assert_eq!(
            data["createPost"],
            json!({
                "id": "5",
                "title": "T",
                "content": "C",
                "author": "A",
                "updatedAt": null,
            })
        );

        let data = execute(&schema, "{ posts { id } }").await;
        assert_eq!(data["posts"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn create_post_missing_required_arg_is_rejected() {
        let schema = seeded_schema();

        let response = schema
            .execute(r#"mutation { createPost(title: "T", content: "C") { id } }"#)
            .await;

        assert!(!response.errors.is_empty());

        // The store was not touched.
        let data = execute(&schema, "{ posts { id } }").await;
        assert_eq!(data["posts"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_post_changes_title_only() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"mutation { updatePost(id: "2", title: "X") { title content author updatedAt } }"#,
        )
        .await;

        assert_eq!(data["updatePost"]["title"], "X");
        assert_eq!(data["updatePost"]["author"], "Marcus Chen");
        assert!(data["updatePost"]["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn update_post_empty_string_leaves_field_unchanged() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"mutation { updatePost(id: "2", title: "", content: "fresh") { title content } }"#,
        )
        .await;

        assert_eq!(data["updatePost"]["title"], "Working with GraphQL Clients");
        assert_eq!(data["updatePost"]["content"], "fresh");
    }

    #[tokio::test]
    async fn update_post_unknown_id_is_null() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"mutation { updatePost(id: "99", title: "X") { id } }"#,
        )
        .await;

        assert_eq!(data["updatePost"], Value::Null);
    }

    #[tokio::test]
    async fn delete_post_reports_success() {
        let schema = seeded_schema();

        let data = execute(&schema, r#"mutation { deletePost(id: "3") }"#).await;
        assert_eq!(data["deletePost"], true);

        let data = execute(&schema, r#"{ post(id: "3") { id } }"#).await;
        assert_eq!(data["post"], Value::Null);

        let data = execute(&schema, r#"mutation { deletePost(id: "99") }"#).await;
        assert_eq!(data["deletePost"], false);
    }

    // End-to-end flow over the seeded store: create, observe, delete.
    #[tokio::test]
    async fn create_then_delete_round_trip() {
        let schema = seeded_schema();

        let data = execute(
            &schema,
            r#"mutation { createPost(title: "A", content: "B", author: "C") { id } }"#,
        )
        .await;
        assert_eq!(data["createPost"]["id"], "5");

        let data = execute(&schema, "{ posts { id } }").await;
        assert_eq!(data["posts"].as_array().unwrap().len(), 5);

        let data = execute(&schema, r#"mutation { deletePost(id: "5") }"#).await;
        assert_eq!(data["deletePost"], true);

        let data = execute(&schema, "{ posts { id } }").await;
        assert_eq!(data["posts"].as_array().unwrap().len(), 4);

        let data = execute(&schema, r#"{ post(id: "5") { id } }"#).await;
        assert_eq!(data["post"], Value::Null);
    }

    #[tokio::test]
    async fn sdl_matches_the_published_contract() {
        let schema = seeded_schema();
        let sdl = schema.sdl();

        assert!(sdl.contains("createPost(title: String!, content: String!, author: String!): Post!"));
        assert!(sdl.contains("updatePost(id: ID!, title: String, content: String): Post"));
        assert!(sdl.contains("deletePost(id: ID!): Boolean!"));
        assert!(sdl.contains("posts: [Post!]!"));
        assert!(sdl.contains("post(id: ID!): Post"));
        assert!(sdl.contains("createdAt: String!"));
        assert!(sdl.contains("updatedAt: String"));
    }
}
