//! Fixed startup data for the in-memory store.

use chrono::{DateTime, TimeZone, Utc};
use quill_core::domain::Post;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Literal dates, always valid.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The four posts the store starts with. Ids "1" through "4" in
/// insertion order; only the first has ever been updated.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: "Getting Started with GraphQL".to_string(),
            content: "GraphQL is a query language that lets clients ask for exactly \
                      the fields they need, addressing the over-fetching common with \
                      REST endpoints."
                .to_string(),
            author: "Dana Whitfield".to_string(),
            created_at: date(2025, 11, 20),
            updated_at: Some(date(2025, 11, 21)),
        },
        Post {
            id: "2".to_string(),
            title: "Working with GraphQL Clients".to_string(),
            content: "A good GraphQL client handles caching, request state, and error \
                      handling for you, so view code can stay focused on rendering."
                .to_string(),
            author: "Marcus Chen".to_string(),
            created_at: date(2025, 11, 22),
            updated_at: None,
        },
        Post {
            id: "3".to_string(),
            title: "Server Components and Data Fetching".to_string(),
            content: "Modern frameworks split rendering between server and client \
                      components; deciding where each query runs is the key design \
                      choice."
                .to_string(),
            author: "Yuna Park".to_string(),
            created_at: date(2025, 11, 23),
            updated_at: None,
        },
        Post {
            id: "4".to_string(),
            title: "Type Safety Across the Wire".to_string(),
            content: "Generating types from a GraphQL schema keeps the client and \
                      server honest about the shape of the data they exchange."
                .to_string(),
            author: "Tomas Alvarez".to_string(),
            created_at: date(2025, 11, 24),
            updated_at: None,
        },
    ]
}
