//! Post store implementations - in-memory only for now.

mod memory;
mod seed;

pub use memory::InMemoryPostStore;
pub use seed::seed_posts;
