//! Persistence layer for the blog list service.
//!
//! Responsible for loading, validating and atomically persisting blog
//! documents stored as one JSON object per line in a single JSONL file.

pub mod store;

pub use bloglist_core as core;
