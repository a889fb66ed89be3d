//! Core domain layer for the blog list service.
//!
//! Holds the blog document model, the list-helper aggregation functions,
//! the shared error type and the CLI settings.

pub mod error;
pub mod list_helper;
pub mod models;
pub mod settings;
