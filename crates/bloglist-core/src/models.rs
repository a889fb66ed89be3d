use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BlogError;

/// A single stored blog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Store-assigned UUID v4 identifier.
    pub id: String,
    /// Title of the post.
    pub title: String,
    /// Author name. May be empty; used as the grouping key for statistics.
    #[serde(default)]
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Like count, never negative.
    #[serde(default)]
    pub likes: u64,
    /// UTC timestamp assigned when the document was first stored.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Build a stored document from an incoming payload, assigning a fresh
    /// id and creation timestamp.
    pub fn from_new(new: NewBlog) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            author: new.author,
            url: new.url,
            likes: new.likes.unwrap_or(0),
            created_at: Utc::now(),
        }
    }
}

/// Incoming create/update payload for a blog.
///
/// `likes` is optional and defaults to 0 on creation; `author` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub likes: Option<u64>,
}

impl NewBlog {
    /// Reject payloads without a title or url.
    ///
    /// Matches the original API contract: both fields are required, and the
    /// rejection message does not distinguish which one was missing.
    pub fn validate(&self) -> Result<(), BlogError> {
        if self.title.is_empty() || self.url.is_empty() {
            return Err(BlogError::MissingField("title or url"));
        }
        Ok(())
    }
}

/// The author with the most stored blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogCount {
    pub author: String,
    /// Number of blogs by this author.
    pub blogs: u64,
}

/// The author with the highest summed like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    /// Total likes across all of this author's blogs.
    pub likes: u64,
}

/// Combined summary over a snapshot of blog records.
///
/// The optional fields are `None` (serialized as `null`) when the snapshot
/// was empty; a zero `total_likes` over an empty snapshot is not ambiguous
/// because a sum over zero elements is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    /// Number of records in the snapshot.
    pub blogs: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<Blog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}
