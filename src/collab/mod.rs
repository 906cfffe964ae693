//! Collaborator capability traits and the payloads that cross them.
//!
//! Components receive these by injection. Tests supply the recording
//! stand-ins from [`mocks`]; nothing in this crate intercepts modules or
//! globals.

pub mod mocks;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

/// Author identity supplied to the post editor from outside the component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Opaque author identifier; becomes `authorId` on the created post.
    pub id: String,
}

impl Author {
    /// Author with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Post payload handed to [`PostApi::create`].
///
/// `date` is stamped at submission time; its exact value is unconstrained but
/// it is always an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Identifier of the externally supplied author.
    pub author_id: String,
    /// Raw title field value.
    pub title: String,
    /// Raw content field value.
    pub content: String,
    /// Tags after delimiter parsing: split on comma, trimmed, empties
    /// discarded, input order preserved.
    pub tags: Vec<String>,
    /// RFC 3339 submission timestamp.
    pub date: String,
}

/// Asynchronous post-creation capability.
///
/// The resolved value carries no information; callers only care whether the
/// outcome settled successfully.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Create a post. A rejection propagates to the submitting component.
    async fn create(&self, post: NewPost) -> Result<()>;
}

/// Navigation capability: records where the application was sent after a
/// successful submission.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}
