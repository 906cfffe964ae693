//! Recording stand-ins for the collaborator traits.
//!
//! Each mock wraps an invocation [`Spy`] so tests can assert call counts and
//! captured arguments. `RecordingPostApi` yields once before settling, which
//! models a deferred promise resolution: the submitting component genuinely
//! suspends, and assertions only become valid after a microtask flush.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::task::yield_now;

use crate::collab::{Navigator, NewPost, PostApi};
use crate::core::errors::{FbError, Result};
use crate::verify::spy::Spy;

/// In-memory [`PostApi`] that records every `create` call.
#[derive(Debug, Default)]
pub struct RecordingPostApi {
    spy: Spy<NewPost>,
    reject_with: Mutex<Option<String>>,
}

impl RecordingPostApi {
    /// Mock that settles every create successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose `create` rejects with the given message.
    #[must_use]
    pub fn rejecting(details: impl Into<String>) -> Self {
        let api = Self::default();
        api.reject_with(details);
        api
    }

    /// Make subsequent `create` calls reject with the given message.
    pub fn reject_with(&self, details: impl Into<String>) {
        *self.reject_with.lock() = Some(details.into());
    }

    /// Make subsequent `create` calls settle successfully again.
    pub fn accept(&self) {
        *self.reject_with.lock() = None;
    }

    /// Spy over captured `create` arguments.
    #[must_use]
    pub fn spy(&self) -> &Spy<NewPost> {
        &self.spy
    }
}

#[async_trait]
impl PostApi for RecordingPostApi {
    async fn create(&self, post: NewPost) -> Result<()> {
        self.spy.record(post);
        // Settle on a later scheduler turn, like a real asynchronous call.
        yield_now().await;
        match self.reject_with.lock().clone() {
            Some(details) => Err(FbError::CreateRejected { details }),
            None => Ok(()),
        }
    }
}

/// In-memory [`Navigator`] that records every pushed path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    spy: Spy<String>,
}

impl RecordingNavigator {
    /// Fresh navigator with no recorded pushes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spy over pushed paths.
    #[must_use]
    pub fn spy(&self) -> &Spy<String> {
        &self.spy
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.spy.record(path.to_string());
    }
}
