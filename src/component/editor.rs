//! Post editor: async create-then-navigate submission with injected
//! collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::collab::{Author, Navigator, NewPost, PostApi};
use crate::component::field::FieldSet;
use crate::component::{Component, FormComponent};
use crate::core::errors::{FbError, Result};
use crate::core::payload::split_tags;

/// Title/content/tags form. On submission it builds a [`NewPost`] from the
/// current field values (tags split, trimmed, and filtered), stamps an
/// RFC 3339 date, calls [`PostApi::create`], and on success navigates to `/`.
///
/// A submission in flight blocks further submissions; a rejected create
/// clears the guard so the form can be resubmitted, and the navigator is
/// never called on the failed path.
pub struct PostEditor {
    fields: FieldSet,
    author: Author,
    api: Arc<dyn PostApi>,
    navigator: Arc<dyn Navigator>,
    saving: bool,
}

impl PostEditor {
    /// Editor for the given author, wired to its collaborators.
    #[must_use]
    pub fn new(author: Author, api: Arc<dyn PostApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            fields: FieldSet::new(
                "editor",
                [("title", "Title"), ("content", "Content"), ("tags", "Tags")],
            ),
            author,
            api,
            navigator,
            saving: false,
        }
    }

    /// Whether a submission is currently in flight (or has completed
    /// successfully and navigated away).
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

impl Component for PostEditor {
    fn name(&self) -> &str {
        "editor"
    }

    fn render(&self) -> String {
        format!("{}[ {} ]\n", self.fields.render_lines(), self.submit_label())
    }
}

#[async_trait]
impl FormComponent for PostEditor {
    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldSet {
        &mut self.fields
    }

    async fn submit(&mut self) -> Result<()> {
        if self.saving {
            return Err(FbError::SubmitInFlight {
                form: self.fields.form().to_string(),
            });
        }
        self.saving = true;

        let post = NewPost {
            author_id: self.author.id.clone(),
            title: self.fields.by_name("title")?.value().to_string(),
            content: self.fields.by_name("content")?.value().to_string(),
            tags: split_tags(self.fields.by_name("tags")?.value()),
            date: Utc::now().to_rfc3339(),
        };
        tracing::debug!(form = self.name(), title = %post.title, "creating post");

        match self.api.create(post).await {
            Ok(()) => {
                self.navigator.push("/");
                Ok(())
            }
            Err(err) => {
                // Allow a retry after a failed create.
                self.saving = false;
                Err(err)
            }
        }
    }
}
