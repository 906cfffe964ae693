//! Login form: two fields, one synchronous submission callback.

use async_trait::async_trait;

use crate::component::field::FieldSet;
use crate::component::{Component, FormComponent};
use crate::core::errors::Result;
use crate::core::payload::FormPayload;

/// Callback invoked with the captured payload on each submission.
pub type SubmitHandler = Box<dyn FnMut(FormPayload) + Send>;

/// Username/password form. On submission the injected callback receives
/// `{username, password}` built from the current field values, exactly once
/// per submission.
pub struct LoginForm {
    fields: FieldSet,
    on_submit: SubmitHandler,
}

impl LoginForm {
    /// Login form wired to the given submission callback.
    #[must_use]
    pub fn new(on_submit: SubmitHandler) -> Self {
        Self {
            fields: FieldSet::new("login", [("username", "Username"), ("password", "Password")]),
            on_submit,
        }
    }
}

impl Component for LoginForm {
    fn name(&self) -> &str {
        "login"
    }

    fn render(&self) -> String {
        format!("{}[ {} ]\n", self.fields.render_lines(), self.submit_label())
    }
}

#[async_trait]
impl FormComponent for LoginForm {
    fn fields(&self) -> &FieldSet {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldSet {
        &mut self.fields
    }

    async fn submit(&mut self) -> Result<()> {
        let payload = self.fields.payload();
        tracing::debug!(form = self.name(), "submitting");
        (self.on_submit)(payload);
        Ok(())
    }
}
