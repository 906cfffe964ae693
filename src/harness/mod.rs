//! Form harness: mount, populate, submit.
//!
//! Drives a [`FormComponent`] without any UI event system, in a deterministic
//! arrange-act-assert sequence:
//!
//! ```rust,ignore
//! let spy: Spy<FormPayload> = Spy::new();
//! let mut h = FormHarness::mount(LoginForm::new(spy.handler()));
//! h.set_value("Username", "foo").await?;
//! h.set_value("Password", "bar").await?;
//! h.dispatch_submit();
//! h.flush().await;
//! spy.assert_called_once_with(&expected);
//! ```
//!
//! Submission is fire-and-forget: the submit future is spawned onto the test
//! scheduler, the way a UI event handler returns to its event loop before the
//! async work settles. Tests flush microtasks before asserting, and can
//! retrieve the settled outcome through [`FormHarness::submit_outcome`].

pub mod generate;
pub mod mount;

use std::collections::VecDeque;

use tokio::task::JoinHandle;

use crate::component::FormComponent;
use crate::core::config::{HarnessConfig, LookupMode};
use crate::core::errors::{FbError, Result};
use crate::verify::flush_microtasks_with;

use self::mount::{Mount, RenderSnapshot};

/// Harness over one mounted form component.
pub struct FormHarness<C: FormComponent + 'static> {
    mount: Mount<C>,
    config: HarnessConfig,
    dispatched: VecDeque<JoinHandle<Result<()>>>,
}

impl<C: FormComponent + 'static> std::fmt::Debug for FormHarness<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHarness")
            .field("config", &self.config)
            .field("dispatched", &self.dispatched.len())
            .finish_non_exhaustive()
    }
}

impl<C: FormComponent + 'static> FormHarness<C> {
    /// Mount a component with the default configuration.
    #[must_use]
    pub fn mount(component: C) -> Self {
        Self {
            mount: Mount::new(component),
            config: HarnessConfig::default(),
            dispatched: VecDeque::new(),
        }
    }

    /// Mount a component with an explicit, validated configuration.
    pub fn mount_with(component: C, config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mount: Mount::new(component),
            config,
            dispatched: VecDeque::new(),
        })
    }

    /// The underlying rendering target.
    #[must_use]
    pub fn target(&self) -> &Mount<C> {
        &self.mount
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Assign a value to the field matching `selector`.
    ///
    /// Resolution follows [`HarnessConfig::lookup`]: label-first with a
    /// structural-name fallback, or structural-name only in degraded mode.
    /// A miss is a hard error naming the available fields.
    pub async fn set_value(&self, selector: &str, value: &str) -> Result<()> {
        let handle = self.mount.handle();
        let mut component = handle.lock().await;
        let fields = component.fields_mut();
        let field = match self.config.lookup {
            LookupMode::LabelFirst => {
                if fields.by_label(selector).is_ok() {
                    fields.by_label_mut(selector)?
                } else {
                    fields.by_name_mut(selector)?
                }
            }
            LookupMode::NameOnly => fields.by_name_mut(selector)?,
        };
        field.set_value(value);
        tracing::debug!(field = field.name(), "assigned value");
        Ok(())
    }

    /// Assign a value by declaration position (structural query).
    pub async fn set_by_index(&self, index: usize, value: &str) -> Result<()> {
        let handle = self.mount.handle();
        let mut component = handle.lock().await;
        component.fields_mut().by_index_mut(index)?.set_value(value);
        Ok(())
    }

    /// Assign several values in one call.
    pub async fn fill(&self, values: &[(&str, &str)]) -> Result<()> {
        for (selector, value) in values {
            self.set_value(selector, value).await?;
        }
        Ok(())
    }

    /// Read back the current value of the field matching `selector`.
    pub async fn value_of(&self, selector: &str) -> Result<String> {
        let handle = self.mount.handle();
        let component = handle.lock().await;
        let fields = component.fields();
        let field = match self.config.lookup {
            LookupMode::LabelFirst => fields
                .by_label(selector)
                .or_else(|_| fields.by_name(selector))?,
            LookupMode::NameOnly => fields.by_name(selector)?,
        };
        Ok(field.value().to_string())
    }

    /// Capture the current render.
    pub async fn snapshot(&self) -> RenderSnapshot {
        self.mount.snapshot().await
    }

    /// Trigger submission through the form-level path.
    ///
    /// The submit future is spawned; it runs once the test yields (see
    /// [`FormHarness::flush`]).
    pub fn dispatch_submit(&mut self) {
        let handle = self.mount.handle();
        tracing::debug!(component = self.mount.component_name(), "dispatch submit");
        self.dispatched
            .push_back(tokio::spawn(async move { handle.lock().await.submit().await }));
    }

    /// Trigger submission by clicking the labelled submit control.
    ///
    /// Fails with [`FbError::SubmitControlNotFound`] when no control with the
    /// expected label is rendered; otherwise takes the same path as
    /// [`FormHarness::dispatch_submit`].
    pub async fn click_submit(&mut self) -> Result<()> {
        let label = {
            let handle = self.mount.handle();
            let component = handle.lock().await;
            let label = self
                .config
                .submit_label
                .clone()
                .unwrap_or_else(|| component.submit_label().to_string());
            let control = format!("[ {label} ]");
            if !component
                .render()
                .to_lowercase()
                .contains(&control.to_lowercase())
            {
                return Err(FbError::SubmitControlNotFound {
                    label,
                    form: component.fields().form().to_string(),
                });
            }
            label
        };
        tracing::debug!(control = %label, "click submit");
        self.dispatch_submit();
        Ok(())
    }

    /// Yield to the scheduler so dispatched submissions run to completion.
    pub async fn flush(&self) {
        flush_microtasks_with(self.config.flush_turns).await;
    }

    /// Settled outcome of the oldest dispatched submission, or `None` when
    /// nothing was dispatched.
    pub async fn submit_outcome(&mut self) -> Option<Result<()>> {
        let handle = self.dispatched.pop_front()?;
        Some(match handle.await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(FbError::Runtime {
                details: format!("submit task failed: {join_err}"),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::login::LoginForm;
    use crate::core::payload::FormPayload;
    use crate::verify::spy::Spy;

    fn harness_with_spy() -> (FormHarness<LoginForm>, Spy<FormPayload>) {
        let spy: Spy<FormPayload> = Spy::new();
        let harness = FormHarness::mount(LoginForm::new(spy.handler()));
        (harness, spy)
    }

    #[tokio::test]
    async fn label_first_falls_back_to_structural_name() {
        let (harness, _spy) = harness_with_spy();
        harness.set_value("Username", "by-label").await.unwrap();
        harness.set_value("password", "by-name").await.unwrap();
        assert_eq!(harness.value_of("username").await.unwrap(), "by-label");
        assert_eq!(harness.value_of("Password").await.unwrap(), "by-name");
    }

    #[tokio::test]
    async fn name_only_mode_rejects_label_selectors() {
        let spy: Spy<FormPayload> = Spy::new();
        let config = HarnessConfig {
            lookup: LookupMode::NameOnly,
            ..HarnessConfig::default()
        };
        let harness = FormHarness::mount_with(LoginForm::new(spy.handler()), config).unwrap();
        harness.set_value("username", "ok").await.unwrap();
        // "Username" is a label, not a structural name.
        let err = harness.set_value("Username", "nope").await.unwrap_err();
        assert_eq!(err.code(), "FB-2001");
    }

    #[tokio::test]
    async fn missing_field_fails_loudly() {
        let (harness, _spy) = harness_with_spy();
        let err = harness.set_value("Email", "x").await.unwrap_err();
        assert_eq!(err.code(), "FB-2001");
    }

    #[tokio::test]
    async fn dispatch_is_deferred_until_flush() {
        let (mut harness, spy) = harness_with_spy();
        harness.fill(&[("Username", "foo"), ("Password", "bar")]).await.unwrap();
        harness.dispatch_submit();
        assert_eq!(spy.call_count(), 0, "submit must not run eagerly");
        harness.flush().await;
        spy.assert_call_count(1);
        assert!(harness.submit_outcome().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn click_submit_requires_a_rendered_control() {
        let spy: Spy<FormPayload> = Spy::new();
        let config = HarnessConfig {
            submit_label: Some("Save".to_string()),
            ..HarnessConfig::default()
        };
        let mut harness = FormHarness::mount_with(LoginForm::new(spy.handler()), config).unwrap();
        let err = harness.click_submit().await.unwrap_err();
        assert_eq!(err.code(), "FB-2002");
        harness.flush().await;
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_at_mount() {
        let spy: Spy<FormPayload> = Spy::new();
        let config = HarnessConfig {
            flush_turns: 0,
            ..HarnessConfig::default()
        };
        let err = FormHarness::mount_with(LoginForm::new(spy.handler()), config).unwrap_err();
        assert_eq!(err.code(), "FB-1001");
    }

    #[tokio::test]
    async fn submit_outcome_is_none_without_dispatch() {
        let (mut harness, _spy) = harness_with_spy();
        assert!(harness.submit_outcome().await.is_none());
    }
}
