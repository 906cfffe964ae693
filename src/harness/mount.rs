//! Isolated rendering targets and render snapshots.
//!
//! A [`Mount`] is the disposable target one component instance is
//! materialized into for a single test. Each test constructs its own mount,
//! so no state crosses test boundaries, and unmounting happens on `Drop` —
//! including when an assertion failure unwinds the test.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::component::Component;

/// Captured render text at a single point in a test.
///
/// Assertions carry the full frame text so a failure shows what was actually
/// rendered.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    /// Rendered text content.
    pub text: String,
    /// Name of the component that produced it.
    pub component: String,
}

impl RenderSnapshot {
    /// Snapshot of an unmounted component, for render-only assertions.
    #[must_use]
    pub fn of(component: &impl Component) -> Self {
        Self {
            text: component.render(),
            component: component.name().to_string(),
        }
    }

    /// Assert that the rendered text contains a substring.
    #[track_caller]
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.text.contains(needle),
            "{} render does not contain {:?}.\nRender:\n{}",
            self.component,
            needle,
            self.text,
        );
    }

    /// Assert that the rendered text does NOT contain a substring.
    #[track_caller]
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.text.contains(needle),
            "{} render unexpectedly contains {:?}.\nRender:\n{}",
            self.component,
            needle,
            self.text,
        );
    }
}

/// Isolated rendering target holding one mounted component instance.
///
/// Ownership is shared through an async mutex so a dispatched submission can
/// run as a spawned task while the test keeps querying the mount.
pub struct Mount<C: Component> {
    component: Arc<Mutex<C>>,
    name: String,
    mounted: bool,
}

impl<C: Component> Mount<C> {
    /// Mount a component into a fresh target.
    #[must_use]
    pub fn new(component: C) -> Self {
        let name = component.name().to_string();
        tracing::debug!(component = %name, "mounted");
        Self {
            component: Arc::new(Mutex::new(component)),
            name,
            mounted: true,
        }
    }

    /// Name of the mounted component.
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the component instance.
    #[must_use]
    pub fn handle(&self) -> Arc<Mutex<C>> {
        Arc::clone(&self.component)
    }

    /// Whether the target still holds the component.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Capture the current render.
    pub async fn snapshot(&self) -> RenderSnapshot {
        let component = self.component.lock().await;
        RenderSnapshot {
            text: component.render(),
            component: self.name.clone(),
        }
    }

    /// Detach the component from the target. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            tracing::debug!(component = %self.name, "unmounted");
        }
    }
}

impl<C: Component> Drop for Mount<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
