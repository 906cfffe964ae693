//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use formbench::prelude::*;
//! ```

// Core
pub use crate::core::config::{HarnessConfig, LookupMode};
pub use crate::core::errors::{FbError, Result};
pub use crate::core::payload::{FormPayload, split_tags};

// Components
pub use crate::component::editor::PostEditor;
pub use crate::component::item_list::ItemList;
pub use crate::component::login::LoginForm;
pub use crate::component::{Component, FormComponent};

// Collaborators
pub use crate::collab::mocks::{RecordingNavigator, RecordingPostApi};
pub use crate::collab::{Author, Navigator, NewPost, PostApi};

// Harness
pub use crate::harness::FormHarness;
pub use crate::harness::mount::{Mount, RenderSnapshot};

// Verification
pub use crate::verify::spy::Spy;
pub use crate::verify::{flush_microtasks, flush_microtasks_with};
