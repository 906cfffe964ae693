//! Components under test: a login form, a post editor, and an item list.
//!
//! **Design invariant:** components are deterministic and I/O-free. All
//! side effects go through injected collaborators ([`crate::collab`]), and
//! submission is an explicit async call rather than a simulated UI event.

pub mod editor;
pub mod field;
pub mod item_list;
pub mod login;

#[cfg(test)]
mod test_properties;

use async_trait::async_trait;

use crate::core::errors::Result;

use self::field::FieldSet;

/// Anything that can be mounted into a rendering target and rendered to
/// text for snapshot assertions.
pub trait Component: Send {
    /// Stable component name, used in error messages and diagnostics.
    fn name(&self) -> &str;

    /// Render the component's current state to text.
    fn render(&self) -> String;
}

/// A component with labelled input fields and a submit capability.
#[async_trait]
pub trait FormComponent: Component {
    /// The component's declared input fields.
    fn fields(&self) -> &FieldSet;

    /// Mutable access to the fields, used by the harness to assign values.
    fn fields_mut(&mut self) -> &mut FieldSet;

    /// Label text of the submit control.
    fn submit_label(&self) -> &str {
        "Submit"
    }

    /// Perform one submission from current field values.
    ///
    /// Invokes the submission callback (or collaborator sequence) exactly
    /// once. Implementations with asynchronous flows may suspend between the
    /// creation call and its follow-up effects.
    async fn submit(&mut self) -> Result<()>;
}
