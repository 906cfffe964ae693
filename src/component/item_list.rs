//! Render-only list component with an explicit empty state.

use crate::component::Component;

/// Text shown when the list has no items.
pub const EMPTY_TEXT: &str = "no items";

/// A list of string items. Renders one line per item, or [`EMPTY_TEXT`] when
/// the collection is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    /// List over the given items.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// The items, in display order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Component for ItemList {
    fn name(&self) -> &str {
        "item-list"
    }

    fn render(&self) -> String {
        if self.items.is_empty() {
            return format!("{EMPTY_TEXT}\n");
        }
        self.items
            .iter()
            .map(|item| format!("- {item}\n"))
            .collect()
    }
}
