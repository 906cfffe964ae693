//! Labelled input fields and the lookup rules the harness relies on.
//!
//! Lookup by accessible label is case-insensitive (the label a user reads is
//! `Username`; a test may query `username`). Structural lookup goes by field
//! name or position, mirroring a query against the raw form element. Misses
//! are hard errors that name the available fields.

use crate::core::errors::{FbError, Result};
use crate::core::payload::FormPayload;

/// One string-valued input with a structural name and an accessible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    label: String,
    value: String,
}

impl Field {
    /// Empty field with the given structural name and accessible label.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: String::new(),
        }
    }

    /// Structural name (the key the payload is built under).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessible label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Assign a raw value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Ordered collection of a form's declared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    form: String,
    fields: Vec<Field>,
}

impl FieldSet {
    /// Field set for the named form, declared as `(name, label)` pairs.
    #[must_use]
    pub fn new<'a>(form: impl Into<String>, declared: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            form: form.into(),
            fields: declared
                .into_iter()
                .map(|(name, label)| Field::new(name, label))
                .collect(),
        }
    }

    /// Name of the owning form.
    #[must_use]
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Accessible labels, in declaration order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.fields.iter().map(Field::label).collect()
    }

    /// Field by accessible label (case-insensitive).
    pub fn by_label(&self, label: &str) -> Result<&Field> {
        self.position_by_label(label)
            .map(|i| &self.fields[i])
            .ok_or_else(|| self.missing(label))
    }

    /// Mutable field by accessible label (case-insensitive).
    pub fn by_label_mut(&mut self, label: &str) -> Result<&mut Field> {
        match self.position_by_label(label) {
            Some(i) => Ok(&mut self.fields[i]),
            None => Err(self.missing(label)),
        }
    }

    /// Field by structural name (exact match).
    pub fn by_name(&self, name: &str) -> Result<&Field> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| self.missing(name))
    }

    /// Mutable field by structural name (exact match).
    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut Field> {
        match self.fields.iter().position(|f| f.name == name) {
            Some(i) => Ok(&mut self.fields[i]),
            None => Err(self.missing(name)),
        }
    }

    /// Field by declaration position (structural query).
    pub fn by_index(&self, index: usize) -> Result<&Field> {
        self.fields
            .get(index)
            .ok_or_else(|| self.missing(format!("#{index}")))
    }

    /// Mutable field by declaration position (structural query).
    pub fn by_index_mut(&mut self, index: usize) -> Result<&mut Field> {
        if index >= self.fields.len() {
            return Err(self.missing(format!("#{index}")));
        }
        Ok(&mut self.fields[index])
    }

    /// Iterate over the fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Build a payload from the current field values.
    #[must_use]
    pub fn payload(&self) -> FormPayload {
        FormPayload::from_pairs(self.fields.iter().map(|f| (f.name(), f.value())))
    }

    /// Render the fields as `Label: [value]` lines for snapshot assertions.
    #[must_use]
    pub fn render_lines(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: [{}]\n", f.label, f.value))
            .collect()
    }

    fn position_by_label(&self, label: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.label.eq_ignore_ascii_case(label))
    }

    fn missing(&self, selector: impl Into<String>) -> FbError {
        FbError::field_not_found(selector, &self.form, &self.labels())
    }
}
