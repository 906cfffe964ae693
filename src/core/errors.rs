//! FB-prefixed error types with structured error codes.

#![allow(missing_docs)]

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, FbError>;

/// Top-level error type for formbench.
///
/// Lookup failures are deliberately loud: a harness that cannot find a field
/// or submit control must fail the test immediately rather than silently skip
/// population.
#[derive(Debug, Error)]
pub enum FbError {
    #[error("[FB-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[FB-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[FB-2001] no field matching {selector:?} in form '{form}' (available: {available})")]
    FieldNotFound {
        selector: String,
        form: String,
        available: String,
    },

    #[error("[FB-2002] no submit control labelled {label:?} in form '{form}'")]
    SubmitControlNotFound { label: String, form: String },

    #[error("[FB-2003] submission already in flight for form '{form}'")]
    SubmitInFlight { form: String },

    #[error("[FB-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[FB-3001] creation rejected: {details}")]
    CreateRejected { details: String },

    #[error("[FB-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl FbError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "FB-1001",
            Self::ConfigParse { .. } => "FB-1003",
            Self::FieldNotFound { .. } => "FB-2001",
            Self::SubmitControlNotFound { .. } => "FB-2002",
            Self::SubmitInFlight { .. } => "FB-2003",
            Self::Serialization { .. } => "FB-2101",
            Self::CreateRejected { .. } => "FB-3001",
            Self::Runtime { .. } => "FB-3900",
        }
    }

    /// Whether the failure is a harness-usage error (bad lookup, bad config)
    /// as opposed to a collaborator outcome.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. }
                | Self::ConfigParse { .. }
                | Self::FieldNotFound { .. }
                | Self::SubmitControlNotFound { .. }
        )
    }

    /// Convenience constructor for a missing-field error that names the
    /// fields which were available at lookup time.
    #[must_use]
    pub fn field_not_found(
        selector: impl Into<String>,
        form: impl Into<String>,
        available: &[&str],
    ) -> Self {
        Self::FieldNotFound {
            selector: selector.into(),
            form: form.into(),
            available: available.join(", "),
        }
    }
}

impl From<serde_json::Error> for FbError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for FbError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
