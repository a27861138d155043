/// Convenience result type used across the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// An attribute read from external markup could not be turned into a position spec field.
    #[error("invalid attribute '{key}' = '{value}': {reason}")]
    InvalidAttribute {
        /// Attribute key as looked up in the source.
        key: String,
        /// Raw attribute value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A child was attached without a position spec.
    #[error("missing position spec for child {child}")]
    MissingSpec {
        /// Host-facing description of the offending child.
        child: String,
    },

    /// `arrange` was requested before any measurement pass ran.
    #[error("container arranged before it was measured")]
    NotMeasured,

    /// A child id that does not belong to the container.
    #[error("unknown child id #{0}")]
    UnknownChild(u64),

    /// Invalid user-provided scene or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    ///
    /// Host [`LayoutSubject`](crate::LayoutSubject) implementations that fail with an
    /// [`anyhow::Error`] can return it from `measure_self` or `place` with `?`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::InvalidAttribute`] value.
    pub fn invalid_attribute(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`LayoutError::MissingSpec`] value.
    pub fn missing_spec(child: impl Into<String>) -> Self {
        Self::MissingSpec {
            child: child.into(),
        }
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
