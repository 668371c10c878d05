use thiserror::Error;

/// Errors that can occur while turning invoice options into a layout tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A value could not be rendered in its printed form.
    #[error("formatting error at {field}: {message}")]
    Formatting {
        /// Dot-separated path to the offending field (e.g. "items[2].rate").
        field: String,
        /// Human-readable description.
        message: String,
    },

    /// The options record had an unexpected shape.
    #[error("invalid invoice options: {0}")]
    Input(String),

    /// A font asset could not be decoded.
    #[error("font error: {0}")]
    Font(String),
}

impl TemplateError {
    /// Create a formatting error for the given field path.
    pub fn formatting(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Formatting {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Re-anchor a formatting error at a different field path.
    ///
    /// Formatting helpers don't know where their value came from; the
    /// template builder attaches the path afterwards.
    pub(crate) fn at(self, path: impl Into<String>) -> Self {
        match self {
            Self::Formatting { message, .. } => Self::Formatting {
                field: path.into(),
                message,
            },
            other => other,
        }
    }
}
