//! Error handling for Planorama
//!
//! Most editor conditions are routine UI states (unknown ids, empty
//! selections, an unset template) and are absorbed as no-ops rather than
//! reported as errors. [`DesignerError`] covers the remaining caller
//! contract violations on templates and items.

use thiserror::Error;

/// Designer error type
///
/// Represents violations of the item/template contract. These indicate a
/// programming mistake by the caller, not a runtime data issue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A label was requested for a template that declares no label
    #[error("Template '{template}' has no label configuration")]
    MissingLabelConfig {
        /// The template name.
        template: String,
    },

    /// A template name was not registered
    #[error("Unknown item template: {template}")]
    UnknownTemplate {
        /// The template name.
        template: String,
    },

    /// Template geometry cannot produce a valid item
    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate {
        /// The template name.
        template: String,
        /// The reason the template is invalid.
        reason: String,
    },
}

/// Result type for operations that can violate the template contract
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
