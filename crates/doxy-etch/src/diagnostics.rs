//! Error types
//!
//! This module provides the error taxonomy for the extractor. A missing
//! compound resource is not an error (the typedef extractor recovers from it
//! locally); everything here aborts the current extraction call.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for doxy-etch operations
pub type DoxyResult<T> = Result<T, DoxyError>;

/// Main error type for doxy-etch
#[derive(Debug, Error)]
pub enum DoxyError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML resource could not be parsed
    #[error("XML parse error in {file}: {message}")]
    Xml { file: PathBuf, message: String },

    /// A requested XML resource does not exist
    #[error("XML resource not found: {0}")]
    MissingResource(PathBuf),

    /// A required child element is absent
    #[error("Missing <{element}> in {context}")]
    MissingElement { element: String, context: String },

    /// A required attribute is absent
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    /// Template registration or rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DoxyError {
    /// Create an XML parse error
    pub fn xml(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DoxyError::Xml {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing element error
    pub fn missing_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        DoxyError::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Create a missing attribute error
    pub fn missing_attribute(attribute: impl Into<String>, element: impl Into<String>) -> Self {
        DoxyError::MissingAttribute {
            attribute: attribute.into(),
            element: element.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        DoxyError::Template(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        DoxyError::Config(message.into())
    }

    /// Whether this error reports malformed input rather than an environment failure
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DoxyError::Xml { .. }
                | DoxyError::MissingElement { .. }
                | DoxyError::MissingAttribute { .. }
        )
    }
}
