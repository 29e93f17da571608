//! Error taxonomy for the enhancement pass
//!
//! Every failure is local: invalid options reject a pass before it mutates
//! the document, and everything else is scoped to a single container or a
//! single activation.

use thiserror::Error;

/// Errors raised while enhancing a page or serving an activation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnhanceError {
    /// The configuration cannot drive a scan
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },

    /// No element matched the code selector inside a container
    #[error("no code element matched `{selector}` inside the container")]
    MissingCodeRegion { selector: String },

    /// The host context exposes no asynchronous clipboard
    #[error("clipboard is unavailable in this context")]
    ClipboardUnavailable,

    /// The clipboard write was rejected (permission denial, insecure context)
    #[error("clipboard write rejected: {message}")]
    ClipboardWrite { message: String },

    /// A document operation failed
    #[error("document operation failed: {message}")]
    Dom { message: String },
}

impl EnhanceError {
    /// Create an invalid-options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Create a missing-code-region error for the given selector
    pub fn missing_code_region(selector: impl Into<String>) -> Self {
        Self::MissingCodeRegion {
            selector: selector.into(),
        }
    }

    /// Create a clipboard-write rejection error
    pub fn clipboard_write(message: impl Into<String>) -> Self {
        Self::ClipboardWrite {
            message: message.into(),
        }
    }

    /// Create a document-operation error
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Get the error kind as a string (for logging/debugging)
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::InvalidOptions { .. } => "InvalidOptions",
            Self::MissingCodeRegion { .. } => "MissingCodeRegion",
            Self::ClipboardUnavailable => "ClipboardUnavailable",
            Self::ClipboardWrite { .. } => "ClipboardWrite",
            Self::Dom { .. } => "Dom",
        }
    }
}
