//! Error handling across the WASM boundary
//!
//! Errors cross into JavaScript as structured objects discriminated by a
//! `kind` field, so consumers can branch on the failure class instead of
//! parsing message strings.

use copycode::EnhanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

/// JS-facing error categories
///
/// Note: Variant names intentionally include "Error" suffix for serde
/// serialization to produce JSON like `{"kind": "optionsError", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[allow(clippy::enum_variant_names)]
pub enum WasmEnhanceError {
    /// The supplied options cannot drive a scan
    #[serde(rename_all = "camelCase")]
    OptionsError { message: String },

    /// A document operation failed during the scan
    #[serde(rename_all = "camelCase")]
    DomError { message: String },

    /// The clipboard is unavailable or rejected the write
    #[serde(rename_all = "camelCase")]
    ClipboardError { message: String },

    /// Failed to serialize the report to JavaScript
    #[serde(rename_all = "camelCase")]
    SerializationError {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl WasmEnhanceError {
    /// Create a serialization error with details
    pub fn serialization_with_details(
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Get the error kind as a string (for logging/debugging)
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::OptionsError { .. } => "OptionsError",
            Self::DomError { .. } => "DomError",
            Self::ClipboardError { .. } => "ClipboardError",
            Self::SerializationError { .. } => "SerializationError",
        }
    }

    /// Get the primary error message
    pub fn message(&self) -> &str {
        match self {
            Self::OptionsError { message }
            | Self::DomError { message }
            | Self::ClipboardError { message }
            | Self::SerializationError { message, .. } => message,
        }
    }
}

impl fmt::Display for WasmEnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind_str(), self.message())?;
        if let Self::SerializationError {
            details: Some(d), ..
        } = self
        {
            write!(f, "\nDetails: {d}")?;
        }
        Ok(())
    }
}

impl std::error::Error for WasmEnhanceError {}

impl From<EnhanceError> for WasmEnhanceError {
    fn from(err: EnhanceError) -> Self {
        let message = err.to_string();
        match err {
            EnhanceError::InvalidOptions { .. } => Self::OptionsError { message },
            EnhanceError::ClipboardUnavailable | EnhanceError::ClipboardWrite { .. } => {
                Self::ClipboardError { message }
            }
            EnhanceError::MissingCodeRegion { .. } | EnhanceError::Dom { .. } => {
                Self::DomError { message }
            }
        }
    }
}

// Convert WasmEnhanceError to JsValue for WASM boundary crossing
impl From<WasmEnhanceError> for JsValue {
    fn from(err: WasmEnhanceError) -> Self {
        match serde_wasm_bindgen::to_value(&err) {
            Ok(js_value) => js_value,
            Err(serialization_err) => {
                // Fallback: a plain string error is better than an opaque one
                JsValue::from_str(&format!(
                    "Error serialization failed: {serialization_err} (original error: {err})"
                ))
            }
        }
    }
}
