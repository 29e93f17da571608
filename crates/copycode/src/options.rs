//! Enhancement options
//!
//! Every fixed marker of the rendered page (container class, code selector,
//! button class, labels, revert delay) is configurable here; the defaults
//! match the Rouge-style output of common static-site pipelines.

use bon::Builder;

use crate::error::EnhanceError;

/// Configuration for a code-block enhancement pass
///
/// Construct with [`EnhanceOptions::builder()`] or take the defaults via
/// [`EnhanceOptions::new()`]. Call [`validate`](Self::validate) before using
/// the options to drive a scan; an invalid configuration must reject the
/// whole pass before any document mutation.
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
pub struct EnhanceOptions {
    /// Selector matching every code-block container in the document
    #[builder(default = "div.highlighter-rouge".to_string(), into)]
    pub container_selector: String,

    /// Selector for the copyable text region inside a container.
    /// The first match in document order wins.
    #[builder(default = "pre code".to_string(), into)]
    pub code_selector: String,

    /// Class applied to each injected button
    #[builder(default = "copy-code-button".to_string(), into)]
    pub button_class: String,

    /// Resting button label
    #[builder(default = "Copy".to_string(), into)]
    pub idle_label: String,

    /// Label shown after a successful clipboard write
    #[builder(default = "Copied!".to_string(), into)]
    pub copied_label: String,

    /// Label shown after a rejected or unavailable clipboard write
    #[builder(default = "Copy failed".to_string(), into)]
    pub failed_label: String,

    /// Delay before the label reverts to [`idle_label`](Self::idle_label)
    #[builder(default = 2000)]
    pub revert_delay_ms: u32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EnhanceOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the options can drive a scan
    ///
    /// Selectors and labels must be non-empty and the revert delay non-zero.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        for (name, value) in [
            ("container_selector", &self.container_selector),
            ("code_selector", &self.code_selector),
            ("button_class", &self.button_class),
            ("idle_label", &self.idle_label),
            ("copied_label", &self.copied_label),
            ("failed_label", &self.failed_label),
        ] {
            if value.trim().is_empty() {
                return Err(EnhanceError::invalid_options(format!(
                    "{name} must not be empty"
                )));
            }
        }

        if self.revert_delay_ms == 0 {
            return Err(EnhanceError::invalid_options(
                "revert_delay_ms must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rendered_page_markers() {
        let options = EnhanceOptions::new();
        assert_eq!(options.container_selector, "div.highlighter-rouge");
        assert_eq!(options.code_selector, "pre code");
        assert_eq!(options.button_class, "copy-code-button");
        assert_eq!(options.idle_label, "Copy");
        assert_eq!(options.copied_label, "Copied!");
        assert_eq!(options.failed_label, "Copy failed");
        assert_eq!(options.revert_delay_ms, 2000);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(EnhanceOptions::new().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let options = EnhanceOptions::builder()
            .container_selector("pre.chroma")
            .code_selector("code")
            .idle_label("Copy snippet")
            .revert_delay_ms(500)
            .build();
        assert_eq!(options.container_selector, "pre.chroma");
        assert_eq!(options.code_selector, "code");
        assert_eq!(options.idle_label, "Copy snippet");
        assert_eq!(options.revert_delay_ms, 500);
        // Untouched fields keep their defaults
        assert_eq!(options.copied_label, "Copied!");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_selector_rejected() {
        let options = EnhanceOptions::builder().container_selector("").build();
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("container_selector"));
    }

    #[test]
    fn test_whitespace_label_rejected() {
        let options = EnhanceOptions::builder().idle_label("   ").build();
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("idle_label"));
    }

    #[test]
    fn test_zero_delay_rejected() {
        let options = EnhanceOptions::builder().revert_delay_ms(0).build();
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("revert_delay_ms"));
    }

    #[test]
    fn test_default_trait_matches_new() {
        assert_eq!(EnhanceOptions::new(), EnhanceOptions::default());
    }
}
