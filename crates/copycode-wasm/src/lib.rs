//! # copycode-wasm
//!
//! WASM bindings for copycode - inject clipboard "Copy" buttons into the
//! highlighted code blocks of a rendered documentation page.
//!
//! The scan runs once per call, enumerating every element matching the
//! container selector in document order and inserting one button per
//! container as its first child. Activating a button copies the current text
//! of the block's code region to the clipboard and flips the label to an
//! acknowledgement, reverting after a fixed delay. Both clipboard outcomes
//! produce a visible label state.
//!
//! Initialization is explicit: the host page decides when the document is
//! ready and calls `enhance_code_blocks` once. The module start hook only
//! installs the panic hook.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { enhance_code_blocks, WasmEnhanceOptions } from './pkg/copycode_wasm.js';
//!
//! await init();
//!
//! document.addEventListener('DOMContentLoaded', () => {
//!   const report = enhance_code_blocks();
//!   console.debug(`${report.installed} code blocks enhanced`);
//! });
//! ```
//!
//! Markers and labels are configurable:
//!
//! ```javascript
//! const options = new WasmEnhanceOptions();
//! options.set_container_selector('div.highlight');
//! options.set_copied_label('Copied to clipboard');
//! enhance_code_blocks(options);
//! ```

mod copy;
mod dom;
mod error;
mod timer;

pub use dom::snapshot_text;

use std::rc::Rc;

use copycode::EnhanceOptions;
use error::WasmEnhanceError;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// JS-friendly wrapper around [`EnhanceOptions`]
///
/// Constructed with defaults matching Rouge-highlighted output
/// (`div.highlighter-rouge` containers, `pre code` text regions); every
/// marker, label, and the revert delay can be overridden from JavaScript.
#[wasm_bindgen]
pub struct WasmEnhanceOptions {
    inner: EnhanceOptions,
}

#[wasm_bindgen]
impl WasmEnhanceOptions {
    /// Create new options with defaults
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: EnhanceOptions::new(),
        }
    }

    /// Set the selector matching code-block containers
    #[wasm_bindgen]
    pub fn set_container_selector(&mut self, selector: String) {
        self.inner.container_selector = selector;
    }

    /// Get the container selector
    #[wasm_bindgen(getter)]
    pub fn container_selector(&self) -> String {
        self.inner.container_selector.clone()
    }

    /// Set the selector for the copyable text region inside a container
    #[wasm_bindgen]
    pub fn set_code_selector(&mut self, selector: String) {
        self.inner.code_selector = selector;
    }

    /// Get the code selector
    #[wasm_bindgen(getter)]
    pub fn code_selector(&self) -> String {
        self.inner.code_selector.clone()
    }

    /// Set the class applied to injected buttons
    #[wasm_bindgen]
    pub fn set_button_class(&mut self, class: String) {
        self.inner.button_class = class;
    }

    /// Get the button class
    #[wasm_bindgen(getter)]
    pub fn button_class(&self) -> String {
        self.inner.button_class.clone()
    }

    /// Set the resting button label
    #[wasm_bindgen]
    pub fn set_idle_label(&mut self, label: String) {
        self.inner.idle_label = label;
    }

    /// Get the resting label
    #[wasm_bindgen(getter)]
    pub fn idle_label(&self) -> String {
        self.inner.idle_label.clone()
    }

    /// Set the label shown after a successful copy
    #[wasm_bindgen]
    pub fn set_copied_label(&mut self, label: String) {
        self.inner.copied_label = label;
    }

    /// Get the copied label
    #[wasm_bindgen(getter)]
    pub fn copied_label(&self) -> String {
        self.inner.copied_label.clone()
    }

    /// Set the label shown after a failed copy
    #[wasm_bindgen]
    pub fn set_failed_label(&mut self, label: String) {
        self.inner.failed_label = label;
    }

    /// Get the failed label
    #[wasm_bindgen(getter)]
    pub fn failed_label(&self) -> String {
        self.inner.failed_label.clone()
    }

    /// Set the delay before the label reverts, in milliseconds
    #[wasm_bindgen]
    pub fn set_revert_delay_ms(&mut self, delay: u32) {
        self.inner.revert_delay_ms = delay;
    }

    /// Get the revert delay
    #[wasm_bindgen(getter)]
    pub fn revert_delay_ms(&self) -> u32 {
        self.inner.revert_delay_ms
    }
}

impl Default for WasmEnhanceOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<WasmEnhanceOptions> for EnhanceOptions {
    fn from(options: WasmEnhanceOptions) -> Self {
        options.inner
    }
}

/// Inject a copy button into every matching code block of the document
///
/// Scans the current document once. Containers the scan cannot wire are
/// skipped and counted; they never abort the pass. Returns the scan report
/// as a JS object:
///
/// ```javascript
/// { containers: 3, installed: 3, skipped: 0 }
/// ```
///
/// # Errors
///
/// Returns structured error objects discriminated by `kind`:
/// - `"optionsError"` - the supplied options cannot drive a scan
/// - `"domError"` - the document or container selector failed outright
/// - `"serializationError"` - failed to serialize the report to JavaScript
///
/// Per-activation clipboard failures are not errors of this function; they
/// surface on the activated button as the failed label, plus a console
/// warning.
#[wasm_bindgen]
pub fn enhance_code_blocks(options: Option<WasmEnhanceOptions>) -> Result<JsValue, JsValue> {
    let options: EnhanceOptions = options.unwrap_or_default().into();
    options
        .validate()
        .map_err(|e| -> JsValue { WasmEnhanceError::from(e).into() })?;

    let window = dom::current_window().map_err(|e| -> JsValue { WasmEnhanceError::from(e).into() })?;
    let document = dom::document_of(&window).map_err(|e| -> JsValue { WasmEnhanceError::from(e).into() })?;

    let report = dom::install_copy_buttons(&window, &document, &Rc::new(options))
        .map_err(|e| -> JsValue { WasmEnhanceError::from(e).into() })?;

    serde_wasm_bindgen::to_value(&report).map_err(|e| {
        let err = WasmEnhanceError::serialization_with_details(
            "Failed to serialize scan report",
            e.to_string(),
        );
        JsValue::from(err)
    })
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
