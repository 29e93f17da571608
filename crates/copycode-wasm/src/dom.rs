//! Document scan and control insertion
//!
//! The scan enumerates matching containers once, in document order, and
//! inserts one button per container as its first child. Later DOM mutations
//! are not observed; blocks added after the scan stay unenhanced.

use std::rc::Rc;

use copycode::{EnhanceError, EnhanceOptions, EnhanceReport};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::copy;

pub(crate) fn current_window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or_else(|| EnhanceError::dom("no window in this context"))
}

pub(crate) fn document_of(window: &Window) -> Result<Document, EnhanceError> {
    window
        .document()
        .ok_or_else(|| EnhanceError::dom("window has no document"))
}

/// Enhance every container the selector matches, in document order
///
/// A container that cannot be wired is counted as skipped; it never stops
/// the remaining containers from receiving their controls.
pub(crate) fn install_copy_buttons(
    window: &Window,
    document: &Document,
    options: &Rc<EnhanceOptions>,
) -> Result<EnhanceReport, EnhanceError> {
    let containers = document
        .query_selector_all(&options.container_selector)
        .map_err(|err| selector_error(&options.container_selector, &err))?;

    let mut report = EnhanceReport::new(containers.length() as usize);
    for index in 0..containers.length() {
        let container = containers
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok());
        let Some(container) = container else {
            report.record_skipped();
            continue;
        };

        match install_control(window, document, &container, options) {
            Ok(()) => report.record_installed(),
            Err(err) => {
                crate::warn(&format!("skipping code block {index}: {err}"));
                report.record_skipped();
            }
        }
    }

    Ok(report.finish())
}

/// Create one control and insert it before the container's first child
fn install_control(
    window: &Window,
    document: &Document,
    container: &Element,
    options: &Rc<EnhanceOptions>,
) -> Result<(), EnhanceError> {
    let button: HtmlButtonElement = document
        .create_element("button")
        .map_err(|err| EnhanceError::dom(format!("createElement failed: {}", detail(&err))))?
        .dyn_into()
        .map_err(|_| EnhanceError::dom("created element is not a button"))?;

    // A non-submitting button: inert inside forms
    button.set_type("button");
    button.set_class_name(&options.button_class);
    button.set_inner_text(&options.idle_label);

    copy::wire_activation(window, &button, container, options)?;

    container
        .insert_before(&button, container.first_child().as_ref())
        .map_err(|err| EnhanceError::dom(format!("insertBefore failed: {}", detail(&err))))?;

    Ok(())
}

/// Read the current plain text of the container's code region
///
/// Resolved lazily on every activation; the first element matching the code
/// selector wins. Rendered text (`innerText`) is preferred, with a
/// `textContent` fallback for non-HTML elements.
pub fn snapshot_text(container: &Element, options: &EnhanceOptions) -> Result<String, EnhanceError> {
    let code = container
        .query_selector(&options.code_selector)
        .map_err(|err| selector_error(&options.code_selector, &err))?
        .ok_or_else(|| EnhanceError::missing_code_region(&options.code_selector))?;

    Ok(match code.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => code.text_content().unwrap_or_default(),
    })
}

fn selector_error(selector: &str, err: &JsValue) -> EnhanceError {
    EnhanceError::dom(format!("selector `{selector}` failed: {}", detail(err)))
}

pub(crate) fn detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
