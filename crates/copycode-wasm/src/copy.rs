//! Copy activation pipeline
//!
//! One activation closure per control, closed over its container. The
//! clipboard write is the only suspension point; its continuation applies the
//! acknowledgement label and arms the revert timer. Both outcomes of the
//! write produce a defined label state.

use std::cell::RefCell;
use std::rc::Rc;

use copycode::{CopyOutcome, EnhanceError, EnhanceOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlButtonElement, Window};

use crate::dom;
use crate::timer::RevertTimer;

/// Attach the activation listener for one control
///
/// The control lives for the rest of the page's lifetime, so the listener
/// closure is intentionally leaked with `forget`.
pub(crate) fn wire_activation(
    window: &Window,
    button: &HtmlButtonElement,
    container: &Element,
    options: &Rc<EnhanceOptions>,
) -> Result<(), EnhanceError> {
    let timer = Rc::new(RefCell::new(RevertTimer::new()));

    let listener = {
        let window = window.clone();
        let button = button.clone();
        let container = container.clone();
        let options = Rc::clone(options);
        Closure::<dyn FnMut()>::new(move || {
            activate(&window, &button, &container, &options, &timer);
        })
    };

    button
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|err| {
            EnhanceError::dom(format!("addEventListener failed: {}", dom::detail(&err)))
        })?;
    listener.forget();

    Ok(())
}

/// Serve one activation: snapshot the text, then write it asynchronously
fn activate(
    window: &Window,
    button: &HtmlButtonElement,
    container: &Element,
    options: &Rc<EnhanceOptions>,
    timer: &Rc<RefCell<RevertTimer>>,
) {
    // The text is read at activation time, never cached
    let text = match dom::snapshot_text(container, options) {
        Ok(text) => text,
        Err(err) => {
            crate::warn(&err.to_string());
            acknowledge(window, button, options, timer, CopyOutcome::Failed);
            return;
        }
    };

    let window = window.clone();
    let button = button.clone();
    let options = Rc::clone(options);
    let timer = Rc::clone(timer);
    spawn_local(async move {
        let outcome = match write_to_clipboard(&window, &text).await {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                crate::warn(&err.to_string());
                CopyOutcome::Failed
            }
        };
        acknowledge(&window, &button, &options, &timer, outcome);
    });
}

/// Request an asynchronous clipboard write of `text`
async fn write_to_clipboard(window: &Window, text: &str) -> Result<(), EnhanceError> {
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        // Insecure context or a host without the async clipboard
        return Err(EnhanceError::ClipboardUnavailable);
    }

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| EnhanceError::clipboard_write(dom::detail(&err)))
}

/// Apply the acknowledgement label and arm the revert back to the idle label
fn acknowledge(
    window: &Window,
    button: &HtmlButtonElement,
    options: &Rc<EnhanceOptions>,
    timer: &Rc<RefCell<RevertTimer>>,
    outcome: CopyOutcome,
) {
    let ack = outcome.acknowledge(options);
    button.set_inner_text(&ack.label);

    let revert = {
        let button = button.clone();
        let idle = options.idle_label.clone();
        move || button.set_inner_text(&idle)
    };
    if let Err(err) = timer
        .borrow_mut()
        .schedule(window, ack.revert_after_ms, revert)
    {
        crate::warn(&err.to_string());
    }
}
