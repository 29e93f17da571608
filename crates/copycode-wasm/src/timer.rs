//! Owned revert timer
//!
//! Each control owns exactly one timer slot for the label revert. Scheduling
//! cancels any pending revert first, so repeated activations inside the
//! revert window never stack timers.

use copycode::EnhanceError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A single reusable `setTimeout` slot
///
/// The slot owns the callback closure so it stays alive until the timeout
/// fires. A handle that has already fired stays in the slot until the next
/// [`schedule`](Self::schedule); clearing it again is a no-op.
pub(crate) struct RevertTimer {
    pending: Option<Pending>,
}

struct Pending {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl RevertTimer {
    pub(crate) fn new() -> Self {
        Self { pending: None }
    }

    /// Handle of the pending timeout, if any
    pub(crate) fn pending_handle(&self) -> Option<i32> {
        self.pending.as_ref().map(|p| p.handle)
    }

    /// Cancel-and-reschedule: replace any pending revert with a new one
    pub(crate) fn schedule(
        &mut self,
        window: &Window,
        delay_ms: u32,
        revert: impl FnMut() + 'static,
    ) -> Result<(), EnhanceError> {
        self.cancel(window);

        let callback = Closure::<dyn FnMut()>::new(revert);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .map_err(|err| EnhanceError::dom(format!("setTimeout failed: {err:?}")))?;

        self.pending = Some(Pending {
            handle,
            _callback: callback,
        });
        Ok(())
    }

    /// Drop the pending revert, if any
    pub(crate) fn cancel(&mut self, window: &Window) {
        if let Some(pending) = self.pending.take() {
            window.clear_timeout_with_handle(pending.handle);
        }
    }
}
