use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use crate::error::FieldError;

/// A DOM event listener that is removed when dropped.
///
/// Owns the closure, so the callback stays alive exactly as long as the
/// registration does.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    ) -> Result<Self, FieldError> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let result = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(e) = result {
            log::warn!("failed to remove '{}' listener: {:?}", self.event, e);
        }
    }
}
