use std::rc::Rc;

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Event, MessageEvent, Window};

use super::listener::Listener;
use crate::config::OriginPolicy;
use crate::error::BindError;
use crate::telemetry::Telemetry;

pub const BOOKING_COMPLETE: &str = "booking_complete";

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Whether a posted payload is the scheduling widget reporting a booking.
pub fn is_booking_complete(payload: &Value) -> bool {
    payload.is_object()
        && MessageEnvelope::deserialize(payload)
            .map(|envelope| envelope.kind.as_deref() == Some(BOOKING_COMPLETE))
            .unwrap_or(false)
}

/// Same check as [`is_booking_complete`], read straight off the posted JS
/// value so payloads that have no JSON form still count.
pub fn js_is_booking_complete(data: &JsValue) -> bool {
    data.is_object()
        && Reflect::get(data, &JsValue::from_str("type"))
            .ok()
            .and_then(|kind| kind.as_string())
            .as_deref()
            == Some(BOOKING_COMPLETE)
}

/// Filters cross-frame messages down to completed bookings.
pub struct BookingHook {
    origins: OriginPolicy,
    telemetry: Rc<dyn Telemetry>,
}

impl BookingHook {
    pub fn new(origins: OriginPolicy, telemetry: Rc<dyn Telemetry>) -> Self {
        Self { origins, telemetry }
    }

    /// Fires the telemetry hook at most once; returns whether it did.
    pub fn handle(&self, origin: &str, payload: &Value) -> bool {
        self.fire(origin, is_booking_complete(payload), || payload.clone())
    }

    /// Browser entry point. The payload handed to telemetry is converted
    /// best-effort and is `Null` when it has no JSON form.
    pub fn handle_js(&self, origin: &str, data: &JsValue) -> bool {
        self.fire(origin, js_is_booking_complete(data), || {
            serde_wasm_bindgen::from_value::<Value>(data.clone()).unwrap_or_else(|e| {
                debug!("Booking payload has no JSON form: {}", e);
                Value::Null
            })
        })
    }

    fn fire(&self, origin: &str, marked: bool, payload: impl FnOnce() -> Value) -> bool {
        if !self.origins.allows(origin) {
            debug!("Ignoring message from untrusted origin {}", origin);
            return false;
        }
        if !marked {
            return false;
        }
        self.telemetry.booking_completed(&payload());
        true
    }
}

pub(crate) fn install(window: &Window, hook: BookingHook) -> Result<Listener, BindError> {
    if hook.origins == OriginPolicy::AnyOrigin {
        debug!("Booking messages accepted from any origin");
    }
    Listener::new(window, "message", move |event: Event| {
        if let Some(message) = event.dyn_ref::<MessageEvent>() {
            hook.handle_js(&message.origin(), &message.data());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        bookings: RefCell<Vec<Value>>,
    }

    impl Telemetry for Recorder {
        fn call_clicked(&self) {}

        fn booking_completed(&self, payload: &Value) {
            self.bookings.borrow_mut().push(payload.clone());
        }
    }

    #[rstest]
    #[case(json!({"type": "booking_complete"}), true)]
    #[case(json!({"type": "booking_complete", "slot": "2026-10-20T09:00"}), true)]
    #[case(json!({"type": "booking_started"}), false)]
    #[case(json!({"event": "booking_complete"}), false)]
    #[case(json!({"type": 3}), false)]
    #[case(json!(["booking_complete"]), false)]
    #[case(json!("booking_complete"), false)]
    #[case(Value::Null, false)]
    fn recognises_marker(#[case] payload: Value, #[case] expected: bool) {
        assert_eq!(is_booking_complete(&payload), expected);
    }

    #[test]
    fn fires_once_per_marked_message() {
        let recorder = Rc::new(Recorder::default());
        let hook = BookingHook::new(OriginPolicy::AnyOrigin, recorder.clone());

        let booked = json!({"type": "booking_complete", "id": 1});
        assert!(hook.handle("https://widgets.example.com", &booked));
        assert!(!hook.handle("https://widgets.example.com", &json!({"type": "resize"})));
        assert!(hook.handle("https://widgets.example.com", &booked));

        assert_eq!(*recorder.bookings.borrow(), vec![booked.clone(), booked]);
    }

    #[test]
    fn allow_list_drops_other_origins() {
        let recorder = Rc::new(Recorder::default());
        let hook = BookingHook::new(
            OriginPolicy::AllowList(vec!["https://widgets.example.com".to_string()]),
            recorder.clone(),
        );
        let booked = json!({"type": "booking_complete"});

        assert!(!hook.handle("https://evil.example.net", &booked));
        assert!(hook.handle("https://widgets.example.com", &booked));
        assert_eq!(recorder.bookings.borrow().len(), 1);
    }
}
