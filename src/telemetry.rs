use log::info;
use serde_json::Value;

/// Hooks fired by the page for an analytics collaborator to pick up.
pub trait Telemetry {
    fn call_clicked(&self);
    fn booking_completed(&self, payload: &Value);
}

/// Writes both events to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn call_clicked(&self) {
        info!("Call-to-action clicked");
    }

    fn booking_completed(&self, payload: &Value) {
        info!("Booking completed: {}", payload);
    }
}
