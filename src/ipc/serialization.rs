//! JSON encoding for messages that cross window or process boundaries.
//!
//! Hosts that can only pass strings between windows (a JNI bridge, a
//! command line) move launch intents and error extras in this form.

use crate::error::Result;
use crate::ipc::intent::{ErrorReport, Extras, LaunchIntent};

pub fn encode_intent(intent: &LaunchIntent) -> Result<String> {
    Ok(serde_json::to_string(intent)?)
}

pub fn decode_intent(payload: &str) -> Result<LaunchIntent> {
    Ok(serde_json::from_str(payload)?)
}

pub fn encode_extras(extras: &Extras) -> Result<String> {
    Ok(serde_json::to_string(extras)?)
}

/// Decode window extras. An empty payload means no extras at all.
pub fn decode_extras(payload: &str) -> Result<Extras> {
    if payload.trim().is_empty() {
        return Ok(Extras::new());
    }
    Ok(serde_json::from_str(payload)?)
}

/// Encode a report as the extras payload of the error window.
pub fn encode_report(report: ErrorReport) -> Result<String> {
    encode_extras(&report.into_extras())
}
