//! Messaging between windows and with the native engine.
//!
//! This module provides:
//! - Launch and error hand-off messages (`intent`)
//! - The engine error callback channel (`channel`)
//! - JSON encoding for string-only transports (`serialization`)

pub mod channel;
pub mod intent;
pub mod serialization;

pub use channel::{error_channel, ErrorReceiver, ErrorSender};
pub use intent::{ErrorReport, Extras, LaunchIntent, ACTION_VIEW, EXTRA_ERROR};
