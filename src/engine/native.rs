//! Interface of the native rendering engine.

use crate::ipc::channel::ErrorSender;
use crate::model::ModelBytes;

/// The native engine a render session drives.
///
/// The engine owns the model bytes once `start` is called and may report one
/// fatal error through `errors`, from any thread, at any later time.
pub trait NativeEngine: Send {
    fn start(&mut self, model: ModelBytes, errors: ErrorSender);
}
