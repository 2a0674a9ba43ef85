//! Error callback channel from the native engine to the render window.
//!
//! The engine reports from its own threads; the window drains the channel on
//! its UI thread. Capacity is one and the sending side fires at most once, so
//! a session can never produce two reports.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};

use crate::ipc::intent::ErrorReport;

/// Create a connected sender/receiver pair for one session.
pub fn error_channel() -> (ErrorSender, ErrorReceiver) {
    let (tx, rx) = mpsc::channel(1);
    let sender = ErrorSender {
        tx,
        fired: Arc::new(AtomicBool::new(false)),
    };
    (sender, ErrorReceiver { rx })
}

/// Engine-side handle for reporting a fatal error.
///
/// Clones share the same once-only latch.
#[derive(Clone)]
pub struct ErrorSender {
    tx: mpsc::Sender<ErrorReport>,
    fired: Arc<AtomicBool>,
}

impl ErrorSender {
    /// Report a fatal error. Returns whether this call delivered it.
    ///
    /// Only the first call across all clones is delivered. Reports after the
    /// window went away are dropped.
    pub fn report(&self, message: impl Into<String>) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            log::debug!("Dropping engine error: a report was already sent");
            return false;
        }

        match self.tx.try_send(ErrorReport::new(message)) {
            Ok(()) => true,
            Err(TrySendError::Closed(report)) => {
                log::warn!("Render window closed, dropping engine error: {}", report);
                false
            }
            Err(TrySendError::Full(report)) => {
                log::warn!("Error channel full, dropping engine error: {}", report);
                false
            }
        }
    }

    /// Whether a report was already attempted.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ErrorSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorSender")
            .field("fired", &self.has_fired())
            .finish()
    }
}

/// Window-side end of the error channel.
#[derive(Debug)]
pub struct ErrorReceiver {
    rx: mpsc::Receiver<ErrorReport>,
}

impl ErrorReceiver {
    /// Take a pending report without blocking.
    pub fn try_recv(&mut self) -> Option<ErrorReport> {
        match self.rx.try_recv() {
            Ok(report) => Some(report),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the report. Resolves to `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<ErrorReport> {
        self.rx.recv().await
    }

    /// Stop accepting reports; later sends are dropped.
    pub fn close(&mut self) {
        self.rx.close();
    }
}
