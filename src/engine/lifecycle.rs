//! Render session lifecycle.
//!
//! Provides the `RenderSession` struct which manages:
//! - The launch contract check
//! - Off-thread model resolution and the one-time hand-off to the engine
//! - Immersive chrome while the engine runs
//! - At-most-once forwarding of engine errors to the error surface
//!
//! Every method is meant to be called from the window's UI thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::engine::chrome::{ImmersiveMode, WindowChrome};
use crate::engine::native::NativeEngine;
use crate::ipc::channel::{error_channel, ErrorReceiver};
use crate::ipc::intent::{ErrorReport, LaunchIntent};
use crate::model::resolver::{self, ModelResolver};
use crate::model::{ModelBytes, ModelReference};
use crate::surface::ErrorSurface;

const RESOLVE_FAILURE_CONTEXT: &str = "Cannot load model";

/// Errors that can occur driving a render session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session was already created (state {0})")]
    AlreadyCreated(SessionState),

    #[error("Failed to spawn resolver thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Render session state machine.
///
/// CREATED -> RESOLVING -> ACTIVE -> FAILED -> TERMINATED, with TERMINATED
/// reachable from every state. Nothing moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Window exists, launch intent not yet inspected
    Created,
    /// Model bytes are being read on the resolver thread
    Resolving,
    /// Engine owns the model and is rendering
    Active,
    /// Engine reported a fatal error
    Failed,
    /// Window is gone
    Terminated,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Resolving => write!(f, "RESOLVING"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Failed => write!(f, "FAILED"),
            Self::Terminated => write!(f, "TERMINATED"),
        }
    }
}

/// One run of the native engine bound to one window.
pub struct RenderSession {
    state: SessionState,
    resolver: ModelResolver,
    engine: Box<dyn NativeEngine>,
    chrome: Box<dyn WindowChrome>,
    surface: Arc<dyn ErrorSurface>,
    immersive: ImmersiveMode,

    reference: Option<ModelReference>,
    pending: Option<JoinHandle<resolver::Result<ModelBytes>>>,
    model_len: Option<usize>,
    errors: Option<ErrorReceiver>,
    report: Option<ErrorReport>,
}

impl RenderSession {
    /// Create a session for a freshly created window.
    pub fn new(
        resolver: ModelResolver,
        engine: Box<dyn NativeEngine>,
        chrome: Box<dyn WindowChrome>,
        surface: Arc<dyn ErrorSurface>,
    ) -> Self {
        Self {
            state: SessionState::Created,
            resolver,
            engine,
            chrome,
            surface,
            immersive: ImmersiveMode::FULLSCREEN,
            reference: None,
            pending: None,
            model_len: None,
            errors: None,
            report: None,
        }
    }

    /// Use a different chrome mode while active.
    pub fn with_immersive_mode(mut self, mode: ImmersiveMode) -> Self {
        self.immersive = mode;
        self
    }

    /// Inspect the launch intent and start resolving its model.
    ///
    /// A non-view launch, or one without a model, terminates the session
    /// silently. Otherwise resolution starts on a worker thread and the
    /// session is `Resolving`; call [`RenderSession::pump`] or
    /// [`RenderSession::await_model`] to hand the result to the engine.
    pub fn on_create(&mut self, intent: &LaunchIntent) -> Result<SessionState> {
        if self.state != SessionState::Created {
            return Err(SessionError::AlreadyCreated(self.state));
        }

        if !intent.is_view() {
            log::error!("Launch action was something else: {:?}", intent.action);
            self.terminate();
            return Ok(self.state);
        }

        let reference = match intent.reference() {
            Some(reference) => reference,
            None => {
                log::warn!("View launch without a model reference, closing");
                self.terminate();
                return Ok(self.state);
            }
        };

        log::info!("Opening model {}", reference);

        let resolver = self.resolver.clone();
        let target = reference.clone();
        let handle = thread::Builder::new()
            .name("voxel-shell-resolver".to_string())
            .spawn(move || resolver.resolve(&target))?;

        self.reference = Some(reference);
        self.pending = Some(handle);
        self.transition(SessionState::Resolving);
        Ok(self.state)
    }

    /// Advance the session from the UI thread without blocking.
    ///
    /// Finishes resolution once the worker is done and forwards a pending
    /// engine error, if any.
    pub fn pump(&mut self) -> SessionState {
        match self.state {
            SessionState::Resolving => {
                let done = self
                    .pending
                    .as_ref()
                    .map(JoinHandle::is_finished)
                    .unwrap_or(false);
                if done {
                    self.finish_resolution();
                }
            }
            SessionState::Active => {
                let report = self.errors.as_mut().and_then(ErrorReceiver::try_recv);
                if let Some(report) = report {
                    self.fail(report);
                }
            }
            _ => {}
        }
        self.state
    }

    /// Block until resolution finished and the model was handed off or the
    /// session terminated.
    pub fn await_model(&mut self) -> SessionState {
        if self.state == SessionState::Resolving {
            self.finish_resolution();
        }
        self.state
    }

    /// Wait for the engine's error report and forward it.
    ///
    /// Returns immediately unless the session is active. If the engine drops
    /// its sender without reporting, the session stays active.
    pub async fn watch_errors(&mut self) -> SessionState {
        if self.state != SessionState::Active {
            return self.state;
        }

        let report = match self.errors.as_mut() {
            Some(errors) => errors.recv().await,
            None => None,
        };

        if let Some(report) = report {
            if self.state == SessionState::Active {
                self.fail(report);
            }
        }
        self.state
    }

    /// The platform showed the system bars again.
    pub fn on_system_bars_shown(&mut self) {
        if self.state == SessionState::Active {
            log::debug!("System bars restored, re-applying immersive mode");
            self.chrome.apply(&self.immersive);
        }
    }

    /// Close the window: back navigation, close request or an explicit finish.
    pub fn finish(&mut self) {
        if self.state != SessionState::Terminated {
            self.terminate();
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The reference the session was launched with.
    pub fn reference(&self) -> Option<&ModelReference> {
        self.reference.as_ref()
    }

    /// Size of the payload handed to the engine.
    pub fn model_len(&self) -> Option<usize> {
        self.model_len
    }

    /// The report forwarded to the error surface, if any.
    pub fn report(&self) -> Option<&ErrorReport> {
        self.report.as_ref()
    }

    fn finish_resolution(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };

        let outcome = handle.join();
        if self.state != SessionState::Resolving {
            return;
        }

        match outcome {
            Ok(Ok(model)) => self.activate(model),
            Ok(Err(e)) => {
                log::error!("Model resolution failed: {}", e);
                self.abort(ErrorReport::from_error(RESOLVE_FAILURE_CONTEXT, e));
            }
            Err(_) => {
                log::error!("Resolver thread panicked");
                self.abort(ErrorReport::new(format!(
                    "{}\n\nCaused by:\n    resolver thread panicked",
                    RESOLVE_FAILURE_CONTEXT
                )));
            }
        }
    }

    fn activate(&mut self, model: ModelBytes) {
        self.chrome.apply(&self.immersive);

        let (sender, receiver) = error_channel();
        self.errors = Some(receiver);
        self.model_len = Some(model.len());
        self.transition(SessionState::Active);

        log::info!("Handing {} bytes to the engine", model.len());
        self.engine.start(model, sender);
    }

    fn fail(&mut self, report: ErrorReport) {
        log::error!("{}", report);
        self.transition(SessionState::Failed);
        if let Some(mut errors) = self.errors.take() {
            errors.close();
        }
        self.deliver(report);
    }

    fn abort(&mut self, report: ErrorReport) {
        self.deliver(report);
        self.terminate();
    }

    fn deliver(&mut self, report: ErrorReport) {
        if self.report.is_some() {
            log::debug!("Session already reported an error, dropping: {}", report);
            return;
        }
        self.report = Some(report.clone());
        self.surface.open(report);
    }

    fn terminate(&mut self) {
        if let Some(mut errors) = self.errors.take() {
            errors.close();
        }
        // A still-running resolver finishes on its own; its result is dropped.
        self.pending = None;
        self.transition(SessionState::Terminated);
    }

    fn transition(&mut self, next: SessionState) {
        log::debug!("Render session {} -> {}", self.state, next);
        self.state = next;
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        self.finish();
    }
}
