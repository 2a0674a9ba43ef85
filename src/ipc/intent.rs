//! Messages that cross window boundaries.
//!
//! A render window is started with a [`LaunchIntent`]; the error window is
//! started with a single [`ErrorReport`] carried in its extras.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ModelReference;

/// Action a render window must be launched with.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Extras key holding the error message for the error window.
pub const EXTRA_ERROR: &str = "error";

/// Extras passed along when a window is created.
pub type Extras = HashMap<String, String>;

/// Launch request for a render window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchIntent {
    #[serde(default)]
    pub action: Option<String>,
    /// Wire form of the model reference
    #[serde(default)]
    pub data: Option<String>,
}

impl LaunchIntent {
    /// A "view" launch for `reference`.
    pub fn view(reference: &ModelReference) -> Self {
        Self {
            action: Some(ACTION_VIEW.to_string()),
            data: Some(reference.to_uri()),
        }
    }

    pub fn is_view(&self) -> bool {
        self.action.as_deref() == Some(ACTION_VIEW)
    }

    /// The model reference carried in `data`, if any.
    pub fn reference(&self) -> Option<ModelReference> {
        self.data
            .as_deref()
            .filter(|data| !data.is_empty())
            .map(ModelReference::from_uri)
    }
}

/// A fatal error on its way to the error surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Report `error` under `context`, listing its cause chain the way the
    /// engine formats its own failures.
    ///
    /// ```text
    /// Cannot load model
    ///
    /// Caused by:
    ///     0: Cannot open model 'example_models/a.vox'
    ///     1: No such file or directory (os error 2)
    /// ```
    pub fn from_error<E>(context: &str, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let error = anyhow::Error::new(error).context(context.to_string());
        Self {
            message: format!("{:?}", error),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// Extras for creating the error window.
    pub fn into_extras(self) -> Extras {
        let mut extras = Extras::new();
        extras.insert(EXTRA_ERROR.to_string(), self.message);
        extras
    }

    /// Recover a report from window extras.
    pub fn from_extras(extras: &Extras) -> Option<Self> {
        extras.get(EXTRA_ERROR).map(|message| Self::new(message.as_str()))
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
