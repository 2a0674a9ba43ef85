//! The error surface: a dedicated display for one fatal message.

use std::io::{self, Write};

use crate::ipc::intent::{ErrorReport, Extras, EXTRA_ERROR};

/// Shown when the error window was created without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Opens the error window for a report.
///
/// Implemented by hosts; the render session calls it at most once.
pub trait ErrorSurface: Send + Sync {
    fn open(&self, report: ErrorReport);
}

/// Content of the error window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorScreen {
    message: String,
}

impl ErrorScreen {
    /// Build the screen from the extras the window was created with.
    pub fn from_extras(extras: Option<&Extras>) -> Self {
        let message = extras
            .and_then(|extras| extras.get(EXTRA_ERROR))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

        log::error!("ERROR: {}", message);
        Self { message }
    }

    pub fn from_report(report: ErrorReport) -> Self {
        Self::from_extras(Some(&report.into_extras()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the message centered in a `width`-column frame.
    pub fn render(&self, out: &mut dyn Write, width: usize) -> io::Result<()> {
        let rule = "=".repeat(width);
        writeln!(out, "{}", rule)?;
        for line in self.message.lines() {
            let line = line.replace('\t', "    ");
            let pad = width.saturating_sub(line.chars().count()) / 2;
            writeln!(out, "{}{}", " ".repeat(pad), line)?;
        }
        writeln!(out, "{}", rule)
    }
}
