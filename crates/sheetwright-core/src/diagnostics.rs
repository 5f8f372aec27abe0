//! Non-fatal diagnostics raised while populating a workbook
//!
//! Setters never abort on recoverable problems (an illegal character in a
//! string, a merge request that collides with an earlier merge). Those are
//! reported here instead: every entry is forwarded to the [`log`] facade and
//! kept in a buffer the caller can inspect or drain.

use log::Level;

/// A single recorded warning or error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity (`Warn` or `Error`)
    pub level: Level,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Check if this is a warning
    pub fn is_warning(&self) -> bool {
        self.level == Level::Warn
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Diagnostic buffer owned by a workbook
#[derive(Debug)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    forward_to_log: bool,
}

impl Diagnostics {
    /// Create an empty buffer that forwards to `log`
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            forward_to_log: true,
        }
    }

    /// Enable or disable forwarding to the `log` facade
    pub fn set_forward_to_log(&mut self, forward: bool) {
        self.forward_to_log = forward;
    }

    /// Record a warning
    pub fn warn<S: Into<String>>(&mut self, message: S) {
        self.push(Level::Warn, message.into());
    }

    /// Record an error
    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.push(Level::Error, message.into());
    }

    fn push(&mut self, level: Level, message: String) {
        if self.forward_to_log {
            log::log!(level, "{}", message);
        }
        self.entries.push(Diagnostic { level, message });
    }

    /// All recorded diagnostics, oldest first
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterate over recorded warnings
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_warning())
    }

    /// Iterate over recorded errors
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    /// Remove and return everything recorded so far
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
