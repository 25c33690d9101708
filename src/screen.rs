//! Host screen abstraction
//!
//! The editor never draws anything itself. It reports transient notices and
//! asks to be closed through the [`Screen`] trait, which the host
//! application implements on top of whatever UI toolkit it uses.

#[cfg(test)]
use mockall::automock;

/// How long a notice stays visible before it dismisses itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    /// Brief notice, used for the generic "all fields required" prompt
    Short,
    /// Longer notice, used for field-specific problems
    Long,
}

/// A transient, dismissible message anchored to the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    length: NoticeLength,
}

impl Notice {
    /// Creates a notice that disappears quickly
    pub fn short(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: NoticeLength::Short,
        }
    }

    /// Creates a notice that stays up longer
    pub fn long(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: NoticeLength::Long,
        }
    }

    /// Text shown to the player
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How long the notice stays visible
    pub fn length(&self) -> NoticeLength {
        self.length
    }
}

/// Trait implemented by the host screen showing the editor
///
/// Methods may be called from the background write context, so
/// implementations must be thread-safe and marshal onto their UI thread
/// when required.
#[cfg_attr(test, automock)]
pub trait Screen: Send + Sync {
    /// Shows a transient notice without blocking further edits
    fn show_notice(&self, notice: &Notice);

    /// Dismisses the screen
    ///
    /// Called at most once, after which the editor ignores further input.
    fn close(&self);
}
