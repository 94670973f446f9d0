use thiserror::Error;

use crate::core::Topic;

/// Errors that can stop the viewer from starting.
///
/// None of these can happen once the window is up: content queries are
/// infallible, so every failure is a wiring or environment problem caught
/// while the window is being built.
#[derive(Debug, Error)]
pub enum UiError {
    /// No GDK display to attach the stylesheet to.
    #[error("Could not connect to a display")]
    DisplayUnavailable,
    /// A topic has no button bound to it.
    #[error("No button bound to topic '{0}'")]
    UnboundTopic(Topic),
}
