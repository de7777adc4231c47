// Error types for stride-e2e

use std::time::Duration;
use thiserror::Error;

/// Result type alias for stride-e2e operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the site or the validation endpoint
#[derive(Debug, Error)]
pub enum Error {
    /// Presence wait expired without the element attaching to the document
    ///
    /// Carries the registry name of the locator and the budget that expired.
    /// Typical causes: the search returned no studios, a page transition
    /// stalled, or the site markup changed under the registry.
    #[error("Element not found: '{locator}' still absent after {timeout:?}")]
    ElementNotFound { locator: String, timeout: Duration },

    /// Visibility wait expired on an element that is attached but not rendered
    ///
    /// The element was located but never became interactable, for example a
    /// studio card that stays below the fold or a panel that never expands.
    #[error("Element not visible: '{locator}' still hidden after {timeout:?}")]
    ElementNotVisible { locator: String, timeout: Duration },

    /// Frame wait expired before the embedded document could be entered
    #[error("Frame not found: '{frame}' not located after {timeout:?}")]
    FrameNotFound { frame: String, timeout: Duration },

    /// The driver located the element but the interaction itself failed
    #[error("Interaction failed: {0}")]
    InteractionFailed(String),

    /// Input rejected before any interaction took place
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation endpoint answered outside the 2xx range
    #[error("Validation endpoint returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to the validation endpoint
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}
