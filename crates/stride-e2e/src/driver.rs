// Web-automation driver boundary
//
// The suite never talks to a browser directly. Everything above this module
// works in terms of the capability set below, so any automation backend (or
// the scripted double the integration tests use) can sit underneath.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Selector expression for locating a single DOM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// XPath expression, resolved against the current document.
    XPath(&'static str),
    /// CSS selector.
    Css(&'static str),
    /// Element id attribute.
    Id(&'static str),
}

impl Selector {
    /// The raw selector text, whatever its kind.
    pub fn expression(&self) -> &'static str {
        match self {
            Selector::XPath(s) | Selector::Css(s) | Selector::Id(s) => s,
        }
    }
}

/// Opaque handle to a located element.
///
/// Handles are only valid for the document they were located in; drivers
/// report a stale handle as `InteractionFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    id: String,
}

impl ElementHandle {
    /// Wraps a driver-assigned element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Argument bound to `arguments[n]` when running a script in the page.
#[derive(Debug, Clone)]
pub enum ScriptArg {
    /// A previously located element.
    Element(ElementHandle),
    /// A plain JSON value.
    Json(Value),
}

/// Capability set the suite requires from an automation backend.
///
/// `find` reports a missing element as `Ok(None)` rather than an error;
/// bounded waiting and retries belong to the session layer, not the driver.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the session to `url`.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Probes the current document for the first element matching `selector`.
    async fn find(&self, selector: &Selector) -> Result<Option<ElementHandle>>;

    /// Reports whether the element is rendered and interactable.
    async fn is_visible(&self, element: &ElementHandle) -> Result<bool>;

    /// Simulated pointer click.
    async fn click(&self, element: &ElementHandle) -> Result<()>;

    /// Types `text` into the element.
    async fn send_keys(&self, element: &ElementHandle, text: &str) -> Result<()>;

    /// Reads the element's rendered text.
    async fn text(&self, element: &ElementHandle) -> Result<String>;

    /// Runs `script` in the page with `args` bound to `arguments`.
    async fn execute_script(&self, script: &str, args: &[ScriptArg]) -> Result<Value>;

    /// Moves the session's document context into the given frame element.
    async fn switch_to_frame(&self, frame: &ElementHandle) -> Result<()>;

    /// Restores the session's document context to the top-level page.
    async fn switch_to_default_content(&self) -> Result<()>;

    /// Maximizes the browser window.
    async fn maximize(&self) -> Result<()>;

    /// Ends the browser session.
    async fn quit(&self) -> Result<()>;
}
