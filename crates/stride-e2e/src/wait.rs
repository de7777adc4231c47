// Bounded-wait policy
//
// Every wait in the suite is bounded and polled; the budgets live here as
// data so suites can tighten them (the scripted double renders in
// milliseconds) or stretch them for known-slow elements on staging.

use std::collections::HashMap;
use std::time::Duration;

/// Default budget for an element presence wait.
pub const DEFAULT_ELEMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default budget for the visibility wait that follows presence.
pub const DEFAULT_VISIBILITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Default budget for locating a frame element before switching into it.
pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_secs(20);

/// Interval between probes while a bounded wait is pending.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wait budgets for a session, with per-locator presence overrides.
///
/// Overrides are keyed by registry name, so a policy can give one slow
/// element a longer presence budget without touching the rest of the suite.
#[derive(Debug, Clone)]
pub struct WaitPolicy {
    default_timeout: Duration,
    visibility_timeout: Duration,
    frame_timeout: Duration,
    poll_interval: Duration,
    overrides: HashMap<&'static str, Duration>,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_ELEMENT_TIMEOUT,
            visibility_timeout: DEFAULT_VISIBILITY_TIMEOUT,
            frame_timeout: DEFAULT_FRAME_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            overrides: HashMap::new(),
        }
    }
}

impl WaitPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy with every budget set to `timeout` and no overrides.
    ///
    /// Used by failure-path suites that want expired waits to surface in
    /// milliseconds instead of staging budgets.
    pub fn uniform(timeout: Duration) -> Self {
        Self {
            default_timeout: timeout,
            visibility_timeout: timeout,
            frame_timeout: timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
            overrides: HashMap::new(),
        }
    }

    /// Gives the named locator its own presence budget.
    pub fn with_override(mut self, locator: &'static str, timeout: Duration) -> Self {
        self.overrides.insert(locator, timeout);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Presence budget for the named locator: its override, or the default.
    pub fn presence_timeout(&self, locator: &str) -> Duration {
        self.overrides
            .get(locator)
            .copied()
            .unwrap_or(self.default_timeout)
    }

    pub fn visibility_timeout(&self) -> Duration {
        self.visibility_timeout
    }

    pub fn frame_timeout(&self) -> Duration {
        self.frame_timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
