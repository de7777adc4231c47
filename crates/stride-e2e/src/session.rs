// Browser session wrapper
//
// Owns the driver handle, the wait policy, and the frame context. All
// element access funnels through the two-phase wait here: presence first,
// then visibility, then the interaction. Frame switches update the tracked
// context so flows can assert where a lookup will resolve.

use crate::driver::{Driver, ElementHandle, ScriptArg};
use crate::error::{Error, Result};
use crate::locators::Locator;
use crate::wait::WaitPolicy;
use futures_util::FutureExt;
use parking_lot::Mutex;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

/// The document scope element lookups currently resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameContext {
    /// Top-level document.
    Top,
    /// Inside the named embedded frame.
    Frame(&'static str),
}

/// One browser session driving the site through an abstract driver.
pub struct Session {
    driver: Arc<dyn Driver>,
    waits: WaitPolicy,
    context: Mutex<FrameContext>,
}

impl Session {
    pub fn new(driver: Arc<dyn Driver>, waits: WaitPolicy) -> Self {
        Self {
            driver,
            waits,
            context: Mutex::new(FrameContext::Top),
        }
    }

    /// Where element lookups currently resolve.
    pub fn frame_context(&self) -> FrameContext {
        *self.context.lock()
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await
    }

    pub async fn maximize(&self) -> Result<()> {
        self.driver.maximize().await
    }

    /// Polls for the element until it attaches to the current document.
    ///
    /// The budget is the policy's presence timeout for this locator's name;
    /// expiry surfaces as `ElementNotFound`.
    pub async fn wait_for_present(&self, locator: &Locator) -> Result<ElementHandle> {
        let timeout = self.waits.presence_timeout(locator.name);
        let start = Instant::now();
        loop {
            if let Some(element) = self.driver.find(&locator.selector).await? {
                return Ok(element);
            }
            if start.elapsed() >= timeout {
                tracing::error!("'{locator}' still absent after {timeout:?}");
                return Err(Error::ElementNotFound {
                    locator: locator.name.to_string(),
                    timeout,
                });
            }
            tokio::time::sleep(self.waits.poll_interval()).await;
        }
    }

    /// Polls an already-located element until it is rendered.
    ///
    /// Expiry surfaces as `ElementNotVisible`.
    pub async fn wait_for_visible(&self, locator: &Locator, element: &ElementHandle) -> Result<()> {
        let timeout = self.waits.visibility_timeout();
        let start = Instant::now();
        loop {
            if self.driver.is_visible(element).await? {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                tracing::error!("'{locator}' still hidden after {timeout:?}");
                return Err(Error::ElementNotVisible {
                    locator: locator.name.to_string(),
                    timeout,
                });
            }
            tokio::time::sleep(self.waits.poll_interval()).await;
        }
    }

    /// Presence then visibility, the preamble to every interaction.
    pub async fn await_interactable(&self, locator: &Locator) -> Result<ElementHandle> {
        let element = self.wait_for_present(locator).await?;
        self.wait_for_visible(locator, &element).await?;
        Ok(element)
    }

    /// Waits for the element and clicks it with a simulated pointer.
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        let element = self.await_interactable(locator).await?;
        self.driver.click(&element).await
    }

    /// Waits for the element and clicks it through the page's script engine.
    ///
    /// For elements a pointer cannot reach: overlays, floating footers.
    pub async fn click_via_script(&self, locator: &Locator) -> Result<()> {
        let element = self.await_interactable(locator).await?;
        self.driver
            .execute_script("arguments[0].click();", &[ScriptArg::Element(element)])
            .await?;
        Ok(())
    }

    /// Waits for the element and types `text` into it.
    pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.await_interactable(locator).await?;
        self.driver.send_keys(&element, text).await
    }

    /// Waits for the element and reads its rendered text.
    pub async fn read_text(&self, locator: &Locator) -> Result<String> {
        let element = self.await_interactable(locator).await?;
        self.driver.text(&element).await
    }

    /// Like `read_text`, but scrolls the element into view between the
    /// presence and visibility waits. For targets that stay below the fold
    /// and report hidden until scrolled to.
    pub async fn read_text_scrolled(&self, locator: &Locator) -> Result<String> {
        let element = self.wait_for_present(locator).await?;
        self.driver
            .execute_script(
                "arguments[0].scrollIntoView(true);",
                &[ScriptArg::Element(element.clone())],
            )
            .await?;
        self.wait_for_visible(locator, &element).await?;
        self.driver.text(&element).await
    }

    /// Waits for the frame element (frame budget), switches into it, and
    /// records the new context. Expiry surfaces as `FrameNotFound`.
    pub async fn enter_frame(&self, frame: &Locator) -> Result<()> {
        let timeout = self.waits.frame_timeout();
        let start = Instant::now();
        let element = loop {
            if let Some(element) = self.driver.find(&frame.selector).await? {
                break element;
            }
            if start.elapsed() >= timeout {
                tracing::error!("'{frame}' not located after {timeout:?}");
                return Err(Error::FrameNotFound {
                    frame: frame.name.to_string(),
                    timeout,
                });
            }
            tokio::time::sleep(self.waits.poll_interval()).await;
        };
        self.driver.switch_to_frame(&element).await?;
        *self.context.lock() = FrameContext::Frame(frame.name);
        tracing::debug!("entered '{frame}'");
        Ok(())
    }

    /// Switches back to the top-level document. No wait: the top document
    /// is always there.
    pub async fn return_to_top(&self) -> Result<()> {
        self.driver.switch_to_default_content().await?;
        *self.context.lock() = FrameContext::Top;
        tracing::debug!("returned to the top-level document");
        Ok(())
    }

    /// Runs `body` inside `frame` and restores the top-level context before
    /// returning, whether the body succeeded or not. A failed body wins over
    /// a failed restore.
    pub async fn with_frame<T>(
        &self,
        frame: &Locator,
        body: impl AsyncFnOnce(&Session) -> Result<T>,
    ) -> Result<T> {
        self.enter_frame(frame).await?;
        let outcome = body(self).await;
        match self.return_to_top().await {
            Ok(()) => outcome,
            Err(restore) => match outcome {
                Ok(_) => Err(restore),
                Err(step) => {
                    tracing::warn!("could not restore the top-level context after a failed step: {restore}");
                    Err(step)
                }
            },
        }
    }

    /// Ends the browser session. Failures are logged at warn level and not
    /// propagated.
    pub async fn close(&self) {
        tracing::info!("closing the browser session");
        if let Err(e) = self.driver.quit().await {
            tracing::warn!("failed to close the browser session: {e}");
        }
    }

    /// Runs a suite body against this session and releases the browser
    /// afterwards, whatever the body's outcome. Panicking assertions inside
    /// the body are caught for teardown and then resumed.
    pub async fn run<T>(self, body: impl AsyncFnOnce(&Session) -> Result<T>) -> Result<T> {
        let outcome = AssertUnwindSafe(body(&self)).catch_unwind().await;
        self.close().await;
        match outcome {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
