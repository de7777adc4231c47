//! End-to-end regression suite for the Stride Fitness marketing site.
//!
//! Two flows: the studio-booking flow drives the site from the home page
//! through the studio locator into the booking form, scraping studio
//! details along the way and asserting the locations view and the booking
//! view describe the same studio; the data-blob flow exercises the
//! membership-agreement validation endpoint directly over HTTP with
//! base64-encoded member records.
//!
//! The suite never talks to a browser directly. Everything runs through the
//! [`driver::Driver`] capability trait, so any automation backend (or the
//! scripted site double the integration tests use) can sit underneath
//! unchanged.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stride_e2e::{frames, HomePage, Session, SuiteConfig};
//!
//! async fn first_studio_address(driver: Arc<dyn stride_e2e::driver::Driver>) -> stride_e2e::Result<String> {
//!     let config = SuiteConfig::new();
//!     let session = Session::new(driver, config.waits.clone());
//!     let home = HomePage::new(&session, &config);
//!
//!     home.open().await?;
//!     home.click_locations().await?;
//!     let address = frames::in_locations_frame(&session, async |_| {
//!         home.enter_city_name().await?;
//!         home.address_city_state_zip().await
//!     })
//!     .await?;
//!     session.close().await;
//!     Ok(address)
//! }
//! ```

pub mod api;
pub mod blob;
pub mod config;
pub mod driver;
pub mod fixtures;
pub mod frames;
pub mod locators;
pub mod pages;
pub mod scrape;
pub mod session;
pub mod wait;

mod error;

pub use config::{FixturePolicy, SuiteConfig};
pub use error::{Error, Result};
pub use pages::HomePage;
pub use session::{FrameContext, Session};
pub use wait::WaitPolicy;
