// Frame navigation
//
// The studio locator and the booking form live in embedded frames. Element
// lookups resolve against the session's current document, so a missed
// switch poisons every later step; switches here are waited, logged, and
// propagate their failures.

use crate::error::Result;
use crate::locators::{BOOKING_FRAME, LOCATIONS_FRAME};
use crate::session::Session;
use tracing::info;

/// Moves the session into the studio-locations frame.
pub async fn enter_locations_frame(session: &Session) -> Result<()> {
    info!("switching into the locations frame");
    session.enter_frame(&LOCATIONS_FRAME).await?;
    info!("inside the locations frame");
    Ok(())
}

/// Moves the session into the booking-form frame.
pub async fn enter_booking_frame(session: &Session) -> Result<()> {
    info!("switching into the booking frame");
    session.enter_frame(&BOOKING_FRAME).await?;
    info!("inside the booking frame");
    Ok(())
}

/// Runs `body` inside the locations frame and returns to the top-level
/// document afterwards, whatever the body's outcome.
pub async fn in_locations_frame<T>(
    session: &Session,
    body: impl AsyncFnOnce(&Session) -> Result<T>,
) -> Result<T> {
    info!("switching into the locations frame");
    session.with_frame(&LOCATIONS_FRAME, body).await
}

/// Runs `body` inside the booking frame and returns to the top-level
/// document afterwards, whatever the body's outcome.
pub async fn in_booking_frame<T>(
    session: &Session,
    body: impl AsyncFnOnce(&Session) -> Result<T>,
) -> Result<T> {
    info!("switching into the booking frame");
    session.with_frame(&BOOKING_FRAME, body).await
}
