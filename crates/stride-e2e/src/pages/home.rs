// Home page object
//
// One operation per user-visible interaction, covering the home page and
// the booking page it hands off to. Every operation goes through the
// session's two-phase wait before touching its element; locators come from
// the registry, never inline.

use crate::config::{FixturePolicy, SuiteConfig};
use crate::error::Result;
use crate::fixtures::CityFixture;
use crate::locators::home;
use crate::session::Session;
use tracing::{info, warn};

pub struct HomePage<'a> {
    session: &'a Session,
    config: &'a SuiteConfig,
}

impl<'a> HomePage<'a> {
    pub fn new(session: &'a Session, config: &'a SuiteConfig) -> Self {
        Self { session, config }
    }

    /// Opens the marketing site at the configured entry URL.
    pub async fn open(&self) -> Result<()> {
        info!("opening the home page at {}", self.config.base_url);
        self.session.goto(&self.config.base_url).await
    }

    /// Clicks the Locations link in the top navigation.
    pub async fn click_locations(&self) -> Result<()> {
        self.session.click(&home::LOCATIONS_LINK).await
    }

    /// Types the fixture city into the studio search input.
    ///
    /// The city comes from the configured city fixture. Under
    /// `FixturePolicy::BestEffort` an unreadable fixture is logged and the
    /// step becomes a no-op; under `Strict` the failure propagates.
    pub async fn enter_city_name(&self) -> Result<()> {
        let city = match CityFixture::load(&self.config.city_fixture) {
            Ok(fixture) => fixture.city_name,
            Err(e) => match self.config.fixture_policy {
                FixturePolicy::Strict => return Err(e),
                FixturePolicy::BestEffort => {
                    warn!("city fixture unreadable, skipping search entry: {e}");
                    return Ok(());
                }
            },
        };
        self.session.type_text(&home::CITY_SEARCH_INPUT, &city).await?;
        info!("entered search city '{city}'");
        Ok(())
    }

    /// Reads the city heading from the first studio card, scrolling it into
    /// view first. The card list renders below the fold.
    pub async fn city_name_label(&self) -> Result<String> {
        self.session.read_text_scrolled(&home::CITY_NAME_LABEL).await
    }

    /// Reads the address block from the first studio card: street line,
    /// then "City, ST ZIP".
    pub async fn address_city_state_zip(&self) -> Result<String> {
        self.session.read_text(&home::STUDIO_ADDRESS).await
    }

    /// Reads the phone number from the first studio card.
    pub async fn studio_phone(&self) -> Result<String> {
        self.session.read_text(&home::STUDIO_PHONE).await
    }

    /// Clicks Try A Class on the first studio card, which navigates to the
    /// booking page.
    pub async fn click_try_class(&self) -> Result<()> {
        info!("clicking Try A Class");
        self.session.click(&home::TRY_CLASS_BUTTON).await
    }

    /// Collapses the studio-information banner on the booking page. The
    /// control is an image under an overlay, so the click goes through the
    /// script engine.
    pub async fn click_hide_studio_info(&self) -> Result<()> {
        info!("collapsing the studio-information banner");
        self.session.click_via_script(&home::HIDE_STUDIO_INFO_BUTTON).await
    }

    /// Reads the studio-information panel text on the booking page.
    pub async fn studio_info_text(&self) -> Result<String> {
        self.session.read_text(&home::STUDIO_INFO_PANEL).await
    }

    /// Reads the phone link inside the studio-information panel.
    pub async fn studio_phone_info(&self) -> Result<String> {
        self.session.read_text(&home::STUDIO_INFO_PHONE).await
    }

    /// Advances the booking form. The Next button sits under a floating
    /// footer, so the click goes through the script engine.
    pub async fn click_next(&self) -> Result<()> {
        info!("clicking Next through the script engine");
        self.session.click_via_script(&home::NEXT_BUTTON).await
    }

    /// Reads the first-name validation alert on the booking form.
    pub async fn first_name_alert(&self) -> Result<String> {
        self.session.read_text(&home::FIRST_NAME_ALERT).await
    }

    /// Reads the last-name validation alert on the booking form.
    pub async fn last_name_alert(&self) -> Result<String> {
        self.session.read_text(&home::LAST_NAME_ALERT).await
    }

    /// Reads the email validation alert on the booking form.
    pub async fn email_alert(&self) -> Result<String> {
        self.session.read_text(&home::EMAIL_ALERT).await
    }
}
