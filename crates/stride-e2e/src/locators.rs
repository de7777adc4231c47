// Locator registry
//
// Single source of truth for how the suite finds things on the site. Each
// target gets exactly one named selector; flows and waits refer to entries
// here instead of carrying selector strings around. The names double as keys
// for per-locator wait overrides and show up verbatim in wait errors.

use crate::driver::Selector;
use std::fmt;

/// A named, immutable selector for one UI target.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    /// Registry name, used in logs, wait errors, and policy overrides.
    pub name: &'static str,
    pub selector: Selector,
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Studio-locations iframe on the locations page.
pub const LOCATIONS_FRAME: Locator = Locator {
    name: "locations frame",
    selector: Selector::Id("locations-iframe"),
};

/// Booking-form iframe on the booking page.
pub const BOOKING_FRAME: Locator = Locator {
    name: "booking frame",
    selector: Selector::Id("book-class-1-frame"),
};

/// Home-page and booking-page elements, in the order the flows touch them.
pub mod home {
    use super::Locator;
    use crate::driver::Selector;

    /// Locations link in the top navigation.
    pub const LOCATIONS_LINK: Locator = Locator {
        name: "Locations link",
        selector: Selector::XPath(r"(//a[text()='Locations'])[1]"),
    };

    /// Studio search input inside the locations frame. The frame's app
    /// bundle loads slowly on staging; the default policy gives this entry
    /// a stretched presence budget.
    pub const CITY_SEARCH_INPUT: Locator = Locator {
        name: "city name input",
        selector: Selector::XPath(
            r#"(//h3[text()='Enter your city name & click "search"']//parent::div//input)[1]"#,
        ),
    };

    /// City heading on the first studio card. Renders below the fold, so
    /// reads scroll it into view before the visibility wait.
    pub const CITY_NAME_LABEL: Locator = Locator {
        name: "city name label",
        selector: Selector::XPath(r"(//div[@class='first:mt-0'])[1]//div[1]//h2"),
    };

    /// Two-line address block on the first studio card: street, then
    /// "City, ST ZIP".
    pub const STUDIO_ADDRESS: Locator = Locator {
        name: "studio address",
        selector: Selector::XPath(r"(//div[@class='first:mt-0'])[1]//div[1]//p"),
    };

    /// Phone number on the first studio card.
    pub const STUDIO_PHONE: Locator = Locator {
        name: "studio phone",
        selector: Selector::XPath(r"(//div[@class='first:mt-0'])[1]//div[1]//button//span"),
    };

    /// Try A Class button on the first studio card; clicking it starts the
    /// booking flow.
    pub const TRY_CLASS_BUTTON: Locator = Locator {
        name: "Try A Class button",
        selector: Selector::XPath(r"(//button[text()='Try A Class'])[1]"),
    };

    /// Collapse control for the studio-information banner on the booking
    /// page. The cross-site transition that renders it is the slowest hop
    /// in the flow; the default policy stretches its presence budget. The
    /// control is an image under an overlay, so clicks go through the
    /// script engine.
    pub const HIDE_STUDIO_INFO_BUTTON: Locator = Locator {
        name: "Hide Studio Information button",
        selector: Selector::XPath(r"//div[text()='Hide Studio Information']//parent::div//img"),
    };

    /// Studio-information panel on the booking page.
    pub const STUDIO_INFO_PANEL: Locator = Locator {
        name: "studio information panel",
        selector: Selector::XPath(r"//div[@aria-label='Studio Information']"),
    };

    /// Phone link inside the studio-information panel.
    pub const STUDIO_INFO_PHONE: Locator = Locator {
        name: "studio information phone",
        selector: Selector::XPath(r"//div[@aria-label='Studio Information']//a"),
    };

    /// Next button on the booking form. Sits under a floating footer, so
    /// clicks go through the script engine.
    pub const NEXT_BUTTON: Locator = Locator {
        name: "Next button",
        selector: Selector::XPath(r"//button[@aria-label='Next']"),
    };

    /// First-name validation alert on the booking form.
    pub const FIRST_NAME_ALERT: Locator = Locator {
        name: "first name alert",
        selector: Selector::XPath(r"//span[@id='firstName-error']"),
    };

    /// Last-name validation alert on the booking form.
    pub const LAST_NAME_ALERT: Locator = Locator {
        name: "last name alert",
        selector: Selector::XPath(r"//span[@id='lastName-error']"),
    };

    /// Email validation alert on the booking form.
    pub const EMAIL_ALERT: Locator = Locator {
        name: "email alert",
        selector: Selector::XPath(r"//span[@id='email-error']"),
    };
}
