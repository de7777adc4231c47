// Rendered-text parsing for scraped studio details
//
// The site renders studio details as free text. The parsers here split that
// text against fixed formats and answer "N/A" for any piece that does not
// match, so a malformed scrape shows up as a failed comparison with a
// readable value instead of a panic mid-flow.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel for a field the scraped text did not contain.
pub const NOT_AVAILABLE: &str = "N/A";

/// "City, ST 12345" - the second line of a studio card's address block.
static CITY_STATE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?),\s*([A-Z]{2})\s+(\d{5})$").expect("city/state/zip pattern"));

/// "City - Studio Name, ST" - the studio banner line on the booking page.
static STUDIO_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*-\s*(.+?),\s*([A-Z]{2})$").expect("studio banner pattern"));

/// City, state, and zip parsed out of one "City, ST 12345" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityStateZip {
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl CityStateZip {
    fn not_available() -> Self {
        Self {
            city: NOT_AVAILABLE.to_string(),
            state: NOT_AVAILABLE.to_string(),
            zip: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Splits an address block into its street line and its "City, ST ZIP"
/// line. A missing line comes back as "N/A".
pub fn split_address(text: &str) -> (String, String) {
    let mut lines = text.lines();
    let street = non_empty(lines.next());
    let city_state_zip = non_empty(lines.next());
    (street, city_state_zip)
}

fn non_empty(line: Option<&str>) -> String {
    match line {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Parses a "City, ST 12345" line. Every field is "N/A" when the line does
/// not match the format.
pub fn parse_city_state_zip(line: &str) -> CityStateZip {
    match CITY_STATE_ZIP.captures(line) {
        Some(caps) => CityStateZip {
            city: caps[1].trim().to_string(),
            state: caps[2].to_string(),
            zip: caps[3].to_string(),
        },
        None => CityStateZip::not_available(),
    }
}

/// Parses the booking page's "City - Studio Name, ST" banner line into
/// (city, state). The studio name between the dash and the comma is not a
/// comparison field and is dropped.
pub fn parse_studio_banner(line: &str) -> (String, String) {
    match STUDIO_BANNER.captures(line) {
        Some(caps) => (caps[1].trim().to_string(), caps[3].to_string()),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

/// Studio details scraped from one view, compared field by field against
/// the same studio scraped from another view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioRecord {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

impl StudioRecord {
    /// Builds a record from a studio card's address block and phone text.
    pub fn from_locations_scrape(address_block: &str, phone: &str) -> Self {
        let (street, city_state_zip) = split_address(address_block);
        let parsed = parse_city_state_zip(&city_state_zip);
        Self {
            address: street,
            city: parsed.city,
            state: parsed.state,
            zip: parsed.zip,
            phone: phone.to_string(),
        }
    }

    /// Field (name, value) pairs in declaration order, for logging.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Address", &self.address),
            ("City", &self.city),
            ("State", &self.state),
            ("Zip", &self.zip),
            ("Phone", &self.phone),
        ]
    }
}
