use serde::Deserialize;

/// Top-level firstsun configuration.
///
/// Every field is optional in the TOML; required fields missing after CLI
/// overrides are reported when the counter is constructed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirstsunToml {
    /// Reference year, e.g. 1900.
    pub ref_year: Option<i32>,

    /// Weekday name on which the reference year begins, e.g. "monday".
    pub ref_first_day: Option<String>,

    /// Days per month in a non-leap year (12 entries).
    pub year_layout: Option<Vec<u32>>,

    /// Days per month in a leap year (12 entries).
    pub leap_layout: Option<Vec<u32>>,

    /// Leap rule name: "gregorian" (default), "julian", or "none".
    pub leap_rule: Option<String>,
}
