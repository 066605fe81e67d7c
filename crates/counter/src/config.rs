//! Configuration for Sunday counting: reference point, month layouts, and
//! the leap-year rule.

/// Month lengths of a Gregorian non-leap year.
pub const GREGORIAN_YEAR: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths of a Gregorian leap year.
pub const GREGORIAN_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap rule: divisible by 4 and not by 100, or divisible by 400.
pub fn gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Julian leap rule: divisible by 4.
pub fn julian_leap(year: i32) -> bool {
    year % 4 == 0
}

/// Leap rule for calendars without leap years.
pub fn never_leap(_year: i32) -> bool {
    false
}

/// Configuration for a [`Counter`](crate::Counter).
///
/// The reference year and its first weekday are required; the month layouts
/// and the leap predicate default to the Gregorian calendar. Missing or
/// invalid required fields are reported by [`Counter::new`](crate::Counter::new),
/// not here.
///
/// # Example
///
/// ```
/// use firstsun_counter::CounterConfig;
///
/// let config = CounterConfig::new()
///     .with_ref_year(1900)
///     .with_ref_first_day("Monday");
/// assert_eq!(config.ref_year(), Some(1900));
/// ```
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Calendar year used as the arithmetic origin.
    ref_year: Option<i32>,
    /// Weekday name on which the reference year begins.
    ref_first_day: Option<String>,
    /// Days per month in a non-leap year.
    year_layout: [u32; 12],
    /// Days per month in a leap year.
    leap_layout: [u32; 12],
    /// Pure predicate deciding leap-ness of a year.
    leap_predicate: fn(i32) -> bool,
}

impl CounterConfig {
    /// Creates an empty configuration with Gregorian defaults for the
    /// layouts and the leap predicate.
    pub fn new() -> Self {
        Self {
            ref_year: None,
            ref_first_day: None,
            year_layout: GREGORIAN_YEAR,
            leap_layout: GREGORIAN_LEAP,
            leap_predicate: gregorian_leap,
        }
    }

    /// Sets the reference year.
    pub fn with_ref_year(mut self, year: i32) -> Self {
        self.ref_year = Some(year);
        self
    }

    /// Sets the weekday name on which the reference year begins.
    pub fn with_ref_first_day(mut self, name: impl Into<String>) -> Self {
        self.ref_first_day = Some(name.into());
        self
    }

    /// Sets the non-leap month layout.
    pub fn with_year_layout(mut self, layout: [u32; 12]) -> Self {
        self.year_layout = layout;
        self
    }

    /// Sets the leap month layout.
    pub fn with_leap_layout(mut self, layout: [u32; 12]) -> Self {
        self.leap_layout = layout;
        self
    }

    /// Sets the leap-year predicate.
    pub fn with_leap_predicate(mut self, predicate: fn(i32) -> bool) -> Self {
        self.leap_predicate = predicate;
        self
    }

    /// Returns the reference year, if set.
    pub fn ref_year(&self) -> Option<i32> {
        self.ref_year
    }

    /// Returns the first weekday name of the reference year, if set.
    pub fn ref_first_day(&self) -> Option<&str> {
        self.ref_first_day.as_deref()
    }

    /// Returns the non-leap month layout.
    pub fn year_layout(&self) -> &[u32; 12] {
        &self.year_layout
    }

    /// Returns the leap month layout.
    pub fn leap_layout(&self) -> &[u32; 12] {
        &self.leap_layout
    }

    /// Returns the leap-year predicate.
    pub fn leap_predicate(&self) -> fn(i32) -> bool {
        self.leap_predicate
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CounterConfig::default();
        assert_eq!(cfg.ref_year(), None);
        assert_eq!(cfg.ref_first_day(), None);
        assert_eq!(cfg.year_layout(), &GREGORIAN_YEAR);
        assert_eq!(cfg.leap_layout(), &GREGORIAN_LEAP);
        assert!(cfg.leap_predicate()(2000));
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = CounterConfig::new()
            .with_ref_year(1600)
            .with_ref_first_day("Tuesday")
            .with_year_layout([30; 12])
            .with_leap_layout([31; 12])
            .with_leap_predicate(never_leap);

        assert_eq!(cfg.ref_year(), Some(1600));
        assert_eq!(cfg.ref_first_day(), Some("Tuesday"));
        assert_eq!(cfg.year_layout(), &[30; 12]);
        assert_eq!(cfg.leap_layout(), &[31; 12]);
        assert!(!cfg.leap_predicate()(1604));
    }

    #[test]
    fn gregorian_layout_sums() {
        assert_eq!(GREGORIAN_YEAR.iter().sum::<u32>(), 365);
        assert_eq!(GREGORIAN_LEAP.iter().sum::<u32>(), 366);
    }

    #[test]
    fn gregorian_rule() {
        assert!(gregorian_leap(1996));
        assert!(gregorian_leap(2000));
        assert!(gregorian_leap(400));
        assert!(!gregorian_leap(1900));
        assert!(!gregorian_leap(1901));
        assert!(!gregorian_leap(2100));
    }

    #[test]
    fn julian_rule() {
        assert!(julian_leap(1900));
        assert!(julian_leap(2100));
        assert!(!julian_leap(1901));
    }

    #[test]
    fn never_rule() {
        assert!(!never_leap(2000));
        assert!(!never_leap(0));
    }
}
