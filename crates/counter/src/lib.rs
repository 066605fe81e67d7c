//! # firstsun-counter
//!
//! Counting Sundays that fall on the first day of a month, for configurable
//! calendars.
//!
//! The calendar model is a fixed 12-month year described by two month-length
//! layouts (non-leap and leap) and a pluggable leap-year rule. Queries are
//! answered relative to a reference year whose first weekday is known: the
//! weekday of each year's January 1 is propagated forward one year at a time
//! via the layout sums modulo 7, with no absolute-date arithmetic anywhere.
//!
//! ## Quick Start
//!
//! ```
//! use firstsun_counter::{Counter, CounterConfig};
//!
//! let config = CounterConfig::new()
//!     .with_ref_year(1900)
//!     .with_ref_first_day("Monday");
//! let counter = Counter::new(&config).unwrap();
//!
//! // The classical twentieth-century query.
//! assert_eq!(counter.total_sundays(1901, 2000).unwrap(), 171);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Counter configuration, default layouts, leap rules |
//! | `counter` | Offset propagation and range queries |
//! | `weekday` | Weekday enum with Monday-origin offsets |
//! | `error` | Error types |

mod config;
mod counter;
mod error;
mod weekday;

pub use config::{
    gregorian_leap, julian_leap, never_leap, CounterConfig, GREGORIAN_LEAP, GREGORIAN_YEAR,
};
pub use counter::Counter;
pub use error::CounterError;
pub use weekday::Weekday;
