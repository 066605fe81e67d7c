//! Error types for the firstsun-counter crate.

/// Error type for all fallible operations in the firstsun-counter crate.
///
/// Covers missing required configuration, unrecognized weekday names,
/// malformed month layouts, and invalid query ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    /// Returned when the configuration has no reference year.
    #[error("no reference year provided")]
    MissingRefYear,

    /// Returned when the configuration has no first weekday for the
    /// reference year.
    #[error("no first weekday of the reference year provided")]
    MissingRefFirstDay,

    /// Returned when a weekday name does not match any of the seven
    /// recognized names (case-insensitive).
    #[error("invalid weekday name: {name:?}")]
    InvalidWeekday {
        /// The unrecognized name that was provided.
        name: String,
    },

    /// Returned when a month layout entry is zero.
    #[error("month {month} in the {layout} layout has no days")]
    InvalidMonthLength {
        /// The 1-based month position with the zero entry.
        month: u8,
        /// Which layout the entry belongs to ("year" or "leap").
        layout: &'static str,
    },

    /// Returned when a query starts before the reference year.
    #[error("query start {from} precedes reference year {ref_year}")]
    QueryBeforeRef {
        /// The requested start year.
        from: i32,
        /// The reference year the counter was built with.
        ref_year: i32,
    },

    /// Returned when a query's end year precedes its start year.
    #[error("query end {to} precedes start {from}")]
    InvertedRange {
        /// The requested start year.
        from: i32,
        /// The requested end year.
        to: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_ref_year() {
        let err = CounterError::MissingRefYear;
        assert_eq!(err.to_string(), "no reference year provided");
    }

    #[test]
    fn error_missing_ref_first_day() {
        let err = CounterError::MissingRefFirstDay;
        assert_eq!(
            err.to_string(),
            "no first weekday of the reference year provided"
        );
    }

    #[test]
    fn error_invalid_weekday() {
        let err = CounterError::InvalidWeekday {
            name: "funday".to_string(),
        };
        assert_eq!(err.to_string(), "invalid weekday name: \"funday\"");
    }

    #[test]
    fn error_invalid_month_length() {
        let err = CounterError::InvalidMonthLength {
            month: 3,
            layout: "leap",
        };
        assert_eq!(err.to_string(), "month 3 in the leap layout has no days");
    }

    #[test]
    fn error_query_before_ref() {
        let err = CounterError::QueryBeforeRef {
            from: 1899,
            ref_year: 1900,
        };
        assert_eq!(
            err.to_string(),
            "query start 1899 precedes reference year 1900"
        );
    }

    #[test]
    fn error_inverted_range() {
        let err = CounterError::InvertedRange {
            from: 1950,
            to: 1940,
        };
        assert_eq!(err.to_string(), "query end 1940 precedes start 1950");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CounterError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CounterError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = CounterError::InvertedRange {
            from: 1950,
            to: 1940,
        };
        assert_eq!(err.clone(), err);
    }
}
