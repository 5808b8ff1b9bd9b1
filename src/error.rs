use thiserror::Error;

/// Errors that can occur while formatting.
///
/// Currency formatting and [`format_date`](crate::date::format_date) are
/// infallible; only raw time values can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Epoch time value (milliseconds) outside the representable date range.
    #[error("invalid time value: {0} ms")]
    InvalidTimeValue(i64),
}
