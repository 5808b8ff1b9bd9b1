//! # formatters
//!
//! Currency and date formatting with fixed US-English conventions: amounts
//! render as US dollars (`$1,234.50`), dates as the short numeric `M/D/Y`
//! style (`1/2/2024`). Output matches the platform `Intl` defaults for
//! locale `en-US`, so values shown by a Rust backend and a browser frontend
//! agree character for character.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use formatters::{format_currency, format_date};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(format_currency(1234.5), "$1,234.50");
//! assert_eq!(format_currency(dec!(-19.999)), "-$20.00");
//! assert_eq!(format_date(&NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()), "1/2/2024");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `currency` (default) | `format_currency`, `CurrencyDisplay`, decimal amounts |
//! | `date` (default) | `format_date`, epoch millisecond formatting |
//! | `all` | Everything |

mod error;

#[cfg(feature = "currency")]
pub mod currency;

#[cfg(feature = "date")]
pub mod date;

pub use error::FormatError;

#[cfg(feature = "currency")]
pub use crate::currency::{Amount, CurrencyDisplay, format_currency};

#[cfg(feature = "date")]
pub use crate::date::{format_date, format_timestamp_millis, format_timestamp_millis_in};

/// BCP 47 tag of the only locale this crate formats for.
pub const LOCALE: &str = "en-US";

/// ISO 4217 code of the currency amounts are rendered in.
pub const CURRENCY_CODE: &str = "USD";

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Minor unit digits of [`CURRENCY_CODE`] (cents).
pub const FRACTION_DIGITS: usize = 2;
