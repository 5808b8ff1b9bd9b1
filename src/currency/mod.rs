//! US-dollar currency formatting.
//!
//! Amounts render with the `en-US` currency pattern `¤#,##0.00`: a leading
//! `$`, a comma between every three integer digits and exactly two fraction
//! digits. Negative amounts get a leading `-` in front of the symbol.
//!
//! Rounding works on the decimal value of the input. An `f64` contributes
//! its shortest round-trip decimal digits (so `1.005` is treated as `1.005`,
//! not as the binary value just below it), then `rust_decimal` rounds the
//! result half away from zero to whole cents.

mod digits;
mod shortest;

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use self::digits::Digits;
use crate::{CURRENCY_SYMBOL, FRACTION_DIGITS};

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';
const MINUS_SIGN: char = '-';
const NAN_TEXT: &str = "NaN";
const INFINITY_TEXT: &str = "∞";

/// Floats at or above this magnitude are formatted from their digits
/// instead of through `Decimal` (whose maximum is about 7.9e28).
const DECIMAL_FLOAT_LIMIT: f64 = 1e28;

/// Floats below this magnitude round to zero cents.
const ZERO_FLOAT_LIMIT: f64 = 1e-10;

/// A monetary amount in major units (dollars).
///
/// Built through `From` so [`format_currency`] accepts floats, integers and
/// decimals alike. Integers become exact decimals. No sign or range
/// constraint is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Binary floating point, may be negative zero or non-finite.
    Float(f64),
    /// Exact decimal value.
    Decimal(Decimal),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl From<&Decimal> for Amount {
    fn from(value: &Decimal) -> Self {
        Amount::Decimal(*value)
    }
}

/// Sign and magnitude of an amount, ready to be written out.
enum Rendered {
    NotANumber,
    Infinite { negative: bool },
    /// Magnitude fits a `Decimal`.
    Finite { negative: bool, magnitude: Decimal },
    /// Float magnitude past `Decimal` range; always a whole number.
    Oversized { negative: bool, digits: Digits },
}

impl Amount {
    fn render(self) -> Rendered {
        match self {
            Amount::Float(value) if value.is_nan() => Rendered::NotANumber,
            Amount::Float(value) if value.is_infinite() => Rendered::Infinite {
                negative: value.is_sign_negative(),
            },
            Amount::Float(value) => render_float(value),
            Amount::Decimal(value) => Rendered::Finite {
                negative: value.is_sign_negative(),
                magnitude: value.abs(),
            },
        }
    }
}

fn render_float(value: f64) -> Rendered {
    let negative = value.is_sign_negative();
    let abs = value.abs();
    if abs < ZERO_FLOAT_LIMIT {
        return Rendered::Finite {
            negative,
            magnitude: Decimal::ZERO,
        };
    }

    let text = shortest::shortest_scientific(abs);
    if abs < DECIMAL_FLOAT_LIMIT {
        if let Ok(magnitude) = Decimal::from_scientific(&text) {
            return Rendered::Finite {
                negative,
                magnitude,
            };
        }
    }
    Rendered::Oversized {
        negative,
        digits: Digits::from_scientific(&text),
    }
}

/// Lazily formats an amount as US dollars when displayed.
///
/// Without a width or precision the text is written straight into the
/// formatter; padding falls back to `Formatter::pad` on a buffer.
///
/// ```rust
/// use formatters::CurrencyDisplay;
///
/// let line = format!("Total: {}", CurrencyDisplay::new(1999.9));
/// assert_eq!(line, "Total: $1,999.90");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyDisplay {
    amount: Amount,
}

impl CurrencyDisplay {
    /// Wrap an amount for display.
    pub fn new(amount: impl Into<Amount>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    /// The wrapped amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self.amount.render() {
            Rendered::NotANumber => {
                out.write_str(CURRENCY_SYMBOL)?;
                out.write_str(NAN_TEXT)
            }
            Rendered::Infinite { negative } => {
                write_prefix(out, negative)?;
                out.write_str(INFINITY_TEXT)
            }
            Rendered::Finite {
                negative,
                magnitude,
            } => {
                let cents = magnitude.round_dp_with_strategy(
                    FRACTION_DIGITS as u32,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                let digits = Digits::from_plain(&format!("{:.2}", cents));
                write_prefix(out, negative)?;
                digits.write_grouped(out, GROUP_SEPARATOR, DECIMAL_SEPARATOR)
            }
            Rendered::Oversized {
                negative,
                mut digits,
            } => {
                digits.pad_fraction(FRACTION_DIGITS);
                write_prefix(out, negative)?;
                digits.write_grouped(out, GROUP_SEPARATOR, DECIMAL_SEPARATOR)
            }
        }
    }
}

fn write_prefix<W: fmt::Write>(out: &mut W, negative: bool) -> fmt::Result {
    if negative {
        out.write_char(MINUS_SIGN)?;
    }
    out.write_str(CURRENCY_SYMBOL)
}

impl fmt::Display for CurrencyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            return self.write_to(f);
        }
        let mut out = String::new();
        self.write_to(&mut out)?;
        f.pad(&out)
    }
}

/// Format `amount` as a US-dollar string, e.g. `$1,234.50`.
///
/// Never fails: negative zero renders as `-$0.00`, `NaN` as `$NaN` and
/// infinities as `$∞` / `-$∞`.
///
/// ```rust
/// use formatters::format_currency;
///
/// assert_eq!(format_currency(0), "$0.00");
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-5), "-$5.00");
/// ```
pub fn format_currency(amount: impl Into<Amount>) -> String {
    CurrencyDisplay::new(amount).to_string()
}
