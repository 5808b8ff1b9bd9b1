//! Decimal digit strings for grouping and for floats past `Decimal` range.
//!
//! Rounding to cents happens in `rust_decimal`; this type only holds the
//! result as text and writes it out with separators. Floats too large for
//! a `Decimal` are whole numbers, so they need padding but no rounding.

use std::fmt;

/// A non-negative decimal number held as ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    /// Integer digits, most significant first. Never empty.
    integer: Vec<u8>,
    /// Fraction digits, most significant first.
    fraction: Vec<u8>,
}

impl Digits {
    /// Read plain decimal text such as `"1234.50"`.
    ///
    /// Anything other than ASCII digits and the first `.` is skipped, so
    /// callers pass the output of `Display` for an absolute value.
    pub(crate) fn from_plain(text: &str) -> Self {
        let (int_text, frac_text) = text.split_once('.').unwrap_or((text, ""));

        let mut integer: Vec<u8> = int_text.bytes().filter(u8::is_ascii_digit).collect();
        let leading = integer.iter().take_while(|&&b| b == b'0').count();
        integer.drain(..leading.min(integer.len().saturating_sub(1)));
        if integer.is_empty() {
            integer.push(b'0');
        }

        let fraction = frac_text.bytes().filter(u8::is_ascii_digit).collect();
        Self { integer, fraction }
    }

    /// Read `LowerExp` text such as `"1.7976931348623157e308"`.
    pub(crate) fn from_scientific(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
        let exponent: i64 = exponent.parse().unwrap_or(0);
        let (int_text, frac_text) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all: String = int_text.chars().chain(frac_text.chars()).collect();

        let point = int_text.len() as i64 + exponent;
        let plain = if point <= 0 {
            format!("0.{}{all}", "0".repeat(point.unsigned_abs() as usize))
        } else if point as usize >= all.len() {
            format!("{all}{}", "0".repeat(point as usize - all.len()))
        } else {
            let (int_part, frac_part) = all.split_at(point as usize);
            format!("{int_part}.{frac_part}")
        };
        Self::from_plain(&plain)
    }

    /// Pad the fraction with zeros to at least `scale` digits.
    pub(crate) fn pad_fraction(&mut self, scale: usize) {
        if self.fraction.len() < scale {
            self.fraction.resize(scale, b'0');
        }
    }

    /// Write the digits, inserting `group` between every three integer
    /// digits and `decimal` before a non-empty fraction.
    pub(crate) fn write_grouped<W: fmt::Write>(
        &self,
        out: &mut W,
        group: char,
        decimal: char,
    ) -> fmt::Result {
        let len = self.integer.len();
        for (i, &digit) in self.integer.iter().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.write_char(group)?;
            }
            out.write_char(char::from(digit))?;
        }
        if !self.fraction.is_empty() {
            out.write_char(decimal)?;
            for &digit in &self.fraction {
                out.write_char(char::from(digit))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(digits: &Digits) -> String {
        let mut out = String::new();
        digits.write_grouped(&mut out, ',', '.').unwrap();
        out
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(grouped(&Digits::from_plain("1")), "1");
        assert_eq!(grouped(&Digits::from_plain("100")), "100");
        assert_eq!(grouped(&Digits::from_plain("1000")), "1,000");
        assert_eq!(grouped(&Digits::from_plain("100000")), "100,000");
        assert_eq!(grouped(&Digits::from_plain("1000000.25")), "1,000,000.25");
    }

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(Digits::from_plain("000120.5"), Digits::from_plain("120.5"));
        assert_eq!(grouped(&Digits::from_plain("0000")), "0");
    }

    #[test]
    fn pads_fraction() {
        let mut digits = Digits::from_plain("12");
        digits.pad_fraction(2);
        assert_eq!(grouped(&digits), "12.00");

        let mut longer = Digits::from_plain("1.234");
        longer.pad_fraction(2);
        assert_eq!(grouped(&longer), "1.234");
    }

    #[test]
    fn scientific_positions_point() {
        assert_eq!(grouped(&Digits::from_scientific("1e21")), "1,000,000,000,000,000,000,000");
        assert_eq!(grouped(&Digits::from_scientific("1.25e2")), "125");
        assert_eq!(grouped(&Digits::from_scientific("1.25e1")), "12.5");
        assert_eq!(grouped(&Digits::from_scientific("1.5e-2")), "0.015");
    }

    #[test]
    fn largest_double() {
        let digits = Digits::from_scientific(&format!("{:e}", f64::MAX));
        let text = grouped(&digits);
        assert!(text.starts_with("179,769,313,486,231,570,"));
        assert_eq!(text.len(), 309 + 102);
    }
}
