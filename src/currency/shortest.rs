//! Shortest round-trip digits of an `f64`, with ECMAScript tie-breaking.
//!
//! Rust and ECMAScript both print the fewest significant digits that read
//! back to the same double. When two candidates of that length lie exactly
//! as far from the binary value, ECMAScript `Number::toString` keeps the one
//! with an even last digit; Rust may keep the other. This module applies
//! the ECMAScript choice so amounts format the same as `Intl.NumberFormat`.

/// Enough significant digits to write any finite double exactly.
const EXACT_DIGITS: usize = 800;

/// Below 16 significant digits neighbouring candidates are more than one
/// ulp apart, so only one of them can read back as the same double.
const TIE_MIN_DIGITS: usize = 16;

/// Shortest digits of a finite, non-negative `value` in `LowerExp` form,
/// e.g. `"1.4187642674046042e15"`.
pub(crate) fn shortest_scientific(value: f64) -> String {
    let shortest = format!("{value:e}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let len = mantissa.bytes().filter(u8::is_ascii_digit).count();
    if len < TIE_MIN_DIGITS {
        return shortest;
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let Some((exact_mantissa, exact_exponent)) = exact.split_once('e') else {
        return shortest;
    };
    if exact_exponent != exponent {
        return shortest;
    }
    let exact_digits: Vec<u8> = exact_mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let is_tie = exact_digits[len] == b'5' && exact_digits[len + 1..].iter().all(|&d| d == b'0');
    if !is_tie {
        return shortest;
    }

    let mut chosen = exact_digits[..len].to_vec();
    if chosen[len - 1] % 2 == 1 && !increment(&mut chosen) {
        return shortest;
    }
    let mut out = String::with_capacity(len + 8);
    out.push(char::from(chosen[0]));
    out.push('.');
    out.extend(chosen[1..].iter().map(|&d| char::from(d)));
    out.push('e');
    out.push_str(exponent);
    out
}

/// Add one in the last place. Returns false when every digit is `9`.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}
