#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(bytes) = <[u8; 8]>::try_from(data) {
        // Must not panic for any bit pattern, including NaN payloads.
        let formatted = formatters::format_currency(f64::from_le_bytes(bytes));
        assert!(formatted.contains('$'));
    }
});
