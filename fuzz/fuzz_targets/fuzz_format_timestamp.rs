#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|millis: i64| {
    // Out-of-range values come back as InvalidTimeValue; none may panic.
    let _ = formatters::format_timestamp_millis(millis);
});
