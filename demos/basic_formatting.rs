use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use formatters::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Currency ───────────────────────────────────────────────────
    println!("=== Currency ({LOCALE}, {CURRENCY_CODE}) ===");
    println!("  0         -> {}", format_currency(0));
    println!("  1234.5    -> {}", format_currency(1234.5));
    println!("  -5        -> {}", format_currency(-5));
    println!("  1.005     -> {}", format_currency(1.005));
    println!("  dec 19.99 -> {}", format_currency(dec!(19.99)));
    println!("  NaN       -> {}", format_currency(f64::NAN));

    // ── 2. Dates ──────────────────────────────────────────────────────
    println!("\n=== Dates ===");
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    println!("  {date} -> {}", format_date(&date));

    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 23, 30, 0).unwrap();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    println!("  {instant} (UTC)   -> {}", format_date(&instant));
    println!("  {instant} (Tokyo) -> {}", format_date(&instant.with_timezone(&tokyo)));

    // ── 3. Raw time values ────────────────────────────────────────────
    println!("\n=== Time values ===");
    for millis in [0, 1_704_153_600_000, 9_000_000_000_000_000] {
        match format_timestamp_millis(millis) {
            Ok(s) => println!("  {millis} -> {s}"),
            Err(e) => println!("  {millis} -> error: {e}"),
        }
    }

    // ── 4. Inline display ─────────────────────────────────────────────
    println!("\n=== Display adapter ===");
    println!("  [{:>12}]", CurrencyDisplay::new(dec!(-1785.00)));
}
