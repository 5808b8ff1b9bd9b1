//! Snapshot tests (insta) of formatted statement lines.

use chrono::NaiveDate;
use formatters::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn statement_lines() {
    let entries = [
        (date(2024, 1, 2), "Opening balance", Amount::from(dec!(2500))),
        (date(2024, 1, 15), "Hosting", Amount::from(dec!(-49.90))),
        (date(2024, 2, 1), "Consulting", Amount::from(11483.38)),
        (date(2024, 2, 29), "Refund", Amount::from(-0.005)),
        (date(2024, 12, 31), "Interest", Amount::from(1_234_567_u64)),
    ];

    let statement = entries
        .iter()
        .map(|(d, text, amount)| {
            format!(
                "{:<10} {:<16} {:>16}",
                format_date(d),
                text,
                CurrencyDisplay::new(*amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(statement, @r"
    1/2/2024   Opening balance         $2,500.00
    1/15/2024  Hosting                   -$49.90
    2/1/2024   Consulting             $11,483.38
    2/29/2024  Refund                     -$0.01
    12/31/2024 Interest            $1,234,567.00
    ");
}
