//! Unit tests for display formatting helpers.

use crate::helpers::{date, seed_grant};
use grantboard::format::{days_remaining, deadline_label, format_currency};

#[test]
fn test_seed_grant_amount_renders_as_expected() {
    assert_eq!(format_currency(seed_grant().amount), "$50,000");
}

#[test]
fn test_currency_zero_decimal_grouping() {
    assert_eq!(format_currency(0), "$0");
    assert_eq!(format_currency(100), "$100");
    assert_eq!(format_currency(15_000), "$15,000");
    assert_eq!(format_currency(9_876_543), "$9,876,543");
}

#[test]
fn test_days_remaining_floors_at_zero() {
    let today = date(2024, 7, 15);
    assert_eq!(days_remaining(date(2024, 6, 30), today), 0);
    assert_eq!(days_remaining(date(2024, 7, 15), today), 0);
    assert_eq!(days_remaining(date(2024, 7, 20), today), 5);
}

#[test]
fn test_deadline_label_variants() {
    let today = date(2024, 7, 15);
    assert_eq!(deadline_label(date(2024, 7, 14), today), "Deadline passed");
    assert_eq!(deadline_label(date(2024, 7, 15), today), "Due today");
    assert_eq!(deadline_label(date(2024, 7, 16), today), "1 day left");
    assert_eq!(deadline_label(date(2024, 8, 14), today), "30 days left");
}
