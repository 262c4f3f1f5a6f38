//! Live API tests. Run with: `GOOGLE_API_KEY=... cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use gcal_holidays::{HolidayQuery, Holidays};

fn api_key() -> String {
    std::env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set for online tests")
}

#[test]
fn us_holidays_in_2024() {
    let mut q = HolidayQuery::new();
    q.with_api_key(api_key())
        .in_country("US")
        .with_minimal_output();
    q.from("2024-01-01").unwrap().to("2025-01-01").unwrap();

    let Holidays::Minimal(list) = q.list().unwrap() else {
        panic!("expected minimal output");
    };
    assert!(!list.is_empty());
    assert!(list.iter().all(|h| h.date.starts_with("2024-")));
    assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
    assert!(list.iter().any(|h| h.date == "2024-12-25"));
}

#[test]
fn dates_only_are_sorted() {
    let mut q = HolidayQuery::new();
    q.with_api_key(api_key()).in_country("german").with_dates_only();
    q.from("January 1, 2024").unwrap().to("December 31, 2024").unwrap();

    let Holidays::DatesOnly(dates) = q.list().unwrap() else {
        panic!("expected dates only");
    };
    assert!(!dates.is_empty());
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}
