use super::*;

#[test]
fn missing_attrs_use_dashboard_defaults() {
    let counts = StatusCounts::from_attrs(None, None, None);
    assert_eq!(counts, StatusCounts { cerradas: 142, abiertas: 15, vencidas: 6 });
    assert_eq!(counts, StatusCounts::default());
}

#[test]
fn numeric_attrs_are_used() {
    let counts = StatusCounts::from_attrs(Some("10"), Some("3"), Some("0"));
    assert_eq!(counts.values(), [10, 3, 0]);
}

#[test]
fn empty_and_garbage_attrs_fall_back() {
    let counts = StatusCounts::from_attrs(Some(""), Some("n/a"), Some("-4"));
    assert_eq!(counts, StatusCounts::default());
}

#[test]
fn leading_digits_win_over_trailing_text() {
    let counts = StatusCounts::from_attrs(Some(" 12 cerradas"), Some("7.9"), Some("5"));
    assert_eq!(counts.values(), [12, 7, 5]);
}

#[test]
fn total_sums_all_series() {
    let counts = StatusCounts { cerradas: u32::MAX, abiertas: 1, vencidas: 1 };
    assert_eq!(counts.total(), u64::from(u32::MAX) + 2);
}
