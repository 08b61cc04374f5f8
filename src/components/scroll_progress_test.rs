#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn halfway_down_is_fifty_percent() {
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
}

#[test]
fn clamps_past_the_end_and_before_the_top() {
    assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn page_without_scrollable_distance_reports_zero() {
    assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
}

#[test]
fn non_finite_inputs_report_zero() {
    assert_eq!(scroll_progress(f64::NAN, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, f64::INFINITY, 1000.0), 0.0);
}

#[test]
fn width_css_appends_percent() {
    assert_eq!(width_css(50.0), "50%");
    assert_eq!(width_css(12.5), "12.5%");
}
