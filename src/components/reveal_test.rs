use super::*;

#[test]
fn entries_outside_viewport_wait() {
    assert_eq!(plan_reveal(false, Some("80")), RevealStep::Wait);
}

#[test]
fn plain_fade_in_reveals_without_fill() {
    assert_eq!(plan_reveal(true, None), RevealStep::Reveal { fill_percent: None });
}

#[test]
fn skill_item_reveals_with_declared_fill() {
    assert_eq!(plan_reveal(true, Some("85")), RevealStep::Reveal { fill_percent: Some(85.0) });
}

#[test]
fn unparsable_width_still_reveals_but_skips_fill() {
    assert_eq!(plan_reveal(true, Some("lots")), RevealStep::Reveal { fill_percent: None });
}

#[test]
fn fill_percent_accepts_suffix_and_clamps() {
    assert_eq!(parse_fill_percent(" 72% "), Some(72.0));
    assert_eq!(parse_fill_percent("140"), Some(100.0));
    assert_eq!(parse_fill_percent("-5"), Some(0.0));
    assert_eq!(parse_fill_percent(""), None);
    assert_eq!(parse_fill_percent("NaN"), None);
}
