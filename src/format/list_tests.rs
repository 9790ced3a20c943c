use super::*;

#[test]
fn bullet_list_picks_glyph_by_level() {
    assert_eq!(bullet_list("a\n  b\n    c"), "• a\n  ◦ b\n    ▪ c");
}

#[test]
fn bullet_list_reuses_deepest_glyph() {
    let text = "      four\n        five\n            seven";
    assert_eq!(
        bullet_list(text),
        "      ▫ four\n        ◆ five\n            ◆ seven"
    );
}

#[test]
fn bullet_list_normalizes_odd_indentation() {
    assert_eq!(bullet_list("   odd"), "  ◦ odd");
    assert_eq!(bullet_list("\titem"), "• item");
}

#[test]
fn bullet_list_keeps_blank_lines() {
    assert_eq!(bullet_list("a\n\n   \nb"), "• a\n\n   \n• b");
}

#[test]
fn numbered_list_continues_top_level_after_nesting() {
    assert_eq!(
        numbered_list("a\nb\n  c\n  d\ne").unwrap(),
        "1. a\n2. b\n  a. c\n  b. d\n3. e"
    );
}

#[test]
fn numbered_list_restarts_nested_levels_after_ascending() {
    let text = "one\n  x\n  y\ntwo\n  z";
    assert_eq!(
        numbered_list(text).unwrap(),
        "1. one\n  a. x\n  b. y\n2. two\n  a. z"
    );
}

#[test]
fn numbered_list_uses_roman_numerals_and_bullets_deeper() {
    let text = "a\n  b\n    c\n    d\n      e\n        f";
    assert_eq!(
        numbered_list(text).unwrap(),
        "1. a\n  a. b\n    Ⅰ. c\n    Ⅱ. d\n      • e\n        • f"
    );
}

#[test]
fn numbered_list_levels_past_counter_depth_leave_counts_alone() {
    let text = "a\n  b\n          deep\n  c\nd";
    assert_eq!(
        numbered_list(text).unwrap(),
        "1. a\n  a. b\n          • deep\n  b. c\n2. d"
    );

    let mut counters = ListCounters::new();
    counters.advance(0);
    counters.advance(1);
    assert_eq!(counters.advance(5), None);
    assert_eq!(counters.get(0), 1);
    assert_eq!(counters.get(1), 1);
}

#[test]
fn numbered_list_blank_lines_do_not_count() {
    assert_eq!(numbered_list("a\n\nb").unwrap(), "1. a\n\n2. b");
    assert_eq!(numbered_list("  ").unwrap(), "  ");
}

#[test]
fn numbered_list_counter_is_fresh_per_call() {
    assert_eq!(numbered_list("a\nb").unwrap(), "1. a\n2. b");
    assert_eq!(numbered_list("c").unwrap(), "1. c");
}

#[test]
fn numbered_list_starting_nested_skips_parent_count() {
    assert_eq!(numbered_list("  x\ny").unwrap(), "  a. x\n1. y");
}

#[test]
fn lettered_level_fails_past_z() {
    let mut text = String::from("top");
    for _ in 0..27 {
        text.push_str("\n  item");
    }
    assert_eq!(
        numbered_list(&text),
        Err(FormatError::MarkerOutOfRange { level: 1, count: 27 })
    );
}

#[test]
fn lettered_level_reaches_z() {
    let text = vec!["  item"; 26].join("\n");
    let out = numbered_list(&text).unwrap();
    assert!(out.ends_with("  z. item"));
}

#[test]
fn roman_level_fails_past_twelve() {
    let text = vec!["    item"; 13].join("\n");
    assert_eq!(
        numbered_list(&text),
        Err(FormatError::MarkerOutOfRange { level: 2, count: 13 })
    );

    let ok = vec!["    item"; 12].join("\n");
    assert!(numbered_list(&ok).unwrap().ends_with("    Ⅻ. item"));
}

#[test]
fn counters_reset_deeper_levels_only() {
    let mut counters = ListCounters::new();
    assert_eq!(counters.advance(0), Some(1));
    assert_eq!(counters.advance(1), Some(1));
    assert_eq!(counters.advance(2), Some(1));
    assert_eq!(counters.advance(1), Some(2));
    assert_eq!(counters.get(2), 0);
    assert_eq!(counters.advance(0), Some(2));
    assert_eq!(counters.get(1), 0);
    assert_eq!(counters.advance(7), None);
    assert_eq!(counters.get(0), 2);
}

#[test]
fn markers_by_level() {
    assert_eq!(numbered_marker(0, 12).unwrap(), "12.");
    assert_eq!(numbered_marker(1, 3).unwrap(), "c.");
    assert_eq!(numbered_marker(2, 4).unwrap(), "Ⅳ.");
    assert_eq!(numbered_marker(3, 40).unwrap(), "•");
    assert!(numbered_marker(1, 0).is_err());
}
