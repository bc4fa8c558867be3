use markdom::text::{display_width, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    // CJK characters are two columns wide
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("a日"), 3);
}

#[test]
fn test_truncate_fits_unchanged() {
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("exact", 5), "exact");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 3), "he…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_wide_chars_respect_columns() {
    // Width 3 leaves 2 columns before the ellipsis; only one CJK char fits
    assert_eq!(truncate_to_width("日本語", 3), "日…");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 5), "ab   ");
    assert_eq!(pad_to_width("abcde", 5), "abcde");
    assert_eq!(pad_to_width("abcdef", 5), "abcdef");
    assert_eq!(pad_to_width("日本", 6), "日本  ");
}
