use markdom::{FocusState, wrap_index};

// ============================================================================
// Wraparound index
// ============================================================================

#[test]
fn test_wrap_index_in_range_unchanged() {
    assert_eq!(wrap_index(3, 0), 0);
    assert_eq!(wrap_index(3, 1), 1);
    assert_eq!(wrap_index(3, 2), 2);
}

#[test]
fn test_wrap_index_negative_wraps_to_last() {
    assert_eq!(wrap_index(3, -1), 2);
    assert_eq!(wrap_index(3, -100), 2);
    assert_eq!(wrap_index(1, -1), 0);
}

#[test]
fn test_wrap_index_past_end_wraps_to_first() {
    assert_eq!(wrap_index(3, 3), 0);
    assert_eq!(wrap_index(3, 100), 0);
    assert_eq!(wrap_index(1, 1), 0);
}

#[test]
fn test_wrap_index_always_in_bounds() {
    for len in 1..=5usize {
        for index in -3isize..8 {
            let result = wrap_index(len, index);
            assert!(result < len, "wrap_index({len}, {index}) = {result}");
        }
    }
}

// ============================================================================
// Focus state
// ============================================================================

#[test]
fn test_focus_and_blur() {
    let mut focus = FocusState::new();
    assert_eq!(focus.focused(), None);

    assert!(focus.focus("tab-1"));
    assert_eq!(focus.focused(), Some("tab-1"));

    // Re-focusing the same element is a no-op
    assert!(!focus.focus("tab-1"));

    assert!(focus.focus("tab-2"));
    assert_eq!(focus.focused(), Some("tab-2"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}
