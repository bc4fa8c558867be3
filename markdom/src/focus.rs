/// Wrap an arbitrary index into a sequence of `len` items.
///
/// A negative index wraps to the last valid index, an index past the end
/// wraps to the first, and an in-range index is returned unchanged. For
/// `len >= 1` the result is always in `0..len`. `len == 0` has no valid
/// index; 0 is returned and callers are expected not to get here.
pub fn wrap_index(len: usize, index: isize) -> usize {
    if len == 0 {
        return 0;
    }
    if index < 0 {
        len - 1
    } else if index as usize >= len {
        0
    } else {
        index as usize
    }
}

/// Tracks which element currently holds keyboard focus.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }
}
