//! Event handling for the tab list: header clicks and the roving-tabindex
//! keyboard pattern.

use markdom::{Element, Key, wrap_index};

use crate::events::{EventResult, TabShowEvent};

use super::state::TabList;

impl TabList {
    /// Activate the header at `index`, as a click would.
    ///
    /// Emits the tab-show event (state decided, tree not yet touched),
    /// then reveals the panel and moves the roving focus to the header.
    pub fn handle_header_click(&mut self, container: &mut Element, index: usize) -> EventResult {
        if index >= self.len() {
            return EventResult::Ignored;
        }

        let event = TabShowEvent {
            index,
            panel_id: self.panel_ids()[index].clone(),
            header_id: self.header_ids()[index].clone(),
        };
        self.notify(&event);

        self.display_tab(container, index);
        self.focus_header(index);
        EventResult::Consumed
    }

    /// Key-down handling for the header bar.
    ///
    /// Right/Left move the roving focus with wraparound past either end,
    /// Home jumps to the first header, End to the last. Space and Enter
    /// activate the currently focused header's own tab. Everything else is
    /// ignored and keeps its default behavior.
    pub fn handle_key(&mut self, container: &mut Element, key: Key) -> EventResult {
        let focused = self.focused_index() as isize;

        let target = match key {
            Key::Right => Some(focused + 1),
            Key::Left => Some(focused - 1),
            Key::Home => Some(0),
            // -1 wraps around to the last header
            Key::End => Some(-1),
            _ => None,
        };

        if let Some(target) = target {
            self.focus_header(wrap_index(self.len(), target));
            return EventResult::Consumed;
        }

        match key {
            Key::Enter | Key::Char(' ') => {
                self.handle_header_click(container, self.focused_index())
            }
            _ => EventResult::Ignored,
        }
    }
}
