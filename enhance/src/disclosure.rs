//! Menu-toggle disclosure: a click target that flips a string boolean
//! `aria-expanded` on itself. The attribute is the whole state.

use markdom::Element;

use crate::events::EventResult;

/// Element id the document scan looks for.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
/// The toggled attribute.
pub const ATTR_EXPANDED: &str = "aria-expanded";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure;

impl Disclosure {
    /// Bind to a toggle element, seeding `aria-expanded="false"` when the
    /// markup left it off.
    pub fn bind(element: &mut Element) -> Self {
        if !element.has_attr(ATTR_EXPANDED) {
            element.set_attr(ATTR_EXPANDED, "false");
        }
        Self
    }

    pub fn handle_click(&mut self, element: &mut Element) -> EventResult {
        element.toggle_bool_attr(ATTR_EXPANDED);
        EventResult::Consumed
    }

    pub fn expanded(&self, element: &Element) -> bool {
        element.attr_is(ATTR_EXPANDED, "true")
    }
}
