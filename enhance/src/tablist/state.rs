//! Tab list state, header-bar synthesis, and the visibility projection.

use markdom::{Element, FocusState, find_element_mut};

use crate::error::BindError;
use crate::events::TabShowEvent;

use super::{ATTR_ROLE, ATTR_TAB_DESC, ATTR_TAB_HEADING, HEADER_ID_SUFFIX, ROLE_TAB};

/// Single-selection, keyboard-navigable tab interface over panel markup.
///
/// Selection and the roving focus position live here; `hidden`,
/// `tabindex`, and `aria-selected` on the tree are projections of them.
pub struct TabList {
    panel_ids: Vec<String>,
    header_ids: Vec<String>,
    selected: usize,
    focus: FocusState,
    listeners: Vec<Box<dyn FnMut(&TabShowEvent)>>,
}

impl std::fmt::Debug for TabList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabList")
            .field("panel_ids", &self.panel_ids)
            .field("selected", &self.selected)
            .field("focus", &self.focus)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TabList {
    /// Bind to a container element.
    ///
    /// Collects every `data-role="tab"` descendant in document order,
    /// marks them up as panels (panel 0 visible, the rest hidden), and
    /// prepends a synthesized header bar with one button per panel.
    /// A container without panels logs a warning and binds nothing.
    pub fn bind(container: &mut Element) -> Result<Self, BindError> {
        let mut panels = Vec::new();
        let mut index = 0;
        prepare_panels(container, &mut index, &mut panels);

        if panels.is_empty() {
            log::warn!("a tab list needs at least one panel with {ATTR_ROLE}=\"{ROLE_TAB}\"");
            return Err(BindError::NoTabPanels);
        }

        let label = container
            .get_attr(ATTR_TAB_DESC)
            .unwrap_or_default()
            .to_string();

        let mut header_bar = Element::new("div")
            .attr("class", "tabs__header")
            .attr("role", "tablist")
            .attr("aria-label", label);

        let mut panel_ids = Vec::with_capacity(panels.len());
        let mut header_ids = Vec::with_capacity(panels.len());
        for (i, (panel_id, heading)) in panels.into_iter().enumerate() {
            let selected = i == 0;
            let header = Element::new("button")
                .id(format!("{panel_id}{HEADER_ID_SUFFIX}"))
                .attr("role", "tab")
                .attr("tabindex", if selected { "0" } else { "-1" })
                .attr("aria-selected", if selected { "true" } else { "false" })
                .attr("aria-controls", panel_id.clone())
                .text(heading);

            header_ids.push(header.id.clone());
            panel_ids.push(panel_id);
            header_bar.append_child(header);
        }

        container.insert_child(0, header_bar);

        let mut focus = FocusState::new();
        focus.focus(&header_ids[0]);

        Ok(Self {
            panel_ids,
            header_ids,
            selected: 0,
            focus,
            listeners: Vec::new(),
        })
    }

    /// Register a tab-show listener. Listeners run after the selection is
    /// decided, before the visibility projection is written.
    pub fn on_show(&mut self, listener: impl FnMut(&TabShowEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.panel_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panel_ids.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn panel_ids(&self) -> &[String] {
        &self.panel_ids
    }

    pub fn header_ids(&self) -> &[String] {
        &self.header_ids
    }

    /// The header holding the roving focus. Falls back to the selected
    /// header if focus was never moved (it is set at bind time).
    pub fn focused_index(&self) -> usize {
        self.focus
            .focused()
            .and_then(|id| self.header_ids.iter().position(|h| h == id))
            .unwrap_or(self.selected)
    }

    pub(crate) fn focus_header(&mut self, index: usize) {
        if let Some(id) = self.header_ids.get(index) {
            let id = id.clone();
            self.focus.focus(&id);
        }
    }

    pub(crate) fn notify(&mut self, event: &TabShowEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Reveal only the panel at `index` and project the roving tabindex:
    /// the matching header gets `tabindex="0"` and `aria-selected="true"`,
    /// every other header `-1`/`false`.
    pub fn display_tab(&mut self, container: &mut Element, index: usize) {
        if index >= self.panel_ids.len() {
            log::warn!("display_tab out of range: {index}");
            return;
        }

        for (i, panel_id) in self.panel_ids.iter().enumerate() {
            if let Some(panel) = find_element_mut(container, panel_id) {
                panel.set_attr("hidden", "");
                if i == index {
                    panel.remove_attr("hidden");
                }
            }
        }

        for (i, header_id) in self.header_ids.iter().enumerate() {
            if let Some(header) = find_element_mut(container, header_id) {
                header.set_attr("tabindex", if i == index { "0" } else { "-1" });
                header.set_attr("aria-selected", if i == index { "true" } else { "false" });
            }
        }

        self.selected = index;
    }
}

/// Depth-first pass over the container: mark up every panel (visibility,
/// panel role, labelling) and collect `(panel id, heading)` pairs in
/// document order.
fn prepare_panels(element: &mut Element, index: &mut usize, out: &mut Vec<(String, String)>) {
    if element.attr_is(ATTR_ROLE, ROLE_TAB) {
        let i = *index;
        *index += 1;

        if i != 0 {
            element.set_attr("hidden", "");
        }
        element.set_attr("role", "tabpanel");
        element.set_attr("tabindex", "0");
        element.set_attr("aria-labelledby", format!("{}{HEADER_ID_SUFFIX}", element.id));

        let heading = element
            .get_attr(ATTR_TAB_HEADING)
            .unwrap_or_default()
            .to_string();
        out.push((element.id.clone(), heading));
    }

    if let Some(children) = element.child_elements_mut() {
        for child in children {
            prepare_panels(child, index, out);
        }
    }
}
