//! Event handling for the sortable table.

use markdom::Element;

use crate::events::EventResult;

use super::state::SortableTable;

impl SortableTable {
    /// Handle a click on the header cell at `column`.
    ///
    /// Disabled and out-of-range columns never had a rule built, so they
    /// can never become the active column; clicks on them are ignored.
    pub fn handle_header_click(&mut self, table: &mut Element, column: usize) -> EventResult {
        if !self.is_sortable(column) {
            return EventResult::Ignored;
        }

        self.sort_by_column(table, column);
        EventResult::Consumed
    }
}
