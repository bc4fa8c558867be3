//! Sortable table state and the sort operations themselves.

use markdom::Element;

use crate::error::BindError;
use crate::events::SortEvent;

use super::rule::{SortKey, SortRule};
use super::{ATTR_SORT_DEFAULT, ATTR_SORT_DISABLE, ATTR_SORT_MARKER, ATTR_SORT_VALUE};

/// Makes an existing table sortable by one column at a time.
///
/// All state lives here; the bound tree only receives projections of it
/// (the `aria-sort` marker and the row order). Sort keys are computed
/// fresh on every sort, so cell edits made after binding are picked up.
pub struct SortableTable {
    /// One slot per header cell; disabled columns hold `None`.
    rules: Vec<Option<SortRule>>,
    ascending: bool,
    column: Option<usize>,
    listeners: Vec<Box<dyn FnMut(&SortEvent)>>,
}

impl std::fmt::Debug for SortableTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableTable")
            .field("rules", &self.rules)
            .field("ascending", &self.ascending)
            .field("column", &self.column)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The single header row of a sortable table, if the markup is well-formed.
pub(crate) fn header_row(table: &Element) -> Option<&Element> {
    let head = table.children_with_tag("thead").into_iter().next()?;
    let mut rows = head.children_with_tag("tr").into_iter();
    let row = rows.next()?;
    if rows.next().is_some() {
        return None;
    }
    Some(row)
}

impl SortableTable {
    /// Bind to a table element.
    ///
    /// Requires exactly one row inside a `thead`; otherwise logs a warning
    /// and returns the error with the tree untouched. If a header carries
    /// the default-column attribute, the initial sort runs immediately
    /// (first such header wins).
    pub fn bind(table: &mut Element) -> Result<Self, BindError> {
        let mut rules = Vec::new();
        let mut default_column = None;

        {
            let Some(head) = table.children_with_tag("thead").into_iter().next() else {
                log::warn!("a table needs to have a <thead> in order to be sortable");
                return Err(BindError::MissingHeader);
            };

            let rows = head.children_with_tag("tr");
            if rows.len() != 1 {
                log::warn!(
                    "a sortable table must only have one row in its header, found {}",
                    rows.len()
                );
                return Err(BindError::HeaderRowCount(rows.len()));
            }

            for (i, cell) in rows[0].child_elements().iter().enumerate() {
                if cell.attr_is(ATTR_SORT_DISABLE, "true") {
                    rules.push(None);
                    continue;
                }

                rules.push(Some(SortRule::from_header(cell)));

                if default_column.is_none() && cell.has_attr(ATTR_SORT_DEFAULT) {
                    default_column = Some(i);
                }
            }
        }

        let mut widget = Self {
            rules,
            ascending: true,
            column: None,
            listeners: Vec::new(),
        };

        if let Some(column) = default_column {
            widget.sort_by_column(table, column);
        }

        Ok(widget)
    }

    /// Register a sort listener. Listeners run after the direction and
    /// active column are decided, before the tree is updated.
    pub fn on_sort(&mut self, listener: impl FnMut(&SortEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// The active column, if any sort has happened yet.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Whether the column exists and is not sort-disabled.
    pub fn is_sortable(&self, column: usize) -> bool {
        matches!(self.rules.get(column), Some(Some(_)))
    }

    pub fn rule(&self, column: usize) -> Option<SortRule> {
        self.rules.get(column).copied().flatten()
    }

    /// Sort by the given column.
    ///
    /// Direction resolution: first sort ever adopts the target header's
    /// default-direction attribute (unset or unrecognized means
    /// descending); re-sorting the active column flips the direction;
    /// switching columns keeps the current direction.
    pub fn sort_by_column(&mut self, table: &mut Element, column: usize) {
        let (default_ascending, column_name) = {
            let header = header_row(table).and_then(|row| row.child_elements().get(column));
            let Some(header) = header else {
                log::warn!("sort requested for a header cell that does not exist: {column}");
                return;
            };
            (
                header
                    .get_attr(ATTR_SORT_DEFAULT)
                    .is_some_and(|dir| dir.eq_ignore_ascii_case("asc")),
                header.text_content().trim().to_string(),
            )
        };

        self.ascending = match self.column {
            None => default_ascending,
            Some(current) if current == column => !self.ascending,
            Some(_) => self.ascending,
        };
        self.column = Some(column);

        let event = SortEvent {
            column,
            column_name,
            ascending: self.ascending,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }

        self.update_headers(table);
        self.sort_rows(table);
    }

    /// Project the direction marker: clear it from every header cell, then
    /// stamp the active one. Runs before the row reorder so observers never
    /// see a marker disagreeing with the order being written.
    fn update_headers(&self, table: &mut Element) {
        let Some(column) = self.column else { return };

        let row = table
            .child_elements_mut()
            .and_then(|children| children.iter_mut().find(|c| c.tag == "thead"))
            .and_then(|head| head.child_elements_mut())
            .and_then(|children| children.iter_mut().find(|c| c.tag == "tr"));
        let Some(cells) = row.and_then(|r| r.child_elements_mut()) else {
            return;
        };

        for cell in cells.iter_mut() {
            cell.remove_attr(ATTR_SORT_MARKER);
        }

        if let Some(cell) = cells.get_mut(column) {
            cell.set_attr(
                ATTR_SORT_MARKER,
                if self.ascending {
                    "ascending"
                } else {
                    "descending"
                },
            );
        }
    }

    /// Re-sort every row-group independently.
    ///
    /// A pure order rewrite: rows are detached, stable-sorted by key, and
    /// re-attached; no row content is touched. `slice::sort_by` is stable,
    /// so equal keys keep their original relative order in either
    /// direction (the comparator returns `Equal` for ties).
    fn sort_rows(&self, table: &mut Element) {
        let Some(column) = self.column else { return };
        let Some(rule) = self.rule(column) else { return };

        let Some(children) = table.child_elements_mut() else {
            log::warn!("a sortable table must have at least one body");
            return;
        };

        let mut groups = 0;
        for section in children.iter_mut().filter(|c| c.tag == "tbody") {
            groups += 1;

            if section.child_elements().is_empty() {
                continue;
            }

            let mut keyed: Vec<(SortKey, Element)> = section
                .take_children()
                .into_iter()
                .map(|row| {
                    let key = row
                        .child_elements()
                        .get(column)
                        .map(|cell| cell_key(cell, rule))
                        .unwrap_or(SortKey::Unordered);
                    (key, row)
                })
                .collect();

            keyed.sort_by(|(a, _), (b, _)| {
                if self.ascending { a.cmp(b) } else { b.cmp(a) }
            });

            section.replace_children(keyed.into_iter().map(|(_, row)| row).collect());
        }

        if groups == 0 {
            log::warn!("a sortable table must have at least one body");
        }
    }
}

/// Extract a row cell's raw key and run it through the column rule.
/// A non-empty override attribute wins over the trimmed cell text.
fn cell_key(cell: &Element, rule: SortRule) -> SortKey {
    let raw = cell
        .get_attr(ATTR_SORT_VALUE)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| cell.text_content().trim().to_string());

    rule.key_for(&raw)
}
