//! Sortable table widget - one-column-at-a-time sorting over table markup.
//!
//! The widget binds to a `table` element and keeps its own state (active
//! column, direction, per-column rules); the tree only ever receives
//! projections of that state: the `aria-sort` marker on the active header
//! and the row order inside each `tbody`.
//!
//! # Markup contract
//!
//! ```text
//! <table data-sortable="true">
//!   <thead>
//!     <tr>                          exactly one header row
//!       <th>Name</th>
//!       <th data-sort-cast="number" data-sort-default="asc">Score</th>
//!       <th data-sort-disable="true">Actions</th>
//!     </tr>
//!   </thead>
//!   <tbody>                         one or more row-groups, sorted
//!     <tr>                          independently under the shared header
//!       <td>Alice</td>
//!       <td data-sort-value="12">a dozen</td>
//!       <td>...</td>
//!     </tr>
//!   </tbody>
//! </table>
//! ```
//!
//! A header carrying `data-sort-default` triggers an initial sort at bind
//! time, adopting the attribute's direction (`asc`, case-insensitive;
//! anything else means descending).

mod events;
mod render;
mod rule;
mod state;

pub use render::render_table;
pub use rule::{SortKey, SortRule};
pub use state::SortableTable;

/// Marks a table for pickup by the document scan.
pub const ATTR_SORTABLE: &str = "data-sortable";
/// Header cell: excludes the column from sorting entirely.
pub const ATTR_SORT_DISABLE: &str = "data-sort-disable";
/// Header cell: `"number"` casts keys to numbers before comparison.
pub const ATTR_SORT_CAST: &str = "data-sort-cast";
/// Header cell: `"true"` folds string keys to lowercase.
pub const ATTR_SORT_CASE_INSENSITIVE: &str = "data-sort-case-insensitive";
/// Header cell: initial sort column, value is the starting direction.
pub const ATTR_SORT_DEFAULT: &str = "data-sort-default";
/// Body cell: explicit sort key overriding the cell text.
pub const ATTR_SORT_VALUE: &str = "data-sort-value";
/// Direction marker stamped on the active header cell.
pub const ATTR_SORT_MARKER: &str = "aria-sort";
