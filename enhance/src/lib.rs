pub mod disclosure;
pub mod error;
pub mod events;
pub mod scan;
pub mod table;
pub mod tablist;

pub mod prelude {
    pub use crate::disclosure::Disclosure;
    pub use crate::error::BindError;
    pub use crate::events::{EventResult, SortEvent, TabShowEvent};
    pub use crate::scan::{Bound, Enhanced, enhance_all};
    pub use crate::table::{SortKey, SortRule, SortableTable, render_table};
    pub use crate::tablist::TabList;
}
