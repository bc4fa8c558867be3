//! Explicit document scan: one pass over a root element that binds every
//! recognized widget and returns the handles. This replaces the original
//! load-time whole-page query - construction is explicit, so hosts (and
//! tests) can enhance any subtree in isolation.

use markdom::{Element, collect_ids_where, find_element_mut};

use crate::disclosure::{Disclosure, MENU_TOGGLE_ID};
use crate::table::{ATTR_SORTABLE, SortableTable};
use crate::tablist::{ATTR_ROLE, ROLE_TABLIST, TabList};

/// A widget handle paired with the id of the element it is bound to.
/// The host routes clicks and keys through the id.
#[derive(Debug)]
pub struct Bound<W> {
    pub element_id: String,
    pub widget: W,
}

/// Everything a scan bound.
#[derive(Debug, Default)]
pub struct Enhanced {
    pub tables: Vec<Bound<SortableTable>>,
    pub tablists: Vec<Bound<TabList>>,
    pub disclosures: Vec<Bound<Disclosure>>,
}

/// Scan the tree and bind every widget whose markup matches.
///
/// Elements with malformed markup are skipped (the bind already logged
/// why); the rest initialize normally.
pub fn enhance_all(root: &mut Element) -> Enhanced {
    let mut enhanced = Enhanced::default();

    let table_ids = collect_ids_where(root, &|el| {
        el.tag == "table" && el.attr_is(ATTR_SORTABLE, "true")
    });
    for id in table_ids {
        let Some(element) = find_element_mut(root, &id) else {
            continue;
        };
        match SortableTable::bind(element) {
            Ok(widget) => enhanced.tables.push(Bound {
                element_id: id,
                widget,
            }),
            Err(err) => log::warn!("skipping sortable table {id}: {err}"),
        }
    }

    let tablist_ids = collect_ids_where(root, &|el| el.attr_is(ATTR_ROLE, ROLE_TABLIST));
    for id in tablist_ids {
        let Some(element) = find_element_mut(root, &id) else {
            continue;
        };
        match TabList::bind(element) {
            Ok(widget) => enhanced.tablists.push(Bound {
                element_id: id,
                widget,
            }),
            Err(err) => log::warn!("skipping tab list {id}: {err}"),
        }
    }

    if let Some(element) = find_element_mut(root, MENU_TOGGLE_ID) {
        let widget = Disclosure::bind(element);
        enhanced.disclosures.push(Bound {
            element_id: MENU_TOGGLE_ID.to_string(),
            widget,
        });
    }

    enhanced
}
