use enhance::disclosure::{ATTR_EXPANDED, MENU_TOGGLE_ID};
use enhance::prelude::*;
use enhance::table::ATTR_SORTABLE;
use enhance::tablist::{ATTR_ROLE, ATTR_TAB_HEADING, ROLE_TAB, ROLE_TABLIST};
use markdom::{Element, find_element, find_element_mut};

fn good_table(id: &str) -> Element {
    Element::new("table")
        .id(id)
        .attr(ATTR_SORTABLE, "true")
        .child(
            Element::new("thead")
                .child(Element::new("tr").child(Element::new("th").text("Name"))),
        )
        .child(
            Element::new("tbody")
                .child(Element::new("tr").child(Element::new("td").text("a")))
                .child(Element::new("tr").child(Element::new("td").text("b"))),
        )
}

fn page() -> Element {
    Element::new("body")
        .id("page")
        .child(Element::new("button").id(MENU_TOGGLE_ID).text("Menu"))
        .child(good_table("scores"))
        // Malformed: sortable flag but no thead
        .child(
            Element::new("table")
                .id("broken")
                .attr(ATTR_SORTABLE, "true")
                .child(Element::new("tbody")),
        )
        // Not flagged as sortable: ignored by the scan
        .child(good_table("plain").attr(ATTR_SORTABLE, "false"))
        .child(
            Element::new("div")
                .id("tabs")
                .attr(ATTR_ROLE, ROLE_TABLIST)
                .child(
                    Element::new("section")
                        .id("one")
                        .attr(ATTR_ROLE, ROLE_TAB)
                        .attr(ATTR_TAB_HEADING, "One"),
                ),
        )
}

#[test]
fn test_scan_binds_matching_widgets() {
    let mut root = page();
    let enhanced = enhance_all(&mut root);

    assert_eq!(enhanced.tables.len(), 1, "malformed and unflagged tables skipped");
    assert_eq!(enhanced.tables[0].element_id, "scores");
    assert_eq!(enhanced.tablists.len(), 1);
    assert_eq!(enhanced.tablists[0].element_id, "tabs");
    assert_eq!(enhanced.disclosures.len(), 1);
}

#[test]
fn test_scan_leaves_malformed_table_untouched() {
    let mut root = page();
    let before = find_element(&root, "broken").unwrap().clone();

    enhance_all(&mut root);
    assert_eq!(find_element(&root, "broken").unwrap(), &before);
}

#[test]
fn test_scan_on_bare_tree_binds_nothing() {
    let mut root = Element::new("body").child(Element::new("p").text("hello"));
    let enhanced = enhance_all(&mut root);

    assert!(enhanced.tables.is_empty());
    assert!(enhanced.tablists.is_empty());
    assert!(enhanced.disclosures.is_empty());
}

#[test]
fn test_bound_widgets_operate_through_their_element_id() {
    let mut root = page();
    let mut enhanced = enhance_all(&mut root);

    let bound = &mut enhanced.tables[0];
    let table = find_element_mut(&mut root, &bound.element_id).unwrap();
    assert_eq!(
        bound.widget.handle_header_click(table, 0),
        EventResult::Consumed
    );

    let rows: Vec<String> = find_element(&root, "scores")
        .unwrap()
        .children_with_tag("tbody")[0]
        .child_elements()
        .iter()
        .map(|row| row.text_content())
        .collect();
    assert_eq!(rows, vec!["b", "a"], "first click sorts descending");
}

#[test]
fn test_disclosure_toggle_round_trip() {
    let mut root = page();
    let mut enhanced = enhance_all(&mut root);

    let toggle = find_element(&root, MENU_TOGGLE_ID).unwrap();
    assert!(toggle.attr_is(ATTR_EXPANDED, "false"), "bind seeds the attribute");

    let bound = &mut enhanced.disclosures[0];
    let el = find_element_mut(&mut root, MENU_TOGGLE_ID).unwrap();
    assert_eq!(bound.widget.handle_click(el), EventResult::Consumed);
    assert!(el.attr_is(ATTR_EXPANDED, "true"));
    assert!(bound.widget.expanded(el));

    bound.widget.handle_click(el);
    assert!(el.attr_is(ATTR_EXPANDED, "false"));
}
