use markdom::{Content, Element, collect_ids_where, find_element, find_element_mut, to_markup};

fn sample_tree() -> Element {
    Element::new("div")
        .id("root")
        .child(
            Element::new("ul").id("list").children(vec![
                Element::new("li").id("a").text("alpha"),
                Element::new("li").id("b").text("beta"),
            ]),
        )
        .child(Element::new("p").id("note").text("done"))
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample_tree();

    assert_eq!(find_element(&root, "root").map(|e| e.tag.as_str()), Some("div"));
    assert_eq!(find_element(&root, "b").map(|e| e.tag.as_str()), Some("li"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = sample_tree();

    find_element_mut(&mut root, "note")
        .unwrap()
        .set_attr("class", "highlight");

    assert!(find_element(&root, "note").unwrap().attr_is("class", "highlight"));
}

#[test]
fn test_collect_ids_where_document_order() {
    let root = sample_tree();

    let ids = collect_ids_where(&root, &|el| el.tag == "li");
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);

    let all = collect_ids_where(&root, &|_| true);
    assert_eq!(all, vec!["root", "list", "a", "b", "note"]);
}

#[test]
fn test_children_with_tag() {
    let root = sample_tree();

    assert_eq!(root.children_with_tag("ul").len(), 1);
    assert_eq!(root.children_with_tag("p").len(), 1);
    assert!(root.children_with_tag("li").is_empty()); // direct children only
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_accessors() {
    let mut el = Element::new("td").attr("data-sort-value", "42");

    assert_eq!(el.get_attr("data-sort-value"), Some("42"));
    assert!(el.has_attr("data-sort-value"));
    assert!(el.attr_is("data-sort-value", "42"));
    assert!(!el.attr_is("data-sort-value", "43"));

    assert_eq!(el.remove_attr("data-sort-value"), Some("42".to_string()));
    assert!(!el.has_attr("data-sort-value"));
    assert_eq!(el.remove_attr("data-sort-value"), None);
}

#[test]
fn test_toggle_bool_attr() {
    let mut el = Element::new("button");

    // Absent toggles on
    el.toggle_bool_attr("aria-expanded");
    assert!(el.attr_is("aria-expanded", "true"));

    el.toggle_bool_attr("aria-expanded");
    assert!(el.attr_is("aria-expanded", "false"));

    // Any value other than "true" toggles on
    el.set_attr("aria-expanded", "banana");
    el.toggle_bool_attr("aria-expanded");
    assert!(el.attr_is("aria-expanded", "true"));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_content_recursive() {
    let root = Element::new("td")
        .child(Element::new("strong").text("10"))
        .child(Element::new("span").text(" points"));

    assert_eq!(root.text_content(), "10 points");
    assert_eq!(Element::new("td").text_content(), "");
}

#[test]
fn test_take_and_replace_children_is_pure_reorder() {
    let mut list = Element::new("ul").children(vec![
        Element::new("li").id("a"),
        Element::new("li").id("b"),
        Element::new("li").id("c"),
    ]);

    let mut rows = list.take_children();
    assert_eq!(list.content, Content::None);
    rows.reverse();
    list.replace_children(rows);

    let ids: Vec<&str> = list.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn test_insert_child_prepends() {
    let mut root = Element::new("div").child(Element::new("p").id("body"));
    root.insert_child(0, Element::new("nav").id("bar"));

    let ids: Vec<&str> = root.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["bar", "body"]);
}

#[test]
fn test_auto_ids_are_unique() {
    let a = Element::new("div");
    let b = Element::new("div");
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

// ============================================================================
// Serializer
// ============================================================================

#[test]
fn test_to_markup_shape() {
    let root = Element::new("div")
        .id("root")
        .attr("role", "tablist")
        .child(Element::new("button").id("btn").text("A & B"));

    let markup = to_markup(&root);
    assert!(markup.starts_with("<div id=\"root\" role=\"tablist\">\n"));
    assert!(markup.contains("  <button id=\"btn\">A &amp; B</button>\n"));
    assert!(markup.ends_with("</div>\n"));
}

#[test]
fn test_to_markup_attributes_sorted() {
    let el = Element::new("th")
        .id("h")
        .attr("data-sort-cast", "number")
        .attr("aria-sort", "ascending");

    assert_eq!(
        to_markup(&el),
        "<th id=\"h\" aria-sort=\"ascending\" data-sort-cast=\"number\"/>\n"
    );
}
