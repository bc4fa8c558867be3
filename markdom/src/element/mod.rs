mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of all elements matching the predicate, in document order.
pub fn collect_ids_where(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Vec<String> {
    let mut result = Vec::new();
    collect_recursive(root, pred, &mut result);
    result
}

fn collect_recursive(element: &Element, pred: &dyn Fn(&Element) -> bool, result: &mut Vec<String>) {
    if pred(element) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_recursive(child, pred, result);
        }
    }
}
