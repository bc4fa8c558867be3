//! Plain-text projection of a table element: an aligned grid with the
//! direction marker rendered as an arrow on the active header.

use markdom::Element;
use markdom::text::{display_width, pad_to_width};

use super::ATTR_SORT_MARKER;
use super::state::header_row;

/// Render the table as an aligned text grid.
///
/// One line per row, a dashed separator under the header and between
/// row-groups. Returns an empty string when the table has no usable
/// header row.
pub fn render_table(table: &Element) -> String {
    let Some(head) = header_row(table) else {
        return String::new();
    };

    let headers: Vec<String> = head
        .child_elements()
        .iter()
        .map(|cell| {
            let mut label = cell.text_content().trim().to_string();
            match cell.get_attr(ATTR_SORT_MARKER) {
                Some("ascending") => label.push_str(" ▲"),
                Some("descending") => label.push_str(" ▼"),
                _ => {}
            }
            label
        })
        .collect();

    let groups: Vec<Vec<Vec<String>>> = table
        .children_with_tag("tbody")
        .into_iter()
        .map(|section| {
            section
                .child_elements()
                .iter()
                .map(|row| {
                    row.child_elements()
                        .iter()
                        .map(|cell| cell.text_content().trim().to_string())
                        .collect()
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in groups.iter().flatten() {
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.push(0);
            }
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let separator: String = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = String::new();
    out.push_str(&format_row(&headers, &widths));
    out.push('\n');
    for group in &groups {
        out.push_str(&separator);
        out.push('\n');
        for row in group {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
    }

    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            pad_to_width(cell, *width)
        })
        .collect();
    padded.join(" | ").trim_end().to_string()
}
