//! Sortable table demo.
//!
//! Builds table markup the way a page would ship it, binds the widget, and
//! prints the text projection after each header click.

use enhance::prelude::*;
use enhance::table::{ATTR_SORT_CAST, ATTR_SORT_DEFAULT, ATTR_SORTABLE};
use log::LevelFilter;
use markdom::Element;
use simplelog::{Config, SimpleLogger};

fn main() {
    SimpleLogger::init(LevelFilter::Warn, Config::default()).expect("logger init");

    let mut table = Element::new("table")
        .attr(ATTR_SORTABLE, "true")
        .child(
            Element::new("thead").child(
                Element::new("tr")
                    .child(Element::new("th").text("Player"))
                    .child(
                        Element::new("th")
                            .attr(ATTR_SORT_CAST, "number")
                            .attr(ATTR_SORT_DEFAULT, "desc")
                            .text("Score"),
                    ),
            ),
        )
        .child(
            Element::new("tbody")
                .child(row("allejo", "33"))
                .child(row("blast", "2"))
                .child(row("trepan", "10")),
        );

    let mut widget = SortableTable::bind(&mut table).expect("well-formed table");
    widget.on_sort(|event| {
        println!(
            "-- sorted by column {} ({}) {}",
            event.column,
            event.column_name,
            if event.ascending { "ascending" } else { "descending" }
        );
    });

    println!("after bind (default column, descending):");
    println!("{}", render_table(&table));

    widget.handle_header_click(&mut table, 1);
    println!("{}", render_table(&table));

    widget.handle_header_click(&mut table, 0);
    println!("{}", render_table(&table));
}

fn row(name: &str, score: &str) -> Element {
    Element::new("tr")
        .child(Element::new("td").text(name))
        .child(Element::new("td").text(score))
}
