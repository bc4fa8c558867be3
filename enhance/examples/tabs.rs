//! Interactive tab list demo.
//!
//! Left/Right move the roving focus with wraparound, Home/End jump to the
//! first/last header, Space or Enter activates the focused tab, 'q' quits.
//! Events go to tabs.log.

use std::fs::File;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use enhance::prelude::*;
use enhance::tablist::{ATTR_ROLE, ATTR_TAB_DESC, ATTR_TAB_HEADING, ROLE_TAB, ROLE_TABLIST};
use log::LevelFilter;
use markdom::{Element, Key, Modifiers, to_markup};
use simplelog::{Config, WriteLogger};

fn main() -> std::io::Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("tabs.log")?,
    )
    .expect("logger init");

    let mut root = Element::new("div")
        .id("downloads")
        .attr(ATTR_ROLE, ROLE_TABLIST)
        .attr(ATTR_TAB_DESC, "Download options")
        .child(panel("linux", "Linux", "Grab the tarball."))
        .child(panel("macos", "macOS", "Grab the dmg."))
        .child(panel("windows", "Windows", "Grab the installer."));

    let mut tabs = TabList::bind(&mut root).expect("container has panels");
    tabs.on_show(|event| {
        log::info!("tab shown: {} -> {}", event.index, event.panel_id);
    });

    draw(&root, &tabs);

    loop {
        if let CrosstermEvent::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let modifiers: Modifiers = key_event.modifiers.into();
            if !modifiers.none() {
                continue;
            }

            let key: Key = key_event.code.into();
            if key == Key::Char('q') {
                return Ok(());
            }

            if tabs.handle_key(&mut root, key) == EventResult::Consumed {
                draw(&root, &tabs);
            }
        }
    }
}

fn draw(root: &Element, tabs: &TabList) {
    println!("{}", to_markup(root));
    println!(
        "selected: {}  focused: {}\n",
        tabs.selected(),
        tabs.focused_index()
    );
}

fn panel(id: &str, heading: &str, body: &str) -> Element {
    Element::new("section")
        .id(id)
        .attr(ATTR_ROLE, ROLE_TAB)
        .attr(ATTR_TAB_HEADING, heading)
        .child(Element::new("p").text(body))
}
