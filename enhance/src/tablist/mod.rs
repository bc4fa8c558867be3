//! Accessible tab list widget - single-selection panels with a synthesized
//! header bar and roving-tabindex keyboard navigation.
//!
//! # Markup contract
//!
//! ```text
//! <div data-role="tablist" data-tab-desc="Download options">
//!   <section data-role="tab" id="linux" data-tab-heading="Linux">...</section>
//!   <section data-role="tab" id="macos" data-tab-heading="macOS">...</section>
//! </div>
//! ```
//!
//! Binding synthesizes one header button per panel and prepends the header
//! bar to the container. Panel 0 starts visible; only its header is
//! reachable through sequential keyboard navigation (`tabindex="0"`), the
//! rest are reached with the arrow keys.

mod events;
mod state;

pub use state::TabList;

/// Role attribute shared by containers and panels.
pub const ATTR_ROLE: &str = "data-role";
/// Container role value picked up by the document scan.
pub const ROLE_TABLIST: &str = "tablist";
/// Panel role value.
pub const ROLE_TAB: &str = "tab";
/// Container: accessible description for the synthesized header bar.
pub const ATTR_TAB_DESC: &str = "data-tab-desc";
/// Panel: label for its synthesized header button.
pub const ATTR_TAB_HEADING: &str = "data-tab-heading";
/// Suffix appended to a panel id to form its header button id.
pub const HEADER_ID_SUFFIX: &str = "-tabheader";
