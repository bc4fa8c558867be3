/// Whether a handler consumed the input or left it alone.
///
/// `Consumed` is the signal for the host to suppress whatever default
/// action the input would otherwise trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// Broadcast when a column sort has been decided.
///
/// Listeners run after the direction and active column are resolved but
/// before the direction marker and row order are written back to the tree,
/// so `ascending` is the *resulting* direction of the sort about to happen.
#[derive(Debug, Clone, PartialEq)]
pub struct SortEvent {
    pub column: usize,
    pub column_name: String,
    pub ascending: bool,
}

/// Broadcast when a tab header is activated, before the panel visibility
/// projection is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabShowEvent {
    pub index: usize,
    pub panel_id: String,
    pub header_id: String,
}
