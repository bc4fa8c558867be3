use thiserror::Error;

/// Why a widget refused to bind to its markup.
///
/// Binding failures are non-fatal: the widget logs a warning, the tree is
/// left unmodified, and the document scan simply skips the element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("a table needs a <thead> in order to be sortable")]
    MissingHeader,

    #[error("a sortable table must have exactly one header row, found {0}")]
    HeaderRowCount(usize),

    #[error("a tab list needs at least one panel with data-role=\"tab\"")]
    NoTabPanels,
}
