pub mod element;
pub mod event;
pub mod focus;
pub mod markup;
pub mod text;

pub use element::{Content, Element, collect_ids_where, find_element, find_element_mut};
pub use event::{Key, Modifiers};
pub use focus::{FocusState, wrap_index};
pub use markup::to_markup;
