//! Terminal presentation for memory match.
//!
//! [`TableModel`] folds round events into what the player sees,
//! [`TableView`] lays that out as styled rows, and [`TerminalRenderer`]
//! writes the rows to the terminal with crossterm.

pub mod name;
pub mod renderer;
pub mod table;
pub mod view;

pub use memory_match_input as input;
pub use memory_match_types as types;

pub use name::{NameField, MAX_NAME_LEN};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table::TableModel;
pub use view::{Line, Span, TableView, Tone};
