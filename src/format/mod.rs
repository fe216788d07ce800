//! Column alignment
//!
//! Pads cells with spaces so that every row of a column lines up.
//! Widths are counted in `char`s, not bytes.

mod pad;

pub use pad::{pad_column_to_max, pad_left, pad_right, text_width};
