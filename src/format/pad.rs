//! Space padding for table cells

use crate::TableError;

/// Display width of a cell, in `char`s
pub fn text_width(value: &str) -> usize {
    value.chars().count()
}

/// Prepend spaces until `value` is `width` wide.
///
/// Does nothing if `value` is already at least `width` wide.
pub fn pad_left(value: &mut String, width: usize) {
    let current = text_width(value);
    if current >= width {
        return;
    }
    value.insert_str(0, &" ".repeat(width - current));
}

/// Append spaces until `value` is `width` wide.
///
/// Does nothing if `value` is already at least `width` wide.
pub fn pad_right(value: &mut String, width: usize) {
    let current = text_width(value);
    if current >= width {
        return;
    }
    value.extend(std::iter::repeat(' ').take(width - current));
}

/// Right-pad every cell of a column to the width of its widest cell.
///
/// Returns the common width. Cell order is left untouched.
pub fn pad_column_to_max(values: &mut [String]) -> Result<usize, TableError> {
    let width = values
        .iter()
        .map(|value| text_width(value))
        .max()
        .ok_or(TableError::EmptyColumn)?;

    for value in values.iter_mut() {
        pad_right(value, width);
    }
    Ok(width)
}
