//! Table layout options

/// Layout of the rendered checkpoint table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Prefix for every checkpoint name after the first
    pub indent: String,

    /// Name of the checkpoint appended on finalization
    pub total_label: String,

    /// Right-pad the cumulative column like the other two
    pub pad_cumulative: bool,
}

impl TableConfig {
    /// Replace the name indent
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Replace the final checkpoint label
    pub fn with_total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }

    /// Pad (or stop padding) the cumulative column
    pub fn with_pad_cumulative(mut self, pad: bool) -> Self {
        self.pad_cumulative = pad;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            indent: String::from("  "),
            total_label: String::from("Total"),
            pad_cumulative: false,
        }
    }
}
