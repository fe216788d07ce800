//! # Checkpoint timing tables
//!
//! Record a sequence of named checkpoints along one execution path and, when
//! the recording ends, log an aligned table of per-step and cumulative time.
//!
//! ## Output
//!
//! ```text
//!                   | Delta (ms) | Cumulative (ms)
//! Start of function | 0          | 0
//!   Step 1          | 50         | 50
//!   Step 2          | 708        | 759
//!   Step 3          | 20         | 779
//!   Total           | 0          | 779
//! ```
//!
//! 1. **Construction** records the initial checkpoint
//! 2. **`add_event`** appends checkpoints in call order
//! 3. **Finalization** (`finish` or drop) appends `Total` and emits one line
//!    per row through a [`LineSink`], `tracing` at info level by default
//!
//! ## Usage Example
//!
//! ```
//! use event_logger::{EventRecorder, Microseconds};
//!
//! let mut recorder = EventRecorder::<Microseconds>::new("parse");
//! let tokens: Vec<_> = "a b c".split(' ').collect();
//! recorder.add_event("tokenize");
//! assert_eq!(tokens.len(), 3);
//! recorder.add_event("check");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod clock;     // Timestamp sources
pub mod format;    // Column padding
pub mod recorder;  // Checkpoint recording and table rendering
pub mod sink;      // Row destinations
pub mod unit;      // Duration resolutions

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{pad_column_to_max, pad_left, pad_right};
pub use recorder::{Event, EventRecorder, EventTable, TableConfig};
pub use sink::{CollectingSink, LineSink, TracingSink};
pub use unit::{
    unit_symbol, DurationUnit, Microseconds, Milliseconds, Nanoseconds, ParseResolutionError,
    Resolution, Seconds,
};

use thiserror::Error;

/// Errors raised while building a checkpoint table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column with no cells has no width to pad to
    #[error("cannot pad an empty column")]
    EmptyColumn,

    /// A table needs at least the initial checkpoint
    #[error("no checkpoints recorded")]
    NoEvents,
}
