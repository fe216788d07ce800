//! Checkpoint recorder
//!
//! Captures named timestamps along one execution path and logs a timing
//! table when the recording ends:
//!
//! ```
//! use event_logger::{EventRecorder, Milliseconds};
//!
//! let mut recorder = EventRecorder::<Milliseconds>::new("Start of function");
//! // step 1
//! recorder.add_event("Step 1");
//! // step 2
//! recorder.add_event("Step 2");
//! // table is logged here, or on drop
//! recorder.finish();
//! ```

mod config;
mod event;
mod table;

pub use config::TableConfig;
pub use event::Event;
pub use table::EventTable;

use std::marker::PhantomData;
use std::time::Duration;

use crate::clock::{signed_nanos, Clock, SystemClock};
use crate::sink::{LineSink, TracingSink};
use crate::unit::{DurationUnit, Resolution};
use crate::TableError;

/// Records checkpoints and emits the timing table exactly once.
///
/// The table goes to the sink either on [`finish`](Self::finish) or when the
/// recorder is dropped, including during unwinding.
#[derive(Debug)]
pub struct EventRecorder<U: DurationUnit, C: Clock = SystemClock, S: LineSink = TracingSink> {
    events: Vec<Event>,
    clock: C,
    sink: S,
    config: TableConfig,
    finished: bool,
    unit: PhantomData<U>,
}

impl<U: DurationUnit> EventRecorder<U> {
    /// Start recording with the system clock, logging through `tracing`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parts(name, SystemClock, TracingSink, TableConfig::default())
    }
}

impl<U: DurationUnit, C: Clock, S: LineSink> EventRecorder<U, C, S> {
    /// Start recording with an explicit clock, sink and layout
    pub fn with_parts(name: impl Into<String>, clock: C, sink: S, config: TableConfig) -> Self {
        let mut recorder = Self {
            events: Vec::new(),
            clock,
            sink,
            config,
            finished: false,
            unit: PhantomData,
        };
        recorder.add_event(name);
        recorder
    }

    /// Record a checkpoint at the current time
    pub fn add_event(&mut self, name: impl Into<String>) {
        let timestamp = self.clock.now();
        self.events.push(Event::new(name, timestamp));
    }

    /// Checkpoints recorded so far, oldest first
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of checkpoints recorded so far
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no checkpoint is held; construction records one, so a live
    /// recorder is never empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time since the initial checkpoint, zero if the clock stepped back
    pub fn elapsed(&self) -> Duration {
        match self.events.first() {
            Some(first) => {
                let nanos = signed_nanos(first.timestamp(), self.clock.now()).max(0);
                Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
            }
            None => Duration::ZERO,
        }
    }

    /// Table layout in use
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Resolution of the rendered durations
    pub fn resolution(&self) -> Resolution {
        U::RESOLUTION
    }

    /// Render the checkpoints recorded so far, without the final checkpoint
    pub fn table(&self) -> Result<EventTable, TableError> {
        EventTable::build(&self.events, U::RESOLUTION, &self.config)
    }

    /// Append the final checkpoint and emit the table
    pub fn finish(mut self) {
        self.finalize();
    }

    fn finalize(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let label = self.config.total_label.clone();
        self.add_event(label);

        match self.table() {
            Ok(table) => table.emit(&mut self.sink),
            Err(err) => tracing::error!(error = %err, "failed to render checkpoint table"),
        }
    }
}

impl<U: DurationUnit, C: Clock, S: LineSink> Drop for EventRecorder<U, C, S> {
    fn drop(&mut self) {
        self.finalize();
    }
}
