//! Three-column checkpoint table
//!
//! ```text
//!                   | Delta (ms) | Cumulative (ms)
//! Start of function | 0          | 0
//!   Step 1          | 50         | 50
//!   Step 2          | 708        | 759
//!   Step 3          | 20         | 779
//!   Total           | 0          | 779
//! ```

use super::{Event, TableConfig};
use crate::clock::signed_nanos;
use crate::format::pad_column_to_max;
use crate::sink::{format_line, LineSink};
use crate::unit::Resolution;
use crate::TableError;

/// Rendered name, delta and cumulative columns.
///
/// Every column holds a header cell followed by one cell per event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventTable {
    resolution: Resolution,
    names: Vec<String>,
    deltas: Vec<String>,
    cumulatives: Vec<String>,
}

impl EventTable {
    /// Render `events` at `resolution`
    pub fn build(
        events: &[Event],
        resolution: Resolution,
        config: &TableConfig,
    ) -> Result<Self, TableError> {
        let first = events.first().ok_or(TableError::NoEvents)?;

        let mut names = Vec::with_capacity(events.len() + 1);
        names.push(String::new());
        names.push(first.name().to_string());
        names.extend(
            events[1..]
                .iter()
                .map(|event| format!("{}{}", config.indent, event.name())),
        );
        pad_column_to_max(&mut names)?;

        let mut deltas = Vec::with_capacity(events.len() + 1);
        deltas.push(format!("Delta ({})", resolution.symbol()));
        deltas.push(String::from("0"));
        deltas.extend(events.windows(2).map(|pair| {
            let nanos = signed_nanos(pair[0].timestamp(), pair[1].timestamp());
            resolution.truncate(nanos).to_string()
        }));
        pad_column_to_max(&mut deltas)?;

        let start = first.timestamp();
        let mut cumulatives = Vec::with_capacity(events.len() + 1);
        cumulatives.push(format!("Cumulative ({})", resolution.symbol()));
        cumulatives.extend(events.iter().map(|event| {
            resolution
                .truncate(signed_nanos(start, event.timestamp()))
                .to_string()
        }));
        if config.pad_cumulative {
            pad_column_to_max(&mut cumulatives)?;
        }

        Ok(Self {
            resolution,
            names,
            deltas,
            cumulatives,
        })
    }

    /// Resolution the durations were truncated to
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no rows; `build` always adds a header and one
    /// event row, so a built table is never empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name column, header first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Delta column, header first
    pub fn deltas(&self) -> &[String] {
        &self.deltas
    }

    /// Cumulative column, header first
    pub fn cumulatives(&self) -> &[String] {
        &self.cumulatives
    }

    /// Iterate rows as `(name, delta, cumulative)` cells
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.names
            .iter()
            .zip(&self.deltas)
            .zip(&self.cumulatives)
            .map(|((name, delta), cumulative)| {
                (name.as_str(), delta.as_str(), cumulative.as_str())
            })
    }

    /// Rows joined into lines
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .map(|(name, delta, cumulative)| format_line(name, delta, cumulative))
            .collect()
    }

    /// Hand every row to `sink`, header first
    pub fn emit<S: LineSink + ?Sized>(&self, sink: &mut S) {
        for (name, delta, cumulative) in self.rows() {
            sink.emit_line(name, delta, cumulative);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use std::time::Duration;

    fn events_at(clock: &ManualClock, steps: &[(&str, u64)]) -> Vec<Event> {
        steps
            .iter()
            .map(|&(name, millis)| {
                clock.set(Duration::from_millis(millis));
                Event::new(name, clock.now())
            })
            .collect()
    }

    #[test]
    fn test_reference_layout() {
        let clock = ManualClock::new();
        let events = events_at(
            &clock,
            &[
                ("Start of function", 0),
                ("Step 1", 50),
                ("Step 2", 759),
                ("Step 3", 779),
                ("Total", 779),
            ],
        );

        let table = EventTable::build(&events, Resolution::Milliseconds, &TableConfig::default())
            .expect("table renders");

        assert_eq!(
            table.lines(),
            vec![
                "                  | Delta (ms) | Cumulative (ms)",
                "Start of function | 0          | 0",
                "  Step 1          | 50         | 50",
                "  Step 2          | 709        | 759",
                "  Step 3          | 20         | 779",
                "  Total           | 0          | 779",
            ]
        );
    }

    #[test]
    fn test_padded_cumulative() {
        let clock = ManualClock::new();
        let events = events_at(&clock, &[("Start", 0), ("Total", 2_000)]);
        let config = TableConfig::default().with_pad_cumulative(true);

        let table = EventTable::build(&events, Resolution::Seconds, &config).expect("table renders");

        assert_eq!(table.cumulatives(), ["Cumulative (s)", "0             ", "2             "]);
    }

    #[test]
    fn test_truncation_per_event_pair() {
        let clock = ManualClock::new();
        let events = events_at(&clock, &[("a", 0), ("b", 1_999), ("c", 2_998)]);

        let table = EventTable::build(&events, Resolution::Seconds, &TableConfig::default())
            .expect("table renders");

        // 1.999s and 0.999s truncate separately, cumulative 2.998s truncates to 2
        assert_eq!(table.deltas()[2].trim_end(), "1");
        assert_eq!(table.deltas()[3].trim_end(), "0");
        assert_eq!(table.cumulatives()[3], "2");
    }

    #[test]
    fn test_backwards_clock_gives_negative_delta() {
        let clock = ManualClock::new();
        let events = events_at(&clock, &[("a", 10), ("b", 4)]);

        let table = EventTable::build(&events, Resolution::Milliseconds, &TableConfig::default())
            .expect("table renders");

        assert_eq!(table.deltas()[2].trim_end(), "-6");
        assert_eq!(table.cumulatives()[2], "-6");
    }

    #[test]
    fn test_single_event_table() {
        let clock = ManualClock::new();
        let events = events_at(&clock, &[("Start", 0)]);

        let table = EventTable::build(&events, Resolution::Nanoseconds, &TableConfig::default())
            .expect("table renders");

        assert!(!table.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table.lines()[1], "Start | 0          | 0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_table() {
        let clock = ManualClock::new();
        let events = events_at(&clock, &[("Start", 0), ("Step", 7), ("Total", 9)]);
        let table = EventTable::build(&events, Resolution::Milliseconds, &TableConfig::default())
            .expect("table renders");

        let value = serde_json::to_value(&table).expect("table serializes");

        assert_eq!(value["resolution"], "Milliseconds");
        assert_eq!(value["names"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["deltas"][2], "7         ");
        assert_eq!(value["cumulatives"][3], "9");
    }

    #[test]
    fn test_no_events() {
        assert!(matches!(
            EventTable::build(&[], Resolution::Nanoseconds, &TableConfig::default()),
            Err(TableError::NoEvents)
        ));
    }
}
