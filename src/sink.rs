//! Destinations for rendered table rows

/// Receives one rendered row at a time
pub trait LineSink {
    /// Emit a row as `"{name} | {delta} | {cumulative}"`
    fn emit_line(&mut self, name: &str, delta: &str, cumulative: &str);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit_line(&mut self, name: &str, delta: &str, cumulative: &str) {
        (**self).emit_line(name, delta, cumulative)
    }
}

/// Join three cells into one table line
pub fn format_line(name: &str, delta: &str, cumulative: &str) -> String {
    format!("{} | {} | {}", name, delta, cumulative)
}

/// Logs each row through `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn emit_line(&mut self, name: &str, delta: &str, cumulative: &str) {
        tracing::info!("{} | {} | {}", name, delta, cumulative);
    }
}

/// Keeps rendered lines in memory
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    lines: Vec<String>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines received so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the received lines, leaving the sink empty
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineSink for CollectingSink {
    fn emit_line(&mut self, name: &str, delta: &str, cumulative: &str) {
        self.lines.push(format_line(name, delta, cumulative));
    }
}
