use crate::engine::CalculatorEngine;
use crate::error::Result;
use crate::token::Token;
use std::io::Write;

/// Writes a per-keystroke CSV trace: one `key,display,pending` row after each
/// processed token, so a rendering layer (or a test) can replay the whole
/// session.
pub struct TraceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(target),
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(["key", "display", "pending"])?;
        Ok(())
    }

    /// Records the engine state right after `key` was processed.
    pub fn write_step(&mut self, key: Token, engine: &CalculatorEngine) -> Result<()> {
        let pending = engine
            .pending_operation()
            .map(|op| op.symbol())
            .unwrap_or("");
        self.writer
            .write_record([key.to_string().as_str(), engine.display(), pending])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
