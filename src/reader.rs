use crate::error::{CalcError, Result};
use crate::token::{KeyRecord, Token};
use std::io::Read;

/// Reads keystrokes from a CSV key-tape.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Token>`, with
/// whitespace trimming and flexible record lengths handled automatically.
pub struct TokenReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TokenReader<R> {
    /// Creates a new `TokenReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes keystrokes, so
    /// long tapes stream without being loaded whole.
    pub fn keys(self) -> impl Iterator<Item = Result<Token>> {
        self.reader
            .into_deserialize::<KeyRecord>()
            .map(|result| result.map(|record| record.key).map_err(CalcError::from))
    }
}
