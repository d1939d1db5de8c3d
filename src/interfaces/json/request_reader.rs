use crate::domain::transaction::PaymentRequest;
use crate::error::{Result, WalletError};
use std::io::{BufRead, BufReader, Read};

/// Reads payment requests from a newline-delimited JSON source.
///
/// Each non-blank line is decoded on its own, so a malformed line surfaces as
/// a [`WalletError::Json`] for that line only and the stream carries on. A read
/// failure yields one [`WalletError::Io`] and ends the stream.
pub struct RequestReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// This allows for processing an unbounded stream (e.g., Stdin) without
    /// loading it into memory.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .lines()
            .scan(false, |failed, line| {
                if *failed {
                    return None;
                }
                *failed = line.is_err();
                Some(line)
            })
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| -> Result<PaymentRequest> {
                let line = line?;
                serde_json::from_str(&line).map_err(WalletError::from)
            })
    }
}
