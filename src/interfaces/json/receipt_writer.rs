use crate::domain::transaction::{PaymentResult, TransactionStatus};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Message returned for a request that could not be decoded.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request body";

/// One line of output, as seen by the caller.
#[derive(Debug)]
pub enum Receipt {
    /// The request could not be decoded and never reached the processor.
    InvalidRequest,
    Processed(PaymentResult),
}

#[derive(Serialize)]
struct InvalidRequestReceipt {
    status: TransactionStatus,
    message: &'static str,
}

/// Writes receipts as newline-delimited JSON.
pub struct ReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        match receipt {
            Receipt::InvalidRequest => serde_json::to_writer(
                &mut self.writer,
                &InvalidRequestReceipt {
                    status: TransactionStatus::Failed,
                    message: INVALID_REQUEST_MESSAGE,
                },
            )?,
            Receipt::Processed(result) => serde_json::to_writer(&mut self.writer, result)?,
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::{REJECTION_MESSAGE, Rejection};
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_one_line_per_receipt() {
        let mut buffer = Vec::new();
        let mut writer = ReceiptWriter::new(&mut buffer);

        writer.write_receipt(&Receipt::InvalidRequest).unwrap();
        writer
            .write_receipt(&Receipt::Processed(PaymentResult::Rejected(
                Rejection::unregistered_phone(dec!(5)),
            )))
            .unwrap();
        writer.flush().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["status"], "FAILED");
        assert_eq!(lines[0]["message"], INVALID_REQUEST_MESSAGE);
        assert!(lines[0].get("id").is_none());
        assert_eq!(lines[1]["message"], REJECTION_MESSAGE);
        assert_eq!(lines[1]["amount"].as_f64(), Some(5.0));
    }
}
