use clap::Parser;
use ewallet_ledger::application::processor::PaymentProcessor;
use ewallet_ledger::config::Config;
use ewallet_ledger::domain::ports::LedgerStoreBox;
use ewallet_ledger::domain::transaction::PaymentResult;
use ewallet_ledger::error::{Result as WalletResult, WalletError};
use ewallet_ledger::infrastructure::in_memory::InMemoryLedger;
use ewallet_ledger::interfaces::json::receipt_writer::{Receipt, ReceiptWriter};
use ewallet_ledger::interfaces::json::request_reader::RequestReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited JSON payment requests. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// JSON file with the registered phone numbers (optional). Uses the built-in list otherwise.
    #[arg(long)]
    allow_list: Option<PathBuf>,
}

/// Receipts awaiting output, bounding how far reading may run ahead of writing.
const MAX_IN_FLIGHT: usize = 1024;

enum Pending {
    Invalid,
    Dispatched(JoinHandle<WalletResult<PaymentResult>>),
}

/// Decodes requests and spawns one task per payment, handing the pending
/// receipts to the writer in input order. Stops at the first read failure.
fn dispatch_requests(
    source: Box<dyn Read + Send>,
    processor: Arc<PaymentProcessor>,
    pending: mpsc::Sender<Pending>,
) -> WalletResult<()> {
    for request in RequestReader::new(source).requests() {
        let entry = match request {
            Ok(request) => {
                let processor = Arc::clone(&processor);
                Pending::Dispatched(tokio::spawn(async move {
                    processor.process_payment(request).await
                }))
            }
            Err(WalletError::Json(e)) => {
                log::warn!("Error reading request: {}", e);
                Pending::Invalid
            }
            Err(e) => return Err(e),
        };
        if pending.blocking_send(entry).is_err() {
            // writer has gone away
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = Config::new(cli.allow_list);
    let allow_list = config.load_allow_list().into_diagnostic()?;
    log::info!("loaded {} registered phone numbers", allow_list.len());

    let ledger: LedgerStoreBox = Box::new(InMemoryLedger::new());
    let processor = Arc::new(PaymentProcessor::new(ledger, allow_list));

    let source: Box<dyn Read + Send> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    let (sender, mut receiver) = mpsc::channel(MAX_IN_FLIGHT);
    let dispatcher = {
        let processor = Arc::clone(&processor);
        tokio::task::spawn_blocking(move || dispatch_requests(source, processor, sender))
    };

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    while let Some(entry) = receiver.recv().await {
        let receipt = match entry {
            Pending::Invalid => Receipt::InvalidRequest,
            Pending::Dispatched(handle) => {
                Receipt::Processed(handle.await.into_diagnostic()?.into_diagnostic()?)
            }
        };
        writer.write_receipt(&receipt).into_diagnostic()?;
        writer.flush().into_diagnostic()?;
    }

    dispatcher.await.into_diagnostic()?.into_diagnostic()?;

    let (accounts, transactions) = processor.ledger_size().await.into_diagnostic()?;
    log::info!("ledger holds {accounts} accounts and {transactions} transactions");

    Ok(())
}
