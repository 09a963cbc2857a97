// Receipt Processor - Web Server

use anyhow::Result;
use clap::Parser;
use receipt_processor::api::run_server;
use receipt_processor::{init_logging, ReceiptProcessor, ServerConfig, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_logging(config.log_format, "info")?;

    tracing::info!(version = VERSION, "starting receipt processor");

    // Receipts live only as long as this process
    let processor = ReceiptProcessor::in_memory();

    run_server(config, processor).await
}
