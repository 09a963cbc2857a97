// Receipt Processor - Core Library
// Exposes the validation + scoring engine for the CLI, the API server, and tests

pub mod receipt;
pub mod validation;
pub mod scoring;
pub mod store;
pub mod processor;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use receipt::{Item, Money, Receipt, ScoredReceipt};
pub use validation::{validate, ValidationError, ValidationResult};
pub use scoring::{score, score_breakdown, RuleContribution, ScoreBreakdown, ScoringRule};
pub use store::{InMemoryReceiptStore, ReceiptStore, StoreError, StoreResult};
pub use processor::ReceiptProcessor;
pub use config::{LogFormat, ServerConfig};
pub use logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
