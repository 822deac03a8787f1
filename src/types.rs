//! EVM Transaction Protocol Classifier - Type System
//!
//! - `common`: the strongly typed transaction/receipt model the detectors consume
//! - `classification`: classification outputs (TransactionType, ProtocolMatch,
//!   ClassificationResult) and the batch summary accumulator
//! - `raw`: loosely typed boundary records as received from the data-loading
//!   collaborator, converted by `crate::ingest`

mod classification;
mod common;
pub mod raw;

// Re-export the model types at the crate::types root
pub use classification::*;
pub use common::*;
