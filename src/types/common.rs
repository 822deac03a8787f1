//! Core transaction and receipt model
//!
//! These are the immutable shapes the detectors consume. They are constructed
//! exactly once per request at the ingest boundary (`crate::ingest`), with all
//! hex fields lower-cased so registry lookups are exact string matches, and
//! passed by shared reference from there on. Nothing in the classifier
//! mutates them.

use serde::{Deserialize, Serialize};

use crate::utils::hex;

/// A normalised EVM transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// 32-byte transaction hash - the unique id
    pub hash: String,
    /// Callee address; `None` for contract creation
    pub to: Option<String>,
    /// Sender address
    pub from: String,
    /// Hex-encoded call payload; `"0x"` when the call data is empty
    pub input: String,
    /// Value quantity as received (hex or decimal string)
    pub value: String,
    /// Chain the transaction was observed on
    pub chain_id: u64,
}

impl Transaction {
    /// The 4-byte method selector of the call data, if present and well-formed
    pub fn selector(&self) -> Option<String> {
        hex::selector(&self.input)
    }

    /// True for contract-creation transactions (no callee)
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// True when the transaction carries any call data beyond the `0x` prefix
    pub fn has_call_data(&self) -> bool {
        self.input.len() > 2
    }

    /// True when the transaction moves a non-zero native value
    pub fn has_value(&self) -> bool {
        hex::is_nonzero_quantity(&self.value)
    }
}

/// A single log emitted during transaction execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// The contract that emitted the log
    pub address: String,
    /// Ordered indexed values; `topics[0]` is the event signature hash
    pub topics: Vec<String>,
    /// Hex-encoded non-indexed payload
    pub data: String,
}

impl Log {
    /// The event signature hash (`topics[0]`), when the log has topics at all
    pub fn signature(&self) -> Option<&str> {
        self.topics.first().map(String::as_str)
    }

    /// An indexed topic beyond the signature, by position
    pub fn indexed_topic(&self, position: usize) -> Option<&str> {
        self.topics.get(position).map(String::as_str)
    }
}

/// Execution receipt: logs in execution order plus the success flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub status: bool,
    pub logs: Vec<Log>,
}
