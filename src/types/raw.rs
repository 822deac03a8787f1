//! Raw boundary records
//!
//! Loosely typed mirrors of the normalised JSON the data-loading collaborator
//! produces. Upstream sources disagree on encodings (`status` as `"0x1"`, `1`
//! or `true`; `value`/`chain_id` as numbers or hex strings; `input` sometimes
//! named `data`), so these records keep the flexible shapes and leave the
//! strict conversion to `crate::ingest`, which fails closed on anything it
//! cannot make sense of.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transaction record as received from upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: String,
    #[serde(default)]
    pub to: Option<String>,
    pub from: String,
    /// Call payload; some sources name this field `data`
    #[serde(default, alias = "data")]
    pub input: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, alias = "chainId")]
    pub chain_id: Option<Value>,
}

/// Log record as received from upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLog {
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Receipt record as received from upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReceipt {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub logs: Vec<RawLog>,
}

/// One classification request: a transaction paired with its receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawClassificationRequest {
    pub transaction: RawTransaction,
    pub receipt: RawReceipt,
}
