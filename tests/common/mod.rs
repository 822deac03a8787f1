//! Common Test Utilities
//!
//! Shared fixture builders used across the integration test files, so every
//! test constructs transactions, receipts and raw JSON records the same way.

#![allow(dead_code)]

use serde_json::{json, Value};
use txlabel::types::{Log, Receipt, Transaction};

/// Registered Uniswap V2 router address (embedded table entry)
pub const UNISWAP_V2_ROUTER: &str = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";

/// Registered swapExactTokensForTokens selector
pub const SWAP_SELECTOR: &str = "0x38ed1739";

/// Uniswap V2 `Swap` event signature (core action, DEX family)
pub const V2_SWAP_TOPIC: &str =
    "0xd78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822";

/// Uniswap V3 `Swap` event signature (core action, DEX family)
pub const V3_SWAP_TOPIC: &str =
    "0xc42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67";

/// Uniswap V2 `Mint` event signature (secondary mint, DEX family)
pub const V2_MINT_TOPIC: &str =
    "0x4c209b5fc8ad50758f13e2e1088ba56a560dff690a1c6fef26394f4c03821c4f";

/// ERC-20/721 `Transfer` event signature (core action, token family)
pub const ERC20_TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// An address that appears in no registry table
pub fn unknown_address() -> String {
    format!("0x{}", "99".repeat(20))
}

/// Build a typed transaction with the given callee and call data
pub fn make_tx(to: Option<&str>, input: &str) -> Transaction {
    Transaction {
        hash: format!("0x{}", "ab".repeat(32)),
        to: to.map(str::to_string),
        from: format!("0x{}", "11".repeat(20)),
        input: input.to_string(),
        value: "0x0".to_string(),
        chain_id: 1,
    }
}

/// Build a receipt with one single-topic log per signature hash
pub fn make_receipt(topics: &[&str]) -> Receipt {
    Receipt {
        status: true,
        logs: topics.iter().map(|topic| make_log(topic)).collect(),
    }
}

/// Build a log carrying only the event signature topic
pub fn make_log(topic: &str) -> Log {
    Log {
        address: format!("0x{}", "33".repeat(20)),
        topics: vec![topic.to_string()],
        data: "0x".to_string(),
    }
}

/// Build a raw classification request as the upstream JSON shape
pub fn raw_request(to: Option<&str>, input: &str, topics: &[&str]) -> Value {
    json!({
        "transaction": {
            "hash": format!("0x{}", "ab".repeat(32)),
            "to": to,
            "from": format!("0x{}", "11".repeat(20)),
            "input": input,
            "value": "0x0",
            "chainId": 1
        },
        "receipt": {
            "status": "0x1",
            "logs": topics
                .iter()
                .map(|topic| json!({
                    "address": format!("0x{}", "33".repeat(20)),
                    "topics": [topic],
                    "data": "0x"
                }))
                .collect::<Vec<_>>()
        }
    })
}
