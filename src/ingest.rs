//! Ingest boundary: raw records to the typed model
//!
//! Converts the loosely typed records of `crate::types::raw` into the
//! immutable `Transaction`/`Receipt` shapes the detectors consume, so that
//! detector logic never touches dynamic field encodings.
//!
//! The conversion fails closed on identity fields: a record whose `hash`,
//! `from`, non-null `to`, `chain_id` or `status` cannot be made sense of is
//! rejected with `AppError::InvalidData`. Content fields degrade instead -
//! non-hex call data or malformed log payloads are lower-cased and carried
//! through, where they simply never match a registry key and produce no
//! signal.

use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::types::raw::{RawClassificationRequest, RawLog, RawReceipt, RawTransaction};
use crate::types::{Log, Receipt, Transaction};
use crate::utils::hex::{normalise, ADDRESS_RE, HASH_RE};

/// Convert a raw transaction record, validating identity fields
pub fn transaction_from_raw(raw: &RawTransaction) -> AppResult<Transaction> {
    let hash = normalise(&raw.hash);
    if !HASH_RE.is_match(&hash) {
        return Err(AppError::InvalidData(format!(
            "malformed transaction hash: {}",
            raw.hash
        )));
    }

    let from = normalise(&raw.from);
    if !ADDRESS_RE.is_match(&from) {
        return Err(AppError::InvalidData(format!(
            "malformed sender address: {}",
            raw.from
        )));
    }

    // A present-but-garbled callee is upstream corruption, not a missing
    // field - reject rather than classify against the wrong contract.
    let to = match &raw.to {
        None => None,
        Some(addr) => {
            let addr = normalise(addr);
            if !ADDRESS_RE.is_match(&addr) {
                return Err(AppError::InvalidData(format!(
                    "malformed callee address: {}",
                    addr
                )));
            }
            Some(addr)
        }
    };

    let input = match raw.input.as_deref() {
        None | Some("") => "0x".to_string(),
        Some(data) => normalise(data),
    };

    let value = match &raw.value {
        None => "0x0".to_string(),
        Some(Value::String(s)) => normalise(s),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(AppError::InvalidData(format!(
                "unintelligible value quantity: {}",
                other
            )))
        }
    };

    let chain_id = parse_chain_id(raw.chain_id.as_ref())?;

    Ok(Transaction {
        hash,
        to,
        from,
        input,
        value,
        chain_id,
    })
}

/// Convert a raw receipt record
pub fn receipt_from_raw(raw: &RawReceipt) -> AppResult<Receipt> {
    let status = parse_status(raw.status.as_ref())?;
    let logs = raw.logs.iter().map(log_from_raw).collect();
    Ok(Receipt { status, logs })
}

/// Convert one raw classification request into the typed pair
pub fn request_from_raw(raw: &RawClassificationRequest) -> AppResult<(Transaction, Receipt)> {
    let tx = transaction_from_raw(&raw.transaction)?;
    let receipt = receipt_from_raw(&raw.receipt)?;
    Ok((tx, receipt))
}

/// Parse one JSON classification request (`{"transaction": ..., "receipt": ...}`)
pub fn request_from_json(text: &str) -> AppResult<(Transaction, Receipt)> {
    let raw: RawClassificationRequest = serde_json::from_str(text)?;
    request_from_raw(&raw)
}

fn log_from_raw(raw: &RawLog) -> Log {
    // Log payloads are content, not identity: lower-case and carry through.
    // A malformed address or topic never matches a registry key.
    Log {
        address: normalise(&raw.address),
        topics: raw.topics.iter().map(|t| normalise(t)).collect(),
        data: raw
            .data
            .as_deref()
            .map(normalise)
            .unwrap_or_else(|| "0x".to_string()),
    }
}

fn parse_chain_id(value: Option<&Value>) -> AppResult<u64> {
    let value = value.ok_or_else(|| AppError::InvalidData("missing chain_id".to_string()))?;
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| AppError::InvalidData(format!("unintelligible chain_id: {}", n))),
        Value::String(s) => {
            let s = normalise(s);
            let parsed = match s.strip_prefix("0x") {
                Some(hex_body) => u64::from_str_radix(hex_body, 16).ok(),
                None => s.parse::<u64>().ok(),
            };
            parsed.ok_or_else(|| AppError::InvalidData(format!("unintelligible chain_id: {}", s)))
        }
        other => Err(AppError::InvalidData(format!(
            "unintelligible chain_id: {}",
            other
        ))),
    }
}

fn parse_status(value: Option<&Value>) -> AppResult<bool> {
    match value {
        // Pre-Byzantium receipts carry no status field
        None | Some(Value::Null) => Ok(true),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(AppError::InvalidData(format!(
                "unintelligible receipt status: {}",
                n
            ))),
        },
        Some(Value::String(s)) => match normalise(s).as_str() {
            "0x0" | "0" => Ok(false),
            "0x1" | "1" => Ok(true),
            other => Err(AppError::InvalidData(format!(
                "unintelligible receipt status: {}",
                other
            ))),
        },
        Some(other) => Err(AppError::InvalidData(format!(
            "unintelligible receipt status: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_tx() -> RawTransaction {
        RawTransaction {
            hash: format!("0x{}", "AB".repeat(32)),
            to: Some("0x7A250D5630B4CF539739dF2C5dAcb4c659F2488D".to_string()),
            from: format!("0x{}", "11".repeat(20)),
            input: Some("0x38ED1739".to_string()),
            value: Some(json!("0x0")),
            chain_id: Some(json!(1)),
        }
    }

    #[test]
    fn test_conversion_lower_cases_hex_fields() {
        let tx = transaction_from_raw(&raw_tx()).unwrap();
        assert_eq!(tx.hash, format!("0x{}", "ab".repeat(32)));
        assert_eq!(
            tx.to.as_deref(),
            Some("0x7a250d5630b4cf539739df2c5dacb4c659f2488d")
        );
        assert_eq!(tx.input, "0x38ed1739");
    }

    #[test]
    fn test_missing_to_is_not_an_error() {
        let mut raw = raw_tx();
        raw.to = None;
        let tx = transaction_from_raw(&raw).unwrap();
        assert!(tx.is_contract_creation());
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        let mut raw = raw_tx();
        raw.hash = "0x1234".to_string();
        assert!(matches!(
            transaction_from_raw(&raw),
            Err(AppError::InvalidData(_))
        ));
    }

    #[test]
    fn test_malformed_callee_fails_closed() {
        let mut raw = raw_tx();
        raw.to = Some("not-an-address".to_string());
        assert!(matches!(
            transaction_from_raw(&raw),
            Err(AppError::InvalidData(_))
        ));
    }

    #[test]
    fn test_missing_input_becomes_empty_call_data() {
        let mut raw = raw_tx();
        raw.input = None;
        let tx = transaction_from_raw(&raw).unwrap();
        assert_eq!(tx.input, "0x");
        assert!(!tx.has_call_data());
    }

    #[test]
    fn test_non_hex_input_is_carried_not_rejected() {
        let mut raw = raw_tx();
        raw.input = Some("0xZZZZZZZZ".to_string());
        let tx = transaction_from_raw(&raw).unwrap();
        // Degrades to "no selector signal" rather than an error
        assert_eq!(tx.selector(), None);
    }

    #[test]
    fn test_chain_id_encodings() {
        for (encoding, expected) in [(json!(137), 137u64), (json!("0x89"), 137), (json!("137"), 137)]
        {
            let mut raw = raw_tx();
            raw.chain_id = Some(encoding);
            assert_eq!(transaction_from_raw(&raw).unwrap().chain_id, expected);
        }
    }

    #[test]
    fn test_status_encodings() {
        for (encoding, expected) in [
            (json!("0x1"), true),
            (json!("0x0"), false),
            (json!(1), true),
            (json!(0), false),
            (json!(true), true),
        ] {
            let receipt = receipt_from_raw(&RawReceipt {
                status: Some(encoding),
                logs: vec![],
            })
            .unwrap();
            assert_eq!(receipt.status, expected);
        }

        // Missing status (pre-Byzantium) defaults to success
        let receipt = receipt_from_raw(&RawReceipt {
            status: None,
            logs: vec![],
        })
        .unwrap();
        assert!(receipt.status);

        // Unintelligible status fails closed
        assert!(receipt_from_raw(&RawReceipt {
            status: Some(json!("maybe")),
            logs: vec![],
        })
        .is_err());
    }

    #[test]
    fn test_request_from_json_end_to_end() {
        let text = json!({
            "transaction": {
                "hash": format!("0x{}", "cd".repeat(32)),
                "to": null,
                "from": format!("0x{}", "22".repeat(20)),
                "input": "0x",
                "value": "0x0",
                "chainId": 1
            },
            "receipt": { "status": "0x1", "logs": [] }
        })
        .to_string();

        let (tx, receipt) = request_from_json(&text).unwrap();
        assert!(tx.is_contract_creation());
        assert!(receipt.logs.is_empty());
    }
}
