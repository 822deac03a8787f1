//! Wrapped native token detector
//!
//! Wrap/unwrap calls against wrapped-ether style contracts. A wrap mints the
//! wrapped token and an unwrap burns it, so the `Deposit`/`Withdrawal` core
//! events carry MINT/BURN types, deposit taking precedence.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS, WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_address, known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const GENERIC_LABEL: &str = "Wrapped Native Token";

pub struct WrappedNativeDetector {
    registries: Arc<Registries>,
}

impl WrappedNativeDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }
}

impl Detector for WrappedNativeDetector {
    fn id(&self) -> &'static str {
        "wrapped-native"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        if let Some(entry) = known_address(&self.registries, tx, ProtocolFamily::WrappedNative) {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(entry.label.clone());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::WrappedNative).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::WrappedNative);
        let mut tx_type = TransactionType::Transfer;
        if let Some(core) = signals.core {
            score.credit(WEIGHT_CORE_EVENT);
            tx_type = core.tx_type;
            if label.is_none() {
                label = Some(core.label.clone());
            }
        }

        let confidence = score.finalise()?;
        Some(ProtocolMatch {
            name: label.unwrap_or_else(|| GENERIC_LABEL.to_string()),
            confidence,
            tx_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::scoring::FAMILY_CONFIDENCE_CEILING;
    use crate::types::Log;

    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const DEPOSIT_EVENT: &str =
        "0xe1fffcc4923d04b559f4d40a8bfc6b2db48a2f3fe1fb25aa9edc7d3a1c9e07ce";
    const WITHDRAWAL_EVENT: &str =
        "0x7fcf532c15f0a6db0bd6d0e038bea71d30d808c7d98cb3bf7268a95bf5081b65";

    fn detect(input: &str, topics: &[&str]) -> Option<ProtocolMatch> {
        let detector = WrappedNativeDetector::new(Arc::new(Registries::builtin().unwrap()));
        let tx = Transaction {
            hash: format!("0x{}", "ff".repeat(32)),
            to: Some(WETH.to_string()),
            from: format!("0x{}", "11".repeat(20)),
            input: input.to_string(),
            value: "0x0".to_string(),
            chain_id: 1,
        };
        let receipt = Receipt {
            status: true,
            logs: topics
                .iter()
                .map(|topic| Log {
                    address: WETH.to_string(),
                    topics: vec![topic.to_string()],
                    data: "0x".to_string(),
                })
                .collect(),
        };
        detector.detect(&tx, &receipt)
    }

    #[test]
    fn test_wrap_is_a_mint() {
        let matched = detect("0xd0e30db0", &[DEPOSIT_EVENT]).unwrap();
        assert_eq!(matched.confidence, FAMILY_CONFIDENCE_CEILING);
        assert_eq!(matched.name, "Wrapped Ether");
        assert_eq!(matched.tx_type, TransactionType::Mint);
    }

    #[test]
    fn test_unwrap_is_a_burn() {
        let matched = detect("0x2e1a7d4d00", &[WITHDRAWAL_EVENT]).unwrap();
        assert_eq!(matched.tx_type, TransactionType::Burn);
    }

    #[test]
    fn test_deposit_event_outranks_withdrawal() {
        let matched = detect("0x", &[WITHDRAWAL_EVENT, DEPOSIT_EVENT]).unwrap();
        assert_eq!(matched.tx_type, TransactionType::Mint);
    }
}
