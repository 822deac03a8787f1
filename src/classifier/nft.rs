//! NFT marketplace sale detector
//!
//! Same scoring shape as the DEX archetype with marketplace signal tables:
//! known marketplace contracts, order-fill selectors, and sale events
//! (Seaport `OrderFulfilled`, Wyvern `OrdersMatched`, LooksRare `TakerBid`).
//! The family has no secondary-action table - plain NFT transfers without a
//! sale event belong to the token-transfer family.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS, WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_address, known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const GENERIC_LABEL: &str = "NFT Marketplace";

pub struct NftMarketplaceDetector {
    registries: Arc<Registries>,
}

impl NftMarketplaceDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }
}

impl Detector for NftMarketplaceDetector {
    fn id(&self) -> &'static str {
        "nft-marketplace"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        if let Some(entry) = known_address(&self.registries, tx, ProtocolFamily::NftMarketplace) {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(entry.label.clone());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::NftMarketplace).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::NftMarketplace);
        if let Some(core) = signals.core {
            score.credit(WEIGHT_CORE_EVENT);
            if label.is_none() {
                label = Some(core.label.clone());
            }
        }

        let confidence = score.finalise()?;
        Some(ProtocolMatch {
            name: label.unwrap_or_else(|| GENERIC_LABEL.to_string()),
            confidence,
            tx_type: TransactionType::NftSale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::scoring::FAMILY_CONFIDENCE_CEILING;
    use crate::types::Log;

    const SEAPORT: &str = "0x00000000000000adc04c56bf4d90b1e35ee4df70";
    const ORDER_FULFILLED: &str =
        "0x9d9af8e38d66c62e2c12f0225249fd9d721c54b83f48d9352c97c6cacdcb6f31";

    fn detector() -> NftMarketplaceDetector {
        NftMarketplaceDetector::new(Arc::new(Registries::builtin().unwrap()))
    }

    fn sale_receipt() -> Receipt {
        Receipt {
            status: true,
            logs: vec![Log {
                address: SEAPORT.to_string(),
                topics: vec![ORDER_FULFILLED.to_string()],
                data: "0x".to_string(),
            }],
        }
    }

    #[test]
    fn test_seaport_fill_caps_at_ceiling() {
        let tx = Transaction {
            hash: format!("0x{}", "bb".repeat(32)),
            to: Some(SEAPORT.to_string()),
            from: format!("0x{}", "11".repeat(20)),
            input: "0xfb0f3ee1deadbeef".to_string(),
            value: "0x2386f26fc10000".to_string(),
            chain_id: 1,
        };
        let matched = detector().detect(&tx, &sale_receipt()).unwrap();
        assert_eq!(matched.confidence, FAMILY_CONFIDENCE_CEILING);
        assert_eq!(matched.name, "OpenSea Seaport 1.5");
        assert_eq!(matched.tx_type, TransactionType::NftSale);
    }

    #[test]
    fn test_sale_event_alone_refines_label() {
        // Aggregator-routed fill: unknown callee, recognisable sale event
        let tx = Transaction {
            hash: format!("0x{}", "bb".repeat(32)),
            to: Some(format!("0x{}", "99".repeat(20))),
            from: format!("0x{}", "11".repeat(20)),
            input: "0x".to_string(),
            value: "0x0".to_string(),
            chain_id: 1,
        };
        let matched = detector().detect(&tx, &sale_receipt()).unwrap();
        assert!((matched.confidence - WEIGHT_CORE_EVENT).abs() < 1e-12);
        assert_eq!(matched.name, "OpenSea Seaport");
    }

    #[test]
    fn test_no_marketplace_evidence_is_silent() {
        let tx = Transaction {
            hash: format!("0x{}", "bb".repeat(32)),
            to: Some(format!("0x{}", "99".repeat(20))),
            from: format!("0x{}", "11".repeat(20)),
            input: "0xa9059cbb00".to_string(),
            value: "0x0".to_string(),
            chain_id: 1,
        };
        let receipt = Receipt {
            status: true,
            logs: vec![],
        };
        assert!(detector().detect(&tx, &receipt).is_none());
    }
}
