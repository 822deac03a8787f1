//! Cross-chain bridge detector
//!
//! L1 bridge heads (Arbitrum, Optimism, Polygon, Hop) and lock-and-mint
//! bridges (Wormhole). Everything this family matches types as BRIDGE.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS, WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_address, known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const GENERIC_LABEL: &str = "Bridge";

pub struct BridgeDetector {
    registries: Arc<Registries>,
}

impl BridgeDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }
}

impl Detector for BridgeDetector {
    fn id(&self) -> &'static str {
        "bridge"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        if let Some(entry) = known_address(&self.registries, tx, ProtocolFamily::Bridge) {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(entry.label.clone());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::Bridge).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::Bridge);
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
            tx_type: TransactionType::Bridge,
        })
    }
}
