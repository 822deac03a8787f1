//! Lending protocol detector
//!
//! Lending core actions differ in kind (supply, borrow, repay, withdraw), so
//! the matched core event also selects the transaction type, using the same
//! precedence order that drives label refinement: borrow outranks repay
//! outranks withdraw outranks deposit when one receipt carries several.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS, WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_address, known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const GENERIC_LABEL: &str = "Lending Protocol";

pub struct LendingDetector {
    registries: Arc<Registries>,
}

impl LendingDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }
}

impl Detector for LendingDetector {
    fn id(&self) -> &'static str {
        "lending"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        if let Some(entry) = known_address(&self.registries, tx, ProtocolFamily::Lending) {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(entry.label.clone());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::Lending).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::Lending);
        let mut tx_type = TransactionType::Deposit;
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
