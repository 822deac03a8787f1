//! Contract deployment detector
//!
//! A transaction with no callee and non-empty call data is a contract
//! creation. The shape itself is the evidence, so it earns the
//! address-class weight and nothing else; an empty-payload creation
//! attempt produces no signal at all.

use std::sync::Arc;

use crate::classifier::scoring::{SignalScore, WEIGHT_KNOWN_ADDRESS};
use crate::classifier::Detector;
use crate::registry::Registries;
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const LABEL: &str = "Contract Deployment";

pub struct ContractDeployDetector {
    // Held for uniformity with the rest of the detector set; this family
    // matches on transaction shape alone.
    _registries: Arc<Registries>,
}

impl ContractDeployDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self {
            _registries: registries,
        }
    }
}

impl Detector for ContractDeployDetector {
    fn id(&self) -> &'static str {
        "contract-deploy"
    }

    fn detect(&self, tx: &Transaction, _receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        if tx.is_contract_creation() && tx.has_call_data() {
            score.credit(WEIGHT_KNOWN_ADDRESS);
        }
        let confidence = score.finalise()?;
        Some(ProtocolMatch {
            name: LABEL.to_string(),
            confidence,
            tx_type: TransactionType::ContractDeployment,
        })
    }
}
