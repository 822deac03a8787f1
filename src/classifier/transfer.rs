//! Token and native transfer detector
//!
//! The most generic family, covering three shapes:
//!
//! - ERC-20/721/1155 activity recognised by standard selectors and the
//!   standard `Transfer`/`Approval` event signatures
//! - zero-address refinement: a `Transfer` whose indexed `from` is the zero
//!   address is a mint, one whose indexed `to` is the zero address is a
//!   burn (mint precedence over burn, as everywhere in the scorer)
//! - the pure native transfer shape - callee present, empty call data, no
//!   logs, non-zero value - which earns the address-class weight because the
//!   shape itself identifies the action
//!
//! Because its evidence is generic, this family sits near the bottom of the
//! tie-break ranking; any curated family at equal confidence outranks it.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS, WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries, ERC20_TRANSFER_TOPIC, ZERO_TOPIC};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

const GENERIC_LABEL: &str = "Token Transfer";
const NATIVE_LABEL: &str = "Native Transfer";

pub struct TokenTransferDetector {
    registries: Arc<Registries>,
}

impl TokenTransferDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }

    /// Mint/burn refinement over the canonical `Transfer` signature.
    ///
    /// `topics[1]`/`topics[2]` are the indexed from/to for both ERC-20 and
    /// ERC-721. Returns `None` when no zero-address transfer is present.
    fn zero_address_refinement(receipt: &Receipt) -> Option<TransactionType> {
        let mut saw_burn = false;
        for log in &receipt.logs {
            if log.signature() != Some(ERC20_TRANSFER_TOPIC) {
                continue;
            }
            if log.indexed_topic(1) == Some(ZERO_TOPIC) {
                // Mint outranks burn, so the first mint settles it
                return Some(TransactionType::Mint);
            }
            if log.indexed_topic(2) == Some(ZERO_TOPIC) {
                saw_burn = true;
            }
        }
        saw_burn.then_some(TransactionType::Burn)
    }
}

impl Detector for TokenTransferDetector {
    fn id(&self) -> &'static str {
        "token-transfer"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        let native_shape = tx.to.is_some()
            && !tx.has_call_data()
            && receipt.logs.is_empty()
            && tx.has_value();
        if native_shape {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(NATIVE_LABEL.to_string());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::Token).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::Token);
        let mut tx_type = TransactionType::Transfer;
        if let Some(core) = signals.core {
            score.credit(WEIGHT_CORE_EVENT);
            tx_type = core.tx_type;
            if label.is_none() {
                label = Some(core.label.clone());
            }
            if tx_type == TransactionType::Transfer {
                if let Some(refined) = Self::zero_address_refinement(receipt) {
                    tx_type = refined;
                }
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
