//! DEX swap/liquidity detector
//!
//! The archetype of the family scoring shape. Evidence classes:
//!
//! - callee is a known router/aggregator (+0.25, sets the initial label)
//! - call-data selector is a known DEX method (+0.15)
//! - receipt contains a core swap event (+0.15, refines a generic label)
//! - receipt contains only liquidity mint/burn events (-0.20, overrides the
//!   type to the liquidity action)
//!
//! The total is capped at the family ceiling; at or below zero the detector
//! stays silent, which keeps liquidity-only activity with no address or
//! selector evidence invisible to this family.

use std::sync::Arc;

use crate::classifier::scoring::{
    SignalScore, PENALTY_SECONDARY_ONLY, WEIGHT_CORE_EVENT, WEIGHT_KNOWN_ADDRESS,
    WEIGHT_KNOWN_SELECTOR,
};
use crate::classifier::signals::{known_address, known_selector, scan_logs};
use crate::classifier::Detector;
use crate::registry::{ProtocolFamily, Registries};
use crate::types::{ProtocolMatch, Receipt, Transaction, TransactionType};

/// Generic display label used when no address or log signature names a
/// more specific protocol
const GENERIC_LABEL: &str = "Decentralised Exchange";

pub struct DexDetector {
    registries: Arc<Registries>,
}

impl DexDetector {
    pub fn new(registries: Arc<Registries>) -> Self {
        Self { registries }
    }
}

impl Detector for DexDetector {
    fn id(&self) -> &'static str {
        "dex-swap"
    }

    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch> {
        let mut score = SignalScore::new();
        let mut label: Option<String> = None;

        if let Some(entry) = known_address(&self.registries, tx, ProtocolFamily::Dex) {
            score.credit(WEIGHT_KNOWN_ADDRESS);
            label = Some(entry.label.clone());
        }

        if known_selector(&self.registries, tx, ProtocolFamily::Dex).is_some() {
            score.credit(WEIGHT_KNOWN_SELECTOR);
        }

        let signals = scan_logs(&self.registries, receipt, ProtocolFamily::Dex);
        let mut tx_type = TransactionType::Swap;
        if let Some(core) = signals.core {
            score.credit(WEIGHT_CORE_EVENT);
            // Refine only while the label is still generic: a registered
            // router label always outranks a log-derived one.
            if label.is_none() {
                label = Some(core.label.clone());
            }
        } else if let Some(secondary) = signals.secondary() {
            score.debit(PENALTY_SECONDARY_ONLY);
            tx_type = secondary.tx_type;
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

    const UNISWAP_V2_ROUTER: &str = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";
    const SWAP_SELECTOR: &str = "0x38ed1739";
    const V2_SWAP_TOPIC: &str =
        "0xd78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822";
    const V3_SWAP_TOPIC: &str =
        "0xc42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67";
    const V2_MINT_TOPIC: &str =
        "0x4c209b5fc8ad50758f13e2e1088ba56a560dff690a1c6fef26394f4c03821c4f";
    const V2_BURN_TOPIC: &str =
        "0xdccd412f0b1252819cb1fd330b93224ca42612892bb3f4f789976e6d81936496";

    fn detector() -> DexDetector {
        DexDetector::new(Arc::new(Registries::builtin().unwrap()))
    }

    fn tx(to: Option<&str>, input: &str) -> Transaction {
        Transaction {
            hash: format!("0x{}", "aa".repeat(32)),
            to: to.map(str::to_string),
            from: format!("0x{}", "11".repeat(20)),
            input: input.to_string(),
            value: "0x0".to_string(),
            chain_id: 1,
        }
    }

    fn receipt(topics: &[&str]) -> Receipt {
        Receipt {
            status: true,
            logs: topics
                .iter()
                .map(|topic| Log {
                    address: format!("0x{}", "33".repeat(20)),
                    topics: vec![topic.to_string()],
                    data: "0x".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_known_router_selector_and_swap_log_caps_at_ceiling() {
        let matched = detector()
            .detect(
                &tx(Some(UNISWAP_V2_ROUTER), SWAP_SELECTOR),
                &receipt(&[V2_SWAP_TOPIC]),
            )
            .expect("full house must match");
        // 0.25 + 0.15 + 0.15 = 0.55, capped
        assert_eq!(matched.confidence, FAMILY_CONFIDENCE_CEILING);
        assert_eq!(matched.name, "Uniswap V2 Router");
        assert_eq!(matched.tx_type, TransactionType::Swap);
    }

    #[test]
    fn test_swap_log_alone_refines_generic_label() {
        let matched = detector()
            .detect(
                &tx(Some(&format!("0x{}", "99".repeat(20))), "0x"),
                &receipt(&[V2_SWAP_TOPIC]),
            )
            .expect("core log alone is a positive signal");
        assert!((matched.confidence - WEIGHT_CORE_EVENT).abs() < 1e-12);
        assert_eq!(matched.name, "Uniswap V2");
        assert_eq!(matched.tx_type, TransactionType::Swap);
    }

    #[test]
    fn test_v3_swap_log_wins_label_refinement_over_v2() {
        // Both core signatures present: the more specific family wins
        let matched = detector()
            .detect(
                &tx(Some(&format!("0x{}", "99".repeat(20))), "0x"),
                &receipt(&[V2_SWAP_TOPIC, V3_SWAP_TOPIC]),
            )
            .unwrap();
        assert_eq!(matched.name, "Uniswap V3");
    }

    #[test]
    fn test_registered_router_label_is_never_refined() {
        let matched = detector()
            .detect(
                &tx(Some(UNISWAP_V2_ROUTER), "0x"),
                &receipt(&[V3_SWAP_TOPIC]),
            )
            .unwrap();
        assert_eq!(matched.name, "Uniswap V2 Router");
    }

    #[test]
    fn test_liquidity_only_activity_is_suppressed() {
        // No address/selector evidence, mint log only: 0 - 0.20 <= 0
        let result = detector().detect(
            &tx(Some(&format!("0x{}", "99".repeat(20))), "0x"),
            &receipt(&[V2_MINT_TOPIC]),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_liquidity_log_overrides_type_when_router_is_known() {
        // Router + selector - penalty = 0.20, typed as the liquidity action
        let matched = detector()
            .detect(
                &tx(Some(UNISWAP_V2_ROUTER), "0xe8e33700"),
                &receipt(&[V2_MINT_TOPIC]),
            )
            .unwrap();
        assert!((matched.confidence - 0.20).abs() < 1e-12);
        assert_eq!(matched.tx_type, TransactionType::AddLiquidity);
    }

    #[test]
    fn test_mint_takes_precedence_over_burn_for_type_override() {
        let matched = detector()
            .detect(
                &tx(Some(UNISWAP_V2_ROUTER), "0xe8e33700"),
                &receipt(&[V2_BURN_TOPIC, V2_MINT_TOPIC]),
            )
            .unwrap();
        assert_eq!(matched.tx_type, TransactionType::AddLiquidity);
    }

    #[test]
    fn test_core_log_disables_secondary_penalty() {
        // Swap + mint in one receipt: the swap wins, no penalty applies
        let matched = detector()
            .detect(
                &tx(Some(UNISWAP_V2_ROUTER), SWAP_SELECTOR),
                &receipt(&[V2_SWAP_TOPIC, V2_MINT_TOPIC]),
            )
            .unwrap();
        assert_eq!(matched.confidence, FAMILY_CONFIDENCE_CEILING);
        assert_eq!(matched.tx_type, TransactionType::Swap);
    }

    #[test]
    fn test_degenerate_input_produces_no_match() {
        let result = detector().detect(&tx(None, "0x"), &receipt(&[]));
        assert!(result.is_none());
    }
}
