//! Classification output types
//!
//! `ProtocolMatch` is what an individual detector produces; the engine
//! resolves the set of matches into exactly one `ClassificationResult`, which
//! is the shape handed to the report-generation collaborator. `BatchSummary`
//! accumulates a breakdown over a batch run.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse transaction-type classification
///
/// The base variants cover the cross-family vocabulary; the remainder are the
/// per-family extensions (lending actions, marketplace sales, approvals,
/// deployments). `Unknown` is reserved for the no-match sentinel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Swap,
    AddLiquidity,
    RemoveLiquidity,
    Transfer,
    Mint,
    Burn,
    Bridge,
    Stake,
    Deposit,
    Borrow,
    Repay,
    Withdraw,
    NftSale,
    Approval,
    ContractDeployment,
    Unknown,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Swap => "Swap",
            TransactionType::AddLiquidity => "Add Liquidity",
            TransactionType::RemoveLiquidity => "Remove Liquidity",
            TransactionType::Transfer => "Transfer",
            TransactionType::Mint => "Mint",
            TransactionType::Burn => "Burn",
            TransactionType::Bridge => "Bridge",
            TransactionType::Stake => "Stake",
            TransactionType::Deposit => "Deposit",
            TransactionType::Borrow => "Borrow",
            TransactionType::Repay => "Repay",
            TransactionType::Withdraw => "Withdraw",
            TransactionType::NftSale => "NFT Sale",
            TransactionType::Approval => "Approval",
            TransactionType::ContractDeployment => "Contract Deployment",
            TransactionType::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// A single detector's verdict for one transaction
///
/// Invariant: `confidence` is in (0, 1] for any match a detector actually
/// returns - totals at or below zero are suppressed inside the detector and
/// never surface here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolMatch {
    /// Human-readable protocol display label
    pub name: String,
    /// Assistive evidence score in (0, 1]
    pub confidence: f64,
    /// Coarse transaction type implied by the evidence
    pub tx_type: TransactionType,
}

/// The engine's final verdict for one transaction - never absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
    pub tx_type: TransactionType,
    /// Id of the winning detector; `None` for the UNKNOWN sentinel
    pub detector_id: Option<String>,
}

impl ClassificationResult {
    /// The explicit no-match sentinel: UNKNOWN with confidence 0
    pub fn unknown() -> Self {
        Self {
            label: "Unknown".to_string(),
            confidence: 0.0,
            tx_type: TransactionType::Unknown,
            detector_id: None,
        }
    }

    pub fn from_match(detector_id: &str, matched: ProtocolMatch) -> Self {
        Self {
            label: matched.name,
            confidence: matched.confidence,
            tx_type: matched.tx_type,
            detector_id: Some(detector_id.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.detector_id.is_none()
    }
}

/// Classification breakdown accumulated over a batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Records classified (including UNKNOWN results)
    pub records_processed: u64,
    /// Records rejected at the ingest boundary or unreadable as JSON
    pub errors_encountered: u64,
    /// Count per resolved transaction type
    pub by_type: BTreeMap<TransactionType, u64>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classification result into the breakdown
    pub fn record(&mut self, result: &ClassificationResult) {
        self.records_processed += 1;
        *self.by_type.entry(result.tx_type).or_insert(0) += 1;
    }

    pub fn record_error(&mut self) {
        self.errors_encountered += 1;
    }

    /// Percentage of processed records with the given type
    pub fn percentage(&self, tx_type: TransactionType) -> f64 {
        crate::utils::math::safe_percentage_u64(
            self.by_type.get(&tx_type).copied().unwrap_or(0),
            self.records_processed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel_shape() {
        let unknown = ClassificationResult::unknown();
        assert_eq!(unknown.label, "Unknown");
        assert_eq!(unknown.confidence, 0.0);
        assert_eq!(unknown.tx_type, TransactionType::Unknown);
        assert!(unknown.is_unknown());
    }

    #[test]
    fn test_summary_breakdown_counts_and_percentages() {
        let mut summary = BatchSummary::new();
        let swap = ClassificationResult {
            label: "Uniswap V2 Router".to_string(),
            confidence: 0.35,
            tx_type: TransactionType::Swap,
            detector_id: Some("dex-swap".to_string()),
        };
        summary.record(&swap);
        summary.record(&swap);
        summary.record(&ClassificationResult::unknown());
        summary.record_error();

        assert_eq!(summary.records_processed, 3);
        assert_eq!(summary.errors_encountered, 1);
        assert_eq!(summary.by_type[&TransactionType::Swap], 2);
        assert!((summary.percentage(TransactionType::Swap) - 66.66).abs() < 0.1);
        assert_eq!(summary.percentage(TransactionType::Bridge), 0.0);
    }

    #[test]
    fn test_transaction_type_serialises_screaming_snake() {
        let json = serde_json::to_string(&TransactionType::AddLiquidity).unwrap();
        assert_eq!(json, "\"ADD_LIQUIDITY\"");
        let json = serde_json::to_string(&TransactionType::NftSale).unwrap();
        assert_eq!(json, "\"NFT_SALE\"");
    }
}
