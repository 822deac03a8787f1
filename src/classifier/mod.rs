//! Classification engine
//!
//! The `Detector` trait is the single capability every protocol family
//! implements; the `ClassificationEngine` runs the registered set against one
//! (Transaction, Receipt) pair and resolves the matches into exactly one
//! `ClassificationResult`.
//!
//! Detectors are pure, never perform I/O, and share only the read-only
//! registries, so the engine may run them in any order - or concurrently -
//! with identical results. A panicking detector is isolated and logged as a
//! null match; it can never abort the classification pass.
//!
//! Resolution policy: the strictly highest confidence wins. Exact ties are
//! broken by the priority rank declared at registration time (lower rank
//! wins), and equal ranks fall back to lexicographic detector id, so
//! resolution is a total order independent of registration order. The
//! standard ranks are:
//!
//! | rank | detector        |
//! |------|-----------------|
//! | 10   | dex-swap        |
//! | 20   | nft-marketplace |
//! | 30   | lending         |
//! | 40   | staking         |
//! | 50   | bridge          |
//! | 60   | wrapped-native  |
//! | 70   | token-transfer  |
//! | 80   | contract-deploy |
//!
//! The order runs from the most specific evidence (curated router and
//! marketplace tables) to the most generic (bare transfer shapes): at equal
//! confidence the more specific family makes the better documentation label.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::registry::Registries;
use crate::types::{ClassificationResult, ProtocolMatch, Receipt, Transaction};

pub mod scoring;
mod signals;

pub mod bridge;
pub mod deploy;
pub mod dex;
pub mod lending;
pub mod nft;
pub mod staking;
pub mod transfer;
pub mod wrapped;

pub use scoring::{SignalScore, FAMILY_CONFIDENCE_CEILING};

/// The single capability a protocol family implements
///
/// Implementations must be pure and deterministic: no I/O, no mutation of
/// the inputs, no clock or randomness. Malformed inputs (absent callee,
/// empty logs, non-hex call data) must degrade to `None`, never panic.
pub trait Detector: Send + Sync {
    /// Stable identifier, surfaced in the classification result
    fn id(&self) -> &'static str;

    /// Inspect one transaction/receipt pair for this family's evidence
    fn detect(&self, tx: &Transaction, receipt: &Receipt) -> Option<ProtocolMatch>;
}

/// A detector plus its declared tie-break priority rank
pub struct RegisteredDetector {
    pub rank: u8,
    pub detector: Box<dyn Detector>,
}

impl RegisteredDetector {
    pub fn new(rank: u8, detector: Box<dyn Detector>) -> Self {
        Self { rank, detector }
    }
}

/// The standard detector set with its documented priority ranks
pub fn standard_detectors(registries: &Arc<Registries>) -> Vec<RegisteredDetector> {
    vec![
        RegisteredDetector::new(10, Box::new(dex::DexDetector::new(registries.clone()))),
        RegisteredDetector::new(
            20,
            Box::new(nft::NftMarketplaceDetector::new(registries.clone())),
        ),
        RegisteredDetector::new(30, Box::new(lending::LendingDetector::new(registries.clone()))),
        RegisteredDetector::new(40, Box::new(staking::StakingDetector::new(registries.clone()))),
        RegisteredDetector::new(50, Box::new(bridge::BridgeDetector::new(registries.clone()))),
        RegisteredDetector::new(
            60,
            Box::new(wrapped::WrappedNativeDetector::new(registries.clone())),
        ),
        RegisteredDetector::new(
            70,
            Box::new(transfer::TokenTransferDetector::new(registries.clone())),
        ),
        RegisteredDetector::new(
            80,
            Box::new(deploy::ContractDeployDetector::new(registries.clone())),
        ),
    ]
}

/// Runs the registered detector set and resolves their matches
pub struct ClassificationEngine {
    detectors: Vec<RegisteredDetector>,
}

impl ClassificationEngine {
    /// Engine over the standard detector set
    pub fn standard(registries: Arc<Registries>) -> Self {
        Self::with_detectors(standard_detectors(&registries))
    }

    /// Engine over an explicit registration (tests, embedders)
    pub fn with_detectors(detectors: Vec<RegisteredDetector>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = detectors.iter().map(|d| d.detector.id()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "detector ids must be unique"
        );
        Self { detectors }
    }

    /// Classify one transaction/receipt pair, running detectors in sequence
    pub fn classify(&self, tx: &Transaction, receipt: &Receipt) -> ClassificationResult {
        let matches: Vec<_> = self
            .detectors
            .iter()
            .filter_map(|registered| run_detector(registered, tx, receipt))
            .collect();
        resolve(tx, matches)
    }

    /// Classify with the detector set running on scoped threads.
    ///
    /// Equivalent to `classify` in every observable way - detectors are pure
    /// and resolution is order-independent - so callers choose purely on
    /// scheduling grounds.
    pub fn classify_parallel(&self, tx: &Transaction, receipt: &Receipt) -> ClassificationResult {
        let matches = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = self
                .detectors
                .iter()
                .map(|registered| scope.spawn(move |_| run_detector(registered, tx, receipt)))
                .collect();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().ok().flatten())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
        resolve(tx, matches)
    }

    /// The registered detector count (diagnostics)
    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }
}

/// One candidate in the resolution pass
type Candidate = (u8, &'static str, ProtocolMatch);

/// Invoke a single detector with panic isolation and contract checks
fn run_detector(
    registered: &RegisteredDetector,
    tx: &Transaction,
    receipt: &Receipt,
) -> Option<Candidate> {
    let id = registered.detector.id();
    match panic::catch_unwind(AssertUnwindSafe(|| registered.detector.detect(tx, receipt))) {
        Ok(Some(matched)) => {
            // Contract: confidence strictly positive, at most 1. Breaches are
            // suppressed so a misbehaving family cannot skew resolution.
            if matched.confidence > 0.0 && matched.confidence <= 1.0 {
                Some((registered.rank, id, matched))
            } else {
                warn!(
                    "Detector {} returned out-of-contract confidence {}; match suppressed",
                    id, matched.confidence
                );
                None
            }
        }
        Ok(None) => None,
        Err(_) => {
            error!(
                "Detector {} panicked on transaction {}; treated as no match",
                id, tx.hash
            );
            None
        }
    }
}

/// Pick the winning match, or the UNKNOWN sentinel when there is none
fn resolve(tx: &Transaction, matches: Vec<Candidate>) -> ClassificationResult {
    debug!(
        "Transaction {}: {} detector match(es)",
        tx.hash,
        matches.len()
    );

    let mut winner: Option<Candidate> = None;
    for candidate in matches {
        let better = match &winner {
            None => true,
            Some(current) => beats(&candidate, current),
        };
        if better {
            winner = Some(candidate);
        }
    }

    match winner {
        Some((_, id, matched)) => ClassificationResult::from_match(id, matched),
        None => ClassificationResult::unknown(),
    }
}

/// Strict "a beats b" over (confidence desc, rank asc, id asc)
fn beats(a: &Candidate, b: &Candidate) -> bool {
    if a.2.confidence != b.2.confidence {
        return a.2.confidence > b.2.confidence;
    }
    if a.0 != b.0 {
        return a.0 < b.0;
    }
    a.1 < b.1
}
