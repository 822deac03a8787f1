//! Shared signal collection helpers
//!
//! Every family asks the same three questions of a transaction: is the
//! callee one of ours, is the selector one of ours, and which of our event
//! signatures appear in the receipt. The helpers here answer them against
//! the registries so each detector module stays a pure scoring story.

use crate::registry::{
    AddressEntry, EventKind, ProtocolFamily, Registries, SelectorEntry, TopicEntry,
};
use crate::types::{Receipt, Transaction};

/// The family-relevant event signals found in one receipt
#[derive(Debug, Default)]
pub(crate) struct FamilySignals<'a> {
    /// Best (lowest-precedence-number) core-action entry, if any
    pub core: Option<&'a TopicEntry>,
    /// Best mint-style secondary entry, if any
    pub secondary_mint: Option<&'a TopicEntry>,
    /// Best burn-style secondary entry, if any
    pub secondary_burn: Option<&'a TopicEntry>,
}

impl<'a> FamilySignals<'a> {
    /// The secondary entry that decides the type override when no core
    /// action is present: mint-style takes precedence over burn-style.
    pub fn secondary(&self) -> Option<&'a TopicEntry> {
        self.secondary_mint.or(self.secondary_burn)
    }
}

/// The callee's registry entry, when it belongs to the given family
pub(crate) fn known_address<'a>(
    registries: &'a Registries,
    tx: &Transaction,
    family: ProtocolFamily,
) -> Option<&'a AddressEntry> {
    let to = tx.to.as_deref()?;
    registries.address(to).filter(|entry| entry.family == family)
}

/// The call-data selector's registry entry, when it belongs to the family
pub(crate) fn known_selector<'a>(
    registries: &'a Registries,
    tx: &Transaction,
    family: ProtocolFamily,
) -> Option<&'a SelectorEntry> {
    let selector = tx.selector()?;
    registries
        .selector(&selector)
        .filter(|entry| entry.family == family)
}

/// Scan the receipt's logs for the family's registered event signatures.
///
/// Logs are visited in execution order; within each kind the entry with the
/// lowest precedence number wins, and the first such log wins exact
/// precedence ties, so the scan is fully deterministic.
pub(crate) fn scan_logs<'a>(
    registries: &'a Registries,
    receipt: &Receipt,
    family: ProtocolFamily,
) -> FamilySignals<'a> {
    let mut signals = FamilySignals::default();

    for log in &receipt.logs {
        let Some(signature) = log.signature() else {
            continue;
        };
        let Some(entry) = registries.topic(signature) else {
            continue;
        };
        if entry.family != family {
            continue;
        }

        let slot = match entry.kind {
            EventKind::Core => &mut signals.core,
            EventKind::SecondaryMint => &mut signals.secondary_mint,
            EventKind::SecondaryBurn => &mut signals.secondary_burn,
        };
        let more_specific = match slot {
            Some(current) => entry.precedence < current.precedence,
            None => true,
        };
        if more_specific {
            *slot = Some(entry);
        }
    }

    signals
}
