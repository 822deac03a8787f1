//! Signal registries
//!
//! Centralised lookup tables mapping known on-chain identifiers to semantic
//! meaning - the single source of truth every detector matches against:
//!
//! - known contract addresses -> (protocol family, display label)
//! - known 4-byte method selectors -> (protocol family, method name)
//! - known event-topic hashes -> (family, event kind, implied type, label)
//!
//! The embedded tables live in the `addresses`, `selectors` and `topics`
//! submodules. `Registries::load` builds the hash maps once at process start,
//! optionally merging a TOML overlay, and validates every key; a validation
//! failure is fatal - the process must not serve classification requests with
//! a partially loaded registry. After construction the tables are immutable
//! and safe to share across concurrent classification calls without locking.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::types::TransactionType;
use crate::utils::hex::{ADDRESS_RE, HASH_RE, SELECTOR_RE};

pub mod addresses;
pub mod selectors;
pub mod topics;

pub use topics::{ERC20_TRANSFER_TOPIC, ZERO_TOPIC};

/// Protocol families the detector set is partitioned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolFamily {
    Dex,
    NftMarketplace,
    Lending,
    Staking,
    Bridge,
    WrappedNative,
    Token,
}

/// How a registered event signature contributes to a family's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Primary evidence for the family; credits weight and refines the label
    Core,
    /// Mint-style secondary action; penalised when no core log is present
    SecondaryMint,
    /// Burn-style secondary action; penalised when no core log is present
    SecondaryBurn,
}

/// Registry entry for a known contract address
#[derive(Debug, Clone)]
pub struct AddressEntry {
    pub label: String,
    pub family: ProtocolFamily,
}

/// Registry entry for a known method selector
#[derive(Debug, Clone)]
pub struct SelectorEntry {
    pub method: String,
    pub family: ProtocolFamily,
}

/// Registry entry for a known event-topic hash
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub family: ProtocolFamily,
    pub kind: EventKind,
    /// Transaction type implied when this event is the deciding signal
    pub tx_type: TransactionType,
    /// Refinement label applied when the base label is still generic
    pub label: String,
    /// Precedence among the family's signatures; lower is more specific
    pub precedence: u8,
}

/// Additional registry entries merged at process start from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryOverlay {
    #[serde(default)]
    pub addresses: Vec<OverlayAddress>,
    #[serde(default)]
    pub selectors: Vec<OverlaySelector>,
    #[serde(default)]
    pub topics: Vec<OverlayTopic>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayAddress {
    pub address: String,
    pub label: String,
    pub family: ProtocolFamily,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlaySelector {
    pub selector: String,
    pub method: String,
    pub family: ProtocolFamily,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayTopic {
    pub topic: String,
    pub family: ProtocolFamily,
    pub kind: EventKind,
    pub tx_type: TransactionType,
    pub label: String,
    #[serde(default)]
    pub precedence: u8,
}

impl RegistryOverlay {
    /// Parse an overlay from TOML text
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse an overlay file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Table sizes, for the registry CLI surface
#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub addresses: usize,
    pub selectors: usize,
    pub topics: usize,
}

/// The immutable signal tables shared by all detectors
#[derive(Debug)]
pub struct Registries {
    addresses: HashMap<String, AddressEntry>,
    selectors: HashMap<String, SelectorEntry>,
    topics: HashMap<String, TopicEntry>,
}

impl Registries {
    /// Build the registries from the embedded tables only
    pub fn builtin() -> AppResult<Self> {
        Self::build(None)
    }

    /// Build the registries from the embedded tables plus an overlay
    pub fn with_overlay(overlay: &RegistryOverlay) -> AppResult<Self> {
        Self::build(Some(overlay))
    }

    fn build(overlay: Option<&RegistryOverlay>) -> AppResult<Self> {
        let mut registries = Self {
            addresses: HashMap::new(),
            selectors: HashMap::new(),
            topics: HashMap::new(),
        };

        for spec in addresses::KNOWN_ADDRESSES {
            registries.insert_address(
                spec.address,
                AddressEntry {
                    label: spec.label.to_string(),
                    family: spec.family,
                },
            )?;
        }
        for spec in selectors::KNOWN_SELECTORS {
            registries.insert_selector(
                spec.selector,
                SelectorEntry {
                    method: spec.method.to_string(),
                    family: spec.family,
                },
            )?;
        }
        for spec in topics::KNOWN_TOPICS {
            registries.insert_topic(
                spec.topic,
                TopicEntry {
                    family: spec.family,
                    kind: spec.kind,
                    tx_type: spec.tx_type,
                    label: spec.label.to_string(),
                    precedence: spec.precedence,
                },
            )?;
        }

        if let Some(overlay) = overlay {
            for entry in &overlay.addresses {
                registries.insert_address(
                    &entry.address,
                    AddressEntry {
                        label: entry.label.clone(),
                        family: entry.family,
                    },
                )?;
            }
            for entry in &overlay.selectors {
                registries.insert_selector(
                    &entry.selector,
                    SelectorEntry {
                        method: entry.method.clone(),
                        family: entry.family,
                    },
                )?;
            }
            for entry in &overlay.topics {
                registries.insert_topic(
                    &entry.topic,
                    TopicEntry {
                        family: entry.family,
                        kind: entry.kind,
                        tx_type: entry.tx_type,
                        label: entry.label.clone(),
                        precedence: entry.precedence,
                    },
                )?;
            }
            debug!(
                "Registry overlay merged: {} addresses, {} selectors, {} topics",
                overlay.addresses.len(),
                overlay.selectors.len(),
                overlay.topics.len()
            );
        }

        Ok(registries)
    }

    fn insert_address(&mut self, key: &str, entry: AddressEntry) -> AppResult<()> {
        if !ADDRESS_RE.is_match(key) {
            return Err(AppError::Registry(format!(
                "malformed address key: {}",
                key
            )));
        }
        if self.addresses.insert(key.to_string(), entry).is_some() {
            return Err(AppError::Registry(format!(
                "duplicate address key: {}",
                key
            )));
        }
        Ok(())
    }

    fn insert_selector(&mut self, key: &str, entry: SelectorEntry) -> AppResult<()> {
        if !SELECTOR_RE.is_match(key) {
            return Err(AppError::Registry(format!(
                "malformed selector key: {}",
                key
            )));
        }
        if self.selectors.insert(key.to_string(), entry).is_some() {
            return Err(AppError::Registry(format!(
                "duplicate selector key: {}",
                key
            )));
        }
        Ok(())
    }

    fn insert_topic(&mut self, key: &str, entry: TopicEntry) -> AppResult<()> {
        if !HASH_RE.is_match(key) {
            return Err(AppError::Registry(format!("malformed topic key: {}", key)));
        }
        if self.topics.insert(key.to_string(), entry).is_some() {
            return Err(AppError::Registry(format!("duplicate topic key: {}", key)));
        }
        Ok(())
    }

    /// Look up a contract address (expects a lower-cased key)
    pub fn address(&self, key: &str) -> Option<&AddressEntry> {
        self.addresses.get(key)
    }

    /// Look up a 4-byte method selector (expects a lower-cased key)
    pub fn selector(&self, key: &str) -> Option<&SelectorEntry> {
        self.selectors.get(key)
    }

    /// Look up an event-topic hash (expects a lower-cased key)
    pub fn topic(&self, key: &str) -> Option<&TopicEntry> {
        self.topics.get(key)
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            addresses: self.addresses.len(),
            selectors: self.selectors.len(),
            topics: self.topics.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        let registries = Registries::builtin().expect("embedded tables must be well-formed");
        let stats = registries.stats();
        assert!(stats.addresses > 0);
        assert!(stats.selectors > 0);
        assert!(stats.topics > 0);
    }

    #[test]
    fn test_lookups_hit_known_entries() {
        let registries = Registries::builtin().unwrap();

        let uniswap = registries
            .address("0x7a250d5630b4cf539739df2c5dacb4c659f2488d")
            .expect("Uniswap V2 router is embedded");
        assert_eq!(uniswap.family, ProtocolFamily::Dex);

        let transfer = registries.selector("0xa9059cbb").expect("ERC-20 transfer");
        assert_eq!(transfer.family, ProtocolFamily::Token);

        let swap = registries
            .topic("0xd78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822")
            .expect("Uniswap V2 swap event");
        assert_eq!(swap.kind, EventKind::Core);
        assert_eq!(swap.tx_type, TransactionType::Swap);
    }

    #[test]
    fn test_lookup_misses_upper_case_key() {
        // Matching is exact on lower-cased keys; normalisation is the
        // ingest boundary's job.
        let registries = Registries::builtin().unwrap();
        assert!(registries
            .address("0x7A250D5630B4CF539739DF2C5DACB4C659F2488D")
            .is_none());
    }

    #[test]
    fn test_overlay_merges_new_entries() {
        let overlay = RegistryOverlay::from_toml_str(
            r#"
            [[addresses]]
            address = "0x1111111111111111111111111111111111111111"
            label = "In-house Router"
            family = "dex"

            [[topics]]
            topic = "0x1111111111111111111111111111111111111111111111111111111111111111"
            family = "dex"
            kind = "core"
            tx_type = "SWAP"
            label = "In-house DEX"
            precedence = 9
            "#,
        )
        .unwrap();

        let registries = Registries::with_overlay(&overlay).unwrap();
        let entry = registries
            .address("0x1111111111111111111111111111111111111111")
            .unwrap();
        assert_eq!(entry.label, "In-house Router");
    }

    #[test]
    fn test_overlay_malformed_key_is_fatal() {
        let overlay = RegistryOverlay {
            addresses: vec![OverlayAddress {
                address: "0xNOTHEX".to_string(),
                label: "Broken".to_string(),
                family: ProtocolFamily::Dex,
            }],
            ..Default::default()
        };
        assert!(matches!(
            Registries::with_overlay(&overlay),
            Err(AppError::Registry(_))
        ));
    }

    #[test]
    fn test_overlay_duplicate_key_is_fatal() {
        let overlay = RegistryOverlay {
            addresses: vec![OverlayAddress {
                // Already present in the embedded table
                address: "0x7a250d5630b4cf539739df2c5dacb4c659f2488d".to_string(),
                label: "Shadowed".to_string(),
                family: ProtocolFamily::Dex,
            }],
            ..Default::default()
        };
        assert!(matches!(
            Registries::with_overlay(&overlay),
            Err(AppError::Registry(_))
        ));
    }
}
