//! Known event-topic hashes (`topics[0]` signatures)
//!
//! Keys are exact lower-cased hex (`0x` + 64 digits). Within a family,
//! `precedence` orders the signatures from most to least specific; it drives
//! both label refinement and, for families whose core actions differ in kind,
//! the choice of transaction type when several known events appear in one
//! receipt.

use super::{EventKind, ProtocolFamily};
use crate::types::TransactionType;

/// The ERC-20/721 `Transfer(address,address,uint256)` signature hash. The
/// token-transfer detector compares against it directly to spot zero-address
/// mints and burns.
pub const ERC20_TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// A 32-byte zero word: the zero address as an indexed topic
pub const ZERO_TOPIC: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// One embedded topic entry
#[derive(Debug, Clone, Copy)]
pub struct TopicSpec {
    pub topic: &'static str,
    pub family: ProtocolFamily,
    pub kind: EventKind,
    pub tx_type: TransactionType,
    pub label: &'static str,
    pub precedence: u8,
}

pub const KNOWN_TOPICS: &[TopicSpec] = &[
    // --- DEX: Uniswap V3 pool events (more specific than V2) ---
    TopicSpec {
        topic: "0xc42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67",
        family: ProtocolFamily::Dex,
        kind: EventKind::Core,
        tx_type: TransactionType::Swap,
        label: "Uniswap V3",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x7a53080ba414158be7ec69b987b5fb7d07dee101fe85488f0853ae16239d0bde",
        family: ProtocolFamily::Dex,
        kind: EventKind::SecondaryMint,
        tx_type: TransactionType::AddLiquidity,
        label: "Uniswap V3",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x0c396cd989a39f4459b5fa1aed6a9a8dcdbc45908acfd67e028cd568da98982c",
        family: ProtocolFamily::Dex,
        kind: EventKind::SecondaryBurn,
        tx_type: TransactionType::RemoveLiquidity,
        label: "Uniswap V3",
        precedence: 1,
    },
    // --- DEX: Uniswap V2 pair events (shared by the V2 fork family) ---
    TopicSpec {
        topic: "0xd78ad95fa46c994b6551d0da85fc275fe613ce37657fb8d5e3d130840159d822",
        family: ProtocolFamily::Dex,
        kind: EventKind::Core,
        tx_type: TransactionType::Swap,
        label: "Uniswap V2",
        precedence: 2,
    },
    TopicSpec {
        topic: "0x4c209b5fc8ad50758f13e2e1088ba56a560dff690a1c6fef26394f4c03821c4f",
        family: ProtocolFamily::Dex,
        kind: EventKind::SecondaryMint,
        tx_type: TransactionType::AddLiquidity,
        label: "Uniswap V2",
        precedence: 2,
    },
    TopicSpec {
        topic: "0xdccd412f0b1252819cb1fd330b93224ca42612892bb3f4f789976e6d81936496",
        family: ProtocolFamily::Dex,
        kind: EventKind::SecondaryBurn,
        tx_type: TransactionType::RemoveLiquidity,
        label: "Uniswap V2",
        precedence: 2,
    },
    // --- NFT marketplace sale events ---
    TopicSpec {
        topic: "0x9d9af8e38d66c62e2c12f0225249fd9d721c54b83f48d9352c97c6cacdcb6f31",
        family: ProtocolFamily::NftMarketplace,
        kind: EventKind::Core,
        tx_type: TransactionType::NftSale,
        label: "OpenSea Seaport",
        precedence: 1,
    },
    TopicSpec {
        topic: "0xc4109843e0b7d514e4c093114b863f8e7d8d9a458c372cd51bfe526b588006c9",
        family: ProtocolFamily::NftMarketplace,
        kind: EventKind::Core,
        tx_type: TransactionType::NftSale,
        label: "OpenSea Wyvern",
        precedence: 2,
    },
    TopicSpec {
        topic: "0x95fb6205e23ff6bda16a2d1dba56b9ad7c783f67c96fa149785052f47696f2be",
        family: ProtocolFamily::NftMarketplace,
        kind: EventKind::Core,
        tx_type: TransactionType::NftSale,
        label: "LooksRare",
        precedence: 3,
    },
    // --- Lending pool events (Aave V2 vocabulary) ---
    TopicSpec {
        topic: "0xc6a898309e823ee50bac64e45ca8adba6690e99e7841c45d754e2a38e9019d9b",
        family: ProtocolFamily::Lending,
        kind: EventKind::Core,
        tx_type: TransactionType::Borrow,
        label: "Aave V2",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x4cdde6e09bb755c9a5589ebaec640bbfedff1362d4b255ebf8339782b9942faa",
        family: ProtocolFamily::Lending,
        kind: EventKind::Core,
        tx_type: TransactionType::Repay,
        label: "Aave V2",
        precedence: 2,
    },
    TopicSpec {
        topic: "0x3115d1449a7b732c986cba18244e897a450f61e1bb8d589cd2e69e6c8924f9f7",
        family: ProtocolFamily::Lending,
        kind: EventKind::Core,
        tx_type: TransactionType::Withdraw,
        label: "Aave V2",
        precedence: 3,
    },
    TopicSpec {
        topic: "0xde6857219544bb5b7746f48ed30be6386fefc61b2f864cacf559893bf50fd951",
        family: ProtocolFamily::Lending,
        kind: EventKind::Core,
        tx_type: TransactionType::Deposit,
        label: "Aave V2",
        precedence: 4,
    },
    // --- Staking events ---
    TopicSpec {
        topic: "0x96a25c8ce0baabc1fdefd93e9ed25d8e092a3332f3aa9a41722b5697231d1d1a",
        family: ProtocolFamily::Staking,
        kind: EventKind::Core,
        tx_type: TransactionType::Stake,
        label: "Lido",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x649bbc62d0e31342afea4e5cd82d4049e7e1ee912fc0889aa790803be39038c5",
        family: ProtocolFamily::Staking,
        kind: EventKind::Core,
        tx_type: TransactionType::Stake,
        label: "Beacon Chain Deposit",
        precedence: 2,
    },
    // --- Bridge events ---
    TopicSpec {
        topic: "0xff64905f73a67fb594e0f940a8075a860db489ad991e032f48c81123eb52d60b",
        family: ProtocolFamily::Bridge,
        kind: EventKind::Core,
        tx_type: TransactionType::Bridge,
        label: "Arbitrum Bridge",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x35d79ab81f2b2017e19afb5c5571778877782d7a8786f5907f93b0f4702f4f23",
        family: ProtocolFamily::Bridge,
        kind: EventKind::Core,
        tx_type: TransactionType::Bridge,
        label: "Optimism Bridge",
        precedence: 2,
    },
    TopicSpec {
        topic: "0x6eb224fb001ed210e379b335e35efe88672a8ce935d981a6896b27ffdf52a3b2",
        family: ProtocolFamily::Bridge,
        kind: EventKind::Core,
        tx_type: TransactionType::Bridge,
        label: "Wormhole",
        precedence: 3,
    },
    // --- Wrapped native token events (wrap mints, unwrap burns) ---
    TopicSpec {
        topic: "0xe1fffcc4923d04b559f4d40a8bfc6b2db48a2f3fe1fb25aa9edc7d3a1c9e07ce",
        family: ProtocolFamily::WrappedNative,
        kind: EventKind::Core,
        tx_type: TransactionType::Mint,
        label: "Wrapped Ether",
        precedence: 1,
    },
    TopicSpec {
        topic: "0x7fcf532c15f0a6db0bd6d0e038bea71d30d808c7d98cb3bf7268a95bf5081b65",
        family: ProtocolFamily::WrappedNative,
        kind: EventKind::Core,
        tx_type: TransactionType::Burn,
        label: "Wrapped Ether",
        precedence: 2,
    },
    // --- Token standard events ---
    TopicSpec {
        topic: ERC20_TRANSFER_TOPIC,
        family: ProtocolFamily::Token,
        kind: EventKind::Core,
        tx_type: TransactionType::Transfer,
        label: "ERC-20 Token",
        precedence: 1,
    },
    TopicSpec {
        topic: "0xc3d58168c5ae7397731d063d5bbf3d657854427343f4c083240f7aacaa2d0f62",
        family: ProtocolFamily::Token,
        kind: EventKind::Core,
        tx_type: TransactionType::Transfer,
        label: "ERC-1155 Token",
        precedence: 2,
    },
    TopicSpec {
        topic: "0x4a39dc06d4c0dbc64b70af90fd698a233a518aa5d07e595d983b8c0526c8f7fb",
        family: ProtocolFamily::Token,
        kind: EventKind::Core,
        tx_type: TransactionType::Transfer,
        label: "ERC-1155 Token",
        precedence: 3,
    },
    TopicSpec {
        topic: "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925",
        family: ProtocolFamily::Token,
        kind: EventKind::Core,
        tx_type: TransactionType::Approval,
        label: "ERC-20 Token",
        precedence: 4,
    },
    TopicSpec {
        topic: "0x17307eab39ab6107e8899845ad3d59bd9653f200f220920489ca2b5937696c31",
        family: ProtocolFamily::Token,
        kind: EventKind::Core,
        tx_type: TransactionType::Approval,
        label: "NFT Collection",
        precedence: 5,
    },
];
