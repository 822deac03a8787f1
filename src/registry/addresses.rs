//! Known contract addresses (Ethereum mainnet)
//!
//! Keys are exact lower-cased hex. The label is the display name a match
//! surfaces when the contract is the transaction's callee.

use super::ProtocolFamily;

/// One embedded address entry
#[derive(Debug, Clone, Copy)]
pub struct AddressSpec {
    pub address: &'static str,
    pub label: &'static str,
    pub family: ProtocolFamily,
}

const fn addr(address: &'static str, label: &'static str, family: ProtocolFamily) -> AddressSpec {
    AddressSpec {
        address,
        label,
        family,
    }
}

pub const KNOWN_ADDRESSES: &[AddressSpec] = &[
    // DEX routers and aggregators
    addr(
        "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
        "Uniswap V2 Router",
        ProtocolFamily::Dex,
    ),
    addr(
        "0xe592427a0aece92de3edee1f18e0157c05861564",
        "Uniswap V3 Router",
        ProtocolFamily::Dex,
    ),
    addr(
        "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45",
        "Uniswap V3 Router 02",
        ProtocolFamily::Dex,
    ),
    addr(
        "0x3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad",
        "Uniswap Universal Router",
        ProtocolFamily::Dex,
    ),
    addr(
        "0xd9e1ce17f2641f24ae83637ab66a2cca9c378b9f",
        "SushiSwap Router",
        ProtocolFamily::Dex,
    ),
    addr(
        "0x1111111254fb6c44bac0bed2854e76f90643097d",
        "1inch Aggregation Router V4",
        ProtocolFamily::Dex,
    ),
    addr(
        "0x1111111254eeb25477b68fb85ed929f73a960582",
        "1inch Aggregation Router V5",
        ProtocolFamily::Dex,
    ),
    addr(
        "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
        "0x Exchange Proxy",
        ProtocolFamily::Dex,
    ),
    // NFT marketplaces
    addr(
        "0x00000000006c3852cbef3e08e8df289169ede581",
        "OpenSea Seaport 1.1",
        ProtocolFamily::NftMarketplace,
    ),
    addr(
        "0x00000000000000adc04c56bf4d90b1e35ee4df70",
        "OpenSea Seaport 1.5",
        ProtocolFamily::NftMarketplace,
    ),
    addr(
        "0x7f268357a8c2552623316e2562d90e642bb538e5",
        "OpenSea Wyvern Exchange",
        ProtocolFamily::NftMarketplace,
    ),
    addr(
        "0x000000000000ad05ccc4f10045630fb830b95127",
        "Blur Marketplace",
        ProtocolFamily::NftMarketplace,
    ),
    addr(
        "0x59728544b08ab483533076417fbbb2fd0b17ce3a",
        "LooksRare Exchange",
        ProtocolFamily::NftMarketplace,
    ),
    addr(
        "0x74312363e45dcaba76c59ec49a7aa8a65a67eed3",
        "X2Y2 Exchange",
        ProtocolFamily::NftMarketplace,
    ),
    // Lending pools
    addr(
        "0x7d2768de32b0b80b7a3454c06bdac94a69ddc7a9",
        "Aave V2 Lending Pool",
        ProtocolFamily::Lending,
    ),
    addr(
        "0x87870bca3f3fd6335c3f4ce8392d69350b4fa4e2",
        "Aave V3 Pool",
        ProtocolFamily::Lending,
    ),
    addr(
        "0x3d9819210a31b4961b30ef54be2aed79b9c9cd3b",
        "Compound Comptroller",
        ProtocolFamily::Lending,
    ),
    addr(
        "0x5d3a536e4d6dbd6114cc1ead35777bab948e3643",
        "Compound cDAI",
        ProtocolFamily::Lending,
    ),
    addr(
        "0x39aa39c021dfbae8fac545936693ac917d5e7563",
        "Compound cUSDC",
        ProtocolFamily::Lending,
    ),
    // Staking
    addr(
        "0xae7ab96520de3a18e5e111b5eaab095312d7fe84",
        "Lido stETH",
        ProtocolFamily::Staking,
    ),
    addr(
        "0xdd3f50f8a6cafbe9b31a427582963f465e745af8",
        "Rocket Pool Deposit Pool",
        ProtocolFamily::Staking,
    ),
    addr(
        "0x00000000219ab540356cbb839cbe05303d7705fa",
        "Beacon Chain Deposit Contract",
        ProtocolFamily::Staking,
    ),
    // Bridges
    addr(
        "0x4dbd4fc535ac27206064b68ffcf827b0a60bab3f",
        "Arbitrum Delayed Inbox",
        ProtocolFamily::Bridge,
    ),
    addr(
        "0x99c9fc46f92e8a1c0dec1b1747d010903e884be1",
        "Optimism Gateway",
        ProtocolFamily::Bridge,
    ),
    addr(
        "0xa0c68c638235ee32657e8f720a23cec1bfc77c77",
        "Polygon PoS Bridge",
        ProtocolFamily::Bridge,
    ),
    addr(
        "0xb8901acb165ed027e32754e0ffe830802919727f",
        "Hop ETH Bridge",
        ProtocolFamily::Bridge,
    ),
    addr(
        "0x3ee18b2214aff97000d974cf647e7c347e8fa585",
        "Wormhole Token Bridge",
        ProtocolFamily::Bridge,
    ),
    // Wrapped native token
    addr(
        "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
        "Wrapped Ether",
        ProtocolFamily::WrappedNative,
    ),
];
