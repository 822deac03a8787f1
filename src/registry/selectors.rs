//! Known 4-byte method selectors
//!
//! Keys are exact lower-cased hex (`0x` + 8 digits). Each selector belongs to
//! exactly one protocol family; shared-looking methods (e.g. `deposit()`)
//! are assigned to the family whose contracts dominate their use.

use super::ProtocolFamily;

/// One embedded selector entry
#[derive(Debug, Clone, Copy)]
pub struct SelectorSpec {
    pub selector: &'static str,
    pub method: &'static str,
    pub family: ProtocolFamily,
}

const fn sel(selector: &'static str, method: &'static str, family: ProtocolFamily) -> SelectorSpec {
    SelectorSpec {
        selector,
        method,
        family,
    }
}

pub const KNOWN_SELECTORS: &[SelectorSpec] = &[
    // Uniswap V2-style router methods
    sel("0x38ed1739", "swapExactTokensForTokens", ProtocolFamily::Dex),
    sel("0x7ff36ab5", "swapExactETHForTokens", ProtocolFamily::Dex),
    sel("0x18cbafe5", "swapExactTokensForETH", ProtocolFamily::Dex),
    sel("0x8803dbee", "swapTokensForExactTokens", ProtocolFamily::Dex),
    sel("0xfb3bdb41", "swapETHForExactTokens", ProtocolFamily::Dex),
    sel("0x4a25d94a", "swapTokensForExactETH", ProtocolFamily::Dex),
    sel(
        "0x5c11d795",
        "swapExactTokensForTokensSupportingFeeOnTransferTokens",
        ProtocolFamily::Dex,
    ),
    sel(
        "0x791ac947",
        "swapExactTokensForETHSupportingFeeOnTransferTokens",
        ProtocolFamily::Dex,
    ),
    sel(
        "0xb6f9de95",
        "swapExactETHForTokensSupportingFeeOnTransferTokens",
        ProtocolFamily::Dex,
    ),
    sel("0xe8e33700", "addLiquidity", ProtocolFamily::Dex),
    sel("0xf305d719", "addLiquidityETH", ProtocolFamily::Dex),
    sel("0xbaa2abde", "removeLiquidity", ProtocolFamily::Dex),
    sel("0x02751cec", "removeLiquidityETH", ProtocolFamily::Dex),
    sel("0x2195995c", "removeLiquidityWithPermit", ProtocolFamily::Dex),
    // Uniswap V3-style router methods
    sel("0x414bf389", "exactInputSingle", ProtocolFamily::Dex),
    sel("0xc04b8d59", "exactInput", ProtocolFamily::Dex),
    sel("0xdb3e2198", "exactOutputSingle", ProtocolFamily::Dex),
    sel("0xf28c0498", "exactOutput", ProtocolFamily::Dex),
    sel("0x5ae401dc", "multicall", ProtocolFamily::Dex),
    sel("0x3593564c", "execute", ProtocolFamily::Dex),
    // Aggregators
    sel("0x12aa3caf", "swap", ProtocolFamily::Dex),
    // NFT marketplace fills
    sel("0xfb0f3ee1", "fulfillBasicOrder", ProtocolFamily::NftMarketplace),
    sel("0xb3a34c4c", "fulfillOrder", ProtocolFamily::NftMarketplace),
    sel(
        "0xe7acab24",
        "fulfillAdvancedOrder",
        ProtocolFamily::NftMarketplace,
    ),
    sel(
        "0x87201b41",
        "fulfillAvailableAdvancedOrders",
        ProtocolFamily::NftMarketplace,
    ),
    sel("0xab834bab", "atomicMatch_", ProtocolFamily::NftMarketplace),
    // Lending pool operations
    sel("0xe8eda9df", "deposit", ProtocolFamily::Lending),
    sel("0x617ba037", "supply", ProtocolFamily::Lending),
    sel("0x69328dec", "withdraw", ProtocolFamily::Lending),
    sel("0xa415bcad", "borrow", ProtocolFamily::Lending),
    sel("0x573ade81", "repay", ProtocolFamily::Lending),
    sel("0x1249c58b", "mint", ProtocolFamily::Lending),
    sel("0xdb006a75", "redeem", ProtocolFamily::Lending),
    sel("0x852a12e3", "redeemUnderlying", ProtocolFamily::Lending),
    sel("0xc5ebeaec", "borrow", ProtocolFamily::Lending),
    sel("0x0e752702", "repayBorrow", ProtocolFamily::Lending),
    // Staking
    sel("0xa1903eab", "submit", ProtocolFamily::Staking),
    sel("0x3a4b66f1", "stake", ProtocolFamily::Staking),
    sel("0x2def6620", "unstake", ProtocolFamily::Staking),
    sel("0x22895118", "deposit", ProtocolFamily::Staking),
    // Bridge deposits
    sel("0x4faa8a26", "depositEtherFor", ProtocolFamily::Bridge),
    sel("0xe3dec8fb", "depositFor", ProtocolFamily::Bridge),
    sel("0x439370b1", "depositEth", ProtocolFamily::Bridge),
    sel("0x9a2ac6d5", "depositETHTo", ProtocolFamily::Bridge),
    sel("0xdeace8f5", "sendToL2", ProtocolFamily::Bridge),
    sel("0x0f5287b0", "transferTokens", ProtocolFamily::Bridge),
    // Wrapped native token
    sel("0xd0e30db0", "deposit", ProtocolFamily::WrappedNative),
    sel("0x2e1a7d4d", "withdraw", ProtocolFamily::WrappedNative),
    // Token standards (ERC-20 / ERC-721 / ERC-1155)
    sel("0xa9059cbb", "transfer", ProtocolFamily::Token),
    sel("0x23b872dd", "transferFrom", ProtocolFamily::Token),
    sel("0x095ea7b3", "approve", ProtocolFamily::Token),
    sel("0xa22cb465", "setApprovalForAll", ProtocolFamily::Token),
    sel("0x40c10f19", "mint", ProtocolFamily::Token),
    sel("0xa0712d68", "mint", ProtocolFamily::Token),
    sel("0x42966c68", "burn", ProtocolFamily::Token),
    sel("0x9dc29fac", "burn", ProtocolFamily::Token),
    sel("0x42842e0e", "safeTransferFrom", ProtocolFamily::Token),
    sel("0xb88d4fde", "safeTransferFrom", ProtocolFamily::Token),
    sel("0xf242432a", "safeTransferFrom", ProtocolFamily::Token),
    sel("0x2eb2c2d6", "safeBatchTransferFrom", ProtocolFamily::Token),
];
