use super::*;

/// Tag for the Listing event.
pub const LISTING_TAG: u8 = u8::MAX - 5;

/// Tag for the Sale event.
pub const SALE_TAG: u8 = u8::MAX - 6;

/// Tag for the ListingFeeUpdated event.
pub const LISTING_FEE_TAG: u8 = u8::MAX - 7;

/// Fee charged per listing by a freshly deployed market: 0.025 CCD.
pub const DEFAULT_LISTING_FEE: Amount = Amount { micro_ccd: 25_000 };

/// First token id handed out by a token registry.
pub const FIRST_TOKEN_ID: u32 = 1;

/// First listing id handed out by a market.
pub const FIRST_ITEM_ID: ItemId = 1;

/// CIS-2 entrypoint used to move tokens between addresses.
pub const TRANSFER_ENTRYPOINT: &str = "transfer";

/// Entrypoint the market exposes to receive escrowed tokens.
pub const ON_RECEIVING_ENTRYPOINT: &str = "onReceivingCIS2";
