//! Marketplace for CIS-2 tokens.
//!
//! Sellers list a token at a price behind a listing fee, the market holds the
//! token in escrow until a buyer pays the asking price.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

pub mod contract;
pub mod events;
pub mod external;
pub mod nft;
pub mod state;

#[cfg(test)]
mod scenario;
