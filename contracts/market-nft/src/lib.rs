//! CIS-2 non-fungible token registry bound to a single market.
//!
//! Tokens get sequential ids starting at 1 and an immutable metadata url.
//! The bound market contract may move any token on behalf of its owner.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{external::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

pub mod contract;
pub mod external;
pub mod state;
