use super::*;

/// Parameter of the `createListing` function.
#[derive(Debug, Clone, SchemaType, Serialize, PartialEq, Eq)]
pub struct CreateListingParams {
    /// Token to put up for sale. The sender must own it.
    pub token: Token,
    /// Asking price, must be above zero.
    pub price: Amount,
}

/// Page of a listing query.
#[derive(Debug, Clone, Copy, SchemaType, Serialize, PartialEq, Eq)]
pub struct ListingsViewParams {
    /// Number of listings to pass over.
    pub skip: u32,
    /// Maximum number of listings to return.
    pub show: u32,
}

#[derive(Debug, Clone, Copy, SchemaType, Serialize, PartialEq, Eq)]
pub enum ViewInternalValueParams {
    ListingFee,
    Beneficiary,
}

#[derive(Debug, Clone, SchemaType, Serialize, PartialEq, Eq)]
pub enum InternalValue {
    /// Exact amount to attach when creating a listing.
    ListingFee(Amount),
    /// Account receiving the listing fees.
    Beneficiary(AccountAddress),
}
