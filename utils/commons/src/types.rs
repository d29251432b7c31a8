use super::*;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type ContractResult<A> = Result<A, ContractError>;

/// Token ids are handed out sequentially, so `u32` is enough.
pub type ContractTokenId = TokenIdU32;

/// Every token is unique, so only the amounts 0 and 1 are meaningful.
pub type ContractTokenAmount = TokenAmountU8;

/// Identifier of a market listing. Ids follow creation order.
pub type ItemId = u64;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenIDs used by these contracts.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

/// Response type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenAmounts used by these contracts.
pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;

/// Parameter type for the CIS-2 function `tokenMetadata` specialized to the
/// subset of TokenIDs used by these contracts.
pub type ContractTokenMetadataQueryParams = TokenMetadataQueryParams<ContractTokenId>;

/// Parameter of the CIS-2 receive hook.
pub type ContractOnReceivingParams = OnReceivingCis2Params<ContractTokenId, ContractTokenAmount>;
