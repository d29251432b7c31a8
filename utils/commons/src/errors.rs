use super::*;

/// The custom errors the marketplace contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Listing price must be above zero (Error code: -4).
    InvalidPrice,
    /// Attached amount differs from the listing fee (Error code: -5).
    ListingFeeMismatch,
    /// Attached amount differs from the asking price (Error code: -6).
    PriceMismatch,
    /// Token is not listed for sale (Error code: -7).
    TokenNotListedForSale,
    /// Token already has an unsold listing (Error code: -8).
    TokenAlreadyListed,
    /// Listing was already sold (Error code: -9).
    ListingAlreadySold,
    /// No listing with this id (Error code: -10).
    UnknownListing,
    /// Only account addresses can list and buy tokens (Error code: -11).
    OnlyAccountAddress,
    /// This function must only be called by a contract (Error code: -12).
    ContractOnly,
    /// Token arrived outside of a listing (Error code: -13).
    UnexpectedTransfer,
    /// The operator set cannot become empty (Error code: -14).
    LastOperator,
    /// Token ids are exhausted (Error code: -15).
    TokenIdOverflow,
    /// Failed to invoke a contract (Error code: -16).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -17).
    InvokeTransferError,
    /// Incompatible contract (Error code: -18).
    Incompatible,
    /// Invoked with more than the contract balance (Error code: -19).
    AmountTooLarge,
    /// Invoked account does not exist (Error code: -20).
    MissingAccount,
    /// Invoked contract does not exist (Error code: -21).
    MissingContract,
    /// Invoked contract trapped (Error code: -22).
    Trap,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
///
/// A contract lacking the entrypoint, or failing to take the message at all,
/// is not a CIS-2 token contract we can work with. A logic rejection of the
/// invoked contract becomes `InvokeContractError`.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(cce: CallContractError<T>) -> Self {
        match cce {
            CallContractError::AmountTooLarge => Self::AmountTooLarge,
            CallContractError::MissingAccount => Self::MissingAccount,
            CallContractError::MissingContract => Self::MissingContract,
            CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
                Self::Incompatible
            }
            CallContractError::LogicReject { .. } => Self::InvokeContractError,
            CallContractError::Trap => Self::Trap,
        }
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_call_errors_are_classified() {
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MissingEntrypoint),
            CustomContractError::Incompatible
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MessageFailed),
            CustomContractError::Incompatible
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::Trap),
            CustomContractError::Trap
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::AmountTooLarge),
            CustomContractError::AmountTooLarge
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MissingAccount),
            CustomContractError::MissingAccount
        );
        claim_eq!(
            CustomContractError::from(CallContractError::<()>::MissingContract),
            CustomContractError::MissingContract
        );
        claim_eq!(
            CustomContractError::from(CallContractError::LogicReject {
                reason: -1,
                return_value: (),
            }),
            CustomContractError::InvokeContractError
        );
    }

    #[concordium_test]
    fn test_error_codes_are_stable() {
        claim_eq!(
            Reject::from(CustomContractError::ParseParams).error_code.get(),
            -1
        );
        claim_eq!(
            Reject::from(CustomContractError::InvalidPrice).error_code.get(),
            -4
        );
        claim_eq!(
            Reject::from(CustomContractError::Incompatible).error_code.get(),
            -18
        );
        claim_eq!(Reject::from(CustomContractError::Trap).error_code.get(), -22);
    }
}
