use super::*;

/// Parameter of the `mint` function.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct MintParams {
    /// Metadata url of the new token. Duplicates are allowed.
    pub url: String,
}

/// The standards this contract implements.
pub const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];
