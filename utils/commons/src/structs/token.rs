use super::*;

/// Reference to a token held by some CIS-2 contract.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct Token {
    /// Address of the token contract.
    pub contract: ContractAddress,
    /// Token id within that contract.
    pub id: ContractTokenId,
}

impl Token {
    pub fn new(contract: ContractAddress, id: ContractTokenId) -> Self {
        Self { contract, id }
    }
}
