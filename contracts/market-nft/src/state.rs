use super::*;
use core::{convert::TryFrom, ops::DerefMut};

/// Data stored for every minted token.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// Current holder of the token.
    pub owner: Address,
    /// Metadata url fixed at mint.
    pub metadata_url: String,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Market allowed to move any token on behalf of its owner.
    pub market: ContractAddress,
    /// All minted tokens.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Operators for each address for this contract.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Id the next minted token receives. Ids past `u32::MAX` are exhausted.
    pub next_token_id: u64,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>, market: ContractAddress) -> Self {
        Self {
            market,
            tokens: state_builder.new_map(),
            operators: state_builder.new_map(),
            next_token_id: FIRST_TOKEN_ID.into(),
        }
    }

    /// Mint a token owned by `owner` and return its id.
    ///
    /// Rejects with `TokenIdOverflow` once `u32::MAX` has been minted.
    pub fn mint(
        &mut self,
        owner: Address,
        metadata_url: String,
    ) -> ContractResult<ContractTokenId> {
        let id = u32::try_from(self.next_token_id)
            .map_err(|_| CustomContractError::TokenIdOverflow)?;
        let token_id = TokenIdU32(id);
        self.next_token_id += 1;
        self.tokens.insert(
            token_id,
            TokenData {
                owner,
                metadata_url,
            },
        );
        Ok(token_id)
    }

    pub fn token(&self, token_id: &ContractTokenId) -> ContractResult<TokenData> {
        self.tokens
            .get(token_id)
            .map(|data| (*data).clone())
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Balance of `address` for the given token, which is either 0 or 1.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let data = self.token(token_id)?;
        let balance = if data.owner == *address { 1 } else { 0 };
        Ok(ContractTokenAmount::from(balance))
    }

    /// Move a token from `from` to `to`.
    ///
    /// Transferring an amount of 0 only checks that the token exists.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let mut data = self.token(token_id)?;
        if amount == ContractTokenAmount::from(0) {
            return Ok(());
        }

        ensure!(
            amount == ContractTokenAmount::from(1) && data.owner == *from,
            ContractError::InsufficientFunds
        );

        data.owner = *to;
        self.tokens.insert(*token_id, data);
        Ok(())
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    ///
    /// The bound market counts as an operator of every owner.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        *address == Address::Contract(self.market)
            || self
                .operators
                .get(owner)
                .map(|operators| operators.contains(address))
                .unwrap_or(false)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const MARKET: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const ALICE: Address = Address::Account(AccountAddress([1; 32]));
    const BOB: Address = Address::Account(AccountAddress([2; 32]));

    #[concordium_test]
    fn test_mint_assigns_sequential_ids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, MARKET);

        let first = state.mint(ALICE, "a".into()).expect_report("Minting first");
        let second = state.mint(ALICE, "a".into()).expect_report("Minting second");

        claim_eq!(first, TokenIdU32(1));
        claim_eq!(second, TokenIdU32(2));
        claim_eq!(state.next_token_id, 3);
        claim_eq!(
            state.token(&second).map(|data| data.metadata_url),
            Ok(String::from("a"))
        );
    }

    #[concordium_test]
    fn test_mint_rejects_when_ids_run_out() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, MARKET);
        state.next_token_id = u32::MAX.into();

        // The largest id is still handed out.
        let last = state.mint(ALICE, "a".into());
        claim_eq!(last, Ok(TokenIdU32(u32::MAX)));

        let result = state.mint(ALICE, "a".into());
        claim_eq!(result, Err(CustomContractError::TokenIdOverflow.into()));
        claim_eq!(state.tokens.iter().count(), 1);
    }

    #[concordium_test]
    fn test_transfer_amounts() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, MARKET);
        let token = state.mint(ALICE, "a".into()).expect_report("Minting");

        // Zero amount leaves the owner untouched.
        let result = state.transfer(&token, ContractTokenAmount::from(0), &BOB, &BOB);
        claim_eq!(result, Ok(()));
        claim_eq!(state.balance(&token, &ALICE), Ok(ContractTokenAmount::from(1)));

        let result = state.transfer(&token, ContractTokenAmount::from(2), &ALICE, &BOB);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let result = state.transfer(&token, ContractTokenAmount::from(1), &BOB, &ALICE);
        claim_eq!(result, Err(ContractError::InsufficientFunds));

        let result = state.transfer(&TokenIdU32(7), ContractTokenAmount::from(1), &ALICE, &BOB);
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        let result = state.transfer(&token, ContractTokenAmount::from(1), &ALICE, &BOB);
        claim_eq!(result, Ok(()));
        claim_eq!(state.balance(&token, &ALICE), Ok(ContractTokenAmount::from(0)));
        claim_eq!(state.balance(&token, &BOB), Ok(ContractTokenAmount::from(1)));
    }

    #[concordium_test]
    fn test_market_is_operator_of_everyone() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, MARKET);

        claim!(state.is_operator(&ALICE, &Address::Contract(MARKET)));
        claim!(!state.is_operator(&ALICE, &ALICE));
        claim!(!state.is_operator(&ALICE, &BOB));

        state.add_operator(&ALICE, &BOB, &mut state_builder);
        claim!(state.is_operator(&ALICE, &BOB));
        claim!(!state.is_operator(&BOB, &ALICE));

        state.remove_operator(&ALICE, &BOB);
        claim!(!state.is_operator(&ALICE, &BOB));
    }
}
