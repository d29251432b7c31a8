use super::*;

/// A listing as stored by the market and returned by its queries.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct MarketItem {
    pub item_id: ItemId,
    pub token: Token,
    /// Account that listed the token and gets paid on sale.
    pub seller: AccountAddress,
    /// The market while the listing is open, the buyer once sold.
    pub holder: Address,
    pub price: Amount,
    pub sold: bool,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Addresses authorized to update the listing fee and beneficiary.
    pub authority: Authority<S>,
    /// Exact amount to attach when creating a listing.
    pub listing_fee: Amount,
    /// Account receiving the listing fees.
    pub beneficiary: AccountAddress,
    /// Every listing ever created, keyed by item id.
    pub items: StateMap<ItemId, MarketItem, S>,
    /// Latest listing of each token.
    pub latest_listing: StateMap<Token, ItemId, S>,
    /// Id the next listing receives.
    pub next_item_id: ItemId,
    pub items_sold: u64,
    /// Token the market is currently taking into escrow.
    pub incoming: Option<Token>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings.
    pub fn new(state_builder: &mut StateBuilder<S>, origin: AccountAddress) -> Self {
        Self {
            authority: Authority::new(state_builder, Address::Account(origin)),
            listing_fee: DEFAULT_LISTING_FEE,
            beneficiary: origin,
            items: state_builder.new_map(),
            latest_listing: state_builder.new_map(),
            next_item_id: FIRST_ITEM_ID,
            items_sold: 0,
            incoming: None,
        }
    }

    pub fn listing(&self, item_id: &ItemId) -> ContractResult<MarketItem> {
        self.items
            .get(item_id)
            .map(|item| (*item).clone())
            .ok_or_else(|| CustomContractError::UnknownListing.into())
    }

    /// Latest listing of `token`, which must still be unsold.
    pub fn open_listing(&self, token: &Token) -> ContractResult<MarketItem> {
        let item_id = self
            .latest_listing
            .get(token)
            .map(|item_id| *item_id)
            .ok_or(CustomContractError::TokenNotListedForSale)?;
        let item = self.listing(&item_id)?;
        ensure!(!item.sold, CustomContractError::ListingAlreadySold.into());
        Ok(item)
    }

    pub fn is_listed(&self, token: &Token) -> bool {
        self.open_listing(token).is_ok()
    }

    /// Record a new unsold listing held by `holder` and return its id.
    pub fn create_listing(
        &mut self,
        token: Token,
        seller: AccountAddress,
        holder: Address,
        price: Amount,
    ) -> ContractResult<ItemId> {
        ensure!(
            !self.is_listed(&token),
            CustomContractError::TokenAlreadyListed.into()
        );

        let item_id = self.next_item_id;
        self.next_item_id += 1;
        self.latest_listing.insert(token.clone(), item_id);
        self.items.insert(
            item_id,
            MarketItem {
                item_id,
                token,
                seller,
                holder,
                price,
                sold: false,
            },
        );

        Ok(item_id)
    }

    /// Check a CIS-2 transfer into this contract made by `contract`.
    ///
    /// Only a single unit of the token currently taken into escrow is
    /// accepted.
    pub fn accept_incoming(
        &self,
        contract: ContractAddress,
        params: &ContractOnReceivingParams,
    ) -> ContractResult<()> {
        let expected = Token::new(contract, params.token_id);
        ensure!(
            self.incoming.as_ref() == Some(&expected)
                && params.amount == ContractTokenAmount::from(1),
            CustomContractError::UnexpectedTransfer.into()
        );
        Ok(())
    }

    /// Mark a listing as sold to `buyer` and return the updated listing.
    pub fn sell(&mut self, item_id: ItemId, buyer: AccountAddress) -> ContractResult<MarketItem> {
        let mut item = self.listing(&item_id)?;
        ensure!(!item.sold, CustomContractError::ListingAlreadySold.into());

        item.sold = true;
        item.holder = Address::Account(buyer);
        self.items.insert(item_id, item.clone());
        self.items_sold += 1;

        Ok(item)
    }

    /// All listings in creation order.
    ///
    /// The iterator is lazy and can be recreated at any time to start over.
    pub fn items(&self) -> impl Iterator<Item = MarketItem> + '_ {
        (FIRST_ITEM_ID..self.next_item_id)
            .filter_map(move |item_id| self.items.get(&item_id).map(|item| (*item).clone()))
    }

    /// Listings still held in escrow by `market`.
    pub fn unsold_items(&self, market: ContractAddress) -> impl Iterator<Item = MarketItem> + '_ {
        self.items()
            .filter(move |item| !item.sold && item.holder == Address::Contract(market))
    }

    pub fn purchased_by(&self, buyer: AccountAddress) -> impl Iterator<Item = MarketItem> + '_ {
        self.items()
            .filter(move |item| item.sold && item.holder == Address::Account(buyer))
    }

    pub fn created_by(&self, seller: AccountAddress) -> impl Iterator<Item = MarketItem> + '_ {
        self.items().filter(move |item| item.seller == seller)
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
    const NFT: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const SELLER: AccountAddress = AccountAddress([1; 32]);
    const BUYER: AccountAddress = AccountAddress([2; 32]);

    fn token(id: u32) -> Token {
        Token::new(NFT, TokenIdU32(id))
    }

    fn price() -> Amount {
        Amount::from_ccd(100)
    }

    fn listed_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        let mut state = State::new(state_builder, SELLER);
        for id in 1..=3 {
            state
                .create_listing(token(id), SELLER, Address::Contract(MARKET), price())
                .expect_report("Listing token");
        }
        state
    }

    #[concordium_test]
    fn test_new_state_defaults() {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, SELLER);

        claim_eq!(state.listing_fee, Amount::from_micro_ccd(25_000));
        claim_eq!(state.beneficiary, SELLER);
        claim!(state.authority.is_operator(&Address::Account(SELLER)));
        claim_eq!(state.items().count(), 0);
    }

    #[concordium_test]
    fn test_create_listing_assigns_sequential_ids() {
        let mut state_builder = TestStateBuilder::new();
        let state = listed_state(&mut state_builder);

        let ids: Vec<ItemId> = state.items().map(|item| item.item_id).collect();
        claim_eq!(ids, vec![1, 2, 3]);
        claim_eq!(state.open_listing(&token(2)).map(|item| item.price), Ok(price()));
    }

    #[concordium_test]
    fn test_token_listed_once() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = listed_state(&mut state_builder);

        let result = state.create_listing(token(1), SELLER, Address::Contract(MARKET), price());
        claim_eq!(result, Err(CustomContractError::TokenAlreadyListed.into()));
        claim_eq!(state.next_item_id, 4);
    }

    #[concordium_test]
    fn test_sell() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = listed_state(&mut state_builder);

        let item = state.sell(1, BUYER).expect_report("Selling item 1");
        claim!(item.sold);
        claim_eq!(item.holder, Address::Account(BUYER));
        claim_eq!(state.items_sold, 1);

        claim_eq!(
            state.sell(1, BUYER),
            Err(CustomContractError::ListingAlreadySold.into())
        );
        claim_eq!(
            state.open_listing(&token(1)),
            Err(CustomContractError::ListingAlreadySold.into())
        );
        claim_eq!(
            state.sell(9, BUYER),
            Err(CustomContractError::UnknownListing.into())
        );
    }

    #[concordium_test]
    fn test_sold_token_can_be_listed_again() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = listed_state(&mut state_builder);
        state.sell(1, BUYER).expect_report("Selling item 1");

        let item_id = state
            .create_listing(token(1), BUYER, Address::Contract(MARKET), price())
            .expect_report("Listing again");
        claim_eq!(item_id, 4);
        claim_eq!(state.open_listing(&token(1)).map(|item| item.seller), Ok(BUYER));
        claim_eq!(state.listing(&1).map(|item| item.sold), Ok(true));
    }

    #[concordium_test]
    fn test_accept_incoming() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, SELLER);
        let mut params = ContractOnReceivingParams {
            token_id: TokenIdU32(1),
            amount: 1.into(),
            from: Address::Account(SELLER),
            data: AdditionalData::empty(),
        };
        let unexpected = || -> ContractResult<()> {
            Err(CustomContractError::UnexpectedTransfer.into())
        };

        claim_eq!(state.accept_incoming(NFT, &params), unexpected());

        state.incoming = Some(token(1));
        claim_eq!(state.accept_incoming(NFT, &params), Ok(()));
        claim_eq!(state.accept_incoming(MARKET, &params), unexpected());

        params.amount = 2.into();
        claim_eq!(state.accept_incoming(NFT, &params), unexpected());

        params.amount = 1.into();
        params.token_id = TokenIdU32(2);
        claim_eq!(state.accept_incoming(NFT, &params), unexpected());
    }

    #[concordium_test]
    fn test_item_queries() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = listed_state(&mut state_builder);
        state.sell(2, BUYER).expect_report("Selling item 2");

        let unsold: Vec<ItemId> = state.unsold_items(MARKET).map(|item| item.item_id).collect();
        claim_eq!(unsold, vec![1, 3]);

        // Restarting the query yields the same listings.
        let again: Vec<ItemId> = state.unsold_items(MARKET).map(|item| item.item_id).collect();
        claim_eq!(again, unsold);

        let purchased: Vec<ItemId> = state.purchased_by(BUYER).map(|item| item.item_id).collect();
        claim_eq!(purchased, vec![2]);
        claim_eq!(state.purchased_by(SELLER).count(), 0);

        claim_eq!(state.created_by(SELLER).count(), 3);
        claim_eq!(state.created_by(BUYER).count(), 0);
    }
}
