use super::*;

/// Initialize the market with no listings.
///
/// The deploying account becomes the only operator and the beneficiary of
/// listing fees, the fee starts at `DEFAULT_LISTING_FEE`.
#[init(contract = "NFTMarket")]
pub fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder, ctx.init_origin()))
}

/// Current listing fee.
#[receive(contract = "NFTMarket", name = "getListingFee", return_value = "Amount")]
pub fn get_listing_fee<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    Ok(host.state().listing_fee)
}

/// List a token for sale and return the id of the new listing.
///
/// The token moves into the custody of this contract through the CIS-2
/// `transfer` of its contract. The attached listing fee is forwarded to the
/// beneficiary.
///
/// Rejects if:
/// - Sender is a contract address.
/// - It fails to parse the parameter.
/// - The price is zero.
/// - The attached amount differs from the listing fee.
/// - The token already has an unsold listing.
/// - The token contract transfer rejects.
#[receive(
    contract = "NFTMarket",
    name = "createListing",
    parameter = "CreateListingParams",
    return_value = "ItemId",
    mutable,
    payable,
    enable_logger
)]
pub fn create_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<ItemId> {
    // Get the sender who invoked this contract function.
    let seller = sender_account(ctx.sender())?;
    // Parse the parameter.
    let params: CreateListingParams = ctx.parameter_cursor().get()?;

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );
    ensure_eq!(
        amount,
        host.state().listing_fee,
        CustomContractError::ListingFeeMismatch.into()
    );
    ensure!(
        !host.state().is_listed(&params.token),
        CustomContractError::TokenAlreadyListed.into()
    );

    // Take the token into escrow, the receive hook only accepts this token.
    let market = ctx.self_address();
    host.state_mut().incoming = Some(params.token.clone());
    nft::transfer(
        host,
        &params.token,
        Address::Account(seller),
        Receiver::from_contract(
            market,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
        ),
    )?;

    // Update the contract state
    let state = host.state_mut();
    state.incoming = None;
    let item_id = state.create_listing(
        params.token.clone(),
        seller,
        Address::Contract(market),
        params.price,
    )?;
    let beneficiary = state.beneficiary;

    if amount > Amount::zero() {
        host.invoke_transfer(&beneficiary, amount)
            .map_err(CustomContractError::from)?;
    }

    // Log listing event
    logger.log(&MarketEvent::Listing(ListingEvent {
        item_id,
        token: params.token,
        seller,
        price: params.price,
    }))?;

    Ok(item_id)
}

/// Buy a listed token. The token goes to the sender, the payment to the
/// seller.
///
/// Rejects if:
/// - Sender is a contract address.
/// - It fails to parse the parameter.
/// - The token is not listed or its listing is already sold.
/// - The attached amount differs from the asking price.
/// - The payout or the token contract transfer fails.
#[receive(
    contract = "NFTMarket",
    name = "executeSale",
    parameter = "Token",
    mutable,
    payable,
    enable_logger
)]
pub fn execute_sale<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Get the sender who invoked this contract function.
    let buyer = sender_account(ctx.sender())?;
    // Parse the parameter.
    let token: Token = ctx.parameter_cursor().get()?;

    let item = host.state().open_listing(&token)?;
    ensure_eq!(amount, item.price, CustomContractError::PriceMismatch.into());

    let item = host.state_mut().sell(item.item_id, buyer)?;

    // Pay the seller, then hand the token to the buyer.
    host.invoke_transfer(&item.seller, amount)
        .map_err(CustomContractError::from)?;

    nft::transfer(
        host,
        &token,
        Address::Contract(ctx.self_address()),
        Receiver::Account(buyer),
    )?;

    // Log sale event
    logger.log(&MarketEvent::Sale(SaleEvent {
        item_id: item.item_id,
        token,
        seller: item.seller,
        buyer,
        price: item.price,
    }))?;

    Ok(())
}

/// Number of listings sold so far.
#[receive(contract = "NFTMarket", name = "getItemsSold", return_value = "u64")]
pub fn get_items_sold<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().items_sold)
}

/// Listings still held by the market, in creation order.
#[receive(
    contract = "NFTMarket",
    name = "fetchUnsoldListings",
    return_value = "Vec<MarketItem>"
)]
pub fn fetch_unsold_listings<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    Ok(host.state().unsold_items(ctx.self_address()).collect())
}

/// One page of the listings still held by the market, in creation order.
#[receive(
    contract = "NFTMarket",
    name = "viewUnsoldListings",
    parameter = "ListingsViewParams",
    return_value = "Vec<MarketItem>"
)]
pub fn view_unsold_listings<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let view: ListingsViewParams = ctx.parameter_cursor().get()?;
    let page = host
        .state()
        .unsold_items(ctx.self_address())
        .skip(view.skip as usize)
        .take(view.show as usize)
        .collect();
    Ok(page)
}

/// Listings bought by the given account.
#[receive(
    contract = "NFTMarket",
    name = "fetchPurchased",
    parameter = "AccountAddress",
    return_value = "Vec<MarketItem>"
)]
pub fn fetch_purchased<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let buyer: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().purchased_by(buyer).collect())
}

/// Listings created by the given account, sold or not.
#[receive(
    contract = "NFTMarket",
    name = "fetchCreated",
    parameter = "AccountAddress",
    return_value = "Vec<MarketItem>"
)]
pub fn fetch_created<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<MarketItem>> {
    let seller: AccountAddress = ctx.parameter_cursor().get()?;
    Ok(host.state().created_by(seller).collect())
}

#[receive(
    contract = "NFTMarket",
    name = "viewListing",
    parameter = "ItemId",
    return_value = "MarketItem"
)]
pub fn view_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<MarketItem> {
    let item_id: ItemId = ctx.parameter_cursor().get()?;
    host.state().listing(&item_id)
}

/// CIS-2 receive hook. Only accepts the token this contract is taking into
/// escrow during `createListing`.
#[receive(
    contract = "NFTMarket",
    name = "onReceivingCIS2",
    parameter = "ContractOnReceivingParams"
)]
pub fn on_receiving_cis2<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let contract = match ctx.sender() {
        Address::Contract(contract) => contract,
        Address::Account(_) => bail!(CustomContractError::ContractOnly.into()),
    };
    let params: ContractOnReceivingParams = ctx.parameter_cursor().get()?;
    host.state().accept_incoming(contract, &params)
}

/// Function to update values required for internal contract functionality. This includes:
/// - ListingFee. Exact amount to attach when creating a listing.
/// - Beneficiary. Account address that receives the listing fees.
///
///  It rejects if:
///  - Fails to parse `InternalValue` parameters.
///  - If sender is not one of the operators.
#[receive(
    contract = "NFTMarket",
    name = "updateInternalValue",
    parameter = "InternalValue",
    mutable,
    enable_logger
)]
pub fn update_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(
        state.authority.is_operator(&ctx.sender()),
        ContractError::Unauthorized
    );

    let params: InternalValue = ctx.parameter_cursor().get()?;
    match params {
        InternalValue::ListingFee(fee) => {
            let previous = state.listing_fee;
            if previous != fee {
                state.listing_fee = fee;
                logger.log(&MarketEvent::ListingFeeUpdated(ListingFeeEvent {
                    previous,
                    current: fee,
                }))?;
            }
        }
        InternalValue::Beneficiary(account) => state.beneficiary = account,
    }

    Ok(())
}

/// Function to view values required for internal contract functionality.
#[receive(
    contract = "NFTMarket",
    name = "viewInternalValue",
    parameter = "ViewInternalValueParams",
    return_value = "InternalValue"
)]
pub fn view_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<InternalValue> {
    let state = host.state();
    let params: ViewInternalValueParams = ctx.parameter_cursor().get()?;

    let value = match params {
        ViewInternalValueParams::ListingFee => InternalValue::ListingFee(state.listing_fee),
        ViewInternalValueParams::Beneficiary => InternalValue::Beneficiary(state.beneficiary),
    };

    Ok(value)
}

/// Function to manage addresses that are allowed to maintain and modify the state of the contract.
///
///  It rejects if:
///  - Fails to parse `AuthorityUpdateParams` parameters.
///  - If sender is not one of the operators.
///  - The update would remove the last operator.
#[receive(
    contract = "NFTMarket",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams",
    mutable
)]
pub fn update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params: AuthorityUpdateParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    host.state_mut().authority.handle_update(&sender, params)
}

/// Function to view addresses that are allowed to maintain and modify the state of the contract.
#[receive(
    contract = "NFTMarket",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
pub fn view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<Address>> {
    let params: AuthorityViewParams = ctx.parameter_cursor().get()?;
    Ok(host.state().authority.handle_view(params))
}

fn sender_account(sender: Address) -> ContractResult<AccountAddress> {
    match sender {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use test_infrastructure::*;

    const MARKET: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };
    const NFT: ContractAddress = ContractAddress {
        index: 20,
        subindex: 0,
    };
    const DEPLOYER: AccountAddress = AccountAddress([1; 32]);
    const SELLER: AccountAddress = AccountAddress([2; 32]);
    const BUYER: AccountAddress = AccountAddress([3; 32]);

    fn token(id: u32) -> Token {
        Token::new(NFT, TokenIdU32(id))
    }

    fn price() -> Amount {
        Amount::from_ccd(100)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(DEPLOYER);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_NFTMarket");
        TestHost::new(state, state_builder)
    }

    /// Mock the token contract, accepting single transfers from `from` to `to`.
    ///
    /// A transfer into the market runs the market's receive hook check against
    /// the state of the ongoing call.
    fn mock_nft_transfer(host: &mut TestHost<State<TestStateApi>>, from: Address, to: Address) {
        host.setup_mock_entrypoint(
            NFT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            MockFn::new_v1(move |parameter, _amount, _balance, state: &mut State<TestStateApi>| {
                let TransferParams(transfers) =
                    TransferParameter::deserial(&mut Cursor::new(parameter.as_ref()))
                        .map_err(|_| CallContractError::Trap)?;
                let expected = transfers.len() == 1
                    && transfers[0].amount == ContractTokenAmount::from(1)
                    && transfers[0].from == from
                    && transfers[0].to.address() == to;
                if !expected {
                    return Err(CallContractError::Trap);
                }

                if to == Address::Contract(MARKET) {
                    let params = ContractOnReceivingParams {
                        token_id: transfers[0].token_id,
                        amount: transfers[0].amount,
                        from,
                        data: AdditionalData::empty(),
                    };
                    state.accept_incoming(NFT, &params).map_err(|e| {
                        CallContractError::LogicReject {
                            reason: Reject::from(e).error_code.into(),
                            return_value: (),
                        }
                    })?;
                }
                Ok((false, ()))
            }),
        );
    }

    fn list(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        id: u32,
        payment: Amount,
    ) -> ContractResult<ItemId> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&CreateListingParams {
            token: token(id),
            price: price(),
        });
        ctx.set_sender(Address::Account(seller))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        host.set_self_balance(payment);
        let mut logger = TestLogger::init();

        create_listing(&ctx, host, payment, &mut logger)
    }

    fn buy(
        host: &mut TestHost<State<TestStateApi>>,
        buyer: AccountAddress,
        id: u32,
        payment: Amount,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token(id));
        ctx.set_sender(Address::Account(buyer))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        host.set_self_balance(payment);
        let mut logger = TestLogger::init();

        execute_sale(&ctx, host, payment, &mut logger)
    }

    fn unsold(host: &TestHost<State<TestStateApi>>) -> Vec<MarketItem> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_self_address(MARKET);
        fetch_unsold_listings(&ctx, host).expect_report("Fetching unsold listings")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.listing_fee, DEFAULT_LISTING_FEE);
        claim_eq!(state.beneficiary, DEPLOYER);
        claim!(state.authority.is_operator(&Address::Account(DEPLOYER)));
        claim_eq!(state.next_item_id, 1);
        claim_eq!(state.incoming, None);
    }

    #[concordium_test]
    fn test_get_listing_fee() {
        let host = default_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(
            get_listing_fee(&ctx, &host),
            Ok(Amount::from_micro_ccd(25_000))
        );
    }

    #[concordium_test]
    fn test_create_listing() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&CreateListingParams {
            token: token(1),
            price: price(),
        });
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        host.set_self_balance(DEFAULT_LISTING_FEE);
        let mut logger = TestLogger::init();

        let result = create_listing(&ctx, &mut host, DEFAULT_LISTING_FEE, &mut logger);
        claim_eq!(result, Ok(1));

        claim_eq!(
            host.state().listing(&1),
            Ok(MarketItem {
                item_id: 1,
                token: token(1),
                seller: SELLER,
                holder: Address::Contract(MARKET),
                price: price(),
                sold: false,
            })
        );
        claim_eq!(host.state().incoming, None);
        claim_eq!(host.get_transfers(), vec![(DEPLOYER, DEFAULT_LISTING_FEE)]);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MarketEvent::Listing(ListingEvent {
                item_id: 1,
                token: token(1),
                seller: SELLER,
                price: price(),
            }))]
        );
    }

    #[concordium_test]
    fn test_create_listing_requires_exact_fee() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));

        let too_much = Amount::from_micro_ccd(DEFAULT_LISTING_FEE.micro_ccd + 1);
        claim_eq!(
            list(&mut host, SELLER, 1, too_much),
            Err(CustomContractError::ListingFeeMismatch.into())
        );
        claim_eq!(
            list(&mut host, SELLER, 1, Amount::zero()),
            Err(CustomContractError::ListingFeeMismatch.into())
        );
        claim_eq!(host.state().items().count(), 0);
    }

    #[concordium_test]
    fn test_create_listing_rejects_zero_price() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&CreateListingParams {
            token: token(1),
            price: Amount::zero(),
        });
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = create_listing(&ctx, &mut host, DEFAULT_LISTING_FEE, &mut logger);
        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));
    }

    #[concordium_test]
    fn test_create_listing_rejects_contract_sender() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&CreateListingParams {
            token: token(1),
            price: price(),
        });
        ctx.set_sender(Address::Contract(NFT))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = create_listing(&ctx, &mut host, DEFAULT_LISTING_FEE, &mut logger);
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_create_listing_twice() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));

        claim_eq!(list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE), Ok(1));
        claim_eq!(
            list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE),
            Err(CustomContractError::TokenAlreadyListed.into())
        );
        claim_eq!(list(&mut host, SELLER, 2, DEFAULT_LISTING_FEE), Ok(2));
    }

    #[concordium_test]
    fn test_create_listing_transfer_rejected() {
        let mut host = default_host();
        host.setup_mock_entrypoint(
            NFT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            reject_mock(Reject::from(ContractError::Unauthorized).error_code.into()),
        );

        claim_eq!(
            list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE),
            Err(CustomContractError::InvokeContractError.into())
        );
    }

    #[concordium_test]
    fn test_escrow_rejects_transfer_outside_listing() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));

        let result = nft::transfer(
            &mut host,
            &token(1),
            Address::Account(SELLER),
            Receiver::from_contract(
                MARKET,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            ),
        );
        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));

        host.state_mut().incoming = Some(token(2));
        let result = nft::transfer(
            &mut host,
            &token(1),
            Address::Account(SELLER),
            Receiver::from_contract(
                MARKET,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            ),
        );
        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    }

    #[concordium_test]
    fn test_create_listing_with_zero_fee() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        host.state_mut().listing_fee = Amount::zero();

        claim_eq!(list(&mut host, SELLER, 1, Amount::zero()), Ok(1));
        claim!(host.get_transfers().is_empty(), "Nothing to forward");
    }

    #[concordium_test]
    fn test_execute_sale() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE).expect_report("Listing token 1");

        mock_nft_transfer(&mut host, Address::Contract(MARKET), Address::Account(BUYER));
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token(1));
        ctx.set_sender(Address::Account(BUYER))
            .set_self_address(MARKET)
            .set_parameter(&bytes);
        host.set_self_balance(price());
        let mut logger = TestLogger::init();

        let result = execute_sale(&ctx, &mut host, price(), &mut logger);
        claim_eq!(result, Ok(()));

        let item = host.state().listing(&1).expect_report("Listing exists");
        claim!(item.sold);
        claim_eq!(item.holder, Address::Account(BUYER));
        claim_eq!(host.state().items_sold, 1);
        claim_eq!(get_items_sold(&TestReceiveContext::empty(), &host), Ok(1));
        claim!(host.get_transfers().contains(&(SELLER, price())));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MarketEvent::Sale(SaleEvent {
                item_id: 1,
                token: token(1),
                seller: SELLER,
                buyer: BUYER,
                price: price(),
            }))]
        );
        claim!(unsold(&host).is_empty());
    }

    #[concordium_test]
    fn test_execute_sale_requires_exact_price() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE).expect_report("Listing token 1");

        claim_eq!(
            buy(&mut host, BUYER, 1, Amount::from_ccd(99)),
            Err(CustomContractError::PriceMismatch.into())
        );
        claim_eq!(
            buy(&mut host, BUYER, 1, Amount::from_ccd(101)),
            Err(CustomContractError::PriceMismatch.into())
        );
        claim_eq!(host.state().listing(&1).map(|item| item.sold), Ok(false));
    }

    #[concordium_test]
    fn test_execute_sale_of_sold_listing() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE).expect_report("Listing token 1");
        mock_nft_transfer(&mut host, Address::Contract(MARKET), Address::Account(BUYER));
        buy(&mut host, BUYER, 1, price()).expect_report("Buying token 1");

        claim_eq!(
            buy(&mut host, SELLER, 1, price()),
            Err(CustomContractError::ListingAlreadySold.into())
        );
    }

    #[concordium_test]
    fn test_execute_sale_of_unlisted_token() {
        let mut host = default_host();

        claim_eq!(
            buy(&mut host, BUYER, 5, price()),
            Err(CustomContractError::TokenNotListedForSale.into())
        );
    }

    #[concordium_test]
    fn test_fetch_listings() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        list(&mut host, SELLER, 1, DEFAULT_LISTING_FEE).expect_report("Listing token 1");
        list(&mut host, SELLER, 2, DEFAULT_LISTING_FEE).expect_report("Listing token 2");
        mock_nft_transfer(&mut host, Address::Contract(MARKET), Address::Account(BUYER));
        buy(&mut host, BUYER, 1, price()).expect_report("Buying token 1");

        let first = unsold(&host);
        claim_eq!(first.len(), 1);
        claim_eq!(first[0].token, token(2));
        claim_eq!(first[0].seller, SELLER);
        claim_eq!(first[0].holder, Address::Contract(MARKET));
        claim_eq!(unsold(&host), first);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&BUYER);
        ctx.set_parameter(&bytes);
        let purchased = fetch_purchased(&ctx, &host).expect_report("Fetching purchased");
        claim_eq!(purchased.len(), 1);
        claim_eq!(purchased[0].token, token(1));

        let bytes = to_bytes(&SELLER);
        ctx.set_parameter(&bytes);
        let created = fetch_created(&ctx, &host).expect_report("Fetching created");
        claim_eq!(created.len(), 2);

        let bytes = to_bytes(&2u64);
        ctx.set_parameter(&bytes);
        claim_eq!(view_listing(&ctx, &host), Ok(first[0].clone()));

        let bytes = to_bytes(&3u64);
        ctx.set_parameter(&bytes);
        claim_eq!(
            view_listing(&ctx, &host),
            Err(CustomContractError::UnknownListing.into())
        );
    }

    #[concordium_test]
    fn test_view_unsold_listings_pages() {
        let mut host = default_host();
        mock_nft_transfer(&mut host, Address::Account(SELLER), Address::Contract(MARKET));
        for id in 1..=4 {
            list(&mut host, SELLER, id, DEFAULT_LISTING_FEE).expect_report("Listing token");
        }
        mock_nft_transfer(&mut host, Address::Contract(MARKET), Address::Account(BUYER));
        buy(&mut host, BUYER, 2, price()).expect_report("Buying token 2");
        claim_eq!(get_items_sold(&TestReceiveContext::empty(), &host), Ok(1));

        let page = |skip, show| {
            let mut ctx = TestReceiveContext::empty();
            let bytes = to_bytes(&ListingsViewParams { skip, show });
            ctx.set_self_address(MARKET).set_parameter(&bytes);
            view_unsold_listings(&ctx, &host)
                .expect_report("Viewing unsold listings")
                .iter()
                .map(|item| item.item_id)
                .collect::<Vec<ItemId>>()
        };

        claim_eq!(page(0, 10), vec![1, 3, 4]);
        claim_eq!(page(1, 1), vec![3]);
        claim_eq!(page(2, 5), vec![4]);
        claim!(page(3, 5).is_empty());
        claim!(page(0, 0).is_empty());
        let all: Vec<ItemId> = unsold(&host).iter().map(|item| item.item_id).collect();
        claim_eq!(page(0, 10), all);
    }

    #[concordium_test]
    fn test_on_receiving_cis2() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ContractOnReceivingParams {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: Address::Account(SELLER),
            data: AdditionalData::empty(),
        });
        ctx.set_sender(Address::Contract(NFT)).set_parameter(&bytes);

        claim_eq!(
            on_receiving_cis2(&ctx, &host),
            Err(CustomContractError::UnexpectedTransfer.into())
        );

        host.state_mut().incoming = Some(token(1));
        claim_eq!(on_receiving_cis2(&ctx, &host), Ok(()));

        host.state_mut().incoming = Some(token(2));
        claim_eq!(
            on_receiving_cis2(&ctx, &host),
            Err(CustomContractError::UnexpectedTransfer.into())
        );

        ctx.set_sender(Address::Account(SELLER));
        claim_eq!(
            on_receiving_cis2(&ctx, &host),
            Err(CustomContractError::ContractOnly.into())
        );
    }

    #[concordium_test]
    fn test_update_internal_value() {
        let mut host = default_host();
        let new_fee = Amount::from_micro_ccd(50_000);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&InternalValue::ListingFee(new_fee));
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_internal_value(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));

        ctx.set_sender(Address::Account(DEPLOYER));
        let result = update_internal_value(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&MarketEvent::ListingFeeUpdated(ListingFeeEvent {
                previous: DEFAULT_LISTING_FEE,
                current: new_fee,
            }))]
        );

        let bytes = to_bytes(&InternalValue::Beneficiary(SELLER));
        ctx.set_parameter(&bytes);
        let result = update_internal_value(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ViewInternalValueParams::ListingFee);
        ctx.set_parameter(&bytes);
        claim_eq!(
            view_internal_value(&ctx, &host),
            Ok(InternalValue::ListingFee(new_fee))
        );

        let bytes = to_bytes(&ViewInternalValueParams::Beneficiary);
        ctx.set_parameter(&bytes);
        claim_eq!(
            view_internal_value(&ctx, &host),
            Ok(InternalValue::Beneficiary(SELLER))
        );
    }

    #[concordium_test]
    fn test_update_authority() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AuthorityUpdateParams {
            kind: AuthorityUpdateKind::Add,
            address: Address::Account(SELLER),
        });
        ctx.set_sender(Address::Account(DEPLOYER)).set_parameter(&bytes);
        claim_eq!(update_authority(&ctx, &mut host), Ok(()));

        let bytes = to_bytes(&AuthorityUpdateParams {
            kind: AuthorityUpdateKind::Remove,
            address: Address::Account(DEPLOYER),
        });
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        claim_eq!(update_authority(&ctx, &mut host), Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AuthorityViewParams { skip: 0, show: 10 });
        ctx.set_parameter(&bytes);
        claim_eq!(
            view_authority(&ctx, &host),
            Ok(vec![Address::Account(SELLER)])
        );
    }
}
