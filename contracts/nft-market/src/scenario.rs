//! End-to-end marketplace flow driving both contracts.
//!
//! The market host forwards calls to the token contract's `transfer` into a
//! real `MarketNFT` test host, so ownership changes are checked against the
//! registry itself.
use super::*;
use crate::contract::*;
use commons::test::*;
use market_nft::{contract as registry, external::MintParams, state::State as NftState};
use std::{cell::RefCell, rc::Rc};
use test_infrastructure::*;

const MARKET: ContractAddress = ContractAddress {
    index: 1,
    subindex: 0,
};
const NFT: ContractAddress = ContractAddress {
    index: 2,
    subindex: 0,
};
const DEPLOYER: AccountAddress = AccountAddress([1; 32]);
const BUYER: AccountAddress = AccountAddress([2; 32]);
const URL_1: &str = "https://www.mytokenlocation.com";
const URL_2: &str = "https://www.mytokenlocation2.com";

type NftHost = Rc<RefCell<TestHost<NftState<TestStateApi>>>>;

fn deploy_market() -> TestHost<State<TestStateApi>> {
    let mut ctx = TestInitContext::empty();
    ctx.set_init_origin(DEPLOYER);
    let mut state_builder = TestStateBuilder::new();

    let state = init(&ctx, &mut state_builder).expect_report("Failed during init_NFTMarket");
    TestHost::new(state, state_builder)
}

fn deploy_registry() -> NftHost {
    let mut ctx = TestInitContext::empty();
    let bytes = to_bytes(&MARKET);
    ctx.set_init_origin(DEPLOYER).set_parameter(&bytes);
    let mut state_builder = TestStateBuilder::new();

    let state =
        registry::init(&ctx, &mut state_builder).expect_report("Failed during init_MarketNFT");
    let mut host = TestHost::new(state, state_builder);

    // `connect` checks transfers into the market against the market state.
    host.setup_mock_entrypoint(
        MARKET,
        OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
        parse_and_ok_mock::<ContractOnReceivingParams, _>(()),
    );

    Rc::new(RefCell::new(host))
}

fn logic_reject(error: ContractError) -> CallContractError<()> {
    CallContractError::LogicReject {
        reason: Reject::from(error).error_code.into(),
        return_value: (),
    }
}

/// Route the market's calls to `NFT.transfer` into the registry host.
///
/// Tokens sent to the market must first pass its receive hook check.
fn connect(market: &mut TestHost<State<TestStateApi>>, nft: &NftHost) {
    let nft = Rc::clone(nft);
    market.setup_mock_entrypoint(
        NFT,
        OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
        MockFn::new_v1(move |parameter, _amount, _balance, state: &mut State<TestStateApi>| {
            let TransferParams(transfers) =
                TransferParameter::deserial(&mut Cursor::new(parameter.as_ref()))
                    .map_err(|_| CallContractError::Trap)?;
            for transfer in transfers {
                if transfer.to.address() == Address::Contract(MARKET) {
                    let params = ContractOnReceivingParams {
                        token_id: transfer.token_id,
                        amount: transfer.amount,
                        from: transfer.from,
                        data: AdditionalData::empty(),
                    };
                    state.accept_incoming(NFT, &params).map_err(logic_reject)?;
                }
            }

            let mut ctx = TestReceiveContext::empty();
            ctx.set_sender(Address::Contract(MARKET))
                .set_self_address(NFT)
                .set_parameter(parameter.as_ref());
            let mut logger = TestLogger::init();

            registry::transfer(&ctx, &mut *nft.borrow_mut(), &mut logger)
                .map_err(logic_reject)?;
            Ok((false, ()))
        }),
    );
}

fn mint(nft: &NftHost, url: &str) -> ContractTokenId {
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&MintParams { url: url.into() });
    ctx.set_sender(Address::Account(DEPLOYER))
        .set_self_address(NFT)
        .set_parameter(&bytes);
    let mut logger = TestLogger::init();

    registry::mint(&ctx, &mut *nft.borrow_mut(), &mut logger).expect_report("Minting token")
}

fn token_uri(nft: &NftHost, token_id: ContractTokenId) -> ContractResult<String> {
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&token_id);
    ctx.set_parameter(&bytes);

    registry::token_uri(&ctx, &*nft.borrow())
}

fn owner_of(nft: &NftHost, token_id: ContractTokenId) -> ContractResult<Address> {
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&token_id);
    ctx.set_parameter(&bytes);

    registry::owner_of(&ctx, &*nft.borrow())
}

fn listing_fee(market: &TestHost<State<TestStateApi>>) -> Amount {
    let ctx = TestReceiveContext::empty();
    get_listing_fee(&ctx, market).expect_report("Reading listing fee")
}

fn list(
    market: &mut TestHost<State<TestStateApi>>,
    token_id: ContractTokenId,
    price: Amount,
    payment: Amount,
) -> ContractResult<ItemId> {
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&CreateListingParams {
        token: Token::new(NFT, token_id),
        price,
    });
    ctx.set_sender(Address::Account(DEPLOYER))
        .set_self_address(MARKET)
        .set_parameter(&bytes);
    market.set_self_balance(payment);
    let mut logger = TestLogger::init();

    create_listing(&ctx, market, payment, &mut logger)
}

fn buy(
    market: &mut TestHost<State<TestStateApi>>,
    buyer: AccountAddress,
    token_id: ContractTokenId,
    payment: Amount,
) -> ContractResult<()> {
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&Token::new(NFT, token_id));
    ctx.set_sender(Address::Account(buyer))
        .set_self_address(MARKET)
        .set_parameter(&bytes);
    market.set_self_balance(payment);
    let mut logger = TestLogger::init();

    execute_sale(&ctx, market, payment, &mut logger)
}

fn unsold(market: &TestHost<State<TestStateApi>>) -> Vec<MarketItem> {
    let mut ctx = TestReceiveContext::empty();
    ctx.set_self_address(MARKET);
    fetch_unsold_listings(&ctx, market).expect_report("Fetching unsold listings")
}

#[concordium_test]
fn test_create_and_execute_market_sales() {
    let mut market = deploy_market();
    let nft = deploy_registry();
    connect(&mut market, &nft);

    let fee = listing_fee(&market);
    let price = Amount::from_ccd(100);

    let first = mint(&nft, URL_1);
    let second = mint(&nft, URL_2);
    claim_eq!(first, TokenIdU32(1));
    claim_eq!(second, TokenIdU32(2));

    claim_eq!(list(&mut market, first, price, fee), Ok(1));
    claim_eq!(list(&mut market, second, price, fee), Ok(2));
    claim_eq!(owner_of(&nft, first), Ok(Address::Contract(MARKET)));
    claim_eq!(owner_of(&nft, second), Ok(Address::Contract(MARKET)));

    claim_eq!(buy(&mut market, BUYER, first, price), Ok(()));
    claim_eq!(owner_of(&nft, first), Ok(Address::Account(BUYER)));

    let items = unsold(&market);
    claim_eq!(
        items,
        vec![MarketItem {
            item_id: 2,
            token: Token::new(NFT, second),
            seller: DEPLOYER,
            holder: Address::Contract(MARKET),
            price,
            sold: false,
        }]
    );

    let uris: Vec<String> = items
        .iter()
        .map(|item| token_uri(&nft, item.token.id).expect_report("Resolving uri"))
        .collect();
    claim_eq!(uris, vec![String::from(URL_2)]);

    // Nothing changed, so the query answers the same.
    claim_eq!(unsold(&market), items);

    // Both listing fees went to the deployer, as did the sale price.
    claim_eq!(
        market.get_transfers(),
        vec![(DEPLOYER, fee), (DEPLOYER, fee), (DEPLOYER, price)]
    );
}

#[concordium_test]
fn test_rejected_sales_leave_ownership_untouched() {
    let mut market = deploy_market();
    let nft = deploy_registry();
    connect(&mut market, &nft);

    let fee = listing_fee(&market);
    let price = Amount::from_ccd(100);
    let token = mint(&nft, URL_1);

    claim_eq!(
        list(&mut market, token, Amount::zero(), fee),
        Err(CustomContractError::InvalidPrice.into())
    );
    claim_eq!(
        list(&mut market, token, price, Amount::zero()),
        Err(CustomContractError::ListingFeeMismatch.into())
    );
    claim_eq!(owner_of(&nft, token), Ok(Address::Account(DEPLOYER)));

    claim_eq!(list(&mut market, token, price, fee), Ok(1));
    claim_eq!(
        buy(&mut market, BUYER, token, Amount::from_ccd(1)),
        Err(CustomContractError::PriceMismatch.into())
    );
    claim_eq!(owner_of(&nft, token), Ok(Address::Contract(MARKET)));

    claim_eq!(buy(&mut market, BUYER, token, price), Ok(()));
    claim_eq!(
        buy(&mut market, BUYER, token, price),
        Err(CustomContractError::ListingAlreadySold.into())
    );
    claim_eq!(owner_of(&nft, token), Ok(Address::Account(BUYER)));
}

#[concordium_test]
fn test_listing_a_token_of_someone_else_fails() {
    let mut market = deploy_market();
    let nft = deploy_registry();
    connect(&mut market, &nft);

    let fee = listing_fee(&market);
    let price = Amount::from_ccd(100);
    let token = mint(&nft, URL_1);

    // BUYER does not hold the token, so the registry refuses the escrow move.
    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&CreateListingParams {
        token: Token::new(NFT, token),
        price,
    });
    ctx.set_sender(Address::Account(BUYER))
        .set_self_address(MARKET)
        .set_parameter(&bytes);
    market.set_self_balance(fee);
    let mut logger = TestLogger::init();

    let result = create_listing(&ctx, &mut market, fee, &mut logger);
    claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    claim_eq!(owner_of(&nft, token), Ok(Address::Account(DEPLOYER)));
}

#[concordium_test]
fn test_buyer_relists_purchased_token() {
    let mut market = deploy_market();
    let nft = deploy_registry();
    connect(&mut market, &nft);

    let fee = listing_fee(&market);
    let price = Amount::from_ccd(100);
    let token = mint(&nft, URL_1);

    claim_eq!(list(&mut market, token, price, fee), Ok(1));
    claim_eq!(buy(&mut market, BUYER, token, price), Ok(()));

    let mut ctx = TestReceiveContext::empty();
    let bytes = to_bytes(&CreateListingParams {
        token: Token::new(NFT, token),
        price: Amount::from_ccd(150),
    });
    ctx.set_sender(Address::Account(BUYER))
        .set_self_address(MARKET)
        .set_parameter(&bytes);
    market.set_self_balance(fee);
    let mut logger = TestLogger::init();

    claim_eq!(create_listing(&ctx, &mut market, fee, &mut logger), Ok(2));
    claim_eq!(owner_of(&nft, token), Ok(Address::Contract(MARKET)));

    let items = unsold(&market);
    claim_eq!(items.len(), 1);
    claim_eq!(items[0].seller, BUYER);
    claim_eq!(items[0].price, Amount::from_ccd(150));
}
