use super::*;

/// Initialize the registry bound to the given market.
#[init(contract = "MarketNFT", parameter = "ContractAddress")]
pub fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let market: ContractAddress = ctx.parameter_cursor().get()?;
    Ok(State::new(state_builder, market))
}

/// Mint a new token owned by the sender and return its id.
/// Logs a `Mint` and a `TokenMetadata` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Token ids are exhausted.
/// - Fails to log event.
#[receive(
    contract = "MarketNFT",
    name = "mint",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    mutable,
    enable_logger
)]
pub fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;
    let owner = ctx.sender();

    // Mint the token in the state.
    let token_id = host.state_mut().mint(owner, params.url.clone())?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the NFT.
    logger.log(
        &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: params.url,
                hash: None,
            },
        }),
    )?;

    Ok(token_id)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of every contract receiving a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, an operator of the owner
///       or the bound market.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the contracts receiving a token rejects.
#[receive(
    contract = "MarketNFT",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
pub fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let state = host.state_mut();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&transfer.from, &sender),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer.token_id, transfer.amount, &transfer.from, &to_address)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, invoke its receive hook.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "MarketNFT",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
pub fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "MarketNFT",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
pub fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let state = host.state();
    // Build the response.
    let response: Vec<bool> = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "MarketNFT",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
pub fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the metadata urls of the given tokens.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "MarketNFT",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
pub fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for token_id in params.queries {
        let data = state.token(&token_id)?;
        response.push(MetadataUrl {
            url: data.metadata_url,
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Metadata url of a single token.
///
/// It rejects if the token was never minted.
#[receive(
    contract = "MarketNFT",
    name = "tokenUri",
    parameter = "ContractTokenId",
    return_value = "String"
)]
pub fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().token(&token_id)?.metadata_url)
}

/// Current holder of a token.
///
/// It rejects if the token was never minted.
#[receive(
    contract = "MarketNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
pub fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().token(&token_id)?.owner)
}

/// Get the supported standards or addresses for an implementation given list
/// of standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "MarketNFT",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
pub fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;
    let response: Vec<SupportResult> = params
        .queries
        .iter()
        .map(|std_id| {
            if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
                SupportResult::Support
            } else {
                SupportResult::NoSupport
            }
        })
        .collect();

    Ok(SupportsQueryResponse::from(response))
}

#[receive(contract = "MarketNFT", name = "viewMarket", return_value = "ContractAddress")]
pub fn view_market<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractAddress> {
    Ok(host.state().market)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use test_infrastructure::*;

    const MARKET: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const RECEIVER: ContractAddress = ContractAddress {
        index: 2,
        subindex: 0,
    };
    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const URL_0: &str = "https://www.mytokenlocation.com";
    const URL_1: &str = "https://www.mytokenlocation2.com";

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&MARKET);
        ctx.set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_MarketNFT");
        TestHost::new(state, state_builder)
    }

    fn mint_as(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        url: &str,
    ) -> ContractTokenId {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams { url: url.into() });
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        mint(&ctx, host, &mut logger).expect_report("Failed to mint")
    }

    fn transfer_params(
        token_id: ContractTokenId,
        amount: u8,
        from: Address,
        to: Receiver,
    ) -> TransferParameter {
        TransferParams(vec![Transfer {
            token_id,
            amount: ContractTokenAmount::from(amount),
            from,
            to,
            data: AdditionalData::empty(),
        }])
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();

        claim_eq!(host.state().market, MARKET);
        claim_eq!(host.state().next_token_id, 1);
        claim_eq!(host.state().tokens.iter().count(), 0);
    }

    /// Minting hands out sequential ids and logs `Mint` and `TokenMetadata`.
    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams { url: URL_0.into() });
        ctx.set_sender(ADDRESS_0).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = mint(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(TokenIdU32(1)));

        claim_eq!(logger.logs.len(), 2, "Expected Mint and TokenMetadata events");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                owner: ADDRESS_0,
            }))
        );
        claim_eq!(
            logger.logs[1],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id: TokenIdU32(1),
                        metadata_url: MetadataUrl {
                            url: URL_0.into(),
                            hash: None,
                        },
                    }
                )
            )
        );

        // Duplicate urls are accepted and get their own id.
        let second = mint_as(&mut host, ADDRESS_1, URL_0);
        claim_eq!(second, TokenIdU32(2));
        claim_eq!(
            host.state().balance(&second, &ADDRESS_1),
            Ok(ContractTokenAmount::from(1))
        );
    }

    #[concordium_test]
    fn test_token_uri() {
        let mut host = default_host();
        let first = mint_as(&mut host, ADDRESS_0, URL_0);
        let second = mint_as(&mut host, ADDRESS_0, URL_1);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&second);
        ctx.set_parameter(&bytes);
        claim_eq!(token_uri(&ctx, &host), Ok(String::from(URL_1)));

        let bytes = to_bytes(&first);
        ctx.set_parameter(&bytes);
        claim_eq!(token_uri(&ctx, &host), Ok(String::from(URL_0)));

        let bytes = to_bytes(&TokenIdU32(3));
        ctx.set_parameter(&bytes);
        claim_eq!(token_uri(&ctx, &host), Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_owner_of() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_1, URL_0);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token);
        ctx.set_parameter(&bytes);
        claim_eq!(owner_of(&ctx, &host), Ok(ADDRESS_1));

        let bytes = to_bytes(&TokenIdU32(0));
        ctx.set_parameter(&bytes);
        claim_eq!(owner_of(&ctx, &host), Err(ContractError::InvalidTokenId));
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_0,
            Receiver::from_account(ACCOUNT_1),
        ));
        ctx.set_sender(ADDRESS_0).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(host.state().token(&token).map(|t| t.owner), Ok(ADDRESS_1));
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: token,
                amount: ContractTokenAmount::from(1),
                from: ADDRESS_0,
                to: ADDRESS_1,
            }))
        );
    }

    /// Test transfer token fails, when sender is neither the owner or an
    /// operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_0,
            Receiver::from_account(ACCOUNT_1),
        ));
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let err = transfer(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
        claim_eq!(host.state().token(&token).map(|t| t.owner), Ok(ADDRESS_0));
    }

    #[concordium_test]
    fn test_transfer_from_non_owner() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_1,
            Receiver::from_account(ACCOUNT_1),
        ));
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    /// The bound market moves tokens into its own custody without any
    /// approval and receives the hook call.
    #[concordium_test]
    fn test_market_transfer_to_contract() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        host.setup_mock_entrypoint(
            MARKET,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            parse_and_check_mock::<ContractOnReceivingParams, _>(
                move |params| {
                    params.token_id == token
                        && params.amount == ContractTokenAmount::from(1)
                        && params.from == ADDRESS_0
                },
                (),
            ),
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_0,
            Receiver::from_contract(
                MARKET,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            ),
        ));
        ctx.set_sender(Address::Contract(MARKET)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().token(&token).map(|t| t.owner),
            Ok(Address::Contract(MARKET))
        );
    }

    #[concordium_test]
    fn test_transfer_rejected_by_receiver() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        host.setup_mock_entrypoint(
            RECEIVER,
            OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            reject_mock(-13),
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_0,
            Receiver::from_contract(
                RECEIVER,
                OwnedEntrypointName::new_unchecked(ON_RECEIVING_ENTRYPOINT.into()),
            ),
        ));
        ctx.set_sender(ADDRESS_0).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_0);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDRESS_1,
        }]));
        ctx.set_sender(ADDRESS_0).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_operator(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_0,
                        operator: ADDRESS_1,
                        update: OperatorUpdate::Add,
                    }
                )
            )
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: ADDRESS_1,
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: ADDRESS_0,
                },
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: Address::Contract(MARKET),
                },
                OperatorOfQuery {
                    owner: ADDRESS_0,
                    address: ADDRESS_0,
                },
            ],
        });
        ctx.set_parameter(&bytes);
        let response = operator_of(&ctx, &host).expect_report("Querying operators");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&OperatorOfQueryResponse::from(vec![true, false, true, false]))
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&transfer_params(
            token,
            1,
            ADDRESS_0,
            Receiver::from_account(ACCOUNT_1),
        ));
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(host.state().token(&token).map(|t| t.owner), Ok(ADDRESS_1));
    }

    #[concordium_test]
    fn test_balance_of_and_token_metadata() {
        let mut host = default_host();
        let token = mint_as(&mut host, ADDRESS_0, URL_1);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: token,
                    address: ADDRESS_0,
                },
                BalanceOfQuery {
                    token_id: token,
                    address: ADDRESS_1,
                },
            ],
        });
        ctx.set_parameter(&bytes);
        let response = balance_of(&ctx, &host).expect_report("Querying balances");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&ContractBalanceOfQueryResponse::from(vec![
                ContractTokenAmount::from(1),
                ContractTokenAmount::from(0),
            ]))
        );

        let bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![token],
        });
        ctx.set_parameter(&bytes);
        let response = token_metadata(&ctx, &host).expect_report("Querying metadata");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&TokenMetadataQueryResponse::from(vec![MetadataUrl {
                url: URL_1.into(),
                hash: None,
            }]))
        );

        let bytes = to_bytes(&ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU32(9)],
        });
        ctx.set_parameter(&bytes);
        let result = token_metadata(&ctx, &host);
        claim!(result.is_err(), "Unknown tokens have no metadata");
    }

    #[concordium_test]
    fn test_supports() {
        let host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&SupportsQueryParams {
            queries: vec![
                CIS0_STANDARD_IDENTIFIER.to_owned(),
                CIS2_STANDARD_IDENTIFIER.to_owned(),
                StandardIdentifierOwned::new_unchecked("CIS-1".into()),
            ],
        });
        ctx.set_parameter(&bytes);

        let response = supports(&ctx, &host).expect_report("Querying standards");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&SupportsQueryResponse::from(vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]))
        );
    }

    #[concordium_test]
    fn test_view_market() {
        let host = default_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(view_market(&ctx, &host), Ok(MARKET));
    }
}
