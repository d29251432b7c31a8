use super::*;

/// Move a single token through the CIS-2 `transfer` entrypoint of its
/// contract.
pub fn transfer<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    from: Address,
    to: Receiver,
) -> ContractResult<()> {
    let parameter: TransferParameter = TransferParams(vec![Transfer {
        token_id: token.id,
        amount: ContractTokenAmount::from(1),
        from,
        to,
        data: AdditionalData::empty(),
    }]);

    host.invoke_contract(
        &token.contract,
        &parameter,
        EntrypointName::new_unchecked(TRANSFER_ENTRYPOINT),
        Amount::zero(),
    )
    .map_err(CustomContractError::from)?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const USER_1: AccountAddress = AccountAddress([1; 32]);

    #[concordium_test]
    fn test_transfer() {
        let state = ();
        let state_builder = TestStateBuilder::new();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            MockFn::new_v1(|param, _, _, _| {
                let TransferParams(transfers) =
                    TransferParameter::deserial(&mut Cursor::new(param.as_ref()))
                        .map_err(|_| CallContractError::Trap)?;
                let expected = transfers.len() == 1
                    && transfers[0].token_id == TokenIdU32(7)
                    && transfers[0].amount == ContractTokenAmount::from(1)
                    && transfers[0].from == Address::Contract(NFT_CONTRACT)
                    && transfers[0].to.address() == Address::Account(USER_1);
                if !expected {
                    return Err(CallContractError::Trap);
                }
                Ok((false, ()))
            }),
        );

        let response = transfer(
            &mut host,
            &Token::new(NFT_CONTRACT, TokenIdU32(7)),
            Address::Contract(NFT_CONTRACT),
            Receiver::Account(USER_1),
        );

        claim_eq!(response, Ok(()))
    }

    #[concordium_test]
    fn test_transfer_errors() {
        let state = ();
        let state_builder = TestStateBuilder::new();
        let mut host = TestHost::new(state, state_builder);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            MockFn::new_v1(|_, _, _, _| -> Result<(bool, ()), CallContractError<()>> {
                Err(CallContractError::MissingEntrypoint)
            }),
        );
        let response = transfer(
            &mut host,
            &Token::new(NFT_CONTRACT, TokenIdU32(7)),
            Address::Account(USER_1),
            Receiver::Account(USER_1),
        );
        claim_eq!(response, Err(CustomContractError::Incompatible.into()));

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(TRANSFER_ENTRYPOINT.into()),
            commons::test::reject_mock(-1),
        );
        let response = transfer(
            &mut host,
            &Token::new(NFT_CONTRACT, TokenIdU32(7)),
            Address::Account(USER_1),
            Receiver::Account(USER_1),
        );
        claim_eq!(
            response,
            Err(CustomContractError::InvokeContractError.into())
        );
    }
}
