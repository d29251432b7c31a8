use super::*;

/// Set of addresses allowed to configure a contract.
#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    /// Trusted addresses that may update the contract settings and this set.
    operators: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(state_builder: &mut StateBuilder<S>, operator: Address) -> Self {
        let mut operators = state_builder.new_set();
        operators.insert(operator);
        Self { operators }
    }

    pub fn is_operator(&self, address: &Address) -> bool {
        self.operators.contains(address)
    }

    /// Add or remove an operator on behalf of `sender`.
    ///
    /// Rejects if `sender` is not an operator or if the update would leave
    /// the set empty.
    pub fn handle_update(
        &mut self,
        sender: &Address,
        update: AuthorityUpdateParams,
    ) -> ContractResult<()> {
        ensure!(self.is_operator(sender), ContractError::Unauthorized);

        match update.kind {
            AuthorityUpdateKind::Remove => {
                if self.is_operator(&update.address) {
                    ensure!(
                        self.operators.iter().nth(1).is_some(),
                        CustomContractError::LastOperator.into()
                    );
                }
                self.operators.remove(&update.address);
            }
            AuthorityUpdateKind::Add => {
                self.operators.insert(update.address);
            }
        }

        Ok(())
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        self.operators
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const DEPLOYER: AccountAddress = AccountAddress([1; 32]);
    const USER: AccountAddress = AccountAddress([16; 32]);
    const CONTRACT: ContractAddress = ContractAddress {
        index: 16,
        subindex: 0,
    };

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        Authority::new(&mut state_builder, Address::Account(DEPLOYER))
    }

    #[concordium_test]
    fn test_operator_adds_operator() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            &Address::Account(DEPLOYER),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Contract(CONTRACT),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(authority.is_operator(&Address::Contract(CONTRACT)));

        // New operators have full rights right away.
        let result = authority.handle_update(
            &Address::Contract(CONTRACT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(authority.is_operator(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_non_operator_is_rejected() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            &Address::Account(USER),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(!authority.is_operator(&Address::Account(USER)));

        let result = authority.handle_update(
            &Address::Account(USER),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(DEPLOYER),
            },
        );
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(authority.is_operator(&Address::Account(DEPLOYER)));
    }

    #[concordium_test]
    fn test_last_operator_cannot_be_removed() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            &Address::Account(DEPLOYER),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(DEPLOYER),
            },
        );
        claim_eq!(result, Err(CustomContractError::LastOperator.into()));
        claim!(authority.is_operator(&Address::Account(DEPLOYER)));

        authority
            .handle_update(
                &Address::Account(DEPLOYER),
                AuthorityUpdateParams {
                    kind: AuthorityUpdateKind::Add,
                    address: Address::Account(USER),
                },
            )
            .expect_report("Adding an operator");

        let result = authority.handle_update(
            &Address::Account(USER),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(DEPLOYER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.is_operator(&Address::Account(DEPLOYER)));
    }

    #[concordium_test]
    fn test_view_pages_through_operators() {
        let mut authority = default_authority();
        authority
            .handle_update(
                &Address::Account(DEPLOYER),
                AuthorityUpdateParams {
                    kind: AuthorityUpdateKind::Add,
                    address: Address::Account(USER),
                },
            )
            .expect_report("Adding an operator");

        let all = authority.handle_view(AuthorityViewParams { skip: 0, show: 10 });
        claim_eq!(all.len(), 2);
        claim!(all.contains(&Address::Account(DEPLOYER)));
        claim!(all.contains(&Address::Account(USER)));

        let page = authority.handle_view(AuthorityViewParams { skip: 1, show: 10 });
        claim_eq!(page.len(), 1);

        let empty = authority.handle_view(AuthorityViewParams { skip: 0, show: 0 });
        claim!(empty.is_empty());
    }
}
