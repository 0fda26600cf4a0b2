use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub participant: Address,
    pub amount: i128,
    pub deposited: i128,
    pub collateral: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub amount: i128,
    pub deposited: i128,
    pub collateral: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowedEvent {
    pub participant: Address,
    pub principal: i128,
    pub fee: i128,
    pub collateral_consumed: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepaidEvent {
    pub participant: Address,
    pub amount: i128,
    pub fee_portion: i128,
    pub principal_portion: i128,
    pub fully_repaid: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralizedEvent {
    pub participant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UncollateralizedEvent {
    pub participant: Address,
}
