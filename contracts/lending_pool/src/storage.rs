use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::Error;

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points

const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Address allowed to pause and re-parameterise the pool
    pub admin: Address,
    /// Token contract holding the pooled asset
    pub asset: Address,
    /// LTV ceiling in basis points (8000 = 80%)
    pub ltv_bps: i128,
    /// Fee charged on each borrowed principal, in basis points
    pub fee_bps: i128,
}

/// Deposited funds and usable collateral of one participant.
///
/// The two fields move together on deposit and withdraw but diverge while a
/// loan is open: borrowing takes the raw principal out of `deposited` and the
/// LTV-scaled amount out of `collateral`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Balances {
    pub deposited: i128,
    pub collateral: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Loan {
    /// Borrowed amount not yet repaid
    pub principal: i128,
    /// Fee still owed, paid down before principal
    pub fee: i128,
    /// Usable collateral consumed by the open loan, restored on full repayment
    pub collateral_withheld: i128,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParticipantState {
    /// Nothing deposited, nothing owed
    Unfunded = 0,
    /// Deposited balance > 0 and no principal owed
    Funded = 1,
    /// Principal outstanding; deposit and withdraw are blocked
    Borrowed = 2,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Paused,
    PoolBalance,
    Collateralized,    // Vec<Address>, insertion order
    Balances(Address), // participant -> Balances
    Loan(Address),     // participant -> Loan
}

pub struct Storage;

impl Storage {
    // Config
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_config(env: &Env, config: &PoolConfig) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Config, config);
        Self::bump_instance(env);
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
        Self::bump_instance(env);
    }

    // Pool aggregate
    pub fn get_pool_balance(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::PoolBalance)
            .unwrap_or(0)
    }

    pub fn set_pool_balance(env: &Env, balance: i128) {
        env.storage().instance().set(&DataKey::PoolBalance, &balance);
        Self::bump_instance(env);
    }

    // Collateralized participants
    pub fn get_collateralized(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Collateralized)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_collateralized(env: &Env, members: &Vec<Address>) {
        env.storage()
            .instance()
            .set(&DataKey::Collateralized, members);
        Self::bump_instance(env);
    }

    // Per-participant entries read as zero until first written
    pub fn get_balances(env: &Env, participant: &Address) -> Balances {
        env.storage()
            .persistent()
            .get(&DataKey::Balances(participant.clone()))
            .unwrap_or_default()
    }

    pub fn set_balances(env: &Env, participant: &Address, balances: &Balances) {
        let key = DataKey::Balances(participant.clone());
        env.storage().persistent().set(&key, balances);
        env.storage().persistent().extend_ttl(
            &key,
            ACCOUNT_LIFETIME_THRESHOLD,
            ACCOUNT_BUMP_AMOUNT,
        );
    }

    pub fn get_loan(env: &Env, participant: &Address) -> Loan {
        env.storage()
            .persistent()
            .get(&DataKey::Loan(participant.clone()))
            .unwrap_or_default()
    }

    pub fn set_loan(env: &Env, participant: &Address, loan: &Loan) {
        let key = DataKey::Loan(participant.clone());
        env.storage().persistent().set(&key, loan);
        env.storage().persistent().extend_ttl(
            &key,
            ACCOUNT_LIFETIME_THRESHOLD,
            ACCOUNT_BUMP_AMOUNT,
        );
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
