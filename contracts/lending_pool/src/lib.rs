#![no_std]

mod error;
mod events;
mod ledger;
mod loan;
mod pool_ops;
mod registry;
mod storage;
mod transfer;
mod validation;


pub use error::Error;
pub use storage::{Balances, Loan, ParticipantState, PoolConfig};

use pool_ops::PoolOps;
use registry::CollateralRegistry;
use storage::Storage;
use transfer::TokenTransfer;
use validation::validate_params;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPool {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the pool
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidParameters`: ltv_bps not in (0, 10_000] or fee_bps not in [0, 10_000]
    pub fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        ltv_bps: i128,
        fee_bps: i128,
    ) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        validate_params(ltv_bps, fee_bps)?;

        Storage::set_config(
            &env,
            &PoolConfig {
                admin,
                asset,
                ltv_bps,
                fee_bps,
            },
        );
        Storage::set_paused(&env, false);
        Storage::set_pool_balance(&env, 0);

        Ok(())
    }

    /// Change the LTV ceiling and fee rate for future borrows
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidParameters`: Out-of-range ltv_bps or fee_bps
    pub fn update_params(env: Env, ltv_bps: i128, fee_bps: i128) -> Result<(), Error> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        validate_params(ltv_bps, fee_bps)?;

        config.ltv_bps = ltv_bps;
        config.fee_bps = fee_bps;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        Storage::set_paused(&env, true);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        Storage::set_paused(&env, false);
        Ok(())
    }

    // ============================================
    // LEDGER OPERATIONS
    // ============================================

    /// Deposit funds; the whole amount also becomes usable collateral
    ///
    /// # Errors
    /// - `NotInitialized`, `ContractPaused`
    /// - `InvalidAmount`: amount <= 0
    /// - `DebtOutstanding`: principal or fee still owed
    /// - `TransferFailed`: asset could not be pulled from the participant
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), Error> {
        let config = Self::active_config(&env)?;
        participant.require_auth();

        let transfer = TokenTransfer::new(&env, &config.asset);
        PoolOps::deposit(&env, &transfer, &participant, amount)
    }

    /// Withdraw deposited funds
    ///
    /// # Errors
    /// - `NotInitialized`, `ContractPaused`
    /// - `InvalidAmount`: amount <= 0
    /// - `DebtOutstanding`: principal or fee still owed
    /// - `InsufficientBalance`: amount exceeds deposited balance
    /// - `TransferFailed`: pool could not pay out
    pub fn withdraw(env: Env, participant: Address, amount: i128) -> Result<(), Error> {
        let config = Self::active_config(&env)?;
        participant.require_auth();

        let transfer = TokenTransfer::new(&env, &config.asset);
        PoolOps::withdraw(&env, &transfer, &participant, amount)
    }

    /// Borrow against own usable collateral. Returns the fee charged.
    ///
    /// # Errors
    /// - `NotInitialized`, `ContractPaused`
    /// - `InvalidAmount`: principal <= 0
    /// - `InsufficientCollateral`: principal above the LTV ceiling
    /// - `TransferFailed`: pool could not pay out
    pub fn borrow(env: Env, participant: Address, principal: i128) -> Result<i128, Error> {
        let config = Self::active_config(&env)?;
        participant.require_auth();

        let transfer = TokenTransfer::new(&env, &config.asset);
        PoolOps::borrow(&env, &transfer, &config, &participant, principal)
    }

    /// Repay fee first, then principal. Returns true once principal is zero.
    ///
    /// # Errors
    /// - `NotInitialized`, `ContractPaused`
    /// - `InvalidAmount`: amount <= 0
    /// - `NothingOwed`: no outstanding principal
    /// - `PaymentExceedsDebt`: amount above principal + fee
    /// - `TransferFailed`: asset could not be pulled from the participant
    pub fn pay(env: Env, participant: Address, amount: i128) -> Result<bool, Error> {
        let config = Self::active_config(&env)?;
        participant.require_auth();

        let transfer = TokenTransfer::new(&env, &config.asset);
        PoolOps::pay(&env, &transfer, &participant, amount)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        Storage::get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    pub fn deposited_of(env: Env, participant: Address) -> i128 {
        Storage::get_balances(&env, &participant).deposited
    }

    pub fn collateral_of(env: Env, participant: Address) -> i128 {
        Storage::get_balances(&env, &participant).collateral
    }

    pub fn principal_of(env: Env, participant: Address) -> i128 {
        Storage::get_loan(&env, &participant).principal
    }

    pub fn fee_of(env: Env, participant: Address) -> i128 {
        Storage::get_loan(&env, &participant).fee
    }

    /// Usable collateral held back by the open loan
    pub fn withheld_of(env: Env, participant: Address) -> i128 {
        Storage::get_loan(&env, &participant).collateral_withheld
    }

    pub fn get_balances(env: Env, participant: Address) -> Balances {
        Storage::get_balances(&env, &participant)
    }

    pub fn get_loan(env: Env, participant: Address) -> Loan {
        Storage::get_loan(&env, &participant)
    }

    /// Net asset movement into the pool, tracked independently of the token balance
    pub fn pool_balance(env: Env) -> i128 {
        Storage::get_pool_balance(&env)
    }

    /// Participants with nonzero usable collateral, in order of (re-)entry
    pub fn collateralized(env: Env) -> Vec<Address> {
        CollateralRegistry::snapshot(&env)
    }

    pub fn is_collateralized(env: Env, participant: Address) -> bool {
        CollateralRegistry::contains(&env, &participant)
    }

    pub fn participant_state(env: Env, participant: Address) -> ParticipantState {
        if Storage::get_loan(&env, &participant).principal > 0 {
            ParticipantState::Borrowed
        } else if Storage::get_balances(&env, &participant).deposited > 0 {
            ParticipantState::Funded
        } else {
            ParticipantState::Unfunded
        }
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn active_config(env: &Env) -> Result<PoolConfig, Error> {
        let config = Storage::get_config(env)?;
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(config)
    }
}
