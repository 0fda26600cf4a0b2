use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage::{Balances, Storage};
use crate::validation::{checked_add, checked_sub_non_negative};

/// Working copy of one participant's balances and the pool aggregate.
///
/// Mutations only touch the in-memory copy; nothing reaches storage until
/// [`BalanceLedger::save`], so a failed transfer leaves the ledger untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceLedger {
    pub balances: Balances,
    pub pool_balance: i128,
}

impl BalanceLedger {
    pub fn load(env: &Env, participant: &Address) -> Self {
        Self {
            balances: Storage::get_balances(env, participant),
            pool_balance: Storage::get_pool_balance(env),
        }
    }

    pub fn save(&self, env: &Env, participant: &Address) {
        Storage::set_balances(env, participant, &self.balances);
        Storage::set_pool_balance(env, self.pool_balance);
    }

    pub fn credit(&mut self, amount: i128) -> Result<(), Error> {
        self.balances.deposited = checked_add(self.balances.deposited, amount)?;
        self.balances.collateral = checked_add(self.balances.collateral, amount)?;
        self.pool_balance = checked_add(self.pool_balance, amount)?;
        Ok(())
    }

    pub fn debit_for_withdraw(&mut self, amount: i128) -> Result<(), Error> {
        if amount > self.balances.deposited {
            return Err(Error::InsufficientBalance);
        }
        self.balances.deposited = checked_sub_non_negative(self.balances.deposited, amount)?;
        self.balances.collateral = checked_sub_non_negative(self.balances.collateral, amount)?;
        self.pool_balance = checked_sub_non_negative(self.pool_balance, amount)?;
        Ok(())
    }

    /// Raw principal leaves `deposited`, the LTV-scaled amount leaves `collateral`.
    pub fn consume_for_borrow(
        &mut self,
        principal: i128,
        collateral_consumed: i128,
    ) -> Result<(), Error> {
        self.balances.deposited = checked_sub_non_negative(self.balances.deposited, principal)?;
        self.balances.collateral =
            checked_sub_non_negative(self.balances.collateral, collateral_consumed)?;
        self.pool_balance = checked_sub_non_negative(self.pool_balance, principal)?;
        Ok(())
    }

    /// Only the principal part of a payment returns to `deposited`; the whole
    /// payment, fee included, is added to the pool.
    pub fn credit_for_repay(
        &mut self,
        principal_portion: i128,
        total_paid: i128,
    ) -> Result<(), Error> {
        self.balances.deposited = checked_add(self.balances.deposited, principal_portion)?;
        self.pool_balance = checked_add(self.pool_balance, total_paid)?;
        Ok(())
    }

    pub fn restore_collateral(&mut self, amount: i128) -> Result<(), Error> {
        self.balances.collateral = checked_add(self.balances.collateral, amount)?;
        Ok(())
    }
}
