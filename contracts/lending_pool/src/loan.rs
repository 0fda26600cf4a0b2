use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage::{Loan, Storage};
use crate::validation::{
    calculate_collateral_required, calculate_fee, checked_add, checked_sub_non_negative,
};

/// Working copy of one participant's outstanding loan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanAccount {
    pub loan: Loan,
}

impl LoanAccount {
    pub fn load(env: &Env, participant: &Address) -> Self {
        Self {
            loan: Storage::get_loan(env, participant),
        }
    }

    pub fn save(&self, env: &Env, participant: &Address) {
        Storage::set_loan(env, participant, &self.loan);
    }

    /// Any unpaid principal or fee.
    pub fn has_debt(&self) -> bool {
        self.loan.principal > 0 || self.loan.fee > 0
    }

    /// Usable collateral a borrow of `principal` would consume.
    ///
    /// # Errors
    /// - `InsufficientCollateral`: ceil(principal × 10,000 / ltv) > collateral
    /// - `ArithmeticOverflow`: principal × 10,000 does not fit in i128
    pub fn capacity_check(
        usable_collateral: i128,
        principal: i128,
        ltv_bps: i128,
    ) -> Result<i128, Error> {
        let required =
            calculate_collateral_required(principal, ltv_bps).ok_or(Error::ArithmeticOverflow)?;
        if required > usable_collateral {
            return Err(Error::InsufficientCollateral);
        }
        Ok(required)
    }

    /// Record a new draw. The fee is charged on `principal` alone, never on
    /// principal already outstanding. Returns the fee added.
    pub fn open_or_increase(
        &mut self,
        principal: i128,
        collateral_consumed: i128,
        fee_bps: i128,
    ) -> Result<i128, Error> {
        let fee = calculate_fee(principal, fee_bps).ok_or(Error::ArithmeticOverflow)?;

        self.loan.principal = checked_add(self.loan.principal, principal)?;
        self.loan.fee = checked_add(self.loan.fee, fee)?;
        self.loan.collateral_withheld =
            checked_add(self.loan.collateral_withheld, collateral_consumed)?;
        Ok(fee)
    }

    /// Split `amount` into `(fee_portion, principal_portion)`, fee first.
    ///
    /// # Errors
    /// - `NothingOwed`: no outstanding principal
    /// - `PaymentExceedsDebt`: amount > principal + fee
    pub fn apply_payment(&mut self, amount: i128) -> Result<(i128, i128), Error> {
        if self.loan.principal <= 0 {
            return Err(Error::NothingOwed);
        }
        let total_debt = checked_add(self.loan.principal, self.loan.fee)?;
        if amount > total_debt {
            return Err(Error::PaymentExceedsDebt);
        }

        let fee_portion = amount.min(self.loan.fee);
        let principal_portion = checked_sub_non_negative(amount, fee_portion)?;

        self.loan.fee = checked_sub_non_negative(self.loan.fee, fee_portion)?;
        self.loan.principal = checked_sub_non_negative(self.loan.principal, principal_portion)?;
        Ok((fee_portion, principal_portion))
    }

    pub fn is_fully_repaid(&self) -> bool {
        self.loan.principal == 0
    }

    /// Hand back the collateral withheld by the loan and reset it to zero.
    pub fn release_withheld(&mut self) -> i128 {
        let withheld = self.loan.collateral_withheld;
        self.loan.collateral_withheld = 0;
        withheld
    }
}
