use soroban_sdk::{log, Address, Env, Symbol};

use crate::error::Error;
use crate::events::{BorrowedEvent, DepositedEvent, RepaidEvent, WithdrawnEvent};
use crate::ledger::BalanceLedger;
use crate::loan::LoanAccount;
use crate::registry::CollateralRegistry;
use crate::storage::PoolConfig;
use crate::transfer::AssetTransfer;
use crate::validation::require_positive;

/// The four ledger operations.
///
/// Each one validates and computes every new balance in memory, then moves
/// the asset, and only writes the ledger and registry once the transfer has
/// succeeded.
pub struct PoolOps;

impl PoolOps {
    pub fn deposit<T: AssetTransfer>(
        env: &Env,
        transfer: &T,
        participant: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_positive(amount)?;

        if LoanAccount::load(env, participant).has_debt() {
            return Err(Error::DebtOutstanding);
        }

        let mut ledger = BalanceLedger::load(env, participant);
        ledger.credit(amount)?;

        transfer.transfer_in(participant, amount)?;

        ledger.save(env, participant);
        CollateralRegistry::sync(env, participant, ledger.balances.collateral);

        env.events().publish(
            (Symbol::new(env, "deposited"), participant.clone()),
            DepositedEvent {
                participant: participant.clone(),
                amount,
                deposited: ledger.balances.deposited,
                collateral: ledger.balances.collateral,
            },
        );

        Ok(())
    }

    pub fn withdraw<T: AssetTransfer>(
        env: &Env,
        transfer: &T,
        participant: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        require_positive(amount)?;

        if LoanAccount::load(env, participant).has_debt() {
            return Err(Error::DebtOutstanding);
        }

        let mut ledger = BalanceLedger::load(env, participant);
        ledger.debit_for_withdraw(amount)?;

        transfer.transfer_out(participant, amount)?;

        ledger.save(env, participant);
        CollateralRegistry::sync(env, participant, ledger.balances.collateral);

        env.events().publish(
            (Symbol::new(env, "withdrawn"), participant.clone()),
            WithdrawnEvent {
                participant: participant.clone(),
                amount,
                deposited: ledger.balances.deposited,
                collateral: ledger.balances.collateral,
            },
        );

        Ok(())
    }

    /// Returns the fee charged on this draw.
    pub fn borrow<T: AssetTransfer>(
        env: &Env,
        transfer: &T,
        config: &PoolConfig,
        participant: &Address,
        principal: i128,
    ) -> Result<i128, Error> {
        require_positive(principal)?;

        let mut ledger = BalanceLedger::load(env, participant);
        let mut account = LoanAccount::load(env, participant);

        let collateral_required =
            LoanAccount::capacity_check(ledger.balances.collateral, principal, config.ltv_bps)?;
        log!(
            env,
            "borrow capacity ok",
            participant.clone(),
            principal,
            collateral_required
        );

        ledger.consume_for_borrow(principal, collateral_required)?;
        let fee = account.open_or_increase(principal, collateral_required, config.fee_bps)?;

        transfer.transfer_out(participant, principal)?;

        ledger.save(env, participant);
        account.save(env, participant);
        CollateralRegistry::sync(env, participant, ledger.balances.collateral);

        env.events().publish(
            (Symbol::new(env, "borrowed"), participant.clone()),
            BorrowedEvent {
                participant: participant.clone(),
                principal,
                fee,
                collateral_consumed: collateral_required,
            },
        );

        Ok(fee)
    }

    /// Returns whether the payment extinguished the principal.
    pub fn pay<T: AssetTransfer>(
        env: &Env,
        transfer: &T,
        participant: &Address,
        amount: i128,
    ) -> Result<bool, Error> {
        require_positive(amount)?;

        let mut account = LoanAccount::load(env, participant);
        let (fee_portion, principal_portion) = account.apply_payment(amount)?;

        let mut ledger = BalanceLedger::load(env, participant);
        ledger.credit_for_repay(principal_portion, amount)?;

        let fully_repaid = account.is_fully_repaid();
        if fully_repaid {
            let withheld = account.release_withheld();
            ledger.restore_collateral(withheld)?;
            log!(env, "loan repaid", participant.clone(), withheld);
        }

        transfer.transfer_in(participant, amount)?;

        ledger.save(env, participant);
        account.save(env, participant);
        CollateralRegistry::sync(env, participant, ledger.balances.collateral);

        env.events().publish(
            (Symbol::new(env, "repaid"), participant.clone()),
            RepaidEvent {
                participant: participant.clone(),
                amount,
                fee_portion,
                principal_portion,
                fully_repaid,
            },
        );

        Ok(fully_repaid)
    }
}
