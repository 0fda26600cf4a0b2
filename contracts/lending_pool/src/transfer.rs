use soroban_sdk::{token, Address, Env};

use crate::error::Error;

/// Moves the pooled asset between a participant and the pool.
///
/// Either the whole amount moves or the call fails with no effect.
pub trait AssetTransfer {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error>;
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error>;
}

/// [`AssetTransfer`] backed by a Soroban token contract, with the pool
/// contract itself as custodian.
pub struct TokenTransfer<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> TokenTransfer<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Self {
            env,
            client: token::Client::new(env, asset),
        }
    }
}

impl AssetTransfer for TokenTransfer<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), Error> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer(from, &pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), Error> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer(&pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
