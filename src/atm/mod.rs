use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountError, AccountKey, AccountNumber, Pin},
    command::CashCommandError,
};

pub mod in_memory_atm;

#[derive(Debug, Error)]
pub enum AtmError {
    #[error("Account {key} is already registered")]
    DuplicateKey { key: AccountKey },
    #[error("Account {key} not found")]
    KeyNotFound { key: AccountKey },
    #[error(transparent)]
    CommandErr(#[from] CashCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error("Failed to write ledger: {0}")]
    Io(#[from] std::io::Error),
}

/// Cash machine operations. Every failed call leaves the machine exactly as it was.
pub trait Atm {
    fn register_account(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> Result<(), AtmError>;

    fn withdraw_cash(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> Result<(), AtmError>;

    fn deposit_cash(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> Result<(), AtmError>;

    fn check_balance(&self, account_number: AccountNumber, pin: Pin) -> Result<Decimal, AtmError>;

    /// Overwrites `path` with the account's ledger, one transaction per line.
    fn print_ledger(
        &self,
        path: &Path,
        account_number: AccountNumber,
        pin: Pin,
    ) -> Result<(), AtmError>;
}
