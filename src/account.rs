use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{CashAction, CashCommand};

pub type AccountNumber = u64;
pub type Pin = u32;

/// Account number and PIN pair. Identifies exactly one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountKey {
    pub account_number: AccountNumber,
    pub pin: Pin,
}

impl AccountKey {
    pub fn new(account_number: AccountNumber, pin: Pin) -> Self {
        Self {
            account_number,
            pin,
        }
    }
}

// PIN is never rendered, keys show up in error messages and logs
impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.account_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> AccountEventKind {
        self.kind
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Balance overflow: balance {balance}, deposited {requested}")]
    BalanceOverflow {
        balance: Decimal,
        requested: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    owner_name: String,
    balance: Decimal,
}

impl Account {
    /// Opening balance is taken as is, negative values included.
    pub fn new(owner_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    pub fn handle_cash_command(
        &self,
        command: &CashCommand,
    ) -> Result<AccountEvent, AccountError> {
        match command.action {
            CashAction::Deposit => {
                // apply must not be able to overflow
                if self.balance.checked_add(command.amount).is_some() {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Deposited,
                    })
                } else {
                    Err(AccountError::BalanceOverflow {
                        balance: self.balance,
                        requested: command.amount,
                    })
                }
            }
            CashAction::Withdraw => {
                if command.amount <= self.balance {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Withdrawn,
                    })
                } else {
                    Err(AccountError::InsufficientFunds {
                        balance: self.balance,
                        requested: command.amount,
                    })
                }
            }
        }
    }
}
