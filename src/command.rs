use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Operation kinds accepted in a batch script.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Register,
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashAction {
    Deposit,
    Withdraw,
}

/// Validated request to move cash in or out of an account.
#[derive(Debug, Clone)]
pub struct CashCommand {
    pub action: CashAction,
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum CashCommandError {
    #[error("Amount must not be negative for {action:?}, got {amount}")]
    NegativeAmount { action: CashAction, amount: Decimal },
}

impl CashCommand {
    /// Zero is a valid amount, anything below it is not. A signed zero becomes plain zero.
    pub fn parse(action: CashAction, amount: Decimal) -> Result<Self, CashCommandError> {
        if amount.is_zero() {
            return Ok(Self {
                action,
                amount: Decimal::ZERO,
            });
        }
        if amount.is_sign_negative() {
            return Err(CashCommandError::NegativeAmount { action, amount });
        }
        Ok(Self { action, amount })
    }
}
