use std::{fmt, io::Write};

use rust_decimal::Decimal;

use crate::account::{AccountEvent, AccountEventKind};

/// Append-only list of ledger lines for a single account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<String>,
}

impl TransactionLog {
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one entry per line, in the order they were appended.
    pub fn write_to<W>(&self, output: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        for entry in &self.entries {
            writeln!(output, "{entry}")?;
        }
        output.flush()
    }
}

/// Renders an applied event together with the balance it left behind, e.g.
/// `Deposit - Amount: $100.00, Updated Balance: $300.00`.
pub struct LedgerEntry<'a> {
    event: &'a AccountEvent,
    balance: Decimal,
}

impl<'a> LedgerEntry<'a> {
    pub fn new(event: &'a AccountEvent, balance: Decimal) -> Self {
        Self { event, balance }
    }
}

impl fmt::Display for LedgerEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.event.kind() {
            AccountEventKind::Deposited => "Deposit",
            AccountEventKind::Withdrawn => "Withdrawal",
        };
        write!(
            f,
            "{label} - Amount: ${:.2}, Updated Balance: ${:.2}",
            self.event.amount().round_dp(2),
            self.balance.round_dp(2)
        )
    }
}
