//! This module could be a separate crate on its own, to bootstrap [`atm_ledger`] within binary
//! but to keep things simple it is included directly in the library.

use std::{
    io::{Read, Write},
    path::PathBuf,
};

use crate::{
    atm::{Atm, AtmError, in_memory_atm::InMemoryAtm},
    command::OperationKind,
};
use anyhow::{Context, Result};
use csv_parser::{CsvOperationParser, Operation};
use csv_printer::{Balance, print_balances};
use thiserror::Error;
use tracing::{debug, info};

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Malformed row: {0}")]
    Parse(#[from] csv::Error),
    #[error("Column `{column}` is required for {kind:?}")]
    MissingColumn {
        column: &'static str,
        kind: OperationKind,
    },
    #[error(transparent)]
    AtmErr(#[from] AtmError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    /// When set, every account's ledger is printed to `<account>-<pin>.txt` in this directory.
    pub ledger_dir: Option<PathBuf>,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut atm = InMemoryAtm::default();

        for (line, row) in parser {
            let result = row
                .map_err(OperationError::from)
                .and_then(|op| execute(&mut atm, op));
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
        }

        if let Some(dir) = &self.ledger_dir {
            for key in atm.accounts().keys() {
                let path = dir.join(format!("{}-{}.txt", key.account_number, key.pin));
                atm.print_ledger(&path, key.account_number, key.pin)
                    .with_context(|| format!("Failed to print ledger to `{}`", path.display()))?;
            }
            info!(dir = %dir.display(), "ledgers printed");
        }

        print_balances(
            self.output,
            atm.accounts().into_iter().map(|(key, acc)| Balance {
                account: key.account_number,
                pin: key.pin,
                owner: acc.owner_name(),
                balance: acc.balance(),
            }),
        )
    }
}

fn execute(atm: &mut InMemoryAtm, op: Operation) -> Result<(), OperationError> {
    debug!(kind = ?op.kind, account = op.account, "executing operation");
    let amount = op.amount.ok_or(OperationError::MissingColumn {
        column: "amount",
        kind: op.kind,
    })?;
    match op.kind {
        OperationKind::Register => {
            let name = op.name.ok_or(OperationError::MissingColumn {
                column: "name",
                kind: op.kind,
            })?;
            atm.register_account(op.account, op.pin, &name, amount)?;
        }
        OperationKind::Deposit => atm.deposit_cash(op.account, op.pin, amount)?,
        OperationKind::Withdrawal => atm.withdraw_cash(op.account, op.pin, amount)?,
    }
    Ok(())
}
