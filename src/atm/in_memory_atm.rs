use std::{
    collections::{BTreeMap, HashMap, hash_map::Entry},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountKey, AccountNumber, Pin},
    command::{CashAction, CashCommand},
    ledger::{LedgerEntry, TransactionLog},
};

use super::{Atm, AtmError};

/// Account and its ledger live together, so neither can exist without the other.
#[derive(Debug)]
struct AccountRecord {
    account: Account,
    transactions: TransactionLog,
}

#[derive(Debug, Default)]
pub struct InMemoryAtm {
    records: HashMap<AccountKey, AccountRecord>,
}

impl InMemoryAtm {
    /// All registered accounts, ordered by key.
    pub fn accounts(&self) -> BTreeMap<AccountKey, &Account> {
        self.records
            .iter()
            .map(|(key, record)| (*key, &record.account))
            .collect()
    }

    /// Transaction logs of all registered accounts, ordered by key.
    pub fn transactions(&self) -> BTreeMap<AccountKey, &TransactionLog> {
        self.records
            .iter()
            .map(|(key, record)| (*key, &record.transactions))
            .collect()
    }

    /// Logs can only be appended to, so this can't break the account/log pairing.
    pub fn transactions_mut(&mut self) -> BTreeMap<AccountKey, &mut TransactionLog> {
        self.records
            .iter_mut()
            .map(|(key, record)| (*key, &mut record.transactions))
            .collect()
    }

    /// Writes the account's ledger to any sink, see [`Atm::print_ledger`].
    pub fn write_ledger<W>(
        &self,
        output: &mut W,
        account_number: AccountNumber,
        pin: Pin,
    ) -> Result<(), AtmError>
    where
        W: Write,
    {
        let record = self.record(AccountKey::new(account_number, pin))?;
        record.transactions.write_to(output)?;
        Ok(())
    }

    fn record(&self, key: AccountKey) -> Result<&AccountRecord, AtmError> {
        self.records.get(&key).ok_or(AtmError::KeyNotFound { key })
    }

    fn move_cash(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        action: CashAction,
        amount: Decimal,
    ) -> Result<(), AtmError> {
        let key = AccountKey::new(account_number, pin);
        let record = self
            .records
            .get_mut(&key)
            .ok_or(AtmError::KeyNotFound { key })?;
        let command = CashCommand::parse(action, amount)?;
        let evt = record.account.handle_cash_command(&command)?;
        // nothing is mutated before this point
        record.account.apply(&evt);
        let entry = LedgerEntry::new(&evt, record.account.balance()).to_string();
        debug!(account = %key, "{entry}");
        record.transactions.push(entry);
        Ok(())
    }
}

impl Atm for InMemoryAtm {
    fn register_account(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> Result<(), AtmError> {
        let key = AccountKey::new(account_number, pin);
        let Entry::Vacant(entry) = self.records.entry(key) else {
            return Err(AtmError::DuplicateKey { key });
        };
        entry.insert(AccountRecord {
            account: Account::new(owner_name, initial_balance),
            transactions: TransactionLog::default(),
        });
        info!(account = %key, owner = owner_name, %initial_balance, "account registered");
        Ok(())
    }

    fn withdraw_cash(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> Result<(), AtmError> {
        self.move_cash(account_number, pin, CashAction::Withdraw, amount)
    }

    fn deposit_cash(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> Result<(), AtmError> {
        self.move_cash(account_number, pin, CashAction::Deposit, amount)
    }

    fn check_balance(&self, account_number: AccountNumber, pin: Pin) -> Result<Decimal, AtmError> {
        Ok(self
            .record(AccountKey::new(account_number, pin))?
            .account
            .balance())
    }

    fn print_ledger(
        &self,
        path: &Path,
        account_number: AccountNumber,
        pin: Pin,
    ) -> Result<(), AtmError> {
        let key = AccountKey::new(account_number, pin);
        // file is only touched for known accounts
        let record = self.record(key)?;
        let mut output = BufWriter::new(File::create(path)?);
        record.transactions.write_to(&mut output)?;
        info!(
            account = %key,
            path = %path.display(),
            lines = record.transactions.len(),
            "ledger printed"
        );
        Ok(())
    }
}
