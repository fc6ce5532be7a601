/// Account balance rules. Cash commands are handled into events,
/// which are then applied to the account.
pub mod account;

/// Validated cash commands that are later handled by [`account`].
pub mod command;

/// Append-only transaction log and the text format of its lines.
pub mod ledger;

/// Cash machine interface, plus "in memory" implementation.
/// Owns the accounts and their logs, and coordinates command parsing,
/// handling and ledger bookkeeping.
pub mod atm;

/// Drives [`atm`] from a CSV script and reports balances as CSV.
/// Lives in the library so integration tests can use it too.
pub mod bin_utils;
