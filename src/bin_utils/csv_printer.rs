use std::io::Write;

use crate::account::{AccountNumber, Pin};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Balance<'a> {
    pub account: AccountNumber,
    pub pin: Pin,
    pub owner: &'a str,
    pub balance: Decimal,
}

pub fn print_balances<'a, W>(
    output: &mut W,
    balances: impl Iterator<Item = Balance<'a>>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for balance in balances {
        if let Err(err) = writer.serialize(balance) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
