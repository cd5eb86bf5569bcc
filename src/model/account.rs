use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transaction::Transaction;

/// An account record plus the transactions it owns: every transaction block
/// between this account's record and the next account header is attributed
/// to it. The type string is kept verbatim for exact round-trips.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub name: String,
    pub account_type: Option<String>,
    pub description: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub statement_date: Option<NaiveDate>,
    pub statement_balance: Option<Decimal>,
    pub transactions: Vec<Transaction>,
}
