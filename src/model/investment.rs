use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transaction::ClearedState;

/// A transaction from an investment block (`!Type:Invst`).
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentTransaction {
    pub date: NaiveDate,
    /// Action code, e.g. `Buy`, `Sell`, `Div`. Kept verbatim.
    pub action: Option<String>,
    pub security: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub cleared: ClearedState,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub commission: Option<Decimal>,
    /// Account for the transfer part of the action.
    pub transfer_account: Option<String>,
    pub transfer_amount: Option<Decimal>,
}
