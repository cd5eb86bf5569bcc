use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::investment::InvestmentTransaction;

/// The ledger family of a bank-style transaction block. The family is not
/// stored per transaction in the source text; it is the value of the
/// `!Type:` header introducing the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Bank,
    Cash,
    CreditCard,
    Asset,
    Liability,
}

impl AccountType {
    /// The header value introducing a block of this family.
    pub fn header_value(&self) -> &'static str {
        match self {
            AccountType::Bank => "Bank",
            AccountType::Cash => "Cash",
            AccountType::CreditCard => "CCard",
            AccountType::Asset => "Oth A",
            AccountType::Liability => "Oth L",
        }
    }

    pub fn from_header_value(value: &str) -> Option<AccountType> {
        let all = [
            AccountType::Bank,
            AccountType::Cash,
            AccountType::CreditCard,
            AccountType::Asset,
            AccountType::Liability,
        ];
        all.into_iter()
            .find(|t| t.header_value().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearedState {
    #[default]
    NotCleared,
    Cleared,
    Reconciled,
}

impl ClearedState {
    /// Canonical field value; not cleared is spelled by omitting the field.
    pub fn as_code(&self) -> &'static str {
        match self {
            ClearedState::NotCleared => "",
            ClearedState::Cleared => "*",
            ClearedState::Reconciled => "R",
        }
    }
}

/// A sub-allocation of one transaction's amount to a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub category: String,
    pub memo: String,
    pub amount: Option<Decimal>,
    pub percentage: Option<Decimal>,
}

/// A transaction of the bank family (bank, cash, credit card, asset,
/// liability). Write-once: built by the decoder, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct BankTransaction {
    pub account_type: AccountType,
    pub date: NaiveDate,
    pub amount: Option<Decimal>,
    pub cleared: ClearedState,
    /// Check or reference number.
    pub number: Option<String>,
    pub payee: Option<String>,
    pub memo: Option<String>,
    /// Address lines in source order.
    pub address: Vec<String>,
    /// Category or transfer account.
    pub category: Option<String>,
    pub splits: Vec<Split>,
}

/// A transaction owned by an account, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Bank(BankTransaction),
    Investment(InvestmentTransaction),
}
