use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transaction::{ClearedState, Split};

/// The required sub-type tag of a memorized transaction (the `K` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorizedKind {
    Check,
    Deposit,
    Payment,
    Investment,
    ElectronicPayment,
}

impl MemorizedKind {
    pub fn code(&self) -> &'static str {
        match self {
            MemorizedKind::Check => "C",
            MemorizedKind::Deposit => "D",
            MemorizedKind::Payment => "P",
            MemorizedKind::Investment => "I",
            MemorizedKind::ElectronicPayment => "E",
        }
    }

    pub fn from_code(code: &str) -> Option<MemorizedKind> {
        match code {
            "C" | "c" => Some(MemorizedKind::Check),
            "D" | "d" => Some(MemorizedKind::Deposit),
            "P" | "p" => Some(MemorizedKind::Payment),
            "I" | "i" => Some(MemorizedKind::Investment),
            "E" | "e" => Some(MemorizedKind::ElectronicPayment),
            _ => None,
        }
    }
}

/// Loan amortization data of a memorized payment, fields `1` through `7`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amortization {
    pub first_payment: Option<NaiveDate>,
    pub total_years: Option<i64>,
    pub payments_made: Option<i64>,
    pub periods_per_year: Option<i64>,
    pub interest_rate: Option<Decimal>,
    pub current_balance: Option<Decimal>,
    pub original_loan: Option<Decimal>,
}

impl Amortization {
    pub fn is_empty(&self) -> bool {
        *self == Amortization::default()
    }
}

/// A memorized-transaction-list entry: the bank transaction field set with
/// an optional date, plus the kind tag and optional amortization data.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorizedTransaction {
    pub kind: MemorizedKind,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub cleared: ClearedState,
    pub number: Option<String>,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub address: Vec<String>,
    pub category: Option<String>,
    pub splits: Vec<Split>,
    pub amortization: Option<Amortization>,
}
