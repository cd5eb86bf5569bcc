use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A price quote, stored as one comma-delimited record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub symbol: String,
    pub price: Decimal,
    pub date: NaiveDate,
}
