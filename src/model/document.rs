use super::account::Account;
use super::category::Category;
use super::class::Class;
use super::investment::InvestmentTransaction;
use super::memorized::MemorizedTransaction;
use super::price::Price;
use super::transaction::BankTransaction;

/// A parsed document: insertion-ordered collections per record kind. The
/// flat transaction collections hold only transactions seen before any
/// account record; everything after an account record belongs to that
/// account's own list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub accounts: Vec<Account>,
    pub transactions: Vec<BankTransaction>,
    pub investments: Vec<InvestmentTransaction>,
    pub categories: Vec<Category>,
    pub classes: Vec<Class>,
    pub memorized: Vec<MemorizedTransaction>,
    pub prices: Vec<Price>,
}
