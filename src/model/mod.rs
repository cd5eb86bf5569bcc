pub mod account;
pub mod category;
pub mod class;
pub mod document;
pub mod investment;
pub mod memorized;
pub mod price;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use class::Class;
pub use document::Document;
pub use investment::InvestmentTransaction;
pub use memorized::{Amortization, MemorizedKind, MemorizedTransaction};
pub use price::Price;
pub use transaction::{AccountType, BankTransaction, ClearedState, Split, Transaction};
