pub mod account;
pub mod bank;
pub mod category;
pub mod class;
pub mod investment;
pub mod memorized;
pub mod price;

use crate::model::AccountType;

/// The block kind a recognized header introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Transactions(AccountType),
    Investments,
    Categories,
    Classes,
    Memorized,
    Accounts,
    Prices,
}

/// Maps a header name/value pair to its block kind, `None` for headers that
/// are skipped wholesale. Matching is ASCII case-insensitive.
pub fn block_kind(name: &str, value: &str) -> Option<BlockKind> {
    if name.eq_ignore_ascii_case("Account") {
        return Some(BlockKind::Accounts);
    }
    if !name.eq_ignore_ascii_case("Type") {
        return None;
    }
    if let Some(account_type) = AccountType::from_header_value(value) {
        return Some(BlockKind::Transactions(account_type));
    }
    if value.eq_ignore_ascii_case("Invst") {
        Some(BlockKind::Investments)
    } else if value.eq_ignore_ascii_case("Cat") {
        Some(BlockKind::Categories)
    } else if value.eq_ignore_ascii_case("Class") {
        Some(BlockKind::Classes)
    } else if value.eq_ignore_ascii_case("Memorized") {
        Some(BlockKind::Memorized)
    } else if value.eq_ignore_ascii_case("Prices") {
        Some(BlockKind::Prices)
    } else {
        None
    }
}
