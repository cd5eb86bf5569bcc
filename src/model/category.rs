use rust_decimal::Decimal;

/// A category-list entry. Flags are decoded purely from field presence and
/// written back only when set, so they round-trip without defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub description: Option<String>,
    pub tax_related: bool,
    pub income: bool,
    pub expense: bool,
    pub budget: Option<Decimal>,
    pub tax_schedule: Option<String>,
}
