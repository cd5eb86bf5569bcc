/// A class-list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub description: Option<String>,
}
