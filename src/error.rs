use thiserror::Error;

use crate::syntax::tokenizer::LexError;

/// Everything that can go wrong while loading a document. None of these are
/// recovered internally; a failed load yields no document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A typed read was invoked while the reader was not positioned on a
    /// token of the expected kind. This is a bug in the calling decoder,
    /// not a problem with the input.
    #[error("line {line}: {operation} while positioned on {got}")]
    OperationState {
        line: usize,
        operation: &'static str,
        got: &'static str,
    },

    /// A field's text could not be converted to its target type. Often
    /// caused by a locale mismatch; retrying with an explicit format or an
    /// override locale in the [Config](crate::Config) may succeed.
    #[error("line {line}: cannot read {value:?} as {target}")]
    DataFormat {
        line: usize,
        value: String,
        target: &'static str,
    },

    #[error("line {line}: {record} record is missing required field '{field}'")]
    RequiredField {
        line: usize,
        record: &'static str,
        field: &'static str,
    },

    #[error(
        "line {line}: inconsistent splits: {categories} categories, {memos} memos, \
         {amounts} amounts, {percentages} percentages"
    )]
    SplitConsistency {
        line: usize,
        categories: usize,
        memos: usize,
        amounts: usize,
        percentages: usize,
    },

    #[error("line {line}: unexpected end of file inside a record")]
    Truncated { line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
