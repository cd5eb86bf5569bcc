//! Reader and writer for the Quicken Interchange Format (QIF): a legacy
//! line-oriented financial interchange format of `!`-prefixed block headers,
//! records terminated by `^`, and single-letter-coded field lines.
//!
//! The pipeline is tokenizer → typed field reader → per-record decoders →
//! document assembly, mirrored exactly on the writing side. Number and date
//! spellings are locale-sensitive; every call takes an explicit [Config]
//! instead of consulting process-wide locale state.
//!
//! ```
//! use qif::{load, save, Config};
//!
//! let text = "!Type:Bank\nD1/1/18\nT-10.00\nPAcme Corp\n^\n";
//! let config = Config::default();
//! let doc = load(text, &config).unwrap();
//! assert_eq!(1, doc.transactions.len());
//!
//! let mut out = Vec::new();
//! save(&doc, &mut out, &config).unwrap();
//! let reloaded = load(std::str::from_utf8(&out).unwrap(), &config).unwrap();
//! assert_eq!(doc, reloaded);
//! ```

pub mod assemble;
pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod syntax;

use std::io::Write;

pub use config::{Config, DateMode, Locale, NumberMode};
pub use error::Error;
pub use model::Document;

/// Parses a whole document. Any error aborts the load; there is no partial
/// result.
pub fn load(text: &str, config: &Config) -> Result<Document, Error> {
    assemble::read_document(text, config)
}

/// Writes a document as canonical text: categories, classes, flat
/// transactions, memorized transactions and prices first, account blocks
/// (each followed by its owned transactions) last.
pub fn save<W: Write>(document: &Document, out: &mut W, config: &Config) -> std::io::Result<()> {
    export::write_document(document, out, config)
}
