use std::io::{self, Write};

use crate::codec;
use crate::config::Config;
use crate::model::{Account, AccountType, BankTransaction, Document, Transaction};
use crate::syntax::writer::FieldWriter;

/// Writes a document in the canonical block order: the account-independent
/// groups first, account blocks last. The ordering is load-bearing, not
/// cosmetic: a transaction block written after an account block is
/// attributed to that account by any compliant reader, so the flat
/// transactions must all come before the first `!Account` header.
pub fn write_document<W: Write>(doc: &Document, out: &mut W, config: &Config) -> io::Result<()> {
    let mut w = FieldWriter::new(out, config);
    if !doc.categories.is_empty() {
        w.write_header("Type", Some("Cat"))?;
        for c in &doc.categories {
            codec::category::encode(&mut w, c)?;
        }
    }
    if !doc.classes.is_empty() {
        w.write_header("Type", Some("Class"))?;
        for c in &doc.classes {
            codec::class::encode(&mut w, c)?;
        }
    }
    write_bank_runs(&mut w, &doc.transactions)?;
    if !doc.investments.is_empty() {
        w.write_header("Type", Some("Invst"))?;
        for t in &doc.investments {
            codec::investment::encode(&mut w, t)?;
        }
    }
    if !doc.memorized.is_empty() {
        w.write_header("Type", Some("Memorized"))?;
        for t in &doc.memorized {
            codec::memorized::encode(&mut w, t)?;
        }
    }
    if !doc.prices.is_empty() {
        w.write_header("Type", Some("Prices"))?;
        for p in &doc.prices {
            codec::price::encode(&mut w, p)?;
        }
    }
    for account in &doc.accounts {
        write_account(&mut w, account)?;
    }
    Ok(())
}

/// Bank-family transactions carry their block type individually; a header
/// is emitted at every change, so each contiguous run becomes one block.
fn write_bank_runs<W: Write>(
    w: &mut FieldWriter<W>,
    transactions: &[BankTransaction],
) -> io::Result<()> {
    let mut last: Option<AccountType> = None;
    for t in transactions {
        if last != Some(t.account_type) {
            w.write_header("Type", Some(t.account_type.header_value()))?;
            last = Some(t.account_type);
        }
        codec::bank::encode(w, t)?;
    }
    Ok(())
}

fn write_account<W: Write>(w: &mut FieldWriter<W>, account: &Account) -> io::Result<()> {
    w.write_header("Account", None)?;
    codec::account::encode(w, account)?;
    let mut last: Option<&'static str> = None;
    for t in &account.transactions {
        let header = match t {
            Transaction::Bank(b) => b.account_type.header_value(),
            Transaction::Investment(_) => "Invst",
        };
        if last != Some(header) {
            w.write_header("Type", Some(header))?;
            last = Some(header);
        }
        match t {
            Transaction::Bank(b) => codec::bank::encode(w, b)?,
            Transaction::Investment(i) => codec::investment::encode(w, i)?,
        }
    }
    Ok(())
}
