use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::{AccountType, BankTransaction, ClearedState, Split};
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

/// Accumulator for the transaction field set, shared by the bank and
/// memorized decoders. One fresh accumulator per record.
#[derive(Default)]
pub(crate) struct TransactionFields {
    pub date: Option<NaiveDate>,
    pub cleared: ClearedState,
    pub number: Option<String>,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub address: Vec<String>,
    pub category: Option<String>,
    amount: Option<Decimal>,
    // `U` repeats the amount in some writers; kept as a fallback for `T`
    amount_alias: Option<Decimal>,
    split_categories: Vec<String>,
    split_memos: Vec<String>,
    split_amounts: Vec<Decimal>,
    split_percentages: Vec<Decimal>,
}

impl TransactionFields {
    /// Applies the current field. Returns false when the code is not part
    /// of the transaction field set, so wrapping decoders can try theirs.
    pub fn apply(&mut self, name: &str, r: &FieldReader) -> Result<bool> {
        match name {
            "D" => self.date = Some(r.date()?),
            "T" => self.amount = Some(r.decimal()?),
            "U" => self.amount_alias = Some(r.decimal()?),
            "C" => self.cleared = r.cleared_state()?,
            "N" => self.number = Some(r.value()?.to_string()),
            "P" => self.payee = Some(r.value()?.to_string()),
            "M" => self.memo = Some(r.value()?.to_string()),
            "A" => self.address.push(r.value()?.to_string()),
            "L" => self.category = Some(r.value()?.to_string()),
            "S" => self.split_categories.push(r.value()?.to_string()),
            "E" => self.split_memos.push(r.value()?.to_string()),
            "$" => self.split_amounts.push(r.decimal()?),
            "%" => self.split_percentages.push(r.decimal()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount.or(self.amount_alias)
    }

    /// Pairs the split field runs into [Split] values, enforcing that the
    /// category, memo and value counts agree.
    pub fn splits(&mut self, line: usize) -> Result<Vec<Split>> {
        let categories = self.split_categories.len();
        let memos = self.split_memos.len();
        let values = self.split_amounts.len().max(self.split_percentages.len());
        if categories == 0 && memos == 0 && values == 0 {
            return Ok(Vec::new());
        }
        if categories != memos || categories != values {
            return Err(Error::SplitConsistency {
                line,
                categories,
                memos,
                amounts: self.split_amounts.len(),
                percentages: self.split_percentages.len(),
            });
        }
        Ok((0..categories)
            .map(|i| Split {
                category: std::mem::take(&mut self.split_categories[i]),
                memo: std::mem::take(&mut self.split_memos[i]),
                amount: self.split_amounts.get(i).copied(),
                percentage: self.split_percentages.get(i).copied(),
            })
            .collect())
    }
}

pub fn decode(r: &mut FieldReader, account_type: AccountType) -> Result<BankTransaction> {
    r.begin_record()?;
    let mut fields = TransactionFields::default();
    while r.at_field() {
        fields.apply(r.field_name()?, r)?;
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let splits = fields.splits(line)?;
    let date = fields.date.ok_or(Error::RequiredField {
        line,
        record: "transaction",
        field: "D",
    })?;
    Ok(BankTransaction {
        account_type,
        date,
        amount: fields.amount(),
        cleared: fields.cleared,
        number: fields.number,
        payee: fields.payee,
        memo: fields.memo,
        address: fields.address,
        category: fields.category,
        splits,
    })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, t: &BankTransaction) -> io::Result<()> {
    w.write_date("D", t.date)?;
    w.write_decimal_opt("T", t.amount)?;
    w.write_field_if_not_empty("C", Some(t.cleared.as_code()))?;
    w.write_field_if_not_empty("N", t.number.as_deref())?;
    w.write_field_if_not_empty("P", t.payee.as_deref())?;
    w.write_field_if_not_empty("M", t.memo.as_deref())?;
    for line in &t.address {
        w.write_field("A", line)?;
    }
    w.write_field_if_not_empty("L", t.category.as_deref())?;
    write_splits(w, &t.splits)?;
    w.write_end_of_record()
}

/// The category and memo of a split are always written, even when empty:
/// the counts must agree when the document is read back.
pub(crate) fn write_splits<W: Write>(w: &mut FieldWriter<W>, splits: &[Split]) -> io::Result<()> {
    for s in splits {
        w.write_field("S", &s.category)?;
        w.write_field("E", &s.memo)?;
        w.write_decimal_opt("$", s.amount)?;
        w.write_decimal_opt("%", s.percentage)?;
    }
    Ok(())
}
