use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::{ClearedState, InvestmentTransaction};
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

pub fn decode(r: &mut FieldReader) -> Result<InvestmentTransaction> {
    r.begin_record()?;
    let mut date: Option<NaiveDate> = None;
    let mut action: Option<String> = None;
    let mut security: Option<String> = None;
    let mut price: Option<Decimal> = None;
    let mut quantity: Option<Decimal> = None;
    let mut amount: Option<Decimal> = None;
    let mut amount_alias: Option<Decimal> = None;
    let mut cleared = ClearedState::default();
    let mut payee: Option<String> = None;
    let mut memo: Option<String> = None;
    let mut commission: Option<Decimal> = None;
    let mut transfer_account: Option<String> = None;
    let mut transfer_amount: Option<Decimal> = None;
    while r.at_field() {
        match r.field_name()? {
            "D" => date = Some(r.date()?),
            "N" => action = Some(r.value()?.to_string()),
            "Y" => security = Some(r.value()?.to_string()),
            "I" => price = Some(r.decimal()?),
            "Q" => quantity = Some(r.decimal()?),
            "T" => amount = Some(r.decimal()?),
            // `U` repeats the amount in some writers; fallback for `T`
            "U" => amount_alias = Some(r.decimal()?),
            "C" => cleared = r.cleared_state()?,
            "P" => payee = Some(r.value()?.to_string()),
            "M" => memo = Some(r.value()?.to_string()),
            "O" => commission = Some(r.decimal()?),
            "L" => transfer_account = Some(r.value()?.to_string()),
            "$" => transfer_amount = Some(r.decimal()?),
            _ => {}
        }
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let date = date.ok_or(Error::RequiredField {
        line,
        record: "investment transaction",
        field: "D",
    })?;
    Ok(InvestmentTransaction {
        date,
        action,
        security,
        price,
        quantity,
        amount: amount.or(amount_alias),
        cleared,
        payee,
        memo,
        commission,
        transfer_account,
        transfer_amount,
    })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, t: &InvestmentTransaction) -> io::Result<()> {
    w.write_date("D", t.date)?;
    w.write_field_if_not_empty("N", t.action.as_deref())?;
    w.write_field_if_not_empty("Y", t.security.as_deref())?;
    w.write_decimal_opt("I", t.price)?;
    w.write_decimal_opt("Q", t.quantity)?;
    w.write_decimal_opt("T", t.amount)?;
    w.write_field_if_not_empty("C", Some(t.cleared.as_code()))?;
    w.write_field_if_not_empty("P", t.payee.as_deref())?;
    w.write_field_if_not_empty("M", t.memo.as_deref())?;
    w.write_decimal_opt("O", t.commission)?;
    w.write_field_if_not_empty("L", t.transfer_account.as_deref())?;
    w.write_decimal_opt("$", t.transfer_amount)?;
    w.write_end_of_record()
}
