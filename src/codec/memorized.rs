use std::io::{self, Write};

use super::bank::{write_splits, TransactionFields};
use crate::error::{Error, Result};
use crate::model::{Amortization, MemorizedKind, MemorizedTransaction};
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

pub fn decode(r: &mut FieldReader) -> Result<MemorizedTransaction> {
    r.begin_record()?;
    let mut fields = TransactionFields::default();
    let mut kind: Option<MemorizedKind> = None;
    let mut amortization = Amortization::default();
    while r.at_field() {
        let name = r.field_name()?;
        match name {
            "K" => {
                let value = r.value()?;
                kind = Some(MemorizedKind::from_code(value).ok_or_else(|| {
                    Error::DataFormat {
                        line: r.line(),
                        value: value.to_string(),
                        target: "memorized transaction kind",
                    }
                })?);
            }
            "1" => amortization.first_payment = Some(r.date()?),
            "2" => amortization.total_years = Some(r.integer()?),
            "3" => amortization.payments_made = Some(r.integer()?),
            "4" => amortization.periods_per_year = Some(r.integer()?),
            "5" => amortization.interest_rate = Some(r.decimal()?),
            "6" => amortization.current_balance = Some(r.decimal()?),
            "7" => amortization.original_loan = Some(r.decimal()?),
            _ => {
                fields.apply(name, r)?;
            }
        }
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let splits = fields.splits(line)?;
    let kind = kind.ok_or(Error::RequiredField {
        line,
        record: "memorized transaction",
        field: "K",
    })?;
    Ok(MemorizedTransaction {
        kind,
        date: fields.date,
        amount: fields.amount(),
        cleared: fields.cleared,
        number: fields.number,
        payee: fields.payee,
        memo: fields.memo,
        address: fields.address,
        category: fields.category,
        splits,
        amortization: (!amortization.is_empty()).then_some(amortization),
    })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, t: &MemorizedTransaction) -> io::Result<()> {
    w.write_field("K", t.kind.code())?;
    w.write_date_opt("D", t.date)?;
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
    if let Some(a) = &t.amortization {
        w.write_date_opt("1", a.first_payment)?;
        w.write_integer_opt("2", a.total_years)?;
        w.write_integer_opt("3", a.payments_made)?;
        w.write_integer_opt("4", a.periods_per_year)?;
        w.write_decimal_opt("5", a.interest_rate)?;
        w.write_decimal_opt("6", a.current_balance)?;
        w.write_decimal_opt("7", a.original_loan)?;
    }
    w.write_end_of_record()
}

#[cfg(test)]
mod test_memorized {
    use super::*;
    use crate::config::Config;
    use crate::model::ClearedState;
    use chrono::NaiveDate;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn decode_one(text: &str) -> Result<MemorizedTransaction> {
        let config = Config::default();
        let mut r = FieldReader::new(text, &config);
        r.advance()?;
        decode(&mut r)
    }

    #[test]
    fn test_decode_payment_with_amortization() {
        let t = decode_one(indoc! {"
            KP
            T-850.00
            PLandlord
            LHousing:Rent
            11/1/18
            230
            312
            412
            54.5
            6120,000.00
            7150,000.00
            ^
        "})
        .unwrap();
        assert_eq!(MemorizedKind::Payment, t.kind);
        assert_eq!(None, t.date);
        assert_eq!(Some(Decimal::new(-85000, 2)), t.amount);
        assert_eq!(ClearedState::NotCleared, t.cleared);
        let a = t.amortization.unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2018, 1, 1), a.first_payment);
        assert_eq!(Some(30), a.total_years);
        assert_eq!(Some(12), a.payments_made);
        assert_eq!(Some(12), a.periods_per_year);
        assert_eq!(Some(Decimal::new(45, 1)), a.interest_rate);
        assert_eq!(Some(Decimal::new(12000000, 2)), a.current_balance);
        assert_eq!(Some(Decimal::new(15000000, 2)), a.original_loan);
    }

    #[test]
    fn test_decode_missing_kind() {
        assert_eq!(
            Err(Error::RequiredField {
                line: 2,
                record: "memorized transaction",
                field: "K",
            }),
            decode_one("PLandlord\n^")
        );
    }

    #[test]
    fn test_decode_bad_kind() {
        assert_eq!(
            Err(Error::DataFormat {
                line: 1,
                value: "Q".into(),
                target: "memorized transaction kind",
            }),
            decode_one("KQ\n^")
        );
    }

    #[test]
    fn test_encode() {
        let t = decode_one("KC\nT-25.00\nPWater Co\n^").unwrap();
        let config = Config::default();
        let mut buf = Vec::new();
        let mut w = FieldWriter::new(&mut buf, &config);
        encode(&mut w, &t).unwrap();
        assert_eq!(
            "KC\nT-25.00\nPWater Co\n^\n",
            String::from_utf8(buf).unwrap()
        );
    }
}
