use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::Account;
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

pub fn decode(r: &mut FieldReader) -> Result<Account> {
    r.begin_record()?;
    let mut name: Option<String> = None;
    let mut account_type: Option<String> = None;
    let mut description: Option<String> = None;
    let mut credit_limit: Option<Decimal> = None;
    let mut statement_date: Option<NaiveDate> = None;
    let mut statement_balance: Option<Decimal> = None;
    while r.at_field() {
        match r.field_name()? {
            "N" => name = Some(r.value()?.to_string()),
            "T" => account_type = Some(r.value()?.to_string()),
            "D" => description = Some(r.value()?.to_string()),
            "L" => credit_limit = Some(r.decimal()?),
            "/" => statement_date = Some(r.date()?),
            "$" => statement_balance = Some(r.decimal()?),
            _ => {}
        }
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let name = name.ok_or(Error::RequiredField {
        line,
        record: "account",
        field: "N",
    })?;
    Ok(Account {
        name,
        account_type,
        description,
        credit_limit,
        statement_date,
        statement_balance,
        transactions: Vec::new(),
    })
}

/// Writes the account record itself; the owning block header and the
/// account's transactions are the exporter's business.
pub fn encode<W: Write>(w: &mut FieldWriter<W>, a: &Account) -> io::Result<()> {
    w.write_field("N", &a.name)?;
    w.write_field_if_not_empty("T", a.account_type.as_deref())?;
    w.write_field_if_not_empty("D", a.description.as_deref())?;
    w.write_decimal_opt("L", a.credit_limit)?;
    w.write_date_opt("/", a.statement_date)?;
    w.write_decimal_opt("$", a.statement_balance)?;
    w.write_end_of_record()
}

#[cfg(test)]
mod test_account {
    use super::*;
    use crate::config::Config;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn decode_one(text: &str) -> Result<Account> {
        let config = Config::default();
        let mut r = FieldReader::new(text, &config);
        r.advance()?;
        decode(&mut r)
    }

    #[test]
    fn test_decode() {
        let a = decode_one(indoc! {"
            NChecking
            TBank
            DEveryday account
            /12/31/17
            $1,500.00
            ^
        "})
        .unwrap();
        assert_eq!("Checking", a.name);
        assert_eq!(Some("Bank".to_string()), a.account_type);
        assert_eq!(Some("Everyday account".to_string()), a.description);
        assert_eq!(
            Some(NaiveDate::from_ymd_opt(2017, 12, 31).unwrap()),
            a.statement_date
        );
        assert_eq!(Some(Decimal::new(150000, 2)), a.statement_balance);
        assert!(a.transactions.is_empty());
    }

    #[test]
    fn test_decode_missing_name() {
        assert_eq!(
            Err(Error::RequiredField {
                line: 2,
                record: "account",
                field: "N",
            }),
            decode_one("TBank\n^")
        );
    }

    #[test]
    fn test_encode() {
        let a = decode_one("NVisa\nTCCard\nL-5000\n^").unwrap();
        let config = Config::default();
        let mut buf = Vec::new();
        let mut w = FieldWriter::new(&mut buf, &config);
        encode(&mut w, &a).unwrap();
        assert_eq!("NVisa\nTCCard\nL-5000\n^\n", String::from_utf8(buf).unwrap());
    }
}
