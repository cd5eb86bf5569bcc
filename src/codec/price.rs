use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::Price;
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

/// A price record is one comma-delimited line: quoted symbol, value, quoted
/// date. Extra values are ignored for forward compatibility.
pub fn decode(r: &mut FieldReader) -> Result<Price> {
    r.begin_record()?;
    let mut symbol: Option<String> = None;
    let mut price: Option<Decimal> = None;
    let mut date: Option<NaiveDate> = None;
    let mut position = 0;
    while r.at_field() {
        match position {
            0 => symbol = Some(r.value()?.to_string()),
            1 => price = Some(r.decimal()?),
            2 => date = Some(r.date()?),
            _ => {}
        }
        position += 1;
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let required = |field| Error::RequiredField {
        line,
        record: "price",
        field,
    };
    Ok(Price {
        symbol: symbol.ok_or_else(|| required("symbol"))?,
        price: price.ok_or_else(|| required("price"))?,
        date: date.ok_or_else(|| required("date"))?,
    })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, p: &Price) -> io::Result<()> {
    let price = w.config().format_decimal(p.price);
    let date = w.config().format_date(p.date);
    w.write_line(&format!("\"{}\",{},\"{}\"", p.symbol, price, date))?;
    w.write_end_of_record()
}
