use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::Category;
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

pub fn decode(r: &mut FieldReader) -> Result<Category> {
    r.begin_record()?;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tax_related = false;
    let mut income = false;
    let mut expense = false;
    let mut budget: Option<Decimal> = None;
    let mut tax_schedule: Option<String> = None;
    while r.at_field() {
        match r.field_name()? {
            "N" => name = Some(r.value()?.to_string()),
            "D" => description = Some(r.value()?.to_string()),
            // flag lines: presence sets the flag, the value is ignored
            "T" => tax_related = true,
            "I" => income = true,
            "E" => expense = true,
            "B" => budget = Some(r.decimal()?),
            "R" => tax_schedule = Some(r.value()?.to_string()),
            _ => {}
        }
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let name = name.ok_or(Error::RequiredField {
        line,
        record: "category",
        field: "N",
    })?;
    Ok(Category {
        name,
        description,
        tax_related,
        income,
        expense,
        budget,
        tax_schedule,
    })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, c: &Category) -> io::Result<()> {
    w.write_field("N", &c.name)?;
    w.write_field_if_not_empty("D", c.description.as_deref())?;
    w.write_field_if(c.tax_related, "T", "")?;
    w.write_field_if(c.income, "I", "")?;
    w.write_field_if(c.expense, "E", "")?;
    w.write_decimal_opt("B", c.budget)?;
    w.write_field_if_not_empty("R", c.tax_schedule.as_deref())?;
    w.write_end_of_record()
}
