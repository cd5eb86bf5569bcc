use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::model::Class;
use crate::syntax::reader::FieldReader;
use crate::syntax::writer::FieldWriter;

pub fn decode(r: &mut FieldReader) -> Result<Class> {
    r.begin_record()?;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    while r.at_field() {
        match r.field_name()? {
            "N" => name = Some(r.value()?.to_string()),
            "D" => description = Some(r.value()?.to_string()),
            _ => {}
        }
        r.advance()?;
    }
    let line = r.line();
    r.end_record()?;
    let name = name.ok_or(Error::RequiredField {
        line,
        record: "class",
        field: "N",
    })?;
    Ok(Class { name, description })
}

pub fn encode<W: Write>(w: &mut FieldWriter<W>, c: &Class) -> io::Result<()> {
    w.write_field("N", &c.name)?;
    w.write_field_if_not_empty("D", c.description.as_deref())?;
    w.write_end_of_record()
}

#[cfg(test)]
mod test_class {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_encode() {
        let config = Config::default();
        let mut r = FieldReader::new("NRental\nDProperty on Main St\n^", &config);
        r.advance().unwrap();
        let c = decode(&mut r).unwrap();
        assert_eq!(
            Class {
                name: "Rental".into(),
                description: Some("Property on Main St".into()),
            },
            c
        );
        let mut buf = Vec::new();
        let mut w = FieldWriter::new(&mut buf, &config);
        encode(&mut w, &c).unwrap();
        assert_eq!(
            "NRental\nDProperty on Main St\n^\n",
            String::from_utf8(buf).unwrap()
        );
    }

    #[test]
    fn test_decode_missing_name() {
        let config = Config::default();
        let mut r = FieldReader::new("DOnly a description\n^", &config);
        r.advance().unwrap();
        assert_eq!(
            Err(Error::RequiredField {
                line: 2,
                record: "class",
                field: "N",
            }),
            decode(&mut r)
        );
    }
}
