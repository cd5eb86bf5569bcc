use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::Config;

/// Emits headers, fields and end-of-record markers. Numeric and date
/// rendering goes through the same [Config] the reader honors, so a
/// document written with one configuration re-reads exactly with the
/// matching one.
pub struct FieldWriter<'a, W: Write> {
    w: &'a mut W,
    config: &'a Config,
}

impl<'a, W: Write> FieldWriter<'a, W> {
    pub fn new(w: &'a mut W, config: &'a Config) -> FieldWriter<'a, W> {
        FieldWriter { w, config }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn write_header(&mut self, name: &str, value: Option<&str>) -> io::Result<()> {
        match value {
            Some(v) if !v.is_empty() => writeln!(self.w, "!{}:{}", name, v),
            _ => writeln!(self.w, "!{}", name),
        }
    }

    pub fn write_field(&mut self, code: &str, value: &str) -> io::Result<()> {
        writeln!(self.w, "{}{}", code, value)
    }

    /// Absent optional fields are not written at all, never written empty.
    pub fn write_field_if_not_empty(&mut self, code: &str, value: Option<&str>) -> io::Result<()> {
        match value {
            Some(v) if !v.is_empty() => self.write_field(code, v),
            _ => Ok(()),
        }
    }

    pub fn write_field_if(&mut self, condition: bool, code: &str, value: &str) -> io::Result<()> {
        if condition {
            self.write_field(code, value)
        } else {
            Ok(())
        }
    }

    pub fn write_date(&mut self, code: &str, date: NaiveDate) -> io::Result<()> {
        let text = self.config.format_date(date);
        self.write_field(code, &text)
    }

    pub fn write_date_opt(&mut self, code: &str, date: Option<NaiveDate>) -> io::Result<()> {
        match date {
            Some(d) => self.write_date(code, d),
            None => Ok(()),
        }
    }

    pub fn write_decimal(&mut self, code: &str, value: Decimal) -> io::Result<()> {
        let text = self.config.format_decimal(value);
        self.write_field(code, &text)
    }

    pub fn write_decimal_opt(&mut self, code: &str, value: Option<Decimal>) -> io::Result<()> {
        match value {
            Some(v) => self.write_decimal(code, v),
            None => Ok(()),
        }
    }

    pub fn write_integer_opt(&mut self, code: &str, value: Option<i64>) -> io::Result<()> {
        match value {
            Some(v) => self.write_field(code, &v.to_string()),
            None => Ok(()),
        }
    }

    /// One raw line, for the comma-delimited price record.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.w, "{}", line)
    }

    pub fn write_end_of_record(&mut self) -> io::Result<()> {
        writeln!(self.w, "^")
    }
}

#[cfg(test)]
mod test_writer {
    use super::*;
    use crate::config::{DateMode, NumberMode};
    use pretty_assertions::assert_eq;

    fn written(f: impl Fn(&mut FieldWriter<Vec<u8>>) -> io::Result<()>, config: &Config) -> String {
        let mut buf = Vec::new();
        let mut w = FieldWriter::new(&mut buf, config);
        f(&mut w).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_header() {
        let config = Config::default();
        assert_eq!(
            "!Type:Bank\n",
            written(|w| w.write_header("Type", Some("Bank")), &config)
        );
        assert_eq!(
            "!Account\n",
            written(|w| w.write_header("Account", None), &config)
        );
    }

    #[test]
    fn test_write_field() {
        let config = Config::default();
        assert_eq!(
            "PAcme Corp\n",
            written(|w| w.write_field("P", "Acme Corp"), &config)
        );
        assert_eq!(
            "",
            written(|w| w.write_field_if_not_empty("M", None), &config)
        );
        assert_eq!(
            "",
            written(|w| w.write_field_if_not_empty("M", Some("")), &config)
        );
        assert_eq!("I\n", written(|w| w.write_field_if(true, "I", ""), &config));
        assert_eq!("", written(|w| w.write_field_if(false, "I", ""), &config));
    }

    #[test]
    fn test_write_typed_fields() {
        let config = Config::default();
        let date = NaiveDate::from_ymd_opt(2006, 10, 27).unwrap();
        assert_eq!(
            "D10/27/2006\n",
            written(|w| w.write_date("D", date), &config)
        );
        assert_eq!(
            "T-1234.5\n",
            written(|w| w.write_decimal("T", Decimal::new(-12345, 1)), &config)
        );
        assert_eq!("^\n", written(|w| w.write_end_of_record(), &config));
    }

    #[test]
    fn test_custom_modes() {
        let config = Config {
            write_date: DateMode::Custom("%Y-%m-%d".into()),
            write_number: NumberMode::Custom("0.00".into()),
            ..Config::default()
        };
        let date = NaiveDate::from_ymd_opt(2006, 10, 27).unwrap();
        assert_eq!(
            "D2006-10-27\n",
            written(|w| w.write_date("D", date), &config)
        );
        assert_eq!(
            "T-1234.50\n",
            written(|w| w.write_decimal("T", Decimal::new(-12345, 1)), &config)
        );
    }
}
