use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::tokenizer::{Token, TokenKind, Tokenizer};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::ClearedState;

/// A thin semantic layer over the tokenizer: holds the current token and
/// converts field values into typed ones. Typed reads are only valid while
/// positioned on a value-bearing token; anything else is an
/// [Error::OperationState], a bug in the calling decoder rather than a
/// problem with the input.
pub struct FieldReader<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token<'a>,
    config: &'a Config,
}

impl<'a> FieldReader<'a> {
    pub fn new(text: &'a str, config: &'a Config) -> FieldReader<'a> {
        FieldReader {
            tokenizer: Tokenizer::new(text),
            current: Token::BeginOfFile,
            config,
        }
    }

    pub fn current(&self) -> &Token<'a> {
        &self.current
    }

    pub fn line(&self) -> usize {
        self.tokenizer.line()
    }

    pub fn advance(&mut self) -> Result<&Token<'a>> {
        self.current = self.tokenizer.advance()?;
        Ok(&self.current)
    }

    fn state_error(&self, operation: &'static str) -> Error {
        Error::OperationState {
            line: self.line(),
            operation,
            got: self.current.describe(),
        }
    }

    fn data_error(&self, value: &str, target: &'static str) -> Error {
        Error::DataFormat {
            line: self.line(),
            value: value.to_string(),
            target,
        }
    }

    pub fn header(&self) -> Result<(&'a str, &'a str)> {
        match self.current {
            Token::Header { name, value } => Ok((name, value)),
            _ => Err(self.state_error("reading a header")),
        }
    }

    pub fn field_name(&self) -> Result<&'a str> {
        match self.current {
            Token::Field { name, .. } => Ok(name),
            _ => Err(self.state_error("reading a field name")),
        }
    }

    /// Verbatim text of the current field or comma value.
    pub fn value(&self) -> Result<&'a str> {
        match self.current {
            Token::Field { value, .. } => Ok(value),
            Token::CommaValue(value) => Ok(value),
            _ => Err(self.state_error("reading a value")),
        }
    }

    /// The format encodes two-digit years after an apostrophe and pads
    /// single digits with spaces: `10/27' 6` spells 10/27/06. Both
    /// substitutions happen before the date is parsed.
    pub fn date(&self) -> Result<NaiveDate> {
        let raw = self.value()?;
        let text: String = raw
            .chars()
            .map(|c| match c {
                '\'' => '/',
                ' ' => '0',
                c => c,
            })
            .collect();
        self.config
            .parse_date(&text)
            .ok_or_else(|| self.data_error(raw, "date"))
    }

    /// A plain locale decimal, or a mixed number (`33 3/4`) or bare
    /// fraction (`1/4`), evaluated exactly in decimal arithmetic.
    pub fn decimal(&self) -> Result<Decimal> {
        let raw = self.value()?;
        if raw.contains('/') {
            self.fraction(raw)
        } else {
            self.config
                .parse_decimal(raw)
                .ok_or_else(|| self.data_error(raw, "decimal"))
        }
    }

    fn fraction(&self, raw: &str) -> Result<Decimal> {
        let err = || self.data_error(raw, "decimal");
        let text = raw.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };
        let (whole, fraction) = match text.split_once(' ') {
            Some((whole, fraction)) => (whole, fraction.trim_start()),
            None => ("0", text),
        };
        let (numerator, denominator) = fraction.split_once('/').ok_or_else(err)?;
        let whole = self.config.parse_integer(whole).ok_or_else(err)?;
        let numerator = self.config.parse_integer(numerator).ok_or_else(err)?;
        let denominator = self.config.parse_integer(denominator).ok_or_else(err)?;
        if whole < 0 || numerator < 0 || denominator <= 0 {
            return Err(err());
        }
        let value = Decimal::from(whole) + Decimal::from(numerator) / Decimal::from(denominator);
        Ok(if negative { -value } else { value })
    }

    pub fn integer(&self) -> Result<i64> {
        let raw = self.value()?;
        self.config
            .parse_integer(raw)
            .ok_or_else(|| self.data_error(raw, "integer"))
    }

    pub fn cleared_state(&self) -> Result<ClearedState> {
        let raw = self.value()?;
        match raw {
            "" => Ok(ClearedState::NotCleared),
            "*" | "C" | "c" => Ok(ClearedState::Cleared),
            "R" | "r" | "X" | "x" => Ok(ClearedState::Reconciled),
            _ => Err(self.data_error(raw, "reconciled status")),
        }
    }

    /// Advances until a token of `kind` is produced, returning whether one
    /// was found before end of file. Used to skip unrecognized blocks.
    pub fn move_to_next(&mut self, kind: TokenKind) -> Result<bool> {
        loop {
            self.advance()?;
            if self.current.kind() == kind {
                return Ok(true);
            }
            if self.current.kind() == TokenKind::EndOfFile {
                return Ok(false);
            }
        }
    }

    /// Positions the reader on the first value of the current record: a
    /// header (or the begin-of-file marker) is stepped over once.
    pub fn begin_record(&mut self) -> Result<()> {
        if matches!(self.current, Token::BeginOfFile | Token::Header { .. }) {
            self.advance()?;
        }
        Ok(())
    }

    pub fn at_field(&self) -> bool {
        matches!(self.current, Token::Field { .. } | Token::CommaValue(_))
    }

    /// Requires and consumes the end-of-record marker. A stream that ends
    /// first is a truncated document.
    pub fn end_record(&mut self) -> Result<()> {
        match self.current {
            Token::EndOfRecord => {
                self.advance()?;
                Ok(())
            }
            Token::EndOfFile => Err(Error::Truncated { line: self.line() }),
            _ => Err(self.state_error("ending a record")),
        }
    }
}

#[cfg(test)]
mod test_reader {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reader<'a>(text: &'a str, config: &'a Config) -> FieldReader<'a> {
        let mut r = FieldReader::new(text, config);
        r.advance().unwrap();
        r
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_apostrophe_and_space() {
        let config = Config::default();
        assert_eq!(Ok(date(2006, 10, 27)), reader("D10/27' 6", &config).date());
        assert_eq!(Ok(date(2006, 10, 27)), reader("D10/27'06", &config).date());
        assert_eq!(Ok(date(2018, 1, 1)), reader("D1/1/18", &config).date());
        assert_eq!(Ok(date(2018, 1, 1)), reader("D1/1/2018", &config).date());
    }

    #[test]
    fn test_date_error() {
        let config = Config::default();
        assert_eq!(
            Err(Error::DataFormat {
                line: 1,
                value: "13/45/99".into(),
                target: "date"
            }),
            reader("D13/45/99", &config).date()
        );
    }

    #[test]
    fn test_decimal_plain() {
        let config = Config::default();
        assert_eq!(
            Ok(Decimal::new(-123450, 2)),
            reader("T-1,234.50", &config).decimal()
        );
    }

    #[test]
    fn test_decimal_fractions() {
        let config = Config::default();
        assert_eq!(Ok(Decimal::new(3375, 2)), reader("I33 3/4", &config).decimal());
        assert_eq!(Ok(Decimal::new(25, 2)), reader("I1/4", &config).decimal());
        assert_eq!(
            Ok(Decimal::new(-3375, 2)),
            reader("I-33 3/4", &config).decimal()
        );
        assert_eq!(
            Err(Error::DataFormat {
                line: 1,
                value: "1/0".into(),
                target: "decimal"
            }),
            reader("I1/0", &config).decimal()
        );
        assert_eq!(
            Err(Error::DataFormat {
                line: 1,
                value: "x/4".into(),
                target: "decimal"
            }),
            reader("Ix/4", &config).decimal()
        );
    }

    #[test]
    fn test_cleared_state() {
        let config = Config::default();
        let cases = [
            ("C", ClearedState::NotCleared),
            ("C*", ClearedState::Cleared),
            ("CC", ClearedState::Cleared),
            ("Cc", ClearedState::Cleared),
            ("CR", ClearedState::Reconciled),
            ("Cr", ClearedState::Reconciled),
            ("CX", ClearedState::Reconciled),
            ("Cx", ClearedState::Reconciled),
        ];
        for (text, want) in cases {
            assert_eq!(Ok(want), reader(text, &config).cleared_state());
        }
        assert_eq!(
            Err(Error::DataFormat {
                line: 1,
                value: "?".into(),
                target: "reconciled status"
            }),
            reader("C?", &config).cleared_state()
        );
    }

    #[test]
    fn test_operation_state() {
        let config = Config::default();
        let r = reader("!Type:Bank", &config);
        assert_eq!(
            Err(Error::OperationState {
                line: 1,
                operation: "reading a value",
                got: "a header"
            }),
            r.value()
        );
        let r = FieldReader::new("D1/1/18", &config);
        assert_eq!(
            Err(Error::OperationState {
                line: 0,
                operation: "reading a header",
                got: "begin of file"
            }),
            r.header()
        );
    }

    #[test]
    fn test_move_to_next() {
        let config = Config::default();
        let mut r = reader("!Junk\nXsomething\n^\n!Type:Bank", &config);
        assert_eq!(Ok(true), r.move_to_next(TokenKind::Header));
        assert_eq!(Ok(("Type", "Bank")), r.header());
        assert_eq!(Ok(false), r.move_to_next(TokenKind::Header));
    }

    #[test]
    fn test_record_protocol() {
        let config = Config::default();
        let mut r = FieldReader::new("!Type:Bank\nD1/1/18\n^\n", &config);
        r.advance().unwrap();
        r.begin_record().unwrap();
        assert!(r.at_field());
        assert_eq!(Ok("D"), r.field_name());
        r.advance().unwrap();
        assert!(!r.at_field());
        assert_eq!(Ok(()), r.end_record());
        assert_eq!(&Token::EndOfFile, r.current());
    }

    #[test]
    fn test_end_record_truncated() {
        let config = Config::default();
        let mut r = FieldReader::new("D1/1/18", &config);
        r.advance().unwrap();
        r.begin_record().unwrap();
        r.advance().unwrap();
        assert_eq!(Err(Error::Truncated { line: 1 }), r.end_record());
    }
}
