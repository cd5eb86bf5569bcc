use std::str::Lines;

use thiserror::Error;

/// One lexical unit of the format. All text is borrowed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    BeginOfFile,
    /// `!Name` or `!Name:Value`.
    Header { name: &'a str, value: &'a str },
    /// A field line: single-character code, value to end of line.
    Field { name: &'a str, value: &'a str },
    /// One value of a comma-delimited line (a line starting with `"`).
    CommaValue(&'a str),
    /// A `^` line.
    EndOfRecord,
    EndOfFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BeginOfFile,
    Header,
    Field,
    CommaValue,
    EndOfRecord,
    EndOfFile,
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::BeginOfFile => TokenKind::BeginOfFile,
            Token::Header { .. } => TokenKind::Header,
            Token::Field { .. } => TokenKind::Field,
            Token::CommaValue(_) => TokenKind::CommaValue,
            Token::EndOfRecord => TokenKind::EndOfRecord,
            Token::EndOfFile => TokenKind::EndOfFile,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Token::BeginOfFile => "begin of file",
            Token::Header { .. } => "a header",
            Token::Field { .. } => "a field",
            Token::CommaValue(_) => "a comma-delimited value",
            Token::EndOfRecord => "end of record",
            Token::EndOfFile => "end of file",
        }
    }
}

/// A structurally invalid line. Always fatal; the caller must abandon the
/// parse. Line numbers are 1-based.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexError {
    #[error("line {0}: unexpected empty line")]
    EmptyLine(usize),
    #[error("line {0}: header has no name")]
    EmptyHeader(usize),
    #[error("line {0}: unexpected text after '^'")]
    TrailingAfterEndOfRecord(usize),
    #[error("line {0}: unterminated quoted value")]
    UnterminatedQuote(usize),
    #[error("line {0}: expected ',' after closing quote")]
    MissingComma(usize),
}

pub type Result<T> = std::result::Result<T, LexError>;

/// Turns raw lines into a flat token stream. Reads one line per `advance`,
/// except while draining a buffered comma-delimited line, which yields one
/// [Token::CommaValue] per call until the line is exhausted.
pub struct Tokenizer<'a> {
    lines: Lines<'a>,
    line_no: usize,
    // remaining values of the current comma-delimited line, reversed so
    // that pop() yields them in source order
    pending: Vec<&'a str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            lines: text.lines(),
            line_no: 0,
            pending: Vec::new(),
        }
    }

    /// 1-based number of the most recently read line.
    pub fn line(&self) -> usize {
        self.line_no
    }

    pub fn advance(&mut self) -> Result<Token<'a>> {
        if let Some(value) = self.pending.pop() {
            return Ok(Token::CommaValue(value));
        }
        let line = match self.lines.next() {
            Some(line) => line,
            None => return Ok(Token::EndOfFile),
        };
        self.line_no += 1;
        match line.chars().next() {
            None => Err(LexError::EmptyLine(self.line_no)),
            Some('!') => self.header(&line[1..]),
            Some('^') => {
                if line.len() > 1 {
                    Err(LexError::TrailingAfterEndOfRecord(self.line_no))
                } else {
                    Ok(Token::EndOfRecord)
                }
            }
            Some('"') => {
                let mut values = self.comma_values(line)?;
                values.reverse();
                let first = values.pop().unwrap_or("");
                self.pending = values;
                Ok(Token::CommaValue(first))
            }
            Some(c) => Ok(Token::Field {
                name: &line[..c.len_utf8()],
                value: line[c.len_utf8()..].trim_end(),
            }),
        }
    }

    fn header(&self, rest: &'a str) -> Result<Token<'a>> {
        let rest = rest.trim_end();
        if rest.is_empty() {
            return Err(LexError::EmptyHeader(self.line_no));
        }
        match rest.split_once(':') {
            Some((name, value)) => Ok(Token::Header {
                name,
                value: value.trim_end(),
            }),
            None => Ok(Token::Header {
                name: rest,
                value: "",
            }),
        }
    }

    /// Splits a comma-delimited line into its values: quoted spans between
    /// `"` pairs or bare spans up to the next `,`. A closing quote must be
    /// followed by `,` or end of line.
    fn comma_values(&self, line: &'a str) -> Result<Vec<&'a str>> {
        let mut values = Vec::new();
        let mut rest = line;
        loop {
            if let Some(quoted) = rest.strip_prefix('"') {
                let end = quoted
                    .find('"')
                    .ok_or(LexError::UnterminatedQuote(self.line_no))?;
                values.push(&quoted[..end]);
                rest = &quoted[end + 1..];
                if rest.is_empty() {
                    break;
                }
                rest = rest
                    .strip_prefix(',')
                    .ok_or(LexError::MissingComma(self.line_no))?;
            } else {
                match rest.find(',') {
                    Some(i) => {
                        values.push(&rest[..i]);
                        rest = &rest[i + 1..];
                    }
                    None => {
                        values.push(rest);
                        break;
                    }
                }
            }
        }
        Ok(values)
    }
}
