use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An explicit locale value. The format is locale-sensitive in its number
/// and date spellings, but this crate never consults process-wide locale
/// state: whoever calls [load](crate::load) or [save](crate::save) decides
/// which locale applies by putting one of these into the [Config].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub name: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    /// Format used when writing dates.
    pub date_format: &'static str,
    /// Accepted formats when reading dates, tried in order. The two-digit
    /// year form must come first: chrono's `%Y` would otherwise swallow a
    /// two-digit year as year 6 or year 18.
    pub date_read_formats: &'static [&'static str],
}

impl Locale {
    pub fn en_us() -> Locale {
        Locale {
            name: "en-US",
            decimal_separator: '.',
            group_separator: ',',
            date_format: "%m/%d/%Y",
            date_read_formats: &["%m/%d/%y", "%m/%d/%Y"],
        }
    }

    pub fn de_de() -> Locale {
        Locale {
            name: "de-DE",
            decimal_separator: ',',
            group_separator: '.',
            date_format: "%d.%m.%Y",
            date_read_formats: &["%d.%m.%y", "%d.%m.%Y"],
        }
    }
}

/// How dates are parsed or rendered: via the locale's short-date formats,
/// or via an explicit chrono format string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateMode {
    #[default]
    Locale,
    Custom(String),
}

/// How decimals are rendered: the locale's plain spelling, or a digit
/// pattern such as `"0.00"` or `"#,##0.00"` (fraction digits are counted
/// after the `.`; a `,` in the pattern turns on group separators).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumberMode {
    #[default]
    Locale,
    Custom(String),
}

/// Formatting configuration for one load or save call. Constructed once per
/// call and never mutated mid-operation; sharing one across threads is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    /// Overrides `locale` for reading only, when set.
    pub read_locale: Option<Locale>,
    pub read_date: DateMode,
    pub write_date: DateMode,
    pub write_number: NumberMode,
    /// Tolerate group separators and surrounding whitespace in numbers.
    pub lenient_numbers: bool,
    /// Try all of the locale's date formats instead of only the primary.
    pub lenient_dates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::en_us(),
            read_locale: None,
            read_date: DateMode::Locale,
            write_date: DateMode::Locale,
            write_number: NumberMode::Locale,
            lenient_numbers: true,
            lenient_dates: true,
        }
    }
}

impl Config {
    fn reading(&self) -> &Locale {
        self.read_locale.as_ref().unwrap_or(&self.locale)
    }

    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        match &self.read_date {
            DateMode::Custom(fmt) => NaiveDate::parse_from_str(text, fmt).ok(),
            DateMode::Locale => {
                let locale = self.reading();
                let formats: &[&str] = if self.lenient_dates {
                    locale.date_read_formats
                } else {
                    &locale.date_read_formats[..locale.date_read_formats.len().min(1)]
                };
                formats
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            }
        }
    }

    pub fn parse_decimal(&self, text: &str) -> Option<Decimal> {
        self.normalize_number(text)
            .and_then(|t| Decimal::from_str(&t).ok())
    }

    pub fn parse_integer(&self, text: &str) -> Option<i64> {
        self.normalize_number(text).and_then(|t| i64::from_str(&t).ok())
    }

    /// Rewrites a locale-spelled number into `str::parse` form: group
    /// separators dropped, the decimal separator mapped to `.`.
    fn normalize_number(&self, text: &str) -> Option<String> {
        let locale = self.reading();
        let text = if self.lenient_numbers { text.trim() } else { text };
        if text.is_empty() {
            return None;
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c == locale.group_separator {
                if !self.lenient_numbers {
                    return None;
                }
            } else if c == locale.decimal_separator {
                out.push('.');
            } else {
                out.push(c);
            }
        }
        Some(out)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        match &self.write_date {
            DateMode::Custom(fmt) => date.format(fmt).to_string(),
            DateMode::Locale => date.format(self.locale.date_format).to_string(),
        }
    }

    pub fn format_decimal(&self, value: Decimal) -> String {
        match &self.write_number {
            NumberMode::Locale => self.localize(&value.to_string(), false),
            NumberMode::Custom(pattern) => {
                let fraction_digits = pattern
                    .split_once('.')
                    .map(|(_, frac)| frac.chars().filter(|c| *c == '0' || *c == '#').count())
                    .unwrap_or(0);
                let grouped = pattern.contains(',');
                let rounded = value.round_dp(fraction_digits as u32);
                self.localize(&format!("{:.*}", fraction_digits, rounded), grouped)
            }
        }
    }

    /// Respells a `1234.5`-form number with this config's write separators.
    fn localize(&self, text: &str, grouped: bool) -> String {
        let locale = &self.locale;
        let (sign, rest) = text
            .strip_prefix('-')
            .map_or(("", text), |r| ("-", r));
        let (int_part, frac_part) = rest
            .split_once('.')
            .map_or((rest, None), |(i, f)| (i, Some(f)));
        let mut out = String::from(sign);
        if grouped {
            let digits: Vec<char> = int_part.chars().collect();
            for (i, c) in digits.iter().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(locale.group_separator);
                }
                out.push(*c);
            }
        } else {
            out.push_str(int_part);
        }
        if let Some(f) = frac_part {
            out.push(locale.decimal_separator);
            out.push_str(f);
        }
        out
    }
}
