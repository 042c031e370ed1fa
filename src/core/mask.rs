//! Journal mask parsing and resolution.
//!
//! A journal mask is the configuration string attached to a billing entity's
//! journal, e.g. `"F{yy}{0000}"` or `"NCI{yyyy}-{000}"`. It mixes literal
//! text, date tokens (`{yy}`, `{yyyy}`, `{mm}`, `{dd}`) and exactly one
//! counter placeholder whose run of zeros gives the counter field width.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a journal mask fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MaskError {
    /// The mask string is empty.
    #[error("journal mask is empty")]
    Empty,

    /// The mask has no `{0...0}` counter placeholder.
    #[error("journal mask '{0}' has no counter placeholder")]
    NoCounter(String),

    /// The mask has more than one counter placeholder.
    #[error("journal mask '{0}' has more than one counter placeholder")]
    MultipleCounters(String),

    /// The mask contains a `{...}` token that is not part of the vocabulary.
    #[error("journal mask '{mask}' contains unknown token '{{{token}}}'")]
    UnknownToken {
        /// The full mask.
        mask: String,
        /// The unrecognised token body (without braces).
        token: String,
    },

    /// A `{` was opened but never closed.
    #[error("journal mask '{0}' has an unclosed '{{'")]
    UnclosedBrace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MaskToken {
    Literal(String),
    /// `{yy}` — two-digit year.
    Year2,
    /// `{yyyy}` — four-digit year.
    Year4,
    /// `{mm}` — two-digit month.
    Month,
    /// `{dd}` — two-digit day of month.
    Day,
    /// `{0...0}` — counter placeholder, width = number of zeros.
    Counter(u32),
}

/// A parsed journal mask.
///
/// Parsing is done once when the configuration is read; [`resolve`](Self::resolve)
/// is then called per document with the document date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalMask {
    raw: String,
    tokens: Vec<MaskToken>,
}

impl JournalMask {
    /// Tokenize a mask string.
    ///
    /// Rejects empty masks, masks without exactly one counter placeholder,
    /// unknown `{...}` tokens, and unclosed braces.
    pub fn parse(raw: &str) -> Result<Self, MaskError> {
        if raw.is_empty() {
            return Err(MaskError::Empty);
        }

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut counters = 0usize;
        let mut rest = raw;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                return Err(MaskError::UnclosedBrace(raw.into()));
            };
            literal.push_str(&rest[..open]);
            let body = &rest[open + 1..open + close];
            let token = match body {
                "yy" => MaskToken::Year2,
                "yyyy" => MaskToken::Year4,
                "mm" => MaskToken::Month,
                "dd" => MaskToken::Day,
                _ if !body.is_empty() && body.bytes().all(|b| b == b'0') => {
                    counters += 1;
                    MaskToken::Counter(body.len() as u32)
                }
                _ => {
                    return Err(MaskError::UnknownToken {
                        mask: raw.into(),
                        token: body.into(),
                    });
                }
            };
            if !literal.is_empty() {
                tokens.push(MaskToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
            rest = &rest[open + close + 1..];
        }
        if !rest.is_empty() {
            tokens.push(MaskToken::Literal(rest.into()));
        }

        match counters {
            0 => Err(MaskError::NoCounter(raw.into())),
            1 => Ok(Self {
                raw: raw.into(),
                tokens,
            }),
            _ => Err(MaskError::MultipleCounters(raw.into())),
        }
    }

    /// The mask string as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Width of the counter field in digits.
    pub fn counter_width(&self) -> u32 {
        self.tokens
            .iter()
            .find_map(|t| match t {
                MaskToken::Counter(width) => Some(*width),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Substitute the date tokens for a concrete document date.
    ///
    /// Resolution is pure: the same mask and date always produce the same
    /// base.
    pub fn resolve(&self, date: NaiveDate) -> ResolvedMask {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut width = 0u32;
        let mut out = &mut prefix;

        for token in &self.tokens {
            match token {
                MaskToken::Literal(text) => out.push_str(text),
                MaskToken::Year2 => {
                    out.push_str(&format!("{:02}", date.year().rem_euclid(100)))
                }
                MaskToken::Year4 => out.push_str(&format!("{:04}", date.year())),
                MaskToken::Month => out.push_str(&format!("{:02}", date.month())),
                MaskToken::Day => out.push_str(&format!("{:02}", date.day())),
                MaskToken::Counter(w) => {
                    width = *w;
                    out = &mut suffix;
                }
            }
        }

        ResolvedMask {
            prefix,
            suffix,
            width,
        }
    }
}

/// A mask with its date tokens substituted, ready to receive a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMask {
    prefix: String,
    suffix: String,
    width: u32,
}

impl ResolvedMask {
    /// The fixed text of the reference with the counter removed.
    ///
    /// Existing references are matched and counted under this base, with the
    /// counter read from byte offset `base().len()`.
    pub fn base(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }

    /// Counter field width in digits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Splice a formatted counter back at the placeholder position.
    pub fn compose(&self, counter: &str) -> String {
        format!("{}{}{}", self.prefix, counter, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_year_and_counter() {
        let mask = JournalMask::parse("F{yy}{0000}").unwrap();
        assert_eq!(mask.counter_width(), 4);

        let resolved = mask.resolve(date(2021, 5, 1));
        assert_eq!(resolved.base(), "F21");
        assert_eq!(resolved.compose("0007"), "F210007");
    }

    #[test]
    fn four_digit_year_and_month() {
        let mask = JournalMask::parse("FGES{yyyy}{mm}-{000}").unwrap();
        let resolved = mask.resolve(date(2021, 3, 9));
        assert_eq!(resolved.base(), "FGES202103-");
        assert_eq!(resolved.compose("012"), "FGES202103-012");
    }

    #[test]
    fn counter_mid_mask_keeps_suffix() {
        let mask = JournalMask::parse("NC{00}/{yy}").unwrap();
        let resolved = mask.resolve(date(2022, 1, 1));
        assert_eq!(resolved.base(), "NC/22");
        assert_eq!(resolved.compose("05"), "NC05/22");
    }

    #[test]
    fn counter_only_mask_has_empty_base() {
        let mask = JournalMask::parse("{00000}").unwrap();
        let resolved = mask.resolve(date(2024, 6, 15));
        assert_eq!(resolved.base(), "");
        assert_eq!(resolved.width(), 5);
    }

    #[test]
    fn rejects_empty_mask() {
        assert_eq!(JournalMask::parse(""), Err(MaskError::Empty));
    }

    #[test]
    fn rejects_missing_counter() {
        assert!(matches!(
            JournalMask::parse("F{yy}"),
            Err(MaskError::NoCounter(_))
        ));
    }

    #[test]
    fn rejects_two_counters() {
        assert!(matches!(
            JournalMask::parse("{00}{000}"),
            Err(MaskError::MultipleCounters(_))
        ));
    }

    #[test]
    fn rejects_unknown_token() {
        let err = JournalMask::parse("F{xyz}{000}").unwrap_err();
        assert!(matches!(err, MaskError::UnknownToken { token, .. } if token == "xyz"));
    }

    #[test]
    fn rejects_unclosed_brace() {
        assert!(matches!(
            JournalMask::parse("F{yy"),
            Err(MaskError::UnclosedBrace(_))
        ));
    }

    #[test]
    fn stray_close_brace_is_literal() {
        let mask = JournalMask::parse("A}B{000}").unwrap();
        assert_eq!(mask.resolve(date(2024, 1, 1)).base(), "A}B");
    }
}
