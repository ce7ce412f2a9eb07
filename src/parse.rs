// src/parse.rs

//! Two-line text input.
//!
//! ```text
//! 11
//! 0 0 4 1 0 2 0 1 0 0 3
//! ```
//!
//! The first line is the line length `N`; the second holds `N` heights
//! separated by any run of whitespace, `0` marking an empty position.

use crate::config::EngineConfig;
use crate::domino::Domino;
use crate::error::{CascadeError, MalformedInputError, ValidationError};
use crate::store::DominoLine;

#[derive(Clone, Copy, Debug)]
pub struct LineParser {
    max_line_length: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl LineParser {
    pub fn new(config: &EngineConfig) -> Self {
        LineParser {
            max_line_length: config.max_line_length,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(bytes = input.len()))]
    pub fn parse_str(&self, input: &str) -> Result<DominoLine, CascadeError> {
        let mut lines = input.lines();
        let first = lines
            .next()
            .ok_or(ValidationError::MissingLine("line length"))?;
        let length = self.parse_length(first)?;
        let heights = match lines.next() {
            Some(text) => text,
            None if length == 0 => "",
            None => return Err(ValidationError::MissingLine("domino heights").into()),
        };
        let line = parse_heights(length, heights)?;
        tracing::debug!(length, occupied = line.store().len(), "parsed domino line");
        Ok(line)
    }

    fn parse_length(&self, text: &str) -> Result<usize, CascadeError> {
        let token = text.trim();
        let length: usize = token.parse().map_err(|_| MalformedInputError {
            line: 1,
            index: 0,
            token: token.to_string(),
        })?;
        if length > self.max_line_length {
            return Err(ValidationError::LineTooLong {
                length,
                max: self.max_line_length,
            }
            .into());
        }
        Ok(length)
    }
}

fn parse_heights(length: usize, text: &str) -> Result<DominoLine, CascadeError> {
    let mut line = DominoLine::new(length);
    let mut tokens = text.split_whitespace();
    let mut found = 0usize;

    for token in tokens.by_ref().take(length) {
        let position = found as i64;
        found += 1;
        if token.parse::<i64>() == Ok(0) {
            continue;
        }
        line.place(Domino::parse(position, token)?)?;
    }

    let extra = tokens.count();
    if found != length || extra > 0 {
        return Err(ValidationError::CountMismatch {
            expected: length,
            found: found + extra,
        }
        .into());
    }
    Ok(line)
}

/// Parses with default limits.
pub fn parse_line(input: &str) -> Result<DominoLine, CascadeError> {
    LineParser::default().parse_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_worked_example() {
        let line = parse_line("11\n0 0 4 1 0 2 0 1 0 0 3\n").unwrap();
        assert_eq!(line.len(), 11);
        assert_eq!(line.store().len(), 5);
        assert_eq!(line.heights(), vec![0, 0, 4, 1, 0, 2, 0, 1, 0, 0, 3]);
    }

    #[test]
    fn squeezes_repeated_whitespace() {
        let line = parse_line("  4 \r\n 1   0\t2  3 \r\n").unwrap();
        assert_eq!(line.heights(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn zero_length_needs_no_second_line() {
        assert_eq!(parse_line("0").unwrap().len(), 0);
        assert_eq!(parse_line("0\n\n").unwrap().len(), 0);
    }

    #[test]
    fn wrong_token_count_is_a_validation_error() {
        assert_eq!(
            parse_line("3\n1 2\n"),
            Err(CascadeError::Validation(ValidationError::CountMismatch {
                expected: 3,
                found: 2
            }))
        );
        assert_eq!(
            parse_line("2\n1 2 3 4\n"),
            Err(CascadeError::Validation(ValidationError::CountMismatch {
                expected: 2,
                found: 4
            }))
        );
    }

    #[test]
    fn missing_heights_line_is_reported() {
        assert_eq!(
            parse_line("3"),
            Err(CascadeError::Validation(ValidationError::MissingLine(
                "domino heights"
            )))
        );
        assert!(matches!(
            parse_line(""),
            Err(CascadeError::Validation(ValidationError::MissingLine(_)))
        ));
    }

    #[test]
    fn non_integer_tokens_are_malformed() {
        assert!(matches!(
            parse_line("x\n1\n"),
            Err(CascadeError::MalformedInput(MalformedInputError { line: 1, .. }))
        ));
        match parse_line("3\n1 abc 2\n") {
            Err(CascadeError::MalformedInput(e)) => {
                assert_eq!((e.line, e.index, e.token.as_str()), (2, 1, "abc"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_line("1\n99999999999999999999999\n"),
            Err(CascadeError::MalformedInput(_))
        ));
    }

    #[test]
    fn heights_out_of_range_are_rejected() {
        assert!(matches!(
            parse_line("2\n-1 0\n"),
            Err(CascadeError::Validation(ValidationError::HeightOutOfRange { .. }))
        ));
        assert!(matches!(
            parse_line("1\n2147483648\n"),
            Err(CascadeError::Validation(ValidationError::HeightOutOfRange { .. }))
        ));
        assert!(parse_line("1\n2147483647\n").is_ok());
    }

    #[test]
    fn overlong_lines_are_refused_before_reading_heights() {
        let parser = LineParser::new(&EngineConfig {
            max_line_length: 10,
            ..EngineConfig::default()
        });
        assert_eq!(
            parser.parse_str("11\n"),
            Err(CascadeError::Validation(ValidationError::LineTooLong {
                length: 11,
                max: 10
            }))
        );
    }
}
