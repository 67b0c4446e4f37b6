//! Parses the two inbound value shapes: a bare confirmation number and an
//! `OK <x> <y>` position report.

use core::error::SyntaxFault;
use core::grid::Position;

/// Parses a confirmation number, rejecting embedded whitespace before
/// falling back to a general numeric-format error, matching spec.md's
/// distinction between the two syntax-fault triggers.
pub fn parse_confirmation(raw: &str) -> Result<u32, SyntaxFault> {
    if raw.chars().any(char::is_whitespace) {
        return Err(SyntaxFault::WhitespaceInNumber);
    }
    raw.parse::<u32>()
        .map_err(|_| SyntaxFault::NotANumber(raw.to_string()))
}

/// Parses a position report of the exact form `OK <x> <y>`.
pub fn parse_position_report(raw: &str) -> Result<Position, SyntaxFault> {
    let mut tokens = raw.split_whitespace();
    let malformed = || SyntaxFault::MalformedPositionReport(raw.to_string());

    let tag = tokens.next().ok_or_else(malformed)?;
    let x_str = tokens.next().ok_or_else(malformed)?;
    let y_str = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() || tag != "OK" {
        return Err(malformed());
    }

    let x = x_str.parse::<i32>().map_err(|_| malformed())?;
    let y = y_str.parse::<i32>().map_err(|_| malformed())?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_confirmation_accepts_plain_digits() {
        assert_eq!(parse_confirmation("42800").unwrap(), 42_800);
    }

    #[test]
    fn parse_confirmation_rejects_embedded_whitespace() {
        assert!(matches!(
            parse_confirmation("4 2"),
            Err(SyntaxFault::WhitespaceInNumber)
        ));
    }

    #[test]
    fn parse_confirmation_rejects_non_numeric() {
        assert!(matches!(
            parse_confirmation("abc"),
            Err(SyntaxFault::NotANumber(_))
        ));
    }

    #[test]
    fn parse_position_report_accepts_negative_coordinates() {
        let position = parse_position_report("OK -2 2").unwrap();
        assert_eq!(position, Position::new(-2, 2));
    }

    #[test]
    fn parse_position_report_rejects_wrong_tag() {
        assert!(parse_position_report("NO 1 2").is_err());
    }

    #[test]
    fn parse_position_report_rejects_extra_tokens() {
        assert!(parse_position_report("OK 1 2 3").is_err());
    }

    #[test]
    fn parse_position_report_rejects_missing_tokens() {
        assert!(parse_position_report("OK 1").is_err());
    }
}
