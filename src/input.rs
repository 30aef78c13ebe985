//! Text-field parsing for per-process number lists.
//!
//! The presentation layer collects arrival times, burst times, and
//! priorities as whitespace-separated text fields. Malformed tokens are
//! rejected with the offending token and its position rather than
//! propagated silently into the simulation.

/// A token that failed to parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError {
    /// The offending token, verbatim.
    pub token: String,
    /// 1-based position of the token within the field.
    pub position: usize,
}

impl std::fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "token {} ('{}') is not an integer",
            self.position, self.token
        )
    }
}

impl std::error::Error for FieldParseError {}

/// Parses a whitespace-separated list of integers.
///
/// Empty or all-whitespace input yields an empty list; downstream
/// validation decides whether that is acceptable. Any non-numeric token
/// fails the whole field.
pub fn parse_fields(input: &str) -> Result<Vec<i64>, FieldParseError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| FieldParseError {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_field() {
        assert_eq!(parse_fields("1 5 0 2 3").unwrap(), vec![1, 5, 0, 2, 3]);
    }

    #[test]
    fn test_extra_whitespace_ignored() {
        assert_eq!(parse_fields("  4\t7  1 ").unwrap(), vec![4, 7, 1]);
    }

    #[test]
    fn test_negative_numbers_parse() {
        // Sign handling belongs to validation, not parsing.
        assert_eq!(parse_fields("-1 3").unwrap(), vec![-1, 3]);
    }

    #[test]
    fn test_malformed_token_named_with_position() {
        let err = parse_fields("1 2 x 4").unwrap_err();
        assert_eq!(err.token, "x");
        assert_eq!(err.position, 3);
        assert_eq!(err.to_string(), "token 3 ('x') is not an integer");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fields("").unwrap().is_empty());
        assert!(parse_fields("   ").unwrap().is_empty());
    }
}
