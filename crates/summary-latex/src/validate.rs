//! Brace-balance validation.

use summary_core::error::{Result, SummaryError};

/// Check that `{` and `}` counts match. Every brace counts, escaped ones
/// included; a summary using `\{` without its `\}` is still rejected.
pub fn validate_braces(content: &str) -> Result<()> {
    let open = content.matches('{').count();
    let close = content.matches('}').count();
    if open != close {
        return Err(SummaryError::UnbalancedBraces { open, close });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_passes() {
        validate_braces("\\section*{A}").unwrap();
        validate_braces("").unwrap();
        validate_braces("plain text, no braces").unwrap();
        validate_braces("\\frac{a}{b} nested {x{y}}").unwrap();
    }

    #[test]
    fn test_unbalanced_fails() {
        let err = validate_braces("\\section*{A").unwrap_err();
        assert!(matches!(
            err,
            SummaryError::UnbalancedBraces { open: 1, close: 0 }
        ));

        let err = validate_braces("a}}{").unwrap_err();
        assert!(matches!(
            err,
            SummaryError::UnbalancedBraces { open: 1, close: 2 }
        ));
    }

    #[test]
    fn test_escaped_braces_still_counted() {
        validate_braces("\\{ and \\}").unwrap();
        assert!(validate_braces("\\{ alone").is_err());
    }
}
