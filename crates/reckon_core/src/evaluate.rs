//! Arithmetic evaluation of a pending expression.

use super::Operation;

/// Evaluates `previous <operation> current`, returning the result as a
/// display string.
///
/// Operands are parsed leniently: the longest leading numeric prefix wins
/// and trailing non-numeric content is ignored. If either operand has no
/// numeric prefix at all the result is the empty string. Division by zero
/// is not guarded; IEEE semantics flow through to the display as
/// `Infinity`, `-Infinity`, or `NaN`.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(prev), Some(cur)) = (parse_leading(previous), parse_leading(current)) else {
        return String::new();
    };

    stringify(operation.apply(prev, cur))
}

/// Parses the longest leading numeric prefix of `text` as an `f64`.
///
/// Leading whitespace is skipped. A prefix that parses to NaN counts as a
/// failure, so "no numeric content" and "not a number" collapse to `None`.
fn parse_leading(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();

    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return if value.is_nan() { None } else { Some(value) };
        }
    }

    None
}

/// Converts a computed value to its display string.
///
/// Finite values use the shortest round-trip decimal form. Non-finite
/// values render as the literal words the display shows verbatim.
fn stringify(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if value == 0.0 {
        // Collapse negative zero.
        "0".to_owned()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional_operands() {
        assert_eq!(parse_leading("42"), Some(42.0));
        assert_eq!(parse_leading("3.5"), Some(3.5));
        assert_eq!(parse_leading("0."), Some(0.0));
        assert_eq!(parse_leading("  7"), Some(7.0));
    }

    #[test]
    fn parses_longest_numeric_prefix() {
        assert_eq!(parse_leading("12abc"), Some(12.0));
        assert_eq!(parse_leading("3.5.7"), Some(3.5));
        assert_eq!(parse_leading("-2x"), Some(-2.0));
    }

    #[test]
    fn rejects_operands_without_numeric_prefix() {
        assert_eq!(parse_leading(""), None);
        assert_eq!(parse_leading("."), None);
        assert_eq!(parse_leading("abc"), None);
    }

    #[test]
    fn stringifies_like_the_display_expects() {
        assert_eq!(stringify(8.0), "8");
        assert_eq!(stringify(3.5), "3.5");
        assert_eq!(stringify(-0.0), "0");
        assert_eq!(stringify(f64::INFINITY), "Infinity");
        assert_eq!(stringify(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(stringify(f64::NAN), "NaN");
    }

    #[test]
    fn evaluates_all_four_operations() {
        assert_eq!(evaluate("5", "3", Operation::Add), "8");
        assert_eq!(evaluate("5", "3", Operation::Subtract), "2");
        assert_eq!(evaluate("5", "3", Operation::Multiply), "15");
        assert_eq!(evaluate("7", "2", Operation::Divide), "3.5");
    }

    #[test]
    fn division_by_zero_follows_ieee_semantics() {
        assert_eq!(evaluate("5", "0", Operation::Divide), "Infinity");
        assert_eq!(evaluate("-5", "0", Operation::Divide), "-Infinity");
        assert_eq!(evaluate("0", "0", Operation::Divide), "NaN");
    }

    #[test]
    fn unparseable_operand_yields_empty_result() {
        assert_eq!(evaluate("", "3", Operation::Add), "");
        assert_eq!(evaluate("5", ".", Operation::Add), "");
    }
}
