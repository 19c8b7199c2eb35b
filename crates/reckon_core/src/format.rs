//! Display formatting for operands.

/// Formats an operand for the display, or `None` for a blank line.
///
/// The operand splits on its decimal point: the integer part gets en-US
/// thousands grouping, and any fractional part is reattached verbatim so
/// trailing digits the user typed are never rounded away.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;

    match operand.split_once('.') {
        None => Some(group_integer(operand)),
        Some((integer, decimal)) => Some(format!("{}.{decimal}", group_integer(integer))),
    }
}

/// Groups a decimal integer string with comma separators.
///
/// A bare or all-zero integer part collapses to `0`, so a lone decimal
/// point displays as `0.`. Non-numeric parts (`Infinity`, `NaN`) pass
/// through untouched.
fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_owned();
    }

    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + sign.len());
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
