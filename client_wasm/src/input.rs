//! Text input handling
//!
//! The page hands over the raw contents of the angle and power fields.

/// Read a number the way a browser number field is read: leading whitespace
/// skipped, the longest numeric prefix taken (exponent included), anything
/// else is NaN
pub fn parse_number(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return f32::NAN;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }
    text[..end].parse().unwrap_or(f32::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("45"), 45.0);
        assert_eq!(parse_number("  62.5"), 62.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number(".5"), 0.5);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(parse_number("45deg"), 45.0);
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("7."), 7.0);
    }

    #[test]
    fn test_garbage_is_nan() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
    }

    #[test]
    fn test_exponent_is_part_of_the_number() {
        assert_eq!(parse_number("1e2"), 100.0);
        assert_eq!(parse_number("2.5E-1"), 0.25);
        assert_eq!(parse_number("4e+1x"), 40.0);
        assert_eq!(parse_number(".5e1"), 5.0);
    }

    #[test]
    fn test_dangling_exponent_is_ignored() {
        assert_eq!(parse_number("3e"), 3.0);
        assert_eq!(parse_number("3e-"), 3.0);
        assert_eq!(parse_number("3Ex"), 3.0);
    }
}
