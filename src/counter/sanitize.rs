/// Byte-order mark, treated as whitespace alongside `char::is_whitespace`.
const BOM: char = '\u{FEFF}';

/// Next-line control; Unicode whitespace, but kept as an ordinary character.
const NEXT_LINE: char = '\u{0085}';

fn is_stripped(c: char) -> bool {
    match c {
        '+' | '-' | BOM => true,
        NEXT_LINE => false,
        c => c.is_whitespace(),
    }
}

/// Remove every sign and whitespace character from a raw field value.
///
/// Signs are dropped wherever they appear, so `" -250 "` and `"2-50"` both
/// clean to `"250"`.
pub fn clean_input_string(raw: &str) -> String {
    raw.chars().filter(|c| !is_stripped(*c)).collect()
}

/// Find the leftmost run of `digits e digits` (either case of `e`).
///
/// Returns the matched substring so it can be quoted back to the user.
/// Exponential notation is refused outright even though it would parse.
pub fn find_invalid_input(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }

        let mantissa_end = digits_from(start);
        let has_exponent = mantissa_end + 1 < bytes.len()
            && bytes[mantissa_end].eq_ignore_ascii_case(&b'e')
            && bytes[mantissa_end + 1].is_ascii_digit();

        if has_exponent {
            let end = digits_from(mantissa_end + 1);
            return Some(&text[start..end]);
        }

        // No later start inside this digit run can succeed either.
        start = mantissa_end;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_signs_and_whitespace() {
        assert_eq!(clean_input_string("  300 "), "300");
        assert_eq!(clean_input_string("+250"), "250");
        assert_eq!(clean_input_string("-250"), "250");
        assert_eq!(clean_input_string("1 2\t3\n"), "123");
        assert_eq!(clean_input_string("\u{FEFF}42\u{00A0}"), "42");
        assert_eq!(clean_input_string("abc"), "abc");
    }

    #[test]
    fn test_next_line_control_is_kept() {
        assert_eq!(clean_input_string("1\u{0085}0"), "1\u{0085}0");
        assert_eq!(clean_input_string("1\u{2028}0"), "10");
    }

    #[test]
    fn test_exponential_is_invalid() {
        assert_eq!(find_invalid_input("1e5"), Some("1e5"));
        assert_eq!(find_invalid_input("12E34"), Some("12E34"));
        assert_eq!(find_invalid_input("x2.5e10y"), Some("5e10"));
        assert_eq!(find_invalid_input("1x23e4"), Some("23e4"));
    }

    #[test]
    fn test_plain_values_are_valid() {
        assert_eq!(find_invalid_input("300"), None);
        assert_eq!(find_invalid_input("12.5"), None);
        assert_eq!(find_invalid_input(""), None);
        assert_eq!(find_invalid_input("e5"), None);
        assert_eq!(find_invalid_input("5e"), None);
        assert_eq!(find_invalid_input("1.e5"), None);
        assert_eq!(find_invalid_input("eggs"), None);
    }

    #[test]
    fn test_sign_in_exponent_is_stripped_first() {
        let cleaned = clean_input_string("1e-5");
        assert_eq!(cleaned, "1e5");
        assert_eq!(find_invalid_input(&cleaned), Some("1e5"));
    }
}
