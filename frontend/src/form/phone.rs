/// Longest number accepted: two-digit area code plus a nine-digit mobile.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Keeps ASCII digits only, up to [`MAX_PHONE_DIGITS`].
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Renders whatever has been typed so far as `(DD) NNNNN-NNNN`.
///
/// The output depends only on the digits in `raw`, so feeding a formatted
/// value back in returns it unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    let n = digits.len();

    match n {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_digit_count() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119876"), "(11) 9876");
        assert_eq!(format_phone("1198765"), "(11) 9876-5");
        assert_eq!(format_phone("1198765432"), "(11) 9876-5432");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn strips_noise_and_caps_length() {
        assert_eq!(format_phone("+55 (11) 98765-4321"), "(55) 11987-6543");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(phone_digits("(11) 98765-43219999"), "11987654321");
    }

    #[test]
    fn formatting_is_idempotent_for_every_length() {
        let all = "11987654321";
        for n in 0..=all.len() {
            let once = format_phone(&all[..n]);
            assert_eq!(format_phone(&once), once, "length {}", n);
            assert_eq!(phone_digits(&once), &all[..n]);
        }
    }
}
