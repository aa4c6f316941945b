//! Well-formedness checks run against a raw string before decoding, plus
//! the separator split. Each `reject_*` predicate is independent and fails
//! with its own error; `decode` runs them in a fixed order.

use crate::charset;
use crate::error::Error;
use crate::{CHECKSUM_LENGTH, MAX_BECH32_LENGTH, MAX_HRP_LENGTH, MIN_BECH32_LENGTH, SEPARATOR};

pub(crate) fn reject_too_short(s: &str) -> Result<(), Error> {
    if s.len() < MIN_BECH32_LENGTH {
        return Err(Error::TooShort);
    }
    Ok(())
}

pub(crate) fn reject_too_long(s: &str) -> Result<(), Error> {
    if s.len() > MAX_BECH32_LENGTH {
        return Err(Error::TooLong);
    }
    Ok(())
}

pub(crate) fn reject_mixed_case(s: &str) -> Result<(), Error> {
    let any_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let any_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if any_lower && any_upper {
        return Err(Error::MixedCase);
    }
    Ok(())
}

pub(crate) fn reject_values_out_of_range(s: &str) -> Result<(), Error> {
    if s.chars().any(|c| !('\x21'..='\x7e').contains(&c)) {
        return Err(Error::ValueOutOfRange);
    }
    Ok(())
}

pub(crate) fn reject_no_separator(s: &str) -> Result<(), Error> {
    if find_separator_position(s).is_none() {
        return Err(Error::MissingSeparator);
    }
    Ok(())
}

// Post-split bounds. HRP length limits come from the scheme; the data part
// must at least hold a whole checksum.

pub(crate) fn reject_hrp_out_of_bounds(hrp: &str) -> Result<(), Error> {
    if hrp.is_empty() {
        return Err(Error::HrpTooShort);
    }
    if hrp.len() > MAX_HRP_LENGTH {
        return Err(Error::HrpTooLong);
    }
    Ok(())
}

pub(crate) fn reject_data_part_too_short(dp: &str) -> Result<(), Error> {
    if dp.len() < CHECKSUM_LENGTH {
        return Err(Error::DataPartTooShort);
    }
    Ok(())
}

/// Position of the last separator character, if any. The rightmost match is
/// authoritative: HRPs may themselves contain the separator.
pub(crate) fn find_separator_position(s: &str) -> Option<usize> {
    s.rfind(SEPARATOR)
}

pub(crate) fn extract_human_readable_part(s: &str) -> Result<&str, Error> {
    let pos = find_separator_position(s).ok_or(Error::MissingSeparator)?;
    Ok(&s[..pos])
}

pub(crate) fn extract_data_part(s: &str) -> Result<&str, Error> {
    let pos = find_separator_position(s).ok_or(Error::MissingSeparator)?;
    Ok(&s[pos + 1..])
}

/// Drops characters outside the alphabet-plus-separator set, so strings
/// pasted with grouping punctuation ("tx1-rqqq-...") survive decoding.
/// Passes `None` through. Preprocessing convenience, not validation.
pub fn strip_unknown_chars(input: Option<&str>) -> Option<String> {
    input.map(|s| {
        s.chars()
            .filter(|&c| c == SEPARATOR || charset::is_member(c))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_rejects_short_string() {
        assert_eq!(reject_too_short("ace"), Err(Error::TooShort));
    }

    #[test]
    fn too_short_passes_long_string() {
        assert!(reject_too_short("aceaceace").is_ok());
    }

    #[test]
    fn too_long_passes_up_to_max() {
        assert!(reject_too_long("aceaceace").is_ok());
        assert!(reject_too_long(&"a".repeat(MAX_BECH32_LENGTH - 1)).is_ok());
        assert!(reject_too_long(&"a".repeat(MAX_BECH32_LENGTH)).is_ok());
    }

    #[test]
    fn too_long_rejects_past_max() {
        assert_eq!(
            reject_too_long(&"a".repeat(MAX_BECH32_LENGTH + 1)),
            Err(Error::TooLong)
        );
    }

    #[test]
    fn mixed_case_passes_single_case() {
        assert!(reject_mixed_case("abcdefg").is_ok());
        assert!(reject_mixed_case("abc123def").is_ok());
        assert!(reject_mixed_case("12AB34CD").is_ok());
    }

    #[test]
    fn mixed_case_rejects_mixed() {
        assert_eq!(reject_mixed_case("abcDefg"), Err(Error::MixedCase));
        assert_eq!(reject_mixed_case("1abcDefg2"), Err(Error::MixedCase));
    }

    #[test]
    fn values_out_of_range_passes_printable_ascii() {
        assert!(reject_values_out_of_range("abcde").is_ok());
        assert!(reject_values_out_of_range("!!abcde}~").is_ok());
    }

    #[test]
    fn values_out_of_range_rejects_space_and_control() {
        assert_eq!(reject_values_out_of_range("ab cd"), Err(Error::ValueOutOfRange));
        assert_eq!(reject_values_out_of_range("ab\ncd"), Err(Error::ValueOutOfRange));
        assert_eq!(
            reject_values_out_of_range("aaaa\u{0127}aaaa"),
            Err(Error::ValueOutOfRange)
        );
    }

    #[test]
    fn no_separator_check() {
        assert!(reject_no_separator("ab1cd").is_ok());
        assert_eq!(reject_no_separator("abcd"), Err(Error::MissingSeparator));
    }

    #[test]
    fn separator_position_is_rightmost() {
        assert_eq!(find_separator_position("ab1cd"), Some(2));
        assert_eq!(find_separator_position("abc1def1lalala"), Some(7));
    }

    #[test]
    fn separator_position_absent() {
        assert_eq!(find_separator_position(""), None);
        assert_eq!(find_separator_position("lalalala"), None);
    }

    #[test]
    fn extract_hrp_without_separator_errors() {
        assert_eq!(extract_human_readable_part(""), Err(Error::MissingSeparator));
    }

    #[test]
    fn extract_hrp_variants() {
        assert_eq!(extract_human_readable_part("1").unwrap(), "");
        assert_eq!(extract_human_readable_part("ab1").unwrap(), "ab");
        assert_eq!(extract_human_readable_part("ab1cd").unwrap(), "ab");
    }

    #[test]
    fn extract_data_part_variants() {
        assert_eq!(extract_data_part(""), Err(Error::MissingSeparator));
        assert_eq!(extract_data_part("1").unwrap(), "");
        assert_eq!(extract_data_part("1ab").unwrap(), "ab");
        assert_eq!(extract_data_part("ab1").unwrap(), "");
        assert_eq!(extract_data_part("ab1cd").unwrap(), "cd");
    }

    #[test]
    fn hrp_bounds() {
        assert_eq!(reject_hrp_out_of_bounds(""), Err(Error::HrpTooShort));
        assert!(reject_hrp_out_of_bounds("a").is_ok());
        assert!(reject_hrp_out_of_bounds(&"a".repeat(MAX_HRP_LENGTH)).is_ok());
        assert_eq!(
            reject_hrp_out_of_bounds(&"a".repeat(MAX_HRP_LENGTH + 1)),
            Err(Error::HrpTooLong)
        );
    }

    #[test]
    fn data_part_bounds() {
        assert_eq!(reject_data_part_too_short("qqqqq"), Err(Error::DataPartTooShort));
        assert!(reject_data_part_too_short("qqqqqq").is_ok());
    }

    #[test]
    fn strip_unknown_chars_passes_none_through() {
        assert_eq!(strip_unknown_chars(None), None);
    }

    #[test]
    fn strip_unknown_chars_keeps_clean_string() {
        assert_eq!(strip_unknown_chars(Some("ace")).unwrap(), "ace");
    }

    #[test]
    fn strip_unknown_chars_drops_dashes() {
        assert_eq!(
            strip_unknown_chars(Some("tx1-rqqq-qqqq-qmhu-qk")).unwrap(),
            "tx1rqqqqqqqqmhuqk"
        );
    }

    #[test]
    fn strip_unknown_chars_drops_everything_unrecognized() {
        assert_eq!(
            strip_unknown_chars(Some("tx1!rjk0\\u5ng*4jsf^^mc")).unwrap(),
            "tx1rjk0u5ng4jsfmc"
        );
    }
}
