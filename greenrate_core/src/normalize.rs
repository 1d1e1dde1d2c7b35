//! Input canonicalization shared by extraction and intent matching.

/// Lower-case the raw query.
///
/// This is the only transformation applied before matching. Whitespace is
/// left alone because every pattern tolerates flexible spacing itself.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// True when the text contains at least one ASCII digit.
#[must_use]
pub fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_only() {
        assert_eq!(
            normalize("Total Parking Spaces  =  40"),
            "total parking spaces  =  40"
        );
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("peak visitors = 7"));
        assert!(!has_digit("shower facilities for everyone"));
        assert!(!has_digit(""));
    }
}
