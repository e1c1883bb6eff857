use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for clock components (hour/minute) as submitted by the form.
    /// One or two digits; anything else falls back to "00".
    /// - Valid: "7", "07", "23"
    /// - Invalid: "7:30", "abc", "123", ""
    pub static ref CLOCK_COMPONENT_REGEX: Regex = Regex::new(r"^\d{1,2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_component_regex_valid() {
        assert!(CLOCK_COMPONENT_REGEX.is_match("7"));
        assert!(CLOCK_COMPONENT_REGEX.is_match("07"));
        assert!(CLOCK_COMPONENT_REGEX.is_match("23"));
        assert!(CLOCK_COMPONENT_REGEX.is_match("00"));
    }

    #[test]
    fn test_clock_component_regex_invalid() {
        assert!(!CLOCK_COMPONENT_REGEX.is_match("")); // empty
        assert!(!CLOCK_COMPONENT_REGEX.is_match("7:30")); // separator
        assert!(!CLOCK_COMPONENT_REGEX.is_match("abc")); // letters
        assert!(!CLOCK_COMPONENT_REGEX.is_match("123")); // too long
        assert!(!CLOCK_COMPONENT_REGEX.is_match("-7")); // sign
    }
}
