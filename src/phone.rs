use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a North American phone number: {0:?}")]
pub struct InvalidPhoneNumber(pub String);

/// A North American number stored in E.164 form (`+1XXXXXXXXXX`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    /// Accepts any punctuation around the digits. Ten digits get the `+1`
    /// country code, eleven digits must already start with `1`.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhoneNumber> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let e164 = match digits.len() {
            10 => format!("+1{}", digits),
            11 if digits.starts_with('1') => format!("+{}", digits),
            _ => return Err(InvalidPhoneNumber(raw.to_string())),
        };
        Ok(Self { e164 })
    }

    /// For constants already written in E.164 form.
    pub(crate) fn from_known_e164(e164: &'static str) -> Self {
        debug_assert!(Self::parse(e164).map_or(false, |n| n.e164 == e164));
        Self {
            e164: e164.to_string(),
        }
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.e164)
    }

    /// `(518) 351-7231`
    pub fn display(&self) -> String {
        // e164 is always "+1" followed by ten digits
        let national = &self.e164[2..];
        format!(
            "({}) {}-{}",
            &national[0..3],
            &national[3..6],
            &national[6..10]
        )
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("5183517231", "+15183517231")]
    #[case("(518) 351-7231", "+15183517231")]
    #[case("1-518-351-7231", "+15183517231")]
    #[case("+1 518 351 7231", "+15183517231")]
    fn parses_north_american_numbers(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(PhoneNumber::parse(raw).unwrap().e164(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("351-7231")]
    #[case("25183517231")]
    #[case("+44 20 7946 0958 12")]
    fn rejects_other_lengths(#[case] raw: &str) {
        assert_eq!(
            PhoneNumber::parse(raw),
            Err(InvalidPhoneNumber(raw.to_string()))
        );
    }

    #[test]
    fn renders_link_and_display_forms() {
        let number = PhoneNumber::parse("+15183517231").unwrap();
        assert_eq!(number.tel_href(), "tel:+15183517231");
        assert_eq!(number.display(), "(518) 351-7231");
        assert_eq!(number.to_string(), "+15183517231");
    }
}
