use std::sync::LazyLock;

use regex::Regex;

/// `localpart@domain.tld` where the local part allows word chars, dots, `+`
/// and `-`, and the domain needs at least one dot after its first label.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("email pattern is a valid regex")
});

/// Returns the first email-shaped substring of `text`, scanning left to right.
/// No deliverability or RFC 5322 validation is attempted.
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_REGEX.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_match_only() {
        let text = "Contact: a.b+c@example.co.uk, other: x@y.com";
        assert_eq!(find_email(text), Some("a.b+c@example.co.uk"));
    }

    #[test]
    fn test_no_email_returns_none() {
        assert_eq!(find_email("no email here"), None);
        assert_eq!(find_email(""), None);
    }

    #[test]
    fn test_domain_without_dot_is_not_an_email() {
        assert_eq!(find_email("ping me at root@localhost please"), None);
    }

    #[test]
    fn test_email_embedded_in_multiline_text() {
        let text = "Jane Doe\nSenior Engineer\nPhone: 555-0100 | jane-doe_99@mail.example.org\n";
        assert_eq!(find_email(text), Some("jane-doe_99@mail.example.org"));
    }

    #[test]
    fn test_hyphenated_domain() {
        assert_eq!(find_email("email:ops@my-company.io"), Some("ops@my-company.io"));
    }

    #[test]
    fn test_unicode_word_characters_are_accepted() {
        assert_eq!(find_email("José: josé@café.fr"), Some("josé@café.fr"));
    }
}
