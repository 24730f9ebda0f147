use url::Url;

/// Why a submitted URL was rejected. Carries the translation key for the
/// message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    Empty,
    Invalid,
}

impl UrlError {
    pub fn message_key(self) -> &'static str {
        match self {
            UrlError::Empty => "error.emptyUrl",
            UrlError::Invalid => "error.invalidUrl",
        }
    }
}

/// Validate and sanitize user input before encoding it.
///
/// The input must be a complete absolute URL; bare hostnames like
/// "example.com" are rejected because they carry no scheme.
pub fn validate_url(input: &str) -> Result<String, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    if Url::parse(trimmed).is_err() {
        return Err(UrlError::Invalid);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(validate_url(""), Err(UrlError::Empty));
        assert_eq!(validate_url("   "), Err(UrlError::Empty));
        assert_eq!(UrlError::Empty.message_key(), "error.emptyUrl");
    }

    #[test]
    fn test_scheme_less_input_rejected() {
        assert_eq!(validate_url("example.com"), Err(UrlError::Invalid));
        assert_eq!(validate_url("not a url"), Err(UrlError::Invalid));
        assert_eq!(UrlError::Invalid.message_key(), "error.invalidUrl");
    }

    #[test]
    fn test_valid_url_accepted_and_trimmed() {
        assert_eq!(
            validate_url("  https://example.com/path?q=1 "),
            Ok("https://example.com/path?q=1".to_string())
        );
        assert_eq!(
            validate_url("http://a.b"),
            Ok("http://a.b".to_string())
        );
    }
}
