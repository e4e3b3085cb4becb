//! Email address syntax check.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Local part, `@`, domain labels, then one or more 2–3 character suffixes.
///
/// Word characters are ASCII only. Longer top-level domains such as `.info`
/// are rejected.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.+-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .unwrap()
});

/// Returns true if `email` matches the accepted address shape.
///
/// Purely syntactic: no DNS or MX lookup.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// `validator` custom rule wrapping [`validate_email`].
pub fn email_rule(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("Invalid email address".into());
        Err(err)
    }
}
