//! Field validation rules for the signup form.
//!
//! Each rule is a pure function returning the warning to display, or `None`
//! when the value is acceptable. Checks within a rule are ordered: the first
//! failing check wins.

/// Identity of a form field, resolved at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    VerifyPassword,
}

pub fn validate_username(username: &str) -> Option<&'static str> {
    // An empty username is caught by the length check, the character-set
    // check accepts it.
    if username.chars().count() < 4 {
        return Some("Username too short");
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("No special characters allowed");
    }
    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if is_valid_email(email) {
        None
    } else {
        Some("Invalid email address")
    }
}

/// A `local@domain.tld` shape: non-empty local part and domain free of
/// whitespace and `@`, with a dot somewhere inside the domain that has at
/// least one character on each side.
fn is_valid_email(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    let clean = |s: &str| !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    let count = password.chars().count();
    // Bounds are inclusive: 8 and 20 characters are both fine.
    if count < 8 {
        return Some("Password must be at least 8 characters long");
    }
    if count > 20 {
        return Some("Password must be no more than 20 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must include at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must include at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must include at least one number");
    }
    // `is_ascii_punctuation` covers exactly the `!`-`/`, `:`-`@`, `[`-`` ` ``
    // and `{`-`~` ranges.
    if !password.chars().any(|c| c.is_ascii_punctuation()) {
        return Some("Password must include at least one special character");
    }
    None
}

pub fn validate_verify_password(password: &str, verify_password: &str) -> Option<&'static str> {
    if password != verify_password {
        Some("Passwords do not match")
    } else {
        None
    }
}
