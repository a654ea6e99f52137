//! Small input validations

/// Structural email check used by the password-reset form: one `@` with a
/// non-empty local part, and a dot with characters on both sides somewhere
/// in the domain. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("juan@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_structural_garbage() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("juan@"));
        assert!(!is_valid_email("juan@nodot"));
        assert!(!is_valid_email("juan@example."));
        assert!(!is_valid_email("juan@.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("has space@example.com"));
    }
}
