use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials("user@example.com", "  spaced  "),
        Ok(("user@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}
