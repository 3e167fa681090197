/// Transactional message templates
///
/// Bodies are plain text with `%useremail%` and `%code%` placeholders
/// substituted at compose time.

use crate::mail::OutgoingEmail;

/// Subject of the registration notice
pub const REGISTRATION_SUBJECT: &str = "Welcome to Gatehouse";

/// Body of the registration notice
pub const REGISTRATION_BODY: &str = "\
Hello %useremail%,

Your Gatehouse account has been created. You can now sign in with the
email address and password you registered with.

If you did not create this account, please contact support.

Best regards,
The Gatehouse Team";

/// Subject of the password-reset message
pub const RESET_CODE_SUBJECT: &str = "Your Gatehouse password reset code";

/// Body of the password-reset message
pub const RESET_CODE_BODY: &str = "\
Hello %useremail%,

A password reset was requested for your Gatehouse account. Use the
following code to set a new password:

%code%

If you did not request this reset, you can ignore this email.

Best regards,
The Gatehouse Team";

/// Composes the registration notice for a new account
pub fn registration_email(email: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: email.to_string(),
        subject: REGISTRATION_SUBJECT.to_string(),
        body: REGISTRATION_BODY.replace("%useremail%", email),
    }
}

/// Composes the reset-code message for an email address
pub fn reset_code_email(email: &str, code: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: email.to_string(),
        subject: RESET_CODE_SUBJECT.to_string(),
        body: RESET_CODE_BODY
            .replace("%useremail%", email)
            .replace("%code%", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_email_substitutes_address() {
        let email = registration_email("user@example.com");

        assert_eq!(email.to, "user@example.com");
        assert!(email.body.contains("user@example.com"));
        assert!(!email.body.contains("%useremail%"));
    }

    #[test]
    fn test_reset_code_email_substitutes_both_placeholders() {
        let email = reset_code_email("user@example.com", "042137");

        assert_eq!(email.to, "user@example.com");
        assert!(email.body.contains("user@example.com"));
        assert!(email.body.contains("042137"));
        assert!(!email.body.contains("%useremail%"));
        assert!(!email.body.contains("%code%"));
    }
}
