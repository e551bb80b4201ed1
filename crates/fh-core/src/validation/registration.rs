use super::errors::FieldErrors;
use super::paths;
use super::rules::{is_email, TextRule, PERSON_NAME};
use crate::auth::SecretString;
use crate::registration::{RegistrationDraft, RegistrationForm};

static NAME_RULE: TextRule = TextRule {
    min: 2,
    min_message: "Name must be at least 2 characters",
    max: 100,
    max_message: "Name must be less than 100 characters",
    pattern: &PERSON_NAME,
    pattern_message: "Name can only contain letters, spaces, dots, hyphens, and apostrophes",
};

const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 72;

/// Validates a registration draft.
///
/// The password match is a whole-form rule: it is checked even when the
/// individual password fields fail their own rules.
pub fn validate_registration(draft: &RegistrationDraft) -> Result<RegistrationForm, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = match NAME_RULE.check(&draft.name) {
        Ok(name) => Some(name),
        Err(message) => {
            errors.insert(paths::NAME, message);
            None
        }
    };

    let email = draft.email.trim();
    if !is_email(email) {
        errors.insert(paths::EMAIL, "Please enter a valid email address");
    } else if email.chars().count() > EMAIL_MAX {
        errors.insert(paths::EMAIL, "Email must be less than 255 characters");
    }

    let password_len = draft.password.chars().count();
    if password_len < PASSWORD_MIN {
        errors.insert(paths::PASSWORD, "Password must be at least 6 characters");
    } else if password_len > PASSWORD_MAX {
        errors.insert(paths::PASSWORD, "Password must be less than 72 characters");
    }

    if draft.password != draft.confirm_password {
        errors.insert(paths::CONFIRM_PASSWORD, "Passwords don't match");
    }

    match name {
        Some(name) if errors.is_empty() => Ok(RegistrationForm {
            name,
            email: email.to_string(),
            password: SecretString::new(draft.password.clone()),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationDraft {
        RegistrationDraft {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        let form = validate_registration(&draft(
            " Mary-Jane O'Neil ",
            " mj@example.com ",
            "secret1",
            "secret1",
        ))
        .unwrap();

        assert_eq!(form.name, "Mary-Jane O'Neil");
        assert_eq!(form.email, "mj@example.com");
        assert_eq!(form.password.expose(), "secret1");
    }

    #[test]
    fn mismatch_is_reported_on_confirm_password_only() {
        let errors =
            validate_registration(&draft("Ada", "ada@example.com", "secret1", "secret2"))
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords don't match"));
    }

    #[test]
    fn mismatch_is_checked_even_when_passwords_are_individually_invalid() {
        let errors = validate_registration(&draft("Ada", "ada@example.com", "abc", "abd"))
            .unwrap_err();
        assert!(errors.contains("password"));
        assert!(errors.contains("confirmPassword"));

        let errors = validate_registration(&draft("Ada", "ada@example.com", "abc", "abc"))
            .unwrap_err();
        assert!(errors.contains("password"));
        assert!(!errors.contains("confirmPassword"));
    }

    #[test]
    fn field_rules() {
        let errors =
            validate_registration(&draft("A", "not-an-email", &"x".repeat(73), &"x".repeat(73)))
                .unwrap_err();

        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be less than 72 characters")
        );
        assert_eq!(errors.first().unwrap().field, "name");
    }

    #[test]
    fn name_rejects_digits() {
        let errors = validate_registration(&draft("R2D2", "r2@example.com", "secret1", "secret1"))
            .unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some("Name can only contain letters, spaces, dots, hyphens, and apostrophes")
        );
    }

    #[test]
    fn email_length_is_bounded() {
        let email = format!("{}@example.com", "a".repeat(250));
        let errors =
            validate_registration(&draft("Ada", &email, "secret1", "secret1")).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be less than 255 characters"));
    }
}
