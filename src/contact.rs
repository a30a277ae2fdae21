use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please add a short message about your project.")]
    MissingMessage,
    #[error("Your message could not be sent: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks the raw field values in form order and trims them.
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain.split('.').count() > 1
        && domain.split('.').all(|label| !label.is_empty())
}

/// Default handler: the form is not wired to an endpoint, so the payload only
/// goes to the console.
pub fn log_submission(submission: ContactSubmission) -> Result<(), ContactError> {
    let payload = serde_json::to_string(&submission)
        .map_err(|e| ContactError::Rejected(e.to_string()))?;
    info!("Contact form submitted: {}", payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_valid_input() {
        let submission = ContactSubmission::validate("  Ada ", " ada@example.com", "Need a site\n").unwrap();
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Need a site".into(),
            }
        );
    }

    #[test]
    fn reports_first_failing_field() {
        assert_eq!(ContactSubmission::validate(" ", "bad", ""), Err(ContactError::MissingName));
        assert_eq!(ContactSubmission::validate("Ada", "bad", ""), Err(ContactError::InvalidEmail));
        assert_eq!(
            ContactSubmission::validate("Ada", "ada@example.com", "   "),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(looks_like_email(good), "{good}");
        }
        for bad in ["", "plain", "@example.com", "a@", "a@localhost", "a@b..com", "a@b.com.", "a b@c.com", "a@b@c.com"] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address.");
        assert_eq!(
            ContactError::Rejected("offline".into()).to_string(),
            "Your message could not be sent: offline"
        );
    }

    #[test]
    fn default_handler_accepts() {
        let submission = ContactSubmission::validate("Ada", "ada@example.com", "Hello").unwrap();
        assert_eq!(log_submission(submission), Ok(()));
    }

    #[test]
    fn serializes_as_flat_json() {
        let submission = ContactSubmission::validate("Ada", "ada@example.com", "Hello").unwrap();
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#
        );
    }
}
