//! Consumer quick signup.
//!
//! Consumers do not go through a multi-step wizard; the auth modal collects
//! the minimum contact details and produces the consumer-tagged record
//! directly.

use serde::Serialize;

use super::Registration;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsumerSignup {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Kept only until the record is handed to the submission collaborator.
    #[serde(skip_serializing)]
    pub password: String,
}

impl ConsumerSignup {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }

    pub fn into_registration(self) -> Registration {
        Registration::Consumer(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_never_serialized() {
        let signup = ConsumerSignup::new("Demo User", "demo@example.com", "123-456-7890", "hunter2");
        let value = serde_json::to_value(signup.into_registration()).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["role"], "consumer");
    }
}
