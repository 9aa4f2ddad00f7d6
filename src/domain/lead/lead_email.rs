use std::fmt::{self, Display, Formatter};

use validator::ValidateEmail;

#[derive(Debug)]
pub struct LeadEmail(String);

impl LeadEmail {
    /// Returns an instance of `LeadEmail` if all conditions are met.
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid email: email cannot be empty.".to_string());
        }

        // RFC 5321: 64 local + 1 @ + 255 domain = 320 characters
        if trimmed.len() > 320 {
            return Err("Invalid email: cannot be longer than 320 characters.".to_string());
        }

        if !trimmed.validate_email() {
            return Err(format!(
                "Invalid email: '{trimmed}' does not match the required format."
            ));
        }

        Ok(LeadEmail(trimmed.to_string()))
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LeadEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
