mod lead_email;
mod lead_name;
mod types;

pub use lead_email::LeadEmail;
pub use lead_name::LeadName;
pub use types::*;

/// A visitor who filled in the landing-page form. Nothing about the lead is
/// stored; a valid lead only unlocks the wizard for the current session.
#[derive(Debug)]
pub struct Lead {
    pub name: LeadName,
    pub email: LeadEmail,
    pub company: Option<String>,
}

impl Lead {
    pub fn new(name: String, email: String, company: Option<String>) -> Result<Self, String> {
        let company = company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            name: LeadName::parse(name)?,
            email: LeadEmail::parse(email)?,
            company,
        })
    }
}
