use crate::domain::Lead;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct LeadData {
    name: String,
    email: String,
    company: Option<String>,
}

impl TryFrom<LeadData> for Lead {
    type Error = String;

    fn try_from(payload: LeadData) -> Result<Self, Self::Error> {
        Lead::new(payload.name, payload.email, payload.company)
    }
}
