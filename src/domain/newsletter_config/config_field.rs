use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Names of the editable fields of a `NewsletterConfig`, spelled the way the
/// wizard form submits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    CompanyName,
    TargetAudience,
    PrimaryTopic,
    Tone,
    Length,
    Frequency,
    KeyValues,
    ExampleTopic,
}

impl ConfigField {
    pub const ALL: [ConfigField; 8] = [
        ConfigField::CompanyName,
        ConfigField::TargetAudience,
        ConfigField::PrimaryTopic,
        ConfigField::Tone,
        ConfigField::Length,
        ConfigField::Frequency,
        ConfigField::KeyValues,
        ConfigField::ExampleTopic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::CompanyName => "companyName",
            ConfigField::TargetAudience => "targetAudience",
            ConfigField::PrimaryTopic => "primaryTopic",
            ConfigField::Tone => "tone",
            ConfigField::Length => "length",
            ConfigField::Frequency => "frequency",
            ConfigField::KeyValues => "keyValues",
            ConfigField::ExampleTopic => "exampleTopic",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Invalid field: '{s}' is not a newsletter setting."))
    }

    /// Free-text fields accept any string; the others only their enumerated values.
    pub fn is_free_text(&self) -> bool {
        !matches!(
            self,
            ConfigField::Tone | ConfigField::Length | ConfigField::Frequency
        )
    }
}

impl Display for ConfigField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
