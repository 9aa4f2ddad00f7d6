mod config_field;
mod content_length;
mod frequency;
mod tone_of_voice;

pub use config_field::ConfigField;
pub use content_length::ContentLength;
pub use frequency::Frequency;
pub use tone_of_voice::ToneOfVoice;

use serde::Serialize;

/// Everything the wizard collects before asking the model for a sample issue.
///
/// Free-text fields are stored as typed, without trimming or emptiness checks:
/// whether a step may be left is decided by `wizard::can_proceed`, and the
/// generation prompt embeds the values verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterConfig {
    pub company_name: String,
    pub target_audience: String,
    pub primary_topic: String,
    pub tone: ToneOfVoice,
    pub length: ContentLength,
    pub frequency: Frequency,
    pub key_values: String,
    pub example_topic: String,
}

impl NewsletterConfig {
    /// Overwrites a single field, leaving every other field untouched.
    ///
    /// Only enumerated fields can fail, and a failed write leaves the
    /// configuration unchanged.
    pub fn set_field(&mut self, field: ConfigField, value: String) -> Result<(), String> {
        match field {
            ConfigField::CompanyName => self.company_name = value,
            ConfigField::TargetAudience => self.target_audience = value,
            ConfigField::PrimaryTopic => self.primary_topic = value,
            ConfigField::KeyValues => self.key_values = value,
            ConfigField::ExampleTopic => self.example_topic = value,
            ConfigField::Tone => self.tone = ToneOfVoice::parse(&value)?,
            ConfigField::Length => self.length = ContentLength::parse(&value)?,
            ConfigField::Frequency => self.frequency = Frequency::parse(&value)?,
        }
        Ok(())
    }

    /// Reads a field back in the form `set_field` accepts.
    pub fn field(&self, field: ConfigField) -> String {
        match field {
            ConfigField::CompanyName => self.company_name.clone(),
            ConfigField::TargetAudience => self.target_audience.clone(),
            ConfigField::PrimaryTopic => self.primary_topic.clone(),
            ConfigField::KeyValues => self.key_values.clone(),
            ConfigField::ExampleTopic => self.example_topic.clone(),
            ConfigField::Tone => self.tone.to_string(),
            ConfigField::Length => self.length.to_string(),
            ConfigField::Frequency => self.frequency.to_string(),
        }
    }
}
