mod preview_body;

pub use preview_body::{ALLOWED_TAGS, PreviewBody};

use serde::{Deserialize, Serialize};

/// A sample issue as returned by the model. Any other JSON shape is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedContent {
    pub subject: String,
    pub preheader: String,
    pub body: String,
}

impl GeneratedContent {
    /// Longest `body` accepted from the model, in characters.
    pub const MAX_BODY_CHARS: usize = 100_000;

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let content: Self = serde_json::from_str(text)?;

        // Every preview re-parses the body, so oversized replies are turned away here
        if content.body.chars().count() > Self::MAX_BODY_CHARS {
            return Err(serde::de::Error::custom(format!(
                "body cannot be longer than {} characters",
                Self::MAX_BODY_CHARS
            )));
        }

        Ok(content)
    }

    pub fn preview_body(&self) -> PreviewBody {
        PreviewBody::sanitize(&self.body)
    }
}
