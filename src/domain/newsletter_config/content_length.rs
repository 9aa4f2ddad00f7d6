use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Desired newsletter length. The display value carries the word-count hint
/// that is handed to the model verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContentLength {
    #[serde(rename = "Short (300-500 words)")]
    Short,
    #[default]
    #[serde(rename = "Medium (600-1000 words)")]
    Medium,
    #[serde(rename = "Long (1200+ words)")]
    Long,
}

impl ContentLength {
    pub const ALL: [ContentLength; 3] = [
        ContentLength::Short,
        ContentLength::Medium,
        ContentLength::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "Short (300-500 words)",
            ContentLength::Medium => "Medium (600-1000 words)",
            ContentLength::Long => "Long (1200+ words)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentLength::Short => "Short",
            ContentLength::Medium => "Medium",
            ContentLength::Long => "Long",
        }
    }

    /// Accepts either the full display value or the bare label (`"Short"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|length| {
                length.as_str().eq_ignore_ascii_case(trimmed)
                    || length.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| {
                format!("Invalid length: '{trimmed}' is not one of Short, Medium, Long.")
            })
    }
}

impl Display for ContentLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
