use serde::Serialize;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ToneOfVoice {
    #[default]
    Professional,
    Witty,
    Casual,
    Inspirational,
    Authoritative,
}

impl ToneOfVoice {
    pub const ALL: [ToneOfVoice; 5] = [
        ToneOfVoice::Professional,
        ToneOfVoice::Witty,
        ToneOfVoice::Casual,
        ToneOfVoice::Inspirational,
        ToneOfVoice::Authoritative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneOfVoice::Professional => "Professional",
            ToneOfVoice::Witty => "Witty",
            ToneOfVoice::Casual => "Casual",
            ToneOfVoice::Inspirational => "Inspirational",
            ToneOfVoice::Authoritative => "Authoritative",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!(
                    "Invalid tone: '{trimmed}' is not one of Professional, Witty, Casual, Inspirational, Authoritative."
                )
            })
    }
}

impl Display for ToneOfVoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
