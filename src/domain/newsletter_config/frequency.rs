use serde::Serialize;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    #[serde(rename = "Bi-Weekly")]
    BiWeekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();

        Self::ALL
            .into_iter()
            .find(|frequency| {
                let display = frequency.as_str();
                // "BiWeekly" is the variant spelling, "Bi-Weekly" the display one
                display.eq_ignore_ascii_case(trimmed)
                    || display.replace('-', "").eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| {
                format!(
                    "Invalid frequency: '{trimmed}' is not one of Daily, Weekly, Bi-Weekly, Monthly."
                )
            })
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
