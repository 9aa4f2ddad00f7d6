use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StepInfo {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [StepInfo; 4] = [
    StepInfo {
        id: 1,
        title: "Brand Identity",
        description: "Define who you are",
    },
    StepInfo {
        id: 2,
        title: "Audience & Strategy",
        description: "Who are we talking to?",
    },
    StepInfo {
        id: 3,
        title: "Style & Format",
        description: "Shape the content",
    },
    StepInfo {
        id: 4,
        title: "Preview & Launch",
        description: "Generate sample",
    },
];

/// Position in the wizard, always within `FIRST..=LAST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WizardStep(u8);

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep(1);
    pub const LAST: WizardStep = WizardStep(STEPS.len() as u8);

    /// Clamps out-of-range numbers to the nearest valid step.
    pub fn new(number: u8) -> Self {
        Self(number.clamp(Self::FIRST.0, Self::LAST.0))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn previous(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    pub fn info(&self) -> &'static StepInfo {
        &STEPS[usize::from(self.0 - 1)]
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}
