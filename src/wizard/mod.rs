mod controller;
mod gating;
mod preview;
mod session;
mod step;
mod store;

pub use controller::*;
pub use gating::can_proceed;
pub use preview::render_preview;
pub use session::WizardSession;
pub use step::{STEPS, StepInfo, WizardStep};
pub use store::{WizardStore, evict_idle_until_stopped};
