use crate::domain::NewsletterConfig;
use crate::wizard::WizardStep;

/// Whether the visitor may leave `step` going forward.
///
/// Advisory: `WizardController::advance` does not call this. Whoever drives
/// the wizard consults it first, so a different front end can gate differently.
pub fn can_proceed(step: WizardStep, config: &NewsletterConfig) -> bool {
    match step.number() {
        1 => !config.company_name.is_empty(),
        2 => !config.target_audience.is_empty() && !config.primary_topic.is_empty(),
        _ => true,
    }
}
