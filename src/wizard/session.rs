use crate::generation_client::NewsletterGenerator;
use crate::wizard::{GenerationOutcome, WizardController};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// A `WizardController` shared between the requests of one visitor.
///
/// The lock is only ever held for a state transition, never across the
/// provider call, so the wizard stays navigable while a generation runs.
#[derive(Debug)]
pub struct WizardSession {
    controller: Mutex<WizardController>,
    last_active: Mutex<Instant>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            controller: Mutex::new(WizardController::new()),
            last_active: Mutex::new(Instant::now()),
        }
    }

    /// Applies `f` to the controller. Every call counts as visitor activity.
    pub fn update<R>(&self, f: impl FnOnce(&mut WizardController) -> R) -> R {
        *self
            .last_active
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Instant::now();

        let mut controller = self.controller();
        f(&mut controller)
    }

    /// Time since the last `update`, i.e. since the visitor last did anything.
    pub fn idle_for(&self) -> Duration {
        self.last_active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
    }

    pub fn is_generating(&self) -> bool {
        self.controller().generation().is_loading()
    }

    fn controller(&self) -> MutexGuard<'_, WizardController> {
        // Transitions cannot leave the controller half-written, so a poisoned lock is still usable
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> WizardController {
        self.update(|controller| controller.clone())
    }

    /// Runs one generation for the current configuration. Ignored while
    /// another generation for this session is still in flight.
    #[tracing::instrument(name = "Triggering newsletter generation", skip_all)]
    pub async fn trigger_generation<G>(&self, generator: &G) -> GenerationOutcome
    where
        G: NewsletterGenerator + Sync,
    {
        let Some(config) = self.update(|controller| controller.begin_generation()) else {
            tracing::info!("Generation already in flight, ignoring trigger");
            return GenerationOutcome::Ignored;
        };

        let outcome = generator.generate(&config).await;

        self.update(|controller| controller.finish_generation(outcome))
    }
}
