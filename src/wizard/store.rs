use crate::wizard::WizardSession;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use uuid::Uuid;

/// In-memory home of every visitor's wizard, keyed by the id kept in their
/// session cookie. Nothing survives a restart, and wizards left idle are
/// dropped by `evict_idle_until_stopped`.
#[derive(Debug, Default)]
pub struct WizardStore {
    sessions: RwLock<HashMap<Uuid, Arc<WizardSession>>>,
}

impl WizardStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self))]
    pub fn create(&self) -> Uuid {
        let wizard_id = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(wizard_id, Arc::new(WizardSession::new()));
        wizard_id
    }

    pub fn contains(&self, wizard_id: Uuid) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&wizard_id)
    }

    /// Returns the wizard for `wizard_id`, starting a fresh one when the id is
    /// unknown (e.g. the cookie outlived a restart).
    pub fn session(&self, wizard_id: Uuid) -> Arc<WizardSession> {
        if let Some(session) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&wizard_id)
        {
            return session.clone();
        }

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(wizard_id)
            .or_default()
            .clone()
    }

    /// Drops every wizard idle for at least `max_idle`, except those waiting
    /// on a generation. Returns how many were dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let before = sessions.len();
        sessions.retain(|_, session| session.is_generating() || session.idle_for() < max_idle);
        before - sessions.len()
    }
}

/// Sweeps the store for idle wizards until the task is dropped.
pub async fn evict_idle_until_stopped(store: Arc<WizardStore>, max_idle: Duration) {
    let mut interval = tokio::time::interval(sweep_period(max_idle));

    loop {
        interval.tick().await;

        let evicted = store.evict_idle(max_idle);
        if evicted > 0 {
            tracing::info!(evicted, "Evicted idle wizards");
        }
    }
}

// Often enough that a wizard never outlives its timeout by much
fn sweep_period(max_idle: Duration) -> Duration {
    (max_idle / 2).clamp(Duration::from_millis(100), Duration::from_secs(60))
}
