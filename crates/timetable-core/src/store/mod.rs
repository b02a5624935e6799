//! Timetable State Store
//!
//! Owns the active configuration, remote data, loading/error flags and week
//! navigation. The UI reads [`StoreView`]s and calls the actions below;
//! nothing else mutates this state.
//!
//! Every fetching action takes a request ticket. Only the latest ticket may
//! commit its response, so a slow reply can never overwrite a newer state.
//! Loading flags belong to the ticket that raised them.

mod state;


use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{ClassConfig, TeacherAnnotations, Week};
use crate::error::{LayoutError, StoreError};
use crate::layout::{build_period_rows, PeriodRow};
use crate::service::TimetableService;
use crate::storage::{KeyValueStore, CLASS_CONFIG_KEY, TEACHER_INFO_KEY};

pub use state::StoreView;
use state::StoreState;

/// Called with a fresh view after every state transition.
///
/// Listeners run while the listener list is locked: they may read the store
/// but must not call [`TimetableStore::subscribe`].
pub type Listener = Box<dyn Fn(&StoreView) + Send + Sync>;

/// What `change_week` decided to do, under the lock.
enum WeekStep {
    /// Already showing the requested week.
    Stay,
    /// Already showing the requested week; a pending change away from it was dropped.
    Cancelled,
    /// A change to the same week is already in flight.
    InFlight,
    Fetch { ticket: u64, config: ClassConfig },
}

pub struct TimetableStore<S, K> {
    service: S,
    storage: K,
    state: Mutex<StoreState>,
    listeners: Mutex<Vec<Listener>>,
}

impl<S, K> TimetableStore<S, K>
where
    S: TimetableService,
    K: KeyValueStore,
{
    /// New store with default config, no data and `is_loading` set.
    /// Call [`initialize`](Self::initialize) to load persisted state.
    pub fn new(service: S, storage: K) -> Self {
        Self {
            service,
            storage,
            state: Mutex::new(StoreState::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    // ========================
    // Reading
    // ========================

    pub fn view(&self) -> StoreView {
        self.lock().view()
    }

    pub fn config(&self) -> ClassConfig {
        self.lock().config.clone()
    }

    pub fn is_next_week(&self) -> bool {
        self.lock().week.is_next()
    }

    /// Note for `subject` under the active config.
    pub fn teacher_info(&self, subject: &str) -> Option<String> {
        let state = self.lock();
        state
            .annotations
            .get(&state.config, subject)
            .map(str::to_string)
    }

    /// Display rows for the current timetable; empty while nothing is loaded.
    pub fn period_rows(&self) -> Result<Vec<PeriodRow>, LayoutError> {
        let state = self.lock();
        match &state.timetable {
            Some(snapshot) => build_period_rows(snapshot, state.config.lunch_after),
            None => Ok(Vec::new()),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&StoreView) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    // ========================
    // Lifecycle
    // ========================

    /// Load persisted config and notes, then fetch the current week.
    ///
    /// Malformed or unreadable storage falls back to defaults. A failed fetch
    /// only sets `error`; the loaded config stays active.
    pub async fn initialize(&self) {
        let config = self
            .load::<ClassConfig>(CLASS_CONFIG_KEY)
            .unwrap_or_default();
        let annotations = self
            .load::<TeacherAnnotations>(TEACHER_INFO_KEY)
            .unwrap_or_default();

        let ticket = self.update(|s| {
            s.config = config.clone();
            s.annotations = annotations;
            s.temp_config = None;
            let ticket = s.issue_ticket();
            s.begin_loading(ticket);
            ticket
        });
        tracing::debug!(ticket, key = %config.annotation_key(), "initializing timetable store");

        let result = self.service.fetch_week(&config, Week::Current).await;

        self.update(|s| {
            if s.is_latest(ticket) {
                match result {
                    Ok(data) => {
                        s.timetable = Some(data);
                        s.week = Week::Current;
                        s.error = None;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "initial timetable fetch failed");
                        s.error = Some(e.load_message());
                    }
                }
            } else {
                tracing::warn!(ticket, "dropping stale initial timetable response");
            }
            s.end_loading(ticket);
        });
    }

    // ========================
    // Fetching
    // ========================

    /// Refetch for `config` (default: the active one) at the current week.
    ///
    /// Replaces the timetable on success. On failure the previous timetable
    /// is kept, `error` is set and the failure is returned.
    pub async fn fetch_timetable(&self, config: Option<ClassConfig>) -> Result<(), StoreError> {
        let (ticket, config, week) = self.update(|s| {
            let ticket = s.issue_ticket();
            s.begin_loading(ticket);
            s.error = None;
            (ticket, config.unwrap_or_else(|| s.config.clone()), s.week)
        });
        tracing::debug!(ticket, week = week.as_param(), "fetching timetable");

        let result = self.service.fetch_week(&config, week).await;

        self.update(|s| {
            let outcome = if !s.is_latest(ticket) {
                tracing::warn!(ticket, "dropping stale timetable response");
                Err(StoreError::Superseded)
            } else {
                match result {
                    Ok(data) => {
                        s.timetable = Some(data);
                        s.error = None;
                        Ok(())
                    }
                    Err(e) => {
                        s.error = Some(e.load_message());
                        Err(e.into())
                    }
                }
            };
            s.end_loading(ticket);
            outcome
        })
    }

    /// Switch between the current and next week.
    ///
    /// No-op when the requested week is already shown. The week flag and the
    /// new timetable are committed together, only on success.
    pub async fn change_week(&self, is_next: bool) -> Result<(), StoreError> {
        let target = Week::from_is_next(is_next);

        let step = {
            let mut s = self.lock();
            let pending_change = s.week_change;
            // A pending change whose ticket was overtaken can no longer commit.
            let pending_live = matches!(pending_change, Some((owner, _)) if s.is_latest(owner));
            if s.week == target {
                match pending_change {
                    Some((_, pending)) if pending != target => {
                        if pending_live {
                            s.issue_ticket();
                        }
                        s.is_week_change_loading = false;
                        s.week_change = None;
                        WeekStep::Cancelled
                    }
                    _ => WeekStep::Stay,
                }
            } else if pending_live && matches!(pending_change, Some((_, pending)) if pending == target) {
                WeekStep::InFlight
            } else {
                let ticket = s.issue_ticket();
                s.begin_week_change(ticket, target);
                WeekStep::Fetch {
                    ticket,
                    config: s.config.clone(),
                }
            }
        };

        let (ticket, config) = match step {
            WeekStep::Stay | WeekStep::InFlight => return Ok(()),
            WeekStep::Cancelled => {
                tracing::debug!(week = target.as_param(), "cancelled pending week change");
                self.notify();
                return Ok(());
            }
            WeekStep::Fetch { ticket, config } => (ticket, config),
        };
        self.notify();
        tracing::debug!(ticket, week = target.as_param(), "changing week");

        let result = self.service.fetch_week(&config, target).await;

        self.update(|s| {
            let outcome = if !s.is_latest(ticket) {
                tracing::warn!(ticket, "dropping stale week change response");
                Err(StoreError::Superseded)
            } else {
                match result {
                    Ok(data) => {
                        s.timetable = Some(data);
                        s.week = target;
                        s.error = None;
                        Ok(())
                    }
                    Err(e) => {
                        s.error = Some(e.load_message());
                        Err(e.into())
                    }
                }
            };
            s.end_week_change(ticket);
            outcome
        })
    }

    // ========================
    // Reconfiguration
    // ========================

    /// Stage a draft. Touches neither the active config nor the network.
    pub fn set_temp_config(&self, draft: ClassConfig) {
        self.update(|s| s.temp_config = Some(draft));
    }

    pub fn reset_temp_config(&self) {
        self.update(|s| s.temp_config = None);
    }

    /// Show or hide the settings dialog. Hiding drops any unsaved draft;
    /// either way the current error is cleared.
    pub fn set_show_config(&self, show: bool) {
        self.update(|s| {
            s.show_config = show;
            if !show {
                s.temp_config = None;
            }
            s.error = None;
        });
    }

    /// Validate the staged draft against the service, then make it active.
    ///
    /// On success the draft is persisted, promoted together with its
    /// timetable, and the dialog closes. On failure the active config is left
    /// exactly as it was and the dialog stays open.
    pub async fn save_config(&self) -> Result<(), StoreError> {
        let (ticket, draft, week) = {
            let mut s = self.lock();
            let Some(draft) = s.temp_config.clone() else {
                return Err(StoreError::NoPendingConfig);
            };
            let ticket = s.issue_ticket();
            s.begin_loading(ticket);
            s.error = None;
            (ticket, draft, s.week)
        };
        self.notify();
        tracing::debug!(ticket, key = %draft.annotation_key(), "validating new config");

        let result = self.service.fetch_week(&draft, week).await;

        self.update(|s| {
            let outcome = if !s.is_latest(ticket) {
                tracing::warn!(ticket, "dropping stale config validation response");
                Err(StoreError::Superseded)
            } else {
                match result {
                    Ok(data) => {
                        self.persist(CLASS_CONFIG_KEY, &draft);
                        tracing::info!(
                            school = %draft.school,
                            grade = %draft.grade,
                            class = %draft.class_no,
                            "class config saved"
                        );
                        s.config = draft;
                        s.timetable = Some(data);
                        s.temp_config = None;
                        s.show_config = false;
                        s.error = None;
                        Ok(())
                    }
                    Err(e) => {
                        s.error = Some(e.save_message());
                        Err(e.into())
                    }
                }
            };
            s.end_loading(ticket);
            outcome
        })
    }

    // ========================
    // Teacher notes
    // ========================

    /// Store a note for `subject` under the active config and persist all notes.
    pub fn save_teacher_info(&self, subject: &str, note: &str) {
        self.update(|s| {
            s.annotations.set(&s.config, subject, note);
            self.persist(TEACHER_INFO_KEY, &s.annotations);
        });
    }

    // ========================
    // Internals
    // ========================

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate state, then notify listeners once the lock is released.
    fn update<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let result = f(&mut self.lock());
        self.notify();
        result
    }

    fn notify(&self) {
        let view = self.lock().view();
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&view);
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.storage.get(key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "ignoring malformed persisted value");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted value");
                None
            }
        }
    }

    /// Best-effort write; failures are logged and otherwise ignored.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize value for storage");
                return;
            }
        };
        if let Err(e) = self.storage.set(key, &json) {
            tracing::warn!(key, error = %e, "failed to persist value");
        }
    }
}
