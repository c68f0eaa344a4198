//! Application state: the in-memory session store and the per-session flow
//! (intro -> answering -> results).
//!
//! A session can be driven from several surfaces at once (HTTP and one or
//! more WebSocket connections attached to the same id). Every mutation takes
//! the store's write lock, and validity is derived from the committed
//! responses when a view is built, never stored alongside them.
//!
//! Sessions that nobody has read or written for `idle_ttl_secs` are evicted,
//! either when a new session is created or by the periodic sweep.

use std::{
    collections::HashMap,
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::{load_app_config_from_env, AppConfig};
use crate::domain::{ResponseSet, ScoreResult, Tag};
use crate::error::{Error, Result};
use crate::logic::{is_complete, reset, score};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Answering,
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Intro => "intro",
            Phase::Answering => "answering",
            Phase::Results => "results",
        };
        f.write_str(s)
    }
}

/// One respondent attempt.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub phase: Phase,
    pub responses: ResponseSet,
    /// Set on a successful submit, dropped on reset.
    pub result: Option<ScoreResult>,
    /// Last time any surface read or changed this session.
    pub last_touched: Instant,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            phase: Phase::Intro,
            responses: reset(),
            result: None,
            last_touched: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_touched = Instant::now();
    }

    pub fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) > ttl
    }

    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            Phase::Intro => {
                self.phase = Phase::Answering;
                Ok(())
            }
            // Starting twice is harmless.
            Phase::Answering => Ok(()),
            actual => Err(Error::WrongPhase { action: "start", actual }),
        }
    }

    pub fn record_rank(&mut self, question_index: usize, tag: Tag, value: u8) -> Result<()> {
        if self.phase != Phase::Answering {
            return Err(Error::WrongPhase { action: "record_rank", actual: self.phase });
        }
        self.responses.record_rank(question_index, tag, value)
    }

    /// Score the responses and move to the result view.
    pub fn submit(&mut self) -> Result<ScoreResult> {
        match self.phase {
            Phase::Answering => {
                let result = score(&self.responses)?;
                self.result = Some(result);
                self.phase = Phase::Results;
                Ok(result)
            }
            Phase::Results => self
                .result
                .ok_or(Error::WrongPhase { action: "submit", actual: Phase::Results }),
            Phase::Intro => Err(Error::WrongPhase { action: "submit", actual: Phase::Intro }),
        }
    }

    pub fn reset(&mut self) {
        self.responses.reset();
        self.result = None;
        self.phase = Phase::Intro;
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.responses)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
    pub config: AppConfig,
}

impl AppState {
    /// Build state from env: load the optional TOML config, start with no sessions.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_app_config_from_env().unwrap_or_default();
        info!(target: "kolb_backend", static_dir = %config.static_dir, max_sessions = config.sessions.max_sessions, idle_ttl_secs = config.sessions.idle_ttl_secs, "Application state ready");
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    #[instrument(level = "info", skip(self))]
    pub async fn create_session(&self) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions);
        let max = self.config.sessions.max_sessions;
        if sessions.len() >= max {
            warn!(target: "session", max, "Session limit reached; refusing new session");
            return Err(Error::SessionLimit(max));
        }
        let session = Session::new(Uuid::new_v4().to_string());
        sessions.insert(session.id.clone(), session.clone());
        info!(target: "session", id = %session.id, active = sessions.len(), "Session created");
        Ok(session)
    }

    /// Drop every session idle for longer than the configured TTL.
    /// Returns how many were evicted.
    #[instrument(level = "debug", skip(self))]
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions)
    }

    fn evict_idle_locked(&self, sessions: &mut HashMap<String, Session>) -> usize {
        let ttl = self.config.sessions.idle_ttl();
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(target: "session", evicted, active = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get_session(&self, id: &str) -> Result<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        session.touch();
        Ok(session.clone())
    }

    /// Apply `f` to a session under the write lock and return the committed
    /// session together with `f`'s output.
    pub async fn update_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> Result<T>,
    ) -> Result<(Session, T)> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        session.touch();
        let out = f(&mut *session)?;
        Ok((session.clone(), out))
    }

    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn start(&self, id: &str) -> Result<Session> {
        let (session, ()) = self.update_session(id, Session::start).await?;
        info!(target: "session", %id, "Questionnaire started");
        Ok(session)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn record_rank(&self, id: &str, question_index: usize, tag: Tag, value: u8) -> Result<Session> {
        let (session, ()) = self
            .update_session(id, |s| s.record_rank(question_index, tag, value))
            .await?;
        Ok(session)
    }

    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn submit(&self, id: &str) -> Result<(Session, ScoreResult)> {
        match self.update_session(id, Session::submit).await {
            Ok((session, result)) => {
                info!(target: "session", %id, style = %result.style, x = result.axes.x, y = result.axes.y, "Session scored");
                Ok((session, result))
            }
            Err(e) => {
                warn!(target: "session", %id, error = %e, "Submit rejected");
                Err(e)
            }
        }
    }

    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn reset(&self, id: &str) -> Result<Session> {
        let (session, ()) = self
            .update_session(id, |s| {
                s.reset();
                Ok(())
            })
            .await?;
        info!(target: "session", %id, "Session reset");
        Ok(session)
    }

    #[instrument(level = "info", skip(self), fields(%id))]
    pub async fn remove_session(&self, id: &str) -> Result<()> {
        let removed = self.sessions.write().await.remove(id);
        match removed {
            Some(_) => {
                info!(target: "session", %id, "Session discarded");
                Ok(())
            }
            None => Err(Error::UnknownSession(id.to_string())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}
