//! Session registry
//!
//! Maps session ids to their state. Each session sits behind its own
//! mutex, so one request at a time touches a session's lists while other
//! sessions proceed in parallel. The outer map lock is only held long
//! enough to find or insert a handle.

use chrono::{Duration, Utc};
use session_todos::ListStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::session::{Session, SessionId};

type SessionHandle = Arc<Mutex<Session>>;

/// All live sessions of one process
pub struct SessionRegistry {
    config: RegistryConfig,
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl SessionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Get the session's handle, creating an empty session on first access
    async fn handle(&self, id: &SessionId) -> SessionHandle {
        {
            let sessions = self.sessions.read().await;
            if let Some(handle) = sessions.get(id) {
                return Arc::clone(handle);
            }
        }

        let mut sessions = self.sessions.write().await;
        let limits = self.config.name_limits;
        let handle = sessions.entry(id.clone()).or_insert_with(|| {
            log::info!("session {id} started");
            Arc::new(Mutex::new(Session::new(limits)))
        });
        Arc::clone(handle)
    }

    async fn existing(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).map(Arc::clone)
    }

    /// True while `handle` is still the one registered under `id`
    async fn is_current(&self, id: &SessionId, handle: &SessionHandle) -> bool {
        self.sessions
            .read()
            .await
            .get(id)
            .is_some_and(|current| Arc::ptr_eq(current, handle))
    }

    /// Run `f` with exclusive access to the session
    ///
    /// If the session is ended or expired while this call waits for its
    /// lock, the call starts over on the session now registered under `id`,
    /// so `f` never runs against a detached session.
    pub async fn with_session<F, R>(&self, id: &SessionId, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        loop {
            let handle = self.handle(id).await;
            let mut session = handle.lock().await;
            if !self.is_current(id, &handle).await {
                log::debug!("session {id} was replaced while waiting, retrying");
                continue;
            }
            session.touch();
            return f(&mut *session);
        }
    }

    /// Run `f` with exclusive access to the session's list store
    pub async fn with_lists<F, R>(&self, id: &SessionId, f: F) -> R
    where
        F: FnOnce(&mut ListStore) -> R,
    {
        self.with_session(id, |session| f(session.lists_mut())).await
    }

    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Discard the session. Returns false if it did not exist.
    pub async fn end_session(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            log::info!("session {id} ended");
        }
        removed
    }

    /// Serialize an existing session's lists
    pub async fn snapshot(&self, id: &SessionId) -> Result<String> {
        let handle = self
            .existing(id)
            .await
            .ok_or_else(|| RegistryError::UnknownSession(id.clone()))?;
        let session = handle.lock().await;
        if !self.is_current(id, &handle).await {
            return Err(RegistryError::UnknownSession(id.clone()));
        }
        Ok(session.lists().to_json()?)
    }

    /// Replace the session's lists with a validated snapshot. On error the
    /// session keeps its current lists.
    pub async fn restore(&self, id: &SessionId, json: &str) -> Result<()> {
        let lists = ListStore::from_json(json, self.config.name_limits)?;
        self.with_session(id, |session| session.replace_lists(lists)).await;
        log::debug!("session {id} restored from snapshot");
        Ok(())
    }

    /// Drop sessions idle for longer than `max_idle`. Sessions in use at
    /// the moment of the sweep are kept. Returns how many were dropped.
    pub async fn expire_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => session.last_accessed() >= cutoff,
            Err(_) => true,
        });
        let expired = before - sessions.len();
        if expired > 0 {
            log::info!("expired {expired} idle sessions");
        }
        expired
    }
}
