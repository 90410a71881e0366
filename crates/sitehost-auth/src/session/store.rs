//! In-memory session table keyed by token digest.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use sitehost_core::config::SessionConfig;
use sitehost_entity::session::Session;

/// Number of random bytes in a session token.
const TOKEN_BYTES: usize = 32;

/// Generates a fresh opaque session token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// SHA-256 hex digest of a token. Raw tokens are never stored.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn minutes(value: u64) -> Duration {
    Duration::minutes(value.min(i32::MAX as u64) as i64)
}

fn hours(value: u64) -> Duration {
    Duration::hours(value.min(i32::MAX as u64) as i64)
}

/// Concurrent session table.
///
/// Entries are removed when found expired on lookup and by the periodic
/// sweep, so the table never grows with dead sessions for long.
#[derive(Debug)]
pub struct SessionStore {
    /// Sessions keyed by token digest.
    sessions: DashMap<String, Session>,
    /// Idle timeout.
    idle_timeout: Duration,
    /// Absolute timeout.
    absolute_timeout: Duration,
}

impl SessionStore {
    /// Creates an empty store with timeouts from `config`.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout: minutes(config.idle_timeout_minutes),
            absolute_timeout: hours(config.absolute_timeout_hours),
        }
    }

    /// Inserts a session under a newly generated token and returns the token.
    pub fn create(&self, session: Session) -> String {
        loop {
            let token = generate_token();
            let key = hash_token(&token);
            if let Entry::Vacant(slot) = self.sessions.entry(key) {
                slot.insert(session);
                return token;
            }
        }
    }

    /// Looks up a live session and refreshes its last activity.
    ///
    /// An expired session is removed and `None` is returned.
    pub fn resolve(&self, token: &str) -> Option<Session> {
        self.resolve_at(token, Utc::now())
    }

    pub(crate) fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> Option<Session> {
        let key = hash_token(token);

        {
            let mut entry = self.sessions.get_mut(&key)?;
            if !self.is_expired(&entry, now) {
                entry.last_activity = now;
                return Some(entry.clone());
            }
        }

        self.sessions
            .remove_if(&key, |_, session| self.is_expired(session, now));
        None
    }

    /// Removes and returns the session for `token`.
    pub fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.remove(&hash_token(token)).map(|(_, s)| s)
    }

    /// Removes every expired session and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub(crate) fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !self.is_expired(session, now));
        before.saturating_sub(self.sessions.len())
    }

    /// Number of sessions currently held, live or not yet swept.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        session.is_expired_at(now, self.idle_timeout, self.absolute_timeout)
    }
}
