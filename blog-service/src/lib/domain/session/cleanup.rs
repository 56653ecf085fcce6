use std::sync::Arc;

use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::policy::SessionPolicy;
use crate::domain::session::ports::SessionStore;

/// Background sweep for sessions that outlived the TTL.
///
/// Lookups already treat expired sessions as absent; the sweep only
/// reclaims the dead rows so the store does not grow without bound.
pub struct SessionCleanup {
    sessions: Arc<dyn SessionStore>,
    policy: SessionPolicy,
}

impl SessionCleanup {
    /// Create a cleanup task over a session store.
    pub fn new(sessions: Arc<dyn SessionStore>, policy: SessionPolicy) -> Self {
        Self { sessions, policy }
    }

    /// Delete sessions older than the TTL.
    ///
    /// # Returns
    /// Number of sessions removed
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn run(&self) -> Result<u64, SessionError> {
        let cutoff = Utc::now() - self.policy.ttl();
        let removed = self.sessions.delete_expired_before(cutoff).await?;

        if removed > 0 {
            tracing::info!(removed, "Purged expired sessions");
        }

        Ok(removed)
    }
}
