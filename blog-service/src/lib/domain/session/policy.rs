use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::session::models::Session;
use crate::domain::session::models::SessionId;

/// Outcome of the login transition for a user's existing session state.
#[derive(Debug)]
pub enum LoginDecision {
    /// The user already holds a live session; hand it back unchanged.
    Reuse(Session),
    /// The held session has expired; delete it, then mint a fresh one.
    ReplaceExpired(SessionId),
    /// No session held; mint a fresh one.
    IssueNew,
}

/// Session lifetime policy.
///
/// Owns the TTL and the reuse-or-reissue login transition. Both are
/// pure functions of the session record and a caller-supplied clock
/// reading, so the policy is testable without storage or transport.
#[derive(Debug, Clone)]
pub struct SessionPolicy {
    ttl: Duration,
}

impl SessionPolicy {
    /// Create a policy with an explicit TTL.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Create a policy from a TTL in hours, as configured.
    pub fn from_hours(hours: i64) -> Self {
        Self::new(Duration::hours(hours))
    }

    /// Maximum session age under this policy.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether the session is past its lifetime at the given instant.
    ///
    /// Age exactly equal to the TTL counts as expired.
    pub fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.created_at >= self.ttl
    }

    /// Login transition over the user's existing session, if any.
    ///
    /// # Arguments
    /// * `existing` - The user's current session record, when one exists
    /// * `now` - Clock reading the decision is evaluated at
    ///
    /// # Returns
    /// The action login must take to uphold at most one live token per user
    pub fn decide_login(&self, existing: Option<Session>, now: DateTime<Utc>) -> LoginDecision {
        match existing {
            Some(session) if !self.is_expired(&session, now) => LoginDecision::Reuse(session),
            Some(session) => LoginDecision::ReplaceExpired(session.id),
            None => LoginDecision::IssueNew,
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenGenerator;
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::models::UserId;

    fn session_created_at(created_at: DateTime<Utc>) -> Session {
        Session {
            id: SessionId(Uuid::new_v4()),
            user_id: UserId::new(),
            token: TokenGenerator::new().generate(),
            created_at,
        }
    }

    #[test]
    fn test_fresh_session_is_not_expired() {
        let policy = SessionPolicy::from_hours(24);
        let now = Utc::now();
        let session = session_created_at(now - Duration::hours(1));

        assert!(!policy.is_expired(&session, now));
    }

    #[test]
    fn test_session_at_exact_ttl_is_expired() {
        let policy = SessionPolicy::from_hours(24);
        let now = Utc::now();
        let session = session_created_at(now - Duration::hours(24));

        assert!(policy.is_expired(&session, now));
    }

    #[test]
    fn test_session_past_ttl_is_expired() {
        let policy = SessionPolicy::from_hours(24);
        let now = Utc::now();
        let session = session_created_at(now - Duration::hours(25));

        assert!(policy.is_expired(&session, now));
    }

    #[test]
    fn test_decide_login_without_session_issues_new() {
        let policy = SessionPolicy::from_hours(24);

        assert!(matches!(
            policy.decide_login(None, Utc::now()),
            LoginDecision::IssueNew
        ));
    }

    #[test]
    fn test_decide_login_with_live_session_reuses_it() {
        let policy = SessionPolicy::from_hours(24);
        let now = Utc::now();
        let session = session_created_at(now - Duration::hours(23));
        let session_id = session.id;

        match policy.decide_login(Some(session), now) {
            LoginDecision::Reuse(reused) => assert_eq!(reused.id, session_id),
            other => panic!("Expected Reuse, got {:?}", other),
        }
    }

    #[test]
    fn test_decide_login_with_expired_session_replaces_it() {
        let policy = SessionPolicy::from_hours(24);
        let now = Utc::now();
        let session = session_created_at(now - Duration::hours(24));
        let session_id = session.id;

        match policy.decide_login(Some(session), now) {
            LoginDecision::ReplaceExpired(stale_id) => assert_eq!(stale_id, session_id),
            other => panic!("Expected ReplaceExpired, got {:?}", other),
        }
    }
}
