//! Account security policy: lockout thresholds and derived account state
//!
//! The account state is never stored as an enum; it is derived from the
//! `locked_until` and `is_active` columns on each evaluation. A lock
//! that has expired simply stops deriving as `Locked` — nothing clears
//! the column until the next successful login.

use crate::config::Config;

/// Thresholds governing login throttling and token lifetime.
///
/// Built from [`Config`] at startup; handlers never reach for
/// constants directly.
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    /// Failed password attempts before the account locks
    pub max_failed_attempts: i32,
    /// Lockout window in milliseconds
    pub lockout_ms: i64,
    /// Access token lifetime in milliseconds
    pub token_ttl_ms: i64,
}

impl SecurityPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_failed_attempts: config.max_failed_attempts,
            lockout_ms: config.lockout_minutes * 60 * 1000,
            token_ttl_ms: config.token_ttl_hours * 60 * 60 * 1000,
        }
    }

    /// Counter/lock transition for one more failed password attempt.
    ///
    /// Below the threshold the counter rises; on reaching it the lock
    /// carries the penalty and the counter resets to zero.
    pub fn on_failed_attempt(&self, failed_login_attempts: i32, now: i64) -> FailedAttempt {
        let attempts = failed_login_attempts + 1;
        if attempts >= self.max_failed_attempts {
            FailedAttempt {
                failed_login_attempts: 0,
                locked_until: Some(now + self.lockout_ms),
            }
        } else {
            FailedAttempt {
                failed_login_attempts: attempts,
                locked_until: None,
            }
        }
    }
}

/// Counter/lock values to persist after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedAttempt {
    pub failed_login_attempts: i32,
    pub locked_until: Option<i64>,
}

/// Account state derived from stored fields
///
/// `Locked` wins over `Inactive`: the lockout check runs before the
/// password is even verified, while deactivation is only reported once
/// the password is known good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Locked { until: i64 },
    Inactive,
}

impl AccountState {
    pub fn derive(is_active: bool, locked_until: Option<i64>, now: i64) -> Self {
        match locked_until {
            Some(until) if until > now => Self::Locked { until },
            _ if !is_active => Self::Inactive,
            _ => Self::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SecurityPolicy {
        SecurityPolicy {
            max_failed_attempts: 5,
            lockout_ms: 15 * 60 * 1000,
            token_ttl_ms: 8 * 60 * 60 * 1000,
        }
    }

    #[test]
    fn test_derive_active() {
        assert_eq!(AccountState::derive(true, None, 1000), AccountState::Active);
    }

    #[test]
    fn test_derive_locked_while_window_open() {
        assert_eq!(
            AccountState::derive(true, Some(2000), 1000),
            AccountState::Locked { until: 2000 }
        );
    }

    #[test]
    fn test_derive_expired_lock_is_not_locked() {
        // The column still holds a value; only the clock matters
        assert_eq!(
            AccountState::derive(true, Some(2000), 2000),
            AccountState::Active
        );
        assert_eq!(
            AccountState::derive(true, Some(2000), 3000),
            AccountState::Active
        );
    }

    #[test]
    fn test_derive_inactive() {
        assert_eq!(
            AccountState::derive(false, None, 1000),
            AccountState::Inactive
        );
    }

    #[test]
    fn test_locked_wins_over_inactive() {
        assert_eq!(
            AccountState::derive(false, Some(2000), 1000),
            AccountState::Locked { until: 2000 }
        );
    }

    #[test]
    fn test_failed_attempt_below_threshold_increments() {
        let p = policy();
        let outcome = p.on_failed_attempt(0, 1000);
        assert_eq!(
            outcome,
            FailedAttempt {
                failed_login_attempts: 1,
                locked_until: None
            }
        );
        let outcome = p.on_failed_attempt(3, 1000);
        assert_eq!(
            outcome,
            FailedAttempt {
                failed_login_attempts: 4,
                locked_until: None
            }
        );
    }

    #[test]
    fn test_failed_attempt_at_threshold_locks_and_resets() {
        let p = policy();
        let outcome = p.on_failed_attempt(4, 1000);
        assert_eq!(outcome.failed_login_attempts, 0);
        assert_eq!(outcome.locked_until, Some(1000 + p.lockout_ms));
    }

    #[test]
    fn test_lockout_scenario_five_failures_then_wait() {
        // Five consecutive wrong passwords lock the account; after the
        // window elapses the state derives Active again.
        let p = policy();
        let now = 1_000_000;

        let mut attempts = 0;
        let mut locked_until = None;
        for _ in 0..5 {
            let outcome = p.on_failed_attempt(attempts, now);
            attempts = outcome.failed_login_attempts;
            if outcome.locked_until.is_some() {
                locked_until = outcome.locked_until;
            }
        }

        assert_eq!(attempts, 0);
        let until = locked_until.expect("fifth failure must lock");
        assert_eq!(until, now + p.lockout_ms);

        // Sixth attempt inside the window is refused before password checks
        assert_eq!(
            AccountState::derive(true, locked_until, now + 1),
            AccountState::Locked { until }
        );

        // Past the window the account is usable again
        assert_eq!(
            AccountState::derive(true, locked_until, until + 1),
            AccountState::Active
        );
    }

    #[test]
    fn test_from_config_converts_units() {
        let config = crate::config::Config {
            database_url: "postgres://localhost/test".into(),
            http_port: 8080,
            environment: "development".into(),
            jwt_secret: "secret".into(),
            token_ttl_hours: 8,
            max_failed_attempts: 5,
            lockout_minutes: 15,
        };
        let p = SecurityPolicy::from_config(&config);
        assert_eq!(p.max_failed_attempts, 5);
        assert_eq!(p.lockout_ms, 900_000);
        assert_eq!(p.token_ttl_ms, 28_800_000);
    }
}
