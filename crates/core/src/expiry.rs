//! Idle-expiry arithmetic and the warning prompt state machine
//!
//! Both types are pure: they take `now` as an argument and own no timers.
//! The browser drives them from a `gloo` interval, native code from
//! [`crate::ExpiryMonitor`].

use crate::config::SessionConfig;

/// Where a session stands relative to its idle lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// More than the warning threshold remains
    Active,
    /// Inside the warning window; `seconds_left` is rounded up
    Warning { seconds_left: u64 },
    /// Lifetime used up
    Expired,
}

impl ExpiryStatus {
    #[must_use]
    pub const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }
}

/// Lifetime and warning window in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    lifetime_ms: i64,
    threshold_ms: i64,
}

impl ExpiryPolicy {
    #[must_use]
    pub const fn new(lifetime_ms: i64, threshold_ms: i64) -> Self {
        Self {
            lifetime_ms,
            threshold_ms,
        }
    }

    #[must_use]
    pub const fn lifetime_ms(&self) -> i64 {
        self.lifetime_ms
    }

    /// `lifetime - (now - last_activity)`; negative once expired
    #[must_use]
    pub const fn time_until_expiry_ms(&self, now_ms: i64, last_activity_ms: i64) -> i64 {
        self.lifetime_ms
            .saturating_sub(now_ms.saturating_sub(last_activity_ms))
    }

    #[must_use]
    pub const fn is_expired(&self, now_ms: i64, last_activity_ms: i64) -> bool {
        self.time_until_expiry_ms(now_ms, last_activity_ms) <= 0
    }

    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn status(&self, now_ms: i64, last_activity_ms: i64) -> ExpiryStatus {
        let remaining = self.time_until_expiry_ms(now_ms, last_activity_ms);
        if remaining <= 0 {
            ExpiryStatus::Expired
        } else if remaining <= self.threshold_ms {
            // remaining > 0 here, so the cast is lossless
            ExpiryStatus::Warning {
                seconds_left: (remaining as u64).div_ceil(1000),
            }
        } else {
            ExpiryStatus::Active
        }
    }
}

impl From<&SessionConfig> for ExpiryPolicy {
    fn from(config: &SessionConfig) -> Self {
        Self::new(
            secs_to_ms(config.session_lifetime_secs),
            secs_to_ms(config.warning_threshold_secs),
        )
    }
}

/// Clamps instead of wrapping on absurd configured values
fn secs_to_ms(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX).saturating_mul(1000)
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

/// What the warning prompt should show after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningView {
    pub visible: bool,
    pub seconds_left: u64,
    pub status: ExpiryStatus,
}

impl WarningView {
    pub const HIDDEN: Self = Self {
        visible: false,
        seconds_left: 0,
        status: ExpiryStatus::Active,
    };

    /// `m:ss` countdown label
    #[must_use]
    pub fn countdown(&self) -> String {
        format!("{}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

impl Default for WarningView {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Warning prompt state: visibility plus the user's dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWarning {
    policy: ExpiryPolicy,
    dismissed: bool,
}

impl ExpiryWarning {
    #[must_use]
    pub const fn new(policy: ExpiryPolicy) -> Self {
        Self {
            policy,
            dismissed: false,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &ExpiryPolicy {
        &self.policy
    }

    /// Re-evaluate against the clock
    pub fn tick(&mut self, now_ms: i64, last_activity_ms: i64) -> WarningView {
        let status = self.policy.status(now_ms, last_activity_ms);
        match status {
            ExpiryStatus::Warning { seconds_left } => WarningView {
                visible: !self.dismissed,
                seconds_left,
                status,
            },
            ExpiryStatus::Active | ExpiryStatus::Expired => {
                // leaving the window re-arms the prompt for the next approach
                self.dismissed = false;
                WarningView {
                    visible: false,
                    seconds_left: 0,
                    status,
                }
            }
        }
    }

    /// Hide the prompt without touching the timer
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Reset after a successful keep-alive
    pub fn extended(&mut self) -> WarningView {
        self.dismissed = false;
        WarningView::HIDDEN
    }

    #[must_use]
    pub const fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}

impl Default for ExpiryWarning {
    fn default() -> Self {
        Self::new(ExpiryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = 60_000;
    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_time_until_expiry() {
        let policy = ExpiryPolicy::default();
        assert_eq!(policy.time_until_expiry_ms(NOW, NOW), 30 * MIN);
        assert_eq!(policy.time_until_expiry_ms(NOW, NOW - 26 * MIN), 4 * MIN);
        assert_eq!(policy.time_until_expiry_ms(NOW, NOW - 31 * MIN), -MIN);
    }

    #[test]
    fn test_oversized_config_saturates() {
        let config = SessionConfig {
            session_lifetime_secs: u64::MAX,
            ..SessionConfig::default()
        };
        let policy = ExpiryPolicy::from(&config);
        assert_eq!(policy.lifetime_ms(), i64::MAX);
        assert_eq!(policy.status(NOW, NOW - 26 * MIN), ExpiryStatus::Active);
        // activity stamped in the future must not overflow either
        assert_eq!(policy.time_until_expiry_ms(NOW, i64::MAX), i64::MAX);
    }

    #[test]
    fn test_warning_at_twenty_six_minutes_idle() {
        let mut warning = ExpiryWarning::default();
        let view = warning.tick(NOW, NOW - 26 * MIN);
        assert!(view.visible);
        assert_eq!(view.seconds_left, 240);
        assert_eq!(view.countdown(), "4:00");
    }

    #[test]
    fn test_visibility_is_exactly_the_warning_window() {
        let policy = ExpiryPolicy::default();
        let mut warning = ExpiryWarning::new(policy);
        // sweep idle time across the window edges in 500ms steps
        for idle_ms in (24 * MIN..=31 * MIN).step_by(500) {
            let remaining = policy.time_until_expiry_ms(NOW, NOW - idle_ms);
            let expected = remaining > 0 && remaining <= 5 * MIN;
            let view = warning.tick(NOW, NOW - idle_ms);
            assert_eq!(view.visible, expected, "idle {idle_ms}ms");
        }
    }

    #[test]
    fn test_status_boundaries() {
        let policy = ExpiryPolicy::default();
        assert_eq!(policy.status(NOW, NOW - 25 * MIN + 1), ExpiryStatus::Active);
        assert_eq!(
            policy.status(NOW, NOW - 25 * MIN),
            ExpiryStatus::Warning { seconds_left: 300 }
        );
        assert_eq!(
            policy.status(NOW, NOW - 30 * MIN + 1),
            ExpiryStatus::Warning { seconds_left: 1 }
        );
        assert_eq!(policy.status(NOW, NOW - 30 * MIN), ExpiryStatus::Expired);
        assert!(policy.is_expired(NOW, NOW - 45 * MIN));
    }

    #[test]
    fn test_dismiss_hides_until_window_left() {
        let mut warning = ExpiryWarning::default();
        assert!(warning.tick(NOW, NOW - 26 * MIN).visible);

        warning.dismiss();
        let view = warning.tick(NOW + 1000, NOW - 26 * MIN);
        assert!(!view.visible);
        // timer keeps running underneath
        assert_eq!(view.seconds_left, 239);

        // activity moves the session out of the window, re-arming the prompt
        assert!(!warning.tick(NOW, NOW).visible);
        assert!(!warning.is_dismissed());
        assert!(warning.tick(NOW, NOW - 27 * MIN).visible);
    }

    #[test]
    fn test_extended_hides_prompt() {
        let mut warning = ExpiryWarning::default();
        warning.tick(NOW, NOW - 28 * MIN);
        warning.dismiss();
        assert_eq!(warning.extended(), WarningView::HIDDEN);
        assert!(!warning.is_dismissed());
        assert!(!warning.tick(NOW, NOW).visible);
    }
}
