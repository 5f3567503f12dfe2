//! Stay-length policy for candidate selections.

/// Default maximum stay: days between check-in and check-out.
pub const DEFAULT_MAX_STAY_DAYS: i64 = 3;

/// Configurable bounds applied when validating a candidate stay.
///
/// The maximum is floored at one night at construction — a policy that
/// admitted no stay at all would force the check-out clamp to produce an
/// invalid pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPolicy {
    max_stay_days: i64,
}

impl Default for StayPolicy {
    fn default() -> Self {
        Self {
            max_stay_days: DEFAULT_MAX_STAY_DAYS,
        }
    }
}

impl StayPolicy {
    /// Policy with a custom maximum stay, floored at one night.
    pub fn with_max_stay_days(max_stay_days: i64) -> Self {
        Self {
            max_stay_days: max_stay_days.max(1),
        }
    }

    /// Maximum allowed `check_out - check_in`, in whole days.
    pub fn max_stay_days(&self) -> i64 {
        self.max_stay_days
    }
}
