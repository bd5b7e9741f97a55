use chrono::TimeDelta;

/// Minutes added to the construction time to produce the default `auth.expires`.
pub const DEFAULT_EXPIRATION_MINUTES: u32 = 120;

/// Settings applied when an `AssemblyBuilder` is constructed.
///
/// The expiry window is bounded by `u32` minutes so adding it to the current
/// time cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    default_expiration: TimeDelta,
}

impl BuilderConfig {
    pub fn with_expiration_minutes(minutes: u32) -> Self {
        Self {
            default_expiration: TimeDelta::minutes(i64::from(minutes)),
        }
    }

    /// Offset from "now" used for the initial auth expiry.
    pub fn default_expiration(&self) -> TimeDelta {
        self.default_expiration
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::with_expiration_minutes(DEFAULT_EXPIRATION_MINUTES)
    }
}
