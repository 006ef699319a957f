use crate::constants::FINALIZATION_PERIOD_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConfig {
    /// Seconds an output root must age after being proposed before
    /// withdrawals proven against it can be finalized.
    pub finalization_period_seconds: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            finalization_period_seconds: FINALIZATION_PERIOD_SECONDS,
        }
    }
}

impl PortalConfig {
    /// Whether an output proposed at `proposed_at` is final at `timestamp`.
    pub fn is_final(&self, proposed_at: u64, timestamp: u64) -> bool {
        timestamp > proposed_at.saturating_add(self.finalization_period_seconds)
    }
}
