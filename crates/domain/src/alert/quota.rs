use serde_json::Value;

/// Per-observable result quota shared across the two retrieval tiers.
///
/// Alerts are admitted first. Hunting only runs if the alerts did not
/// already fill the quota, and its result cap is the remaining budget.
#[derive(Debug)]
pub struct QuotaState {
    limit: usize,
    consumed: usize,
}

impl QuotaState {
    pub fn new(limit: usize) -> Self {
        Self { limit, consumed: 0 }
    }

    /// Admit alerts up to the remaining budget, truncating the excess.
    pub fn admit_alerts(&mut self, mut alerts: Vec<Value>) -> Vec<Value> {
        let remaining = self.limit - self.consumed;
        alerts.truncate(remaining);
        self.consumed += alerts.len();
        alerts
    }

    /// Remaining budget for the hunting fallback, `None` when the
    /// quota is already exhausted and hunting must be skipped.
    pub fn hunting_budget(&self) -> Option<usize> {
        let remaining = self.limit - self.consumed;
        if remaining == 0 { None } else { Some(remaining) }
    }

    /// Admit hunting events up to the remaining budget.
    pub fn admit_events(&mut self, mut events: Vec<Value>) -> Vec<Value> {
        let remaining = self.limit - self.consumed;
        events.truncate(remaining);
        self.consumed += events.len();
        events
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({"id": i})).collect()
    }

    #[test]
    fn alerts_beyond_the_limit_are_truncated() {
        let mut quota = QuotaState::new(3);
        let kept = quota.admit_alerts(items(5));
        assert_eq!(kept.len(), 3);
        assert_eq!(quota.consumed(), 3);
    }

    #[test]
    fn exhausted_quota_skips_hunting() {
        let mut quota = QuotaState::new(3);
        quota.admit_alerts(items(3));
        assert_eq!(quota.hunting_budget(), None);
    }

    #[test]
    fn partial_alerts_leave_budget_for_hunting() {
        let mut quota = QuotaState::new(10);
        quota.admit_alerts(items(4));
        assert_eq!(quota.hunting_budget(), Some(6));
    }

    #[test]
    fn no_alerts_leaves_full_budget() {
        let mut quota = QuotaState::new(5);
        quota.admit_alerts(Vec::new());
        assert_eq!(quota.hunting_budget(), Some(5));
    }

    #[test]
    fn events_are_capped_by_remaining_budget() {
        let mut quota = QuotaState::new(5);
        quota.admit_alerts(items(2));
        let kept = quota.admit_events(items(10));
        assert_eq!(kept.len(), 3);
        assert_eq!(quota.consumed(), 5);
    }
}
