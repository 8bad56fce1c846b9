//! Per-day cap on successful sketch generations.
//!
//! The check runs before any network call; the counter only moves after a
//! confirmed success, so failed jobs never eat into the allowance.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::store::KvStore;

const USAGE_KEY_PREFIX: &str = "sketch:usage:";
const RECORDED_KEY_PREFIX: &str = "sketch:recorded:";

/// Daily usage limiter over the key-value store. A `None` limit disables
/// the cap entirely.
#[derive(Clone)]
pub struct UsageLimiter {
    store: Arc<dyn KvStore>,
    limit: Option<u32>,
}

impl UsageLimiter {
    pub fn new(store: Arc<dyn KvStore>, limit: Option<u32>) -> Self {
        Self { store, limit }
    }

    /// Rejects the request when today's confirmed successes have reached
    /// the cap. Called before submission.
    pub fn check(&self, today: NaiveDate) -> Result<(), AppError> {
        let Some(limit) = self.limit else {
            return Ok(());
        };
        if self.count(today) >= limit {
            return Err(AppError::LimitReached { limit });
        }
        Ok(())
    }

    /// Today's confirmed success count.
    pub fn count(&self, today: NaiveDate) -> u32 {
        self.store
            .get(&usage_key(today))
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Records one confirmed success.
    pub fn record(&self, today: NaiveDate) {
        let key = usage_key(today);
        let next = self.count(today) + 1;
        self.store.set(&key, &next.to_string());
    }

    /// Records a success at most once per job id. The status endpoint can
    /// observe the same terminal job on several polls; only the first
    /// observation counts.
    pub fn record_job(&self, today: NaiveDate, job_id: &str) {
        let flag = format!("{RECORDED_KEY_PREFIX}{job_id}");
        if self.store.get(&flag).is_some() {
            return;
        }
        self.store.set(&flag, "1");
        self.record(today);
    }
}

fn usage_key(today: NaiveDate) -> String {
    format!("{USAGE_KEY_PREFIX}{}", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn limiter(limit: Option<u32>) -> UsageLimiter {
        UsageLimiter::new(Arc::new(MemoryStore::default()), limit)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sixth_call_is_rejected_at_limit_five() {
        let limiter = limiter(Some(5));
        let today = date(2026, 8, 7);

        for _ in 0..5 {
            limiter.check(today).unwrap();
            limiter.record(today);
        }

        match limiter.check(today).unwrap_err() {
            AppError::LimitReached { limit } => assert_eq!(limit, 5),
            other => panic!("expected LimitReached, got {other:?}"),
        }
    }

    #[test]
    fn test_advancing_the_date_resets_the_allowance() {
        let limiter = limiter(Some(5));
        let today = date(2026, 8, 7);
        for _ in 0..5 {
            limiter.record(today);
        }
        assert!(limiter.check(today).is_err());

        let tomorrow = date(2026, 8, 8);
        assert!(limiter.check(tomorrow).is_ok());
        assert_eq!(limiter.count(tomorrow), 0);
    }

    #[test]
    fn test_no_limit_never_rejects() {
        let limiter = limiter(None);
        let today = date(2026, 8, 7);
        for _ in 0..100 {
            limiter.record(today);
        }
        assert!(limiter.check(today).is_ok());
    }

    #[test]
    fn test_record_job_counts_each_job_once() {
        let limiter = limiter(Some(5));
        let today = date(2026, 8, 7);

        limiter.record_job(today, "job-1");
        limiter.record_job(today, "job-1");
        limiter.record_job(today, "job-1");
        limiter.record_job(today, "job-2");

        assert_eq!(limiter.count(today), 2);
    }
}
