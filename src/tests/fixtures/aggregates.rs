// Shared test fixture for the Aggregate record.

use crate::modules::analytics::core::aggregate::{Aggregate, PageStats};
use chrono::{DateTime, TimeZone, Utc};

pub const FIXED_NOW_MS: i64 = 1_700_000_000_000;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(FIXED_NOW_MS).unwrap()
}

pub struct AggregateBuilder {
    inner: Aggregate,
}

impl Default for AggregateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AggregateBuilder {
    pub fn new() -> Self {
        Self {
            inner: Aggregate::initialize(fixed_now()),
        }
    }

    pub fn visitors(mut self, v: u64) -> Self {
        self.inner.total_visitors = v;
        self
    }

    pub fn page_views(mut self, v: u64) -> Self {
        self.inner.total_page_views = v;
        self
    }

    pub fn clicks(mut self, v: u64) -> Self {
        self.inner.total_clicks = v;
        self
    }

    pub fn page(mut self, page: impl Into<String>, views: u64) -> Self {
        self.inner.page_stats.insert(page.into(), PageStats { views });
        self
    }

    pub fn last_updated(mut self, v: DateTime<Utc>) -> Self {
        self.inner.last_updated = v;
        self
    }

    pub fn build(self) -> Aggregate {
        self.inner
    }

    pub fn to_bytes(self) -> Vec<u8> {
        serde_json::to_vec_pretty(&self.inner).unwrap()
    }
}

#[cfg(test)]
mod aggregate_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_starts_zeroed() {
        let built = AggregateBuilder::default().build();
        assert!(built.is_zeroed());
        assert_eq!(built.last_updated, fixed_now());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let later = fixed_now() + chrono::Duration::hours(1);
        let built = AggregateBuilder::new()
            .visitors(1)
            .page_views(2)
            .clicks(3)
            .page("about", 2)
            .last_updated(later)
            .build();

        assert_eq!(built.total_visitors, 1);
        assert_eq!(built.total_page_views, 2);
        assert_eq!(built.total_clicks, 3);
        assert_eq!(built.page_views("about"), 2);
        assert_eq!(built.last_updated, later);
    }
}
