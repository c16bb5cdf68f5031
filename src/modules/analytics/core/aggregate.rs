use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_TOTAL_VISITORS: u64 = 1000;
pub const DEFAULT_PAGE: &str = "home";

// Timestamps are persisted with microsecond precision.
const PERSISTED_SUBSEC_DIGITS: u16 = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    pub views: u64,
}

/// The one shared tally every caller reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub total_visitors: u64,
    pub total_page_views: u64,
    pub total_clicks: u64,
    pub page_stats: BTreeMap<String, PageStats>,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl Aggregate {
    pub fn initialize(now: DateTime<Utc>) -> Self {
        Self {
            total_visitors: 0,
            total_page_views: 0,
            total_clicks: 0,
            page_stats: BTreeMap::new(),
            last_updated: now.trunc_subsecs(PERSISTED_SUBSEC_DIGITS),
        }
    }

    /// Sets `last_updated` to `now`, whatever the previous stamp was.
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.last_updated = now.trunc_subsecs(PERSISTED_SUBSEC_DIGITS);
    }

    pub fn page_views(&self, page: &str) -> u64 {
        self.page_stats.get(page).map(|s| s.views).unwrap_or(0)
    }

    pub fn is_zeroed(&self) -> bool {
        self.total_visitors == 0
            && self.total_page_views == 0
            && self.total_clicks == 0
            && self.page_stats.is_empty()
    }
}

/// `lastUpdated` is written as RFC 3339 UTC. Offset-less ISO-8601 values are read as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
