use crate::modules::analytics::core::aggregate::{Aggregate, DEFAULT_PAGE, MAX_TOTAL_VISITORS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsMutation {
    Visitor,
    Pageview { page: String },
    Click,
}

impl AnalyticsMutation {
    /// Missing or blank page identifiers count towards the default page.
    pub fn pageview(page: Option<&str>) -> Self {
        let page = match page {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PAGE,
        };
        AnalyticsMutation::Pageview {
            page: page.to_string(),
        }
    }

    /// The counter a caller is told about after this mutation is committed.
    pub fn tally(&self, aggregate: &Aggregate) -> u64 {
        match self {
            AnalyticsMutation::Visitor => aggregate.total_visitors,
            AnalyticsMutation::Pageview { .. } => aggregate.total_page_views,
            AnalyticsMutation::Click => aggregate.total_clicks,
        }
    }
}

pub fn apply(mut aggregate: Aggregate, mutation: &AnalyticsMutation) -> Aggregate {
    match mutation {
        AnalyticsMutation::Visitor => {
            aggregate.total_visitors = aggregate
                .total_visitors
                .saturating_add(1)
                .min(MAX_TOTAL_VISITORS);
        }
        AnalyticsMutation::Pageview { page } => {
            aggregate.total_page_views = aggregate.total_page_views.saturating_add(1);
            let stats = aggregate.page_stats.entry(page.clone()).or_default();
            stats.views = stats.views.saturating_add(1);
        }
        AnalyticsMutation::Click => {
            aggregate.total_clicks = aggregate.total_clicks.saturating_add(1);
        }
    }
    aggregate
}
