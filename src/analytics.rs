use crate::backend_client::BackendConnector;
use crate::models::{AnalyticsOutcome, DashboardStats, RecentReport, Report, Summary, Tally};
use serde_json::Value;
use std::collections::HashMap;

/// Number of locations kept in the hotspot ranking.
pub const HOTSPOT_LIMIT: usize = 5;
/// Number of trailing records shown in the recent reports table.
pub const RECENT_LIMIT: usize = 10;
/// Reports scoring strictly above this count as verified.
pub const VERIFIED_THRESHOLD: f64 = 7.0;

/// Which optional fields appear anywhere in a collection.
///
/// A key counts as present when any record sends it, even as `null`.
///
/// `incidentType` and `location` are not tracked: they always exist after
/// normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub id: bool,
    pub description: bool,
    pub created_on: bool,
    pub credibility_score: bool,
}

impl Schema {
    pub fn of(reports: &[Report]) -> Self {
        reports.iter().fold(Schema::default(), |schema, r| Schema {
            id: schema.id || r.id.is_some(),
            description: schema.description || r.description.is_some(),
            created_on: schema.created_on || r.created_on.is_some(),
            credibility_score: schema.credibility_score || r.credibility_score.is_some(),
        })
    }
}

/// Fetches the current collection and aggregates it.
pub async fn calculate_dashboard(connector: &mut BackendConnector) -> AnalyticsOutcome {
    let reports = connector.fetch_reports().await;
    calculate_analytics(&reports)
}

/// Reduces a report collection into dashboard statistics.
///
/// An empty collection yields the `"No data available"` sentinel.
pub fn calculate_analytics(reports: &[Report]) -> AnalyticsOutcome {
    if reports.is_empty() {
        return AnalyticsOutcome::no_data();
    }

    let schema = Schema::of(reports);

    let verified_reports = if schema.credibility_score {
        reports
            .iter()
            .filter(|r| matches!(r.credibility_score(), Some(score) if score > VERIFIED_THRESHOLD))
            .count()
    } else {
        0
    };

    let mut hotspots = count_ranked(reports.iter().map(Report::location_or_default));
    hotspots.0.truncate(HOTSPOT_LIMIT);

    let crime_stats = count_ranked(reports.iter().map(Report::incident_type_or_default));

    let start = reports.len().saturating_sub(RECENT_LIMIT);
    let recent_reports = reports[start..]
        .iter()
        .map(|r| project_recent(r, &schema))
        .collect();

    AnalyticsOutcome::Stats(DashboardStats {
        summary: Summary {
            total_reports: reports.len(),
            verified_reports,
        },
        hotspots,
        crime_stats,
        recent_reports,
    })
}

/// Counts occurrences, ranked by count descending with ties kept in
/// first-seen order.
pub fn count_ranked<'a, I>(values: I) -> Tally
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Tally(counts)
}

fn project_recent(report: &Report, schema: &Schema) -> RecentReport {
    RecentReport {
        id: schema.id.then(|| report.id()),
        incident_type: report.incident_type_or_default().to_string(),
        location: report.location_or_default().to_string(),
        description: schema
            .description
            .then(|| report.description.clone().unwrap_or(Value::Null)),
        created_on: schema
            .created_on
            .then(|| report.created_on.clone().unwrap_or(Value::Null)),
        credibility_score: schema.credibility_score.then(|| report.credibility_score()),
    }
}
