use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;

pub const UNKNOWN_INCIDENT_TYPE: &str = "Unknown";
pub const UNSPECIFIED_LOCATION: &str = "Unspecified";

// ============ Upstream Models ============

/// One incident submission as served by the upstream backend.
///
/// Every field is optional on the wire. Missing `incidentType` and `location`
/// values are normalized by the aggregator, not here, so the record stays a
/// faithful copy of what the backend sent.
///
/// Fields the aggregator never computes with are kept as raw JSON. For those
/// and for the nullable numeric fields the outer `Option` records whether the
/// key was sent at all: an explicit `null` deserializes to `Some(..)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<Option<i64>>,
    pub incident_type: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub original_message: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub contact: Option<Value>,
    /// The backend may use ISO strings or arrays.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_on: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub credibility_score: Option<Option<f64>>,
}

/// Wraps any value that is present on the wire, `null` included.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Report {
    pub fn id(&self) -> Option<i64> {
        self.id.flatten()
    }

    pub fn credibility_score(&self) -> Option<f64> {
        self.credibility_score.flatten()
    }

    pub fn incident_type_or_default(&self) -> &str {
        self.incident_type.as_deref().unwrap_or(UNKNOWN_INCIDENT_TYPE)
    }

    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or(UNSPECIFIED_LOCATION)
    }
}

/// Body returned by `POST /api/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
}

/// Credentials sent to `POST /api/token`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// ============ Dashboard Models ============

/// Ordered `value -> count` table, serialized as a JSON object whose keys keep
/// the ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(pub Vec<(String, usize)>);

impl Tally {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, count)| *count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Summary {
    pub total_reports: usize,
    pub verified_reports: usize,
}

/// Projection of a [`Report`] for the "recent reports" table.
///
/// The outer `Option` says whether the field exists in the collection's
/// schema at all (absent fields are omitted from the JSON); a per-record
/// missing value is rendered as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<Option<i64>>,
    pub incident_type: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_on: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub credibility_score: Option<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub summary: Summary,
    /// Top locations by report count.
    #[schema(value_type = Object)]
    pub hotspots: Tally,
    /// Report count per incident type.
    #[schema(value_type = Object)]
    pub crime_stats: Tally,
    pub recent_reports: Vec<RecentReport>,
}

/// Result of the analytics aggregation.
///
/// An empty collection is not an HTTP error; the dashboard receives a plain
/// `{"error": "..."}` object instead of the stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsOutcome {
    Stats(DashboardStats),
    NoData { error: String },
}

impl AnalyticsOutcome {
    pub fn no_data() -> Self {
        AnalyticsOutcome::NoData {
            error: "No data available".to_string(),
        }
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        match self {
            AnalyticsOutcome::Stats(stats) => Some(stats),
            AnalyticsOutcome::NoData { .. } => None,
        }
    }
}

// ============ Map Models ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub desc: String,
}

// ============ System Models ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub mode: String,
}
