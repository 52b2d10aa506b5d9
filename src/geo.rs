use crate::backend_client::BackendConnector;
use crate::models::{MapPoint, Report};

const DEFAULT_POINT_DESC: &str = "Incident";

/// Fetches the current collection and extracts its map points.
pub async fn fetch_map_points(connector: &mut BackendConnector) -> Vec<MapPoint> {
    let reports = connector.fetch_reports().await;
    extract_map_points(&reports)
}

/// Extracts coordinate points from `location` fields shaped like `"lat, lon"`.
///
/// Records whose location does not parse are skipped. Coordinates are not
/// range-checked.
pub fn extract_map_points(reports: &[Report]) -> Vec<MapPoint> {
    reports
        .iter()
        .filter_map(|report| {
            let (lat, lon) = parse_coordinates(report.location.as_deref()?)?;
            Some(MapPoint {
                lat,
                lon,
                desc: report
                    .incident_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_POINT_DESC.to_string()),
            })
        })
        .collect()
}

/// Parses `"lat,lon"`; exactly one comma, both halves numeric.
pub fn parse_coordinates(location: &str) -> Option<(f64, f64)> {
    if !location.contains(',') || !location.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut parts = location.split(',');
    let (lat, lon) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
