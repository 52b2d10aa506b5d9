/// Property-based tests using proptest
/// Tests invariants of the aggregation and coordinate extraction
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use wangari_analytics::analytics::calculate_analytics;
use wangari_analytics::geo::{extract_map_points, parse_coordinates};
use wangari_analytics::models::Report;

fn arb_report() -> impl Strategy<Value = Report> {
    (
        any::<i64>(),
        proptest::option::of(prop::sample::select(vec![
            "Poaching",
            "Illegal Logging",
            "Charcoal Burning",
            "Encroachment",
        ])),
        proptest::option::of(prop::sample::select(vec![
            "Karura Forest",
            "Aberdare Hills",
            "Mau Complex",
            "Ngong Forest",
            "Kakamega",
            "Mt Kenya",
            "-1.29,36.82",
        ])),
        proptest::option::of(0.0f64..10.0),
    )
        .prop_map(|(id, incident_type, location, score)| Report {
            id: Some(Some(id)),
            incident_type: incident_type.map(String::from),
            location: location.map(String::from),
            credibility_score: score.map(Some),
            ..Report::default()
        })
}

fn true_counts<'a>(values: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn total_reports_equals_collection_length(reports in prop::collection::vec(arb_report(), 1..40)) {
        let outcome = calculate_analytics(&reports);
        let stats = outcome.stats().unwrap();
        prop_assert_eq!(stats.summary.total_reports, reports.len());
        prop_assert!(stats.summary.verified_reports <= reports.len());
        prop_assert!(stats.recent_reports.len() <= 10);
    }

    #[test]
    fn hotspots_at_most_five_with_true_counts(reports in prop::collection::vec(arb_report(), 1..40)) {
        let outcome = calculate_analytics(&reports);
        let stats = outcome.stats().unwrap();
        let counts = true_counts(reports.iter().map(|r| r.location_or_default()));

        prop_assert!(stats.hotspots.len() <= 5);
        for (location, count) in &stats.hotspots.0 {
            prop_assert_eq!(counts.get(location.as_str()).copied(), Some(*count));
        }
        // Nothing left out ranks strictly above what was kept
        let lowest_kept = stats.hotspots.0.iter().map(|(_, c)| *c).min().unwrap_or(0);
        for (location, count) in &counts {
            if stats.hotspots.get(location).is_none() {
                prop_assert!(*count <= lowest_kept);
            }
        }
    }

    #[test]
    fn crime_stats_keys_are_distinct_normalized_types(reports in prop::collection::vec(arb_report(), 1..40)) {
        let outcome = calculate_analytics(&reports);
        let stats = outcome.stats().unwrap();

        let expected: HashSet<&str> = reports.iter().map(|r| r.incident_type_or_default()).collect();
        let actual: HashSet<&str> = stats.crime_stats.keys().collect();
        prop_assert_eq!(actual, expected);

        let total: usize = stats.crime_stats.0.iter().map(|(_, c)| *c).sum();
        prop_assert_eq!(total, reports.len());
    }

    #[test]
    fn aggregation_is_idempotent(reports in prop::collection::vec(arb_report(), 0..40)) {
        prop_assert_eq!(calculate_analytics(&reports), calculate_analytics(&reports));
    }

    #[test]
    fn coordinate_parsing_never_panics(location in "\\PC*") {
        let _ = parse_coordinates(&location);
    }

    #[test]
    fn formatted_pairs_parse_back(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let location = format!("{}, {}", lat, lon);
        prop_assert_eq!(parse_coordinates(&location), Some((lat, lon)));
    }

    #[test]
    fn map_points_never_exceed_reports(reports in prop::collection::vec(arb_report(), 0..40)) {
        let points = extract_map_points(&reports);
        let with_coords = reports
            .iter()
            .filter(|r| r.location.as_deref() == Some("-1.29,36.82"))
            .count();
        prop_assert_eq!(points.len(), with_coords);
    }
}
