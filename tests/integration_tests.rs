//! End-to-end scenarios for the Travel Guide planner

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

use travelguide::{
    Activity, BudgetTier, Intensity, ItineraryPlanner, TravelGuideError, TripRequest, catalog,
    weather,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
}

fn generate(
    request: &TripRequest,
    activities: &[Activity],
) -> Result<travelguide::ItineraryReport, TravelGuideError> {
    let mut rng = StdRng::seed_from_u64(99);
    ItineraryPlanner::default().generate(request, activities, &mut rng)
}

/// One day plan per calendar day, endpoints inclusive
#[rstest]
#[case(1, 1)]
#[case(1, 3)]
#[case(5, 11)]
#[case(1, 14)]
fn day_plan_count_matches_trip_length(#[case] start: u32, #[case] end: u32) {
    let request = TripRequest::new("Lisbon", "Berlin", date(start), date(end), BudgetTier::Medium);
    let report = generate(&request, &catalog::builtin()).unwrap();
    assert_eq!(report.days.len(), (end - start + 1) as usize);
}

/// 2 eligible hiking activities on a 3-day low-budget trip
/// fill exactly 2 days; the third gets free time; nothing repeats.
#[test]
fn hiking_low_budget_three_day_scenario() {
    let hiking = |name: &str, cost: u32| {
        Activity::new(name, "trail day", cost, Intensity::High).with_interests(&["hiking"])
    };
    let other = |name: &str| {
        Activity::new(name, "city thing", 10, Intensity::Low).with_interests(&["museums"])
    };

    let activities = vec![
        hiking("Ridge Trail", 10),
        hiking("Valley Loop", 0),
        other("Gallery"),
        other("Opera"),
        other("Archive"),
        other("Aquarium"),
        other("Planetarium"),
    ];

    let request = TripRequest::new("Gap", "Lyon", date(1), date(3), BudgetTier::Low)
        .with_interests(&["hiking"]);
    let report = generate(&request, &activities).unwrap();

    assert_eq!(report.days.len(), 3);
    assert_eq!(report.total_activities(), 2);

    let free_days = report
        .days
        .iter()
        .filter(|d| d.activities().count() == 0)
        .count();
    assert_eq!(free_days, 1);

    let mut names: Vec<&str> = report
        .days
        .iter()
        .flat_map(|d| d.activities().map(|a| a.name.as_str()))
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ridge Trail", "Valley Loop"]);
}

/// An inverted date range produces no report
#[test]
fn inverted_date_range_fails() {
    let request = TripRequest::new("Lisbon", "Berlin", date(10), date(2), BudgetTier::Medium);
    let result = generate(&request, &catalog::builtin());
    assert!(matches!(
        result,
        Err(TravelGuideError::InvalidDateRange { .. })
    ));
}

/// A wheelchair guardrail excludes every activity lacking
/// the tag, even when interest tags match.
#[test]
fn wheelchair_guardrail_excludes_incompatible_activities() {
    let accessible = Activity::new("Accessible Museum", "step-free", 15, Intensity::Low)
        .with_interests(&["museums"])
        .with_guardrails(&["wheelchair_accessible"]);
    let stairs_only = Activity::new("Tower Climb", "400 steps", 5, Intensity::High)
        .with_interests(&["museums"]);

    let request = TripRequest::new("Lisbon", "Berlin", date(1), date(2), BudgetTier::Medium)
        .with_interests(&["museums"])
        .with_guardrails(&["wheelchair_accessible"]);
    let report = generate(&request, &[accessible, stairs_only]).unwrap();

    let names: Vec<&str> = report
        .days
        .iter()
        .flat_map(|d| d.activities().map(|a| a.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Accessible Museum"]);
}

/// No activity appears twice across the whole itinerary
#[test]
fn no_duplicate_activities_in_report() {
    let request = TripRequest::new("Lisbon", "Berlin", date(1), date(10), BudgetTier::High);
    let report = generate(&request, &catalog::builtin()).unwrap();

    let names: Vec<&str> = report
        .days
        .iter()
        .flat_map(|d| d.activities().map(|a| a.name.as_str()))
        .collect();
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

/// Value score stays in [0,1] under extreme exchange-rate inputs
#[rstest]
#[case(0.0)]
#[case(0.001)]
#[case(1.0)]
#[case(250.0)]
#[case(f64::MAX)]
fn value_score_is_clamped(#[case] rate: f64) {
    for budget in [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High] {
        let request = TripRequest::new("Lisbon", "Berlin", date(1), date(5), budget)
            .with_exchange_rate(rate);
        let report = generate(&request, &catalog::builtin()).unwrap();
        let score = report.value_score.overall;
        assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }
}

/// Every report carries a full 14-entry forecast regardless of trip length
#[test]
fn weather_forecast_always_has_fourteen_entries() {
    let request = TripRequest::new("Lisbon", "Berlin", date(1), date(2), BudgetTier::Low);
    let report = generate(&request, &catalog::builtin()).unwrap();
    assert_eq!(report.weather.len(), weather::FORECAST_DAYS);
    assert_eq!(report.weather[0].date, date(1));
}

/// Same seed, same request: identical reports (the only randomness is the
/// injected weather RNG)
#[test]
fn generation_is_reproducible_with_a_seed() {
    let request = TripRequest::new("Bali", "Berlin", date(1), date(4), BudgetTier::Medium);
    let planner = ItineraryPlanner::default();

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = planner
        .generate(&request, &catalog::builtin(), &mut rng_a)
        .unwrap();
    let b = planner
        .generate(&request, &catalog::builtin(), &mut rng_b)
        .unwrap();

    assert_eq!(a.total_activities(), b.total_activities());
    for (wa, wb) in a.weather.iter().zip(&b.weather) {
        assert_eq!(wa.temperature_f, wb.temperature_f);
        assert_eq!(wa.condition, wb.condition);
    }
}

/// An empty catalog is rejected before any planning work
#[test]
fn empty_catalog_is_rejected() {
    let request = TripRequest::new("Lisbon", "Berlin", date(1), date(3), BudgetTier::Medium);
    let result = generate(&request, &[]);
    assert!(matches!(result, Err(TravelGuideError::EmptyCatalog)));
}

/// Budget tier strings from the form layer parse or fail loudly
#[rstest]
#[case("low", BudgetTier::Low)]
#[case("budget", BudgetTier::Low)]
#[case("Medium", BudgetTier::Medium)]
#[case("luxury", BudgetTier::High)]
fn budget_tier_parses_known_values(#[case] input: &str, #[case] expected: BudgetTier) {
    assert_eq!(input.parse::<BudgetTier>().unwrap(), expected);
}

#[test]
fn budget_tier_rejects_unknown_values() {
    let err = "ultra-deluxe".parse::<BudgetTier>().unwrap_err();
    assert!(matches!(err, TravelGuideError::UnknownBudgetTier { .. }));
    assert!(err.user_message().contains("ultra-deluxe"));
}
