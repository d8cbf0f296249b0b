//! Data models for trip requests, activities and generated itineraries
//!
//! This module contains all the data structures used for representing a trip:
//! the immutable request built from the form fields, the static catalog
//! entries, and the generated report handed to the document renderer.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TravelGuideError;

/// Coarse cost bucket for a trip. Caps eligible per-day activity cost and
/// sets the nominal daily spend used for value scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    /// Maximum cost (USD) of a single activity eligible for this tier
    #[must_use]
    pub fn activity_cost_ceiling(self) -> u32 {
        match self {
            BudgetTier::Low => 25,
            BudgetTier::Medium => 60,
            BudgetTier::High => 150,
        }
    }

    /// Nominal daily spend (USD) for this tier, used for value scoring
    #[must_use]
    pub fn nominal_daily_cost(self) -> u32 {
        match self {
            BudgetTier::Low => 75,
            BudgetTier::Medium => 150,
            BudgetTier::High => 300,
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::Low => "Budget-Friendly",
            BudgetTier::Medium => "Moderate",
            BudgetTier::High => "Luxury",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = TravelGuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "budget" => Ok(BudgetTier::Low),
            "medium" | "moderate" => Ok(BudgetTier::Medium),
            "high" | "luxury" => Ok(BudgetTier::High),
            _ => Err(TravelGuideError::unknown_budget_tier(s)),
        }
    }
}

/// Physical intensity of an activity. Ordered so a request's intensity cap
/// can exclude everything above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Rough climate classification for a destination, used for the mock
/// weather ranges and the packing checklist. This is a keyword heuristic
/// over the destination string; the system carries no real geo data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateBucket {
    Tropical,
    Temperate,
    Cold,
}

impl ClimateBucket {
    const TROPICAL: &'static [&'static str] = &[
        "bali", "phuket", "cancun", "hawaii", "maldives", "fiji", "bangkok", "singapore", "rio",
        "miami", "tulum",
    ];
    const COLD: &'static [&'static str] = &[
        "oslo",
        "reykjavik",
        "helsinki",
        "tromso",
        "anchorage",
        "iceland",
        "lapland",
        "patagonia",
    ];

    /// Classify a destination by name. Unknown destinations are `Temperate`.
    #[must_use]
    pub fn for_destination(destination: &str) -> Self {
        let lower = destination.to_lowercase();
        if Self::TROPICAL.iter().any(|kw| lower.contains(kw)) {
            ClimateBucket::Tropical
        } else if Self::COLD.iter().any(|kw| lower.contains(kw)) {
            ClimateBucket::Cold
        } else {
            ClimateBucket::Temperate
        }
    }
}

/// Immutable trip request built once per form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination name (city, region, etc.)
    pub destination: String,
    /// Where the traveller departs from
    pub origin: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive, must not precede `start_date`)
    pub end_date: NaiveDate,
    /// Budget tier for the trip
    pub budget: BudgetTier,
    /// Interest tags; empty means "general sightseeing" (match everything)
    pub interests: BTreeSet<String>,
    /// Hard constraints every planned activity must be compatible with
    pub guardrails: BTreeSet<String>,
    /// Optional cap on activity intensity
    pub intensity_cap: Option<Intensity>,
    /// Nominal exchange rate (local units per home unit) for value scoring
    pub exchange_rate: f64,
}

impl TripRequest {
    /// Create a new request with no interests or guardrails
    pub fn new<S: Into<String>>(
        destination: S,
        origin: S,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: BudgetTier,
    ) -> Self {
        Self {
            destination: destination.into(),
            origin: origin.into(),
            start_date,
            end_date,
            budget,
            interests: BTreeSet::new(),
            guardrails: BTreeSet::new(),
            intensity_cap: None,
            exchange_rate: 1.0,
        }
    }

    /// Set interest tags
    #[must_use]
    pub fn with_interests(mut self, interests: &[&str]) -> Self {
        self.interests = interests.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set guardrail tags
    #[must_use]
    pub fn with_guardrails(mut self, guardrails: &[&str]) -> Self {
        self.guardrails = guardrails.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set an intensity cap
    #[must_use]
    pub fn with_intensity_cap(mut self, cap: Intensity) -> Self {
        self.intensity_cap = Some(cap);
        self
    }

    /// Set the nominal exchange rate
    #[must_use]
    pub fn with_exchange_rate(mut self, rate: f64) -> Self {
        self.exchange_rate = rate;
        self
    }

    /// Validate the request before any planning work
    pub fn validate(&self) -> Result<(), TravelGuideError> {
        if self.end_date < self.start_date {
            return Err(TravelGuideError::invalid_date_range(format!(
                "end date {} precedes start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Number of calendar days in the trip, both endpoints inclusive
    #[must_use]
    pub fn trip_days(&self) -> u32 {
        (self.end_date - self.start_date).num_days() as u32 + 1
    }

    /// Climate bucket for the destination
    #[must_use]
    pub fn climate(&self) -> ClimateBucket {
        ClimateBucket::for_destination(&self.destination)
    }
}

/// A candidate activity from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name
    pub name: String,
    /// Short description shown in the itinerary
    pub description: String,
    /// Estimated cost in USD (0 = free)
    pub cost: u32,
    /// Interest tags this activity satisfies
    pub interest_tags: BTreeSet<String>,
    /// Guardrail tags this activity is compatible with
    pub guardrail_tags: BTreeSet<String>,
    /// Physical intensity level
    pub intensity: Intensity,
}

impl Activity {
    /// Create a new activity with no tags
    pub fn new<S: Into<String>>(name: S, description: S, cost: u32, intensity: Intensity) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            interest_tags: BTreeSet::new(),
            guardrail_tags: BTreeSet::new(),
            intensity,
        }
    }

    /// Set interest tags
    #[must_use]
    pub fn with_interests(mut self, tags: &[&str]) -> Self {
        self.interest_tags = tags.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set guardrail compatibility tags
    #[must_use]
    pub fn with_guardrails(mut self, tags: &[&str]) -> Self {
        self.guardrail_tags = tags.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Check whether this activity serves at least one requested interest.
    /// An empty interest set matches everything (general sightseeing).
    #[must_use]
    pub fn matches_interests(&self, interests: &BTreeSet<String>) -> bool {
        interests.is_empty() || self.interest_tags.intersection(interests).next().is_some()
    }

    /// Check whether this activity is compatible with every guardrail in the
    /// request. Guardrails are a conjunction: one missing tag excludes the
    /// activity entirely.
    #[must_use]
    pub fn satisfies_guardrails(&self, guardrails: &BTreeSet<String>) -> bool {
        guardrails.iter().all(|g| self.guardrail_tags.contains(g))
    }

    /// Format the cost for display
    #[must_use]
    pub fn format_cost(&self) -> String {
        if self.cost == 0 {
            "Free".to_string()
        } else {
            format!("${}", self.cost)
        }
    }
}

/// A single slot in a day plan: either a scheduled activity or free time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlannedItem {
    Activity(Activity),
    FreeTime,
}

impl PlannedItem {
    /// Scheduled activity, if this slot holds one
    #[must_use]
    pub fn activity(&self) -> Option<&Activity> {
        match self {
            PlannedItem::Activity(activity) => Some(activity),
            PlannedItem::FreeTime => None,
        }
    }

    /// Cost of this slot (free time costs nothing)
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.activity().map_or(0, |a| a.cost)
    }
}

/// Ordered activities assigned to one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number within the trip
    pub day: u32,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Slots for the day, in visiting order
    pub items: Vec<PlannedItem>,
}

impl DayPlan {
    /// Total estimated cost for the day
    #[must_use]
    pub fn daily_cost(&self) -> u32 {
        self.items.iter().map(PlannedItem::cost).sum()
    }

    /// Scheduled activities for the day (free-time slots skipped)
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.items.iter().filter_map(PlannedItem::activity)
    }
}

/// Mock weather condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
        }
    }
}

/// One day of the mock weather forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherEntry {
    /// Forecast date
    pub date: NaiveDate,
    /// Temperature in Fahrenheit
    pub temperature_f: i32,
    /// Condition label
    pub condition: WeatherCondition,
    /// Chance of precipitation in percent
    pub precipitation_chance: u8,
}

/// Heuristic value score for a destination, all factors clamped to [0,1]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueScore {
    /// Weighted overall score in [0,1]
    pub overall: f64,
    /// Clamped cost factor (cheaper destinations score higher)
    pub cost_factor: f64,
    /// Clamped exchange-rate factor (favorable rates score higher)
    pub exchange_factor: f64,
    /// Nominal daily cost (USD) for the request's budget tier
    pub daily_cost: u32,
    /// Trip length in days
    pub trip_days: u32,
    /// Nominal total cost for the whole trip
    pub estimated_total_cost: u32,
}

/// The complete itinerary handed to the document renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryReport {
    /// The request this report was generated for
    pub request: TripRequest,
    /// One plan per trip day, in calendar order
    pub days: Vec<DayPlan>,
    /// 14-day mock weather forecast starting at the trip start date
    pub weather: Vec<WeatherEntry>,
    /// Destination value score
    pub value_score: ValueScore,
    /// Packing checklist derived from guardrails and destination climate
    pub packing_list: Vec<String>,
}

impl ItineraryReport {
    /// Total estimated activity cost across the whole trip
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.days.iter().map(DayPlan::daily_cost).sum()
    }

    /// Total number of scheduled activities (free-time slots excluded)
    #[must_use]
    pub fn total_activities(&self) -> usize {
        self.days.iter().map(|d| d.activities().count()).sum()
    }
}
