//! Static activity catalog
//!
//! The catalog is declarative data: the planner only ever sees tag sets,
//! costs and intensities, so new activities can be added here (or loaded
//! from JSON) without touching planner logic.

use crate::error::TravelGuideError;
use crate::models::{Activity, Intensity};

/// Built-in catalog of candidate activities
#[must_use]
pub fn builtin() -> Vec<Activity> {
    vec![
        Activity::new(
            "Local Art Museum",
            "Explore contemporary and classical art collections",
            15,
            Intensity::Low,
        )
        .with_interests(&["museums", "culture"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "stroller_accessible",
            "kids_friendly",
            "family_friendly",
            "senior_friendly",
            "indoor_only",
        ]),
        Activity::new(
            "National Park Exploration",
            "Scenic trails and wildlife viewing",
            0,
            Intensity::High,
        )
        .with_interests(&["nature", "hiking", "photography"])
        .with_guardrails(&["family_friendly", "outdoor_only"]),
        Activity::new(
            "Historical Walking Tour",
            "Discover ancient architecture and stories",
            10,
            Intensity::Medium,
        )
        .with_interests(&["historic", "culture"])
        .with_guardrails(&["family_friendly", "senior_friendly", "english_speaking_staff"]),
        Activity::new(
            "Food Market Tour",
            "Sample local delicacies and fresh produce",
            20,
            Intensity::Medium,
        )
        .with_interests(&["food"])
        .with_guardrails(&[
            "vegetarian_required",
            "vegan_required",
            "kids_friendly",
            "family_friendly",
        ]),
        Activity::new(
            "Morning Yoga Session",
            "Beach-side meditation and stretching",
            25,
            Intensity::Low,
        )
        .with_interests(&["wellness", "beach"])
        .with_guardrails(&["senior_friendly", "outdoor_only"]),
        Activity::new(
            "Artisan Market Visit",
            "Local crafts and unique souvenirs",
            0,
            Intensity::Low,
        )
        .with_interests(&["shopping", "culture"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "stroller_accessible",
            "kids_friendly",
            "family_friendly",
            "senior_friendly",
        ]),
        Activity::new(
            "Beach Time & Water Sports",
            "Relax or try snorkeling and surfing",
            30,
            Intensity::Medium,
        )
        .with_interests(&["beach", "adventure"])
        .with_guardrails(&["kids_friendly", "family_friendly", "outdoor_only"]),
        Activity::new(
            "Cultural Center Tour",
            "Traditional performances and exhibits",
            12,
            Intensity::Low,
        )
        .with_interests(&["culture", "museums"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "kids_friendly",
            "family_friendly",
            "senior_friendly",
            "indoor_only",
            "english_speaking_staff",
        ]),
        Activity::new(
            "Zip-line & Climbing Experience",
            "Zip-lining or rock climbing with certified guides",
            50,
            Intensity::High,
        )
        .with_interests(&["adventure"])
        .with_guardrails(&["teen_appropriate", "outdoor_only"]),
        Activity::new(
            "Photo Walk Tour",
            "Capture stunning vistas and street scenes",
            15,
            Intensity::Medium,
        )
        .with_interests(&["photography", "culture"])
        .with_guardrails(&["family_friendly", "senior_friendly", "english_speaking_staff"]),
        Activity::new(
            "Rooftop Bar Experience",
            "Panoramic views with cocktails",
            40,
            Intensity::Low,
        )
        .with_interests(&["nightlife"])
        .with_guardrails(&["wheelchair_accessible", "well_lit_areas"]),
        Activity::new(
            "Fine Dining Experience",
            "Local specialties in an authentic setting",
            60,
            Intensity::Low,
        )
        .with_interests(&["food", "nightlife"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "vegetarian_required",
            "gluten_free",
            "english_speaking_staff",
        ]),
        Activity::new(
            "Traditional Music & Dance Show",
            "Evening performance of local music and dance",
            25,
            Intensity::Low,
        )
        .with_interests(&["culture", "nightlife"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "kids_friendly",
            "family_friendly",
            "senior_friendly",
            "indoor_only",
        ]),
        Activity::new(
            "Waterfront Evening Stroll",
            "Relaxed walk along the waterfront",
            0,
            Intensity::Low,
        )
        .with_interests(&["nature", "photography"])
        .with_guardrails(&[
            "wheelchair_accessible",
            "stroller_accessible",
            "kids_friendly",
            "family_friendly",
            "senior_friendly",
            "well_lit_areas",
            "outdoor_only",
        ]),
    ]
}

/// Load a catalog from a JSON array of activities
pub fn from_json_str(json: &str) -> Result<Vec<Activity>, TravelGuideError> {
    serde_json::from_str(json)
        .map_err(|e| TravelGuideError::catalog(format!("failed to parse catalog JSON: {e}")))
}
