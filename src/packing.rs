//! Packing checklist generation
//!
//! The checklist is a union of three sources: a base list every trip gets,
//! climate-bucket items, and items implied by the request's guardrails.
//! Order is stable and duplicates are dropped.

use crate::models::{ClimateBucket, TripRequest};

const BASE_ITEMS: &[&str] = &[
    "Passport & travel documents",
    "Travel insurance information",
    "Credit cards & cash",
    "Phone charger & power adapter",
    "Comfortable walking shoes",
    "Weather-appropriate clothing",
    "Camera & accessories",
    "Medications & first aid",
    "Reusable water bottle",
];

fn climate_items(climate: ClimateBucket) -> &'static [&'static str] {
    match climate {
        ClimateBucket::Tropical => &[
            "Sunscreen & sunglasses",
            "Swimwear",
            "Insect repellent",
            "Light breathable clothing",
        ],
        ClimateBucket::Temperate => &["Sunscreen & sunglasses", "Light jacket", "Compact umbrella"],
        ClimateBucket::Cold => &[
            "Thermal base layers",
            "Insulated jacket",
            "Gloves & warm hat",
            "Lip balm & moisturizer",
        ],
    }
}

/// Item implied by a guardrail tag, if any
fn guardrail_item(tag: &str) -> Option<&'static str> {
    match tag {
        "vegetarian_required" | "vegan_required" | "halal_available" | "kosher_available"
        | "gluten_free" => Some("Dietary requirement translation cards"),
        "wheelchair_accessible" | "stroller_accessible" | "no_stairs" | "elevator_required" => {
            Some("Accessibility documentation & equipment notes")
        }
        "kids_friendly" | "family_friendly" => Some("Kids' snacks & entertainment"),
        "limited_walking" | "no_walking_tours" => Some("Transit passes & ride-hail apps set up"),
        _ => None,
    }
}

/// Build the packing checklist for a request
#[must_use]
pub fn checklist(request: &TripRequest, climate: ClimateBucket) -> Vec<String> {
    let mut items: Vec<String> = BASE_ITEMS.iter().map(|s| (*s).to_string()).collect();

    for item in climate_items(climate) {
        if !items.iter().any(|existing| existing == item) {
            items.push((*item).to_string());
        }
    }

    for tag in &request.guardrails {
        if let Some(item) = guardrail_item(tag) {
            if !items.iter().any(|existing| existing == item) {
                items.push(item.to_string());
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetTier;
    use chrono::NaiveDate;

    fn request(guardrails: &[&str]) -> TripRequest {
        TripRequest::new(
            "Lisbon",
            "Berlin",
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
            BudgetTier::Medium,
        )
        .with_guardrails(guardrails)
    }

    #[test]
    fn test_base_items_always_present() {
        let list = checklist(&request(&[]), ClimateBucket::Temperate);
        assert!(list.iter().any(|i| i.contains("Passport")));
        assert!(list.iter().any(|i| i.contains("Medications")));
    }

    #[test]
    fn test_climate_items_vary_by_bucket() {
        let tropical = checklist(&request(&[]), ClimateBucket::Tropical);
        let cold = checklist(&request(&[]), ClimateBucket::Cold);

        assert!(tropical.iter().any(|i| i.contains("Swimwear")));
        assert!(!tropical.iter().any(|i| i.contains("Thermal")));
        assert!(cold.iter().any(|i| i.contains("Thermal")));
        assert!(!cold.iter().any(|i| i.contains("Swimwear")));
    }

    #[test]
    fn test_guardrail_items_are_deduplicated() {
        // two dietary guardrails imply the same single item
        let list = checklist(
            &request(&["vegetarian_required", "gluten_free"]),
            ClimateBucket::Temperate,
        );
        let dietary = list
            .iter()
            .filter(|i| i.contains("Dietary requirement"))
            .count();
        assert_eq!(dietary, 1);
    }

    #[test]
    fn test_unknown_guardrails_add_nothing() {
        let plain = checklist(&request(&[]), ClimateBucket::Temperate);
        let with_unknown = checklist(&request(&["well_lit_areas"]), ClimateBucket::Temperate);
        assert_eq!(plain, with_unknown);
    }
}
