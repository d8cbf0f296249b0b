//! Itinerary planning: eligibility filtering, day allocation and report assembly
//!
//! This is the decision core of the system. Given a validated request and a
//! catalog of candidate activities, the planner filters the catalog down to
//! eligible activities, deals them round-robin across the trip days and
//! assembles the final [`ItineraryReport`].

use chrono::Duration;
use rand::Rng;
use tracing::debug;

use crate::config::TravelGuideConfig;
use crate::error::TravelGuideError;
use crate::models::{Activity, DayPlan, ItineraryReport, PlannedItem, TripRequest};
use crate::{packing, scoring, weather};

/// Plans itineraries from a request and an activity catalog
#[derive(Debug, Clone, Default)]
pub struct ItineraryPlanner {
    config: TravelGuideConfig,
}

impl ItineraryPlanner {
    /// Create a planner with the given configuration
    #[must_use]
    pub fn new(config: TravelGuideConfig) -> Self {
        Self { config }
    }

    /// Generate a complete itinerary report for a request.
    ///
    /// Fails before any allocation work with `InvalidDateRange` when the
    /// trip ends before it starts, or `EmptyCatalog` when there are no
    /// activities to plan with. No partial report is ever returned.
    pub fn generate(
        &self,
        request: &TripRequest,
        catalog: &[Activity],
        rng: &mut impl Rng,
    ) -> Result<ItineraryReport, TravelGuideError> {
        request.validate()?;
        if catalog.is_empty() {
            return Err(TravelGuideError::EmptyCatalog);
        }

        let eligible: Vec<&Activity> = catalog
            .iter()
            .filter(|activity| self.is_eligible(request, activity))
            .collect();
        debug!(
            eligible = eligible.len(),
            catalog = catalog.len(),
            destination = %request.destination,
            "filtered catalog"
        );

        let days = self.allocate(request, &eligible);

        let climate = request.climate();
        let value_score = scoring::score(request, &self.config.scoring);
        let weather = weather::mock_forecast(request.start_date, climate, rng);
        let packing_list = packing::checklist(request, climate);

        Ok(ItineraryReport {
            request: request.clone(),
            days,
            weather,
            value_score,
            packing_list,
        })
    }

    /// Eligibility is a conjunction: interest overlap (or no stated
    /// interests), compatibility with every guardrail, cost within the
    /// tier ceiling, and intensity within the cap when one is set.
    fn is_eligible(&self, request: &TripRequest, activity: &Activity) -> bool {
        if !activity.matches_interests(&request.interests) {
            return false;
        }
        if !activity.satisfies_guardrails(&request.guardrails) {
            return false;
        }
        if activity.cost > request.budget.activity_cost_ceiling() {
            return false;
        }
        if let Some(cap) = request.intensity_cap {
            if activity.intensity > cap {
                return false;
            }
        }
        true
    }

    /// Deal eligible activities round-robin across the trip days, each
    /// activity used at most once, at most `max_activities_per_day` per
    /// day. Days left without any activity get a free-time placeholder.
    fn allocate(&self, request: &TripRequest, eligible: &[&Activity]) -> Vec<DayPlan> {
        let day_count = request.trip_days() as usize;
        let capacity = day_count * self.config.planner.max_activities_per_day as usize;

        let mut buckets: Vec<Vec<PlannedItem>> = vec![Vec::new(); day_count];
        for (index, activity) in eligible.iter().take(capacity).enumerate() {
            buckets[index % day_count].push(PlannedItem::Activity((*activity).clone()));
        }

        buckets
            .into_iter()
            .enumerate()
            .map(|(offset, mut items)| {
                if items.is_empty() {
                    items.push(PlannedItem::FreeTime);
                }
                DayPlan {
                    day: offset as u32 + 1,
                    date: request.start_date + Duration::days(offset as i64),
                    items,
                }
            })
            .collect()
    }
}
