//! Destination value scoring
//!
//! The score combines two clamped factors into a single number in [0,1]:
//!
//! - `cost_factor = clamp(1 - daily_cost / cost_ceiling, 0, 1)` — cheaper
//!   destinations score higher; a daily cost at or above the ceiling
//!   (default $500) bottoms out at 0.
//! - `exchange_factor = clamp(exchange_rate / reference_rate, 0, 1)` — a
//!   rate of `reference_rate` (default 2.0) local units per home unit or
//!   better maxes out at 1.
//!
//! `overall = weight_cost * cost_factor + weight_exchange * exchange_factor`
//! with default weights 0.6 / 0.4. The weights are config tunables and are
//! validated to sum to 1, so the overall score always stays in [0,1].

use crate::config::ScoringConfig;
use crate::models::{TripRequest, ValueScore};

/// Compute the value score for a request
#[must_use]
pub fn score(request: &TripRequest, config: &ScoringConfig) -> ValueScore {
    let daily_cost = request.budget.nominal_daily_cost();
    let trip_days = request.trip_days();

    let cost_factor = (1.0 - f64::from(daily_cost) / config.cost_ceiling).clamp(0.0, 1.0);
    let exchange_factor = (request.exchange_rate / config.reference_rate).clamp(0.0, 1.0);

    let overall = config.weight_cost * cost_factor + config.weight_exchange * exchange_factor;

    ValueScore {
        overall,
        cost_factor,
        exchange_factor,
        daily_cost,
        trip_days,
        estimated_total_cost: daily_cost * trip_days,
    }
}
