//! Travel Guide - personalized trip planning
//!
//! This library provides the core functionality for assembling a trip
//! itinerary from a static activity catalog: interest and guardrail
//! filtering, per-day allocation, destination value scoring, a mock
//! weather forecast and a packing checklist, aggregated into a report
//! for document rendering.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod packing;
pub mod planner;
pub mod report;
pub mod scoring;
pub mod weather;

// Re-export core types for public API
pub use config::TravelGuideConfig;
pub use error::TravelGuideError;
pub use models::{
    Activity, BudgetTier, ClimateBucket, DayPlan, Intensity, ItineraryReport, PlannedItem,
    TripRequest, ValueScore, WeatherEntry,
};
pub use planner::ItineraryPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelGuideError>;
