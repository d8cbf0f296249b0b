//! Plain-text rendering of an itinerary report
//!
//! Produces the document handed to the downstream renderer, mirroring the
//! guide structure: cover, trip overview, weather table, value-score
//! summary, day-by-day itinerary, packing checklist.

use std::fmt::Write;

use crate::models::ItineraryReport;

/// Render a report as a plain-text document
#[must_use]
pub fn render(report: &ItineraryReport) -> String {
    let mut out = String::new();
    let request = &report.request;

    // Cover
    let _ = writeln!(out, "Your Travel Guide to {}", request.destination);
    let _ = writeln!(out, "{}-Day Personalized Itinerary", request.trip_days());
    let _ = writeln!(out, "Departing from: {}", request.origin);
    let _ = writeln!(
        out,
        "Travel dates: {} to {}\n",
        request.start_date, request.end_date
    );

    // Trip overview
    let _ = writeln!(out, "== Trip Overview ==");
    let _ = writeln!(out, "Destination:          {}", request.destination);
    let _ = writeln!(out, "Duration:             {} days", request.trip_days());
    let _ = writeln!(
        out,
        "Budget level:         {} (${}/day)",
        request.budget.label(),
        request.budget.nominal_daily_cost()
    );
    let _ = writeln!(out, "Total activities:     {}", report.total_activities());
    let _ = writeln!(out, "Estimated total cost: ${}\n", report.total_cost());

    // Weather
    let _ = writeln!(out, "== 14-Day Weather Forecast ==");
    for entry in &report.weather {
        let _ = writeln!(
            out,
            "{}  {:>3}°F  {:<13} {:>3}% rain",
            entry.date,
            entry.temperature_f,
            entry.condition.label(),
            entry.precipitation_chance
        );
    }
    let _ = writeln!(out);

    // Value score
    let score = &report.value_score;
    let _ = writeln!(out, "== Value Score ==");
    let _ = writeln!(out, "Overall value:   {:.2}", score.overall);
    let _ = writeln!(out, "Cost factor:     {:.2}", score.cost_factor);
    let _ = writeln!(out, "Exchange factor: {:.2}", score.exchange_factor);
    let _ = writeln!(out, "Est. daily cost: ${}\n", score.daily_cost);

    // Day-by-day itinerary
    let _ = writeln!(out, "== Daily Itinerary ==");
    for day in &report.days {
        let _ = writeln!(
            out,
            "Day {} ({}) — ${}",
            day.day,
            day.date,
            day.daily_cost()
        );
        for item in &day.items {
            match item.activity() {
                Some(activity) => {
                    let _ = writeln!(
                        out,
                        "  - {} ({}): {}",
                        activity.name,
                        activity.format_cost(),
                        activity.description
                    );
                }
                None => {
                    let _ = writeln!(out, "  - Free time: explore at your own pace");
                }
            }
        }
    }
    let _ = writeln!(out);

    // Packing checklist
    let _ = writeln!(out, "== Packing Checklist ==");
    for item in &report.packing_list {
        let _ = writeln!(out, "[ ] {item}");
    }

    out
}
