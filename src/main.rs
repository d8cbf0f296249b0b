use anyhow::Result;
use chrono::{Duration, Local};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use travelguide::{BudgetTier, ItineraryPlanner, TravelGuideConfig, TripRequest, catalog, report};

/// Usage: travelguide [destination] [origin] [days] [budget]
fn request_from_args() -> Result<TripRequest> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let destination = args.first().map_or("Lisbon", String::as_str);
    let origin = args.get(1).map_or("Berlin", String::as_str);
    let days: i64 = args.get(2).map_or(Ok(5), |s| s.parse())?;
    let budget: BudgetTier = args.get(3).map_or(Ok(BudgetTier::Medium), |s| s.parse())?;

    let start = Local::now().date_naive() + Duration::days(14);
    let end = start + Duration::days(days - 1);

    Ok(TripRequest::new(destination, origin, start, end, budget))
}

fn main() -> Result<()> {
    let config = TravelGuideConfig::load().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let request = request_from_args()?;
    info!(
        destination = %request.destination,
        days = request.trip_days(),
        "planning trip"
    );

    let planner = ItineraryPlanner::new(config);
    let catalog = catalog::builtin();
    let mut rng = StdRng::from_os_rng();

    match planner.generate(&request, &catalog, &mut rng) {
        Ok(itinerary) => {
            println!("{}", report::render(&itinerary));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
