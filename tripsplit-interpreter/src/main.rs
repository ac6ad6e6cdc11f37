#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod trip_file;

use std::{borrow::Cow, env, process};

use bootstrap::{AppConfig, init_logging};
use trip_file::JsonTripFile;
use tripsplit_application::{SettlementService, TripSource};
use tripsplit_domain::{Trip, currency_symbol};
use tripsplit_presentation::{BalancePresenter, TripReportPresenter, format_trip_validation_error};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("Usage: tripsplit_interpreter <trips.json> [trip-id]".into());
    };
    let trip_id = args.next();

    let config = AppConfig::from_env().map_err(|err| format!("Invalid configuration: {err}"))?;
    let source =
        JsonTripFile::open(&path).map_err(|err| format!("Failed to load '{path}': {err}"))?;

    let trips = match trip_id {
        Some(id) => vec![source.load(&id).map_err(|err| err.to_string())?],
        None => source.list().map_err(|err| err.to_string())?,
    };
    tracing::debug!(path = %path, trips = trips.len(), "Loaded trips");

    let service = config.settlement_service();
    for (idx, trip) in trips.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_trip_report(&service, &config, trip)?;
    }

    Ok(())
}

fn print_trip_report(
    service: &SettlementService,
    config: &AppConfig,
    trip: &Trip,
) -> CliResult<()> {
    let result = service
        .settle(trip)
        .map_err(|err| {
            format!(
                "{} ({}): {}",
                tripsplit_i18n::SETTLEMENT_FAILED,
                trip.name,
                format_trip_validation_error(&err)
            )
        })?;

    let symbol = resolve_symbol(config, trip);
    print!("{}", TripReportPresenter::render(trip, &result.transfers, symbol));

    if config.show_balances {
        println!("\n{}:", tripsplit_i18n::BALANCES);
        print!("{}", BalancePresenter::render(&result.balances, symbol));
    }

    Ok(())
}

fn resolve_symbol<'a>(config: &'a AppConfig, trip: &Trip) -> &'a str {
    config
        .currency_symbol
        .as_deref()
        .or_else(|| currency_symbol(&trip.currency))
        .unwrap_or("")
}
