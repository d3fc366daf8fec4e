// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use chrono::NaiveDate;
use clap::Parser;
use flight_reservations::calendar::parse_reservation_date;
use flight_reservations::seed::{self, DEFAULT_AIRLINE_NAME, DEFAULT_RESERVATIONS};
use flight_reservations::{
    Clock, FixedClock, ReservationLedger, SeedError, SeedRejection, SystemClock, menu,
};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Flight Reservations - Interactive ticket booking menu
///
/// Loads a flight catalogue and any pre-existing reservations, then reads
/// menu choices from stdin until the user exits.
#[derive(Parser, Debug)]
#[command(name = "flight-reservations")]
#[command(about = "An interactive flight ticket reservation manager", long_about = None)]
struct Args {
    /// CSV file with the flight catalogue
    ///
    /// Expected format: flight_number,destination,ticket_price,capacity,category
    /// Without this flag the built-in three-flight catalogue is used.
    #[arg(long, value_name = "FILE")]
    flights: Option<PathBuf>,

    /// CSV file with reservations to load at startup
    ///
    /// Expected format: flight_number,passenger_name,date
    #[arg(long, value_name = "FILE")]
    reservations: Option<PathBuf>,

    /// Airline name used with --flights
    #[arg(long, default_value = DEFAULT_AIRLINE_NAME)]
    airline: String,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date
    #[arg(long, value_name = "DATE", value_parser = parse_reservation_date)]
    today: Option<NaiveDate>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.today {
        Some(today) => run(&args, FixedClock(today)),
        None => run(&args, SystemClock),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run<C: Clock>(args: &Args, clock: C) -> Result<(), Box<dyn std::error::Error>> {
    let (mut ledger, rejected) = build_ledger(args, clock)?;
    for SeedRejection { index, error } in &rejected {
        warn!(row = index + 1, %error, "skipping seed reservation");
    }
    info!(
        airline = ledger.airline().name(),
        flights = ledger.airline().len(),
        reservations = ledger.reservation_count(),
        "ledger initialized"
    );

    let stdin = io::stdin();
    menu::run_menu(&mut ledger, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Picks the catalogue and seed reservations from the command line.
///
/// A flights file starts with no reservations unless a reservations file is
/// also given; the built-in catalogue comes with the built-in reservations.
fn build_ledger<C: Clock>(
    args: &Args,
    clock: C,
) -> Result<(ReservationLedger<C>, Vec<SeedRejection>), SeedError> {
    let airline = match &args.flights {
        Some(path) => seed::load_flights(&args.airline, seed::open_seed_file(path)?)?,
        None => seed::default_airline(),
    };

    let reservations: Vec<(String, String, String)> = match &args.reservations {
        Some(path) => seed::load_reservations(seed::open_seed_file(path)?)?
            .into_iter()
            .map(Into::into)
            .collect(),
        None if args.flights.is_none() => DEFAULT_RESERVATIONS
            .iter()
            .map(|(f, n, d)| ((*f).to_owned(), (*n).to_owned(), (*d).to_owned()))
            .collect(),
        None => Vec::new(),
    };

    Ok(ReservationLedger::from_seed(airline, reservations, clock))
}
