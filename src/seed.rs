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

//! Startup data for the reservation ledger.
//!
//! Provides the built-in catalogue and reservations, and CSV loaders for
//! operator-supplied replacements.
//!
//! # CSV Formats
//!
//! Flights, columns `flight_number, destination, ticket_price, capacity, category`:
//!
//! ```csv
//! flight_number,destination,ticket_price,capacity,category
//! D123,Budapest,15000,2,domestic
//! I789,London,50000,3,international
//! ```
//!
//! Reservations, columns `flight_number, passenger_name, date`:
//!
//! ```csv
//! flight_number,passenger_name,date
//! D123,Kiss János,2024-06-01
//! ```

use crate::airline::Airline;
use crate::calendar::Clock;
use crate::error::SeedError;
use crate::flight::{Flight, FlightCategory};
use crate::ledger::{ReservationLedger, SeedRejection};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const DEFAULT_AIRLINE_NAME: &str = "Magyar Repülő";

/// Reservations loaded into the built-in catalogue at startup.
pub const DEFAULT_RESERVATIONS: [(&str, &str, &str); 6] = [
    ("D123", "Kiss János", "2024-06-01"),
    ("D123", "Nagy Éva", "2024-06-01"),
    ("I789", "Smith John", "2024-07-15"),
    ("I789", "Kovács Anna", "2024-07-15"),
    ("I789", "Szabó Péter", "2024-07-15"),
    ("D456", "Tóth Eszter", "2024-08-20"),
];

/// The built-in three-flight catalogue.
pub fn default_airline() -> Airline {
    let mut airline = Airline::new(DEFAULT_AIRLINE_NAME);
    airline.add_flight(Flight::domestic("D123", "Budapest", dec!(15000), 2));
    airline.add_flight(Flight::domestic("D456", "Debrecen", dec!(10000), 100));
    airline.add_flight(Flight::international("I789", "London", dec!(50000), 3));
    airline
}

/// Builds a ledger over the built-in catalogue with the built-in reservations.
pub fn default_ledger<C: Clock>(clock: C) -> (ReservationLedger<C>, Vec<SeedRejection>) {
    ReservationLedger::from_seed(default_airline(), DEFAULT_RESERVATIONS, clock)
}

#[derive(Debug, Deserialize)]
struct FlightRow {
    flight_number: String,
    destination: String,
    ticket_price: Decimal,
    capacity: u32,
    category: FlightCategory,
}

impl FlightRow {
    fn into_flight(self) -> Result<Flight, SeedError> {
        if self.capacity == 0 {
            return Err(SeedError::ZeroCapacity(self.flight_number));
        }
        if self.ticket_price < Decimal::ZERO {
            return Err(SeedError::NegativePrice(self.flight_number));
        }
        Ok(Flight::new(
            self.flight_number,
            self.destination,
            self.ticket_price,
            self.capacity,
            self.category,
        ))
    }
}

/// One pre-existing reservation read from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedReservation {
    pub flight_number: String,
    pub passenger_name: String,
    pub date: String,
}

impl From<SeedReservation> for (String, String, String) {
    fn from(row: SeedReservation) -> Self {
        (row.flight_number, row.passenger_name, row.date)
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader)
}

/// Reads a flight catalogue for `airline_name`.
///
/// # Errors
///
/// Fails on the first unreadable row, zero-capacity flight, or negative price.
pub fn load_flights<R: Read>(airline_name: &str, reader: R) -> Result<Airline, SeedError> {
    let mut airline = Airline::new(airline_name);
    for row in csv_reader(reader).deserialize::<FlightRow>() {
        airline.add_flight(row?.into_flight()?);
    }
    Ok(airline)
}

/// Reads pre-existing reservations.
///
/// Rows are only checked for shape here. Flight numbers and dates are
/// validated when the ledger loads them.
///
/// # Errors
///
/// Fails on the first unreadable row.
pub fn load_reservations<R: Read>(reader: R) -> Result<Vec<SeedReservation>, SeedError> {
    csv_reader(reader)
        .deserialize::<SeedReservation>()
        .map(|row| row.map_err(SeedError::from))
        .collect()
}

/// Opens a seed file for buffered reading.
///
/// # Errors
///
/// Returns [`SeedError::Open`] if the file cannot be opened.
pub fn open_seed_file(path: &Path) -> Result<BufReader<File>, SeedError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| SeedError::Open {
            path: path.display().to_string(),
            source,
        })
}
