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

//! Airline flight directory.

use crate::flight::Flight;

/// Ordered catalogue of one airline's flights.
///
/// Flights are kept in insertion order and are never removed, so a
/// flight's position is a stable handle for the lifetime of the directory.
#[derive(Debug, Clone)]
pub struct Airline {
    name: String,
    flights: Vec<Flight>,
}

impl Airline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a flight to the catalogue.
    ///
    /// Flight numbers are not checked for uniqueness; lookups return the
    /// first flight added under a given number.
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    /// Finds a flight by exact, case-sensitive flight number.
    pub fn find_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number() == flight_number)
    }

    pub fn find_flight_mut(&mut self, flight_number: &str) -> Option<&mut Flight> {
        self.flights
            .iter_mut()
            .find(|flight| flight.flight_number() == flight_number)
    }

    /// Returns an iterator over the flights in insertion order.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub(crate) fn position(&self, flight_number: &str) -> Option<usize> {
        self.flights
            .iter()
            .position(|flight| flight.flight_number() == flight_number)
    }

    pub(crate) fn flight_at(&self, index: usize) -> &Flight {
        &self.flights[index]
    }

    pub(crate) fn flight_at_mut(&mut self, index: usize) -> &mut Flight {
        &mut self.flights[index]
    }

    pub(crate) fn clear_bookings(&mut self) {
        for flight in &mut self.flights {
            flight.clear_bookings();
        }
    }
}

impl Extend<Flight> for Airline {
    fn extend<I: IntoIterator<Item = Flight>>(&mut self, iter: I) {
        self.flights.extend(iter);
    }
}
