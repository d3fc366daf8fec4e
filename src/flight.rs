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

//! Flight catalogue entries.
//!
//! # Example
//!
//! ```
//! use flight_reservations::{Flight, FlightCategory};
//! use rust_decimal_macros::dec;
//!
//! let flight = Flight::domestic("D123", "Budapest", dec!(15000), 2);
//! assert_eq!(flight.category(), FlightCategory::Domestic);
//! assert!(flight.is_available());
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Kind of route a flight serves.
///
/// Only affects the label shown in the flight list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightCategory {
    Domestic,
    International,
}

impl FlightCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::International => "International",
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bookable flight with its capacity and current booking count.
///
/// # Invariants
///
/// - `booked_seats <= capacity`.
/// - `booked_seats` only changes through the reservation ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    flight_number: String,
    destination: String,
    ticket_price: Decimal,
    capacity: u32,
    booked_seats: u32,
    category: FlightCategory,
}

impl Flight {
    /// Creates a flight with no seats booked.
    ///
    /// A `capacity` of zero is accepted and describes a closed flight that
    /// is never available. Seed files reject zero-capacity rows; see
    /// [`SeedError::ZeroCapacity`](crate::SeedError::ZeroCapacity).
    pub fn new(
        flight_number: impl Into<String>,
        destination: impl Into<String>,
        ticket_price: Decimal,
        capacity: u32,
        category: FlightCategory,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            destination: destination.into(),
            ticket_price,
            capacity,
            booked_seats: 0,
            category,
        }
    }

    pub fn domestic(
        flight_number: impl Into<String>,
        destination: impl Into<String>,
        ticket_price: Decimal,
        capacity: u32,
    ) -> Self {
        Self::new(
            flight_number,
            destination,
            ticket_price,
            capacity,
            FlightCategory::Domestic,
        )
    }

    pub fn international(
        flight_number: impl Into<String>,
        destination: impl Into<String>,
        ticket_price: Decimal,
        capacity: u32,
    ) -> Self {
        Self::new(
            flight_number,
            destination,
            ticket_price,
            capacity,
            FlightCategory::International,
        )
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn ticket_price(&self) -> Decimal {
        self.ticket_price
    }

    /// Changes the price charged for future reservations.
    ///
    /// Existing reservations keep the price they were booked at.
    pub fn set_ticket_price(&mut self, ticket_price: Decimal) {
        self.ticket_price = ticket_price;
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    pub fn category(&self) -> FlightCategory {
        self.category
    }

    /// Returns `true` while at least one seat is unbooked.
    pub fn is_available(&self) -> bool {
        self.booked_seats < self.capacity
    }

    /// Returns `capacity - booked_seats`.
    pub fn free_seats(&self) -> u32 {
        self.capacity - self.booked_seats
    }

    pub(crate) fn book_seat(&mut self) {
        debug_assert!(
            self.is_available(),
            "Invariant violated: flight {} booked beyond capacity {}",
            self.flight_number,
            self.capacity
        );
        self.booked_seats += 1;
    }

    pub(crate) fn release_seat(&mut self) {
        debug_assert!(
            self.booked_seats > 0,
            "Invariant violated: flight {} released a seat with none booked",
            self.flight_number
        );
        self.booked_seats = self.booked_seats.saturating_sub(1);
    }

    pub(crate) fn clear_bookings(&mut self) {
        self.booked_seats = 0;
    }
}
