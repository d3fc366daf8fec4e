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

//! Reservation records.

use crate::base::ReservationId;
use rust_decimal::Decimal;
use std::fmt;

/// Snapshot of one completed booking.
///
/// The record refers to its flight by directory position and copies the
/// flight number and destination for display. The price is the flight's
/// ticket price at booking time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    id: ReservationId,
    flight_index: usize,
    flight_number: String,
    destination: String,
    passenger_name: String,
    date: String,
    price: Decimal,
}

impl ReservationRecord {
    pub(crate) fn new(
        id: ReservationId,
        flight_index: usize,
        flight_number: String,
        destination: String,
        passenger_name: String,
        date: String,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            flight_index,
            flight_number,
            destination,
            passenger_name,
            date,
            price,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    /// The date exactly as the passenger entered it.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub(crate) fn flight_index(&self) -> usize {
        self.flight_index
    }
}

impl fmt::Display for ReservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation ID: {}, Flight: {}, Destination: {}, Passenger: {}, Date: {}, Price: {}",
            self.id,
            self.flight_number,
            self.destination,
            self.passenger_name,
            self.date,
            self.price
        )
    }
}
