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

//! Reservation ledger.
//!
//! The [`ReservationLedger`] owns an airline's flight directory and every
//! live reservation against it. It validates booking requests, assigns
//! reservation IDs, and keeps each flight's booked-seat count in step with
//! the reservations that reference it.
//!
//! # Booking Checks
//!
//! A reserve request is checked in this order, stopping at the first failure:
//!
//! 1. The flight number must exist in the directory.
//! 2. The flight must have a free seat.
//! 3. The date must be a strict `YYYY-MM-DD` calendar date.
//! 4. The date must not be earlier than the clock's today.
//!
//! A rejected request leaves the seat counts, the ID counter, and the
//! reservation list untouched.

use crate::airline::Airline;
use crate::base::ReservationId;
use crate::calendar::{Clock, SystemClock, parse_reservation_date};
use crate::flight::Flight;
use crate::reservation::ReservationRecord;
use crate::ReservationError;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// A seed reservation the ledger refused to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRejection {
    /// Position of the reservation in the seed input.
    pub index: usize,
    pub error: ReservationError,
}

/// Reservation bookkeeping for one airline.
///
/// # Invariants
///
/// - For every flight, `booked_seats` equals the number of live
///   reservations referencing it.
/// - Reservation IDs start at 1, increase by one per successful booking,
///   and are never reused after a cancellation.
/// - Reservations are listed in booking order.
#[derive(Debug)]
pub struct ReservationLedger<C = SystemClock> {
    airline: Airline,
    reservations: Vec<ReservationRecord>,
    next_id: ReservationId,
    clock: C,
}

impl ReservationLedger<SystemClock> {
    /// Creates a ledger that checks dates against the host's local calendar.
    pub fn new(airline: Airline) -> Self {
        Self::with_clock(airline, SystemClock)
    }
}

impl<C: Clock> ReservationLedger<C> {
    /// Creates an empty ledger over `airline`.
    ///
    /// The ledger starts with no reservations, so any booked-seat counts the
    /// directory carries in are cleared.
    pub fn with_clock(mut airline: Airline, clock: C) -> Self {
        airline.clear_bookings();
        Self {
            airline,
            reservations: Vec::new(),
            next_id: ReservationId::FIRST,
            clock,
        }
    }

    /// Builds a ledger and loads pre-existing reservations into it.
    ///
    /// Each `(flight_number, passenger_name, date)` tuple goes through
    /// [`preload_reservation`](Self::preload_reservation). Rows that fail
    /// are skipped and returned alongside the ledger.
    pub fn from_seed<I, F, N, D>(
        airline: Airline,
        reservations: I,
        clock: C,
    ) -> (Self, Vec<SeedRejection>)
    where
        I: IntoIterator<Item = (F, N, D)>,
        F: AsRef<str>,
        N: AsRef<str>,
        D: AsRef<str>,
    {
        let mut ledger = Self::with_clock(airline, clock);
        let mut rejected = Vec::new();

        for (index, (flight_number, passenger_name, date)) in reservations.into_iter().enumerate() {
            if let Err(error) = ledger.preload_reservation(
                flight_number.as_ref(),
                passenger_name.as_ref(),
                date.as_ref(),
            ) {
                rejected.push(SeedRejection { index, error });
            }
        }

        (ledger, rejected)
    }

    /// Books a seat on `flight_number` and returns the price charged.
    ///
    /// The passenger name is stored as given, including an empty name. The
    /// date text is stored verbatim once it passes validation.
    ///
    /// # Errors
    ///
    /// - [`ReservationError::FlightNotFound`] - No flight has this number.
    /// - [`ReservationError::FlightFull`] - Every seat is booked.
    /// - [`ReservationError::InvalidDateFormat`] - The date is not `YYYY-MM-DD`.
    /// - [`ReservationError::InvalidDate`] - The date is before today.
    pub fn reserve_ticket(
        &mut self,
        flight_number: &str,
        passenger_name: &str,
        date: &str,
    ) -> Result<Decimal, ReservationError> {
        self.book(flight_number, passenger_name, date, true)
    }

    /// Books a historical reservation, such as one loaded at startup.
    ///
    /// Behaves like [`reserve_ticket`](Self::reserve_ticket) except that
    /// dates earlier than today are accepted.
    ///
    /// # Errors
    ///
    /// Same as [`reserve_ticket`](Self::reserve_ticket), minus
    /// [`ReservationError::InvalidDate`].
    pub fn preload_reservation(
        &mut self,
        flight_number: &str,
        passenger_name: &str,
        date: &str,
    ) -> Result<Decimal, ReservationError> {
        self.book(flight_number, passenger_name, date, false)
    }

    fn book(
        &mut self,
        flight_number: &str,
        passenger_name: &str,
        date: &str,
        reject_past: bool,
    ) -> Result<Decimal, ReservationError> {
        let result = self.validate(flight_number, date, reject_past);
        let flight_index = match result {
            Ok(index) => index,
            Err(error) => {
                debug!(flight = flight_number, date, %error, "reservation rejected");
                return Err(error);
            }
        };

        let id = self.next_id;
        self.next_id = id.next();

        let flight = self.airline.flight_at_mut(flight_index);
        let price = flight.ticket_price();
        let record = ReservationRecord::new(
            id,
            flight_index,
            flight.flight_number().to_owned(),
            flight.destination().to_owned(),
            passenger_name.to_owned(),
            date.to_owned(),
            price,
        );
        flight.book_seat();
        self.reservations.push(record);

        info!(reservation_id = %id, flight = flight_number, %price, "reservation booked");
        Ok(price)
    }

    /// Runs every booking check without touching state.
    fn validate(
        &self,
        flight_number: &str,
        date: &str,
        reject_past: bool,
    ) -> Result<usize, ReservationError> {
        let flight_index = self
            .airline
            .position(flight_number)
            .ok_or(ReservationError::FlightNotFound)?;

        if !self.airline.flight_at(flight_index).is_available() {
            return Err(ReservationError::FlightFull);
        }

        let date = parse_reservation_date(date)?;
        if reject_past && date < self.clock.today() {
            return Err(ReservationError::InvalidDate);
        }

        Ok(flight_index)
    }

    /// Cancels a reservation and frees its seat.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::ReservationNotFound`] if no live
    /// reservation has this ID (including one already cancelled).
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<(), ReservationError> {
        let Some(position) = self.reservations.iter().position(|r| r.id() == id) else {
            debug!(reservation_id = %id, "cancellation rejected: reservation not found");
            return Err(ReservationError::ReservationNotFound);
        };

        let record = self.reservations.remove(position);
        self.airline.flight_at_mut(record.flight_index()).release_seat();

        info!(reservation_id = %id, flight = record.flight_number(), "reservation cancelled");
        Ok(())
    }

    /// Returns a copy of the live reservations in booking order.
    pub fn list_reservations(&self) -> Vec<ReservationRecord> {
        self.reservations.clone()
    }

    /// Returns the number of live reservations.
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// The ID the next successful booking will receive.
    pub fn next_reservation_id(&self) -> ReservationId {
        self.next_id
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    /// Adds a flight to the catalogue.
    pub fn add_flight(&mut self, mut flight: Flight) {
        flight.clear_bookings();
        self.airline.add_flight(flight);
    }

    /// Changes the ticket price of a flight for future bookings.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::FlightNotFound`] if no flight has this number.
    pub fn set_ticket_price(
        &mut self,
        flight_number: &str,
        ticket_price: Decimal,
    ) -> Result<(), ReservationError> {
        let flight = self
            .airline
            .find_flight_mut(flight_number)
            .ok_or(ReservationError::FlightNotFound)?;
        flight.set_ticket_price(ticket_price);
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
