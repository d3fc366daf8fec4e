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

//! # Flight Reservations
//!
//! This library provides an in-memory ticket reservation ledger for a
//! single airline's flight catalogue, plus the interactive text menu the
//! binary runs on top of it.
//!
//! ## Core Components
//!
//! - [`ReservationLedger`]: Validates bookings, assigns reservation IDs, handles cancellations
//! - [`Airline`]: Ordered flight directory with flight-number lookup
//! - [`Flight`]: Bookable flight with capacity and booked-seat count
//! - [`ReservationRecord`]: Snapshot of one completed booking
//! - [`ReservationError`]: Reasons a reserve or cancel request is rejected
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use flight_reservations::{
//!     Airline, FixedClock, Flight, ReservationError, ReservationId, ReservationLedger,
//! };
//! use rust_decimal_macros::dec;
//!
//! let mut airline = Airline::new("Example Air");
//! airline.add_flight(Flight::domestic("D123", "Budapest", dec!(15000), 1));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let mut ledger = ReservationLedger::with_clock(airline, FixedClock(today));
//!
//! // Book the only seat
//! let price = ledger.reserve_ticket("D123", "Kiss János", "2025-06-01").unwrap();
//! assert_eq!(price, dec!(15000));
//!
//! // The flight is now full
//! let result = ledger.reserve_ticket("D123", "Nagy Éva", "2025-06-01");
//! assert_eq!(result, Err(ReservationError::FlightFull));
//!
//! // Cancelling frees the seat again
//! ledger.cancel_reservation(ReservationId(1)).unwrap();
//! assert!(ledger.airline().find_flight("D123").unwrap().is_available());
//! ```
//!
//! ## Thread Safety
//!
//! [`ReservationLedger`] takes `&mut self` for every change. Wrap it in a
//! [`SharedLedger`] to share one ledger between threads; each reserve or
//! cancel then runs under a single lock.

pub mod airline;
mod base;
pub mod calendar;
pub mod error;
pub mod flight;
mod ledger;
pub mod menu;
mod reservation;
pub mod seed;
mod shared;

pub use airline::Airline;
pub use base::ReservationId;
pub use calendar::{Clock, FixedClock, SystemClock};
pub use error::{MenuError, ReservationError, SeedError};
pub use flight::{Flight, FlightCategory};
pub use ledger::{ReservationLedger, SeedRejection};
pub use reservation::ReservationRecord;
pub use shared::SharedLedger;
