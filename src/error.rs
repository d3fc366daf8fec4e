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

//! Error types for reservation processing.

use thiserror::Error;

/// Reasons a reserve or cancel request is rejected.
///
/// A rejected request never changes ledger state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// No flight with the requested flight number exists
    #[error("flight not found")]
    FlightNotFound,

    /// Every seat on the flight is already booked
    #[error("flight is full")]
    FlightFull,

    /// Date text is not a valid `YYYY-MM-DD` calendar date
    #[error("invalid date format (expected YYYY-MM-DD)")]
    InvalidDateFormat,

    /// Date is earlier than today
    #[error("date is in the past")]
    InvalidDate,

    /// No live reservation carries the requested ID
    #[error("reservation not found")]
    ReservationNotFound,
}

/// Errors from the interactive menu's cancel flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The reservation ID text is not an integer
    #[error("invalid reservation ID format: {0:?}")]
    InvalidIdFormat(String),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Errors raised while loading seed catalogue or reservation files.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The file could not be opened
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read or deserialized
    #[error("malformed seed row: {0}")]
    Csv(#[from] csv::Error),

    /// A flight was declared with zero seats
    #[error("flight {0} must have a positive capacity")]
    ZeroCapacity(String),

    /// A flight was declared with a negative ticket price
    #[error("flight {0} must have a non-negative ticket price")]
    NegativePrice(String),
}
