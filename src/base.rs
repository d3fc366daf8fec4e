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

//! Core identifier types for reservations.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a reservation.
///
/// Wraps a `u32`. IDs are handed out by the ledger starting at 1 and are
/// never reused, even after the reservation is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(pub u32);

impl ReservationId {
    /// The first ID a fresh ledger assigns.
    pub const FIRST: ReservationId = ReservationId(1);

    /// # Panics
    ///
    /// Panics once every `u32` ID has been handed out, since IDs are never
    /// reused.
    pub(crate) fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(id) => ReservationId(id),
            None => panic!("Invariant violated: reservation IDs exhausted"),
        }
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ReservationId)
    }
}
