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

//! Calendar access and reservation date parsing.
//!
//! The ledger never reads the system time directly. It asks a [`Clock`] for
//! today's date, so tests and the `--today` flag can pin the calendar.

use crate::ReservationError;
use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date, without a time of day.
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Parses a reservation date in strict `YYYY-MM-DD` form.
///
/// Exactly four year digits, two month digits, and two day digits are
/// required. No surrounding text or whitespace is accepted, and the date
/// must exist in the calendar (`2023-02-29` is rejected).
///
/// # Errors
///
/// Returns [`ReservationError::InvalidDateFormat`] for anything else.
pub fn parse_reservation_date(text: &str) -> Result<NaiveDate, ReservationError> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ReservationError::InvalidDateFormat);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ReservationError::InvalidDateFormat)
}
