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

//! Thread-safe handle to a reservation ledger.
//!
//! Reserve and cancel both read and update flight seat counts and the ID
//! counter, so each call takes the ledger lock for its whole duration.

use crate::base::ReservationId;
use crate::calendar::{Clock, SystemClock};
use crate::ledger::ReservationLedger;
use crate::reservation::ReservationRecord;
use crate::ReservationError;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Cloneable handle serializing access to one [`ReservationLedger`].
#[derive(Debug)]
pub struct SharedLedger<C = SystemClock> {
    inner: Arc<Mutex<ReservationLedger<C>>>,
}

impl<C> Clone for SharedLedger<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedLedger<C> {
    pub fn new(ledger: ReservationLedger<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// See [`ReservationLedger::reserve_ticket`].
    pub fn reserve_ticket(
        &self,
        flight_number: &str,
        passenger_name: &str,
        date: &str,
    ) -> Result<Decimal, ReservationError> {
        self.inner.lock().reserve_ticket(flight_number, passenger_name, date)
    }

    /// See [`ReservationLedger::cancel_reservation`].
    pub fn cancel_reservation(&self, id: ReservationId) -> Result<(), ReservationError> {
        self.inner.lock().cancel_reservation(id)
    }

    pub fn list_reservations(&self) -> Vec<ReservationRecord> {
        self.inner.lock().list_reservations()
    }

    /// Runs `f` with exclusive access to the ledger.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut ReservationLedger<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
