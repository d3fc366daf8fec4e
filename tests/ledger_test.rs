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

//! Ledger public API integration tests.

use chrono::{Days, NaiveDate};
use flight_reservations::seed::default_ledger;
use flight_reservations::{
    Airline, FixedClock, Flight, ReservationError, ReservationId, ReservationLedger,
};
use rust_decimal_macros::dec;

const TODAY: &str = "2025-05-20";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

fn make_ledger(flights: Vec<Flight>) -> ReservationLedger<FixedClock> {
    let mut airline = Airline::new("Test Air");
    airline.extend(flights);
    ReservationLedger::with_clock(airline, FixedClock(today()))
}

fn seeded() -> ReservationLedger<FixedClock> {
    let (ledger, rejected) = default_ledger(FixedClock(today()));
    assert!(rejected.is_empty());
    ledger
}

fn booked(ledger: &ReservationLedger<FixedClock>, flight_number: &str) -> u32 {
    ledger.airline().find_flight(flight_number).unwrap().booked_seats()
}

fn ids(ledger: &ReservationLedger<FixedClock>) -> Vec<u32> {
    ledger.list_reservations().iter().map(|r| r.id().0).collect()
}

// === Reserve ===

#[test]
fn reserve_returns_price_and_books_seat() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 2)]);

    let price = ledger.reserve_ticket("D1", "Kiss János", "2025-06-01").unwrap();

    assert_eq!(price, dec!(9000));
    assert_eq!(booked(&ledger, "D1"), 1);
    let records = ledger.list_reservations();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), ReservationId(1));
    assert_eq!(records[0].flight_number(), "D1");
    assert_eq!(records[0].destination(), "Szeged");
    assert_eq!(records[0].passenger_name(), "Kiss János");
    assert_eq!(records[0].date(), "2025-06-01");
}

#[test]
fn reserve_accepts_empty_passenger_name() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 2)]);
    ledger.reserve_ticket("D1", "", TODAY).unwrap();
    assert_eq!(ledger.list_reservations()[0].passenger_name(), "");
}

#[test]
fn reserve_today_is_allowed() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 2)]);
    assert!(ledger.reserve_ticket("D1", "A", TODAY).is_ok());
}

#[test]
fn reserve_yesterday_is_invalid_date() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 2)]);
    let yesterday = (today() - Days::new(1)).format("%Y-%m-%d").to_string();

    let result = ledger.reserve_ticket("D1", "A", &yesterday);

    assert_eq!(result, Err(ReservationError::InvalidDate));
    assert_eq!(booked(&ledger, "D1"), 0);
    assert_eq!(ledger.reservation_count(), 0);
    assert_eq!(ledger.next_reservation_id(), ReservationId(1));
}

#[test]
fn reserve_unknown_flight_does_not_consume_id() {
    let mut ledger = seeded();
    let next = ledger.next_reservation_id();

    let result = ledger.reserve_ticket("D999", "X", "2024-06-01");
    assert_eq!(result, Err(ReservationError::FlightNotFound));
    assert_eq!(ledger.next_reservation_id(), next);

    ledger.reserve_ticket("D456", "X", "2025-12-24").unwrap();
    assert_eq!(ledger.list_reservations().last().unwrap().id(), next);
}

#[test]
fn reserve_lookup_is_case_sensitive() {
    let mut ledger = seeded();
    assert_eq!(
        ledger.reserve_ticket("d456", "X", TODAY),
        Err(ReservationError::FlightNotFound)
    );
}

#[test]
fn reserve_rejects_wrong_date_layout() {
    let mut ledger = seeded();
    assert_eq!(
        ledger.reserve_ticket("D456", "X", "15-06-2024"),
        Err(ReservationError::InvalidDateFormat)
    );
    assert_eq!(
        ledger.reserve_ticket("D456", "X", "2025-02-30"),
        Err(ReservationError::InvalidDateFormat)
    );
}

#[test]
fn reserve_stores_date_verbatim() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 2)]);
    ledger.reserve_ticket("D1", "A", "2026-01-09").unwrap();
    assert_eq!(ledger.list_reservations()[0].date(), "2026-01-09");
}

#[test]
fn full_flight_rejects_reservation_without_side_effects() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 1)]);
    ledger.reserve_ticket("D1", "A", TODAY).unwrap();
    let before = ledger.list_reservations();

    let result = ledger.reserve_ticket("D1", "B", TODAY);

    assert_eq!(result, Err(ReservationError::FlightFull));
    assert_eq!(booked(&ledger, "D1"), 1);
    assert_eq!(ledger.list_reservations(), before);
    assert_eq!(ledger.next_reservation_id(), ReservationId(2));
}

#[test]
fn full_check_precedes_date_checks() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 1)]);
    ledger.reserve_ticket("D1", "A", TODAY).unwrap();
    assert_eq!(
        ledger.reserve_ticket("D1", "B", "not a date"),
        Err(ReservationError::FlightFull)
    );
}

#[test]
fn price_is_captured_at_booking_time() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 3)]);
    ledger.reserve_ticket("D1", "A", TODAY).unwrap();

    ledger.set_ticket_price("D1", dec!(12000)).unwrap();
    let price = ledger.reserve_ticket("D1", "B", TODAY).unwrap();

    assert_eq!(price, dec!(12000));
    let prices: Vec<_> = ledger.list_reservations().iter().map(|r| r.price()).collect();
    assert_eq!(prices, [dec!(9000), dec!(12000)]);
}

#[test]
fn set_price_on_unknown_flight_fails() {
    let mut ledger = seeded();
    assert_eq!(
        ledger.set_ticket_price("NOPE", dec!(1)),
        Err(ReservationError::FlightNotFound)
    );
}

#[test]
fn duplicate_flight_numbers_book_first_match() {
    let mut ledger = make_ledger(vec![
        Flight::domestic("X1", "First", dec!(1), 1),
        Flight::domestic("X1", "Second", dec!(2), 1),
    ]);

    ledger.reserve_ticket("X1", "A", TODAY).unwrap();
    assert_eq!(ledger.list_reservations()[0].destination(), "First");
    assert_eq!(
        ledger.reserve_ticket("X1", "B", TODAY),
        Err(ReservationError::FlightFull)
    );
}

#[test]
fn added_flight_is_bookable() {
    let mut ledger = seeded();
    ledger.add_flight(Flight::international("I100", "Paris", dec!(42000), 1));
    assert_eq!(ledger.reserve_ticket("I100", "A", TODAY), Ok(dec!(42000)));
}

// === ID Assignment ===

#[test]
fn ids_increase_and_are_never_reused() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 5)]);

    ledger.reserve_ticket("D1", "A", TODAY).unwrap();
    ledger.reserve_ticket("D1", "B", TODAY).unwrap();
    ledger.cancel_reservation(ReservationId(1)).unwrap();
    ledger.reserve_ticket("D1", "C", TODAY).unwrap();

    assert_eq!(ids(&ledger), [2, 3]);
    assert_eq!(ledger.next_reservation_id(), ReservationId(4));
}

// === Cancel ===

#[test]
fn cancel_frees_seat_and_removes_record() {
    let mut ledger = seeded();
    assert_eq!(booked(&ledger, "D123"), 2);

    ledger.cancel_reservation(ReservationId(1)).unwrap();

    assert_eq!(booked(&ledger, "D123"), 1);
    let records = ledger.list_reservations();
    assert!(records.iter().all(|r| r.passenger_name() != "Kiss János"));
    assert_eq!(records.len(), 5);

    assert_eq!(
        ledger.cancel_reservation(ReservationId(1)),
        Err(ReservationError::ReservationNotFound)
    );
    assert_eq!(booked(&ledger, "D123"), 1);
}

#[test]
fn cancel_unknown_id_changes_nothing() {
    let mut ledger = seeded();
    let before = ledger.list_reservations();

    assert_eq!(
        ledger.cancel_reservation(ReservationId(99)),
        Err(ReservationError::ReservationNotFound)
    );
    assert_eq!(
        ledger.cancel_reservation(ReservationId(0)),
        Err(ReservationError::ReservationNotFound)
    );
    assert_eq!(ledger.list_reservations(), before);
}

#[test]
fn cancel_reopens_full_flight() {
    let mut ledger = seeded();
    assert_eq!(
        ledger.reserve_ticket("D123", "X", TODAY),
        Err(ReservationError::FlightFull)
    );

    ledger.cancel_reservation(ReservationId(2)).unwrap();
    assert_eq!(ledger.reserve_ticket("D123", "X", TODAY), Ok(dec!(15000)));
    assert_eq!(ledger.list_reservations().last().unwrap().id(), ReservationId(7));
}

// === Listing ===

#[test]
fn list_is_in_booking_order() {
    let ledger = seeded();
    let names: Vec<_> = ledger
        .list_reservations()
        .iter()
        .map(|r| r.passenger_name().to_owned())
        .collect();
    assert_eq!(
        names,
        ["Kiss János", "Nagy Éva", "Smith John", "Kovács Anna", "Szabó Péter", "Tóth Eszter"]
    );
    assert_eq!(ids(&ledger), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn list_returns_independent_copy() {
    let ledger = seeded();
    let mut snapshot = ledger.list_reservations();
    snapshot.clear();

    assert_eq!(ledger.list_reservations().len(), 6);
}

#[test]
fn list_on_empty_ledger() {
    let ledger = make_ledger(vec![]);
    assert!(ledger.list_reservations().is_empty());
}

// === Seed Scenarios ===

#[test]
fn seeded_d123_is_full() {
    let mut ledger = seeded();
    let d123 = ledger.airline().find_flight("D123").unwrap();
    assert_eq!(d123.booked_seats(), 2);
    assert!(!d123.is_available());

    assert_eq!(
        ledger.reserve_ticket("D123", "X", TODAY),
        Err(ReservationError::FlightFull)
    );
}

#[test]
fn seeded_i789_is_full() {
    let mut ledger = seeded();
    let count = ledger.reservation_count();

    assert_eq!(
        ledger.reserve_ticket("I789", "Test User", "2024-07-15"),
        Err(ReservationError::FlightFull)
    );
    assert_eq!(ledger.reservation_count(), count);
    assert_eq!(booked(&ledger, "I789"), 3);
}

#[test]
fn seed_accepts_past_dates_but_not_bad_rows() {
    let mut airline = Airline::new("Test Air");
    airline.add_flight(Flight::domestic("D1", "Szeged", dec!(9000), 1));

    let (ledger, rejected) = ReservationLedger::from_seed(
        airline,
        [
            ("D1", "Old", "1999-01-01"),
            ("D1", "Over", "1999-01-01"),
            ("D2", "Lost", "1999-01-01"),
            ("D1", "Bad", "01/01/1999"),
        ],
        FixedClock(today()),
    );

    assert_eq!(ledger.reservation_count(), 1);
    let errors: Vec<_> = rejected.iter().map(|r| (r.index, r.error.clone())).collect();
    assert_eq!(
        errors,
        [
            (1, ReservationError::FlightFull),
            (2, ReservationError::FlightNotFound),
            (3, ReservationError::FlightFull),
        ]
    );
    assert_eq!(ledger.next_reservation_id(), ReservationId(2));
}

#[test]
fn preload_still_validates_format() {
    let mut ledger = make_ledger(vec![Flight::domestic("D1", "Szeged", dec!(9000), 3)]);
    assert_eq!(
        ledger.preload_reservation("D1", "A", "1999-1-1"),
        Err(ReservationError::InvalidDateFormat)
    );
    assert_eq!(ledger.preload_reservation("D1", "A", "1999-01-01"), Ok(dec!(9000)));
}
