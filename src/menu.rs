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

//! Interactive text menu over a reservation ledger.
//!
//! The menu reads one answer per line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so it runs the same against a
//! terminal or an in-memory script. End of input ends the session.

use crate::base::ReservationId;
use crate::calendar::Clock;
use crate::error::{MenuError, ReservationError};
use crate::flight::Flight;
use crate::ledger::ReservationLedger;
use std::io::{self, BufRead, Write};

/// User-facing message for a rejected request.
pub fn error_message(error: &MenuError) -> &'static str {
    match error {
        MenuError::InvalidIdFormat(_) => "Invalid ID format!",
        MenuError::Reservation(ReservationError::FlightNotFound) => "Flight not found!",
        MenuError::Reservation(ReservationError::FlightFull) => "Flight is full!",
        MenuError::Reservation(ReservationError::InvalidDateFormat) => {
            "Invalid date format! Use YYYY-MM-DD."
        }
        MenuError::Reservation(ReservationError::InvalidDate) => "Invalid date!",
        MenuError::Reservation(ReservationError::ReservationNotFound) => "Reservation not found!",
    }
}

/// Parses the reservation ID typed at the cancel prompt.
///
/// Any integer, with optional sign and surrounding whitespace, is a well
/// formed ID. Integers outside the ID range cannot name a reservation.
///
/// # Errors
///
/// - [`MenuError::InvalidIdFormat`] - The text is not an integer.
/// - [`ReservationError::ReservationNotFound`] - The integer is negative or
///   larger than any reservation ID.
pub fn parse_reservation_id(text: &str) -> Result<ReservationId, MenuError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MenuError::InvalidIdFormat(text.to_owned()));
    }

    trimmed
        .parse()
        .map_err(|_| MenuError::from(ReservationError::ReservationNotFound))
}

/// One line of the flight list shown before booking.
pub fn flight_line(flight: &Flight) -> String {
    let status = if flight.is_available() {
        format!("Free seats: {}", flight.free_seats())
    } else {
        "Full".to_owned()
    };
    format!(
        "{} - {} ({}), Price: {}, Status: {}",
        flight.flight_number(),
        flight.destination(),
        flight.category(),
        flight.ticket_price(),
        status
    )
}

enum Flow {
    Continue,
    Exit,
}

struct Menu<'a, C, R, W> {
    ledger: &'a mut ReservationLedger<C>,
    input: R,
    output: W,
}

/// Runs the menu until the user exits or input ends.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails. Rejected
/// requests are reported to the user and never end the session.
pub fn run_menu<C: Clock, R: BufRead, W: Write>(
    ledger: &mut ReservationLedger<C>,
    input: R,
    output: W,
) -> io::Result<()> {
    Menu {
        ledger,
        input,
        output,
    }
    .run()
}

impl<C: Clock, R: BufRead, W: Write> Menu<'_, C, R, W> {
    fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the flight ticket reservation system!")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose an operation:")?;
            writeln!(self.output, "1. Reserve a ticket")?;
            writeln!(self.output, "2. Cancel a reservation")?;
            writeln!(self.output, "3. List reservations")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.reserve()?,
                "2" => self.cancel()?,
                "3" => {
                    self.list()?;
                    Flow::Continue
                }
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.output.flush()
    }

    /// Writes `label` and reads one line, without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn reserve(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "Available flights:")?;
        for flight in self.ledger.airline().flights() {
            writeln!(self.output, "{}", flight_line(flight))?;
        }

        let Some(flight_number) = self.prompt("Flight number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(passenger_name) = self.prompt("Passenger name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match self
            .ledger
            .reserve_ticket(&flight_number, &passenger_name, &date)
        {
            Ok(price) => {
                writeln!(self.output, "Reservation successful!")?;
                writeln!(self.output, "Amount due: {price}")?;
            }
            Err(error) => writeln!(self.output, "{}", error_message(&MenuError::from(error)))?,
        }
        Ok(Flow::Continue)
    }

    fn cancel(&mut self) -> io::Result<Flow> {
        let Some(text) = self.prompt("Reservation ID: ")? else {
            return Ok(Flow::Exit);
        };

        let result = parse_reservation_id(&text)
            .and_then(|id| self.ledger.cancel_reservation(id).map_err(MenuError::from));
        match result {
            Ok(()) => writeln!(self.output, "Reservation cancelled!")?,
            Err(error) => writeln!(self.output, "{}", error_message(&error))?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<()> {
        let reservations = self.ledger.list_reservations();
        if reservations.is_empty() {
            return writeln!(self.output, "No reservations");
        }

        writeln!(self.output)?;
        writeln!(self.output, "All reservations:")?;
        for reservation in &reservations {
            writeln!(self.output, "{reservation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn flight_line_shows_free_seats() {
        let flight = Flight::international("I789", "London", dec!(50000), 3);
        assert_eq!(
            flight_line(&flight),
            "I789 - London (International), Price: 50000, Status: Free seats: 3"
        );
    }

    #[test]
    fn flight_line_marks_full_flights() {
        let flight = Flight::domestic("D0", "Nowhere", dec!(1), 0);
        assert!(flight_line(&flight).ends_with("Status: Full"));
    }

    #[test]
    fn id_parsing_distinguishes_bad_format() {
        assert_eq!(parse_reservation_id("12"), Ok(ReservationId(12)));
        assert_eq!(parse_reservation_id(" +12 "), Ok(ReservationId(12)));
        for text in ["twelve", "", "-", "1.5", "1e3", "--1", "1 2"] {
            assert_eq!(
                parse_reservation_id(text),
                Err(MenuError::InvalidIdFormat(text.into())),
                "{text:?} should be a format error"
            );
        }
    }

    #[test]
    fn out_of_range_integers_are_not_found() {
        for text in ["-3", "-0", "4294967296", "99999999999", "123456789012345678901234567890"] {
            assert_eq!(
                parse_reservation_id(text),
                Err(MenuError::Reservation(ReservationError::ReservationNotFound)),
                "{text:?} should be a well formed but unknown ID"
            );
        }
    }

    #[test]
    fn messages_are_distinct_per_kind() {
        let errors = [
            MenuError::InvalidIdFormat(String::new()),
            ReservationError::FlightNotFound.into(),
            ReservationError::FlightFull.into(),
            ReservationError::InvalidDateFormat.into(),
            ReservationError::InvalidDate.into(),
            ReservationError::ReservationNotFound.into(),
        ];
        let mut messages: Vec<_> = errors.iter().map(error_message).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }
}
