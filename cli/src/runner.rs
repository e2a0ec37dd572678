//! Executes parsed script commands against one in-memory service

use serde_json::{json, Value};
use tracing::warn;

use room_reservations::{DomainError, NewReservation, ReservationService, Room};

use crate::script::{self, Command};

pub struct Runner {
    service: ReservationService,
}

impl Runner {
    pub fn new(service: ReservationService) -> Self {
        Self { service }
    }

    /// Run one script line; `None` for lines that carry no command.
    pub fn run_line(&mut self, line_no: usize, line: &str) -> Option<Value> {
        match script::parse_line(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping malformed script line");
                Some(json!({
                    "error": { "kind": "parse", "line": line_no, "message": e.to_string() }
                }))
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Value {
        match command {
            Command::Room { id, name, capacity } => match Room::new(id, name, capacity) {
                Ok(room) => {
                    self.service.register_room(room.clone());
                    json!({ "ok": room })
                }
                Err(e) => error_value(&DomainError::from(e)),
            },
            Command::Reserve {
                room_id,
                start,
                end,
                requester,
            } => {
                let request = NewReservation {
                    room_id,
                    start_time: Some(start),
                    end_time: Some(end),
                    requester,
                };
                match self.service.create_reservation(request) {
                    Ok(reservation) => json!({ "ok": reservation }),
                    Err(e) => error_value(&e),
                }
            }
            Command::Cancel { id } => match self.service.cancel_reservation(id) {
                Ok(reservation) => json!({ "ok": reservation }),
                Err(e) => error_value(&e),
            },
            Command::List { room_id: None } => {
                let active: Vec<_> = self.service.list_reservations().collect();
                json!({ "ok": active })
            }
            Command::List {
                room_id: Some(room_id),
            } => {
                let active: Vec<_> = self.service.room_reservations(&room_id).collect();
                json!({ "ok": active })
            }
            Command::History => {
                let all: Vec<_> = self.service.reservation_history().collect();
                json!({ "ok": all })
            }
            Command::Rooms => {
                let rooms: Vec<_> = self.service.rooms().collect();
                json!({ "ok": rooms })
            }
        }
    }
}

fn error_value(e: &DomainError) -> Value {
    json!({ "error": { "kind": e.kind().as_str(), "message": e.to_string() } })
}

#[cfg(test)]
mod tests {
    use room_reservations::config::BookingConfig;
    use room_reservations::AppConfig;

    use super::*;

    fn runner() -> Runner {
        let config = AppConfig {
            booking: BookingConfig {
                reject_past_dates: false,
            },
            ..AppConfig::default()
        };
        Runner::new(ReservationService::from_config(&config).unwrap())
    }

    fn run(runner: &mut Runner, line: &str) -> Value {
        runner.run_line(1, line).expect("command line")
    }

    #[test]
    fn booking_script() {
        let mut runner = runner();
        run(&mut runner, r#"room A1 "Sala Azul" 12"#);
        run(&mut runner, "room B1 \"Sala Vermelha\"");

        let first = run(&mut runner, "reserve A1 2025-01-01T09:00 2025-01-01T10:00 Alice");
        assert_eq!(first["ok"]["id"], 1);
        assert_eq!(first["ok"]["status"], "active");

        let taken = run(&mut runner, "reserve A1 2025-01-01T09:30 2025-01-01T10:30 Bob");
        assert_eq!(taken["error"]["kind"], "conflict");

        let adjacent = run(&mut runner, "reserve A1 2025-01-01T10:00 2025-01-01T11:00 Bob");
        assert_eq!(adjacent["ok"]["id"], 2);

        let cancelled = run(&mut runner, "cancel 1");
        assert_eq!(cancelled["ok"]["status"], "cancelled");

        let again = run(&mut runner, "cancel 1");
        assert_eq!(again["error"]["kind"], "state");

        let list = run(&mut runner, "list A1");
        assert_eq!(list["ok"].as_array().map(Vec::len), Some(1));

        let history = run(&mut runner, "history");
        assert_eq!(history["ok"].as_array().map(Vec::len), Some(2));

        let rooms = run(&mut runner, "rooms");
        assert_eq!(rooms["ok"][0]["name"], "Sala Azul");
        assert_eq!(rooms["ok"][1].get("capacity"), None);
    }

    #[test]
    fn validation_errors_are_reported() {
        let mut runner = runner();
        let empty = run(&mut runner, r#"room A1 "  ""#);
        assert_eq!(empty["error"]["kind"], "validation");

        let unknown = run(&mut runner, "reserve X 2025-01-01T09:00 2025-01-01T10:00 Alice");
        assert_eq!(unknown["error"]["kind"], "validation");
        assert_eq!(unknown["error"]["message"], "Validation: Room not found: X");
    }

    #[test]
    fn missing_requester_is_reported() {
        let mut runner = runner();
        run(&mut runner, "room A1 Azul");
        let res = run(&mut runner, "reserve A1 2025-01-01T09:00 2025-01-01T10:00");
        assert_eq!(
            res["error"]["message"],
            "Validation: Missing required field: requester"
        );
    }

    #[test]
    fn parse_errors_carry_line_number() {
        let mut runner = runner();
        let res = runner.run_line(7, "book A1").unwrap();
        assert_eq!(res["error"]["kind"], "parse");
        assert_eq!(res["error"]["line"], 7);
    }

    #[test]
    fn comments_produce_no_output() {
        let mut runner = runner();
        assert!(runner.run_line(1, "# nothing").is_none());
    }
}
