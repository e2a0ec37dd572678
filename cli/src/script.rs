//! Line-oriented command script parsing
//!
//! ```text
//! # comment
//! room A1 "Sala Azul" 12
//! reserve A1 2025-01-01T09:00 2025-01-01T10:00 Alice
//! cancel 1
//! list A1
//! history
//! rooms
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use room_reservations::ReservationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Room {
        id: String,
        name: String,
        capacity: Option<u32>,
    },
    Reserve {
        room_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        requester: Option<String>,
    },
    Cancel {
        id: ReservationId,
    },
    List {
        room_id: Option<String>,
    },
    History,
    Rooms,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid time {0:?}, expected YYYY-MM-DDTHH:MM")]
    InvalidTime(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Split on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if pending {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (verb.to_lowercase().as_str(), args) {
        ("room", [id, name]) => Command::Room {
            id: id.clone(),
            name: name.clone(),
            capacity: None,
        },
        ("room", [id, name, capacity]) => Command::Room {
            id: id.clone(),
            name: name.clone(),
            capacity: Some(parse_number(capacity)?),
        },
        ("room", _) => return Err(ParseError::Usage("room <id> <name> [capacity]")),

        ("reserve", [room_id, start, end, rest @ ..]) if rest.len() <= 1 => Command::Reserve {
            room_id: room_id.clone(),
            start: parse_time(start)?,
            end: parse_time(end)?,
            requester: rest.first().cloned(),
        },
        ("reserve", _) => {
            return Err(ParseError::Usage("reserve <room> <start> <end> [requester]"))
        }

        ("cancel", [id]) => Command::Cancel {
            id: id
                .parse()
                .map_err(|_| ParseError::InvalidNumber(id.clone()))?,
        },
        ("cancel", _) => return Err(ParseError::Usage("cancel <reservation id>")),

        ("list", []) => Command::List { room_id: None },
        ("list", [room_id]) => Command::List {
            room_id: Some(room_id.clone()),
        },
        ("list", _) => return Err(ParseError::Usage("list [room]")),

        ("history", []) => Command::History,
        ("rooms", []) => Command::Rooms,
        ("history", _) => return Err(ParseError::Usage("history")),
        ("rooms", _) => return Err(ParseError::Usage("rooms")),

        (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
pub fn parse_time(text: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ParseError::InvalidTime(text.to_string()))
}

fn parse_number(text: &str) -> Result<u32, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}
