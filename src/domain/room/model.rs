//! Room domain entity

use serde::Serialize;

use crate::support::errors::ValidationError;

/// A bookable room. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<u32>,
}

impl Room {
    /// Build a room, rejecting a blank id or name and a zero capacity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if capacity == Some(0) {
            return Err(ValidationError::InvalidCapacity);
        }

        Ok(Self { id, name, capacity })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_keeps_fields() {
        let room = Room::new("A1", "Sala Azul", Some(12)).unwrap();
        assert_eq!(room.id(), "A1");
        assert_eq!(room.name(), "Sala Azul");
        assert_eq!(room.capacity(), Some(12));
    }

    #[test]
    fn capacity_is_optional() {
        let room = Room::new("B1", "Sala Vermelha", None).unwrap();
        assert_eq!(room.capacity(), None);
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(Room::new("A1", "", None), Err(ValidationError::EmptyName));
    }

    #[test]
    fn whitespace_name_rejected() {
        assert_eq!(
            Room::new("A1", "   \t", Some(4)),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn blank_id_rejected() {
        assert_eq!(
            Room::new(" ", "Sala Azul", None),
            Err(ValidationError::MissingField("id"))
        );
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            Room::new("A1", "Sala Azul", Some(0)),
            Err(ValidationError::InvalidCapacity)
        );
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let room = Room::new("A1", "  Sala Azul ", None).unwrap();
        assert_eq!(room.name(), "  Sala Azul ");
    }
}
