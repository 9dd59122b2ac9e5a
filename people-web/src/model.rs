//! The person entity.

use serde::{Deserialize, Serialize};

/// The lowest age accepted for a person.
pub const AGE_MIN: i32 = 0;

/// The highest age accepted for a person.
pub const AGE_MAX: i32 = 140;

/// A person record.
///
/// Instances without an identifier have not been persisted yet: the store
/// assigns the identifier on creation. The controller never mutates a person
/// after creation, as neither update nor deletion is part of this surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The identifier, absent before creation and unique once assigned.
    pub id: Option<i64>,

    /// The display name.
    pub name: String,

    /// The age, in years.
    pub age: i32,
}

impl Person {
    /// Create a not-yet-persisted person.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_serializes_with_null_id_before_creation() {
        let person = Person::new("Ada", 30);

        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            serde_json::json!({"id": null, "name": "Ada", "age": 30}),
        );
    }

    #[test]
    fn test_person_serializes_with_integer_id_once_assigned() {
        let person = Person {
            id: Some(7),
            ..Person::new("Grace", 36)
        };

        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            serde_json::json!({"id": 7, "name": "Grace", "age": 36}),
        );
    }

    #[test]
    fn test_person_deserializes_from_the_wire_shape() {
        let person: Person =
            serde_json::from_str(r#"{"id": 3, "name": "Alan", "age": 41}"#).unwrap();

        assert_eq!(person.id, Some(3));
        assert_eq!(person.name, "Alan");
        assert_eq!(person.age, 41);
    }
}
