//! Form binding and validation for person input.

use serde::{Deserialize, Serialize};

use crate::model::{AGE_MAX, AGE_MIN, Person};

/// The transient form projection of a [`Person`], as submitted by a browser.
///
/// The `age` field is kept as the raw submitted text so that non-numeric input
/// surfaces as a field-level validation error instead of a binding failure,
/// and so that a rejected form can be re-rendered with the user's input
/// intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForm {
    /// The identifier, present only when the form was pre-filled for editing.
    pub id: Option<i64>,

    /// The submitted name.
    #[serde(default)]
    pub name: String,

    /// The submitted age, as entered.
    #[serde(default)]
    pub age: String,
}

impl PersonForm {
    /// Pre-fill the form with an existing person's values, for editing.
    pub fn from_person(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            age: person.age.to_string(),
        }
    }

    /// Validate the submitted input.
    ///
    /// Returns the person to create, or the field-level errors to surface on
    /// the re-rendered form. The submitted identifier is deliberately dropped
    /// from the result: the store assigns identifiers and this surface never
    /// updates an existing person.
    pub fn validate(&self) -> Result<Person, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.push("name", "must not be empty");
        }

        match self.age.trim().parse::<i32>() {
            Ok(age) if (AGE_MIN..=AGE_MAX).contains(&age) => {
                if errors.is_empty() {
                    return Ok(Person::new(self.name.clone(), age));
                }
            }
            Ok(_) => {
                errors.push("age", format!("must be between {AGE_MIN} and {AGE_MAX}"));
            }
            Err(_) => {
                errors.push("age", "must be a whole number");
            }
        }

        Err(errors)
    }
}

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The name of the offending form field.
    pub field: &'static str,

    /// The message to display next to the field.
    pub message: String,
}

/// The validation errors for one form submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    /// Whether the submission passed validation.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the message for a field, if that field was rejected.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Iterate over all errors, in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, age: &str) -> PersonForm {
        PersonForm {
            id: None,
            name: name.to_string(),
            age: age.to_string(),
        }
    }

    // Accepting valid input.

    #[test]
    fn test_valid_input_produces_a_person_without_id() {
        let person = form("Ada", "30").validate().unwrap();

        assert_eq!(person, Person::new("Ada", 30));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        assert_eq!(form("Newborn", "0").validate().unwrap().age, 0);
        assert_eq!(form("Jeanne", "140").validate().unwrap().age, 140);
    }

    #[test]
    fn test_surrounding_whitespace_around_age_is_tolerated() {
        assert_eq!(form("Ada", " 30 ").validate().unwrap().age, 30);
    }

    #[test]
    fn test_a_submitted_id_is_dropped_from_the_created_person() {
        let form = PersonForm {
            id: Some(12),
            ..form("Ada", "30")
        };

        assert_eq!(form.validate().unwrap().id, None);
    }

    // Rejecting invalid input.

    #[test]
    fn test_empty_name_is_rejected() {
        let errors = form("", "30").validate().unwrap_err();

        assert_eq!(errors.field("name"), Some("must not be empty"));
        assert_eq!(errors.field("age"), None);
    }

    #[test]
    fn test_age_out_of_range_is_rejected() {
        for age in ["-1", "141", "1000"] {
            let errors = form("Ada", age).validate().unwrap_err();

            assert_eq!(errors.field("age"), Some("must be between 0 and 140"));
        }
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        for age in ["", "abc", "3.5"] {
            let errors = form("Ada", age).validate().unwrap_err();

            assert_eq!(errors.field("age"), Some("must be a whole number"));
        }
    }

    #[test]
    fn test_all_offending_fields_are_reported_together() {
        let errors = form("", "nope").validate().unwrap_err();

        assert_eq!(errors.iter().count(), 2);
        assert!(errors.field("name").is_some());
        assert!(errors.field("age").is_some());
    }

    // Binding from form-encoded bodies.

    #[test]
    fn test_binding_fills_missing_fields_with_defaults() {
        let form: PersonForm = serde_html_form::from_str("").unwrap();

        assert_eq!(form, PersonForm::default());
    }

    #[test]
    fn test_binding_round_trips_a_pre_filled_form() {
        let form = PersonForm::from_person(&Person {
            id: Some(4),
            ..Person::new("Ada Lovelace", 36)
        });

        let encoded = serde_html_form::to_string(&form).unwrap();
        let decoded: PersonForm = serde_html_form::from_str(&encoded).unwrap();

        assert_eq!(decoded, form);
    }
}
