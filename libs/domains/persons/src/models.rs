use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Person entity - a record held in the in-memory store
///
/// `id` is `None` until the store assigns one on first save, and is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    /// Unique identifier assigned by the store
    pub id: Option<i64>,
    /// First name
    pub name: String,
    /// Last name
    pub last_name: String,
    /// Age in years
    pub age: i32,
    /// Height in meters
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Date of birth
    pub birth_date: DateTime<Utc>,
}

/// DTO for creating a new person
///
/// Carries no id on purpose: identity is always server-assigned.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePerson {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(length(min = 2, max = 50))]
    pub last_name: String,
    #[validate(range(min = 0, max = 120))]
    pub age: i32,
    #[validate(range(exclusive_min = 0.0, max = 3.0))]
    pub height_m: f64,
    #[validate(range(exclusive_min = 0.0, max = 500.0))]
    pub weight_kg: f64,
    #[validate(custom(function = "validate_past"))]
    pub birth_date: DateTime<Utc>,
}

/// DTO for updating an existing person
///
/// A PUT-style full replacement: every business field is required and the
/// stored record is rebuilt from it under the existing id.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePerson {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(length(min = 2, max = 50))]
    pub last_name: String,
    #[validate(range(min = 0, max = 120))]
    pub age: i32,
    #[validate(range(exclusive_min = 0.0, max = 3.0))]
    pub height_m: f64,
    #[validate(range(exclusive_min = 0.0, max = 500.0))]
    pub weight_kg: f64,
    #[validate(custom(function = "validate_past"))]
    pub birth_date: DateTime<Utc>,
}

fn validate_past(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value >= Utc::now() {
        return Err(ValidationError::new("past"));
    }
    Ok(())
}

impl Person {
    /// Create a new person from the CreatePerson DTO, identity unassigned
    pub fn new(input: CreatePerson) -> Self {
        Self {
            id: None,
            name: input.name,
            last_name: input.last_name,
            age: input.age,
            height_m: input.height_m,
            weight_kg: input.weight_kg,
            birth_date: input.birth_date,
        }
    }

    /// Rebuild the record from an UpdatePerson DTO, keeping the given id
    pub fn from_update(id: i64, input: UpdatePerson) -> Self {
        Self {
            id: Some(id),
            name: input.name,
            last_name: input.last_name,
            age: input.age,
            height_m: input.height_m,
            weight_kg: input.weight_kg,
            birth_date: input.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_input() -> CreatePerson {
        CreatePerson {
            name: "Ken".to_string(),
            last_name: "Iding".to_string(),
            age: 20,
            height_m: 1.70,
            weight_kg: 60.0,
            birth_date: Utc.with_ymd_and_hms(2005, 5, 14, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_new_person_has_no_id() {
        let person = Person::new(valid_input());
        assert_eq!(person.id, None);
        assert_eq!(person.name, "Ken");
    }

    #[test]
    fn test_valid_input_passes_validation() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_short_name_fails_validation() {
        let input = CreatePerson {
            name: "K".to_string(),
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_age_fails_validation() {
        let input = CreatePerson {
            age: -1,
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_future_birth_date_fails_validation() {
        let input = CreatePerson {
            birth_date: Utc::now() + chrono::Duration::days(1),
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_from_update_keeps_id() {
        let update = UpdatePerson {
            name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            age: 25,
            height_m: 1.80,
            weight_kg: 70.0,
            birth_date: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        };
        let person = Person::from_update(7, update);
        assert_eq!(person.id, Some(7));
        assert_eq!(person.name, "Juan");
    }
}
