use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEPARTMENTS: [&str; 3] = ["HR", "Engineering", "Marketing"];

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

/// Write payload for create and update. Every column except the
/// store-assigned `id` must be supplied; partial updates are not supported.
#[derive(Deserialize, Serialize, Validate, Debug, Clone)]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 10, message = "employee_id is required and at most 10 characters"))]
    pub employee_id: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(custom = "validate_department")]
    pub department: String,
    #[validate(custom = "validate_date_of_joining")]
    pub date_of_joining: NaiveDate,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new(
            "Invalid phone number format. Please enter a 10-digit phone number.",
        ));
    }
    Ok(())
}

fn validate_department(department: &str) -> Result<(), ValidationError> {
    if !DEPARTMENTS.contains(&department) {
        return Err(ValidationError::new(
            "Department must be one of HR, Engineering or Marketing",
        ));
    }
    Ok(())
}

fn validate_date_of_joining(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("Date of joining cannot be in the future"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> NewEmployee {
        NewEmployee {
            name: "Alice".to_string(),
            employee_id: "E001".to_string(),
            email: "a@x.com".to_string(),
            phone: "1234567890".to_string(),
            department: "HR".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            role: "Analyst".to_string(),
        }
    }

    #[test]
    fn accepts_a_fully_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn rejects_empty_required_fields() {
        for field in ["name", "employee_id", "role"] {
            let mut payload = valid_payload();
            match field {
                "name" => payload.name.clear(),
                "employee_id" => payload.employee_id.clear(),
                _ => payload.role.clear(),
            }
            let errs = payload.validate().unwrap_err();
            assert!(errs.field_errors().contains_key(field), "{field} not flagged");
        }
    }

    #[test]
    fn rejects_malformed_phone_numbers() {
        for phone in ["123456789", "12345678901", "12345abcde", "123 456 78", ""] {
            let mut payload = valid_payload();
            payload.phone = phone.to_string();
            let errs = payload.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("phone"), "{phone:?} accepted");
        }
    }

    #[test]
    fn rejects_invalid_email() {
        let mut payload = valid_payload();
        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_unknown_department() {
        let mut payload = valid_payload();
        payload.department = "Sales".to_string();
        let errs = payload.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("department"));
    }

    #[test]
    fn accepts_every_known_department() {
        for department in DEPARTMENTS {
            let mut payload = valid_payload();
            payload.department = department.to_string();
            assert!(payload.validate().is_ok(), "{department} rejected");
        }
    }

    #[test]
    fn rejects_future_date_of_joining() {
        let mut payload = valid_payload();
        payload.date_of_joining = Utc::now().date_naive() + chrono::Duration::days(1);
        let errs = payload.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("date_of_joining"));
    }

    #[test]
    fn accepts_today_as_date_of_joining() {
        let mut payload = valid_payload();
        payload.date_of_joining = Utc::now().date_naive();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_overlong_employee_id() {
        let mut payload = valid_payload();
        payload.employee_id = "EMP00000001".to_string();
        let errs = payload.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("employee_id"));
    }
}
