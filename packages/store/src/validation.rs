//! Client-side form validation.
//!
//! Everything here runs before a request is built; a failed check means no
//! network call is made.

use std::collections::BTreeMap;

use crate::models::{LoginRequest, QuestionCreateRequest, RoleType, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const BIRTH_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your login ID and password")]
    MissingCredentials,
    #[error("Please enter a family code")]
    EmptyFamilyCode,
    #[error("Please write an answer")]
    EmptyAnswer,
    #[error("Please enter the question text")]
    EmptyQuestionText,
    #[error("Order index must be a number of 1 or more")]
    InvalidOrderIndex,
    #[error("Family is not ready to start questions yet")]
    NotReadyForQuestions,
    #[error("Request already in progress")]
    InFlight,
    #[error("Please check the highlighted fields")]
    Fields(FieldErrors),
}

/// Signup form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    LoginId,
    Password,
    PasswordConfirm,
    Name,
    BirthYear,
    RoleType,
}

pub type FieldErrors = BTreeMap<SignupField, &'static str>;

/// Raw signup form input, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub login_id: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
    pub birth_year: String,
    pub role_type: Option<RoleType>,
}

impl SignupForm {
    /// Validate every field and build the request, or report all field errors.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let mut errors = FieldErrors::new();

        if self.login_id.trim().is_empty() {
            errors.insert(SignupField::LoginId, "Login ID is required");
        }
        if self.password.is_empty() {
            errors.insert(SignupField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(SignupField::Password, "Password must be at least 6 characters");
        }
        if self.password != self.password_confirm {
            errors.insert(SignupField::PasswordConfirm, "Passwords do not match");
        }
        if self.name.trim().is_empty() {
            errors.insert(SignupField::Name, "Name is required");
        }

        let birth_year = self.birth_year.trim();
        let parsed_year = if birth_year.is_empty() {
            errors.insert(SignupField::BirthYear, "Birth year is required");
            None
        } else {
            match birth_year.parse::<i32>() {
                Ok(year) if BIRTH_YEAR_RANGE.contains(&year) => Some(year),
                _ => {
                    errors.insert(SignupField::BirthYear, "Please enter a valid birth year");
                    None
                }
            }
        };

        if self.role_type.is_none() {
            errors.insert(SignupField::RoleType, "Please choose a role");
        }

        match (parsed_year, self.role_type) {
            (Some(birth_year), Some(role_type)) if errors.is_empty() => Ok(SignupRequest {
                login_id: self.login_id.trim().to_string(),
                password: self.password.clone(),
                name: self.name.trim().to_string(),
                birth_year,
                role_type,
            }),
            _ => Err(ValidationError::Fields(errors)),
        }
    }
}

/// Validate login input.
pub fn validate_login(login_id: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let login_id = login_id.trim();
    if login_id.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest {
        login_id: login_id.to_string(),
        password: password.to_string(),
    })
}

/// Validate the admin "add question" form.
pub fn validate_question_create(
    text: &str,
    order_index: &str,
) -> Result<QuestionCreateRequest, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyQuestionText);
    }
    let order_index = match order_index.trim() {
        "" => None,
        raw => match raw.parse::<i32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => return Err(ValidationError::InvalidOrderIndex),
        },
    };
    Ok(QuestionCreateRequest {
        text: text.to_string(),
        order_index,
    })
}
