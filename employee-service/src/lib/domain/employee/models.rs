use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::errors::EmployeeFieldError;
use crate::domain::user::models::has_alphabetic_tld;

/// Employee record as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: FullName,
    pub job_role: JobRole,
    pub department: Department,
    pub contact: Contact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id taken from a request path.
    ///
    /// A malformed id is indistinguishable from an unknown one.
    pub fn from_string(s: &str) -> Result<Self, EmployeeError> {
        Uuid::parse_str(s.trim())
            .map(EmployeeId)
            .map_err(|_| EmployeeError::NotFound(s.to_string()))
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trim `value` and check it against a length range and a character class.
fn validated_text(
    value: String,
    field: &'static str,
    min: usize,
    max: usize,
    allowed: &'static str,
    is_allowed: fn(char) -> bool,
) -> Result<String, EmployeeFieldError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(EmployeeFieldError::Empty { field });
    }

    let length = value.chars().count();
    if !(min..=max).contains(&length) {
        return Err(EmployeeFieldError::InvalidLength {
            field,
            min,
            max,
            actual: length,
        });
    }

    if !value.chars().all(is_allowed) {
        return Err(EmployeeFieldError::InvalidCharacters { field, allowed });
    }

    Ok(value)
}

/// ASCII letters plus the Latin-1 range `À`..=`ÿ`.
fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c)
}

fn is_name_char(c: char) -> bool {
    is_name_letter(c) || c.is_whitespace()
}

fn is_title_char(c: char) -> bool {
    is_name_char(c) || c == '-' || c == '.'
}

/// Employee full name: 2-100 letters and spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(value: String) -> Result<Self, EmployeeFieldError> {
        validated_text(
            value,
            "Nome completo",
            2,
            100,
            "letras e espaços",
            is_name_char,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Job title: 2-100 letters, spaces, hyphens and dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRole(String);

impl JobRole {
    pub fn new(value: String) -> Result<Self, EmployeeFieldError> {
        validated_text(
            value,
            "Cargo",
            2,
            100,
            "letras, espaços, hífens e pontos",
            is_title_char,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department(String);

impl Department {
    pub fn new(value: String) -> Result<Self, EmployeeFieldError> {
        validated_text(
            value,
            "Departamento",
            2,
            100,
            "letras, espaços, hífens e pontos",
            is_title_char,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact channel: an e-mail address or an international phone number.
///
/// Phone numbers are an optional `+`, a non-zero digit and up to fifteen more
/// digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact(String);

impl Contact {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 100;

    pub fn new(value: String) -> Result<Self, EmployeeFieldError> {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(EmployeeFieldError::Empty { field: "Contato" });
        }

        let length = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(EmployeeFieldError::InvalidLength {
                field: "Contato",
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if is_phone_number(&value) || is_email(&value) {
            Ok(Self(value))
        } else {
            Err(EmployeeFieldError::InvalidContact)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_phone_number(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let mut chars = digits.chars();

    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }

    let rest = chars.as_str();
    rest.len() <= 15 && rest.chars().all(|c| c.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    email_address::EmailAddress::from_str(value)
        .map(|parsed| has_alphabetic_tld(parsed.domain()))
        .unwrap_or(false)
}

/// Validated fields of an employee about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub full_name: FullName,
    pub job_role: JobRole,
    pub department: Department,
    pub contact: Contact,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeCommand {
    pub full_name: Option<FullName>,
    pub job_role: Option<JobRole>,
    pub department: Option<Department>,
    pub contact: Option<Contact>,
}

impl UpdateEmployeeCommand {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.job_role.is_none()
            && self.department.is_none()
            && self.contact.is_none()
    }
}
