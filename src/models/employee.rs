use std::fmt;

use chrono::{Datelike, NaiveDate};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::utils::validation::{validate_birth_date, validate_payload, BIRTH_DATE_FORMAT};

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

/// One employee record. Rows carry an autoincrement id in storage, but it is
/// never read back.
#[derive(sqlx::FromRow, Validate, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(custom = "validate_birth_date")]
    pub birth_date: String,
    #[validate(length(min = 1))]
    pub gender: String,
}

impl Employee {
    /// Builds a validated employee. Unparseable birth dates are rejected here
    /// rather than when the age is first needed.
    pub fn new(
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        gender: impl Into<String>,
    ) -> AppResult<Self> {
        let employee = Employee {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
            gender: gender.into(),
        };
        validate_payload(&employee)?;
        Ok(employee)
    }

    pub fn parsed_birth_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.birth_date, BIRTH_DATE_FORMAT).map_err(|err| {
            AppError::DateParseError(format!("'{}' for {}: {}", self.birth_date, self.full_name, err))
        })
    }

    pub fn age_on(&self, today: NaiveDate) -> AppResult<i32> {
        Ok(age_between(self.parsed_birth_date()?, today))
    }
}

/// Whole years elapsed, dropping one when today's (month, day) precedes the
/// birthday's.
pub fn age_between(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// A grouped listing row together with its computed age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEmployee {
    pub employee: Employee,
    pub age: i32,
}

impl fmt::Display for ListedEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, age={}",
            self.employee.full_name, self.employee.birth_date, self.employee.gender, self.age
        )
    }
}
