// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::Entity;
use crate::error::DomainError;
use crate::validation::{MAX_NAME_LEN, validate_display_name, validate_identifier};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Staff roles for authorization.
///
/// Roles determine which commands a logged-in staff member may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular staff: day-to-day inventory, order and sale work.
    User,
    /// Administrators: everything a user can do, plus staff management.
    Admin,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns true if this role meets a `required` role.
    ///
    /// `Admin` satisfies every requirement.
    #[must_use]
    pub const fn satisfies(&self, required: Self) -> bool {
        matches!((self, required), (Self::Admin, _) | (Self::User, Self::User))
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login name of a staff member, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username {
    value: String,
}

impl Username {
    /// Creates a new `Username`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUsername` if the value is empty, too long,
    /// or contains anything other than ASCII alphanumerics, `_` and `.`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value: String = value.trim().to_lowercase();
        validate_identifier(&value, MAX_NAME_LEN, &['_', '.'])
            .map_err(DomainError::InvalidUsername)?;
        Ok(Self { value })
    }

    /// Returns the username value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.value
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// An opaque credential.
///
/// Passwords compare by equality only and never appear in `Debug` output,
/// so they cannot leak through tracing fields or error messages.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password {
    value: String,
}

impl Password {
    /// Creates a new `Password`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPassword` if the value is empty or only
    /// whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidPassword(String::from(
                "Password cannot be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

impl TryFrom<String> for Password {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.value
    }
}

/// Display name of a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StaffName {
    value: String,
}

impl StaffName {
    /// Creates a new `StaffName`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank or too long.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Ok(Self {
            value: validate_display_name(value)?,
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for StaffName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<StaffName> for String {
    fn from(name: StaffName) -> Self {
        name.value
    }
}

impl std::fmt::Display for StaffName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A staff account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Staff {
    /// Login name and identity.
    pub username: Username,
    /// Credential checked at login. Read from seeds but never written out.
    #[serde(skip_serializing)]
    pub password: Password,
    /// Name shown to other staff.
    pub name: StaffName,
    /// Authorization role.
    pub role: Role,
}

impl Staff {
    /// Creates a new `Staff` account.
    #[must_use]
    pub const fn new(username: Username, password: Password, name: StaffName, role: Role) -> Self {
        Self {
            username,
            password,
            name,
            role,
        }
    }

    /// Returns true if `username` and `password` both match this account.
    #[must_use]
    pub fn matches_credentials(&self, username: &Username, password: &Password) -> bool {
        &self.username == username && &self.password == password
    }
}

impl Entity for Staff {
    const KIND: &'static str = "Staff";

    fn same_entity(&self, other: &Self) -> bool {
        self.username == other.username
    }

    fn identity(&self) -> String {
        self.username.to_string()
    }
}

impl std::fmt::Display for Staff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.username, self.role)
    }
}
